//! Crop groups: server-computed runs of same-crop cells.
//!
//! The analysis payload attached to a group has drifted over time; the
//! accessors on [`AnalysisResult`] normalize the field variants so callers
//! never look at the raw fields.

use crate::grid::CropType;
use serde::{Deserialize, Serialize};

/// `(row, col)` of a grid cell, sent as a two-element array.
pub type CellCoord = (usize, usize);

/// Marker the analyzer writes into `rotten` when rot was detected.
pub const ROTTEN_FOUND_MARKER: &str = "발견";

/// Whether groups are laid out row-major or column-major.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupAxis {
    #[default]
    Row,
    Col,
}

impl GroupAxis {
    pub fn for_group(group: &CropGroup) -> Self {
        if group.is_horizontal {
            GroupAxis::Row
        } else {
            GroupAxis::Col
        }
    }
}

/// A contiguous run of same-type cells along one axis.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct CropGroup {
    pub id: i64,
    pub crop_type: CropType,
    #[serde(default)]
    pub is_horizontal: bool,
    #[serde(default)]
    pub group_cells: Vec<CellCoord>,
    #[serde(default)]
    pub harvest_amount: Option<i64>,
    #[serde(default)]
    pub total_amount: Option<i64>,
    #[serde(default)]
    pub last_image_path: Option<String>,
    #[serde(default)]
    pub last_analysis_result: Option<AnalysisResult>,
}

impl CropGroup {
    pub fn first_cell(&self) -> Option<CellCoord> {
        self.group_cells.first().copied()
    }

    pub fn len(&self) -> usize {
        self.group_cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.group_cells.is_empty()
    }

    pub fn is_selectable_target(&self) -> bool {
        !self.crop_type.is_path()
    }
}

/// The `rotten` field is a flag from the mobile analyzer and a sentence
/// from the web analyzer.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RottenField {
    Flag(bool),
    Text(String),
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct AnalyzedFile {
    pub filename: String,
}

/// Latest image-analysis result for a group.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub ripe: Option<u32>,
    #[serde(default)]
    pub total_ripe: Option<u32>,
    #[serde(default)]
    pub unripe: Option<u32>,
    #[serde(default)]
    pub total_unripe: Option<u32>,
    #[serde(default)]
    pub has_rotten: Option<bool>,
    #[serde(default)]
    pub rotten: Option<RottenField>,
    #[serde(default)]
    pub analyzed_files: Vec<AnalyzedFile>,
}

fn first_nonzero(a: Option<u32>, b: Option<u32>) -> u32 {
    a.filter(|n| *n > 0).or(b).unwrap_or(0)
}

impl AnalysisResult {
    pub fn ripe_count(&self) -> u32 {
        first_nonzero(self.ripe, self.total_ripe)
    }

    pub fn unripe_count(&self) -> u32 {
        first_nonzero(self.unripe, self.total_unripe)
    }

    pub fn rotten_found(&self) -> bool {
        if self.has_rotten == Some(true) {
            return true;
        }
        match &self.rotten {
            Some(RottenField::Flag(flag)) => *flag,
            Some(RottenField::Text(text)) => text.contains(ROTTEN_FOUND_MARKER),
            None => false,
        }
    }

    pub fn image_filenames(&self) -> Vec<String> {
        self.analyzed_files
            .iter()
            .map(|f| f.filename.clone())
            .collect()
    }
}

/// Body of `GET /api/greenhouses/{id}/groups`.
#[derive(Debug, PartialEq, Clone, Default, Deserialize)]
pub struct GroupsResponse {
    #[serde(default)]
    pub groups: Vec<CropGroup>,
    #[serde(default)]
    pub axis: GroupAxis,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_group_with_analysis() {
        let group: CropGroup = serde_json::from_value(json!({
            "id": 12,
            "crop_type": 1,
            "is_horizontal": true,
            "group_cells": [[0, 1], [0, 2], [0, 3]],
            "harvest_amount": 4,
            "total_amount": 10,
            "last_image_path": "g12.jpg",
            "last_analysis_result": {
                "ripe": 4,
                "unripe": 6,
                "rotten": "썩은 딸기 발견",
                "analyzed_files": [{"filename": "a.jpg"}, {"filename": "b.jpg"}]
            }
        }))
        .unwrap();
        assert_eq!(group.first_cell(), Some((0, 1)));
        assert_eq!(group.len(), 3);
        let analysis = group.last_analysis_result.unwrap();
        assert_eq!(analysis.unripe_count(), 6);
        assert!(analysis.rotten_found());
        assert_eq!(analysis.image_filenames(), vec!["a.jpg", "b.jpg"]);
    }

    #[test]
    fn analysis_field_variants() {
        let totals: AnalysisResult = serde_json::from_value(json!({
            "unripe": 0,
            "total_unripe": 3,
            "total_ripe": 2,
            "has_rotten": false
        }))
        .unwrap();
        assert_eq!(totals.unripe_count(), 3);
        assert_eq!(totals.ripe_count(), 2);
        assert!(!totals.rotten_found());

        let flag: AnalysisResult = serde_json::from_value(json!({"rotten": true})).unwrap();
        assert!(flag.rotten_found());

        let clean: AnalysisResult =
            serde_json::from_value(json!({"rotten": "이상 없음"})).unwrap();
        assert!(!clean.rotten_found());
        assert_eq!(clean.unripe_count(), 0);
    }

    #[test]
    fn groups_response_axis() {
        let resp: GroupsResponse = serde_json::from_value(json!({
            "groups": [{"id": 1, "crop_type": 0, "is_horizontal": false, "group_cells": [[0, 0]]}],
            "axis": "col"
        }))
        .unwrap();
        assert_eq!(resp.axis, GroupAxis::Col);
        assert!(!resp.groups[0].is_selectable_target());
        assert_eq!(GroupAxis::for_group(&resp.groups[0]), GroupAxis::Col);
    }
}
