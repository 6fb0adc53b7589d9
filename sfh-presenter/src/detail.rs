//! What the bar detail panel shows for a selected group.

use sfh_core::grid::CropType;
use sfh_core::group::{CropGroup, GroupAxis};

/// Physical length of one grid cell.
pub const CELL_LENGTH_CM: usize = 10;

/// Format a bar length: centimetres below one metre, metres with one
/// decimal from there on, `-` for an empty bar.
pub fn format_length(cell_count: usize) -> String {
    if cell_count == 0 {
        return "-".to_string();
    }
    let total_cm = cell_count * CELL_LENGTH_CM;
    if total_cm >= 100 {
        format!("{:.1}m", total_cm as f64 / 100.0)
    } else {
        format!("{}cm", total_cm)
    }
}

/// Harvestable share in whole percent, only when the total is positive.
pub fn harvest_ratio(harvest: Option<i64>, total: Option<i64>) -> Option<i64> {
    match (harvest, total) {
        (Some(harvest), Some(total)) if total > 0 => {
            Some((harvest as f64 / total as f64 * 100.0).round() as i64)
        }
        _ => None,
    }
}

/// Images available for a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gallery {
    Empty,
    /// Only the last captured image is known.
    Single(String),
    /// Every file the analyzer looked at, in order.
    Analyzed(Vec<String>),
}

impl Gallery {
    pub fn for_group(group: &CropGroup) -> Self {
        let analyzed = group
            .last_analysis_result
            .as_ref()
            .map(|a| a.image_filenames())
            .unwrap_or_default();
        if !analyzed.is_empty() {
            return Gallery::Analyzed(analyzed);
        }
        match &group.last_image_path {
            Some(path) if !path.is_empty() => Gallery::Single(path.clone()),
            _ => Gallery::Empty,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Gallery::Empty => 0,
            Gallery::Single(_) => 1,
            Gallery::Analyzed(files) => files.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Previous/next buttons are disabled with one image or fewer.
    pub fn can_navigate(&self) -> bool {
        self.len() > 1
    }

    pub fn image_at(&self, index: usize) -> Option<&str> {
        match self {
            Gallery::Empty => None,
            Gallery::Single(path) => Some(path),
            Gallery::Analyzed(files) => files.get(index).map(String::as_str),
        }
    }

    pub fn next_index(&self, index: usize) -> usize {
        match self.len() {
            0 => 0,
            len => (index + 1) % len,
        }
    }

    pub fn prev_index(&self, index: usize) -> usize {
        match self.len() {
            0 => 0,
            len if index == 0 || index >= len => len - 1,
            _ => index - 1,
        }
    }
}

/// Analysis figures shown under the amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisSummary {
    pub unripe: u32,
    pub rotten_found: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarDetail {
    pub crop: CropType,
    pub axis: GroupAxis,
    /// 1-based row (row axis) or column (col axis) of the first cell
    pub position: Option<usize>,
    pub length: String,
    pub harvest_amount: Option<i64>,
    pub total_amount: Option<i64>,
    pub harvest_ratio: Option<i64>,
    pub analysis: Option<AnalysisSummary>,
    pub gallery: Gallery,
}

impl BarDetail {
    /// Detail along the group's own orientation.
    pub fn for_group(group: &CropGroup) -> Self {
        Self::new(group, GroupAxis::for_group(group))
    }

    pub fn new(group: &CropGroup, axis: GroupAxis) -> Self {
        let position = group.first_cell().map(|(row, col)| match axis {
            GroupAxis::Row => row + 1,
            GroupAxis::Col => col + 1,
        });
        Self {
            crop: group.crop_type,
            axis,
            position,
            length: format_length(group.len()),
            harvest_amount: group.harvest_amount,
            total_amount: group.total_amount,
            harvest_ratio: harvest_ratio(group.harvest_amount, group.total_amount),
            analysis: group
                .last_analysis_result
                .as_ref()
                .map(|a| AnalysisSummary {
                    unripe: a.unripe_count(),
                    rotten_found: a.rotten_found(),
                }),
            gallery: Gallery::for_group(group),
        }
    }

    fn position_text(&self) -> String {
        self.position
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".to_string())
    }

    /// Where the bar sits, e.g. `3행` or `4열`.
    pub fn position_name(&self) -> String {
        match self.axis {
            GroupAxis::Row => format!("{}행", self.position_text()),
            GroupAxis::Col => format!("{}열", self.position_text()),
        }
    }

    /// Panel heading, e.g. `3행 상세 정보`.
    pub fn title(&self) -> String {
        format!("{} 상세 정보", self.position_name())
    }

    pub fn position_label(&self) -> &'static str {
        match self.axis {
            GroupAxis::Row => "행 번호",
            GroupAxis::Col => "열 번호",
        }
    }
}
