//! The bar selected in the main view and the side panel it drives.

use crate::detail::{BarDetail, Gallery};
use sfh_core::group::{CropGroup, GroupAxis};

/// Slide direction of the side panel. Presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transition {
    #[default]
    In,
    Out,
}

impl Transition {
    pub fn css_class(self) -> &'static str {
        match self {
            Transition::In => "slide-in",
            Transition::Out => "slide-out",
        }
    }
}

/// A selected bar and where its image gallery is.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSelection {
    group: CropGroup,
    axis: GroupAxis,
    image_index: usize,
}

impl BarSelection {
    pub fn new(group: CropGroup) -> Self {
        let axis = GroupAxis::for_group(&group);
        Self {
            group,
            axis,
            image_index: 0,
        }
    }

    pub fn group(&self) -> &CropGroup {
        &self.group
    }

    pub fn group_id(&self) -> i64 {
        self.group.id
    }

    pub fn axis(&self) -> GroupAxis {
        self.axis
    }

    pub fn image_index(&self) -> usize {
        self.image_index
    }

    /// Point the selection at a re-fetched copy of the same group. The
    /// gallery position survives unless the gallery shrank below it.
    pub fn refresh(&mut self, group: CropGroup) {
        self.group = group;
        if self.image_index >= self.gallery().len() {
            self.image_index = 0;
        }
    }

    pub fn gallery(&self) -> Gallery {
        Gallery::for_group(&self.group)
    }

    pub fn current_image(&self) -> Option<String> {
        self.gallery().image_at(self.image_index).map(str::to_string)
    }

    pub fn next_image(&mut self) {
        let gallery = self.gallery();
        if gallery.can_navigate() {
            self.image_index = gallery.next_index(self.image_index);
        }
    }

    pub fn prev_image(&mut self) {
        let gallery = self.gallery();
        if gallery.can_navigate() {
            self.image_index = gallery.prev_index(self.image_index);
        }
    }

    pub fn detail(&self) -> BarDetail {
        BarDetail::new(&self.group, self.axis)
    }
}

/// What the right-hand panel shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SidePanel<'a> {
    /// Weather and sensor summary.
    Summary,
    Detail(&'a BarSelection),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn group_with_files(files: &[&str]) -> CropGroup {
        let analyzed: Vec<_> = files.iter().map(|f| json!({"filename": f})).collect();
        serde_json::from_value(json!({
            "id": 3,
            "crop_type": 1,
            "is_horizontal": true,
            "group_cells": [[2, 0], [2, 1]],
            "last_analysis_result": {"analyzed_files": analyzed}
        }))
        .unwrap()
    }

    #[test]
    fn starts_at_first_image() {
        let selection = BarSelection::new(group_with_files(&["a.jpg", "b.jpg"]));
        assert_eq!(selection.image_index(), 0);
        assert_eq!(selection.axis(), GroupAxis::Row);
        assert_eq!(selection.current_image().as_deref(), Some("a.jpg"));
    }

    #[test]
    fn navigation_wraps() {
        let mut selection = BarSelection::new(group_with_files(&["a.jpg", "b.jpg", "c.jpg"]));
        selection.prev_image();
        assert_eq!(selection.current_image().as_deref(), Some("c.jpg"));
        selection.next_image();
        assert_eq!(selection.image_index(), 0);
    }

    #[test]
    fn single_image_does_not_move() {
        let mut selection = BarSelection::new(group_with_files(&["only.jpg"]));
        selection.next_image();
        selection.prev_image();
        assert_eq!(selection.image_index(), 0);
    }

    #[test]
    fn refresh_clamps_index_when_gallery_shrinks() {
        let mut selection = BarSelection::new(group_with_files(&["a.jpg", "b.jpg", "c.jpg"]));
        selection.next_image();
        selection.next_image();
        assert_eq!(selection.image_index(), 2);

        selection.refresh(group_with_files(&["a.jpg", "b.jpg", "c.jpg", "d.jpg"]));
        assert_eq!(selection.image_index(), 2);

        selection.refresh(group_with_files(&["z.jpg"]));
        assert_eq!(selection.image_index(), 0);
        assert_eq!(selection.current_image().as_deref(), Some("z.jpg"));
    }
}
