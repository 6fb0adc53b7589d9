//! Ordering of crop groups into merged bars.
//!
//! The server returns groups in no particular order. They are sorted by
//! their first cell (row, then column) so that a re-fetch of unchanged cells
//! never moves a bar on screen. Groups without cells go last and are not
//! drawn.

use sfh_core::group::{CellCoord, CropGroup, GroupAxis, GroupsResponse};

/// Side length of one cell in a merged bar, in pixels.
pub const BAR_CELL_PX: usize = 45;

fn sort_key(group: &CropGroup) -> (bool, CellCoord) {
    match group.first_cell() {
        Some(cell) => (false, cell),
        None => (true, (0, 0)),
    }
}

/// Sort groups by first cell. The sort is stable, so groups that share a
/// first cell keep their relative order.
pub fn sort_groups(groups: &mut [CropGroup]) {
    groups.sort_by_key(sort_key);
}

/// The groups of one greenhouse, in display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupLayout {
    groups: Vec<CropGroup>,
    axis: GroupAxis,
}

impl GroupLayout {
    pub fn new(response: GroupsResponse) -> Self {
        let mut groups = response.groups;
        sort_groups(&mut groups);
        Self {
            groups,
            axis: response.axis,
        }
    }

    pub fn axis(&self) -> GroupAxis {
        self.axis
    }

    pub fn groups(&self) -> &[CropGroup] {
        &self.groups
    }

    /// Groups that are drawn as bars.
    pub fn visible(&self) -> impl Iterator<Item = &CropGroup> {
        self.groups.iter().filter(|g| !g.is_empty())
    }

    pub fn find(&self, group_id: i64) -> Option<&CropGroup> {
        self.groups.iter().find(|g| g.id == group_id)
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// `(width, height)` of a merged bar in pixels.
pub fn bar_size_px(group: &CropGroup) -> (usize, usize) {
    let long_side = group.len() * BAR_CELL_PX;
    if group.is_horizontal {
        (long_side, BAR_CELL_PX)
    } else {
        (BAR_CELL_PX, long_side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sfh_core::grid::CropType;

    fn group(id: i64, cells: &[CellCoord]) -> CropGroup {
        CropGroup {
            id,
            crop_type: CropType::Strawberry,
            is_horizontal: true,
            group_cells: cells.to_vec(),
            harvest_amount: None,
            total_amount: None,
            last_image_path: None,
            last_analysis_result: None,
        }
    }

    fn ids(groups: &[CropGroup]) -> Vec<i64> {
        groups.iter().map(|g| g.id).collect()
    }

    #[test]
    fn order_depends_only_on_first_cell() {
        let a = group(1, &[(0, 0), (0, 1)]);
        let b = group(2, &[(0, 3)]);
        let c = group(3, &[(1, 0), (1, 1)]);
        let d = group(4, &[(2, 2)]);

        let inputs = vec![
            vec![a.clone(), b.clone(), c.clone(), d.clone()],
            vec![d.clone(), c.clone(), b.clone(), a.clone()],
            vec![c.clone(), a.clone(), d.clone(), b.clone()],
            vec![b, d, a, c],
        ];
        for mut groups in inputs {
            sort_groups(&mut groups);
            assert_eq!(ids(&groups), vec![1, 2, 3, 4]);
        }
    }

    #[test]
    fn sorting_twice_changes_nothing() {
        let mut groups = vec![
            group(5, &[(3, 0)]),
            group(6, &[(0, 2)]),
            group(7, &[(0, 2)]),
            group(8, &[]),
        ];
        sort_groups(&mut groups);
        let once = groups.clone();
        sort_groups(&mut groups);
        assert_eq!(groups, once);
        // ties keep input order
        assert_eq!(ids(&groups), vec![6, 7, 5, 8]);
    }

    #[test]
    fn empty_groups_sort_last_and_are_hidden() {
        let layout = GroupLayout::new(GroupsResponse {
            groups: vec![group(1, &[]), group(2, &[(4, 4)]), group(3, &[(0, 0)])],
            axis: GroupAxis::Col,
        });
        assert_eq!(ids(layout.groups()), vec![3, 2, 1]);
        let visible: Vec<i64> = layout.visible().map(|g| g.id).collect();
        assert_eq!(visible, vec![3, 2]);
        assert_eq!(layout.axis(), GroupAxis::Col);
        assert!(layout.find(1).is_some());
        assert!(layout.find(9).is_none());
    }

    #[test]
    fn bar_size_follows_orientation() {
        let mut g = group(1, &[(0, 0), (0, 1), (0, 2)]);
        assert_eq!(bar_size_px(&g), (135, 45));
        g.is_horizontal = false;
        assert_eq!(bar_size_px(&g), (45, 135));
    }
}
