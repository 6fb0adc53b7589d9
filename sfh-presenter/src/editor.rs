//! Grid edit mode.
//!
//! Editing works on a deep copy of the fetched grid. Nothing reaches the
//! server until the draft is saved, and cancelling just drops it.

use sfh_core::error::{ApiError, Result};
use sfh_core::grid::{Grid, GridUpdate, MAX_CELL_VALUE};

#[derive(Debug, Clone, PartialEq)]
pub struct GridDraft {
    grid: Grid,
}

impl GridDraft {
    pub fn new(original: &Grid) -> Self {
        Self {
            grid: original.clone(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Set one cell, clamping the value to the known crop types.
    pub fn set_cell(&mut self, row: usize, col: usize, value: u8) -> Result<()> {
        let value = value.min(MAX_CELL_VALUE);
        if self.grid.set(row, col, value) {
            Ok(())
        } else {
            Err(ApiError::Validation(format!(
                "({}, {}) is outside the {}x{} grid",
                row, col, self.grid.num_rows, self.grid.num_cols
            )))
        }
    }

    /// Payload for saving the draft. Dimensions are the ones originally
    /// fetched, never recomputed from the cells.
    pub fn to_update(&self, name: &str) -> GridUpdate {
        GridUpdate {
            name: name.to_string(),
            num_rows: self.grid.num_rows,
            num_cols: self.grid.num_cols,
            grid_data: self.grid.cells.clone(),
        }
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five_by_four() -> Grid {
        Grid {
            cells: vec![
                vec![0, 1, 1, 0],
                vec![0, 2, 2, 0],
                vec![1, 1, 0, 0],
                vec![2, 2, 2, 0],
                vec![0, 0, 0, 0],
            ],
            num_rows: 5,
            num_cols: 4,
        }
    }

    #[test]
    fn edit_touches_only_the_copy() {
        let original = five_by_four();
        let mut draft = GridDraft::new(&original);
        draft.set_cell(2, 3, 1).unwrap();
        assert_eq!(original.get(2, 3), Some(0));
        assert_eq!(draft.grid().get(2, 3), Some(1));
    }

    #[test]
    fn saved_payload_differs_only_at_edited_cell() {
        let original = five_by_four();
        let mut draft = GridDraft::new(&original);
        draft.set_cell(2, 3, 1).unwrap();
        let update = draft.to_update("House A");

        assert_eq!((update.num_rows, update.num_cols), (5, 4));
        let mut expected = original.cells.clone();
        expected[2][3] = 1;
        assert_eq!(update.grid_data, expected);
        assert_eq!(update.name, "House A");
    }

    #[test]
    fn values_are_clamped() {
        let mut draft = GridDraft::new(&five_by_four());
        draft.set_cell(0, 0, 9).unwrap();
        assert_eq!(draft.grid().get(0, 0), Some(MAX_CELL_VALUE));
    }

    #[test]
    fn out_of_bounds_is_rejected() {
        let mut draft = GridDraft::new(&five_by_four());
        assert!(matches!(
            draft.set_cell(5, 0, 1),
            Err(ApiError::Validation(_))
        ));
        assert!(draft.set_cell(0, 4, 1).is_err());
        assert_eq!(draft.grid(), &five_by_four());
    }
}
