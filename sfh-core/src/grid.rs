//! Greenhouse grid layout.
//!
//! A grid is a `num_rows` x `num_cols` matrix of small integers, one per
//! 10 cm cell: `0` is a walking path, `1` strawberry, `2` tomato. The backend
//! sometimes stores `grid_data` as a JSON-encoded string instead of an array;
//! both forms decode to the same [`Grid`].

use serde::{Deserialize, Serialize};

/// What occupies a grid cell or a crop group.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum CropType {
    Path,
    Strawberry,
    Tomato,
    Other(u8),
}

impl From<u8> for CropType {
    fn from(value: u8) -> Self {
        match value {
            0 => CropType::Path,
            1 => CropType::Strawberry,
            2 => CropType::Tomato,
            n => CropType::Other(n),
        }
    }
}

impl From<CropType> for u8 {
    fn from(value: CropType) -> Self {
        match value {
            CropType::Path => 0,
            CropType::Strawberry => 1,
            CropType::Tomato => 2,
            CropType::Other(n) => n,
        }
    }
}

impl CropType {
    /// Paths can't be photographed or analyzed.
    pub fn is_path(self) -> bool {
        self == CropType::Path
    }

    /// Display label shown on merged bars.
    pub fn label(self) -> String {
        match self {
            CropType::Path => "길".to_string(),
            CropType::Strawberry => "딸기".to_string(),
            CropType::Tomato => "토마토".to_string(),
            CropType::Other(n) => n.to_string(),
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            CropType::Path => "#F9F7E8",
            CropType::Strawberry => "#FF8B8B",
            CropType::Tomato => "#61BFAD",
            CropType::Other(_) => "#CCCCCC",
        }
    }

    /// CSS class used by the bar stylesheet (`type-0`, `type-1`, ...).
    pub fn css_class(self) -> String {
        format!("type-{}", u8::from(self))
    }
}

/// Highest cell value accepted by the grid editor.
pub const MAX_CELL_VALUE: u8 = 2;

/// A greenhouse grid with its declared dimensions.
#[derive(Debug, PartialEq, Eq, Clone, Default, Deserialize)]
#[serde(from = "RawGrid")]
pub struct Grid {
    pub cells: Vec<Vec<u8>>,
    pub num_rows: usize,
    pub num_cols: usize,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum GridData {
    Cells(Vec<Vec<u8>>),
    Encoded(String),
}

/// Body of `GET /api/greenhouses/api/grid?id=`.
#[derive(Deserialize)]
struct RawGrid {
    #[serde(default)]
    grid_data: Option<GridData>,
    #[serde(default)]
    num_rows: usize,
    #[serde(default)]
    num_cols: usize,
}

impl From<RawGrid> for Grid {
    fn from(raw: RawGrid) -> Self {
        let cells = match raw.grid_data {
            Some(GridData::Cells(cells)) => cells,
            Some(GridData::Encoded(text)) => match serde_json::from_str::<Vec<Vec<u8>>>(&text) {
                Ok(cells) => cells,
                Err(e) => {
                    log::warn!("grid_data string is not a JSON matrix: {}", e);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        Grid {
            cells,
            num_rows: raw.num_rows,
            num_cols: raw.num_cols,
        }
    }
}

impl Grid {
    pub fn new(cells: Vec<Vec<u8>>) -> Self {
        let num_rows = cells.len();
        let num_cols = cells.first().map(Vec::len).unwrap_or(0);
        Self {
            cells,
            num_rows,
            num_cols,
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn crop_at(&self, row: usize, col: usize) -> Option<CropType> {
        self.get(row, col).map(CropType::from)
    }

    /// Overwrite a cell, returning `false` when it lies outside the grid.
    pub fn set(&mut self, row: usize, col: usize, value: u8) -> bool {
        match self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Vec::is_empty)
    }
}

/// Body of `POST /api/greenhouses/update/{id}`.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct GridUpdate {
    pub name: String,
    pub num_rows: usize,
    pub num_cols: usize,
    pub grid_data: Vec<Vec<u8>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_array_grid() {
        let grid: Grid = serde_json::from_value(json!({
            "grid_data": [[0, 1], [2, 0]],
            "num_rows": 2,
            "num_cols": 2
        }))
        .unwrap();
        assert_eq!(grid.cells, vec![vec![0, 1], vec![2, 0]]);
        assert_eq!(grid.crop_at(1, 0), Some(CropType::Tomato));
    }

    #[test]
    fn string_grid_matches_array_grid() {
        let from_array: Grid = serde_json::from_value(json!({
            "grid_data": [[1, 1, 0], [0, 2, 2]],
            "num_rows": 2,
            "num_cols": 3
        }))
        .unwrap();
        let from_string: Grid = serde_json::from_value(json!({
            "grid_data": "[[1, 1, 0], [0, 2, 2]]",
            "num_rows": 2,
            "num_cols": 3
        }))
        .unwrap();
        assert_eq!(from_array, from_string);
    }

    #[test]
    fn unparseable_string_keeps_dimensions() {
        let grid: Grid = serde_json::from_value(json!({
            "grid_data": "not a grid",
            "num_rows": 4,
            "num_cols": 5
        }))
        .unwrap();
        assert!(grid.is_empty());
        assert_eq!((grid.num_rows, grid.num_cols), (4, 5));
    }

    #[test]
    fn set_rejects_out_of_bounds() {
        let mut grid = Grid::new(vec![vec![0, 0], vec![0, 0]]);
        assert!(grid.set(1, 1, 2));
        assert!(!grid.set(2, 0, 1));
        assert!(!grid.set(0, 5, 1));
        assert_eq!(grid.get(1, 1), Some(2));
    }

    #[test]
    fn crop_type_wire_values() {
        let types: Vec<CropType> = serde_json::from_value(json!([0, 1, 2, 7])).unwrap();
        assert_eq!(
            types,
            vec![
                CropType::Path,
                CropType::Strawberry,
                CropType::Tomato,
                CropType::Other(7)
            ]
        );
        assert_eq!(serde_json::to_value(CropType::Tomato).unwrap(), json!(2));
        assert_eq!(CropType::Other(7).label(), "7");
        assert_eq!(CropType::Strawberry.css_class(), "type-1");
    }
}
