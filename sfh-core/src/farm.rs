use serde::{Deserialize, Serialize};

/// A farm owned by the logged-in user.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Farm {
    pub id: i64,
    pub name: String,
    /// City name, used as the weather lookup key
    #[serde(default)]
    pub location: String,
}

/// A greenhouse inside a farm.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Greenhouse {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub farm_id: Option<i64>,
}

/// Body of `GET /api/greenhouses/list/{farmId}`.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct GreenhouseList {
    #[serde(default)]
    pub greenhouses: Vec<Greenhouse>,
}
