use serde::{Deserialize, Serialize};

/// A camera device the user has subscribed to.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct IotDevice {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

/// Body of `GET /product/api/iot/list`.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct IotList {
    #[serde(default)]
    pub iot_list: Vec<IotDevice>,
}

/// Body of `POST /api/greenhouses/crop_groups/read`.
#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
pub struct CaptureRequest {
    pub group_id: i64,
    pub iot_id: i64,
}
