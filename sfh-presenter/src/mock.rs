//! Recording in-memory backend and fixtures for presenter tests.

use sfh_core::analysis::{FormValue, UploadRequest, UploadResult};
use sfh_core::backend::FarmBackend;
use sfh_core::error::{ApiError, Result};
use sfh_core::farm::{Farm, Greenhouse};
use sfh_core::grid::{CropType, Grid, GridUpdate};
use sfh_core::group::{AnalysisResult, AnalyzedFile, CellCoord, CropGroup, GroupAxis, GroupsResponse};
use sfh_core::iot::{CaptureRequest, IotDevice};
use sfh_core::sensor::{SensorReading, SensorSnapshot};
use sfh_core::weather::WeatherReport;
use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Farm(i64),
    Greenhouses(i64),
    Weather(String),
    Grid(i64),
    Groups(i64),
    Sensor(i64),
    UpdateGreenhouse(i64, GridUpdate),
    DeleteGreenhouse(i64),
    IotDevices,
    Capture(CaptureRequest),
    Upload { group_id: String, image_parts: usize },
}

#[derive(Default)]
pub struct MockBackend {
    pub farm: Option<Farm>,
    pub greenhouses: Vec<Greenhouse>,
    pub grids: HashMap<i64, Grid>,
    pub groups: RefCell<HashMap<i64, GroupsResponse>>,
    pub sensors: HashMap<i64, SensorSnapshot>,
    pub devices: Vec<IotDevice>,
    pub upload_result: Option<UploadResult>,
    pub capture_error: Option<ApiError>,
    pub calls: RefCell<Vec<Call>>,
}

impl MockBackend {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn set_groups(&self, greenhouse_id: i64, response: GroupsResponse) {
        self.groups.borrow_mut().insert(greenhouse_id, response);
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

fn not_found() -> ApiError {
    ApiError::Status {
        status: 404,
        message: "not found".to_string(),
    }
}

impl FarmBackend for MockBackend {
    async fn farm(&self, farm_id: i64) -> Result<Farm> {
        self.record(Call::Farm(farm_id));
        self.farm.clone().ok_or_else(not_found)
    }

    async fn greenhouses(&self, farm_id: i64) -> Result<Vec<Greenhouse>> {
        self.record(Call::Greenhouses(farm_id));
        Ok(self.greenhouses.clone())
    }

    async fn weather(&self, city: &str) -> Result<WeatherReport> {
        self.record(Call::Weather(city.to_string()));
        Ok(WeatherReport::default())
    }

    async fn grid(&self, greenhouse_id: i64) -> Result<Grid> {
        self.record(Call::Grid(greenhouse_id));
        self.grids.get(&greenhouse_id).cloned().ok_or_else(not_found)
    }

    async fn groups(&self, greenhouse_id: i64) -> Result<GroupsResponse> {
        self.record(Call::Groups(greenhouse_id));
        self.groups
            .borrow()
            .get(&greenhouse_id)
            .cloned()
            .ok_or_else(not_found)
    }

    async fn latest_sensor(&self, greenhouse_id: i64) -> Result<SensorSnapshot> {
        self.record(Call::Sensor(greenhouse_id));
        Ok(self
            .sensors
            .get(&greenhouse_id)
            .cloned()
            .unwrap_or(SensorSnapshot::Absent {
                message: "no data".to_string(),
            }))
    }

    async fn update_greenhouse(&self, greenhouse_id: i64, update: &GridUpdate) -> Result<()> {
        self.record(Call::UpdateGreenhouse(greenhouse_id, update.clone()));
        Ok(())
    }

    async fn delete_greenhouse(&self, greenhouse_id: i64) -> Result<()> {
        self.record(Call::DeleteGreenhouse(greenhouse_id));
        Ok(())
    }

    async fn iot_devices(&self) -> Result<Vec<IotDevice>> {
        self.record(Call::IotDevices);
        Ok(self.devices.clone())
    }

    async fn capture(&self, request: &CaptureRequest) -> Result<()> {
        self.record(Call::Capture(*request));
        match &self.capture_error {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }

    async fn upload_analyze(&self, request: &UploadRequest) -> Result<UploadResult> {
        let fields = request.form_fields();
        let group_id = fields
            .iter()
            .find_map(|f| match &f.value {
                FormValue::Text(text) if f.name == "group_id" => Some(text.clone()),
                _ => None,
            })
            .unwrap_or_default();
        let image_parts = fields
            .iter()
            .filter(|f| f.name == "images" && matches!(f.value, FormValue::File(_)))
            .count();
        self.record(Call::Upload {
            group_id,
            image_parts,
        });
        self.upload_result.clone().ok_or(ApiError::Status {
            status: 500,
            message: "analysis failed".to_string(),
        })
    }
}

pub fn farm() -> Farm {
    Farm {
        id: 1,
        name: "햇살농장".to_string(),
        location: "Seoul".to_string(),
    }
}

pub fn greenhouses() -> Vec<Greenhouse> {
    vec![
        Greenhouse {
            id: 10,
            name: "A동".to_string(),
            farm_id: Some(1),
        },
        Greenhouse {
            id: 11,
            name: "B동".to_string(),
            farm_id: Some(1),
        },
    ]
}

pub fn grid_5x4() -> Grid {
    Grid {
        cells: vec![
            vec![2, 2, 0, 0],
            vec![1, 1, 1, 0],
            vec![0, 0, 0, 0],
            vec![1, 1, 1, 1],
            vec![2, 2, 0, 0],
        ],
        num_rows: 5,
        num_cols: 4,
    }
}

fn row_group(id: i64, crop_type: CropType, row: usize, len: usize) -> CropGroup {
    let cells: Vec<CellCoord> = (0..len).map(|col| (row, col)).collect();
    CropGroup {
        id,
        crop_type,
        is_horizontal: true,
        group_cells: cells,
        harvest_amount: Some(2),
        total_amount: Some(5),
        last_image_path: None,
        last_analysis_result: None,
    }
}

/// Groups in the order the server might send them (not display order).
pub fn groups_for(greenhouse_id: i64) -> GroupsResponse {
    let groups = match greenhouse_id {
        10 => vec![
            row_group(103, CropType::Path, 2, 4),
            row_group(42, CropType::Tomato, 4, 2),
            row_group(101, CropType::Tomato, 0, 2),
            row_group(7, CropType::Strawberry, 3, 4),
            row_group(102, CropType::Strawberry, 1, 3),
        ],
        11 => vec![row_group(201, CropType::Strawberry, 0, 6)],
        _ => Vec::new(),
    };
    GroupsResponse {
        groups,
        axis: GroupAxis::Row,
    }
}

/// Same groups, with an analysis attached to `group_id`.
pub fn groups_with_analysis(greenhouse_id: i64, group_id: i64) -> GroupsResponse {
    let mut response = groups_for(greenhouse_id);
    for group in response.groups.iter_mut().filter(|g| g.id == group_id) {
        group.harvest_amount = Some(4);
        group.last_analysis_result = Some(AnalysisResult {
            ripe: Some(4),
            unripe: Some(3),
            analyzed_files: vec![
                AnalyzedFile {
                    filename: "shot-1.jpg".to_string(),
                },
                AnalyzedFile {
                    filename: "shot-2.jpg".to_string(),
                },
            ],
            ..AnalysisResult::default()
        });
    }
    response
}

pub fn reading() -> SensorSnapshot {
    SensorSnapshot::Reading(SensorReading {
        temperature: Some(24.5),
        humidity: Some(63.0),
        timestamp: Some("Tue, 05 Nov 2024 13:02:11 GMT".to_string()),
    })
}

pub fn devices() -> Vec<IotDevice> {
    vec![IotDevice {
        id: 3,
        name: "cam-3".to_string(),
    }]
}

/// A backend serving farm 1 with greenhouses 10 and 11.
pub fn backend() -> MockBackend {
    let mut backend = MockBackend {
        farm: Some(farm()),
        greenhouses: greenhouses(),
        devices: devices(),
        upload_result: Some(UploadResult {
            total_files: 3,
            total_count: 7,
            total_ripe: 4,
            total_unripe: 3,
            has_rotten: false,
        }),
        ..MockBackend::default()
    };
    for greenhouse in greenhouses() {
        backend.grids.insert(greenhouse.id, grid_5x4());
        backend.set_groups(greenhouse.id, groups_for(greenhouse.id));
        backend.sensors.insert(greenhouse.id, reading());
    }
    backend
}
