//! Backend seams.
//!
//! The presenter, UI and CLI talk to the server only through these traits.
//! `client::HttpClient` implements all three over HTTP; tests use in-memory
//! recorders. The futures are not `Send`: in the browser everything runs on
//! the single UI thread.

use crate::analysis::{UploadRequest, UploadResult};
use crate::auth::{CodeCheck, LoginRequest, LoginResponse, LoginStatus, RegisterRequest};
use crate::community::{LikeState, Notification, PostDetail, Post, PostSort, ReportAck};
use crate::error::Result;
use crate::farm::{Farm, Greenhouse};
use crate::grid::{Grid, GridUpdate};
use crate::group::GroupsResponse;
use crate::iot::{CaptureRequest, IotDevice};
use crate::sensor::SensorSnapshot;
use crate::weather::WeatherReport;

/// Farm, greenhouse and crop-analysis endpoints.
#[allow(async_fn_in_trait)]
pub trait FarmBackend {
    async fn farm(&self, farm_id: i64) -> Result<Farm>;

    async fn greenhouses(&self, farm_id: i64) -> Result<Vec<Greenhouse>>;

    async fn weather(&self, city: &str) -> Result<WeatherReport>;

    async fn grid(&self, greenhouse_id: i64) -> Result<Grid>;

    async fn groups(&self, greenhouse_id: i64) -> Result<GroupsResponse>;

    async fn latest_sensor(&self, greenhouse_id: i64) -> Result<SensorSnapshot>;

    async fn update_greenhouse(&self, greenhouse_id: i64, update: &GridUpdate) -> Result<()>;

    async fn delete_greenhouse(&self, greenhouse_id: i64) -> Result<()>;

    async fn iot_devices(&self) -> Result<Vec<IotDevice>>;

    /// Ask a device to photograph a group. Analysis happens asynchronously
    /// on the server; the response only acknowledges the command.
    async fn capture(&self, request: &CaptureRequest) -> Result<()>;

    async fn upload_analyze(&self, request: &UploadRequest) -> Result<UploadResult>;
}

/// Session and registration endpoints.
#[allow(async_fn_in_trait)]
pub trait AuthBackend {
    async fn check_login(&self) -> Result<LoginStatus>;

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse>;

    async fn logout(&self) -> Result<()>;

    async fn send_code(&self, email: &str) -> Result<()>;

    async fn check_code(&self, code: &str) -> Result<CodeCheck>;

    async fn register(&self, request: &RegisterRequest) -> Result<()>;
}

/// Community board and notification endpoints.
#[allow(async_fn_in_trait)]
pub trait CommunityBackend {
    async fn posts(&self, sort: PostSort, search: &str) -> Result<Vec<Post>>;

    async fn post(&self, post_id: i64) -> Result<PostDetail>;

    async fn delete_post(&self, post_id: i64) -> Result<()>;

    async fn toggle_like(&self, post_id: i64) -> Result<LikeState>;

    async fn add_comment(&self, post_id: i64, content: &str) -> Result<()>;

    async fn delete_comment(&self, comment_id: i64) -> Result<()>;

    async fn report_post(&self, post_id: i64) -> Result<ReportAck>;

    async fn report_comment(&self, comment_id: i64) -> Result<ReportAck>;

    async fn notifications(&self) -> Result<Vec<Notification>>;

    async fn dismiss_notification(&self, notification_id: i64) -> Result<()>;
}
