//! reqwest implementation of the backend traits.
//!
//! Every request carries the session cookie: on WASM through
//! `fetch(..., { credentials: "include" })`, natively through the client's
//! cookie store.

use crate::analysis::{FormValue, UploadRequest, UploadResponse, UploadResult};
use crate::auth::{
    CheckCodeRequest, CodeCheck, LoginRequest, LoginResponse, LoginStatus, RegisterRequest,
    SendCodeRequest,
};
use crate::backend::{AuthBackend, CommunityBackend, FarmBackend};
use crate::community::{
    LikeState, NewComment, Notification, Post, PostDetail, PostList, PostSort, ReportAck,
};
use crate::endpoints;
use crate::error::{ApiError, Result};
use crate::farm::{Farm, Greenhouse, GreenhouseList};
use crate::grid::{Grid, GridUpdate};
use crate::group::GroupsResponse;
use crate::iot::{CaptureRequest, IotDevice, IotList};
use crate::sensor::SensorSnapshot;
use crate::weather::WeatherReport;
use log::{debug, warn};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;

/// HTTP client bound to one backend base URL. Cheap to clone.
#[derive(Clone, Debug)]
pub struct HttpClient {
    base_url: String,
    client: Client,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder
            .cookie_store(true)
            .timeout(std::time::Duration::from_secs(60));
        let client = builder.build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a backend path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        debug!("{} {}", method, path);
        let builder = self.client.request(method, self.url(path));
        #[cfg(target_arch = "wasm32")]
        let builder = builder.fetch_credentials_include();
        builder
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.request(Method::GET, path)
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.request(Method::POST, path)
    }

    fn delete(&self, path: &str) -> RequestBuilder {
        self.request(Method::DELETE, path)
    }
}

async fn send_text(builder: RequestBuilder) -> Result<String> {
    let response = builder.send().await?;
    let status = response.status();
    let url = response.url().path().to_string();
    let body = response.text().await?;
    if !status.is_success() {
        warn!("{} answered {}", url, status);
        return Err(ApiError::from_status(status.as_u16(), &body));
    }
    Ok(body)
}

async fn send_json<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T> {
    let body = send_text(builder).await?;
    Ok(serde_json::from_str(&body)?)
}

async fn send_unit(builder: RequestBuilder) -> Result<()> {
    send_text(builder).await.map(|_| ())
}

fn multipart_form(request: &UploadRequest) -> Result<Form> {
    let mut form = Form::new();
    for field in request.form_fields() {
        form = match field.value {
            FormValue::Text(text) => form.text(field.name, text),
            FormValue::File(image) => {
                let part = Part::bytes(image.bytes.clone())
                    .file_name(image.file_name.clone())
                    .mime_str(image.mime_type())?;
                form.part(field.name, part)
            }
        };
    }
    Ok(form)
}

impl FarmBackend for HttpClient {
    async fn farm(&self, farm_id: i64) -> Result<Farm> {
        send_json(self.get(&endpoints::farm(farm_id))).await
    }

    async fn greenhouses(&self, farm_id: i64) -> Result<Vec<Greenhouse>> {
        let list: GreenhouseList = send_json(self.get(&endpoints::greenhouse_list(farm_id))).await?;
        Ok(list.greenhouses)
    }

    async fn weather(&self, city: &str) -> Result<WeatherReport> {
        send_json(self.get(endpoints::WEATHER).query(&[("city", city)])).await
    }

    async fn grid(&self, greenhouse_id: i64) -> Result<Grid> {
        send_json(self.get(endpoints::GRID).query(&[("id", greenhouse_id)])).await
    }

    async fn groups(&self, greenhouse_id: i64) -> Result<GroupsResponse> {
        send_json(self.get(&endpoints::groups(greenhouse_id))).await
    }

    async fn latest_sensor(&self, greenhouse_id: i64) -> Result<SensorSnapshot> {
        send_json(
            self.get(endpoints::SENSOR_LATEST)
                .query(&[("gh_id", greenhouse_id)]),
        )
        .await
    }

    async fn update_greenhouse(&self, greenhouse_id: i64, update: &GridUpdate) -> Result<()> {
        send_unit(
            self.post(&endpoints::greenhouse_update(greenhouse_id))
                .json(update),
        )
        .await
    }

    async fn delete_greenhouse(&self, greenhouse_id: i64) -> Result<()> {
        send_unit(self.delete(&endpoints::greenhouse(greenhouse_id))).await
    }

    async fn iot_devices(&self) -> Result<Vec<IotDevice>> {
        let list: IotList = send_json(self.get(endpoints::IOT_LIST)).await?;
        Ok(list.iot_list)
    }

    async fn capture(&self, request: &CaptureRequest) -> Result<()> {
        send_unit(self.post(endpoints::CAPTURE).json(request)).await
    }

    async fn upload_analyze(&self, request: &UploadRequest) -> Result<UploadResult> {
        let form = multipart_form(request)?;
        let response: UploadResponse =
            send_json(self.post(endpoints::UPLOAD_ANALYZE).multipart(form)).await?;
        Ok(response.result)
    }
}

impl AuthBackend for HttpClient {
    async fn check_login(&self) -> Result<LoginStatus> {
        send_json(self.get(endpoints::CHECK_LOGIN)).await
    }

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse> {
        send_json(self.post(endpoints::LOGIN).json(request)).await
    }

    async fn logout(&self) -> Result<()> {
        send_unit(self.post(endpoints::LOGOUT)).await
    }

    async fn send_code(&self, email: &str) -> Result<()> {
        let body = SendCodeRequest {
            email: email.to_string(),
        };
        send_unit(self.post(endpoints::SEND_CODE).json(&body)).await
    }

    async fn check_code(&self, code: &str) -> Result<CodeCheck> {
        let body = CheckCodeRequest {
            code: code.to_string(),
        };
        send_json(self.post(endpoints::CHECK_CODE).json(&body)).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<()> {
        send_unit(self.post(endpoints::REGISTER).json(request)).await
    }
}

impl CommunityBackend for HttpClient {
    async fn posts(&self, sort: PostSort, search: &str) -> Result<Vec<Post>> {
        let list: PostList = send_json(
            self.get(endpoints::POSTS)
                .query(&[("sort", sort.as_str()), ("search", search)]),
        )
        .await?;
        Ok(list.posts)
    }

    async fn post(&self, post_id: i64) -> Result<PostDetail> {
        send_json(self.get(&endpoints::post(post_id))).await
    }

    async fn delete_post(&self, post_id: i64) -> Result<()> {
        send_unit(self.delete(&endpoints::post(post_id))).await
    }

    async fn toggle_like(&self, post_id: i64) -> Result<LikeState> {
        send_json(self.post(&endpoints::post_like(post_id))).await
    }

    async fn add_comment(&self, post_id: i64, content: &str) -> Result<()> {
        let body = NewComment {
            content: content.to_string(),
        };
        send_unit(self.post(&endpoints::post_comments(post_id)).json(&body)).await
    }

    async fn delete_comment(&self, comment_id: i64) -> Result<()> {
        send_unit(self.delete(&endpoints::comment(comment_id))).await
    }

    async fn report_post(&self, post_id: i64) -> Result<ReportAck> {
        send_json(self.post(&endpoints::report_post(post_id))).await
    }

    async fn report_comment(&self, comment_id: i64) -> Result<ReportAck> {
        send_json(self.post(&endpoints::report_comment(comment_id))).await
    }

    async fn notifications(&self) -> Result<Vec<Notification>> {
        send_json(self.get(endpoints::NOTIFICATIONS)).await
    }

    async fn dismiss_notification(&self, notification_id: i64) -> Result<()> {
        send_unit(self.delete(&endpoints::notification(notification_id))).await
    }
}
