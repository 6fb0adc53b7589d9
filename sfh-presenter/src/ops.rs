//! Async operations against a [`FarmBackend`].
//!
//! The `fetch_*` functions never touch the presenter: they take what they
//! need by value and return an outcome for the matching `apply_*` method.
//! The `drive_*` helpers chain fetch and apply for callers that own the
//! presenter outright (the CLI, tests).

use crate::capture::PendingRefresh;
use crate::fence::LoadTicket;
use crate::presenter::GreenhousePresenter;
use log::info;
use sfh_core::analysis::{UploadRequest, UploadResult};
use sfh_core::backend::FarmBackend;
use sfh_core::error::Result;
use sfh_core::farm::{Farm, Greenhouse};
use sfh_core::grid::Grid;
use sfh_core::group::GroupsResponse;
use sfh_core::sensor::SensorSnapshot;
use std::future::Future;
use std::time::Duration;

pub struct FarmContext {
    pub farm: Result<Farm>,
    pub greenhouses: Result<Vec<Greenhouse>>,
}

pub async fn fetch_farm_context<B: FarmBackend>(backend: &B, farm_id: i64) -> FarmContext {
    FarmContext {
        farm: backend.farm(farm_id).await,
        greenhouses: backend.greenhouses(farm_id).await,
    }
}

/// Grid, groups and sensor snapshot of one greenhouse.
pub struct GreenhouseData {
    pub ticket: LoadTicket,
    pub grid: Result<Grid>,
    pub groups: Result<GroupsResponse>,
    pub sensor: Result<SensorSnapshot>,
}

pub async fn fetch_greenhouse<B: FarmBackend>(backend: &B, ticket: LoadTicket) -> GreenhouseData {
    let id = ticket.greenhouse_id;
    GreenhouseData {
        ticket,
        grid: backend.grid(id).await,
        groups: backend.groups(id).await,
        sensor: backend.latest_sensor(id).await,
    }
}

pub struct CaptureRefresh {
    pub groups: Result<GroupsResponse>,
    pub sensor: Result<SensorSnapshot>,
}

/// The re-fetch run once a capture's delay has elapsed.
pub async fn fetch_capture_refresh<B: FarmBackend>(
    backend: &B,
    refresh: &PendingRefresh,
) -> CaptureRefresh {
    let id = refresh.ticket.greenhouse_id;
    CaptureRefresh {
        groups: backend.groups(id).await,
        sensor: backend.latest_sensor(id).await,
    }
}

pub struct UploadOutcome {
    pub result: Result<UploadResult>,
    /// Re-fetched groups, present only when the analysis succeeded.
    pub groups: Option<Result<GroupsResponse>>,
}

pub async fn submit_upload<B: FarmBackend>(
    backend: &B,
    ticket: LoadTicket,
    request: &UploadRequest,
) -> UploadOutcome {
    let result = backend.upload_analyze(request).await;
    let groups = match result {
        Ok(_) => Some(backend.groups(ticket.greenhouse_id).await),
        Err(_) => None,
    };
    UploadOutcome { result, groups }
}

/// Load the farm, its first greenhouse and the weather.
pub async fn drive_load_farm<B: FarmBackend>(presenter: &mut GreenhousePresenter, backend: &B) {
    let context = fetch_farm_context(backend, presenter.farm_id()).await;
    if let Some(ticket) = presenter.apply_farm_context(context) {
        let data = fetch_greenhouse(backend, ticket).await;
        presenter.apply_greenhouse_data(data);
    }
    if let Some(city) = presenter.weather_city() {
        let weather = backend.weather(&city).await;
        presenter.apply_weather(weather);
    }
}

/// Select a greenhouse and load its data. Returns `false` for an unknown id.
pub async fn drive_select_greenhouse<B: FarmBackend>(
    presenter: &mut GreenhousePresenter,
    backend: &B,
    greenhouse_id: i64,
) -> bool {
    let Some(ticket) = presenter.select_greenhouse(greenhouse_id) else {
        return false;
    };
    let data = fetch_greenhouse(backend, ticket).await;
    presenter.apply_greenhouse_data(data)
}

pub async fn drive_save_grid<B: FarmBackend>(
    presenter: &mut GreenhousePresenter,
    backend: &B,
) -> bool {
    let Some((greenhouse_id, update)) = presenter.save_request() else {
        return false;
    };
    let result = backend.update_greenhouse(greenhouse_id, &update).await;
    presenter.apply_save(greenhouse_id, result)
}

/// Send the confirmed capture, wait with `sleep`, then run the single
/// refresh. Returns `true` when the refresh was applied.
pub async fn drive_capture<B, S, F>(
    presenter: &mut GreenhousePresenter,
    backend: &B,
    sleep: S,
) -> bool
where
    B: FarmBackend,
    S: FnOnce(Duration) -> F,
    F: Future<Output = ()>,
{
    let Some((ticket, request)) = presenter.confirm_capture() else {
        return false;
    };
    let result = backend.capture(&request).await;
    let Some(refresh) = presenter.apply_capture(ticket, request, result) else {
        return false;
    };
    info!("Waiting {:?} for analysis results", refresh.delay);
    sleep(refresh.delay).await;
    let data = fetch_capture_refresh(backend, &refresh).await;
    presenter.apply_capture_refresh(&refresh, data)
}

/// Submit the upload modal. Returns `true` when the analysis succeeded.
pub async fn drive_upload<B: FarmBackend>(
    presenter: &mut GreenhousePresenter,
    backend: &B,
) -> bool {
    let Some((ticket, request)) = presenter.begin_upload() else {
        return false;
    };
    let outcome = submit_upload(backend, ticket, &request).await;
    let succeeded = outcome.result.is_ok();
    presenter.apply_upload(ticket, request.group_id, outcome);
    succeeded
}
