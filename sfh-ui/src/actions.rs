//! Farm page commands.
//!
//! Every command clones the client out of [`AppState`], awaits the matching
//! `ops` fetch without holding a signal borrow, then folds the answer into
//! the presenter. Answers for a greenhouse the user has left are dropped by
//! the presenter's ticket check.

use crate::bridge;
use crate::components::MERGED_BARS_ID;
use crate::state::AppState;
use dioxus::prelude::*;
use gloo_timers::future::sleep;
use log::{debug, info};
use sfh_core::backend::FarmBackend;
use sfh_core::client::HttpClient;
use sfh_presenter::{ops, GreenhousePresenter, LoadTicket};

/// Load the farm header, the greenhouse list, the first greenhouse and the
/// weather for the farm's city.
pub fn load_farm(mut state: AppState, farm_id: i64) {
    state.farm.set(GreenhousePresenter::new(farm_id));
    let Some(client) = state.client() else {
        state.loading.set(false);
        return;
    };
    spawn(async move {
        info!("Loading farm {}", farm_id);
        let context = ops::fetch_farm_context(&client, farm_id).await;
        let ticket = state.farm.write().apply_farm_context(context);
        state.loading.set(false);
        if let Some(ticket) = ticket {
            load_greenhouse(state, &client, ticket).await;
        }

        let city = state.farm.read().weather_city();
        if let Some(city) = city {
            let weather = client.weather(&city).await;
            state.farm.write().apply_weather(weather);
        }
    });
}

async fn load_greenhouse(mut state: AppState, client: &HttpClient, ticket: LoadTicket) {
    let data = ops::fetch_greenhouse(client, ticket).await;
    if state.farm.write().apply_greenhouse_data(data) {
        bridge::center_scroll(MERGED_BARS_ID);
    } else {
        debug!("Dropped stale data for greenhouse {}", ticket.greenhouse_id);
    }
}

pub fn select_greenhouse(mut state: AppState, greenhouse_id: i64) {
    let ticket = state.farm.write().select_greenhouse(greenhouse_id);
    let (Some(ticket), Some(client)) = (ticket, state.client()) else {
        return;
    };
    spawn(async move {
        load_greenhouse(state, &client, ticket).await;
    });
}

pub fn save_grid(mut state: AppState) {
    let request = state.farm.read().save_request();
    let (Some((greenhouse_id, update)), Some(client)) = (request, state.client()) else {
        return;
    };
    spawn(async move {
        let result = client.update_greenhouse(greenhouse_id, &update).await;
        state.farm.write().apply_save(greenhouse_id, result);
    });
}

/// Ask for confirmation, delete the selected greenhouse and load whichever
/// one takes its place.
pub fn delete_greenhouse(mut state: AppState) {
    let selected = state
        .farm
        .read()
        .selected_greenhouse()
        .map(|g| (g.id, g.name.clone()));
    let (Some((greenhouse_id, name)), Some(client)) = (selected, state.client()) else {
        return;
    };
    if !bridge::confirm(&format!("'{}' 하우스를 삭제하시겠습니까?", name)) {
        return;
    }
    spawn(async move {
        let result = client.delete_greenhouse(greenhouse_id).await;
        let next = state.farm.write().apply_delete(greenhouse_id, result);
        if let Some(ticket) = next {
            load_greenhouse(state, &client, ticket).await;
        }
    });
}

/// Fetch the IoT devices and open the device picker.
pub fn open_capture(mut state: AppState) {
    let Some(client) = state.client() else {
        return;
    };
    spawn(async move {
        let devices = client.iot_devices().await;
        state.farm.write().open_capture(devices);
        state.flush_notice();
    });
}

/// Send the capture command, then refresh groups and sensor once after
/// the analysis delay.
pub fn confirm_capture(mut state: AppState) {
    let confirmed = state.farm.write().confirm_capture();
    let (Some((ticket, request)), Some(client)) = (confirmed, state.client()) else {
        return;
    };
    spawn(async move {
        let result = client.capture(&request).await;
        let pending = state.farm.write().apply_capture(ticket, request, result);
        state.flush_notice();
        let Some(refresh) = pending else {
            return;
        };
        sleep(refresh.delay).await;
        let data = ops::fetch_capture_refresh(&client, &refresh).await;
        state.farm.write().apply_capture_refresh(&refresh, data);
    });
}

pub fn submit_upload(mut state: AppState) {
    let Some(client) = state.client() else {
        return;
    };
    let begun = state.farm.write().begin_upload();
    let Some((ticket, request)) = begun else {
        state.flush_notice();
        return;
    };
    spawn(async move {
        let outcome = ops::submit_upload(&client, ticket, &request).await;
        state
            .farm
            .write()
            .apply_upload(ticket, request.group_id, outcome);
        state.flush_notice();
    });
}
