//! State of the farm detail page.
//!
//! [`GreenhousePresenter`] holds everything the page renders and exposes one
//! method per user command. Methods that depend on a server answer come as
//! a pair: a synchronous step that says what to send, and an `apply_*` step
//! that folds the answer back in. Greenhouse-scoped answers carry a
//! [`LoadTicket`] and are dropped when the user has moved on.

use crate::capture::{CaptureFlow, PendingRefresh};
use crate::editor::GridDraft;
use crate::fence::{Fence, LoadTicket};
use crate::groups::GroupLayout;
use crate::ops::{CaptureRefresh, FarmContext, GreenhouseData, UploadOutcome};
use crate::selection::{BarSelection, SidePanel, Transition};
use crate::upload::UploadFlow;
use log::{debug, info, warn};
use sfh_core::analysis::{ImageFile, UploadRequest};
use sfh_core::error::{ApiError, Result};
use sfh_core::farm::{Farm, Greenhouse};
use sfh_core::grid::{Grid, GridUpdate};
use sfh_core::group::GroupsResponse;
use sfh_core::iot::{CaptureRequest, IotDevice};
use sfh_core::sensor::{SensorReading, SensorSnapshot};
use sfh_core::weather::WeatherReport;

const SAVE_FAILED: &str = "그리드 저장에 실패했습니다.";
const DELETE_FAILED: &str = "하우스 삭제에 실패했습니다.";
const IOT_LIST_FAILED: &str = "IoT 목록을 불러오는데 실패했습니다.";
const NO_IOT_DEVICES: &str = "IoT를 구독해주세요.";
const CAPTURE_SENT: &str = "IoT 촬영 명령이 전송되었습니다. 잠시 후 결과가 업데이트됩니다.";
const CAPTURE_FAILED: &str = "IoT 촬영 명령 전송에 실패했습니다.";
const NETWORK_FAILED: &str = "네트워크 오류가 발생했습니다.";
const UPLOAD_INCOMPLETE: &str = "영역을 선택하고 이미지를 업로드해주세요.";
const UPLOAD_DONE: &str = "이미지 분석이 완료되었습니다!";

/// Sensor panel state for the selected greenhouse.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SensorState {
    #[default]
    Loading,
    /// The fetch failed or the greenhouse has never reported. Carries the
    /// server's explanation when it sent one.
    Unavailable(Option<String>),
    Reading(SensorReading),
}

#[derive(Debug, Clone, Default)]
pub struct GreenhousePresenter {
    farm_id: i64,
    farm: Option<Farm>,
    weather: Option<WeatherReport>,
    greenhouses: Vec<Greenhouse>,
    fence: Fence,
    grid: Option<Grid>,
    layout: GroupLayout,
    sensor: SensorState,
    selection: Option<BarSelection>,
    transition: Transition,
    draft: Option<GridDraft>,
    capture: CaptureFlow,
    upload: UploadFlow,
    error: Option<String>,
    notice: Option<String>,
}

impl GreenhousePresenter {
    pub fn new(farm_id: i64) -> Self {
        Self {
            farm_id,
            ..Self::default()
        }
    }

    pub fn farm_id(&self) -> i64 {
        self.farm_id
    }

    // ---- farm context ----

    /// Fold in the farm and its greenhouse list. Returns a ticket when a
    /// greenhouse got selected and its data needs loading.
    pub fn apply_farm_context(&mut self, context: FarmContext) -> Option<LoadTicket> {
        match context.farm {
            Ok(farm) => {
                info!("Loaded farm {} ({})", farm.id, farm.name);
                self.farm = Some(farm);
            }
            Err(e) => {
                warn!("Failed to load farm {}: {}", self.farm_id, e);
                self.error = Some(e.user_message());
            }
        }
        match context.greenhouses {
            Ok(list) => self.greenhouses = list,
            Err(e) => {
                warn!("Failed to load greenhouses of farm {}: {}", self.farm_id, e);
                self.greenhouses.clear();
                self.error = Some(e.user_message());
            }
        }

        let still_listed = self
            .selected_id()
            .is_some_and(|id| self.greenhouses.iter().any(|g| g.id == id));
        if still_listed {
            return None;
        }
        match self.greenhouses.first().map(|g| g.id) {
            Some(first) => self.select_greenhouse(first),
            None => {
                self.clear_greenhouse();
                None
            }
        }
    }

    /// City to ask the weather service about, once the farm is known.
    pub fn weather_city(&self) -> Option<String> {
        self.farm
            .as_ref()
            .map(|f| f.location.trim().to_string())
            .filter(|l| !l.is_empty())
    }

    pub fn apply_weather(&mut self, weather: Result<WeatherReport>) {
        match weather {
            Ok(report) => self.weather = Some(report),
            Err(e) => {
                warn!("Weather lookup failed: {}", e);
                self.weather = None;
            }
        }
    }

    // ---- greenhouse selection ----

    /// Switch to another greenhouse. Everything scoped to the old one is
    /// dropped and a fresh ticket is handed out for the new loads.
    pub fn select_greenhouse(&mut self, greenhouse_id: i64) -> Option<LoadTicket> {
        if !self.greenhouses.iter().any(|g| g.id == greenhouse_id) {
            warn!("Greenhouse {} is not part of farm {}", greenhouse_id, self.farm_id);
            return None;
        }
        self.reset_greenhouse_scope();
        self.fence.advance(Some(greenhouse_id))
    }

    fn clear_greenhouse(&mut self) {
        self.reset_greenhouse_scope();
        self.fence.advance(None);
    }

    fn reset_greenhouse_scope(&mut self) {
        self.grid = None;
        self.layout = GroupLayout::default();
        self.sensor = SensorState::Loading;
        self.selection = None;
        self.transition = Transition::In;
        self.draft = None;
        self.capture.cancel();
        self.upload.close();
    }

    /// True while an upload analysis is running. Switching greenhouse is
    /// held back until it answers.
    pub fn is_analyzing(&self) -> bool {
        self.upload.is_analyzing()
    }

    pub fn ticket(&self) -> Option<LoadTicket> {
        self.fence.current()
    }

    pub fn selected_id(&self) -> Option<i64> {
        self.fence.current().map(|t| t.greenhouse_id)
    }

    pub fn selected_greenhouse(&self) -> Option<&Greenhouse> {
        let id = self.selected_id()?;
        self.greenhouses.iter().find(|g| g.id == id)
    }

    // ---- greenhouse data ----

    /// Apply grid, groups and sensor answers fetched together. Returns
    /// `false` when the answers belong to a previous selection.
    pub fn apply_greenhouse_data(&mut self, data: GreenhouseData) -> bool {
        if !self.admits(data.ticket) {
            return false;
        }
        self.set_grid(data.grid);
        match data.groups {
            Ok(response) => self.set_groups(response),
            Err(e) => {
                warn!("Failed to load groups of greenhouse {}: {}", data.ticket.greenhouse_id, e);
                self.error = Some(e.user_message());
            }
        }
        self.set_sensor(data.sensor);
        true
    }

    pub fn apply_grid(&mut self, ticket: LoadTicket, grid: Result<Grid>) -> bool {
        if !self.admits(ticket) {
            return false;
        }
        self.set_grid(grid);
        true
    }

    pub fn apply_groups(&mut self, ticket: LoadTicket, groups: Result<GroupsResponse>) -> bool {
        if !self.admits(ticket) {
            return false;
        }
        match groups {
            Ok(response) => self.set_groups(response),
            Err(e) => {
                warn!("Failed to load groups of greenhouse {}: {}", ticket.greenhouse_id, e);
                self.error = Some(e.user_message());
            }
        }
        true
    }

    pub fn apply_sensor(&mut self, ticket: LoadTicket, sensor: Result<SensorSnapshot>) -> bool {
        if !self.admits(ticket) {
            return false;
        }
        self.set_sensor(sensor);
        true
    }

    fn admits(&self, ticket: LoadTicket) -> bool {
        let admitted = self.fence.admits(ticket);
        if !admitted {
            debug!(
                "Dropping stale response for greenhouse {} (generation {})",
                ticket.greenhouse_id, ticket.generation
            );
        }
        admitted
    }

    fn set_grid(&mut self, grid: Result<Grid>) {
        match grid {
            Ok(grid) => self.grid = Some(grid),
            Err(e) => {
                warn!("Failed to load grid: {}", e);
                self.error = Some(e.user_message());
            }
        }
    }

    /// Replace the groups and re-point the selected bar at its refreshed copy.
    fn set_groups(&mut self, response: GroupsResponse) {
        self.layout = GroupLayout::new(response);
        if let Some(selection) = self.selection.as_mut() {
            if let Some(group) = self.layout.find(selection.group_id()) {
                selection.refresh(group.clone());
            }
        }
    }

    fn set_sensor(&mut self, sensor: Result<SensorSnapshot>) {
        self.sensor = match sensor {
            Ok(SensorSnapshot::Reading(reading)) => SensorState::Reading(reading),
            Ok(SensorSnapshot::Absent { message }) => {
                debug!("No sensor data: {}", message);
                let message = message.trim();
                SensorState::Unavailable((!message.is_empty()).then(|| message.to_string()))
            }
            Err(e) => {
                warn!("Failed to load sensor data: {}", e);
                SensorState::Unavailable(None)
            }
        };
    }

    // ---- bar selection ----

    pub fn select_bar(&mut self, group_id: i64) -> bool {
        match self.layout.find(group_id) {
            Some(group) => {
                self.selection = Some(BarSelection::new(group.clone()));
                self.transition = Transition::In;
                true
            }
            None => false,
        }
    }

    pub fn close_bar(&mut self) {
        self.selection = None;
        self.transition = Transition::Out;
    }

    pub fn next_image(&mut self) {
        if let Some(selection) = self.selection.as_mut() {
            selection.next_image();
        }
    }

    pub fn prev_image(&mut self) {
        if let Some(selection) = self.selection.as_mut() {
            selection.prev_image();
        }
    }

    pub fn side_panel(&self) -> SidePanel<'_> {
        match &self.selection {
            Some(selection) => SidePanel::Detail(selection),
            None => SidePanel::Summary,
        }
    }

    // ---- grid editing ----

    pub fn begin_edit(&mut self) -> bool {
        match &self.grid {
            Some(grid) => {
                self.draft = Some(GridDraft::new(grid));
                true
            }
            None => false,
        }
    }

    pub fn edit_cell(&mut self, row: usize, col: usize, value: u8) -> Result<()> {
        match self.draft.as_mut() {
            Some(draft) => draft.set_cell(row, col, value),
            None => Err(ApiError::Validation("grid is not in edit mode".into())),
        }
    }

    pub fn cancel_edit(&mut self) {
        self.draft = None;
    }

    /// Greenhouse id and payload to post when saving the draft.
    pub fn save_request(&self) -> Option<(i64, GridUpdate)> {
        let greenhouse = self.selected_greenhouse()?;
        let draft = self.draft.as_ref()?;
        Some((greenhouse.id, draft.to_update(&greenhouse.name)))
    }

    /// On success the draft becomes the displayed grid and edit mode ends.
    /// On failure the draft is kept so the user can retry.
    pub fn apply_save(&mut self, greenhouse_id: i64, result: Result<()>) -> bool {
        if self.selected_id() != Some(greenhouse_id) {
            return false;
        }
        match result {
            Ok(()) => {
                if let Some(draft) = self.draft.take() {
                    self.grid = Some(draft.into_grid());
                }
                info!("Saved grid of greenhouse {}", greenhouse_id);
                true
            }
            Err(e) => {
                warn!("Failed to save grid of greenhouse {}: {}", greenhouse_id, e);
                self.error = Some(SAVE_FAILED.to_string());
                false
            }
        }
    }

    // ---- delete ----

    /// Drop a deleted greenhouse and fall back to the first remaining one.
    pub fn apply_delete(&mut self, greenhouse_id: i64, result: Result<()>) -> Option<LoadTicket> {
        if let Err(e) = result {
            warn!("Failed to delete greenhouse {}: {}", greenhouse_id, e);
            self.error = Some(DELETE_FAILED.to_string());
            return None;
        }
        info!("Deleted greenhouse {}", greenhouse_id);
        self.greenhouses.retain(|g| g.id != greenhouse_id);
        if self.selected_id().is_some() && self.selected_id() != Some(greenhouse_id) {
            return None;
        }
        match self.greenhouses.first().map(|g| g.id) {
            Some(first) => self.select_greenhouse(first),
            None => {
                self.clear_greenhouse();
                None
            }
        }
    }

    // ---- capture ----

    /// Fold in the IoT device list. Returns `true` when the device modal
    /// opened.
    pub fn open_capture(&mut self, devices: Result<Vec<IotDevice>>) -> bool {
        match devices {
            Ok(devices) => {
                let opened = self.capture.open(devices);
                if !opened {
                    self.notice = Some(NO_IOT_DEVICES.to_string());
                }
                opened
            }
            Err(e) => {
                warn!("Failed to list IoT devices: {}", e);
                self.error = Some(IOT_LIST_FAILED.to_string());
                false
            }
        }
    }

    pub fn choose_device(&mut self, device_id: i64) {
        self.capture.choose_device(device_id);
    }

    pub fn confirm_device(&mut self) -> bool {
        self.capture.confirm_device()
    }

    pub fn toggle_capture_target(&mut self, group_id: i64) {
        if let Some(group) = self.layout.find(group_id) {
            self.capture.toggle_target(group);
        }
    }

    pub fn cancel_capture(&mut self) {
        self.capture.cancel();
    }

    /// Close the capture flow and return the command to send.
    pub fn confirm_capture(&mut self) -> Option<(LoadTicket, CaptureRequest)> {
        let ticket = self.fence.current()?;
        let request = self.capture.confirm()?;
        Some((ticket, request))
    }

    /// On success, returns the one-shot refresh to run after its delay.
    pub fn apply_capture(
        &mut self,
        ticket: LoadTicket,
        request: CaptureRequest,
        result: Result<()>,
    ) -> Option<PendingRefresh> {
        match result {
            Ok(()) => {
                info!(
                    "Capture requested for group {} with device {}",
                    request.group_id, request.iot_id
                );
                self.notice = Some(CAPTURE_SENT.to_string());
                Some(PendingRefresh::new(ticket, request.group_id))
            }
            Err(ApiError::Status { message, .. }) => {
                warn!("Capture rejected for group {}: {}", request.group_id, message);
                self.notice = Some(format!("촬영 명령 전송 실패: {}", message));
                None
            }
            Err(e) => {
                warn!("Capture request failed: {}", e);
                self.error = Some(CAPTURE_FAILED.to_string());
                self.notice = Some(NETWORK_FAILED.to_string());
                None
            }
        }
    }

    /// Apply the delayed post-capture re-fetch. Failures are only logged;
    /// the refresh is best effort.
    pub fn apply_capture_refresh(&mut self, refresh: &PendingRefresh, data: CaptureRefresh) -> bool {
        if !self.admits(refresh.ticket) {
            return false;
        }
        match data.groups {
            Ok(response) => self.set_groups(response),
            Err(e) => warn!("Post-capture group refresh failed: {}", e),
        }
        match data.sensor {
            Ok(snapshot) => self.set_sensor(Ok(snapshot)),
            Err(e) => warn!("Post-capture sensor refresh failed: {}", e),
        }
        true
    }

    // ---- upload ----

    pub fn open_upload(&mut self) {
        self.upload.open();
    }

    pub fn toggle_upload_target(&mut self, group_id: i64) {
        if let Some(group) = self.layout.find(group_id) {
            self.upload.toggle_target(group);
        }
    }

    pub fn select_upload_files(&mut self, files: Vec<ImageFile>) {
        self.upload.select_files(files);
    }

    pub fn close_upload(&mut self) {
        self.upload.close();
    }

    /// Lock the upload modal and return the request to send.
    pub fn begin_upload(&mut self) -> Option<(LoadTicket, UploadRequest)> {
        if !self.upload.can_submit() {
            if self.upload.is_open() && !self.upload.is_analyzing() {
                self.notice = Some(UPLOAD_INCOMPLETE.to_string());
            }
            return None;
        }
        let ticket = self.fence.current()?;
        let request = self.upload.begin()?;
        Some((ticket, request))
    }

    /// Show the analysis result, refresh the groups and bring the uploaded
    /// group into the detail panel. Outcomes for a greenhouse the user has
    /// left are dropped without touching the current upload.
    pub fn apply_upload(&mut self, ticket: LoadTicket, group_id: i64, outcome: UploadOutcome) {
        if !self.admits(ticket) {
            return;
        }
        match outcome.result {
            Ok(result) => {
                info!(
                    "Analysis of group {}: {} files, {} ripe, {} unripe",
                    group_id, result.total_files, result.total_ripe, result.total_unripe
                );
                self.upload.finish(Ok(result));
                self.notice = Some(UPLOAD_DONE.to_string());
            }
            Err(e) => {
                warn!("Upload for group {} failed: {}", group_id, e);
                let message = e.user_message();
                self.notice = Some(match e {
                    ApiError::Status { .. } => format!("분석 실패: {}", message),
                    _ => format!("업로드 중 오류가 발생했습니다: {}", message),
                });
                self.upload.finish(Err(message));
                return;
            }
        }

        let Some(groups) = outcome.groups else {
            return;
        };
        match groups {
            Ok(response) => {
                self.set_groups(response);
                self.focus_group(group_id);
            }
            Err(e) => warn!("Post-upload group refresh failed: {}", e),
        }
    }

    fn focus_group(&mut self, group_id: i64) {
        let Some(group) = self.layout.find(group_id).cloned() else {
            return;
        };
        match self.selection.as_mut() {
            Some(selection) if selection.group_id() == group_id => selection.refresh(group),
            _ => {
                self.selection = Some(BarSelection::new(group));
                self.transition = Transition::In;
            }
        }
    }

    // ---- messages ----

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// One-shot message for a blocking alert.
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }

    // ---- read access ----

    pub fn farm(&self) -> Option<&Farm> {
        self.farm.as_ref()
    }

    pub fn weather(&self) -> Option<&WeatherReport> {
        self.weather.as_ref()
    }

    pub fn greenhouses(&self) -> &[Greenhouse] {
        &self.greenhouses
    }

    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    pub fn layout(&self) -> &GroupLayout {
        &self.layout
    }

    pub fn sensor(&self) -> &SensorState {
        &self.sensor
    }

    pub fn selection(&self) -> Option<&BarSelection> {
        self.selection.as_ref()
    }

    pub fn transition(&self) -> Transition {
        self.transition
    }

    pub fn draft(&self) -> Option<&GridDraft> {
        self.draft.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    pub fn capture(&self) -> &CaptureFlow {
        &self.capture
    }

    pub fn upload(&self) -> &UploadFlow {
        &self.upload
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;
    use crate::upload::UploadStage;
    use sfh_core::analysis::UploadResult;
    use sfh_core::grid::CropType;

    fn loaded() -> (GreenhousePresenter, LoadTicket) {
        let mut presenter = GreenhousePresenter::new(1);
        let ticket = presenter
            .apply_farm_context(FarmContext {
                farm: Ok(mock::farm()),
                greenhouses: Ok(mock::greenhouses()),
            })
            .unwrap();
        presenter.apply_greenhouse_data(GreenhouseData {
            ticket,
            grid: Ok(mock::grid_5x4()),
            groups: Ok(mock::groups_for(10)),
            sensor: Ok(mock::reading()),
        });
        (presenter, ticket)
    }

    #[test]
    fn farm_context_selects_first_greenhouse() {
        let (presenter, ticket) = loaded();
        assert_eq!(ticket.greenhouse_id, 10);
        assert_eq!(presenter.selected_greenhouse().unwrap().name, "A동");
        assert_eq!(presenter.weather_city().as_deref(), Some("Seoul"));
        assert!(matches!(presenter.sensor(), SensorState::Reading(_)));
        assert_eq!(presenter.layout().groups()[0].id, 101);
    }

    #[test]
    fn failed_greenhouse_list_leaves_empty_list() {
        let mut presenter = GreenhousePresenter::new(1);
        let ticket = presenter.apply_farm_context(FarmContext {
            farm: Ok(mock::farm()),
            greenhouses: Err(ApiError::Network("offline".into())),
        });
        assert_eq!(ticket, None);
        assert!(presenter.greenhouses().is_empty());
        assert!(presenter.error().is_some());
        assert_eq!(presenter.selected_id(), None);
    }

    #[test]
    fn reloading_context_keeps_current_selection() {
        let (mut presenter, _) = loaded();
        presenter.select_greenhouse(11).unwrap();
        let again = presenter.apply_farm_context(FarmContext {
            farm: Ok(mock::farm()),
            greenhouses: Ok(mock::greenhouses()),
        });
        assert_eq!(again, None);
        assert_eq!(presenter.selected_id(), Some(11));
    }

    #[test]
    fn stale_groups_are_discarded() {
        let (mut presenter, first) = loaded();
        let second = presenter.select_greenhouse(11).unwrap();

        assert!(!presenter.apply_groups(first, Ok(mock::groups_for(10))));
        assert!(presenter.layout().is_empty());

        assert!(presenter.apply_groups(second, Ok(mock::groups_for(11))));
        assert_eq!(presenter.layout().groups()[0].id, 201);
    }

    #[test]
    fn switching_greenhouse_resets_scope() {
        let (mut presenter, _) = loaded();
        presenter.select_bar(102);
        presenter.close_bar();
        presenter.select_bar(102);
        presenter.begin_edit();
        presenter.open_upload();

        presenter.select_greenhouse(11).unwrap();
        assert_eq!(presenter.selection(), None);
        assert_eq!(presenter.transition(), Transition::In);
        assert_eq!(presenter.grid(), None);
        assert_eq!(presenter.sensor(), &SensorState::Loading);
        assert!(!presenter.is_editing());
        assert_eq!(presenter.upload().stage(), UploadStage::Closed);
    }

    #[test]
    fn unknown_greenhouse_is_ignored() {
        let (mut presenter, ticket) = loaded();
        assert_eq!(presenter.select_greenhouse(99), None);
        assert_eq!(presenter.ticket(), Some(ticket));
    }

    #[test]
    fn bar_selection_drives_side_panel() {
        let (mut presenter, _) = loaded();
        assert_eq!(presenter.side_panel(), SidePanel::Summary);

        assert!(presenter.select_bar(102));
        assert_eq!(presenter.transition(), Transition::In);
        match presenter.side_panel() {
            SidePanel::Detail(selection) => assert_eq!(selection.group_id(), 102),
            SidePanel::Summary => panic!("expected detail panel"),
        }

        presenter.close_bar();
        assert_eq!(presenter.side_panel(), SidePanel::Summary);
        assert_eq!(presenter.transition(), Transition::Out);
        assert!(!presenter.select_bar(999));
    }

    #[test]
    fn refetch_repoints_selection() {
        let (mut presenter, ticket) = loaded();
        presenter.select_bar(102);
        let mut refreshed = mock::groups_for(10);
        refreshed.groups.reverse();
        for g in refreshed.groups.iter_mut() {
            g.harvest_amount = Some(9);
        }
        presenter.apply_groups(ticket, Ok(refreshed));

        let selection = presenter.selection().unwrap();
        assert_eq!(selection.group().harvest_amount, Some(9));
        let order: Vec<i64> = presenter.layout().groups().iter().map(|g| g.id).collect();
        assert_eq!(order, vec![101, 102, 103, 7, 42]);
    }

    #[test]
    fn sensor_absent_or_failed_is_unavailable() {
        let (mut presenter, ticket) = loaded();
        presenter.apply_sensor(
            ticket,
            Ok(SensorSnapshot::Absent {
                message: "no data".into(),
            }),
        );
        assert_eq!(
            presenter.sensor(),
            &SensorState::Unavailable(Some("no data".to_string()))
        );
        presenter.apply_sensor(ticket, Err(ApiError::Network("down".into())));
        assert_eq!(presenter.sensor(), &SensorState::Unavailable(None));
    }

    #[test]
    fn edit_then_cancel_keeps_grid() {
        let (mut presenter, _) = loaded();
        assert!(presenter.begin_edit());
        presenter.edit_cell(2, 3, 1).unwrap();
        presenter.cancel_edit();
        assert!(!presenter.is_editing());
        assert_eq!(presenter.grid(), Some(&mock::grid_5x4()));
        assert!(presenter.edit_cell(0, 0, 1).is_err());
    }

    #[test]
    fn save_replaces_grid_on_success_only() {
        let (mut presenter, _) = loaded();
        presenter.begin_edit();
        presenter.edit_cell(2, 3, 1).unwrap();
        let (greenhouse_id, update) = presenter.save_request().unwrap();
        assert_eq!(greenhouse_id, 10);
        assert_eq!(update.name, "A동");

        assert!(!presenter.apply_save(10, Err(ApiError::Network("down".into()))));
        assert_eq!(presenter.error(), Some(SAVE_FAILED));
        assert!(presenter.is_editing());

        assert!(presenter.apply_save(10, Ok(())));
        assert!(!presenter.is_editing());
        assert_eq!(presenter.grid().unwrap().get(2, 3), Some(1));
    }

    #[test]
    fn delete_reselects_first_remaining() {
        let (mut presenter, _) = loaded();
        let ticket = presenter.apply_delete(10, Ok(())).unwrap();
        assert_eq!(ticket.greenhouse_id, 11);
        assert_eq!(presenter.greenhouses().len(), 1);

        assert_eq!(presenter.apply_delete(11, Ok(())), None);
        assert!(presenter.greenhouses().is_empty());
        assert_eq!(presenter.selected_id(), None);
    }

    #[test]
    fn failed_delete_keeps_list() {
        let (mut presenter, ticket) = loaded();
        let err = ApiError::Status {
            status: 500,
            message: "boom".into(),
        };
        assert_eq!(presenter.apply_delete(10, Err(err)), None);
        assert_eq!(presenter.greenhouses().len(), 2);
        assert_eq!(presenter.ticket(), Some(ticket));
        assert_eq!(presenter.error(), Some(DELETE_FAILED));
    }

    #[test]
    fn empty_iot_list_shows_notice() {
        let (mut presenter, _) = loaded();
        assert!(!presenter.open_capture(Ok(vec![])));
        assert_eq!(presenter.take_notice().as_deref(), Some(NO_IOT_DEVICES));
        assert_eq!(presenter.take_notice(), None);
        assert_eq!(presenter.capture(), &CaptureFlow::Idle);
    }

    #[test]
    fn capture_path_group_is_noop() {
        let (mut presenter, _) = loaded();
        presenter.open_capture(Ok(mock::devices()));
        presenter.choose_device(3);
        presenter.confirm_device();
        let path = presenter
            .layout()
            .groups()
            .iter()
            .find(|g| g.crop_type == CropType::Path)
            .map(|g| g.id)
            .unwrap();
        presenter.toggle_capture_target(path);
        assert_eq!(presenter.capture().target(), None);
        assert_eq!(presenter.confirm_capture(), None);
    }

    #[test]
    fn capture_rejection_shows_server_message() {
        let (mut presenter, ticket) = loaded();
        let request = CaptureRequest {
            group_id: 102,
            iot_id: 3,
        };
        let refresh = presenter.apply_capture(
            ticket,
            request,
            Err(ApiError::Status {
                status: 400,
                message: "device offline".into(),
            }),
        );
        assert_eq!(refresh, None);
        assert_eq!(
            presenter.take_notice().as_deref(),
            Some("촬영 명령 전송 실패: device offline")
        );
    }

    #[test]
    fn capture_refresh_for_old_greenhouse_is_dropped() {
        let (mut presenter, ticket) = loaded();
        let refresh = presenter
            .apply_capture(
                ticket,
                CaptureRequest {
                    group_id: 102,
                    iot_id: 3,
                },
                Ok(()),
            )
            .unwrap();
        presenter.select_greenhouse(11);
        let applied = presenter.apply_capture_refresh(
            &refresh,
            CaptureRefresh {
                groups: Ok(mock::groups_for(10)),
                sensor: Ok(mock::reading()),
            },
        );
        assert!(!applied);
        assert!(presenter.layout().is_empty());
    }

    #[test]
    fn upload_requires_area_and_files() {
        let (mut presenter, _) = loaded();
        presenter.open_upload();
        assert_eq!(presenter.begin_upload(), None);
        assert_eq!(presenter.take_notice().as_deref(), Some(UPLOAD_INCOMPLETE));
    }

    #[test]
    fn failed_upload_returns_to_files() {
        let (mut presenter, _) = loaded();
        presenter.open_upload();
        presenter.toggle_upload_target(102);
        presenter.select_upload_files(vec![ImageFile::new("a.jpg", vec![1])]);
        let (ticket, request) = presenter.begin_upload().unwrap();
        presenter.apply_upload(
            ticket,
            request.group_id,
            UploadOutcome {
                result: Err(ApiError::Status {
                    status: 500,
                    message: "model not loaded".into(),
                }),
                groups: None,
            },
        );
        assert_eq!(presenter.upload().stage(), UploadStage::FilesSelected);
        assert_eq!(
            presenter.take_notice().as_deref(),
            Some("분석 실패: model not loaded")
        );
    }

    #[test]
    fn upload_success_selects_uploaded_group() {
        let (mut presenter, _) = loaded();
        presenter.select_bar(103);
        presenter.open_upload();
        presenter.toggle_upload_target(102);
        presenter.select_upload_files(vec![ImageFile::new("a.jpg", vec![1])]);
        let (ticket, request) = presenter.begin_upload().unwrap();
        presenter.apply_upload(
            ticket,
            request.group_id,
            UploadOutcome {
                result: Ok(UploadResult {
                    total_files: 1,
                    ..UploadResult::default()
                }),
                groups: Some(Ok(mock::groups_for(10))),
            },
        );
        assert_eq!(presenter.upload().stage(), UploadStage::Result);
        assert_eq!(presenter.selection().unwrap().group_id(), 102);
        assert_eq!(presenter.take_notice().as_deref(), Some(UPLOAD_DONE));
    }

    fn start_upload(presenter: &mut GreenhousePresenter, group_id: i64) -> LoadTicket {
        presenter.open_upload();
        presenter.toggle_upload_target(group_id);
        presenter.select_upload_files(vec![ImageFile::new("a.jpg", vec![1])]);
        let (ticket, _) = presenter.begin_upload().unwrap();
        ticket
    }

    #[test]
    fn upload_outcome_for_old_greenhouse_is_dropped() {
        let (mut presenter, _) = loaded();
        let old = start_upload(&mut presenter, 42);
        assert!(presenter.is_analyzing());

        let new = presenter.select_greenhouse(11).unwrap();
        presenter.apply_greenhouse_data(GreenhouseData {
            ticket: new,
            grid: Ok(mock::grid_5x4()),
            groups: Ok(mock::groups_for(11)),
            sensor: Ok(mock::reading()),
        });
        start_upload(&mut presenter, 201);

        presenter.apply_upload(
            old,
            42,
            UploadOutcome {
                result: Ok(UploadResult {
                    total_files: 99,
                    ..UploadResult::default()
                }),
                groups: Some(Ok(mock::groups_for(10))),
            },
        );
        assert_eq!(presenter.upload().stage(), UploadStage::Analyzing);
        assert_eq!(presenter.upload().result(), None);
        assert_eq!(presenter.upload().target(), Some(201));
        assert_eq!(presenter.take_notice(), None);
        assert_eq!(presenter.layout().groups()[0].id, 201);
    }

    #[test]
    fn failed_upload_for_old_greenhouse_is_dropped() {
        let (mut presenter, _) = loaded();
        let old = start_upload(&mut presenter, 42);
        presenter.select_greenhouse(11).unwrap();

        presenter.apply_upload(
            old,
            42,
            UploadOutcome {
                result: Err(ApiError::Network("offline".into())),
                groups: None,
            },
        );
        assert_eq!(presenter.upload().stage(), UploadStage::Closed);
        assert_eq!(presenter.take_notice(), None);
        assert!(!presenter.is_analyzing());
    }
}
