//! IoT capture workflow.
//!
//! ```text
//! Idle --open--> ChoosingDevice --confirm_device--> ChoosingArea --confirm--> Idle
//! ```
//!
//! An empty device list never leaves `Idle`. Confirming hands back the
//! request to send and closes the flow at once; the analysis shows up later
//! through a single delayed re-fetch described by [`PendingRefresh`].

use crate::fence::LoadTicket;
use sfh_core::group::CropGroup;
use sfh_core::iot::{CaptureRequest, IotDevice};
use std::time::Duration;

/// How long after a capture command the groups are re-fetched.
pub const CAPTURE_REFRESH_DELAY: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Default)]
pub enum CaptureFlow {
    #[default]
    Idle,
    /// Device modal is open.
    ChoosingDevice {
        devices: Vec<IotDevice>,
        selected: Option<i64>,
    },
    /// Area card is open with the chosen device.
    ChoosingArea {
        device: IotDevice,
        target: Option<i64>,
    },
}

impl CaptureFlow {
    /// Open the device modal. Returns `false` and stays idle when there are
    /// no devices to choose from.
    pub fn open(&mut self, devices: Vec<IotDevice>) -> bool {
        if devices.is_empty() {
            *self = CaptureFlow::Idle;
            return false;
        }
        *self = CaptureFlow::ChoosingDevice {
            devices,
            selected: None,
        };
        true
    }

    pub fn choose_device(&mut self, device_id: i64) {
        if let CaptureFlow::ChoosingDevice { devices, selected } = self {
            if devices.iter().any(|d| d.id == device_id) {
                *selected = Some(device_id);
            }
        }
    }

    /// Move from the device modal to the area card.
    pub fn confirm_device(&mut self) -> bool {
        let device = match self {
            CaptureFlow::ChoosingDevice {
                devices,
                selected: Some(id),
            } => devices.iter().find(|d| d.id == *id).cloned(),
            _ => None,
        };
        match device {
            Some(device) => {
                *self = CaptureFlow::ChoosingArea {
                    device,
                    target: None,
                };
                true
            }
            None => false,
        }
    }

    /// Click on a bar in the area card. Paths are ignored and clicking the
    /// selected bar again clears it.
    pub fn toggle_target(&mut self, group: &CropGroup) {
        if !group.is_selectable_target() {
            return;
        }
        if let CaptureFlow::ChoosingArea { target, .. } = self {
            *target = match *target {
                Some(id) if id == group.id => None,
                _ => Some(group.id),
            };
        }
    }

    pub fn can_confirm_device(&self) -> bool {
        matches!(
            self,
            CaptureFlow::ChoosingDevice {
                selected: Some(_),
                ..
            }
        )
    }

    pub fn can_confirm(&self) -> bool {
        matches!(
            self,
            CaptureFlow::ChoosingArea {
                target: Some(_),
                ..
            }
        )
    }

    /// Build the capture command and close the flow.
    pub fn confirm(&mut self) -> Option<CaptureRequest> {
        let request = match self {
            CaptureFlow::ChoosingArea {
                device,
                target: Some(group_id),
            } => CaptureRequest {
                group_id: *group_id,
                iot_id: device.id,
            },
            _ => return None,
        };
        *self = CaptureFlow::Idle;
        Some(request)
    }

    pub fn cancel(&mut self) {
        *self = CaptureFlow::Idle;
    }

    pub fn devices(&self) -> &[IotDevice] {
        match self {
            CaptureFlow::ChoosingDevice { devices, .. } => devices,
            _ => &[],
        }
    }

    pub fn selected_device(&self) -> Option<i64> {
        match self {
            CaptureFlow::ChoosingDevice { selected, .. } => *selected,
            CaptureFlow::ChoosingArea { device, .. } => Some(device.id),
            CaptureFlow::Idle => None,
        }
    }

    pub fn target(&self) -> Option<i64> {
        match self {
            CaptureFlow::ChoosingArea { target, .. } => *target,
            _ => None,
        }
    }

    pub fn is_choosing_device(&self) -> bool {
        matches!(self, CaptureFlow::ChoosingDevice { .. })
    }

    pub fn is_choosing_area(&self) -> bool {
        matches!(self, CaptureFlow::ChoosingArea { .. })
    }
}

/// A one-shot re-fetch scheduled after a capture command was accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingRefresh {
    pub ticket: LoadTicket,
    pub group_id: i64,
    pub delay: Duration,
}

impl PendingRefresh {
    pub fn new(ticket: LoadTicket, group_id: i64) -> Self {
        Self {
            ticket,
            group_id,
            delay: CAPTURE_REFRESH_DELAY,
        }
    }
}
