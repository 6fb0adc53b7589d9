//! Greenhouse layout presenter for the Smart Farm Hub dashboard.
//!
//! Everything the farm detail page decides lives here, free of any UI
//! framework:
//! - ordering of server-computed crop groups into merged bars
//! - bar selection, the detail panel and its image gallery
//! - the grid edit draft
//! - the capture and upload workflows
//! - the community board's list, detail and notification state
//!
//! Network work is split in two. The async functions in [`ops`] talk to a
//! backend and return plain outcome values without touching the presenter;
//! the presenter's `apply_*` methods then fold those outcomes in. A web app
//! can therefore await a request without holding a borrow of its state, and
//! the CLI and the tests drive the very same path.

pub mod board;
pub mod capture;
pub mod detail;
pub mod editor;
pub mod fence;
pub mod groups;
pub mod ops;
pub mod presenter;
pub mod selection;
pub mod upload;

#[cfg(test)]
mod mock;

pub use fence::LoadTicket;
pub use presenter::{GreenhousePresenter, SensorState};
