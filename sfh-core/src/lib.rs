//! Core types and API client for the Smart Farm Hub web app.
//!
//! This crate provides:
//! - domain types for farms, greenhouses, grids, crop groups, sensors,
//!   weather, IoT devices, auth and the community board
//! - wire decoding for the backend's loosely typed JSON
//! - the backend traits consumed by the presenter and the UI
//! - `client::HttpClient`, a reqwest implementation of those traits
//!   (behind the `api` feature)

pub mod analysis;
pub mod auth;
pub mod backend;
pub mod community;
pub mod endpoints;
pub mod error;
pub mod farm;
pub mod grid;
pub mod group;
pub mod iot;
pub mod sensor;
pub mod weather;

#[cfg(feature = "api")]
pub mod client;

pub use error::{ApiError, Result};
