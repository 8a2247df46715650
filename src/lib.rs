//! Food Donation Platform Backend Library
//!
//! Collects donor and NGO-request submissions and appends each one as a
//! document to the matching store collection. The `form` module carries
//! the toolkit-independent submission workflow; `routes` exposes it over
//! HTTP.

pub mod config;
pub mod constants;
pub mod error;
pub mod form;
pub mod models;
pub mod routes;
pub mod store;

pub use config::Config;
pub use error::{AppError, Result};
pub use store::{open_store, RedbStore};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: RedbStore,
    pub config: Config,
}
