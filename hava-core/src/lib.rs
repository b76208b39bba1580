//! Core library for the `hava` weather lookup.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The weather service client and its trait seam
//! - Search history, its persistence, and the screen state machine
//!
//! It is used by `hava-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod controller;
pub mod history;
pub mod model;
pub mod presentation;
pub mod store;

pub use client::{FetchError, WeatherApiClient, WeatherSource};
pub use config::Config;
pub use controller::{FETCH_FAILED_MESSAGE, Phase, QueryState, SearchController};
pub use history::{HISTORY_LIMIT, SearchEntry, SearchHistory};
pub use model::WeatherSnapshot;
pub use presentation::{Presentation, presentation_for};
pub use store::{HistoryStore, StoreError};
