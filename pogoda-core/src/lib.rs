//! Core library for the `pogoda` weather lookup.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather client (request construction, status classification,
//!   JSON decoding)
//! - The presenter that turns the last fetched record into display strings
//!
//! It is used by `pogoda-cli`, but can also be reused by other binaries or
//! services.

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod presenter;

pub use client::{LoadingObserver, WeatherClient};
pub use config::Config;
pub use error::FetchError;
pub use model::{ConditionEntry, WeatherRecord};
pub use presenter::WeatherPresenter;
