//! Kernel utilities shared across coupling modules.
//! Keep this crate lightweight; it re-exports the domain types and provides settings loading
//! and the [`SettingsView`](settings::SettingsView) lookup contract.

pub mod config;
mod error;
pub mod settings;

pub use crate::error::{SettingsError, SettingsErrorExt};
pub use vv_domain as domain;
