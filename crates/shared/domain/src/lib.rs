//! # Domain Models
//!
//! This crate contains pure domain types for the volume coupling module with minimal
//! dependencies (`serde`, `bitflags`, `strum`).
//! Keep it lean: no I/O, probing or dispatch logic. Just data and simple helpers.

pub mod channel;
pub mod config;
pub mod constants;
pub mod solver;
