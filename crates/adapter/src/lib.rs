//! # Volume-Volume Coupling Module
//!
//! Configuration-time wiring of a volumetric coupling channel between a solver and a
//! co-simulation coordinator.
//!
//! ## Architecture
//!
//! 1.  **Detection ([`resolver`]):** settles the solver kind. A declared `basic`,
//!     `compressible` or `incompressible` wins outright; anything else runs the ordered
//!     detection rules against the simulation.
//! 2.  **Dispatch ([`dispatch`]):** maps a channel name onto a handler family by prefix,
//!     builds the handler and hands it to a [`CouplingRegistry`].
//! 3.  **Module ([`VolumeVolume`]):** reads the `VV` settings section, runs detection
//!     once, then forwards reader and writer registrations.
//!
//! Collaborators are traits so the embedding solver can supply its own:
//! [`SimulationProbe`], [`CouplingRegistry`], [`DiagnosticsSink`] and
//! [`SettingsView`](vv_kernel::settings::SettingsView).
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use vv_adapter::{Interface, ObjectRegistry, TracingSink, VolumeVolume};
//!
//! let simulation = ObjectRegistry::new().with_object("transportProperties").into_handle();
//! let mut module = VolumeVolume::new(simulation, Arc::new(TracingSink));
//!
//! module.configure(&serde_json::json!({ "VV": { "nameT": "T" } })).unwrap();
//!
//! let mut interface = Interface::new();
//! module.add_writers("Temperature", &mut interface).unwrap();
//! module.add_readers("TemperatureFlux", &mut interface).unwrap();
//! assert_eq!(interface.len(), 2);
//! ```

pub mod diagnostics;
pub mod dispatch;
mod error;
pub mod handler;
pub mod interface;
pub mod probe;
pub mod resolver;
mod volume;

pub use crate::diagnostics::{DiagnosticsSink, MemorySink, Severity, TracingSink};
pub use crate::dispatch::{ChannelDispatcher, ChannelFamily};
pub use crate::error::{AdapterError, AdapterErrorExt};
pub use crate::handler::{CouplingDataUser, HandlerContext, Temperature};
pub use crate::interface::{CouplingRegistry, Interface, Registration};
pub use crate::probe::{CaseDirectory, ObjectRegistry, SimulationHandle, SimulationProbe};
pub use crate::resolver::{DetectionRule, Evidence, SolverKindResolver};
pub use crate::volume::VolumeVolume;
pub use vv_domain::channel::{ChannelRole, RoleSet};
pub use vv_domain::config::ModuleConfig;
pub use vv_domain::solver::SolverKind;
