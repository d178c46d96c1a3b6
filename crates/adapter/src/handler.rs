//! Coupling data handlers constructed by the dispatcher.

use crate::probe::SimulationHandle;
use std::fmt::Debug;
use vv_domain::config::ModuleConfig;
use vv_domain::constants::TEMPERATURE;

/// A reader or writer transferring one physical quantity between the solver and the
/// coupling layer.
///
/// The same handler type serves both roles; the registry method it is handed to decides
/// the direction.
pub trait CouplingDataUser: Debug + Send {
    /// Name of the coupled quantity, e.g. `Temperature`.
    fn quantity(&self) -> &'static str;

    /// Name of the solver field the handler is bound to.
    fn field_name(&self) -> &str;
}

/// What a handler factory may bind a new handler to.
#[derive(Debug, Clone, Copy)]
pub struct HandlerContext<'a> {
    pub simulation: &'a SimulationHandle,
    pub config: &'a ModuleConfig,
}

/// Temperature field handler.
#[derive(Debug, Clone)]
pub struct Temperature {
    simulation: SimulationHandle,
    field_name: String,
}

impl Temperature {
    pub fn new(simulation: SimulationHandle, field_name: impl Into<String>) -> Self {
        Self { simulation, field_name: field_name.into() }
    }

    #[must_use]
    pub const fn simulation(&self) -> &SimulationHandle {
        &self.simulation
    }
}

impl CouplingDataUser for Temperature {
    fn quantity(&self) -> &'static str {
        TEMPERATURE
    }

    fn field_name(&self) -> &str {
        &self.field_name
    }
}
