use crate::diagnostics::{DiagnosticsSink, Severity};
use crate::dispatch::ChannelDispatcher;
use crate::error::{AdapterError, AdapterErrorExt};
use crate::handler::HandlerContext;
use crate::interface::CouplingRegistry;
use crate::probe::SimulationHandle;
use crate::resolver::SolverKindResolver;
use std::sync::Arc;
use vv_domain::channel::ChannelRole;
use vv_domain::config::ModuleConfig;
use vv_domain::constants::{
    DEFAULT_NAME_T, DEFAULT_NAME_TRANSPORT_PROPERTIES, DEFAULT_SOLVER_TYPE, KEY_NAME_T,
    KEY_NAME_TRANSPORT_PROPERTIES, KEY_SOLVER_TYPE, SECTION,
};
use vv_domain::solver::SolverKind;
use vv_kernel::settings::SettingsView;

#[derive(Debug)]
enum ModuleState {
    Uninitialized,
    Configured { config: ModuleConfig, solver_kind: SolverKind },
}

/// The Volume-Volume coupling module.
///
/// Bound to one simulation for its whole lifetime. [`VolumeVolume::configure`] reads the
/// `VV` settings section and settles the solver kind; afterwards the module registers
/// readers and writers for channel names its caller discovers.
#[derive(Debug)]
pub struct VolumeVolume {
    simulation: SimulationHandle,
    sink: Arc<dyn DiagnosticsSink>,
    resolver: SolverKindResolver,
    dispatcher: ChannelDispatcher,
    state: ModuleState,
}

impl VolumeVolume {
    /// Creates an unconfigured module with the default detection rules and channel families.
    pub fn new(simulation: SimulationHandle, sink: Arc<dyn DiagnosticsSink>) -> Self {
        Self {
            simulation,
            sink,
            resolver: SolverKindResolver::default(),
            dispatcher: ChannelDispatcher::default(),
            state: ModuleState::Uninitialized,
        }
    }

    #[must_use]
    pub fn with_resolver(mut self, resolver: SolverKindResolver) -> Self {
        self.resolver = resolver;
        self
    }

    #[must_use]
    pub fn with_dispatcher(mut self, dispatcher: ChannelDispatcher) -> Self {
        self.dispatcher = dispatcher;
        self
    }

    /// Reads the module options and resolves the solver kind.
    ///
    /// Any earlier configuration is discarded first, so a failed call always leaves the
    /// module unconfigured.
    ///
    /// # Errors
    /// Returns [`AdapterError::SolverKindIndeterminate`] if no kind is declared and none
    /// can be detected.
    pub fn configure(&mut self, settings: &impl SettingsView) -> Result<(), AdapterError> {
        self.state = ModuleState::Uninitialized;
        self.sink.report("Configuring the Volume-Volume module...", Severity::Debug);

        let mut config = self.read_config(settings);
        let solver_kind = self.resolver.resolve(
            &config.solver_kind,
            &config,
            self.simulation.as_ref(),
            self.sink.as_ref(),
        )?;
        config.solver_kind = solver_kind.to_string();

        self.state = ModuleState::Configured { config, solver_kind };
        Ok(())
    }

    fn read_config(&self, settings: &impl SettingsView) -> ModuleConfig {
        let config = ModuleConfig {
            solver_kind: settings.lookup_or_default(
                SECTION,
                KEY_SOLVER_TYPE,
                DEFAULT_SOLVER_TYPE.to_owned(),
            ),
            temperature_field_name: settings.lookup_or_default(
                SECTION,
                KEY_NAME_T,
                DEFAULT_NAME_T.to_owned(),
            ),
            transport_properties_document_name: settings.lookup_or_default(
                SECTION,
                KEY_NAME_TRANSPORT_PROPERTIES,
                DEFAULT_NAME_TRANSPORT_PROPERTIES.to_owned(),
            ),
        };

        self.report_option("user-defined solver type", &config.solver_kind);
        self.report_option("temperature field name", &config.temperature_field_name);
        self.report_option("transportProperties name", &config.transport_properties_document_name);

        config
    }

    fn report_option(&self, what: &str, value: &str) {
        self.sink.report(&format!("    {what} : {value}"), Severity::Debug);
    }

    #[must_use]
    pub const fn is_configured(&self) -> bool {
        matches!(self.state, ModuleState::Configured { .. })
    }

    /// Options read by the last successful [`VolumeVolume::configure`], with `solver_kind`
    /// replaced by the resolved kind.
    #[must_use]
    pub const fn config(&self) -> Option<&ModuleConfig> {
        match &self.state {
            ModuleState::Configured { config, .. } => Some(config),
            ModuleState::Uninitialized => None,
        }
    }

    /// Solver kind settled by the last successful [`VolumeVolume::configure`].
    #[must_use]
    pub const fn solver_kind(&self) -> Option<SolverKind> {
        match &self.state {
            ModuleState::Configured { solver_kind, .. } => Some(*solver_kind),
            ModuleState::Uninitialized => None,
        }
    }

    #[must_use]
    pub const fn dispatcher(&self) -> &ChannelDispatcher {
        &self.dispatcher
    }

    /// Registers a writer for `name` with `registry`.
    ///
    /// # Errors
    /// * [`AdapterError::NotConfigured`] before a successful [`VolumeVolume::configure`].
    /// * [`AdapterError::UnknownChannel`] if no channel family serves `name`.
    pub fn add_writers<R>(&self, name: &str, registry: &mut R) -> Result<(), AdapterError>
    where
        R: CouplingRegistry + ?Sized,
    {
        self.add(name, ChannelRole::Write, registry)
    }

    /// Registers a reader for `name` with `registry`.
    ///
    /// # Errors
    /// * [`AdapterError::NotConfigured`] before a successful [`VolumeVolume::configure`].
    /// * [`AdapterError::UnknownChannel`] if no channel family serves `name`.
    pub fn add_readers<R>(&self, name: &str, registry: &mut R) -> Result<(), AdapterError>
    where
        R: CouplingRegistry + ?Sized,
    {
        self.add(name, ChannelRole::Read, registry)
    }

    fn add<R>(&self, name: &str, role: ChannelRole, registry: &mut R) -> Result<(), AdapterError>
    where
        R: CouplingRegistry + ?Sized,
    {
        let ModuleState::Configured { config, .. } = &self.state else {
            return Err(AdapterError::NotConfigured {
                message: format!("cannot add {role} for {name}").into(),
                context: None,
            });
        };

        let ctx = HandlerContext { simulation: &self.simulation, config };
        self.dispatcher
            .dispatch(name, role, &ctx, registry, self.sink.as_ref())
            .context(<&'static str>::from(role))
    }
}
