//! Channel name to handler dispatch.
//!
//! A [`ChannelDispatcher`] holds an ordered list of [`ChannelFamily`] entries. A channel
//! name belongs to the first family whose prefix it starts with (case-sensitive) and whose
//! roles include the requested one. Names matching no family are rejected; nothing is
//! registered for them.

use crate::diagnostics::{DiagnosticsSink, Severity};
use crate::error::AdapterError;
use crate::handler::{CouplingDataUser, HandlerContext, Temperature};
use crate::interface::CouplingRegistry;
use std::borrow::Cow;
use std::fmt;
use vv_domain::channel::{ChannelRole, RoleSet};
use vv_domain::constants::TEMPERATURE;

type Factory = dyn Fn(&HandlerContext<'_>) -> Box<dyn CouplingDataUser> + Send + Sync;

/// A family of channels sharing a name prefix and a handler type.
pub struct ChannelFamily {
    prefix: Cow<'static, str>,
    label: Cow<'static, str>,
    roles: RoleSet,
    factory: Box<Factory>,
}

impl fmt::Debug for ChannelFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChannelFamily")
            .field("prefix", &self.prefix)
            .field("label", &self.label)
            .field("roles", &self.roles)
            .finish_non_exhaustive()
    }
}

impl ChannelFamily {
    pub fn new(
        prefix: impl Into<Cow<'static, str>>,
        label: impl Into<Cow<'static, str>>,
        roles: RoleSet,
        factory: impl Fn(&HandlerContext<'_>) -> Box<dyn CouplingDataUser> + Send + Sync + 'static,
    ) -> Self {
        Self { prefix: prefix.into(), label: label.into(), roles, factory: Box::new(factory) }
    }

    /// `Temperature*` channels, read and written through the configured temperature field.
    #[must_use]
    pub fn temperature() -> Self {
        Self::new(TEMPERATURE, TEMPERATURE, RoleSet::ALL, |ctx| {
            Box::new(Temperature::new(
                ctx.simulation.clone(),
                ctx.config.temperature_field_name.clone(),
            ))
        })
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub const fn roles(&self) -> RoleSet {
        self.roles
    }

    #[must_use]
    pub fn matches(&self, name: &str, role: ChannelRole) -> bool {
        name.starts_with(self.prefix.as_ref()) && self.roles.supports(role)
    }

    fn build(&self, ctx: &HandlerContext<'_>) -> Box<dyn CouplingDataUser> {
        (self.factory)(ctx)
    }
}

/// Ordered registry of channel families.
#[derive(Debug)]
pub struct ChannelDispatcher {
    families: Vec<ChannelFamily>,
}

impl Default for ChannelDispatcher {
    fn default() -> Self {
        Self { families: vec![ChannelFamily::temperature()] }
    }
}

impl ChannelDispatcher {
    /// A dispatcher without families: every name is rejected.
    #[must_use]
    pub const fn empty() -> Self {
        Self { families: Vec::new() }
    }

    /// Appends a family. It is matched after every family already present.
    #[must_use]
    pub fn with_family(mut self, family: ChannelFamily) -> Self {
        self.families.push(family);
        self
    }

    pub fn families(&self) -> impl Iterator<Item = &ChannelFamily> {
        self.families.iter()
    }

    /// First family serving `name` in `role`.
    #[must_use]
    pub fn find(&self, name: &str, role: ChannelRole) -> Option<&ChannelFamily> {
        self.families.iter().find(|family| family.matches(name, role))
    }

    /// Builds the handler for `name` and hands it to `registry` under `role`.
    ///
    /// Every call builds a fresh handler; repeated calls register repeatedly.
    ///
    /// # Errors
    /// Returns [`AdapterError::UnknownChannel`] if no family serves `name` in `role`.
    /// The registry is untouched in that case.
    pub fn dispatch<R>(
        &self,
        name: &str,
        role: ChannelRole,
        ctx: &HandlerContext<'_>,
        registry: &mut R,
        sink: &dyn DiagnosticsSink,
    ) -> Result<(), AdapterError>
    where
        R: CouplingRegistry + ?Sized,
    {
        let Some(family) = self.find(name, role) else {
            sink.report(&format!("Unknown data type - cannot add {name}."), Severity::Error);
            return Err(AdapterError::unknown_channel(name));
        };

        let handler = family.build(ctx);
        match role {
            ChannelRole::Read => registry.add_reader(name, handler),
            ChannelRole::Write => registry.add_writer(name, handler),
        }
        sink.report(&format!("Added {role}: {}.", family.label), Severity::Debug);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::MemorySink;
    use crate::interface::Interface;
    use crate::probe::{ObjectRegistry, SimulationHandle};
    use vv_domain::config::ModuleConfig;

    #[derive(Debug)]
    struct HeatFlux(String);

    impl CouplingDataUser for HeatFlux {
        fn quantity(&self) -> &'static str {
            "HeatFlux"
        }

        fn field_name(&self) -> &str {
            &self.0
        }
    }

    fn heat_flux_family() -> ChannelFamily {
        ChannelFamily::new("HeatFlux", "HeatFlux", RoleSet::WRITE, |ctx| {
            Box::new(HeatFlux(ctx.config.temperature_field_name.clone()))
        })
    }

    #[test]
    fn test_appended_family_is_dispatched() {
        let dispatcher = ChannelDispatcher::default().with_family(heat_flux_family());
        let simulation: SimulationHandle = ObjectRegistry::new().into_handle();
        let config = ModuleConfig::default();
        let ctx = HandlerContext { simulation: &simulation, config: &config };
        let mut interface = Interface::new();
        let sink = MemorySink::new();

        dispatcher.dispatch("HeatFlux-Wall", ChannelRole::Write, &ctx, &mut interface, &sink).unwrap();

        assert_eq!(interface.writers().len(), 1);
        assert_eq!(interface.writers()[0].handler().quantity(), "HeatFlux");
        assert!(sink.contains("Added writer: HeatFlux."));
    }

    #[test]
    fn test_family_roles_restrict_matching() {
        let dispatcher = ChannelDispatcher::empty().with_family(heat_flux_family());
        let simulation: SimulationHandle = ObjectRegistry::new().into_handle();
        let config = ModuleConfig::default();
        let ctx = HandlerContext { simulation: &simulation, config: &config };
        let mut interface = Interface::new();
        let sink = MemorySink::new();

        let err = dispatcher
            .dispatch("HeatFlux", ChannelRole::Read, &ctx, &mut interface, &sink)
            .unwrap_err();

        assert!(matches!(err, AdapterError::UnknownChannel { ref name, .. } if name == "HeatFlux"));
        assert_eq!(interface.len(), 0);
    }

    #[test]
    fn test_family_order_is_stable() {
        let dispatcher = ChannelDispatcher::default().with_family(heat_flux_family());
        let prefixes: Vec<_> = dispatcher.families().map(ChannelFamily::prefix).collect();
        assert_eq!(prefixes, vec!["Temperature", "HeatFlux"]);
    }

    #[test]
    fn test_first_match_wins() {
        let shadow = ChannelFamily::new("Temp", "Shadow", RoleSet::ALL, |ctx| {
            Box::new(HeatFlux(ctx.config.temperature_field_name.clone()))
        });
        let dispatcher = ChannelDispatcher::default().with_family(shadow);

        let family = dispatcher.find("Temperature", ChannelRole::Read).unwrap();
        assert_eq!(family.label(), "Temperature");
        let family = dispatcher.find("Tempo", ChannelRole::Read).unwrap();
        assert_eq!(family.label(), "Shadow");
    }
}
