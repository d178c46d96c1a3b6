//! Solver kind detection.
//!
//! An explicitly declared kind always wins. Anything else (an empty value, `none`, or an
//! unrecognized literal) falls through to detection: an ordered list of
//! [`DetectionRule`]s is evaluated against the simulation and the first rule whose
//! evidence holds decides the kind. If no rule holds, the kind is indeterminate.

use crate::diagnostics::{DiagnosticsSink, Severity};
use crate::error::AdapterError;
use crate::probe::SimulationProbe;
use std::borrow::Cow;
use std::fmt;
use vv_domain::config::ModuleConfig;
use vv_domain::constants::SOLVER_TYPE_NONE;
use vv_domain::solver::SolverKind;

/// What a detection rule may inspect.
#[derive(Debug, Clone, Copy)]
pub struct Evidence<'a> {
    pub probe: &'a dyn SimulationProbe,
    pub config: &'a ModuleConfig,
    pub sink: &'a dyn DiagnosticsSink,
}

impl Evidence<'_> {
    /// Probes for a dictionary and reports the outcome.
    #[must_use]
    pub fn dictionary(&self, name: &str) -> bool {
        let found = self.probe.exists(name);
        if found {
            self.sink.report(&format!("Found the {name} dictionary."), Severity::Debug);
        } else {
            self.sink.report(&format!("Did not find the {name} dictionary."), Severity::Debug);
        }
        found
    }
}

type Predicate = dyn Fn(&Evidence<'_>) -> bool + Send + Sync;

/// One `(evidence -> kind)` step of solver detection.
pub struct DetectionRule {
    kind: SolverKind,
    rationale: Cow<'static, str>,
    predicate: Box<Predicate>,
}

impl fmt::Debug for DetectionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DetectionRule")
            .field("kind", &self.kind)
            .field("rationale", &self.rationale)
            .finish_non_exhaustive()
    }
}

impl DetectionRule {
    /// Creates a rule concluding `kind` when `predicate` holds.
    ///
    /// `rationale` completes the sentence "This is a <kind> solver, as ...".
    pub fn new(
        kind: SolverKind,
        rationale: impl Into<Cow<'static, str>>,
        predicate: impl Fn(&Evidence<'_>) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self { kind, rationale: rationale.into(), predicate: Box::new(predicate) }
    }

    /// Transport properties present means a basic solver.
    #[must_use]
    pub fn transport_properties() -> Self {
        Self::new(
            SolverKind::Basic,
            "transport properties are provided, while turbulence properties are not provided",
            |evidence| evidence.dictionary(&evidence.config.transport_properties_document_name),
        )
    }

    #[must_use]
    pub const fn kind(&self) -> SolverKind {
        self.kind
    }

    #[must_use]
    pub fn rationale(&self) -> &str {
        &self.rationale
    }
}

/// Resolves the solver kind from a declared value and, when needed, detection rules.
#[derive(Debug)]
pub struct SolverKindResolver {
    rules: Vec<DetectionRule>,
}

impl Default for SolverKindResolver {
    fn default() -> Self {
        Self { rules: vec![DetectionRule::transport_properties()] }
    }
}

impl SolverKindResolver {
    /// A resolver without any detection rule: only declared kinds resolve.
    #[must_use]
    pub const fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule. It is evaluated after every rule already present.
    #[must_use]
    pub fn with_rule(mut self, rule: DetectionRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(&self) -> impl Iterator<Item = &DetectionRule> {
        self.rules.iter()
    }

    /// Resolves `declared` into one of the concrete solver kinds.
    ///
    /// The probe is only queried when `declared` is not one of `basic`, `compressible`
    /// or `incompressible`.
    ///
    /// # Errors
    /// Returns [`AdapterError::SolverKindIndeterminate`] if detection is needed and no
    /// rule holds.
    pub fn resolve(
        &self,
        declared: &str,
        config: &ModuleConfig,
        probe: &dyn SimulationProbe,
        sink: &dyn DiagnosticsSink,
    ) -> Result<SolverKind, AdapterError> {
        let kind = SolverKind::from_declared(declared);
        if kind.is_resolved() {
            sink.report(&format!("Known solver type: {kind}"), Severity::Debug);
            return Ok(kind);
        }

        // Unrecognized literals are not rejected; they are detected like an empty value.
        if declared.is_empty() || declared == SOLVER_TYPE_NONE {
            sink.report("Determining the solver type...", Severity::Debug);
        } else {
            sink.report("Unknown solver type. Determining the solver type...", Severity::Debug);
        }

        self.detect(config, probe, sink)
    }

    fn detect(
        &self,
        config: &ModuleConfig,
        probe: &dyn SimulationProbe,
        sink: &dyn DiagnosticsSink,
    ) -> Result<SolverKind, AdapterError> {
        let evidence = Evidence { probe, config, sink };

        if let Some(rule) = self.rules.iter().find(|rule| (rule.predicate)(&evidence)) {
            sink.report(
                &format!("This is a {} solver, as {}.", rule.kind, rule.rationale),
                Severity::Debug,
            );
            return Ok(rule.kind);
        }

        sink.report(
            "Could not determine the solver type, or this is not a compatible solver: \
             neither transport, nor turbulence properties are provided.",
            Severity::Error,
        );
        Err(AdapterError::SolverKindIndeterminate {
            message: format!("no detection rule matched ({} checked)", self.rules.len()).into(),
            context: None,
        })
    }
}
