use std::sync::atomic::{AtomicUsize, Ordering};
use vv_adapter::{
    AdapterError, MemorySink, ModuleConfig, Severity, SimulationProbe, SolverKind,
    SolverKindResolver,
};

#[derive(Debug, Default)]
struct CountingProbe {
    present: bool,
    queries: AtomicUsize,
}

impl CountingProbe {
    fn new(present: bool) -> Self {
        Self { present, queries: AtomicUsize::new(0) }
    }

    fn queries(&self) -> usize {
        self.queries.load(Ordering::Relaxed)
    }
}

impl SimulationProbe for CountingProbe {
    fn exists(&self, _name: &str) -> bool {
        self.queries.fetch_add(1, Ordering::Relaxed);
        self.present
    }
}

fn resolve(declared: &str, probe: &CountingProbe) -> Result<SolverKind, AdapterError> {
    SolverKindResolver::default().resolve(declared, &ModuleConfig::default(), probe, &MemorySink::new())
}

#[test]
fn declared_kinds_win_without_probing() {
    for present in [true, false] {
        for kind in SolverKind::RESOLVED {
            let probe = CountingProbe::new(present);
            assert_eq!(resolve(kind.as_ref(), &probe).unwrap(), kind);
            assert_eq!(probe.queries(), 0, "probe queried for declared {kind}");
        }
    }
}

#[test]
fn empty_declaration_with_transport_properties_is_basic() {
    let probe = CountingProbe::new(true);
    assert_eq!(resolve("", &probe).unwrap(), SolverKind::Basic);
    assert_eq!(probe.queries(), 1);
}

#[test]
fn empty_declaration_without_transport_properties_fails() {
    let probe = CountingProbe::new(false);
    let err = resolve("", &probe).unwrap_err();
    assert!(matches!(err, AdapterError::SolverKindIndeterminate { .. }));
}

#[test]
fn unrecognized_declaration_behaves_like_empty() {
    for present in [true, false] {
        let empty = resolve("", &CountingProbe::new(present));
        let bogus = resolve("bogus", &CountingProbe::new(present));
        match (empty, bogus) {
            (Ok(a), Ok(b)) => assert_eq!(a, b),
            (Err(a), Err(b)) => assert_eq!(a.to_string(), b.to_string()),
            (a, b) => panic!("diverging outcomes: {a:?} vs {b:?}"),
        }
    }
}

#[test]
fn detection_is_reported() {
    let sink = MemorySink::new();
    let probe = CountingProbe::new(false);
    let _ = SolverKindResolver::default().resolve("Basic", &ModuleConfig::default(), &probe, &sink);

    let debug = sink.messages(Severity::Debug);
    assert!(debug.contains(&"Unknown solver type. Determining the solver type...".to_owned()));
    assert!(debug.contains(&"Did not find the transportProperties dictionary.".to_owned()));
    assert_eq!(sink.messages(Severity::Error).len(), 1);
}

#[test]
fn explicit_none_requests_detection() {
    let sink = MemorySink::new();
    let probe = CountingProbe::new(true);
    let kind =
        SolverKindResolver::default().resolve("none", &ModuleConfig::default(), &probe, &sink);

    assert_eq!(kind.unwrap(), SolverKind::Basic);
    assert!(sink.contains("Determining the solver type..."));
    assert!(!sink.contains("Unknown solver type"));
    assert!(sink.contains("This is a basic solver"));
}
