use proptest::prelude::*;
use std::sync::Arc;
use vv_adapter::{AdapterError, Interface, MemorySink, ObjectRegistry, Severity, VolumeVolume};

fn configured() -> (VolumeVolume, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    let simulation = ObjectRegistry::new().with_object("transportProperties").into_handle();
    let mut module = VolumeVolume::new(simulation, sink.clone());
    module.configure(&serde_json::json!({})).expect("default case configures");
    sink.clear();
    (module, sink)
}

#[test]
fn temperature_writer_is_registered_once() {
    let (module, sink) = configured();
    let mut interface = Interface::new();

    module.add_writers("Temperature", &mut interface).unwrap();

    assert_eq!(interface.writers().len(), 1);
    assert!(interface.readers().is_empty());
    let registration = &interface.writers()[0];
    assert_eq!(registration.name(), "Temperature");
    assert_eq!(registration.handler().quantity(), "Temperature");
    assert_eq!(registration.handler().field_name(), "T");
    assert_eq!(sink.messages(Severity::Debug), vec!["Added writer: Temperature.".to_owned()]);
}

#[test]
fn temperature_reader_is_registered_once() {
    let (module, sink) = configured();
    let mut interface = Interface::new();

    module.add_readers("TemperatureFlux", &mut interface).unwrap();

    assert_eq!(interface.readers().len(), 1);
    assert!(interface.writers().is_empty());
    assert_eq!(interface.readers()[0].name(), "TemperatureFlux");
    assert!(sink.contains("Added reader: Temperature."));
}

#[test]
fn unknown_channels_are_rejected() {
    let (module, sink) = configured();
    let mut interface = Interface::new();

    for name in ["Pressure", "", "temperature", "HeatTemperature", "TEMPERATURE"] {
        let err = module.add_writers(name, &mut interface).unwrap_err();
        assert!(
            matches!(&err, AdapterError::UnknownChannel { name: n, .. } if n == name),
            "unexpected error for {name:?}: {err}"
        );
        let err = module.add_readers(name, &mut interface).unwrap_err();
        assert!(matches!(err, AdapterError::UnknownChannel { .. }));
    }

    assert_eq!(interface.len(), 0);
    assert!(sink.contains("Unknown data type - cannot add Pressure."));
}

#[test]
fn failures_do_not_affect_other_channels() {
    let (module, _) = configured();
    let mut interface = Interface::new();

    module.add_writers("Temperature", &mut interface).unwrap();
    assert!(module.add_writers("Velocity", &mut interface).is_err());
    module.add_readers("Temperature", &mut interface).unwrap();

    assert_eq!(interface.writers().len(), 1);
    assert_eq!(interface.readers().len(), 1);
}

#[test]
fn repeated_dispatch_registers_independently() {
    let (module, _) = configured();
    let mut interface = Interface::new();

    module.add_writers("Temperature", &mut interface).unwrap();
    module.add_writers("Temperature", &mut interface).unwrap();

    let writers = interface.writers();
    assert_eq!(writers.len(), 2);
    assert!(!std::ptr::addr_eq(writers[0].handler(), writers[1].handler()));
}

proptest! {
    #[test]
    fn any_temperature_prefixed_name_registers(suffix in "[A-Za-z0-9_:-]{0,24}") {
        let (module, _) = configured();
        let mut interface = Interface::new();
        let name = format!("Temperature{suffix}");

        module.add_writers(&name, &mut interface).unwrap();
        module.add_readers(&name, &mut interface).unwrap();

        prop_assert_eq!(interface.writers().len(), 1);
        prop_assert_eq!(interface.readers().len(), 1);
        prop_assert_eq!(interface.writers()[0].name(), name.as_str());
    }

    #[test]
    fn other_names_register_nothing(
        name in "[A-Za-z0-9_]{0,24}".prop_filter("temperature prefix", |n| !n.starts_with("Temperature"))
    ) {
        let (module, _) = configured();
        let mut interface = Interface::new();

        let is_unknown = matches!(
            module.add_writers(&name, &mut interface),
            Err(AdapterError::UnknownChannel { .. })
        );
        prop_assert!(is_unknown);
        prop_assert_eq!(interface.len(), 0);
    }
}
