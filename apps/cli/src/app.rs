use crate::args::Cli;
use anyhow::Context;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};
use vv_adapter::{
    CaseDirectory, ChannelRole, Interface, ObjectRegistry, SimulationHandle, TracingSink,
    VolumeVolume,
};
use vv_kernel::config::load_settings;

pub(crate) fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let mut module = VolumeVolume::new(simulation(cli), Arc::new(TracingSink));

    if cli.list_channels {
        list_channels(&module);
        return Ok(ExitCode::SUCCESS);
    }

    // Without a settings file every option keeps its default.
    let configured = match &cli.settings {
        Some(path) => module.configure(&load_settings(Some(path))?),
        None => module.configure(&serde_json::json!({})),
    };
    configured.context("Configuration failed")?;

    if let Some(kind) = module.solver_kind() {
        info!(solver_kind = %kind, "Volume-Volume module configured");
    }

    let mut interface = Interface::new();
    let mut failures = 0usize;

    for name in &cli.writes {
        if let Err(e) = module.add_writers(name, &mut interface) {
            error!(channel = %name, role = %ChannelRole::Write, "{e}");
            failures += 1;
        }
    }
    for name in &cli.reads {
        if let Err(e) = module.add_readers(name, &mut interface) {
            error!(channel = %name, role = %ChannelRole::Read, "{e}");
            failures += 1;
        }
    }

    print_registrations(&interface);
    info!(registered = interface.len(), failed = failures, "Channel registration finished");

    Ok(if failures == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn simulation(cli: &Cli) -> SimulationHandle {
    cli.case.as_ref().map_or_else(
        || cli.objects.iter().cloned().collect::<ObjectRegistry>().into_handle(),
        |root| CaseDirectory::new(root.clone()).into_handle(),
    )
}

fn list_channels(module: &VolumeVolume) {
    for family in module.dispatcher().families() {
        let roles: Vec<&str> = [ChannelRole::Read, ChannelRole::Write]
            .into_iter()
            .filter(|role| family.roles().supports(*role))
            .map(Into::into)
            .collect();
        println!("{}*\t{}\t{}", family.prefix(), family.label(), roles.join(","));
    }
}

fn print_registrations(interface: &Interface) {
    for role in [ChannelRole::Write, ChannelRole::Read] {
        for registration in interface.registrations(role) {
            println!("{role}\t{}\t{}", registration.name(), registration.handler().field_name());
        }
    }
}
