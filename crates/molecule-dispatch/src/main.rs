//! Resolve a host version string and report the adapter it maps to.
//!
//! Usage: `molecule-probe <platform-version> [config.yaml]`
use molecule_core::{CapabilityConfig, CapabilityError};
use std::process::ExitCode;

fn run() -> Result<(), CapabilityError> {
    let mut args = std::env::args().skip(1);
    let platform = args
        .next()
        .or_else(|| std::env::var("MOLECULE_PLATFORM_VERSION").ok())
        .ok_or_else(|| CapabilityError::Config("missing platform version argument".to_string()))?;
    let config = match args.next() {
        Some(path) => CapabilityConfig::load(&path)?,
        None => CapabilityConfig::default(),
    };

    let dispatcher = molecule_dispatch::initialize(&platform, config)?;
    println!("{} -> {}", dispatcher.version(), dispatcher.adapter_name());
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
