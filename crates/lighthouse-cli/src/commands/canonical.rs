//! Canonical catalogue command
//!
//! Usage: lighthouse canonical [--format json|csv|xml]

use clap::Args;
use lighthouse_core::{export, Canonical, ExportFormat, Registry, SpError};

#[derive(Debug, Args)]
pub struct CanonicalArgs {
    /// Output format
    #[arg(long, default_value = "json")]
    pub format: ExportFormat,
}

/// Execute canonical command
pub fn execute(args: CanonicalArgs) -> Result<(), Box<dyn std::error::Error>> {
    let registry = Registry::new();
    let errs: Vec<SpError> = Canonical::ALL
        .into_iter()
        .map(|kind| registry.canonical(kind))
        .collect();

    super::print_bytes(&export(args.format, &errs)?)
}
