//! Spin command
//!
//! Usage: lighthouse spin [--level <L>] [--format json|csv|xml] [--config <FILE>]

use std::path::PathBuf;

use clap::Args;
use lighthouse_core::export::to_json;
use lighthouse_core::logging_facility;
use lighthouse_core::{export, log_sp_error, ExportFormat, Level, Registry, Sample, SpError};

#[derive(Debug, Args)]
pub struct SpinArgs {
    /// Disclosure level, by number or name (defaults to the configured response level)
    #[arg(long)]
    pub level: Option<Level>,

    /// Output format
    #[arg(long, default_value = "json")]
    pub format: ExportFormat,

    /// TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Database → application → API chain, as a request handler would build it
fn demo_chain() -> lighthouse_core::Result<SpError> {
    let db = SpError::new(
        Sample::new("Failed to connect to database")
            .with_message("en", "Db connection failed")
            .with_hint("Check the connection string and credentials")
            .with_level(Level::DeepDebug),
    )?;

    let app = db
        .wrap_new(
            Sample::new("Database error")
                .with_message("en", "Could not load the account")
                .with_hint("Inspect the repository logs")
                .with_level(Level::MediumDebug),
        )
        .map_err(|e| e.reason().clone())?;

    let api = app
        .wrap_new(
            Sample::new("Internal Error")
                .with_message("en", "Something went wrong")
                .with_message("ru", "Что-то пошло не так")
                .with_hint("Please try again later")
                .with_http_code(500)
                .with_level(Level::HighDebug),
        )
        .map_err(|e| e.reason().clone())?;

    Ok(api)
}

/// Execute spin command
pub fn execute(args: SpinArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config(args.config.as_deref())?;
    logging_facility::init(config.profile);

    let registry = Registry::new();
    let err = demo_chain()?;
    log_sp_error!(registry, err, config.log_level, lang = config.language);

    let level = args.level.unwrap_or(config.response_level);
    let spun = err.spin(level, &registry);

    let rendered = match (&spun, args.format) {
        (None, ExportFormat::Json) => b"null".to_vec(),
        (Some(shown), ExportFormat::Json) => to_json(shown)?.into_bytes(),
        (_, format) => export(format, spun.as_slice())?,
    };
    super::print_bytes(&rendered)
}
