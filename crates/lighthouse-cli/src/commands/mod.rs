pub mod canonical;
pub mod spin;

use std::io::Write;
use std::path::Path;

use lighthouse_core::LighthouseConfig;

/// Config from `path` (or defaults), with `LIGHTHOUSE_*` overrides applied
pub fn load_config(path: Option<&Path>) -> Result<LighthouseConfig, Box<dyn std::error::Error>> {
    let config = match path {
        Some(path) => LighthouseConfig::from_file(path)?,
        None => LighthouseConfig::default(),
    };
    Ok(config.with_env_overrides()?)
}

/// Write rendered bytes to stdout, newline-terminated; nothing for empty output
pub fn print_bytes(bytes: &[u8]) -> Result<(), Box<dyn std::error::Error>> {
    if bytes.is_empty() {
        return Ok(());
    }
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(bytes)?;
    if !bytes.ends_with(b"\n") {
        stdout.write_all(b"\n")?;
    }
    Ok(())
}
