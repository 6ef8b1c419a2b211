//! Wire formats for finalized error layers
//!
//! JSON is the full single-layer format and can be decoded back into a
//! finalized layer. CSV and XML are flattened, export-only row formats.

pub mod json;
pub mod tabular;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{LighthouseError, Result};
use crate::model::SpError;

pub use json::{from_json, to_json};
pub use tabular::{to_csv, to_xml, ExportRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
    Xml,
}

impl ExportFormat {
    pub fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv",
            ExportFormat::Xml => "application/xml",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Xml => "xml",
        })
    }
}

impl FromStr for ExportFormat {
    type Err = LighthouseError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "xml" => Ok(ExportFormat::Xml),
            other => Err(LighthouseError::Export {
                format: other.to_string(),
                message: "unsupported export format".to_string(),
            }),
        }
    }
}

/// Render errors in the given format
///
/// JSON output is an array of layer objects.
///
/// # Errors
///
/// Returns `LighthouseError::Serialization` or `LighthouseError::Export`
/// when the encoder fails.
pub fn export(format: ExportFormat, errs: &[SpError]) -> Result<Vec<u8>> {
    match format {
        ExportFormat::Json => Ok(serde_json::to_vec(errs)?),
        ExportFormat::Csv => to_csv(errs),
        ExportFormat::Xml => to_xml(errs),
    }
}
