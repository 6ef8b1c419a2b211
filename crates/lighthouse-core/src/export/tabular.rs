//! Flattened row export for spreadsheets and XML consumers

use lighthouse_core_types::lang;
use serde::Serialize;

use crate::errors::{LighthouseError, Result};
use crate::model::SpError;

/// One exported layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow {
    pub msg: String,
    pub desc: String,
    pub hint: String,
    pub source: String,
    pub level: String,
    pub cause: String,
}

impl From<&SpError> for ExportRow {
    fn from(err: &SpError) -> Self {
        Self {
            msg: err.message(lang::REQUIRED).unwrap_or_default().to_string(),
            desc: err.description().to_string(),
            hint: err.hint().to_string(),
            source: err.source().to_string(),
            level: err.level().to_string(),
            cause: err.cause().map(|c| c.to_string()).unwrap_or_default(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename = "errors")]
struct XmlDocument<'a> {
    #[serde(rename = "error")]
    rows: &'a [ExportRow],
}

/// CSV with a header row, one row per error
///
/// # Errors
///
/// Returns `LighthouseError::Export` if the writer fails.
pub fn to_csv(errs: &[SpError]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for err in errs {
        writer.serialize(ExportRow::from(err))?;
    }
    writer.into_inner().map_err(|e| LighthouseError::Export {
        format: "csv".to_string(),
        message: e.to_string(),
    })
}

/// `<errors>` document with one `<error>` element per error
///
/// # Errors
///
/// Returns `LighthouseError::Export` if the serializer fails.
pub fn to_xml(errs: &[SpError]) -> Result<Vec<u8>> {
    let rows: Vec<ExportRow> = errs.iter().map(ExportRow::from).collect();
    let document = quick_xml::se::to_string(&XmlDocument { rows: &rows }).map_err(|e| {
        LighthouseError::Export {
            format: "xml".to_string(),
            message: e.to_string(),
        }
    })?;
    Ok(document.into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;
    use crate::model::Sample;

    fn layer(desc: &str) -> SpError {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "refused");
        SpError::new(
            Sample::new(desc)
                .with_message("en", "Database unavailable")
                .with_hint("Check credentials")
                .with_level(Level::DeepDebug)
                .with_cause(io),
        )
        .unwrap()
    }

    #[test]
    fn test_row_projection() {
        let row = ExportRow::from(&layer("db down"));
        assert_eq!(row.msg, "Database unavailable");
        assert_eq!(row.desc, "db down");
        assert_eq!(row.level, "255");
        assert_eq!(row.cause, "refused");
    }

    #[test]
    fn test_row_without_cause_is_empty() {
        let err = SpError::new(Sample::new("d").with_message("en", "m")).unwrap();
        assert_eq!(ExportRow::from(&err).cause, "");
    }

    #[test]
    fn test_csv_has_header_and_rows() {
        let out = String::from_utf8(to_csv(&[layer("a"), layer("b")]).unwrap()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "msg,desc,hint,source,level,cause");
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("Database unavailable,a,Check credentials,"));
        assert!(lines[1].ends_with(",255,refused"));
    }

    #[test]
    fn test_csv_of_nothing_is_empty() {
        assert!(to_csv(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_xml_document_shape() {
        let out = String::from_utf8(to_xml(&[layer("a")]).unwrap()).unwrap();
        assert!(out.starts_with("<errors>"));
        assert!(out.contains("<error><msg>Database unavailable</msg><desc>a</desc>"));
        assert!(out.contains("<level>255</level><cause>refused</cause></error>"));
        assert!(out.ends_with("</errors>"));
    }
}
