//! Report sinks: the pipeline's I/O ends
//!
//! Both renderings come from the same verdict slice through serde, so the
//! record schema is identical in each.

use tracing::{error, info};
use crate::REPORT_DELIMITER_WIDTH;
use crate::types::{Result, ShadowVerdict, WeaverError};

/// Read the transcript text
pub fn read_transcript(path: &str) -> Result<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            info!(path, chars = content.chars().count(), "read transcript");
            Ok(content)
        }
        Err(source) => {
            error!(path, %source, "transcript not readable");
            Err(WeaverError::InputMissing {
                path: path.to_string(),
                source,
            })
        }
    }
}

/// Delimiter line between records
pub fn delimiter() -> String {
    "=".repeat(REPORT_DELIMITER_WIDTH)
}

/// Human-readable report: each record as pretty JSON followed by the
/// delimiter line
pub fn render_report(verdicts: &[ShadowVerdict]) -> Result<String> {
    let mut out = String::new();
    for verdict in verdicts {
        out.push_str(&serde_json::to_string_pretty(verdict)?);
        out.push('\n');
        out.push_str(&delimiter());
        out.push('\n');
    }
    Ok(out)
}

/// Machine-readable report: pretty JSON array
pub fn render_json(verdicts: &[ShadowVerdict]) -> Result<String> {
    Ok(serde_json::to_string_pretty(verdicts)?)
}

fn write_file(path: &str, content: &str) -> Result<()> {
    std::fs::write(path, content).map_err(|source| {
        error!(path, %source, "cannot write report");
        WeaverError::OutputUnwritable {
            path: path.to_string(),
            source,
        }
    })
}

/// Save the human-readable report
pub fn save_report(verdicts: &[ShadowVerdict], path: &str) -> Result<()> {
    write_file(path, &render_report(verdicts)?)?;
    info!(path, records = verdicts.len(), "saved report");
    Ok(())
}

/// Save the JSON array
pub fn save_json(verdicts: &[ShadowVerdict], path: &str) -> Result<()> {
    write_file(path, &render_json(verdicts)?)?;
    info!(path, records = verdicts.len(), "saved json");
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
