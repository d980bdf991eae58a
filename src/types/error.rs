//! Error taxonomy for the weaver
//!
//! Degenerate segmentation and missing evidence are absorbed by the core;
//! only the cases below reach the caller.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeaverError {
    /// Transcript source could not be read
    #[error("transcript not readable at {path}: {source}")]
    InputMissing {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Speaker identified but no session content attributed to it
    #[error("shadow '{0}' has no sessions")]
    EmptyShadow(String),

    /// Verdict could not be rendered
    #[error("verdict serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Destination could not be written
    #[error("cannot write {path}: {source}")]
    OutputUnwritable {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl WeaverError {
    /// Stable code string (for logs and API bodies)
    pub fn code(&self) -> &'static str {
        match self {
            Self::InputMissing { .. } => "W001_INPUT_MISSING",
            Self::EmptyShadow(_) => "W002_EMPTY_SHADOW",
            Self::Serialize(_) => "W003_SERIALIZE",
            Self::OutputUnwritable { .. } => "W004_OUTPUT_UNWRITABLE",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::InputMissing { .. } => "Transcript source missing",
            Self::EmptyShadow(_) => "Identified shadow without sessions",
            Self::Serialize(_) => "Verdict serialization failed",
            Self::OutputUnwritable { .. } => "Output destination unwritable",
        }
    }
}

pub type Result<T> = std::result::Result<T, WeaverError>;
