//! Truth Weaver: claim extraction and contradiction detection
//!
//! Pipeline: transcript → SessionSegmenter → claim extractors +
//! ContradictionDetector → TruthWeaver → report sinks

pub mod core;
pub mod types;

// =============================================================================
// SEGMENTATION [C]
// =============================================================================

/// Maximum paragraph blocks used when no markers are found
pub const MAX_FALLBACK_SESSIONS: usize = 5;

/// Speaker for text that precedes the first speaker marker
pub const DEFAULT_SPEAKER: &str = "unknown_shadow";

/// Speaker for the paragraph fallback
pub const FALLBACK_SPEAKER: &str = "shadow_agent";

// =============================================================================
// RESOLUTION [C]
// =============================================================================

pub const MONTHS_PER_YEAR: u32 = 12;

/// Resolved experience below this many months reads as beginner
pub const BEGINNER_MAX_MONTHS: u32 = 12;

/// Resolved experience of at least this many years reads as advanced
pub const ADVANCED_MIN_YEARS: u32 = 5;

/// Distinct tone classes needed before tone shifts count as inconsistent
pub const EMOTIONAL_INCONSISTENCY_MIN_TONES: usize = 3;

/// Value reported for any field with no evidence
pub const UNKNOWN: &str = "unknown";

// =============================================================================
// OUTPUT [C]
// =============================================================================

/// Width of the `=` line between records in the human-readable report
pub const REPORT_DELIMITER_WIDTH: usize = 50;

pub const DEFAULT_INPUT_FILE: &str = "input.txt";
pub const DEFAULT_REPORT_FILE: &str = "output.txt";
pub const DEFAULT_JSON_FILE: &str = "truth_analysis.json";

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
