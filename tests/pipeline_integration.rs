//! End-to-end tests
//!
//! Tests the full path: transcript → TruthWeaver → report sinks

use pretty_assertions::assert_eq;
use serde_json::Value;
use truth_weaver::core::{render_json, render_report, save_json, save_report, TruthWeaver};
use truth_weaver::types::{LieType, ShadowVerdict};

const ATLAS: &str = "subject: atlas\nsession:1\nI am a senior engineer with 6 years experience.\nsession:2\nIt was actually an internship, maybe a year.\n";

#[test]
fn test_end_to_end_atlas() {
    let verdicts = TruthWeaver::new().weave(ATLAS).unwrap();
    assert_eq!(verdicts.len(), 1);

    let atlas = &verdicts[0];
    assert_eq!(atlas.shadow_id, "atlas");
    // months [72, 12] → upper median 72
    assert_eq!(atlas.revealed_truth.programming_experience, "6-7 years");
    assert_eq!(atlas.revealed_truth.leadership_claims, "claimed leadership experience");
    assert_eq!(atlas.revealed_truth.skill_mastery, "advanced");

    let pattern = atlas.pattern(LieType::ExperienceInflation).unwrap();
    assert_eq!(pattern.contradictory_claims, vec!["6 years", "1 year"]);
    assert_eq!(pattern.sessions_involved, vec![1, 2]);
}

#[test]
fn test_weave_is_deterministic() {
    let weaver = TruthWeaver::new();
    let text = "shadow: orion\nsession 1\nI lead 10 people with Java and Docker for 9 years.\n\
                session 2\nI work alone, maybe 2 years.\nsession 3\nDefinitely 4 years.\n";
    let first = weaver.weave(text).unwrap();
    let second = weaver.weave(text).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_unmarked_transcript_still_yields_verdict() {
    let verdicts = TruthWeaver::new()
        .weave("I started learning Go last winter.\n\nNow about 8 months in.")
        .unwrap();
    assert_eq!(verdicts.len(), 1);
    assert_eq!(verdicts[0].shadow_id, truth_weaver::FALLBACK_SPEAKER);
    assert_eq!(verdicts[0].revealed_truth.programming_language, "go");
    assert_eq!(verdicts[0].revealed_truth.programming_experience, "8 months");
    assert_eq!(verdicts[0].revealed_truth.skill_mastery, "beginner");
}

#[test]
fn test_empty_transcript_yields_nothing() {
    assert!(TruthWeaver::new().weave("   \n").unwrap().is_empty());
}

#[test]
fn test_missing_file_is_fatal() {
    let err = TruthWeaver::new().weave_file("/nonexistent/transcript.txt").unwrap_err();
    assert_eq!(err.code(), "W001_INPUT_MISSING");
}

/// Both sinks carry the same records
#[test]
fn test_sinks_render_one_result() {
    let text = format!("{}subject: nova\nsession 1\nI work alone on Rust.\n", ATLAS);
    let verdicts = TruthWeaver::new().weave(&text).unwrap();
    assert_eq!(verdicts.len(), 2);

    let dir = std::env::temp_dir().join(format!("truth_weaver_sinks_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let report_path = dir.join("output.txt");
    let json_path = dir.join("truth_analysis.json");

    save_report(&verdicts, report_path.to_str().unwrap()).unwrap();
    save_json(&verdicts, json_path.to_str().unwrap()).unwrap();

    let report = std::fs::read_to_string(&report_path).unwrap();
    let json = std::fs::read_to_string(&json_path).unwrap();
    assert_eq!(report, render_report(&verdicts).unwrap());
    assert_eq!(json, render_json(&verdicts).unwrap());

    let delimiter = "=".repeat(truth_weaver::REPORT_DELIMITER_WIDTH);
    let from_report: Vec<ShadowVerdict> = report
        .split(delimiter.as_str())
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| serde_json::from_str(chunk).unwrap())
        .collect();
    let from_json: Vec<ShadowVerdict> = serde_json::from_str(&json).unwrap();
    assert_eq!(from_report, from_json);
    assert_eq!(from_json, verdicts);

    let value: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value[1]["shadow_id"], "nova");
    assert_eq!(value[1]["revealed_truth"]["team_experience"], "individual contributor");

    std::fs::remove_dir_all(&dir).ok();
}
