//! TruthWeaver: per-shadow orchestration
//!
//! Segment → extract (merged text) + detect (per session) → verdict.
//! Missing evidence never fails a shadow; it reads as "unknown".

use std::sync::Arc;
use crate::UNKNOWN;
use crate::core::claims::{
    collect_claims, extract_experience, extract_language, extract_leadership, extract_mastery,
    extract_skills, extract_team_context,
};
use crate::core::contradiction::ContradictionDetector;
use crate::core::observer::{SilentObserver, WeaveObserver};
use crate::core::report::read_transcript;
use crate::core::segmenter::SessionSegmenter;
use crate::types::{
    Result, RevealedTruth, ShadowAnalysis, ShadowSessions, ShadowVerdict, Transcript, WeaverError,
};

/// Analysis pipeline
#[derive(Clone)]
pub struct TruthWeaver {
    observer: Arc<dyn WeaveObserver>,
}

impl Default for TruthWeaver {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TruthWeaver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TruthWeaver").finish_non_exhaustive()
    }
}

impl TruthWeaver {
    /// Weaver with no observability side effects
    pub fn new() -> Self {
        Self::with_observer(Arc::new(SilentObserver))
    }

    pub fn with_observer(observer: Arc<dyn WeaveObserver>) -> Self {
        Self { observer }
    }

    /// Split a transcript into shadows and sessions
    pub fn segment(&self, content: &str) -> Transcript {
        let transcript = SessionSegmenter::new().segment(content);
        self.observer.segmented(&transcript);
        transcript
    }

    /// Analyze one shadow
    pub fn analyze(&self, shadow: &ShadowSessions) -> Result<ShadowAnalysis> {
        if shadow.sessions.is_empty() {
            return Err(WeaverError::EmptyShadow(shadow.id.clone()));
        }
        let sessions = &shadow.sessions;

        let claims = collect_claims(sessions);
        for claim in &claims {
            self.observer.claim(&shadow.id, claim);
        }

        let experience = extract_experience(sessions);
        let revealed_truth = RevealedTruth {
            programming_experience: experience.to_string(),
            programming_language: extract_language(sessions).unwrap_or(UNKNOWN).to_string(),
            skill_mastery: extract_mastery(sessions, &experience).to_string(),
            leadership_claims: extract_leadership(sessions).to_string(),
            team_experience: extract_team_context(sessions).to_string(),
            skills_and_other_keywords: extract_skills(sessions),
        };

        let deception_patterns = ContradictionDetector::new().detect(sessions);
        for pattern in &deception_patterns {
            self.observer.pattern(&shadow.id, pattern);
        }

        let verdict = ShadowVerdict {
            shadow_id: shadow.id.clone(),
            revealed_truth,
            deception_patterns,
        };
        self.observer.verdict(&verdict);

        Ok(ShadowAnalysis { verdict, claims })
    }

    /// Full pipeline, keeping the claim ledgers
    pub fn weave_detailed(&self, content: &str) -> Result<Vec<ShadowAnalysis>> {
        self.segment(content)
            .shadows()
            .iter()
            .map(|shadow| self.analyze(shadow))
            .collect()
    }

    /// Full pipeline: one verdict per shadow, transcript order
    pub fn weave(&self, content: &str) -> Result<Vec<ShadowVerdict>> {
        Ok(self
            .weave_detailed(content)?
            .into_iter()
            .map(|analysis| analysis.verdict)
            .collect())
    }

    /// Read a transcript file and weave it
    pub fn weave_file(&self, path: &str) -> Result<Vec<ShadowVerdict>> {
        let content = read_transcript(path)?;
        self.weave(&content)
    }
}

// =============================================================================
// TESTS
// =============================================================================
