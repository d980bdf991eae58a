//! Observer hooks for the weaver
//!
//! The core never logs on its own. Callers inject an observer; the default
//! is silent.

use tracing::{debug, info, warn};
use crate::types::{Claim, DeceptionPattern, ShadowVerdict, Transcript};

/// Receives progress events from `TruthWeaver`
pub trait WeaveObserver: Send + Sync {
    fn segmented(&self, _transcript: &Transcript) {}
    fn claim(&self, _shadow: &str, _claim: &Claim) {}
    fn pattern(&self, _shadow: &str, _pattern: &DeceptionPattern) {}
    fn verdict(&self, _verdict: &ShadowVerdict) {}
}

/// No side effects
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentObserver;

impl WeaveObserver for SilentObserver {}

/// Forwards events to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl WeaveObserver for TracingObserver {
    fn segmented(&self, transcript: &Transcript) {
        if transcript.used_fallback {
            warn!("no usable markers, split transcript into paragraphs");
        }
        info!(
            shadows = transcript.len(),
            sessions = transcript.session_count(),
            "parsed transcript"
        );
        for shadow in transcript.shadows() {
            debug!(shadow = %shadow.id, sessions = shadow.sessions.len(), "shadow sessions");
        }
    }

    fn claim(&self, shadow: &str, claim: &Claim) {
        debug!(
            shadow,
            session = claim.session,
            category = %claim.category,
            hedged = claim.hedged,
            "claim: {}",
            claim.value
        );
    }

    fn pattern(&self, shadow: &str, pattern: &DeceptionPattern) {
        warn!(
            shadow,
            lie_type = %pattern.lie_type,
            sessions = ?pattern.sessions_involved,
            "contradiction: {:?}",
            pattern.contradictory_claims
        );
    }

    fn verdict(&self, verdict: &ShadowVerdict) {
        info!(
            shadow = %verdict.shadow_id,
            experience = %verdict.revealed_truth.programming_experience,
            language = %verdict.revealed_truth.programming_language,
            patterns = verdict.deception_patterns.len(),
            "analysis complete"
        );
    }
}
