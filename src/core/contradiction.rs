//! Contradiction detector: competing claims across sessions
//!
//! Works on the unmerged sessions so every piece of evidence keeps its
//! session index. Emits raw evidence only; `operative_claim` states which
//! side of a conflict the trust policy believes.

use crate::EMOTIONAL_INCONSISTENCY_MIN_TONES;
use crate::core::claims::{experience_mentions, extract_tone, has_leadership_role, has_solo_work};
use crate::core::lexicon::keyword_surface;
use crate::types::{Claim, DeceptionPattern, LieType, Session};

/// Contradiction detector
#[derive(Debug, Default)]
pub struct ContradictionDetector;

impl ContradictionDetector {
    /// Create new detector
    pub fn new() -> Self {
        Self
    }

    /// All patterns: experience, leadership, emotional (in that order)
    pub fn detect(&self, sessions: &[Session]) -> Vec<DeceptionPattern> {
        [
            self.experience_inflation(sessions),
            self.leadership_contradiction(sessions),
            self.emotional_inconsistency(sessions),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// More than one distinct experience claim across the sessions
    pub fn experience_inflation(&self, sessions: &[Session]) -> Option<DeceptionPattern> {
        let mentions = experience_mentions(sessions);

        let mut claims: Vec<String> = Vec::new();
        let mut involved: Vec<u32> = Vec::new();
        for mention in &mentions {
            if !claims.contains(&mention.text) {
                claims.push(mention.text.clone());
            }
            if !involved.contains(&mention.session) {
                involved.push(mention.session);
            }
        }

        if claims.len() < 2 {
            return None;
        }
        Some(DeceptionPattern::new(LieType::ExperienceInflation, claims, involved))
    }

    /// Leadership claimed in one session, solo work admitted in any
    pub fn leadership_contradiction(&self, sessions: &[Session]) -> Option<DeceptionPattern> {
        let mut leading: Vec<u32> = Vec::new();
        let mut solo: Vec<u32> = Vec::new();

        for session in sessions {
            let surface = keyword_surface(&session.text);
            if has_leadership_role(&surface) {
                leading.push(session.index);
            }
            if has_solo_work(&surface) {
                solo.push(session.index);
            }
        }

        if leading.is_empty() || solo.is_empty() {
            return None;
        }
        leading.extend(solo);
        Some(DeceptionPattern::new(
            LieType::LeadershipContradiction,
            vec!["claimed leadership".to_string(), "works alone".to_string()],
            leading,
        ))
    }

    /// Tone swings across at least three classes
    pub fn emotional_inconsistency(&self, sessions: &[Session]) -> Option<DeceptionPattern> {
        let tones: Vec<(u32, &'static str)> = sessions
            .iter()
            .filter_map(|s| extract_tone(s).map(|tone| (s.index, tone.as_str())))
            .collect();

        let mut distinct: Vec<&str> = Vec::new();
        for (_, label) in &tones {
            if !distinct.contains(label) {
                distinct.push(*label);
            }
        }
        if distinct.len() < EMOTIONAL_INCONSISTENCY_MIN_TONES {
            return None;
        }

        Some(DeceptionPattern::new(
            LieType::EmotionalInconsistency,
            tones.iter().map(|(_, label)| label.to_string()).collect(),
            tones.iter().map(|(index, _)| *index).collect(),
        ))
    }
}

/// Trust policy for conflicting claims of one category: the unhedged claim
/// from the highest session index wins; hedged claims never do.
pub fn operative_claim<'a, I>(claims: I) -> Option<&'a Claim>
where
    I: IntoIterator<Item = &'a Claim>,
{
    claims
        .into_iter()
        .filter(|c| !c.hedged)
        .max_by_key(|c| c.session)
}

// =============================================================================
// TESTS
// =============================================================================
