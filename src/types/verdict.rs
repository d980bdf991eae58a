//! Verdict records: the serialized output of the weaver

use serde::{Deserialize, Serialize};
use crate::types::{Claim, ClaimCategory};

/// Kind of cross-session contradiction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LieType {
    /// More than one distinct experience duration claimed
    ExperienceInflation,
    /// Leadership claimed while also working alone
    LeadershipContradiction,
    /// Three or more tone classes across sessions
    EmotionalInconsistency,
}

impl LieType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ExperienceInflation => "experience_inflation",
            Self::LeadershipContradiction => "leadership_contradiction",
            Self::EmotionalInconsistency => "emotional_inconsistency",
        }
    }
}

impl std::fmt::Display for LieType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One detected contradiction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeceptionPattern {
    pub lie_type: LieType,
    /// Conflicting claim strings, first-seen order
    pub contradictory_claims: Vec<String>,
    /// Session indices, encounter order
    pub sessions_involved: Vec<u32>,
}

impl DeceptionPattern {
    pub fn new(lie_type: LieType, contradictory_claims: Vec<String>, sessions_involved: Vec<u32>) -> Self {
        Self {
            lie_type,
            contradictory_claims,
            sessions_involved,
        }
    }
}

/// Resolved fields, one value per claim category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealedTruth {
    pub programming_experience: String,
    pub programming_language: String,
    pub skill_mastery: String,
    pub leadership_claims: String,
    pub team_experience: String,
    pub skills_and_other_keywords: Vec<String>,
}

/// Per-speaker synthesis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShadowVerdict {
    pub shadow_id: String,
    pub revealed_truth: RevealedTruth,
    pub deception_patterns: Vec<DeceptionPattern>,
}

impl ShadowVerdict {
    /// First pattern of the given type, if any
    pub fn pattern(&self, lie_type: LieType) -> Option<&DeceptionPattern> {
        self.deception_patterns.iter().find(|p| p.lie_type == lie_type)
    }
}

/// Verdict plus the claim ledger it was built from
#[derive(Debug, Clone)]
pub struct ShadowAnalysis {
    pub verdict: ShadowVerdict,
    /// Every claim, session order
    pub claims: Vec<Claim>,
}

impl ShadowAnalysis {
    /// Claims of one category, session order
    pub fn claims_for(&self, category: ClaimCategory) -> Vec<&Claim> {
        self.claims.iter().filter(|c| c.category == category).collect()
    }
}
