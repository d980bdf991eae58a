//! Claim types produced by the extractors

use serde::{Deserialize, Serialize};
use crate::{MONTHS_PER_YEAR, UNKNOWN};

/// What a claim is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimCategory {
    Experience,
    Language,
    Mastery,
    Leadership,
    TeamContext,
    KeywordSkill,
    ConfidenceTone,
}

impl ClaimCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Experience => "experience",
            Self::Language => "language",
            Self::Mastery => "mastery",
            Self::Leadership => "leadership",
            Self::TeamContext => "team_context",
            Self::KeywordSkill => "keyword_skill",
            Self::ConfidenceTone => "confidence_tone",
        }
    }
}

impl std::fmt::Display for ClaimCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One atomic assertion, tagged with where it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    pub category: ClaimCategory,
    pub value: String,
    /// Index of the session that produced it
    pub session: u32,
    /// Sentence carried an uncertainty qualifier
    pub hedged: bool,
}

impl Claim {
    pub fn new(category: ClaimCategory, value: impl Into<String>, session: u32, hedged: bool) -> Self {
        Self {
            category,
            value: value.into(),
            session,
            hedged,
        }
    }
}

/// A numeric experience mention ("6 years", "a year", "3 months")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceMention {
    /// Duration converted to months
    pub months: u32,
    /// Canonical claim text, e.g. "6 years" or "1 month"
    pub text: String,
    pub session: u32,
    pub hedged: bool,
}

impl ExperienceMention {
    pub fn years(count: u32, session: u32, hedged: bool) -> Self {
        Self {
            months: count.saturating_mul(MONTHS_PER_YEAR),
            text: plural(count, "year"),
            session,
            hedged,
        }
    }

    pub fn months(count: u32, session: u32, hedged: bool) -> Self {
        Self {
            months: count,
            text: plural(count, "month"),
            session,
            hedged,
        }
    }

    pub fn to_claim(&self) -> Claim {
        Claim::new(ClaimCategory::Experience, self.text.clone(), self.session, self.hedged)
    }
}

/// "1 year", "6 years"
pub(crate) fn plural(count: u32, unit: &str) -> String {
    if count == 1 {
        format!("{} {}", count, unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

/// Skill level bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mastery {
    Beginner,
    Intermediate,
    Advanced,
}

impl Mastery {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl std::fmt::Display for Mastery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resolved programming experience
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Experience {
    /// Median of the numeric mentions
    Measured { months: u32 },
    /// No numbers, but a level keyword
    Qualitative(Mastery),
    Unknown,
}

impl std::fmt::Display for Experience {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Measured { months } if *months < MONTHS_PER_YEAR => {
                write!(f, "{}", plural(*months, "month"))
            }
            Self::Measured { months } => {
                let years = months / MONTHS_PER_YEAR;
                write!(f, "{}-{} years", years, years + 1)
            }
            Self::Qualitative(level) => write!(f, "{}", level),
            Self::Unknown => write!(f, "{}", UNKNOWN),
        }
    }
}

/// Leadership posture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leadership {
    Claimed,
    NotClaimed,
}

impl Leadership {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Claimed => "claimed leadership experience",
            Self::NotClaimed => "no leadership claims",
        }
    }
}

impl std::fmt::Display for Leadership {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Working context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamContext {
    Individual,
    /// Largest team size cited
    Team { size: u32 },
    Unknown,
}

impl std::fmt::Display for TeamContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Individual => write!(f, "individual contributor"),
            Self::Team { size } => write!(f, "team member/lead ({} person team)", size),
            Self::Unknown => write!(f, "{}", UNKNOWN),
        }
    }
}

/// Per-session emotional register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToneClass {
    Confident,
    Uncertain,
    EmotionalBreakdown,
}

impl ToneClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Confident => "confident",
            Self::Uncertain => "uncertain",
            Self::EmotionalBreakdown => "emotional_breakdown",
        }
    }
}

impl std::fmt::Display for ToneClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
