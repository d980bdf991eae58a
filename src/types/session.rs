//! Session model produced by the segmenter
//!
//! - Session = one numbered testimony block of one speaker
//! - ShadowSessions = all sessions of one speaker, transcript order
//! - Transcript = every speaker, first-appearance order

use serde::{Deserialize, Serialize};

/// One testimony block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// 1-based index; higher = more recent = more authoritative
    pub index: u32,
    /// Whitespace-joined content lines
    pub text: String,
}

impl Session {
    pub fn new(index: u32, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }
}

/// All sessions attributed to one speaker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShadowSessions {
    /// Lowercase speaker identifier
    pub id: String,
    /// Sessions in transcript order
    pub sessions: Vec<Session>,
}

impl ShadowSessions {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            sessions: Vec::new(),
        }
    }

    /// Index the next unnumbered session would get; saturates at `u32::MAX`
    pub fn next_index(&self) -> u32 {
        self.sessions.last().map(|s| s.index.saturating_add(1)).unwrap_or(1)
    }

    /// Every session joined with a single space
    pub fn merged_text(&self) -> String {
        merged_text(&self.sessions)
    }
}

/// Join session texts the way the extractors see them
pub fn merged_text(sessions: &[Session]) -> String {
    sessions
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Segmented transcript
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    shadows: Vec<ShadowSessions>,
    /// True when no markers were usable and paragraphs were split instead
    pub used_fallback: bool,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a session to a speaker, registering the speaker on first use
    pub fn push_session(&mut self, speaker: &str, session: Session) {
        match self.shadows.iter_mut().find(|s| s.id == speaker) {
            Some(shadow) => shadow.sessions.push(session),
            None => {
                let mut shadow = ShadowSessions::new(speaker);
                shadow.sessions.push(session);
                self.shadows.push(shadow);
            }
        }
    }

    /// Next index for a speaker that has not announced one
    pub fn next_index(&self, speaker: &str) -> u32 {
        self.get(speaker).map(ShadowSessions::next_index).unwrap_or(1)
    }

    pub fn get(&self, speaker: &str) -> Option<&ShadowSessions> {
        self.shadows.iter().find(|s| s.id == speaker)
    }

    pub fn shadows(&self) -> &[ShadowSessions] {
        &self.shadows
    }

    pub fn into_shadows(self) -> Vec<ShadowSessions> {
        self.shadows
    }

    /// Number of speakers
    pub fn len(&self) -> usize {
        self.shadows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shadows.is_empty()
    }

    /// Sessions across all speakers
    pub fn session_count(&self) -> usize {
        self.shadows.iter().map(|s| s.sessions.len()).sum()
    }
}
