//! Core types for Truth Weaver

mod session;
mod claim;
mod verdict;
mod error;

pub use session::{Session, ShadowSessions, Transcript, merged_text};
pub use claim::{Claim, ClaimCategory, ExperienceMention, Experience, Mastery, Leadership, TeamContext, ToneClass};
pub use verdict::{LieType, DeceptionPattern, RevealedTruth, ShadowVerdict, ShadowAnalysis};
pub use error::{WeaverError, Result};
