//! Keyword tables and the matching surface they run on
//!
//! Table order is significant wherever a lookup is first-match-wins
//! (languages, tones). Padded entries like `" go "` rely on the keyword
//! surface being space-padded with punctuation removed.

use lazy_static::lazy_static;
use regex::Regex;
use crate::types::ToneClass;

lazy_static! {
    // "about 3 years", "around a year"; runs on the keyword surface
    static ref RE_APPROXIMATE_NUMBER: Regex = Regex::new(
        r" (?:about|around) (?:(?:\d+\+?|one|two|three|four|five|six|seven|eight|nine|ten|eleven|twelve) |an? (?:years?|yrs?|months?|mos?) )"
    ).unwrap();
}

/// Programming languages in priority order (first match wins)
pub const LANGUAGE_TABLE: &[(&str, &[&str])] = &[
    ("python", &["python", " py ", "django", "flask", "pandas", "numpy"]),
    ("javascript", &["javascript", " js", "node", "react", "angular", "vue"]),
    ("java", &["java", "spring", "hibernate"]),
    ("c++", &["c++", "cpp", "c plus plus"]),
    ("go", &["golang", " go "]),
    ("rust", &["rust"]),
    ("sql", &["sql", "database", "mysql", "postgresql"]),
    ("c", &["c programming", " c "]),
    ("ruby", &["ruby", "rails"]),
];

pub const BEGINNER_KEYWORDS: &[&str] = &["beginner", "starting", "new to", "learning", "just started"];

pub const INTERMEDIATE_KEYWORDS: &[&str] = &["intermediate", "some experience", "working knowledge"];

pub const ADVANCED_KEYWORDS: &[&str] = &["advanced", "expert", "master", "senior", "lead", "architect"];

pub const LEADERSHIP_ROLE_KEYWORDS: &[&str] = &[
    "lead", " led ", "manager", "managed", "supervisor", "director", "head of", "senior",
];

pub const SOLO_WORK_KEYWORDS: &[&str] = &["alone", "solo", "individual", "myself", "on my own"];

/// Technical keywords reported as skills, in report order
pub const TECH_KEYWORDS: &[&str] = &[
    " machine learning ", " ml ", " ai ", "artificial intelligence",
    "data science", "analytics", "big data",
    "web development", "frontend", "backend", "full stack",
    "database", "sql", "nosql", "mongodb", "postgresql",
    "cloud", " aws ", "azure", "gcp", "docker", "kubernetes",
    " api ", " rest ", "graphql", "microservices",
    "testing", "unit testing", "integration testing",
    "agile", "scrum", "devops", "ci/cd",
];

/// Qualifiers that mark a sentence as hedged (word matched). "about" and
/// "around" hedge only in front of a number.
pub const HEDGE_KEYWORDS: &[&str] = &[
    "maybe", "perhaps", "probably", "possibly", "not sure", "i think", "i guess",
    "roughly", "approximately", "kind of", "sort of",
];

/// Tone classes in precedence order (word matched)
pub const TONE_TABLE: &[(ToneClass, &[&str])] = &[
    (ToneClass::Confident, &["confident", "sure", "definitely", "absolutely", "certainly"]),
    (ToneClass::Uncertain, &["maybe", "perhaps", "not sure", "uncertain", "unsure"]),
    (ToneClass::EmotionalBreakdown, &["sobbing", "crying", "breakdown", "emotional"]),
];

const PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', '(', ')', '[', ']', '{', '}', '"'];

/// Lowercase, punctuation-free, single-spaced text padded with one space
/// on each side
pub fn keyword_surface(text: &str) -> String {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| if PUNCTUATION.contains(&c) { ' ' } else { c })
        .collect();
    let words: Vec<&str> = cleaned.split_whitespace().collect();
    format!(" {} ", words.join(" "))
}

/// Any keyword occurs as a substring of the surface
pub fn contains_any(surface: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| surface.contains(k))
}

/// Keyword occurs as whole words
pub fn has_word(surface: &str, word: &str) -> bool {
    surface.contains(&format!(" {} ", word.trim()))
}

/// Whole-word occurrence not directly preceded by "not"
pub fn has_unnegated_word(surface: &str, word: &str) -> bool {
    let needle = format!(" {} ", word.trim());
    surface
        .match_indices(&needle)
        .any(|(pos, _)| !surface[..pos].ends_with(" not"))
}

/// First language in table order with a keyword on the surface
pub fn language_of(surface: &str) -> Option<&'static str> {
    LANGUAGE_TABLE
        .iter()
        .find(|(_, keywords)| contains_any(surface, keywords))
        .map(|(name, _)| *name)
}

/// Sentence carries an uncertainty qualifier
pub fn is_hedged(surface: &str) -> bool {
    HEDGE_KEYWORDS.iter().any(|k| has_word(surface, k)) || RE_APPROXIMATE_NUMBER.is_match(surface)
}

/// Tone by table precedence; a negated confident word does not count
pub fn tone_of(surface: &str) -> Option<ToneClass> {
    TONE_TABLE
        .iter()
        .find(|(tone, words)| match tone {
            ToneClass::Confident => words.iter().any(|w| has_unnegated_word(surface, w)),
            _ => words.iter().any(|w| has_word(surface, w)),
        })
        .map(|(tone, _)| *tone)
}

/// Title case the way skills are reported ("ci/cd" → "Ci/Cd")
pub fn title_case(keyword: &str) -> String {
    let mut out = String::with_capacity(keyword.len());
    let mut boundary = true;
    for c in keyword.trim().chars() {
        if c.is_alphabetic() {
            if boundary {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            boundary = false;
        } else {
            out.push(c);
            boundary = true;
        }
    }
    out
}
