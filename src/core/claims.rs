//! Claim extractors: one pure function per category
//!
//! Verdict fields are resolved from the speaker's merged text (experience
//! from per-session mentions). `collect_claims` builds the per-session
//! ledger with hedge flags that the trust policy works on.

use lazy_static::lazy_static;
use regex::Regex;
use crate::{ADVANCED_MIN_YEARS, BEGINNER_MAX_MONTHS, MONTHS_PER_YEAR};
use crate::core::lexicon::{
    self, contains_any, keyword_surface, ADVANCED_KEYWORDS, BEGINNER_KEYWORDS,
    INTERMEDIATE_KEYWORDS, LANGUAGE_TABLE, LEADERSHIP_ROLE_KEYWORDS, SOLO_WORK_KEYWORDS,
    TECH_KEYWORDS,
};
use crate::types::{
    merged_text, Claim, ClaimCategory, Experience, ExperienceMention, Leadership, Mastery,
    Session, TeamContext, ToneClass,
};

lazy_static! {
    // "6 years", "10+ yrs", "3 months", "a year", "two years"
    static ref RE_EXPERIENCE: Regex = Regex::new(
        r"(?i)\b(?:(\d+)\+?\s*|(an?|one|two|three|four|five|six|seven|eight|nine|ten|eleven|twelve)\s+)(?:(years?|yrs?)|(months?|mos?))\b"
    ).unwrap();

    // "team of 5", "group of 12", "8 people", "4 developers"
    static ref RE_TEAM_SIZE: Regex = Regex::new(
        r"(?i)(?:team|group)\s+of\s+(\d+)|(\d+)\s+(?:people|members|developers|engineers)"
    ).unwrap();

    static ref RE_SENTENCE: Regex = Regex::new(r"[^.!?]+[.!?]*").unwrap();
}

fn word_number(word: &str) -> Option<u32> {
    let n = match word.to_lowercase().as_str() {
        "a" | "an" | "one" => 1,
        "two" => 2,
        "three" => 3,
        "four" => 4,
        "five" => 5,
        "six" => 6,
        "seven" => 7,
        "eight" => 8,
        "nine" => 9,
        "ten" => 10,
        "eleven" => 11,
        "twelve" => 12,
        _ => return None,
    };
    Some(n)
}

/// Words before a duration that make it a frequency ("once a month")
const FREQUENCY_WORDS: &[&str] = &["once", "twice", "per", "every", "each"];

fn bare_word(word: &str) -> String {
    word.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase()
}

/// Duration is a frequency, or a spelled duration used as a point in time
/// ("a year ago")
fn is_time_reference(text: &str, start: usize, end: usize, spelled: bool) -> bool {
    let before = text[..start].split_whitespace().last().map(bare_word);
    if before.is_some_and(|w| FREQUENCY_WORDS.contains(&w.as_str())) {
        return true;
    }
    let after = text[end..].split_whitespace().next().map(bare_word);
    spelled && after.as_deref() == Some("ago")
}

/// Numeric experience mentions in one piece of text, text order
pub fn experience_mentions_in(text: &str, session: u32, hedged: bool) -> Vec<ExperienceMention> {
    RE_EXPERIENCE
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            if is_time_reference(text, whole.start(), whole.end(), caps.get(1).is_none()) {
                return None;
            }
            let count = match (caps.get(1), caps.get(2)) {
                (Some(digits), _) => digits.as_str().parse().ok()?,
                (None, Some(word)) => word_number(word.as_str())?,
                (None, None) => return None,
            };
            if caps.get(3).is_some() {
                Some(ExperienceMention::years(count, session, hedged))
            } else {
                Some(ExperienceMention::months(count, session, hedged))
            }
        })
        .collect()
}

/// Split text into sentences (terminal punctuation kept)
pub fn sentences(text: &str) -> Vec<&str> {
    RE_SENTENCE
        .find_iter(text)
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Experience mentions of every session, hedged per sentence
pub fn experience_mentions(sessions: &[Session]) -> Vec<ExperienceMention> {
    let mut mentions = Vec::new();
    for session in sessions {
        for sentence in sentences(&session.text) {
            let hedged = lexicon::is_hedged(&keyword_surface(sentence));
            mentions.extend(experience_mentions_in(sentence, session.index, hedged));
        }
    }
    mentions
}

/// Team sizes cited in text
pub fn team_sizes(text: &str) -> Vec<u32> {
    RE_TEAM_SIZE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}

/// Level keyword evidence: advanced > beginner > intermediate
pub fn mastery_keyword(surface: &str) -> Option<Mastery> {
    if contains_any(surface, ADVANCED_KEYWORDS) {
        Some(Mastery::Advanced)
    } else if contains_any(surface, BEGINNER_KEYWORDS) {
        Some(Mastery::Beginner)
    } else if contains_any(surface, INTERMEDIATE_KEYWORDS) {
        Some(Mastery::Intermediate)
    } else {
        None
    }
}

pub fn has_leadership_role(surface: &str) -> bool {
    contains_any(surface, LEADERSHIP_ROLE_KEYWORDS)
}

pub fn has_solo_work(surface: &str) -> bool {
    contains_any(surface, SOLO_WORK_KEYWORDS)
}

/// Skill keywords present on a surface, title-cased, de-duplicated
pub fn skill_keywords(surface: &str) -> Vec<String> {
    let language_keywords = LANGUAGE_TABLE.iter().flat_map(|(_, keywords)| keywords.iter());
    let mut found: Vec<String> = Vec::new();
    for keyword in TECH_KEYWORDS.iter().chain(language_keywords) {
        if surface.contains(keyword) {
            let skill = lexicon::title_case(keyword);
            if !found.contains(&skill) {
                found.push(skill);
            }
        }
    }
    found
}

// =============================================================================
// EXTRACTORS
// =============================================================================

/// Median of all numeric mentions; falls back to level keywords
pub fn extract_experience(sessions: &[Session]) -> Experience {
    let mut months: Vec<u32> = experience_mentions(sessions).iter().map(|m| m.months).collect();
    if !months.is_empty() {
        months.sort_unstable();
        return Experience::Measured { months: months[months.len() / 2] };
    }

    let surface = keyword_surface(&merged_text(sessions));
    if contains_any(&surface, BEGINNER_KEYWORDS) {
        Experience::Qualitative(Mastery::Beginner)
    } else if contains_any(&surface, ADVANCED_KEYWORDS) {
        Experience::Qualitative(Mastery::Advanced)
    } else if contains_any(&surface, INTERMEDIATE_KEYWORDS) {
        Experience::Qualitative(Mastery::Intermediate)
    } else {
        Experience::Unknown
    }
}

/// First language of the priority table found anywhere
pub fn extract_language(sessions: &[Session]) -> Option<&'static str> {
    lexicon::language_of(&keyword_surface(&merged_text(sessions)))
}

/// Keyword evidence first, otherwise inferred from resolved experience
pub fn extract_mastery(sessions: &[Session], experience: &Experience) -> Mastery {
    if let Some(level) = mastery_keyword(&keyword_surface(&merged_text(sessions))) {
        return level;
    }
    match *experience {
        Experience::Measured { months } if months < BEGINNER_MAX_MONTHS => Mastery::Beginner,
        Experience::Measured { months } if months / MONTHS_PER_YEAR >= ADVANCED_MIN_YEARS => Mastery::Advanced,
        Experience::Measured { .. } => Mastery::Intermediate,
        // Only reached for experience resolved from other sessions
        Experience::Qualitative(level) => level,
        Experience::Unknown => Mastery::Intermediate,
    }
}

pub fn extract_leadership(sessions: &[Session]) -> Leadership {
    let text = merged_text(sessions);
    if has_leadership_role(&keyword_surface(&text)) || !team_sizes(&text).is_empty() {
        Leadership::Claimed
    } else {
        Leadership::NotClaimed
    }
}

/// Solo framing overrides any cited team size
pub fn extract_team_context(sessions: &[Session]) -> TeamContext {
    let text = merged_text(sessions);
    if has_solo_work(&keyword_surface(&text)) {
        return TeamContext::Individual;
    }
    match team_sizes(&text).into_iter().max() {
        Some(size) => TeamContext::Team { size },
        None => TeamContext::Unknown,
    }
}

pub fn extract_skills(sessions: &[Session]) -> Vec<String> {
    skill_keywords(&keyword_surface(&merged_text(sessions)))
}

pub fn extract_tone(session: &Session) -> Option<ToneClass> {
    lexicon::tone_of(&keyword_surface(&session.text))
}

// =============================================================================
// CLAIM LEDGER
// =============================================================================

/// Every claim of every session, session order, hedge flag per sentence
pub fn collect_claims(sessions: &[Session]) -> Vec<Claim> {
    let mut claims = Vec::new();
    for session in sessions {
        let mut session_claims: Vec<Claim> = Vec::new();
        let mut push = |claim: Claim| {
            let seen = session_claims
                .iter()
                .any(|c| c.category == claim.category && c.value == claim.value);
            if !seen {
                session_claims.push(claim);
            }
        };

        for sentence in sentences(&session.text) {
            let surface = keyword_surface(sentence);
            let hedged = lexicon::is_hedged(&surface);
            let index = session.index;

            for mention in experience_mentions_in(sentence, index, hedged) {
                push(mention.to_claim());
            }
            if let Some(language) = lexicon::language_of(&surface) {
                push(Claim::new(ClaimCategory::Language, language, index, hedged));
            }
            if let Some(level) = mastery_keyword(&surface) {
                push(Claim::new(ClaimCategory::Mastery, level.as_str(), index, hedged));
            }
            if has_leadership_role(&surface) {
                push(Claim::new(ClaimCategory::Leadership, Leadership::Claimed.as_str(), index, hedged));
            }
            if has_solo_work(&surface) {
                push(Claim::new(ClaimCategory::TeamContext, TeamContext::Individual.to_string(), index, hedged));
            }
            for size in team_sizes(sentence) {
                push(Claim::new(ClaimCategory::TeamContext, TeamContext::Team { size }.to_string(), index, hedged));
            }
            for skill in skill_keywords(&surface) {
                push(Claim::new(ClaimCategory::KeywordSkill, skill, index, hedged));
            }
        }

        if let Some(tone) = extract_tone(session) {
            push(Claim::new(ClaimCategory::ConfidenceTone, tone.as_str(), session.index, false));
        }
        claims.extend(session_claims);
    }
    claims
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sessions(texts: &[&str]) -> Vec<Session> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| Session::new(i as u32 + 1, *t))
            .collect()
    }

    #[test]
    fn test_experience_mentions_digits_and_words() {
        let found = experience_mentions_in("6 years of Go, then 10+ yrs total and a year off, 3 months ago", 1, false);
        let texts: Vec<&str> = found.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["6 years", "10 years", "1 year", "3 months"]);
    }

    #[test]
    fn test_time_references_are_not_experience() {
        let found = experience_mentions_in(
            "I switched teams a year ago, present once a month and review every 2 years.",
            1,
            false,
        );
        assert!(found.is_empty());

        let kept = experience_mentions_in("I started 6 years ago and spent a year on Go.", 1, false);
        let texts: Vec<&str> = kept.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["6 years", "1 year"]);
    }

    #[test]
    fn test_most_is_not_months() {
        assert!(experience_mentions_in("the 5 most important things", 1, false).is_empty());
    }

    #[test]
    fn test_median_dampening() {
        let s = sessions(&["I have 2 years.", "I have 6 years.", "I have 1 year."]);
        assert_eq!(extract_experience(&s), Experience::Measured { months: 24 });
        assert_eq!(extract_experience(&s).to_string(), "2-3 years");
    }

    #[test]
    fn test_experience_under_a_year() {
        let s = sessions(&["Only 8 months so far."]);
        assert_eq!(extract_experience(&s).to_string(), "8 months");
    }

    #[test]
    fn test_qualitative_experience() {
        assert_eq!(
            extract_experience(&sessions(&["I just started coding."])),
            Experience::Qualitative(Mastery::Beginner)
        );
        assert_eq!(extract_experience(&sessions(&["Nothing relevant."])), Experience::Unknown);
    }

    #[test]
    fn test_hedged_mention() {
        let mentions = experience_mentions(&sessions(&["I did 5 years. It was maybe a year really."]));
        assert_eq!(mentions.len(), 2);
        assert!(!mentions[0].hedged);
        assert!(mentions[1].hedged);
    }

    #[test]
    fn test_language_priority() {
        let s = sessions(&["I write javascript and python daily."]);
        assert_eq!(extract_language(&s), Some("python"));
        assert_eq!(extract_language(&sessions(&["Mostly spreadsheets."])), None);
    }

    #[test]
    fn test_mastery_keyword_beats_inference() {
        let s = sessions(&["I am an expert with 1 year."]);
        let exp = extract_experience(&s);
        assert_eq!(extract_mastery(&s, &exp), Mastery::Advanced);
    }

    #[test]
    fn test_mastery_inferred_from_experience() {
        let plain = sessions(&["Nothing to add."]);
        assert_eq!(extract_mastery(&plain, &Experience::Measured { months: 6 }), Mastery::Beginner);
        assert_eq!(extract_mastery(&plain, &Experience::Measured { months: 60 }), Mastery::Advanced);
        assert_eq!(extract_mastery(&plain, &Experience::Measured { months: 36 }), Mastery::Intermediate);
        assert_eq!(extract_mastery(&plain, &Experience::Unknown), Mastery::Intermediate);
    }

    #[test]
    fn test_mastery_from_experience_of_other_sessions() {
        let all = sessions(&["I am a beginner.", "Nothing to add."]);
        let experience = extract_experience(&all);
        assert_eq!(experience, Experience::Qualitative(Mastery::Beginner));
        assert_eq!(extract_mastery(&all[1..], &experience), Mastery::Beginner);
    }

    #[test]
    fn test_about_without_number_is_not_hedged() {
        let claims = collect_claims(&sessions(&["I talked about my 6 years at the bank."]));
        let experience: Vec<(&str, bool)> = claims
            .iter()
            .filter(|c| c.category == ClaimCategory::Experience)
            .map(|c| (c.value.as_str(), c.hedged))
            .collect();
        assert_eq!(experience, vec![("6 years", false)]);
    }

    #[test]
    fn test_leadership_from_team_size() {
        assert_eq!(extract_leadership(&sessions(&["We were 8 people."])), Leadership::Claimed);
        assert_eq!(extract_leadership(&sessions(&["I write code."])), Leadership::NotClaimed);
    }

    #[test]
    fn test_solo_overrides_team_size() {
        let s = sessions(&["I ran a team of 12.", "Honestly I work alone."]);
        assert_eq!(extract_team_context(&s), TeamContext::Individual);
    }

    #[test]
    fn test_team_context_max_size() {
        let s = sessions(&["A team of 4.", "Later a group of 9."]);
        assert_eq!(extract_team_context(&s), TeamContext::Team { size: 9 });
        assert_eq!(extract_team_context(&sessions(&["Nothing."])), TeamContext::Unknown);
    }

    #[test]
    fn test_skills_deduplicated_title_case() {
        let s = sessions(&["Docker and SQL on AWS, and more sql with django."]);
        let skills = extract_skills(&s);
        assert_eq!(skills, vec!["Sql", "Aws", "Docker", "Django"]);
    }

    #[test]
    fn test_collect_claims_carries_session_and_hedge() {
        let s = vec![
            Session::new(1, "I have 6 years of experience."),
            Session::new(3, "Maybe 1 year. I work alone."),
        ];
        let claims = collect_claims(&s);
        let experience: Vec<&Claim> = claims
            .iter()
            .filter(|c| c.category == ClaimCategory::Experience)
            .collect();
        assert_eq!(experience.len(), 2);
        assert_eq!(experience[0].session, 1);
        assert!(!experience[0].hedged);
        assert_eq!(experience[1].session, 3);
        assert!(experience[1].hedged);
        assert!(claims.iter().any(|c| c.category == ClaimCategory::TeamContext
            && c.value == "individual contributor"
            && !c.hedged));
    }
}
