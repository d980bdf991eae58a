//! Session segmenter: raw transcript → per-speaker ordered sessions
//!
//! Line-oriented state machine. Speaker markers ("subject: atlas") and
//! session markers ("session 2") close the current buffer; everything else
//! accumulates. With no usable markers the text is split into paragraphs.

use lazy_static::lazy_static;
use regex::Regex;
use crate::{DEFAULT_SPEAKER, FALLBACK_SPEAKER, MAX_FALLBACK_SESSIONS};
use crate::types::{Session, Transcript};

lazy_static! {
    static ref RE_SPEAKER: Regex = Regex::new(
        r"(?i)\b(?:subject|shadow|agent)\b[:\s]+([a-z0-9_]+)"
    ).unwrap();

    static ref RE_SESSION: Regex = Regex::new(
        r"(?i)\bsession[:\s#]*(\d+)\b"
    ).unwrap();

    static ref RE_BLANK_LINE: Regex = Regex::new(r"\n\s*\n").unwrap();
}

/// A speaker marker on a line: (lowercase id, byte offset after the marker)
pub fn speaker_marker(line: &str) -> Option<(String, usize)> {
    RE_SPEAKER
        .captures(line)
        .and_then(|caps| Some((caps.get(1)?.as_str().to_lowercase(), caps.get(0)?.end())))
}

/// A session marker on a line: (number, byte offset after the marker)
pub fn session_marker(line: &str) -> Option<(u32, usize)> {
    let caps = RE_SESSION.captures(line)?;
    let number = caps.get(1)?.as_str().parse().ok()?;
    Some((number, caps.get(0)?.end()))
}

/// Accumulator state
struct Accumulating {
    speaker: String,
    /// Index announced by the last session marker, if any since the
    /// speaker last changed
    index: Option<u32>,
    buffer: Vec<String>,
}

impl Accumulating {
    fn new() -> Self {
        Self {
            speaker: DEFAULT_SPEAKER.to_string(),
            index: None,
            buffer: Vec::new(),
        }
    }

    /// Close the buffer as a session; empty buffers emit nothing
    fn flush(&mut self, transcript: &mut Transcript) {
        if self.buffer.is_empty() {
            return;
        }
        let index = self
            .index
            .take()
            .unwrap_or_else(|| transcript.next_index(&self.speaker));
        let text = self.buffer.join(" ");
        self.buffer.clear();
        transcript.push_session(&self.speaker, Session::new(index, text));
    }
}

/// Session segmenter
#[derive(Debug, Default)]
pub struct SessionSegmenter;

impl SessionSegmenter {
    /// Create new segmenter
    pub fn new() -> Self {
        Self
    }

    /// Segment a transcript
    pub fn segment(&self, content: &str) -> Transcript {
        let (transcript, saw_marker) = self.segment_markers(content);

        if saw_marker && !transcript.is_empty() {
            return transcript;
        }
        if content.trim().is_empty() {
            return Transcript::new();
        }
        self.segment_paragraphs(content)
    }

    /// Marker state machine; also reports whether any marker matched
    fn segment_markers(&self, content: &str) -> (Transcript, bool) {
        let mut transcript = Transcript::new();
        let mut state = Accumulating::new();
        let mut saw_marker = false;

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let speaker = speaker_marker(line);
            let session = session_marker(line);

            if speaker.is_none() && session.is_none() {
                state.buffer.push(line.to_string());
                continue;
            }

            saw_marker = true;
            state.flush(&mut transcript);

            let mut content_start = 0;
            if let Some((id, end)) = speaker {
                state.speaker = id;
                state.index = None;
                content_start = end;
            }
            if let Some((number, end)) = session {
                state.index = Some(number);
                content_start = content_start.max(end);
            }

            let rest = line[content_start..]
                .trim_start_matches(|c: char| c == ':' || c == '-' || c.is_whitespace())
                .trim();
            if !rest.is_empty() {
                state.buffer.push(rest.to_string());
            }
        }

        state.flush(&mut transcript);
        (transcript, saw_marker)
    }

    /// Fallback: up to MAX_FALLBACK_SESSIONS paragraphs for one speaker
    fn segment_paragraphs(&self, content: &str) -> Transcript {
        let mut transcript = Transcript::new();
        transcript.used_fallback = true;

        let normalized = content.replace("\r\n", "\n");
        let paragraphs = RE_BLANK_LINE
            .split(&normalized)
            .map(|p| p.split_whitespace().collect::<Vec<_>>().join(" "))
            .filter(|p| !p.is_empty())
            .take(MAX_FALLBACK_SESSIONS);

        for (i, paragraph) in paragraphs.enumerate() {
            transcript.push_session(FALLBACK_SPEAKER, Session::new(i as u32 + 1, paragraph));
        }
        transcript
    }
}

// =============================================================================
// TESTS
// =============================================================================
