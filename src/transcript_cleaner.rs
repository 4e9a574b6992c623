use std::borrow::Cow;
use regex::Regex;
use once_cell::sync::Lazy;

// @module: WebVTT to plain-text transcript cleaning

// @const: WebVTT format identifier line
pub const WEBVTT_HEADER: &str = "WEBVTT";

// @const: Prefixes of comment and style blocks
pub const ANNOTATION_PREFIXES: [&str; 2] = ["NOTE", "STYLE"];

// @const: WebVTT timing line, anchored at the start so trailing cue settings are tolerated
static TIMING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{2}:\d{2}:\d{2}\.\d{3}\s-->\s\d{2}:\d{2}:\d{2}\.\d{3}").unwrap()
});

// @const: Inline markup tag, shortest match
static TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<.*?>").unwrap()
});

/// Structural role of a single trimmed subtitle line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Empty line separating cue blocks
    Blank,
    /// The `WEBVTT` format identifier
    Header,
    /// Numeric cue index
    CueIndex,
    /// `HH:MM:SS.mmm --> HH:MM:SS.mmm` timing range
    Timing,
    /// `NOTE` or `STYLE` block line
    Annotation,
    /// Anything else is spoken text
    Dialogue,
}

impl LineKind {
    // @returns: Whether the line is dropped before tag stripping
    pub fn is_structural(self) -> bool {
        !matches!(self, LineKind::Dialogue)
    }
}

/// Classify an already trimmed line.
///
/// Checks run in a fixed order: blank, header, cue index, timing, annotation.
pub fn classify_line(line: &str) -> LineKind {
    if line.is_empty() {
        LineKind::Blank
    } else if line == WEBVTT_HEADER {
        LineKind::Header
    } else if line.chars().all(|c| c.is_ascii_digit()) {
        LineKind::CueIndex
    } else if TIMING_REGEX.is_match(line) {
        LineKind::Timing
    } else if ANNOTATION_PREFIXES.iter().any(|prefix| line.starts_with(prefix)) {
        LineKind::Annotation
    } else {
        LineKind::Dialogue
    }
}

/// Remove every `<...>` tag from a line
pub fn strip_tags(line: &str) -> Cow<'_, str> {
    TAG_REGEX.replace_all(line, "")
}

/// Convert a WebVTT document into a plain transcript.
///
/// Structural lines are dropped, inline tags removed, and a line equal to the
/// previously kept one is skipped. Lines that end up empty after tag removal
/// are kept. Never fails.
pub fn clean(document: &str) -> String {
    let mut kept: Vec<String> = Vec::new();

    // WebVTT allows CRLF, LF or a bare CR; the extra blank pieces are dropped as Blank
    for raw in document.split(['\r', '\n']) {
        let line = raw.trim();
        if classify_line(line).is_structural() {
            continue;
        }

        let text = strip_tags(line);
        if kept.last().is_some_and(|last| *last == text) {
            continue;
        }

        kept.push(text.into_owned());
    }

    kept.join("\n")
}
