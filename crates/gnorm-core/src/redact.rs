//! Redactor — strips volatile tokens from individual lines.
//!
//! Two substitutions run on every line, in order:
//!
//! 1. `|<25 uppercase letters><2 digits>|` loses its two-digit suffix.
//! 2. `DD-MM-2025 HH:MM:SS` timestamps are deleted outright; whatever
//!    surrounded them (spaces included) is left exactly as it was.
//!
//! Lines matching neither pattern pass through untouched.

use regex::Regex;
use std::borrow::Cow;

const BOARD_SUFFIX_PATTERN: &str = r"\|([A-Z]{25})\d\d\|";
const TIMESTAMP_PATTERN: &str = r"\d\d-\d\d-2025 \d\d:\d\d:\d\d";

/// Compiled redaction rules. Build once per run and reuse across lines.
#[derive(Debug, Clone)]
pub struct Redactor {
    board_suffix: Regex,
    timestamp: Regex,
}

impl Default for Redactor {
    fn default() -> Self {
        Self::new()
    }
}

impl Redactor {
    pub fn new() -> Self {
        Self {
            board_suffix: Regex::new(BOARD_SUFFIX_PATTERN).expect("board suffix pattern is valid"),
            timestamp: Regex::new(TIMESTAMP_PATTERN).expect("timestamp pattern is valid"),
        }
    }

    /// Redact a single line. Borrows when nothing matched.
    pub fn redact_line<'a>(&self, line: &'a str) -> Cow<'a, str> {
        let line = self.board_suffix.replace_all(line, "|$1|");
        if !self.timestamp.is_match(&line) {
            return line;
        }
        Cow::Owned(self.timestamp.replace_all(&line, "").into_owned())
    }

    /// Redact every line, producing a new sequence of the same length.
    pub fn redact<S: AsRef<str>>(&self, lines: &[S]) -> Vec<String> {
        lines
            .iter()
            .map(|line| self.redact_line(line.as_ref()).into_owned())
            .collect()
    }
}
