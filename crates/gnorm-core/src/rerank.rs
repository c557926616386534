//! Section re-ranker — canonicalizes the order of ranked lists.
//!
//! A ranked list looks like this:
//!
//! ```text
//! #   1 -| 1902|-|DGRSMOEAOLSTNIDEISESRPART|
//! #   2 -| 1854|-|AGRIMORAOLSTECENISMNGPART|
//! #   3 -| 1854|-|AGRIMODAOLSTECEEISRNGPART|
//! ```
//!
//! Entries with equal scores come out in whatever order the producer found
//! them, so the rank labels are not reproducible. The re-ranker finds every
//! such list, sorts its entries by score (descending) then payload
//! (ascending, bytewise) and rewrites the lines in place with fresh ranks.
//!
//! # Scanning
//!
//! The scan is a single pass with two states. Outside a section it looks for
//! the rank-1 marker (`#   1 `). Inside a section it consumes every following
//! line that starts with `#`; the first line that does not ends the section
//! and the outer scan resumes from it.
//!
//! # Malformed lines
//!
//! A `#` line inside a section that does not parse as an entry is governed by
//! [`MalformedPolicy`]: either it keeps its slot verbatim while the parsed
//! entries are re-ranked among the other slots, or the whole run fails.

use crate::config::MalformedPolicy;
use crate::error::NormalizeError;
use crate::report::SectionReporter;
use crate::types::{RankedEntry, Section};
use regex::Regex;

/// First character shared by every line of a section.
pub const SECTION_MARKER: char = '#';

const SECTION_START_PATTERN: &str = r"^#\s+1\s";
const ENTRY_PATTERN: &str = r"^#\s+[0-9]+\s+-\|\s*([0-9]+)\|-\|([^|]+)\|";

/// Encode an entry in the canonical ranked-line format.
///
/// ```text
/// # {rank:>3} -| {score}|-|{payload}|
/// ```
pub fn encode_entry(rank: usize, entry: &RankedEntry) -> String {
    format!("# {rank:>3} -| {}|-|{}|", entry.score, entry.payload)
}

#[derive(Debug, Clone)]
pub struct Reranker {
    start: Regex,
    entry: Regex,
    policy: MalformedPolicy,
}

impl Default for Reranker {
    fn default() -> Self {
        Self::new(MalformedPolicy::default())
    }
}

impl Reranker {
    pub fn new(policy: MalformedPolicy) -> Self {
        Self {
            start: Regex::new(SECTION_START_PATTERN).expect("section start pattern is valid"),
            entry: Regex::new(ENTRY_PATTERN).expect("entry pattern is valid"),
            policy,
        }
    }

    pub fn policy(&self) -> MalformedPolicy {
        self.policy
    }

    /// Whether `line` opens a new ranked section.
    pub fn is_section_start(&self, line: &str) -> bool {
        self.start.is_match(line)
    }

    /// Parse one ranked line. Returns `None` for anything that is not a
    /// well-formed entry, including scores that overflow `u64`.
    pub fn parse_entry(&self, line: &str) -> Option<RankedEntry> {
        let caps = self.entry.captures(line)?;
        let score = caps[1].parse().ok()?;
        Some(RankedEntry::new(score, &caps[2]))
    }

    /// Locate every section in `lines`, in order.
    pub fn find_sections<S: AsRef<str>>(&self, lines: &[S]) -> Vec<Section> {
        let mut sections = Vec::new();
        let mut i = 0;
        while i < lines.len() {
            if !self.is_section_start(lines[i].as_ref()) {
                i += 1;
                continue;
            }
            let start = i;
            let mut slots = Vec::new();
            while let Some(line) = lines.get(i) {
                let line = line.as_ref();
                if !line.starts_with(SECTION_MARKER) {
                    break;
                }
                slots.push(self.parse_entry(line));
                i += 1;
            }
            sections.push(Section { start, slots });
        }
        sections
    }

    /// Produce a new line sequence with every section re-ranked.
    ///
    /// The output has exactly as many lines as the input; lines outside
    /// sections are copied unchanged. Each rewritten section is reported to
    /// `reporter`.
    pub fn rerank<S, R>(
        &self,
        lines: &[S],
        mut reporter: R,
    ) -> Result<Vec<String>, NormalizeError>
    where
        S: AsRef<str>,
        R: SectionReporter,
    {
        let mut out: Vec<String> = lines.iter().map(|l| l.as_ref().to_owned()).collect();

        for section in self.find_sections(lines) {
            if self.policy == MalformedPolicy::Reject {
                if let Some(offset) = section.slots.iter().position(Option::is_none) {
                    let index = section.start + offset;
                    return Err(NormalizeError::MalformedEntry {
                        line: index + 1,
                        content: out[index].clone(),
                    });
                }
            }

            let mut ranked: Vec<&RankedEntry> = section.entries().collect();
            ranked.sort_by(|a, b| a.canonical_cmp(b));

            let parsed_slots = section
                .slots
                .iter()
                .enumerate()
                .filter(|(_, slot)| slot.is_some())
                .map(|(offset, _)| section.start + offset);
            for (rank, (index, entry)) in parsed_slots.zip(ranked).enumerate() {
                out[index] = encode_entry(rank + 1, entry);
            }

            let report = section.report();
            tracing::debug!(
                start = report.start,
                lines = report.lines,
                entries = report.entries,
                skipped = report.skipped,
                "re-ranked section"
            );
            reporter.section(&report);
        }

        Ok(out)
    }
}
