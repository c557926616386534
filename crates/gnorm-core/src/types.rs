//! Core types for gnorm-core.
//!
//! A normalization run works over a plain `Vec<String>` of lines; the types
//! here describe what the re-ranking pass finds inside that sequence: the
//! parsed [`RankedEntry`] values of one [`Section`], and the [`SectionReport`]
//! handed to the diagnostic channel once a section has been rewritten.

use serde::Serialize;

/// One ranked line, reduced to the two fields that decide its position.
///
/// The rank label on the input line is deliberately not kept: it is the
/// nondeterministic part and is recomputed on rewrite.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RankedEntry {
    pub score: u64,
    pub payload: String,
}

impl RankedEntry {
    pub fn new(score: u64, payload: impl Into<String>) -> Self {
        Self {
            score,
            payload: payload.into(),
        }
    }

    /// Canonical ordering: score descending, then payload ascending (bytewise).
    pub fn canonical_cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .score
            .cmp(&self.score)
            .then_with(|| self.payload.cmp(&other.payload))
    }
}

/// A contiguous run of `#`-prefixed lines starting at a rank-1 marker.
///
/// `slots` has one element per line of the section, in line order; `None`
/// marks a line that did not parse as a ranked entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Index of the first line of the section in the overall sequence.
    pub start: usize,
    pub slots: Vec<Option<RankedEntry>>,
}

impl Section {
    /// Number of lines the section spans.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Exclusive end index of the section in the overall sequence.
    pub fn end(&self) -> usize {
        self.start + self.slots.len()
    }

    /// Parsed entries in original-encounter order.
    pub fn entries(&self) -> impl Iterator<Item = &RankedEntry> {
        self.slots.iter().flatten()
    }

    /// Number of lines that did not parse.
    pub fn skipped(&self) -> usize {
        self.slots.iter().filter(|s| s.is_none()).count()
    }

    pub fn report(&self) -> SectionReport {
        let skipped = self.skipped();
        SectionReport {
            start: self.start,
            lines: self.len(),
            entries: self.len() - skipped,
            skipped,
        }
    }
}

/// What the diagnostic channel learns about one rewritten section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionReport {
    /// 0-based index of the section's first line.
    pub start: usize,
    /// Lines spanned by the section.
    pub lines: usize,
    /// Lines that parsed as ranked entries.
    pub entries: usize,
    /// Lines inside the section that did not parse.
    pub skipped: usize,
}
