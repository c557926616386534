//! Test builders for ranked lists.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use gnorm::{encode_entry, RankedEntry};

/// Fluent builder for a report containing one ranked list.
///
/// # Example
///
/// ```rust
/// let lines = RankedListBuilder::new()
///     .header("Top boards")
///     .entry(1854, "AGRIMORAOLSTECENISMNGPART")
///     .entry(1854, "AGRIMODAOLSTECEEISRNGPART")
///     .footer("done")
///     .build();
/// ```
#[derive(Debug, Default, Clone)]
pub struct RankedListBuilder {
    header: Vec<String>,
    entries: Vec<RankedEntry>,
    footer: Vec<String>,
}

impl RankedListBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, line: impl Into<String>) -> Self {
        self.header.push(line.into());
        self
    }

    pub fn entry(mut self, score: u64, payload: impl Into<String>) -> Self {
        self.entries.push(RankedEntry::new(score, payload));
        self
    }

    pub fn entries(mut self, entries: impl IntoIterator<Item = (u64, String)>) -> Self {
        self.entries
            .extend(entries.into_iter().map(|(s, p)| RankedEntry::new(s, p)));
        self
    }

    pub fn footer(mut self, line: impl Into<String>) -> Self {
        self.footer.push(line.into());
        self
    }

    /// Index of the first ranked line in the built output.
    pub fn section_start(&self) -> usize {
        self.header.len()
    }

    /// Entries are ranked in insertion order, 1-based.
    pub fn build(self) -> Vec<String> {
        let mut lines = self.header;
        lines.extend(
            self.entries
                .iter()
                .enumerate()
                .map(|(i, e)| encode_entry(i + 1, e)),
        );
        lines.extend(self.footer);
        lines
    }
}

/// Parse the `(score, payload)` pairs from a slice of ranked lines.
pub fn parse_ranked(lines: &[String]) -> Vec<RankedEntry> {
    let reranker = gnorm::Reranker::default();
    lines
        .iter()
        .map(|line| {
            reranker
                .parse_entry(line)
                .unwrap_or_else(|| panic!("not a ranked line: {line:?}"))
        })
        .collect()
}
