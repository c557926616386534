//! Domain-specific assertion macros for gnorm harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that say which
//! normalization invariant was violated.

use gnorm::RankedEntry;

/// Assert that a normalized line sequence has as many lines as its input.
///
/// ```rust
/// assert_same_line_count!(input, output);
/// ```
#[macro_export]
macro_rules! assert_same_line_count {
    ($before:expr, $after:expr) => {{
        let before = $before.len();
        let after = $after.len();
        if before != after {
            panic!(
                "assert_same_line_count! failed: line count changed\n  before: {}\n  after:  {}",
                before, after
            );
        }
    }};
}

/// Assert that two entry lists hold the same entries, ignoring order.
///
/// ```rust
/// assert_permutation!(original_entries, reranked_entries);
/// ```
#[macro_export]
macro_rules! assert_permutation {
    ($before:expr, $after:expr) => {{
        let mut before: Vec<gnorm::RankedEntry> = $before.to_vec();
        let mut after: Vec<gnorm::RankedEntry> = $after.to_vec();
        before.sort_by(|a, b| a.canonical_cmp(b));
        after.sort_by(|a, b| a.canonical_cmp(b));
        pretty_assertions::assert_eq!(
            before, after,
            "assert_permutation! failed: re-ranking added, dropped or altered entries"
        );
    }};
}

/// Assert that entries are in canonical order: score non-increasing, ties
/// ordered by payload.
pub fn assert_canonical(entries: &[RankedEntry]) {
    for (i, pair) in entries.windows(2).enumerate() {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.score > b.score || (a.score == b.score && a.payload <= b.payload),
            "entries {} and {} out of canonical order: {:?} then {:?}",
            i + 1,
            i + 2,
            a,
            b
        );
    }
}

/// Assert that ranked lines carry consecutive rank labels starting at 1.
pub fn assert_ranks_consecutive(lines: &[String]) {
    for (i, line) in lines.iter().enumerate() {
        let expected = format!("# {:>3} -|", i + 1);
        assert!(
            line.starts_with(&expected),
            "line {} should start with {:?}: {:?}",
            i,
            expected,
            line
        );
    }
}
