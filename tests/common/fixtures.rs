//! Static report corpora used across harnesses.
//!
//! Each corpus is a `&'static [&'static str]` shaped like real solver output:
//! a timestamped header, a best-board line with its unstable suffix, and one
//! or more ranked lists.

/// One ranked list with a tie in the wrong order, plus volatile tokens.
pub const REPORT_SINGLE: &[&str] = &[
    "Boggle run 04-06-2025 13:22:09 started",
    "Best board |DGRSMOEAOLSTNIDEISESRPART19|",
    "# Top boards",
    "#   1 -| 1902|-|DGRSMOEAOLSTNIDEISESRPART|",
    "#   2 -| 1854|-|AGRIMORAOLSTECENISMNGPART|",
    "#   3 -| 1854|-|AGRIMODAOLSTECEEISRNGPART|",
    "#   4 -| 1590|-|AGRIMODAOLSTECETISRNGPART|",
    "Done at 04-06-2025 13:25:41.",
];

/// [`REPORT_SINGLE`] after normalization.
pub const REPORT_SINGLE_NORMALIZED: &[&str] = &[
    "Boggle run  started",
    "Best board |DGRSMOEAOLSTNIDEISESRPART|",
    "# Top boards",
    "#   1 -| 1902|-|DGRSMOEAOLSTNIDEISESRPART|",
    "#   2 -| 1854|-|AGRIMODAOLSTECEEISRNGPART|",
    "#   3 -| 1854|-|AGRIMORAOLSTECENISMNGPART|",
    "#   4 -| 1590|-|AGRIMODAOLSTECETISRNGPART|",
    "Done at .",
];

/// Two ranked lists separated by prose; the second has a three-way tie.
pub const REPORT_TWO_SECTIONS: &[&str] = &[
    "Phase 1 (seed 7)",
    "#   1 -| 410|-|STONEBOARD|",
    "#   2 -| 512|-|LATERBOARD|",
    "",
    "Phase 2 (seed 7)",
    "#   1 -| 300|-|CCCC|",
    "#   2 -| 300|-|AAAA|",
    "#   3 -| 300|-|BBBB|",
    "#   4 -| 299|-|AAAA|",
    "end",
];

/// A ranked list with a comment line inside it.
pub const REPORT_WITH_MALFORMED: &[&str] = &[
    "#   1 -| 10|-|B|",
    "#   2 -| 10|-|A|",
    "# -- cut --",
    "#   3 -| 11|-|C|",
];

/// Text with no volatile tokens and no ranked lists.
pub const REPORT_PLAIN: &[&str] = &[
    "Solver finished",
    "boards examined: 1204",
    "# comment, but not a ranked list",
    "#   2 -| 15|-|NOTRANKONE|",
    "|SHORTBOARD12|",
    "Run at 04-06-2024 13:22:09",
];

/// Every corpus, for harnesses that check invariants across all of them.
pub const ALL_REPORTS: &[&[&str]] = &[
    REPORT_SINGLE,
    REPORT_TWO_SECTIONS,
    REPORT_WITH_MALFORMED,
    REPORT_PLAIN,
];

/// Render a corpus as file contents, with the indentation and trailing
/// blanks that the file reader is expected to strip.
pub fn as_messy_file(lines: &[&str]) -> String {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| match i % 3 {
            0 => format!("{line}\n"),
            1 => format!("  {line}  \n"),
            _ => format!("\t{line}\r\n"),
        })
        .collect()
}
