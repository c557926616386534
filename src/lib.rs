//! gnorm — golden-file normalizer.
//!
//! Rewrites test reports so they can be diffed against golden files: volatile
//! tokens are redacted and ranked lists are put into a canonical order. This
//! crate re-exports the workspace members so integration tests and benches
//! can import everything from one place.
//!
//! # Architecture
//!
//! ```text
//! gnorm-files:  derive path ──► read ──┐              ┌──► write
//!                                      ▼              │
//! gnorm-core:               Redactor ──► Reranker ────┘
//!                                           │
//!                                           └──► SectionReporter
//! ```

pub use gnorm_core::{
    config, encode_entry, normalize, CollectingReporter, Config, MalformedPolicy,
    NormalizeError, Normalizer, RankedEntry, Redactor, Reranker, Section, SectionReport,
    SectionReporter, WriterReporter,
};
pub use gnorm_files::{derive_output_path, file, Batch, FileError, FileReport};
