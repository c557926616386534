//! gnorm-core — golden-file normalization passes.
//!
//! Test reports that are diffed against golden files carry a few
//! nondeterministic elements: timestamps, unstable numeric suffixes and the
//! relative order of tied entries in ranked lists. This crate removes them
//! with two pure passes over a line sequence:
//!
//! ```text
//! lines ──► Redactor ──► Reranker ──► lines
//!                           │
//!                           └──► SectionReporter (diagnostics)
//! ```
//!
//! Neither pass touches the filesystem; see `gnorm-files` for that.

pub mod config;
pub mod error;
pub mod normalizer;
pub mod redact;
pub mod report;
pub mod rerank;
pub mod types;

pub use config::{Config, MalformedPolicy};
pub use error::NormalizeError;
pub use normalizer::{normalize, Normalizer};
pub use redact::Redactor;
pub use report::{CollectingReporter, SectionReporter, WriterReporter};
pub use rerank::{encode_entry, Reranker};
pub use types::{RankedEntry, Section, SectionReport};
