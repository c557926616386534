//! Normalizer — redaction followed by section re-ranking.
//!
//! Both passes take an immutable line slice and return a fresh `Vec<String>`
//! of the same length, so the composition does too.

use crate::config::{Config, MalformedPolicy};
use crate::error::NormalizeError;
use crate::redact::Redactor;
use crate::report::SectionReporter;
use crate::rerank::Reranker;

#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    redactor: Redactor,
    reranker: Reranker,
}

impl Normalizer {
    pub fn new(policy: MalformedPolicy) -> Self {
        Self {
            redactor: Redactor::new(),
            reranker: Reranker::new(policy),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.sections.malformed)
    }

    pub fn redactor(&self) -> &Redactor {
        &self.redactor
    }

    pub fn reranker(&self) -> &Reranker {
        &self.reranker
    }

    /// Run both passes over `lines`.
    pub fn normalize<S, R>(&self, lines: &[S], reporter: R) -> Result<Vec<String>, NormalizeError>
    where
        S: AsRef<str>,
        R: SectionReporter,
    {
        let redacted = self.redactor.redact(lines);
        self.reranker.rerank(&redacted, reporter)
    }
}

/// Normalize with the default policy.
pub fn normalize<S, R>(lines: &[S], reporter: R) -> Result<Vec<String>, NormalizeError>
where
    S: AsRef<str>,
    R: SectionReporter,
{
    Normalizer::default().normalize(lines, reporter)
}
