//! Sequential batch processing.
//!
//! Files are handled one after another. The first error aborts the batch:
//! files after it are not touched, files before it stay written.

use crate::error::FileError;
use crate::file::{read_lines, write_lines};
use crate::paths::derive_output_path;
use gnorm_core::{Config, Normalizer, SectionReport, SectionReporter};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Outcome of normalizing one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Line count, identical for input and output.
    pub lines: usize,
    pub sections: Vec<SectionReport>,
}

/// Forwards to the caller's reporter while keeping a copy for the file report.
struct Tee<'a, R> {
    inner: R,
    kept: &'a mut Vec<SectionReport>,
}

impl<R: SectionReporter> SectionReporter for Tee<'_, R> {
    fn section(&mut self, report: &SectionReport) {
        self.kept.push(*report);
        self.inner.section(report);
    }
}

#[derive(Debug, Clone)]
pub struct Batch {
    config: Config,
    normalizer: Normalizer,
}

impl Batch {
    pub fn new(config: Config) -> Self {
        let normalizer = Normalizer::from_config(&config);
        Self { config, normalizer }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Normalize `input` into its derived output path.
    pub fn run_file<R: SectionReporter>(
        &self,
        input: &Path,
        reporter: R,
    ) -> Result<FileReport, FileError> {
        let output = derive_output_path(input, &self.config.paths)?;
        let lines = read_lines(input)?;

        let mut sections = Vec::new();
        let tee = Tee {
            inner: reporter,
            kept: &mut sections,
        };
        let normalized = self
            .normalizer
            .normalize(&lines, tee)
            .map_err(|source| FileError::Normalize {
                path: input.to_path_buf(),
                source,
            })?;

        write_lines(&output, &normalized)?;
        tracing::info!(
            input = %input.display(),
            output = %output.display(),
            lines = normalized.len(),
            sections = sections.len(),
            "wrote normalized file"
        );

        Ok(FileReport {
            input: input.to_path_buf(),
            output,
            lines: normalized.len(),
            sections,
        })
    }

    /// Normalize every input in order, stopping at the first failure.
    pub fn run<I, P, R>(&self, inputs: I, mut reporter: R) -> Result<Vec<FileReport>, FileError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
        R: SectionReporter,
    {
        inputs
            .into_iter()
            .map(|input| self.run_file(input.as_ref(), &mut reporter))
            .collect()
    }
}

impl Default for Batch {
    fn default() -> Self {
        Self::new(Config::defaults())
    }
}
