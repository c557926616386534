//! Output path derivation.
//!
//! The output path is the input path with every occurrence of the input
//! suffix replaced by the output suffix (`report.txt` → `report.norm.txt`).
//! An input that does not contain the suffix would be overwritten by its own
//! output, so that case is an error rather than a silent no-op.

use crate::error::FileError;
use gnorm_core::config::PathsConfig;
use std::path::{Path, PathBuf};

pub fn derive_output_path(input: &Path, paths: &PathsConfig) -> Result<PathBuf, FileError> {
    let text = input
        .to_str()
        .ok_or_else(|| FileError::NonUtf8Path(input.to_path_buf()))?;
    let derived = text.replace(&paths.input_suffix, &paths.output_suffix);
    if derived == text {
        return Err(FileError::OutputPathCollision {
            path: input.to_path_buf(),
            suffix: paths.input_suffix.clone(),
        });
    }
    Ok(PathBuf::from(derived))
}
