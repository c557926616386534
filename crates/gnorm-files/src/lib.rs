//! gnorm-files — file adapters around the pure `gnorm-core` passes.
//!
//! Each input path is mapped to an output path ([`paths`]), read and trimmed
//! line by line ([`file`]), normalized, and written back. [`batch`] runs a
//! list of inputs in order and aborts on the first failure.

pub mod batch;
pub mod error;
pub mod file;
pub mod paths;

pub use batch::{Batch, FileReport};
pub use error::FileError;
pub use paths::derive_output_path;
