//! Centralized validation and helper functions.

use std::path::Path;

/// Maximum number of reads accepted in a single run.
///
/// Overlap matrix memory grows with the square of the read count
/// (8 bytes per cell), so this caps the matrix at a few gigabytes.
pub const MAX_READS: usize = 20_000;

/// Check whether a read count exceeds the maximum allowed.
///
/// Returns an error message if `count` is above the limit, None if it is safe.
///
/// # Examples
///
/// ```
/// use olc_assembler::utils::validation::{check_read_limit, MAX_READS};
///
/// assert!(check_read_limit(10).is_none());
/// assert!(check_read_limit(MAX_READS + 1).is_some());
/// ```
#[must_use]
pub fn check_read_limit(count: usize) -> Option<String> {
    if count > MAX_READS {
        Some(format!(
            "Too many reads: {count} exceeds maximum of {MAX_READS}"
        ))
    } else {
        None
    }
}

/// Strip trailing line terminators and surrounding whitespace from a raw read line
#[must_use]
pub fn clean_read_line(line: &str) -> &str {
    line.trim()
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Output path is a directory: {0}")]
    OutputIsDirectory(String),
    #[error("Output directory does not exist: {0}")]
    MissingOutputDirectory(String),
}

/// Check that `path` can be created as an output file.
///
/// # Errors
///
/// Returns `ValidationError::OutputIsDirectory` if the path names a directory
/// or `ValidationError::MissingOutputDirectory` if its parent does not exist.
pub fn validate_output_path(path: &Path) -> Result<(), ValidationError> {
    if path.is_dir() {
        return Err(ValidationError::OutputIsDirectory(
            path.display().to_string(),
        ));
    }

    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.is_dir() => Err(
            ValidationError::MissingOutputDirectory(parent.display().to_string()),
        ),
        _ => Ok(()),
    }
}
