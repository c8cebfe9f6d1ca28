//! Error types for the articulation set converter.
//!
//! This module defines one error type per layer:
//!
//! - [`CsvError`] - reading and splitting the articulation sheet
//! - [`PlistError`] - serializing the document tree
//! - [`ConvertError`] - top-level pipeline errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// CSV Errors
// =============================================================================

/// Errors while reading or splitting the articulation sheet.
///
/// Note that a numeric cell that fails to parse is NOT an error: every
/// numeric column has a documented default that is substituted silently
/// (see [`crate::parser::parse_or_default`]). Only structural problems
/// surface here.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Failed to read the input file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// The input file has no lines at all, not even a header.
    #[error("CSV file is empty")]
    EmptyFile,

    /// A data row does not provide every column of the sheet layout.
    #[error("Line {line}: expected {expected} columns, found {found}")]
    TooFewColumns {
        line: usize,
        expected: usize,
        found: usize,
    },
}

// =============================================================================
// Plist Errors
// =============================================================================

/// Errors while serializing the plist document tree.
#[derive(Debug, Error)]
pub enum PlistError {
    /// The XML writer failed.
    #[error("Failed to serialize plist: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The serialized document was not valid UTF-8.
    #[error("Serialized plist is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

// =============================================================================
// Conversion Errors (top-level)
// =============================================================================

/// Top-level conversion errors.
///
/// This is the main error type returned by
/// [`crate::transform::pipeline::convert_file`]. It wraps the lower-level
/// errors and adds the output-write variant.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// CSV parsing error.
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    /// Plist serialization error.
    #[error("Plist error: {0}")]
    Plist(#[from] PlistError),

    /// Failed to write the output document.
    #[error("Failed to write {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for CSV operations.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for plist serialization.
pub type PlistResult<T> = Result<T, PlistError>;

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;
