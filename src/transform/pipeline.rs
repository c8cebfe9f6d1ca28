//! High-level pipeline API: articulation sheet in, `.plist` document out.
//!
//! # Example
//!
//! ```rust,ignore
//! use articset::pipeline::convert_file;
//! use std::path::Path;
//!
//! let output = convert_file(Path::new("artics.csv"))?;
//! println!("Converted to {}", output.display());
//! ```

use crate::error::{ConvertError, ConvertResult};
use crate::models::ArticulationRecord;
use crate::parser::parse_csv_file;
use crate::plist::write_document;
use crate::transform::builder::build_document;
use std::fs;
use std::path::{Path, PathBuf};

/// Fallback set name when the input path has no usable stem.
const DEFAULT_SET_NAME: &str = "artics";

/// Convert an articulation sheet on disk into its `.plist` document.
///
/// The output lands next to the input with the extension replaced, and is
/// only written after the whole document has been serialized; a failed run
/// never leaves a file claiming success.
///
/// Returns the path of the written output file.
pub fn convert_file(input: &Path) -> ConvertResult<PathBuf> {
    let records = parse_csv_file(input)?;
    convert_records(&records, input)
}

/// Build, serialize and write the document for already-parsed records.
pub fn convert_records(records: &[ArticulationRecord], input: &Path) -> ConvertResult<PathBuf> {
    let document = build_document(records, &set_name(input));
    let xml = write_document(&document)?;

    let output = output_path(input);
    fs::write(&output, xml).map_err(|source| ConvertError::WriteOutput {
        path: output.clone(),
        source,
    })?;
    Ok(output)
}

/// The set name recorded in the document: the input file's stem.
pub fn set_name(input: &Path) -> String {
    input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(DEFAULT_SET_NAME)
        .to_string()
}

/// Output path: the input path with its extension replaced by `.plist`.
pub fn output_path(input: &Path) -> PathBuf {
    input.with_extension("plist")
}
