//! # Articset - CSV to Logic Pro Articulation Set converter
//!
//! Articset turns a spreadsheet of articulation definitions into the plist
//! XML document Logic Pro X loads as an Articulation Set.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────┐     ┌────────────┐     ┌────────────┐     ┌────────────┐
//! │  CSV File  │────▶│   Parser   │────▶│  Builder   │────▶│ .plist XML │
//! │ (20 cols)  │     │ (defaults) │     │ (doc tree) │     │ (2-space)  │
//! └────────────┘     └────────────┘     └────────────┘     └────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use articset::pipeline::convert_file;
//! use std::path::Path;
//!
//! let output = convert_file(Path::new("artics.csv")).unwrap();
//! println!("Converted to {}", output.display());
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`models`] - Domain records (ArticulationRecord, InputSwitch, OutputMessage)
//! - [`parser`] - Positional CSV parsing with the parse-or-default policy
//! - [`plist`] - Typed plist tree and XML serialization
//! - [`transform`] - Document builder and conversion pipeline

// Core modules
pub mod error;
pub mod models;

// Parsing
pub mod parser;

// Plist tree and serialization
pub mod plist;

// Document building and conversion
pub mod transform;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{ConvertError, ConvertResult, CsvError, CsvResult, PlistError, PlistResult};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{ArticulationRecord, InputSwitch, OutputMessage, ID_OFFSET, PERMANENT_MODE};

// =============================================================================
// Re-exports - Parser
// =============================================================================

pub use parser::{
    parse_csv_file, parse_or_default, parse_records, DEFAULT_NAME, DEFAULT_OUTPUT_STATUS,
};

// =============================================================================
// Re-exports - Plist
// =============================================================================

pub use plist::{write_document, PlistDict, PlistValue, PLIST_HEADER};

// =============================================================================
// Re-exports - Transform
// =============================================================================

pub use transform::builder::build_document;
pub use transform::pipeline::{convert_file, convert_records, output_path, set_name};

// Pipeline
pub mod pipeline {
    pub use crate::transform::pipeline::{convert_file, convert_records, output_path, set_name};
}
