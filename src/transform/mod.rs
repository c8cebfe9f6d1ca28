//! Document building and conversion pipeline.
//!
//! - [`builder`] - normalized records to the articulation set document tree
//! - [`pipeline`] - end-to-end file conversion

pub mod builder;
pub mod pipeline;

pub use builder::build_document;
pub use pipeline::{convert_file, convert_records};
