//! # Decoder Layer
//!
//! Turning a file on disk into tag values is not tagcheck's business; it is
//! delegated to a [`Decoder`]. The scan only needs two capabilities:
//! - open a path and get back a [`Record`] or a [`DecodeError`],
//! - ask a record for one tag's value as a string.
//!
//! ## Implementations
//!
//! - [`dicom::DicomDecoder`]: production decoder backed by `dicom-object`
//!   - reads DICOM Part 10 files (preamble, file meta group, dataset)
//!   - answers group 0002 tags from the file meta table
//!
//! - [`memory::InMemoryDecoder`]: canned records keyed by path, for testing
//!   - no file contents are read
//!   - lets tests describe corrupt files and empty datasets directly

use crate::error::DecodeError;
use crate::model::TagId;
use std::path::Path;

pub mod dicom;
pub mod memory;

/// A decoded file.
pub trait Record {
    /// `false` when the file parsed but carries no dataset to look into.
    fn has_dataset(&self) -> bool;

    /// The value of `tag` rendered as a string, or `None` when the record has
    /// no such element or it cannot be shown as text.
    fn value(&self, tag: TagId) -> Option<String>;
}

pub trait Decoder {
    type Record: Record;

    /// Decode the file at `path`. Implementations release any handle they open
    /// before returning.
    fn decode(&self, path: &Path) -> Result<Self::Record, DecodeError>;
}
