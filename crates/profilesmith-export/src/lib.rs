//! Transform and export for inserted profiles.
//!
//! Merges the four sub-records of a profile into the canonical customer
//! document and writes it as a timestamped JSON file under the results
//! directory.

pub mod canonical;
pub mod error;
pub mod exporter;

pub use canonical::{CanonicalProfile, canonicalize};
pub use error::ExportError;
pub use exporter::Exporter;
