//! Data models for the yoga studio dashboard.
//!
//! Defines the three record kinds (courses, instructors, participants),
//! the typed record identifier and the boundary that turns URL-shaped
//! reference strings of the record store into identifiers and back.
//!
//! Pure data structures: no HTTP or runtime dependencies.

mod fields;
mod id;
mod record;
mod reference;
pub mod wire;

pub use fields::*;
pub use id::RecordId;
pub use record::*;
pub use reference::{split_references, ReferenceCodec};

/// Placeholder shown wherever a value is missing or cannot be resolved.
pub const PLACEHOLDER: &str = "—";
