//! Transformation stage of the estimate import pipeline.
//!
//! Three layers, composed bottom-up:
//! - [`coerce`]: pure cell-text to canonical-type conversions
//! - [`resolve`]: case-insensitive lookup resolution over caller references
//! - [`transformer`]: one validated raw row to one [`estimate_model::ProjectRecord`]

pub mod coerce;
pub mod resolve;
pub mod transformer;

pub use resolve::ReferenceResolver;
pub use transformer::{RecordTransformer, TransformOutcome};
