pub mod catalog;
pub mod error;
pub mod issue;
pub mod record;
pub mod refs;
pub mod result;

pub use catalog::{FieldCatalog, FieldCategory, FieldMapEntry, headers};
pub use error::{CatalogError, Result};
pub use issue::{Severity, ValidationIssue};
pub use record::{IMPORT_SOURCE, ProjectRecord, ProjectStatus};
pub use refs::{DealerRef, ReferenceIndex, UserRef};
pub use result::{ImportResult, ImportStats};
