//! Caller-supplied reference collections for lookup resolution.
//!
//! These live only for the duration of one import call; the pipeline never
//! persists or refreshes them itself.

use serde::{Deserialize, Serialize};

/// A dealer known to the host system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealerRef {
    pub code: String,
    pub id: i64,
}

/// An estimator user known to the host system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    pub name: String,
    pub id: i64,
}

/// Read-only lookup collections for one import call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceIndex {
    pub dealers: Vec<DealerRef>,
    pub users: Vec<UserRef>,
}

impl ReferenceIndex {
    pub fn new(dealers: Vec<DealerRef>, users: Vec<UserRef>) -> Self {
        Self { dealers, users }
    }
}
