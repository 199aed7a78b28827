//! Reference resolution against caller-supplied lookup collections.
//!
//! Matching is case-insensitive exact match. Unmatched dealer and estimator
//! lookups resolve to `None` without raising anything at this layer; the
//! transformer decides whether the miss is worth a warning. The index is
//! built once per import call, so per-row resolution is a hash lookup
//! rather than a scan of the caller's collections.

use std::collections::HashMap;

use estimate_model::ReferenceIndex;

/// Static factory code table of the estimating system.
const FACTORY_LABELS: [(&str, &str); 4] = [
    ("LIN", "Lincoln"),
    ("MAD", "Madison"),
    ("GB", "Green Bay"),
    ("OSH", "Oshkosh"),
];

/// Case-insensitive lookup maps built from a [`ReferenceIndex`].
#[derive(Debug, Clone)]
pub struct ReferenceResolver {
    dealers: HashMap<String, i64>,
    users: HashMap<String, i64>,
}

impl ReferenceResolver {
    pub fn new(refs: &ReferenceIndex) -> Self {
        let dealers = refs
            .dealers
            .iter()
            .map(|dealer| (dealer.code.trim().to_uppercase(), dealer.id))
            .collect();
        let users = refs
            .users
            .iter()
            .map(|user| (user.name.trim().to_uppercase(), user.id))
            .collect();
        Self { dealers, users }
    }

    /// Dealer code to dealer id; `None` when unmatched.
    pub fn dealer(&self, code: &str) -> Option<i64> {
        self.dealers.get(&code.trim().to_uppercase()).copied()
    }

    /// Estimator name to user id; `None` when unmatched.
    pub fn estimator(&self, name: &str) -> Option<i64> {
        self.users.get(&name.trim().to_uppercase()).copied()
    }

    /// Factory code to canonical label.
    ///
    /// Unrecognized codes pass through unchanged: the factory field is
    /// frequently required downstream, so an as-entered label beats silent
    /// loss.
    pub fn factory(code: &str) -> String {
        let trimmed = code.trim();
        FACTORY_LABELS
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(trimmed))
            .map_or_else(|| trimmed.to_string(), |(_, label)| (*label).to_string())
    }
}
