//! The two traits a content module implements to be registrable.
//!
//! The registry never inspects module-specific fields. Entries only have to
//! expose a stable id, the paired Spanish/English names, and a JSON rendering
//! used by callers that display or compare whole entries.

use serde_json::Value;
use std::fmt;

/// Minimal shared shape of a content record.
pub trait ContentEntry: fmt::Debug + Send + Sync {
    /// Identifier unique within the owning module (not globally).
    fn id(&self) -> &str;

    fn name_es(&self) -> &str;

    fn name_en(&self) -> &str;

    /// Full entry as JSON, including module-specific fields.
    fn to_value(&self) -> Value;
}

/// Query triplet every registered module provides.
///
/// Implementations must be pure: the same input always yields the same
/// entries, in the same order, without side effects.
pub trait ContentModule: Send + Sync {
    /// Entries with at least one bilingual field containing `query`.
    ///
    /// Callers pass an already-trimmed, non-empty query, but modules still
    /// return nothing for blank input.
    fn search(&self, query: &str) -> Vec<&dyn ContentEntry>;

    fn get_by_id(&self, id: &str) -> Option<&dyn ContentEntry>;

    /// Every entry, in dataset order.
    fn get_all(&self) -> Vec<&dyn ContentEntry>;
}
