//! Error types for module registration.
//!
//! Every variant describes a bootstrap bug (a malformed descriptor, a broken
//! dataset, a category registered twice). Lookup misses are not errors and
//! never appear here.

use thiserror::Error;

/// Registration-time failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Descriptor was built with an empty category key
    #[error("module category must not be empty")]
    EmptyCategory,

    /// Category key contains characters outside the allowed set
    #[error("module category must match ^[A-Za-z0-9_.-]+$, got '{0}'")]
    InvalidCategory(String),

    /// Category is already present in the registry
    #[error("module category '{0}' is already registered")]
    DuplicateCategory(String),

    /// Descriptor builder was finished without a required member
    #[error("module '{category}' is missing required member '{member}'")]
    MissingMember {
        category: String,
        member: &'static str,
    },

    /// Entry type tag outside the closed set
    #[error("unknown entry type '{0}'")]
    UnknownEntryType(String),

    /// Module exposes an entry whose id is empty
    #[error("module '{0}' contains an entry with no id")]
    EmptyEntryId(String),

    /// Module exposes two entries sharing one id
    #[error("module '{category}' contains duplicate entry id '{id}'")]
    DuplicateEntryId { category: String, id: String },

    /// Module lists an entry that its own id lookup cannot find
    #[error("module '{category}' cannot resolve its own entry '{id}' by id")]
    UnresolvableEntry { category: String, id: String },

    /// Entry's JSON rendering does not carry its own id
    #[error("module '{category}' renders entry '{id}' without its id")]
    UnrenderableEntry { category: String, id: String },

    /// Bundled dataset failed to parse or validate
    #[error("dataset for module '{category}' is invalid:\n{details}")]
    InvalidDataset { category: String, details: String },
}
