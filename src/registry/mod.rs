//! Content module registry.
//!
//! Modules describe themselves with a `ModuleDescriptor` (category key,
//! display label, entry type, and the `ContentModule` that answers queries).
//! `ModuleRegistry` stores them in registration order and is sealed into an
//! `Encyclopedia` once bootstrap is done.

pub mod contract;
pub mod descriptor;
pub mod identity;
pub mod store;

pub use contract::{ContentEntry, ContentModule};
pub use descriptor::{DescriptorBuilder, ModuleDescriptor};
pub use identity::{Category, EntryType};
pub use store::ModuleRegistry;
