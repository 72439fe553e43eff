//! Shared library for the bilingual medical-education encyclopedia.
//!
//! Content lives in independent modules, each owning a fixed bilingual
//! (Spanish-first) dataset and answering its own search/lookup queries. The
//! crate registers those modules under unique category keys and exposes one
//! query facade over all of them: fan-out search tagged with the originating
//! module, and lookup by category plus entry id.
//!
//! Typical use is `bootstrap()` once at startup, then sharing the returned
//! `Encyclopedia` with the rest of the application.

pub mod bootstrap;
pub mod dataset;
pub mod error;
pub mod modules;
pub mod query;
pub mod registry;
pub mod search;

pub use bootstrap::{BATCHES, bootstrap, register_all, register_batch_1, register_batch_2};
pub use dataset::load_dataset;
pub use error::ConfigurationError;
pub use modules::{DentalEntry, InfectiousEntry};
pub use query::{ENCYCLOPEDIA_ID_PREFIX, Encyclopedia, SearchHit};
pub use registry::{
    Category, ContentEntry, ContentModule, DescriptorBuilder, EntryType, ModuleDescriptor,
    ModuleRegistry,
};
pub use search::{BilingualEntry, StaticModule, fold, normalize_query};
