//! Content modules bundled with the crate.
//!
//! Each module owns one dataset under `data/`, declares its category key and
//! display label, and builds its own `ModuleDescriptor`. Entry shapes differ
//! between modules; only `ContentEntry` is shared.

pub mod dental;
pub mod infecciosas;

pub use dental::DentalEntry;
pub use infecciosas::InfectiousEntry;
