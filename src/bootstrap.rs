//! Startup registration of the bundled content modules.
//!
//! Batches run in the order listed in `BATCHES`; that order only decides how
//! aggregated search results are ordered. Any registration failure aborts
//! bootstrap with the batch name attached, since a module that silently
//! failed to register would show up later as incomplete search results.

use crate::error::ConfigurationError;
use crate::modules::{dental, infecciosas};
use crate::query::Encyclopedia;
use crate::registry::ModuleRegistry;
use anyhow::{Context, Result};
use tracing::info;

/// One batch-registration routine.
pub type RegisterBatch = fn(&mut ModuleRegistry) -> Result<(), ConfigurationError>;

/// Registration batches in startup order.
pub const BATCHES: &[(&str, RegisterBatch)] = &[
    ("batch-1", register_batch_1),
    ("batch-2", register_batch_2),
];

/// Oral health.
pub fn register_batch_1(registry: &mut ModuleRegistry) -> Result<(), ConfigurationError> {
    registry.register(dental::descriptor()?)
}

/// Infectious disease.
pub fn register_batch_2(registry: &mut ModuleRegistry) -> Result<(), ConfigurationError> {
    registry.register(infecciosas::descriptor()?)
}

/// Run every batch into `registry`, stopping at the first failure.
pub fn register_all(registry: &mut ModuleRegistry) -> Result<()> {
    for (name, batch) in BATCHES {
        batch(&mut *registry).with_context(|| format!("registering content {name}"))?;
    }
    Ok(())
}

/// Build the process-wide encyclopedia from the bundled modules.
pub fn bootstrap() -> Result<Encyclopedia> {
    let mut registry = ModuleRegistry::new();
    register_all(&mut registry)?;
    let encyclopedia = registry.seal();
    info!(
        batches = BATCHES.len(),
        entries = encyclopedia.total_entries(),
        "content bootstrap complete"
    );
    Ok(encyclopedia)
}
