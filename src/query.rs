//! Read-only query facade over a sealed module registry.
//!
//! `Encyclopedia` is what the rest of the application holds on to after
//! bootstrap. It fans a query out to every module in registration order and
//! tags each hit with the module it came from, since entries themselves carry
//! no back-reference. Unknown categories and ids are lookup misses (`None` or
//! an empty `Vec`), never errors.

use crate::registry::{Category, ContentEntry, EntryType, ModuleDescriptor, ModuleRegistry};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::sync::Arc;

/// Prefix of the application-wide ids handed out for module entries.
pub const ENCYCLOPEDIA_ID_PREFIX: &str = "spanish";

/// One entry returned by a fan-out search, tagged with its module.
#[derive(Clone, Copy, Debug)]
pub struct SearchHit<'a> {
    pub category: &'a Category,
    pub label: &'a str,
    pub entry_type: EntryType,
    pub entry: &'a dyn ContentEntry,
}

impl<'a> SearchHit<'a> {
    fn new(descriptor: &'a ModuleDescriptor, entry: &'a dyn ContentEntry) -> Self {
        Self {
            category: descriptor.category(),
            label: descriptor.label(),
            entry_type: descriptor.entry_type(),
            entry,
        }
    }

    /// Application-wide id of the hit: `spanish-{category}-{id}`.
    pub fn encyclopedia_id(&self) -> String {
        format!(
            "{ENCYCLOPEDIA_ID_PREFIX}-{}-{}",
            self.category,
            self.entry.id()
        )
    }
}

impl Serialize for SearchHit<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("SearchHit", 4)?;
        state.serialize_field("category", self.category)?;
        state.serialize_field("label", self.label)?;
        state.serialize_field("entryType", &self.entry_type)?;
        state.serialize_field("entry", &self.entry.to_value())?;
        state.end()
    }
}

/// Sealed, shareable snapshot of a module registry.
///
/// Cloning is cheap and the snapshot is `Send + Sync`, so it can be handed to
/// any number of readers without locking.
#[derive(Clone, Debug)]
pub struct Encyclopedia {
    registry: Arc<ModuleRegistry>,
}

impl Encyclopedia {
    pub(crate) fn from_registry(registry: ModuleRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Search every module and concatenate the hits in registration order.
    ///
    /// The query is trimmed first; a blank query returns nothing without
    /// touching any module. No deduplication or ranking is applied.
    pub fn search_all(&self, query: &str) -> Vec<SearchHit<'_>> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }
        self.registry
            .modules()
            .flat_map(|descriptor| search_module(descriptor, query))
            .collect()
    }

    /// Search a single module; unknown categories yield no hits.
    pub fn search_category(&self, category: &str, query: &str) -> Vec<SearchHit<'_>> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }
        self.registry
            .get_module(category)
            .map(|descriptor| search_module(descriptor, query))
            .unwrap_or_default()
    }

    /// Fetch one entry by category and id.
    pub fn get_entry(&self, category: &str, id: &str) -> Option<&dyn ContentEntry> {
        self.registry.get_module(category)?.module().get_by_id(id)
    }

    /// Every entry of a module, or nothing when the category is unknown.
    pub fn get_all_in_category(&self, category: &str) -> Vec<&dyn ContentEntry> {
        self.registry
            .get_module(category)
            .map(|descriptor| descriptor.module().get_all())
            .unwrap_or_default()
    }

    pub fn list_categories(&self) -> Vec<&Category> {
        self.registry.list_categories()
    }

    pub fn get_module(&self, category: &str) -> Option<&ModuleDescriptor> {
        self.registry.get_module(category)
    }

    /// Resolve a `spanish-{category}-{id}` id back to its entry.
    ///
    /// Categories may contain dashes, so each registered category is tried as
    /// a prefix in registration order; the first one whose module knows the
    /// remaining id wins.
    pub fn resolve_encyclopedia_id(&self, encyclopedia_id: &str) -> Option<SearchHit<'_>> {
        let rest = encyclopedia_id
            .strip_prefix(ENCYCLOPEDIA_ID_PREFIX)?
            .strip_prefix('-')?;
        self.registry.modules().find_map(|descriptor| {
            let id = rest
                .strip_prefix(descriptor.category().as_str())?
                .strip_prefix('-')?;
            let entry = descriptor.module().get_by_id(id)?;
            Some(SearchHit::new(descriptor, entry))
        })
    }

    /// Number of entries per module, in registration order.
    pub fn entry_counts(&self) -> Vec<(&Category, usize)> {
        self.registry
            .modules()
            .map(|descriptor| (descriptor.category(), descriptor.module().get_all().len()))
            .collect()
    }

    pub fn total_entries(&self) -> usize {
        self.entry_counts().iter().map(|(_, count)| count).sum()
    }

    /// Underlying registry, read-only.
    pub fn registry(&self) -> &ModuleRegistry {
        &self.registry
    }
}

fn search_module<'a>(descriptor: &'a ModuleDescriptor, query: &str) -> Vec<SearchHit<'a>> {
    descriptor
        .module()
        .search(query)
        .into_iter()
        .map(|entry| SearchHit::new(descriptor, entry))
        .collect()
}
