//! Insertion-ordered store of module descriptors.
//!
//! The registry is strict: a category can be registered once, and a module
//! whose entries break the per-module id contract is refused up front so a
//! broken dataset cannot silently drop out of aggregated search results.

use crate::error::ConfigurationError;
use crate::query::Encyclopedia;
use crate::registry::descriptor::ModuleDescriptor;
use crate::registry::identity::Category;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info};

/// Content modules keyed by category, iterated in registration order.
#[derive(Debug, Default)]
pub struct ModuleRegistry {
    modules: Vec<ModuleDescriptor>,
    by_category: BTreeMap<Category, usize>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a module under its category.
    ///
    /// Fails on a duplicate category, and on entries with an empty or repeated
    /// id, an id the module's own `get_by_id` cannot resolve, or a JSON view
    /// that does not carry the id.
    pub fn register(&mut self, descriptor: ModuleDescriptor) -> Result<(), ConfigurationError> {
        let category = descriptor.category().clone();
        if self.by_category.contains_key(&category) {
            return Err(ConfigurationError::DuplicateCategory(category.to_string()));
        }

        let entries = validate_entries(&descriptor)?;
        debug!(
            category = %category,
            label = descriptor.label(),
            entry_type = %descriptor.entry_type(),
            entries,
            "registered content module"
        );

        self.by_category.insert(category, self.modules.len());
        self.modules.push(descriptor);
        Ok(())
    }

    /// Look up a module; unknown categories are a miss, not an error.
    pub fn get_module(&self, category: &str) -> Option<&ModuleDescriptor> {
        let index = *self.by_category.get(category)?;
        self.modules.get(index)
    }

    /// Registered categories in registration order.
    pub fn list_categories(&self) -> Vec<&Category> {
        self.modules.iter().map(ModuleDescriptor::category).collect()
    }

    /// Iterates descriptors in registration order.
    pub fn modules(&self) -> impl Iterator<Item = &ModuleDescriptor> {
        self.modules.iter()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Drop every registration. Only meant for isolating test cases.
    pub fn reset(&mut self) {
        self.modules.clear();
        self.by_category.clear();
    }

    /// Freeze the registry into a read-only, shareable query facade.
    pub fn seal(self) -> Encyclopedia {
        info!(modules = self.modules.len(), "content registry sealed");
        Encyclopedia::from_registry(self)
    }
}

fn validate_entries(descriptor: &ModuleDescriptor) -> Result<usize, ConfigurationError> {
    let category = descriptor.category().as_str();
    let module = descriptor.module();
    let entries = module.get_all();

    let mut seen: BTreeSet<&str> = BTreeSet::new();
    for entry in &entries {
        let id = entry.id();
        if id.trim().is_empty() {
            return Err(ConfigurationError::EmptyEntryId(category.to_string()));
        }
        if !seen.insert(id) {
            return Err(ConfigurationError::DuplicateEntryId {
                category: category.to_string(),
                id: id.to_string(),
            });
        }
        let resolved = module.get_by_id(id).map(|found| found.id() == id);
        if resolved != Some(true) {
            return Err(ConfigurationError::UnresolvableEntry {
                category: category.to_string(),
                id: id.to_string(),
            });
        }
        if entry.to_value().get("id").and_then(Value::as_str) != Some(id) {
            return Err(ConfigurationError::UnrenderableEntry {
                category: category.to_string(),
                id: id.to_string(),
            });
        }
    }
    Ok(entries.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::contract::{ContentEntry, ContentModule};
    use crate::registry::identity::EntryType;
    use serde_json::{Value, json};

    #[derive(Debug)]
    struct Stub(&'static str);

    #[derive(Debug)]
    struct Unrendered;

    impl ContentEntry for Unrendered {
        fn id(&self) -> &str {
            "a"
        }

        fn name_es(&self) -> &str {
            "a"
        }

        fn name_en(&self) -> &str {
            "a"
        }

        fn to_value(&self) -> Value {
            Value::Null
        }
    }

    struct UnrenderedModule(Unrendered);

    impl ContentModule for UnrenderedModule {
        fn search(&self, _query: &str) -> Vec<&dyn ContentEntry> {
            Vec::new()
        }

        fn get_by_id(&self, id: &str) -> Option<&dyn ContentEntry> {
            (id == "a").then_some(&self.0 as &dyn ContentEntry)
        }

        fn get_all(&self) -> Vec<&dyn ContentEntry> {
            vec![&self.0 as &dyn ContentEntry]
        }
    }

    impl ContentEntry for Stub {
        fn id(&self) -> &str {
            self.0
        }

        fn name_es(&self) -> &str {
            self.0
        }

        fn name_en(&self) -> &str {
            self.0
        }

        fn to_value(&self) -> Value {
            json!({ "id": self.0 })
        }
    }

    struct StubModule {
        entries: Vec<Stub>,
        lookup_works: bool,
    }

    impl StubModule {
        fn with_ids(ids: &[&'static str]) -> Self {
            Self {
                entries: ids.iter().copied().map(Stub).collect(),
                lookup_works: true,
            }
        }
    }

    impl ContentModule for StubModule {
        fn search(&self, _query: &str) -> Vec<&dyn ContentEntry> {
            Vec::new()
        }

        fn get_by_id(&self, id: &str) -> Option<&dyn ContentEntry> {
            if !self.lookup_works {
                return None;
            }
            self.entries
                .iter()
                .find(|entry| entry.0 == id)
                .map(|entry| entry as &dyn ContentEntry)
        }

        fn get_all(&self) -> Vec<&dyn ContentEntry> {
            self.entries
                .iter()
                .map(|entry| entry as &dyn ContentEntry)
                .collect()
        }
    }

    fn descriptor(category: &str, module: StubModule) -> ModuleDescriptor {
        ModuleDescriptor::builder(category)
            .label(format!("label {category}"))
            .entry_type(EntryType::Condition)
            .module(module)
            .build()
            .expect("valid descriptor")
    }

    #[test]
    fn register_preserves_insertion_order() {
        let mut registry = ModuleRegistry::new();
        for category in ["respiratorio", "dental", "cardiologia"] {
            registry
                .register(descriptor(category, StubModule::with_ids(&["a"])))
                .expect("register");
        }
        let categories: Vec<&str> = registry
            .list_categories()
            .into_iter()
            .map(Category::as_str)
            .collect();
        assert_eq!(categories, vec!["respiratorio", "dental", "cardiologia"]);
        assert_eq!(registry.len(), 3);
        assert_eq!(
            registry.get_module("dental").map(|d| d.label()),
            Some("label dental")
        );
    }

    #[test]
    fn register_rejects_duplicate_category_and_keeps_original() {
        let mut registry = ModuleRegistry::new();
        registry
            .register(descriptor("dental", StubModule::with_ids(&["a"])))
            .expect("first registration");
        let err = registry
            .register(descriptor("dental", StubModule::with_ids(&["b", "c"])))
            .expect_err("duplicate");
        assert_eq!(err, ConfigurationError::DuplicateCategory("dental".into()));
        assert_eq!(registry.len(), 1);
        let kept = registry.get_module("dental").expect("still registered");
        assert_eq!(kept.module().get_all().len(), 1);
    }

    #[test]
    fn register_rejects_broken_entry_ids() {
        let mut registry = ModuleRegistry::new();

        let err = registry
            .register(descriptor("dup", StubModule::with_ids(&["a", "a"])))
            .expect_err("duplicate id");
        assert_eq!(
            err,
            ConfigurationError::DuplicateEntryId {
                category: "dup".into(),
                id: "a".into()
            }
        );

        let err = registry
            .register(descriptor("blank", StubModule::with_ids(&["a", " "])))
            .expect_err("blank id");
        assert_eq!(err, ConfigurationError::EmptyEntryId("blank".into()));

        let mut broken = StubModule::with_ids(&["a"]);
        broken.lookup_works = false;
        let err = registry
            .register(descriptor("broken", broken))
            .expect_err("unresolvable");
        assert!(matches!(err, ConfigurationError::UnresolvableEntry { .. }));

        assert!(registry.is_empty(), "failed registrations leave no trace");
    }

    #[test]
    fn register_rejects_entries_rendered_without_id() {
        let mut registry = ModuleRegistry::new();
        let descriptor = ModuleDescriptor::builder("nulo")
            .label("Nulo")
            .entry_type(EntryType::Topic)
            .module(UnrenderedModule(Unrendered))
            .build()
            .expect("valid descriptor");
        let err = registry.register(descriptor).expect_err("null rendering");
        assert_eq!(
            err,
            ConfigurationError::UnrenderableEntry {
                category: "nulo".into(),
                id: "a".into()
            }
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn get_module_misses_quietly() {
        let registry = ModuleRegistry::new();
        assert!(registry.get_module("dental").is_none());
        assert!(registry.list_categories().is_empty());
    }

    #[test]
    fn reset_allows_re_registration() {
        let mut registry = ModuleRegistry::new();
        registry
            .register(descriptor("dental", StubModule::with_ids(&["a"])))
            .expect("register");
        registry.reset();
        assert!(registry.is_empty());
        assert!(registry.get_module("dental").is_none());
        registry
            .register(descriptor("dental", StubModule::with_ids(&["a"])))
            .expect("re-register after reset");
        assert_eq!(registry.len(), 1);
    }
}
