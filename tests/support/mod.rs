use enciclopedia::modules::{dental, infecciosas};
use enciclopedia::{
    ContentEntry, ContentModule, Encyclopedia, EntryType, ModuleDescriptor, ModuleRegistry,
};
use serde_json::{Value, json};

/// Registry holding the bundled dental and infecciosas modules, in that order.
pub fn dental_then_infecciosas() -> Encyclopedia {
    let mut registry = ModuleRegistry::new();
    registry
        .register(dental::descriptor().expect("dental descriptor"))
        .expect("register dental");
    registry
        .register(infecciosas::descriptor().expect("infecciosas descriptor"))
        .expect("register infecciosas");
    registry.seal()
}

#[derive(Debug)]
pub struct FixtureEntry {
    pub id: String,
    pub es: String,
    pub en: String,
}

impl ContentEntry for FixtureEntry {
    fn id(&self) -> &str {
        &self.id
    }

    fn name_es(&self) -> &str {
        &self.es
    }

    fn name_en(&self) -> &str {
        &self.en
    }

    fn to_value(&self) -> Value {
        json!({ "id": self.id, "nombreEs": self.es, "nombreEn": self.en })
    }
}

/// Case-sensitive name-only module, the narrowest search a collaborator may
/// implement.
pub struct FixtureModule {
    entries: Vec<FixtureEntry>,
}

impl FixtureModule {
    pub fn new(entries: &[(&str, &str, &str)]) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|(id, es, en)| FixtureEntry {
                    id: id.to_string(),
                    es: es.to_string(),
                    en: en.to_string(),
                })
                .collect(),
        }
    }
}

impl ContentModule for FixtureModule {
    fn search(&self, query: &str) -> Vec<&dyn ContentEntry> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        self.entries
            .iter()
            .filter(|entry| entry.es.contains(query) || entry.en.contains(query))
            .map(|entry| entry as &dyn ContentEntry)
            .collect()
    }

    fn get_by_id(&self, id: &str) -> Option<&dyn ContentEntry> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry as &dyn ContentEntry)
    }

    fn get_all(&self) -> Vec<&dyn ContentEntry> {
        self.entries
            .iter()
            .map(|entry| entry as &dyn ContentEntry)
            .collect()
    }
}

pub fn fixture_descriptor(category: &str, entries: &[(&str, &str, &str)]) -> ModuleDescriptor {
    ModuleDescriptor::builder(category)
        .label(format!("Fixture {category}"))
        .entry_type(EntryType::Procedure)
        .module(FixtureModule::new(entries))
        .build()
        .expect("fixture descriptor")
}

pub fn hit_ids(hits: &[enciclopedia::SearchHit<'_>]) -> Vec<(String, String)> {
    hits.iter()
        .map(|hit| (hit.category.to_string(), hit.entry.id().to_string()))
        .collect()
}
