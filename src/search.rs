//! Bilingual substring search shared by the bundled content modules.
//!
//! Matching is plain substring containment over folded text: both the query
//! and every searchable field are lowercased, decomposed (NFD) and stripped of
//! combining diacritics, so `ENCÍAS`, `encías` and `encias` all hit the same
//! entries whether the accent arrives precomposed or as a separate mark.
//! There is no tokenizing, fuzzing, or ranking; results keep dataset order.

use crate::registry::{ContentEntry, ContentModule};
use unicode_normalization::UnicodeNormalization;

/// Lowercase `text`, decompose it, and drop combining diacritical marks.
///
/// Lowercasing runs first because some uppercase letters (`İ`) lowercase to a
/// base letter plus a mark.
pub fn fold(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .nfd()
        .filter(|c| !is_combining_diacritic(*c))
        .collect()
}

fn is_combining_diacritic(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036f}')
}

/// Trim and fold a raw query; `None` when nothing searchable is left.
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(fold(trimmed))
}

/// Entry that knows which of its fields take part in search.
pub trait BilingualEntry: ContentEntry {
    /// Every Spanish and English field scanned by `search`, list-valued
    /// fields flattened.
    fn searchable_fields(&self) -> Vec<&str>;

    /// Spanish and English topic labels used by `StaticModule::by_topic`.
    fn topic(&self) -> (&str, &str);

    fn matches(&self, folded_query: &str) -> bool {
        self.searchable_fields()
            .into_iter()
            .any(|field| fold(field).contains(folded_query))
    }
}

/// Fixed, in-memory dataset implementing the module query triplet.
#[derive(Debug, Clone)]
pub struct StaticModule<E> {
    entries: Vec<E>,
}

impl<E: BilingualEntry> StaticModule<E> {
    pub fn new(entries: Vec<E>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[E] {
        &self.entries
    }

    /// Typed variant of `ContentModule::search`.
    pub fn find(&self, query: &str) -> Vec<&E> {
        let Some(needle) = normalize_query(query) else {
            return Vec::new();
        };
        self.entries
            .iter()
            .filter(|entry| entry.matches(&needle))
            .collect()
    }

    /// Entries whose Spanish or English topic contains `topic`.
    pub fn by_topic(&self, topic: &str) -> Vec<&E> {
        let Some(needle) = normalize_query(topic) else {
            return Vec::new();
        };
        self.entries
            .iter()
            .filter(|entry| {
                let (es, en) = entry.topic();
                fold(es).contains(&needle) || fold(en).contains(&needle)
            })
            .collect()
    }

    pub fn entry(&self, id: &str) -> Option<&E> {
        self.entries.iter().find(|entry| entry.id() == id)
    }
}

impl<E: BilingualEntry + 'static> ContentModule for StaticModule<E> {
    fn search(&self, query: &str) -> Vec<&dyn ContentEntry> {
        self.find(query)
            .into_iter()
            .map(|entry| entry as &dyn ContentEntry)
            .collect()
    }

    fn get_by_id(&self, id: &str) -> Option<&dyn ContentEntry> {
        self.entry(id).map(|entry| entry as &dyn ContentEntry)
    }

    fn get_all(&self) -> Vec<&dyn ContentEntry> {
        self.entries
            .iter()
            .map(|entry| entry as &dyn ContentEntry)
            .collect()
    }
}
