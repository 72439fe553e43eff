use crate::error::ConfigurationError;
use crate::registry::contract::ContentModule;
use crate::registry::identity::{Category, EntryType};
use std::fmt;
use std::sync::Arc;

/// Everything the registry needs to know about one content module.
///
/// Descriptors are immutable once built; the module itself is shared so a
/// sealed registry can be cloned across threads without copying datasets.
#[derive(Clone)]
pub struct ModuleDescriptor {
    category: Category,
    label: String,
    entry_type: EntryType,
    module: Arc<dyn ContentModule>,
}

impl ModuleDescriptor {
    /// Start a descriptor for `category`. Members are checked by `build`.
    pub fn builder(category: impl Into<String>) -> DescriptorBuilder {
        DescriptorBuilder {
            category: category.into(),
            label: None,
            entry_type: None,
            module: None,
        }
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Display name shown next to hits from this module.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn entry_type(&self) -> EntryType {
        self.entry_type
    }

    pub fn module(&self) -> &dyn ContentModule {
        self.module.as_ref()
    }
}

impl fmt::Debug for ModuleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleDescriptor")
            .field("category", &self.category)
            .field("label", &self.label)
            .field("entry_type", &self.entry_type)
            .finish_non_exhaustive()
    }
}

/// Collects descriptor members and validates them in one place.
pub struct DescriptorBuilder {
    category: String,
    label: Option<String>,
    entry_type: Option<EntryType>,
    module: Option<Arc<dyn ContentModule>>,
}

impl DescriptorBuilder {
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn entry_type(mut self, entry_type: EntryType) -> Self {
        self.entry_type = Some(entry_type);
        self
    }

    pub fn module(self, module: impl ContentModule + 'static) -> Self {
        self.shared_module(Arc::new(module))
    }

    /// Attach a module that is already shared elsewhere.
    pub fn shared_module(mut self, module: Arc<dyn ContentModule>) -> Self {
        self.module = Some(module);
        self
    }

    /// Finish the descriptor.
    ///
    /// Fails when the category key is empty or malformed, or when the label
    /// (blank counts as missing), entry type, or module was never supplied.
    pub fn build(self) -> Result<ModuleDescriptor, ConfigurationError> {
        let category = Category::new(self.category)?;
        let missing = |member| ConfigurationError::MissingMember {
            category: category.to_string(),
            member,
        };

        let label = match self.label {
            Some(label) if !label.trim().is_empty() => label,
            _ => return Err(missing("label")),
        };
        let entry_type = self.entry_type.ok_or_else(|| missing("entry_type"))?;
        let module = self.module.ok_or_else(|| missing("module"))?;

        Ok(ModuleDescriptor {
            category,
            label,
            entry_type,
            module,
        })
    }
}
