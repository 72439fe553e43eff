//! Enciclopedia dental: oral-health conditions, prevention and treatment.

use crate::dataset::load_dataset;
use crate::error::ConfigurationError;
use crate::registry::{ContentEntry, EntryType, ModuleDescriptor};
use crate::search::{BilingualEntry, StaticModule};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const CATEGORY: &str = "dental";
pub const LABEL: &str = "Salud Dental";

const DATASET: &str = include_str!("../../data/dental.json");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DentalEntry {
    pub id: String,
    pub nombre_es: String,
    pub nombre_en: String,
    pub categoria_es: String,
    pub categoria_en: String,
    pub descripcion_es: String,
    pub descripcion_en: String,
    pub sintomas_es: Vec<String>,
    pub sintomas_en: Vec<String>,
    pub causas_es: Vec<String>,
    pub causas_en: Vec<String>,
    pub tratamiento_es: Vec<String>,
    pub tratamiento_en: Vec<String>,
    pub prevencion_es: Vec<String>,
    pub prevencion_en: Vec<String>,
    pub cuando_ver_dentista_es: Vec<String>,
    pub cuando_ver_dentista_en: Vec<String>,
}

impl ContentEntry for DentalEntry {
    fn id(&self) -> &str {
        &self.id
    }

    fn name_es(&self) -> &str {
        &self.nombre_es
    }

    fn name_en(&self) -> &str {
        &self.nombre_en
    }

    // Strings and string lists only, so serialization cannot fail; registration
    // still rejects a rendering without the id.
    fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

impl BilingualEntry for DentalEntry {
    fn searchable_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.nombre_es.as_str(),
            self.nombre_en.as_str(),
            self.categoria_es.as_str(),
            self.categoria_en.as_str(),
            self.descripcion_es.as_str(),
            self.descripcion_en.as_str(),
        ];
        for list in [
            &self.sintomas_es,
            &self.sintomas_en,
            &self.causas_es,
            &self.causas_en,
            &self.tratamiento_es,
            &self.tratamiento_en,
            &self.prevencion_es,
            &self.prevencion_en,
            &self.cuando_ver_dentista_es,
            &self.cuando_ver_dentista_en,
        ] {
            fields.extend(list.iter().map(String::as_str));
        }
        fields
    }

    fn topic(&self) -> (&str, &str) {
        (&self.categoria_es, &self.categoria_en)
    }
}

/// Load the bundled dental dataset.
pub fn module() -> Result<StaticModule<DentalEntry>, ConfigurationError> {
    Ok(StaticModule::new(load_dataset(CATEGORY, DATASET)?))
}

pub fn descriptor() -> Result<ModuleDescriptor, ConfigurationError> {
    ModuleDescriptor::builder(CATEGORY)
        .label(LABEL)
        .entry_type(EntryType::Condition)
        .module(module()?)
        .build()
}
