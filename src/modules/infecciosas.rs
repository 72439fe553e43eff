//! Enfermedades infecciosas: febrile tropical infections.
//!
//! Entries carry single-paragraph transmission, diagnosis, treatment and
//! prevention texts rather than the bullet lists used by the dental module.

use crate::dataset::load_dataset;
use crate::error::ConfigurationError;
use crate::registry::{ContentEntry, EntryType, ModuleDescriptor};
use crate::search::{BilingualEntry, StaticModule};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const CATEGORY: &str = "infecciosas";
pub const LABEL: &str = "Enfermedades Infecciosas";

const DATASET: &str = include_str!("../../data/infecciosas.json");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InfectiousEntry {
    pub id: String,
    pub nombre_es: String,
    pub nombre_en: String,
    pub descripcion_es: String,
    pub descripcion_en: String,
    pub categoria_es: String,
    pub categoria_en: String,
    pub sintomas_es: Vec<String>,
    pub sintomas_en: Vec<String>,
    pub transmision_es: String,
    pub transmision_en: String,
    pub diagnostico_es: String,
    pub diagnostico_en: String,
    pub tratamiento_es: String,
    pub tratamiento_en: String,
    pub prevencion_es: String,
    pub prevencion_en: String,
    pub regiones_endemicas_es: String,
    pub regiones_endemicas_en: String,
    pub cuando_consultar_es: String,
    pub cuando_consultar_en: String,
}

impl ContentEntry for InfectiousEntry {
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

impl BilingualEntry for InfectiousEntry {
    fn searchable_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.nombre_es.as_str(),
            self.nombre_en.as_str(),
            self.categoria_es.as_str(),
            self.categoria_en.as_str(),
            self.descripcion_es.as_str(),
            self.descripcion_en.as_str(),
            self.transmision_es.as_str(),
            self.transmision_en.as_str(),
            self.diagnostico_es.as_str(),
            self.diagnostico_en.as_str(),
            self.tratamiento_es.as_str(),
            self.tratamiento_en.as_str(),
            self.prevencion_es.as_str(),
            self.prevencion_en.as_str(),
            self.regiones_endemicas_es.as_str(),
            self.regiones_endemicas_en.as_str(),
            self.cuando_consultar_es.as_str(),
            self.cuando_consultar_en.as_str(),
        ];
        fields.extend(self.sintomas_es.iter().map(String::as_str));
        fields.extend(self.sintomas_en.iter().map(String::as_str));
        fields
    }

    fn topic(&self) -> (&str, &str) {
        (&self.categoria_es, &self.categoria_en)
    }
}

pub fn module() -> Result<StaticModule<InfectiousEntry>, ConfigurationError> {
    Ok(StaticModule::new(load_dataset(CATEGORY, DATASET)?))
}

pub fn descriptor() -> Result<ModuleDescriptor, ConfigurationError> {
    ModuleDescriptor::builder(CATEGORY)
        .label(LABEL)
        .entry_type(EntryType::Condition)
        .module(module()?)
        .build()
}
