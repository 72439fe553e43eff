use crate::error::ConfigurationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Borrow;
use std::fmt;

/// Stable key a content module is registered under (e.g., `dental`).
///
/// Keys are unique across a registry and double as the routing prefix in
/// encyclopedia ids, so they are restricted to `^[A-Za-z0-9_.-]+$`. The only
/// ways in are `Category::new` and deserialization, and both validate.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub(crate) fn new(key: impl Into<String>) -> Result<Self, ConfigurationError> {
        let key = key.into();
        validate_category(&key)?;
        Ok(Self(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Category::new(value).map_err(serde::de::Error::custom)
    }
}

impl Borrow<str> for Category {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of record a module holds.
///
/// The set is closed: a tag outside it is a descriptor bug, not a new kind.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum EntryType {
    Condition,
    Procedure,
    Screening,
    Medication,
    Topic,
}

impl EntryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::Condition => "condition",
            EntryType::Procedure => "procedure",
            EntryType::Screening => "screening",
            EntryType::Medication => "medication",
            EntryType::Topic => "topic",
        }
    }
}

impl TryFrom<&str> for EntryType {
    type Error = ConfigurationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "condition" => Ok(EntryType::Condition),
            "procedure" => Ok(EntryType::Procedure),
            "screening" => Ok(EntryType::Screening),
            "medication" => Ok(EntryType::Medication),
            "topic" => Ok(EntryType::Topic),
            other => Err(ConfigurationError::UnknownEntryType(other.to_string())),
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for EntryType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EntryType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        EntryType::try_from(value.as_str()).map_err(serde::de::Error::custom)
    }
}

fn validate_category(key: &str) -> Result<(), ConfigurationError> {
    if key.is_empty() {
        return Err(ConfigurationError::EmptyCategory);
    }

    if !key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
    {
        return Err(ConfigurationError::InvalidCategory(key.to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_type_serializes_as_tag() {
        let json = serde_json::to_string(&EntryType::Screening).unwrap();
        assert_eq!(json, "\"screening\"");
        let back: EntryType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, EntryType::Screening);
    }

    #[test]
    fn entry_type_rejects_unknown_tag() {
        let err = EntryType::try_from("anatomy").expect_err("closed set");
        assert_eq!(err, ConfigurationError::UnknownEntryType("anatomy".into()));

        let parsed: Result<EntryType, _> = serde_json::from_str("\"anatomy\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn category_is_transparent_in_json() {
        let key = Category::new("salud-mental").expect("valid key");
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"salud-mental\"");
        assert_eq!(key.to_string(), "salud-mental");
        let back: Category = serde_json::from_str("\"salud-mental\"").unwrap();
        assert_eq!(back, key);
    }

    #[test]
    fn category_cannot_skip_validation() {
        assert_eq!(
            Category::new("salud mental"),
            Err(ConfigurationError::InvalidCategory("salud mental".into()))
        );
        assert_eq!(Category::new(""), Err(ConfigurationError::EmptyCategory));

        let parsed: Result<Category, _> = serde_json::from_str("\"salud mental\"");
        let err = parsed.expect_err("invalid key in json");
        assert!(err.to_string().contains("salud mental"), "{err}");
    }

    #[test]
    fn validate_category_rules() {
        assert!(validate_category("dental").is_ok());
        assert!(validate_category("medicina_tropical.v2").is_ok());
        assert_eq!(
            validate_category(""),
            Err(ConfigurationError::EmptyCategory)
        );
        assert_eq!(
            validate_category("salud mental"),
            Err(ConfigurationError::InvalidCategory("salud mental".into()))
        );
        assert!(validate_category("encías").is_err());
    }
}
