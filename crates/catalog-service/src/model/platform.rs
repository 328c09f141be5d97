use catalog_framework::{catalog_id, Criterion, FieldValue, Filter, Operation, Record};
use serde::{Deserialize, Serialize};

catalog_id!(Platform, "platform");

/// A gaming platform (console, handheld, PC store).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Platform {
    pub id: PlatformId,
    pub name: String,
    pub manufacturer: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlatformChange {
    pub name: Option<String>,
    pub manufacturer: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlatformFilter {
    pub name: Option<String>,
    pub manufacturer: Option<String>,
    pub operation: Option<Operation>,
}

impl Platform {
    pub fn new(id: PlatformId, change: PlatformChange) -> Self {
        Self {
            id,
            name: change.name.unwrap_or_default(),
            manufacturer: change.manufacturer,
        }
    }
}

impl Record for Platform {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "name" => Some(self.name.as_str().into()),
            "manufacturer" => self.manufacturer.as_deref().map(FieldValue::from),
            _ => None,
        }
    }
}

impl Filter<Platform> for PlatformFilter {
    fn criteria(&self) -> Vec<Criterion> {
        vec![
            Criterion::matching("name", self.name.as_deref(), self.operation),
            Criterion::matching("manufacturer", self.manufacturer.as_deref(), self.operation),
        ]
    }
}
