use catalog_framework::{catalog_id, Criterion, FieldValue, Filter, Operation, Record};
use serde::{Deserialize, Serialize};

catalog_id!(Publisher, "publisher");

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Publisher {
    pub id: PublisherId,
    pub name: String,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublisherChange {
    pub name: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PublisherFilter {
    pub name: Option<String>,
    pub country: Option<String>,
    pub operation: Option<Operation>,
}

impl Publisher {
    pub fn new(id: PublisherId, change: PublisherChange) -> Self {
        Self {
            id,
            name: change.name.unwrap_or_default(),
            country: change.country,
        }
    }
}

impl Record for Publisher {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "name" => Some(self.name.as_str().into()),
            "country" => self.country.as_deref().map(FieldValue::from),
            _ => None,
        }
    }
}

impl Filter<Publisher> for PublisherFilter {
    fn criteria(&self) -> Vec<Criterion> {
        vec![
            Criterion::matching("name", self.name.as_deref(), self.operation),
            Criterion::matching("country", self.country.as_deref(), self.operation),
        ]
    }
}
