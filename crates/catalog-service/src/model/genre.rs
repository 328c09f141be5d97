use catalog_framework::{catalog_id, Criterion, FieldValue, Filter, Operation, Record};
use serde::{Deserialize, Serialize};

catalog_id!(Genre, "genre");

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Genre {
    pub id: GenreId,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenreChange {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GenreFilter {
    pub name: Option<String>,
    pub operation: Option<Operation>,
}

impl Genre {
    pub fn new(id: GenreId, change: GenreChange) -> Self {
        Self {
            id,
            name: change.name.unwrap_or_default(),
        }
    }
}

impl Record for Genre {
    fn field(&self, name: &str) -> Option<FieldValue> {
        (name == "name").then(|| self.name.as_str().into())
    }
}

impl Filter<Genre> for GenreFilter {
    fn criteria(&self) -> Vec<Criterion> {
        vec![Criterion::matching("name", self.name.as_deref(), self.operation)]
    }
}
