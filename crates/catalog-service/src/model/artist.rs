use catalog_framework::{catalog_id, Criterion, FieldValue, Filter, Operation, Record};
use serde::{Deserialize, Serialize};

catalog_id!(Artist, "artist");

/// A performer or band credited on music albums.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Artist {
    pub id: ArtistId,
    pub name: String,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArtistChange {
    pub name: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ArtistFilter {
    pub name: Option<String>,
    pub country: Option<String>,
    pub operation: Option<Operation>,
}

impl Artist {
    pub fn new(id: ArtistId, change: ArtistChange) -> Self {
        Self {
            id,
            name: change.name.unwrap_or_default(),
            country: change.country,
        }
    }
}

impl Record for Artist {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "name" => Some(self.name.as_str().into()),
            "country" => self.country.as_deref().map(FieldValue::from),
            _ => None,
        }
    }
}

impl Filter<Artist> for ArtistFilter {
    fn criteria(&self) -> Vec<Criterion> {
        vec![
            Criterion::matching("name", self.name.as_deref(), self.operation),
            Criterion::matching("country", self.country.as_deref(), self.operation),
        ]
    }
}
