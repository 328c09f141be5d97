use catalog_framework::{catalog_id, Criterion, FieldValue, Filter, Operation, Record};
use serde::{Deserialize, Serialize};

catalog_id!(Author, "author");

/// A book author.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Author {
    pub id: AuthorId,
    pub first_name: String,
    pub last_name: String,
    pub nationality: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthorChange {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub nationality: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AuthorFilter {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub nationality: Option<String>,
    pub operation: Option<Operation>,
}

impl Author {
    pub fn new(id: AuthorId, change: AuthorChange) -> Self {
        Self {
            id,
            first_name: change.first_name.unwrap_or_default(),
            last_name: change.last_name.unwrap_or_default(),
            nationality: change.nationality,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Record for Author {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "first_name" => Some(self.first_name.as_str().into()),
            "last_name" => Some(self.last_name.as_str().into()),
            "nationality" => self.nationality.as_deref().map(FieldValue::from),
            _ => None,
        }
    }
}

impl Filter<Author> for AuthorFilter {
    fn criteria(&self) -> Vec<Criterion> {
        vec![
            Criterion::matching("first_name", self.first_name.as_deref(), self.operation),
            Criterion::matching("last_name", self.last_name.as_deref(), self.operation),
            Criterion::matching("nationality", self.nationality.as_deref(), self.operation),
        ]
    }
}
