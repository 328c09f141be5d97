use super::{AuthorId, PublisherId};
use catalog_framework::{catalog_id, Criterion, FieldValue, Filter, Operation, Record};
use serde::{Deserialize, Serialize};

catalog_id!(Book, "book");

/// A book, written by one or more authors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub year: Option<i32>,
    pub isbn: Option<String>,
    pub authors: Vec<AuthorId>,
    pub publisher: Option<PublisherId>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookChange {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub isbn: Option<String>,
    pub authors: Option<Vec<AuthorId>>,
    pub publisher: Option<PublisherId>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BookFilter {
    pub title: Option<String>,
    pub year: Option<String>,
    pub isbn: Option<String>,
    pub operation: Option<Operation>,
}

impl Book {
    pub fn new(id: BookId, change: BookChange) -> Self {
        Self {
            id,
            title: change.title.unwrap_or_default(),
            year: change.year,
            isbn: change.isbn,
            authors: change.authors.unwrap_or_default(),
            publisher: change.publisher,
        }
    }
}

impl Record for Book {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "title" => Some(self.title.as_str().into()),
            "year" => self.year.map(FieldValue::from),
            "isbn" => self.isbn.as_deref().map(FieldValue::from),
            _ => None,
        }
    }
}

impl Filter<Book> for BookFilter {
    fn criteria(&self) -> Vec<Criterion> {
        vec![
            Criterion::matching("title", self.title.as_deref(), self.operation),
            Criterion::eq("year", self.year.as_deref()),
            Criterion::eq("isbn", self.isbn.as_deref()),
        ]
    }
}
