use catalog_framework::{catalog_id, Criterion, FieldValue, Filter, Operation, Record};
use serde::{Deserialize, Serialize};

catalog_id!(Movie, "movie");

/// A feature film.
///
/// `duration` is the running time in minutes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub year: Option<i32>,
    pub director: String,
    pub duration: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieChange {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub director: Option<String>,
    pub duration: Option<u32>,
}

/// Search fields of a movie. `year` is compared as text, so `"1999"` matches 1999.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MovieFilter {
    pub title: Option<String>,
    pub year: Option<String>,
    pub director: Option<String>,
    pub operation: Option<Operation>,
}

impl Movie {
    pub fn new(id: MovieId, change: MovieChange) -> Self {
        Self {
            id,
            title: change.title.unwrap_or_default(),
            year: change.year,
            director: change.director.unwrap_or_default(),
            duration: change.duration,
        }
    }
}

impl Record for Movie {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "title" => Some(self.title.as_str().into()),
            "year" => self.year.map(FieldValue::from),
            "director" => Some(self.director.as_str().into()),
            "duration" => self.duration.map(FieldValue::from),
            _ => None,
        }
    }
}

impl Filter<Movie> for MovieFilter {
    fn criteria(&self) -> Vec<Criterion> {
        vec![
            Criterion::matching("title", self.title.as_deref(), self.operation),
            Criterion::eq("year", self.year.as_deref()),
            Criterion::matching("director", self.director.as_deref(), self.operation),
        ]
    }
}
