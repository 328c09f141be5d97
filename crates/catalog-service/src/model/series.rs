use catalog_framework::{catalog_id, Criterion, FieldValue, Filter, Operation, Record};
use serde::{Deserialize, Serialize};

catalog_id!(Series, "series");

/// A TV series made of seasons, each made of episodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub id: SeriesId,
    pub title: String,
    pub year: Option<i32>,
    pub seasons: Vec<Season>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Season {
    pub number: Option<u32>,
    pub episodes: Option<Vec<Episode>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesChange {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub seasons: Option<Vec<Season>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeriesFilter {
    pub title: Option<String>,
    pub year: Option<String>,
    pub operation: Option<Operation>,
}

impl Series {
    pub fn new(id: SeriesId, change: SeriesChange) -> Self {
        Self {
            id,
            title: change.title.unwrap_or_default(),
            year: change.year,
            seasons: change.seasons.unwrap_or_default(),
        }
    }

    pub fn episode_count(&self) -> usize {
        self.seasons
            .iter()
            .map(|s| s.episodes.as_ref().map_or(0, Vec::len))
            .sum()
    }
}

impl Record for Series {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "title" => Some(self.title.as_str().into()),
            "year" => self.year.map(FieldValue::from),
            "seasons" => i64::try_from(self.seasons.len()).ok().map(FieldValue::from),
            _ => None,
        }
    }
}

impl Filter<Series> for SeriesFilter {
    fn criteria(&self) -> Vec<Criterion> {
        vec![
            Criterion::matching("title", self.title.as_deref(), self.operation),
            Criterion::eq("year", self.year.as_deref()),
        ]
    }
}
