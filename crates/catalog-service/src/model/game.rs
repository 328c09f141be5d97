use super::PlatformId;
use catalog_framework::{catalog_id, Criterion, FieldValue, Filter, Operation, Record};
use serde::{Deserialize, Serialize};

catalog_id!(Game, "game");

/// A video game released on one or more platforms.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Game {
    pub id: GameId,
    pub title: String,
    pub year: Option<i32>,
    pub studio: Option<String>,
    pub platforms: Vec<PlatformId>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameChange {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub studio: Option<String>,
    pub platforms: Option<Vec<PlatformId>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GameFilter {
    pub title: Option<String>,
    pub year: Option<String>,
    pub studio: Option<String>,
    pub operation: Option<Operation>,
}

impl Game {
    pub fn new(id: GameId, change: GameChange) -> Self {
        Self {
            id,
            title: change.title.unwrap_or_default(),
            year: change.year,
            studio: change.studio,
            platforms: change.platforms.unwrap_or_default(),
        }
    }
}

impl Record for Game {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "title" => Some(self.title.as_str().into()),
            "year" => self.year.map(FieldValue::from),
            "studio" => self.studio.as_deref().map(FieldValue::from),
            _ => None,
        }
    }
}

impl Filter<Game> for GameFilter {
    fn criteria(&self) -> Vec<Criterion> {
        vec![
            Criterion::matching("title", self.title.as_deref(), self.operation),
            Criterion::eq("year", self.year.as_deref()),
            Criterion::matching("studio", self.studio.as_deref(), self.operation),
        ]
    }
}
