use super::ArtistId;
use catalog_framework::{catalog_id, Criterion, FieldValue, Filter, Operation, Record};
use serde::{Deserialize, Serialize};

catalog_id!(Music, "music");

/// A music album by a single artist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Music {
    pub id: MusicId,
    pub title: String,
    pub artist: ArtistId,
    pub year: Option<i32>,
    pub tracks: Vec<Track>,
}

/// One track of an album. `length` is in seconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub name: Option<String>,
    pub length: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MusicChange {
    pub title: Option<String>,
    pub artist: Option<ArtistId>,
    pub year: Option<i32>,
    pub tracks: Option<Vec<Track>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MusicFilter {
    pub title: Option<String>,
    pub year: Option<String>,
    pub operation: Option<Operation>,
}

impl Music {
    pub fn new(id: MusicId, change: MusicChange) -> Self {
        Self {
            id,
            title: change.title.unwrap_or_default(),
            artist: change.artist.unwrap_or(ArtistId(0)),
            year: change.year,
            tracks: change.tracks.unwrap_or_default(),
        }
    }

    /// Total playing time in seconds.
    pub fn length(&self) -> u32 {
        self.tracks.iter().filter_map(|t| t.length).sum()
    }
}

impl Record for Music {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "title" => Some(self.title.as_str().into()),
            "year" => self.year.map(FieldValue::from),
            "length" => Some(self.length().into()),
            _ => None,
        }
    }
}

impl Filter<Music> for MusicFilter {
    fn criteria(&self) -> Vec<Criterion> {
        vec![
            Criterion::matching("title", self.title.as_deref(), self.operation),
            Criterion::eq("year", self.year.as_deref()),
        ]
    }
}
