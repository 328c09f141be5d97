use super::{References, Resource, MAX_YEAR};
use crate::model::{Artist, Music, MusicChange, MusicFilter, MusicId};
use async_trait::async_trait;
use catalog_framework::{CatalogEntity, Checks, InputError, Outcome, ResourceClient, Validator};

/// Year of the first sound recording.
const FIRST_YEAR: i32 = 1860;

#[derive(Debug, Default, Clone, Copy)]
pub struct MusicValidator;

impl Validator<MusicChange> for MusicValidator {
    fn check(&self, request: &MusicChange) -> Outcome {
        let mut checks = Checks::new(Music::KIND);
        checks
            .text("TITLE", "title", request.title.as_deref())
            .present("ARTIST", "artist", request.artist.as_ref())
            .range("YEAR", "year", request.year, FIRST_YEAR..=MAX_YEAR);

        if let Some(tracks) = checks.list("TRACKS", "tracks", request.tracks.as_deref()) {
            for (position, track) in tracks.iter().enumerate() {
                let label = format!("track {}", position + 1);
                checks.text("TRACK_NAME", &format!("{label} name"), track.name.as_deref());
                checks.positive("TRACK_LENGTH", &format!("{label} length"), track.length);
            }
        }

        checks.finish()
    }
}

#[async_trait]
impl CatalogEntity for Music {
    const KIND: &'static str = "MUSIC";
    type Id = MusicId;
    type Create = MusicChange;
    type Update = MusicChange;
    type Context = ResourceClient<Artist>;

    fn id(&self) -> &MusicId {
        &self.id
    }

    fn from_create_params(id: MusicId, params: MusicChange) -> Result<Self, InputError> {
        MusicValidator.validate(&params)?;
        Ok(Music::new(id, params))
    }

    fn duplicate(&self, id: MusicId) -> Self {
        Self { id, ..self.clone() }
    }

    async fn on_create(&mut self, artists: &ResourceClient<Artist>) -> Result<(), InputError> {
        let mut references = References::new();
        references.require(artists, [self.artist]).await?;
        references.finish()
    }

    async fn on_update(
        &mut self,
        update: MusicChange,
        artists: &ResourceClient<Artist>,
    ) -> Result<(), InputError> {
        MusicValidator.validate(&update)?;
        let changed = Music::new(self.id, update);

        let mut references = References::new();
        references.require(artists, [changed.artist]).await?;
        references.finish()?;

        *self = changed;
        Ok(())
    }
}

impl Resource for Music {
    type Filter = MusicFilter;
    type Validator = MusicValidator;
}
