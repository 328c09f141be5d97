use super::{Resource, MAX_YEAR};
use crate::model::{Movie, MovieChange, MovieFilter, MovieId};
use async_trait::async_trait;
use catalog_framework::{CatalogEntity, Checks, InputError, Outcome, Validator};

/// Year of the first motion picture.
const FIRST_YEAR: i32 = 1888;

#[derive(Debug, Default, Clone, Copy)]
pub struct MovieValidator;

impl Validator<MovieChange> for MovieValidator {
    fn check(&self, request: &MovieChange) -> Outcome {
        let mut checks = Checks::new(Movie::KIND);
        checks
            .text("TITLE", "title", request.title.as_deref())
            .text("DIRECTOR", "director", request.director.as_deref())
            .range("YEAR", "year", request.year, FIRST_YEAR..=MAX_YEAR);
        if request.duration.is_some() {
            checks.positive("DURATION", "duration", request.duration);
        }
        checks.finish()
    }
}

#[async_trait]
impl CatalogEntity for Movie {
    const KIND: &'static str = "MOVIE";
    type Id = MovieId;
    type Create = MovieChange;
    type Update = MovieChange;
    type Context = ();

    fn id(&self) -> &MovieId {
        &self.id
    }

    fn from_create_params(id: MovieId, params: MovieChange) -> Result<Self, InputError> {
        MovieValidator.validate(&params)?;
        Ok(Movie::new(id, params))
    }

    fn duplicate(&self, id: MovieId) -> Self {
        Self { id, ..self.clone() }
    }

    async fn on_update(&mut self, update: MovieChange, _ctx: &()) -> Result<(), InputError> {
        MovieValidator.validate(&update)?;
        *self = Movie::new(self.id, update);
        Ok(())
    }
}

impl Resource for Movie {
    type Filter = MovieFilter;
    type Validator = MovieValidator;
}
