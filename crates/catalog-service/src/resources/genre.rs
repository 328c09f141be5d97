use super::Resource;
use crate::model::{Genre, GenreChange, GenreFilter, GenreId};
use async_trait::async_trait;
use catalog_framework::{CatalogEntity, Checks, InputError, Outcome, Validator};

#[derive(Debug, Default, Clone, Copy)]
pub struct GenreValidator;

impl Validator<GenreChange> for GenreValidator {
    fn check(&self, request: &GenreChange) -> Outcome {
        let mut checks = Checks::new(Genre::KIND);
        checks.text("NAME", "name", request.name.as_deref());
        checks.finish()
    }
}

#[async_trait]
impl CatalogEntity for Genre {
    const KIND: &'static str = "GENRE";
    type Id = GenreId;
    type Create = GenreChange;
    type Update = GenreChange;
    type Context = ();

    fn id(&self) -> &GenreId {
        &self.id
    }

    fn from_create_params(id: GenreId, params: GenreChange) -> Result<Self, InputError> {
        GenreValidator.validate(&params)?;
        Ok(Genre::new(id, params))
    }

    fn duplicate(&self, id: GenreId) -> Self {
        Self { id, ..self.clone() }
    }

    async fn on_update(&mut self, update: GenreChange, _ctx: &()) -> Result<(), InputError> {
        GenreValidator.validate(&update)?;
        *self = Genre::new(self.id, update);
        Ok(())
    }
}

impl Resource for Genre {
    type Filter = GenreFilter;
    type Validator = GenreValidator;
}
