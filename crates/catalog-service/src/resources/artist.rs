use super::Resource;
use crate::model::{Artist, ArtistChange, ArtistFilter, ArtistId};
use async_trait::async_trait;
use catalog_framework::{CatalogEntity, Checks, InputError, Outcome, Validator};

#[derive(Debug, Default, Clone, Copy)]
pub struct ArtistValidator;

impl Validator<ArtistChange> for ArtistValidator {
    fn check(&self, request: &ArtistChange) -> Outcome {
        let mut checks = Checks::new(Artist::KIND);
        checks.text("NAME", "name", request.name.as_deref());
        checks.finish()
    }
}

#[async_trait]
impl CatalogEntity for Artist {
    const KIND: &'static str = "ARTIST";
    type Id = ArtistId;
    type Create = ArtistChange;
    type Update = ArtistChange;
    type Context = ();

    fn id(&self) -> &ArtistId {
        &self.id
    }

    fn from_create_params(id: ArtistId, params: ArtistChange) -> Result<Self, InputError> {
        ArtistValidator.validate(&params)?;
        Ok(Artist::new(id, params))
    }

    fn duplicate(&self, id: ArtistId) -> Self {
        Self { id, ..self.clone() }
    }

    async fn on_update(&mut self, update: ArtistChange, _ctx: &()) -> Result<(), InputError> {
        ArtistValidator.validate(&update)?;
        *self = Artist::new(self.id, update);
        Ok(())
    }
}

impl Resource for Artist {
    type Filter = ArtistFilter;
    type Validator = ArtistValidator;
}
