use super::Resource;
use crate::model::{Publisher, PublisherChange, PublisherFilter, PublisherId};
use async_trait::async_trait;
use catalog_framework::{CatalogEntity, Checks, InputError, Outcome, Validator};

#[derive(Debug, Default, Clone, Copy)]
pub struct PublisherValidator;

impl Validator<PublisherChange> for PublisherValidator {
    fn check(&self, request: &PublisherChange) -> Outcome {
        let mut checks = Checks::new(Publisher::KIND);
        checks.text("NAME", "name", request.name.as_deref());
        checks.finish()
    }
}

#[async_trait]
impl CatalogEntity for Publisher {
    const KIND: &'static str = "PUBLISHER";
    type Id = PublisherId;
    type Create = PublisherChange;
    type Update = PublisherChange;
    type Context = ();

    fn id(&self) -> &PublisherId {
        &self.id
    }

    fn from_create_params(id: PublisherId, params: PublisherChange) -> Result<Self, InputError> {
        PublisherValidator.validate(&params)?;
        Ok(Publisher::new(id, params))
    }

    fn duplicate(&self, id: PublisherId) -> Self {
        Self { id, ..self.clone() }
    }

    async fn on_update(&mut self, update: PublisherChange, _ctx: &()) -> Result<(), InputError> {
        PublisherValidator.validate(&update)?;
        *self = Publisher::new(self.id, update);
        Ok(())
    }
}

impl Resource for Publisher {
    type Filter = PublisherFilter;
    type Validator = PublisherValidator;
}
