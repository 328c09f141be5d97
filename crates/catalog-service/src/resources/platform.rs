use super::Resource;
use crate::model::{Platform, PlatformChange, PlatformFilter, PlatformId};
use async_trait::async_trait;
use catalog_framework::{CatalogEntity, Checks, InputError, Outcome, Validator};

#[derive(Debug, Default, Clone, Copy)]
pub struct PlatformValidator;

impl Validator<PlatformChange> for PlatformValidator {
    fn check(&self, request: &PlatformChange) -> Outcome {
        let mut checks = Checks::new(Platform::KIND);
        checks.text("NAME", "name", request.name.as_deref());
        checks.finish()
    }
}

#[async_trait]
impl CatalogEntity for Platform {
    const KIND: &'static str = "PLATFORM";
    type Id = PlatformId;
    type Create = PlatformChange;
    type Update = PlatformChange;
    type Context = ();

    fn id(&self) -> &PlatformId {
        &self.id
    }

    fn from_create_params(id: PlatformId, params: PlatformChange) -> Result<Self, InputError> {
        PlatformValidator.validate(&params)?;
        Ok(Platform::new(id, params))
    }

    fn duplicate(&self, id: PlatformId) -> Self {
        Self { id, ..self.clone() }
    }

    async fn on_update(&mut self, update: PlatformChange, _ctx: &()) -> Result<(), InputError> {
        PlatformValidator.validate(&update)?;
        *self = Platform::new(self.id, update);
        Ok(())
    }
}

impl Resource for Platform {
    type Filter = PlatformFilter;
    type Validator = PlatformValidator;
}
