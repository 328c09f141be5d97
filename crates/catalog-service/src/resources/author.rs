use super::Resource;
use crate::model::{Author, AuthorChange, AuthorFilter, AuthorId};
use async_trait::async_trait;
use catalog_framework::{CatalogEntity, Checks, InputError, Outcome, Validator};

#[derive(Debug, Default, Clone, Copy)]
pub struct AuthorValidator;

impl Validator<AuthorChange> for AuthorValidator {
    fn check(&self, request: &AuthorChange) -> Outcome {
        let mut checks = Checks::new(Author::KIND);
        checks
            .text("FIRST_NAME", "first name", request.first_name.as_deref())
            .text("LAST_NAME", "last name", request.last_name.as_deref());
        checks.finish()
    }
}

#[async_trait]
impl CatalogEntity for Author {
    const KIND: &'static str = "AUTHOR";
    type Id = AuthorId;
    type Create = AuthorChange;
    type Update = AuthorChange;
    type Context = ();

    fn id(&self) -> &AuthorId {
        &self.id
    }

    fn from_create_params(id: AuthorId, params: AuthorChange) -> Result<Self, InputError> {
        AuthorValidator.validate(&params)?;
        Ok(Author::new(id, params))
    }

    fn duplicate(&self, id: AuthorId) -> Self {
        Self { id, ..self.clone() }
    }

    async fn on_update(&mut self, update: AuthorChange, _ctx: &()) -> Result<(), InputError> {
        AuthorValidator.validate(&update)?;
        *self = Author::new(self.id, update);
        Ok(())
    }
}

impl Resource for Author {
    type Filter = AuthorFilter;
    type Validator = AuthorValidator;
}
