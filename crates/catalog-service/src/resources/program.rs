use super::Resource;
use crate::model::{Program, ProgramChange, ProgramFilter, ProgramId};
use async_trait::async_trait;
use catalog_framework::{CatalogEntity, Checks, InputError, Outcome, Validator};

#[derive(Debug, Default, Clone, Copy)]
pub struct ProgramValidator;

impl Validator<ProgramChange> for ProgramValidator {
    fn check(&self, request: &ProgramChange) -> Outcome {
        let mut checks = Checks::new(Program::KIND);
        checks
            .text("NAME", "name", request.name.as_deref())
            .text("CHANNEL", "channel", request.channel.as_deref());
        if request.duration.is_some() {
            checks.positive("DURATION", "duration", request.duration);
        }
        checks.finish()
    }
}

#[async_trait]
impl CatalogEntity for Program {
    const KIND: &'static str = "PROGRAM";
    type Id = ProgramId;
    type Create = ProgramChange;
    type Update = ProgramChange;
    type Context = ();

    fn id(&self) -> &ProgramId {
        &self.id
    }

    fn from_create_params(id: ProgramId, params: ProgramChange) -> Result<Self, InputError> {
        ProgramValidator.validate(&params)?;
        Ok(Program::new(id, params))
    }

    fn duplicate(&self, id: ProgramId) -> Self {
        Self { id, ..self.clone() }
    }

    async fn on_update(&mut self, update: ProgramChange, _ctx: &()) -> Result<(), InputError> {
        ProgramValidator.validate(&update)?;
        *self = Program::new(self.id, update);
        Ok(())
    }
}

impl Resource for Program {
    type Filter = ProgramFilter;
    type Validator = ProgramValidator;
}
