use super::{References, Resource, MAX_YEAR};
use crate::model::{Game, GameChange, GameFilter, GameId, Platform};
use async_trait::async_trait;
use catalog_framework::{CatalogEntity, Checks, InputError, Outcome, ResourceClient, Validator};

const FIRST_YEAR: i32 = 1950;

#[derive(Debug, Default, Clone, Copy)]
pub struct GameValidator;

impl Validator<GameChange> for GameValidator {
    fn check(&self, request: &GameChange) -> Outcome {
        let mut checks = Checks::new(Game::KIND);
        checks
            .text("TITLE", "title", request.title.as_deref())
            .range("YEAR", "year", request.year, FIRST_YEAR..=MAX_YEAR);
        checks.list("PLATFORMS", "platforms", request.platforms.as_deref());
        checks.finish()
    }
}

#[async_trait]
impl CatalogEntity for Game {
    const KIND: &'static str = "GAME";
    type Id = GameId;
    type Create = GameChange;
    type Update = GameChange;
    type Context = ResourceClient<Platform>;

    fn id(&self) -> &GameId {
        &self.id
    }

    fn from_create_params(id: GameId, params: GameChange) -> Result<Self, InputError> {
        GameValidator.validate(&params)?;
        Ok(Game::new(id, params))
    }

    fn duplicate(&self, id: GameId) -> Self {
        Self { id, ..self.clone() }
    }

    async fn on_create(&mut self, platforms: &ResourceClient<Platform>) -> Result<(), InputError> {
        let mut references = References::new();
        references.require(platforms, self.platforms.iter().copied()).await?;
        references.finish()
    }

    async fn on_update(
        &mut self,
        update: GameChange,
        platforms: &ResourceClient<Platform>,
    ) -> Result<(), InputError> {
        GameValidator.validate(&update)?;
        let changed = Game::new(self.id, update);

        let mut references = References::new();
        references.require(platforms, changed.platforms.iter().copied()).await?;
        references.finish()?;

        *self = changed;
        Ok(())
    }
}

impl Resource for Game {
    type Filter = GameFilter;
    type Validator = GameValidator;
}
