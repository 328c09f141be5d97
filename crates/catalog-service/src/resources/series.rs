use super::{Resource, MAX_YEAR};
use crate::model::{Season, Series, SeriesChange, SeriesFilter, SeriesId};
use async_trait::async_trait;
use catalog_framework::{CatalogEntity, Checks, InputError, Outcome, Validator};

/// Year of the first television broadcast.
const FIRST_YEAR: i32 = 1928;

#[derive(Debug, Default, Clone, Copy)]
pub struct SeriesValidator;

fn check_season(checks: &mut Checks, position: usize, season: &Season) {
    let label = format!("season {position}");

    checks.positive("SEASON_NUMBER", &format!("{label} number"), season.number);

    // An empty season is allowed; only a missing episode list is reported.
    checks.present("SEASON_EPISODES", &format!("{label} episodes"), season.episodes.as_ref());
    for (index, episode) in season.episodes.iter().flatten().enumerate() {
        checks.text(
            "EPISODE_TITLE",
            &format!("{label} episode {} title", index + 1),
            episode.title.as_deref(),
        );
    }
}

impl Validator<SeriesChange> for SeriesValidator {
    fn check(&self, request: &SeriesChange) -> Outcome {
        let mut checks = Checks::new(Series::KIND);
        checks
            .text("TITLE", "title", request.title.as_deref())
            .range("YEAR", "year", request.year, FIRST_YEAR..=MAX_YEAR);

        if let Some(seasons) = checks.list("SEASONS", "seasons", request.seasons.as_deref()) {
            for (index, season) in seasons.iter().enumerate() {
                check_season(&mut checks, index + 1, season);
            }
        }

        checks.finish()
    }
}

#[async_trait]
impl CatalogEntity for Series {
    const KIND: &'static str = "SERIES";
    type Id = SeriesId;
    type Create = SeriesChange;
    type Update = SeriesChange;
    type Context = ();

    fn id(&self) -> &SeriesId {
        &self.id
    }

    fn from_create_params(id: SeriesId, params: SeriesChange) -> Result<Self, InputError> {
        SeriesValidator.validate(&params)?;
        Ok(Series::new(id, params))
    }

    fn duplicate(&self, id: SeriesId) -> Self {
        Self { id, ..self.clone() }
    }

    async fn on_update(&mut self, update: SeriesChange, _ctx: &()) -> Result<(), InputError> {
        SeriesValidator.validate(&update)?;
        *self = Series::new(self.id, update);
        Ok(())
    }
}

impl Resource for Series {
    type Filter = SeriesFilter;
    type Validator = SeriesValidator;
}
