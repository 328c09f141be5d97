use async_trait::async_trait;
use catalog_framework::{
    catalog_id, CatalogEntity, Checks, Criterion, FieldValue, Filter, FrameworkError, InputError,
    Operation, PagingFilter, Record, ResourceActor, ResourceClient, Sort, Validator,
};

// --- Test Entities ---

catalog_id!(Label, "label");
catalog_id!(Vinyl, "vinyl");

#[derive(Clone, Debug, PartialEq)]
struct Label {
    id: LabelId,
    name: String,
}

#[derive(Debug)]
struct LabelChange {
    name: String,
}

impl Record for Label {
    fn field(&self, name: &str) -> Option<FieldValue> {
        (name == "name").then(|| FieldValue::from(self.name.as_str()))
    }
}

#[async_trait]
impl CatalogEntity for Label {
    const KIND: &'static str = "LABEL";
    type Id = LabelId;
    type Create = LabelChange;
    type Update = LabelChange;
    type Context = ();

    fn id(&self) -> &LabelId {
        &self.id
    }

    fn from_create_params(id: LabelId, params: LabelChange) -> Result<Self, InputError> {
        Ok(Self {
            id,
            name: params.name,
        })
    }

    fn duplicate(&self, id: LabelId) -> Self {
        Self { id, ..self.clone() }
    }

    async fn on_update(&mut self, update: LabelChange, _ctx: &()) -> Result<(), InputError> {
        self.name = update.name;
        Ok(())
    }
}

/// A vinyl pressing that must reference an existing label.
#[derive(Clone, Debug, PartialEq)]
struct Vinyl {
    id: VinylId,
    title: String,
    year: u32,
    label: LabelId,
}

#[derive(Debug, Clone)]
struct VinylChange {
    title: Option<String>,
    year: Option<u32>,
    label: LabelId,
}

impl Record for Vinyl {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "title" => Some(FieldValue::from(self.title.as_str())),
            "year" => Some(FieldValue::from(self.year)),
            _ => None,
        }
    }
}

struct VinylValidator;

impl Validator<VinylChange> for VinylValidator {
    fn check(&self, request: &VinylChange) -> catalog_framework::Outcome {
        let mut checks = Checks::new("VINYL");
        checks
            .text("TITLE", "title", request.title.as_deref())
            .required_range("YEAR", "year", request.year, 1948..=2100);
        checks.finish()
    }
}

async fn label_exists(labels: &ResourceClient<Label>, id: LabelId) -> Result<(), InputError> {
    match labels.get(id).await {
        Ok(Some(_)) => Ok(()),
        _ => Err(InputError::not_found(Label::KIND, id)),
    }
}

#[async_trait]
impl CatalogEntity for Vinyl {
    const KIND: &'static str = "VINYL";
    type Id = VinylId;
    type Create = VinylChange;
    type Update = VinylChange;
    type Context = ResourceClient<Label>;

    fn id(&self) -> &VinylId {
        &self.id
    }

    fn from_create_params(id: VinylId, params: VinylChange) -> Result<Self, InputError> {
        VinylValidator.validate(&params)?;
        Ok(Self {
            id,
            title: params.title.unwrap_or_default(),
            year: params.year.unwrap_or_default(),
            label: params.label,
        })
    }

    fn duplicate(&self, id: VinylId) -> Self {
        Self { id, ..self.clone() }
    }

    async fn on_create(&mut self, labels: &ResourceClient<Label>) -> Result<(), InputError> {
        label_exists(labels, self.label).await
    }

    async fn on_update(
        &mut self,
        update: VinylChange,
        labels: &ResourceClient<Label>,
    ) -> Result<(), InputError> {
        VinylValidator.validate(&update)?;
        label_exists(labels, update.label).await?;
        self.title = update.title.unwrap_or_default();
        self.year = update.year.unwrap_or_default();
        self.label = update.label;
        Ok(())
    }
}

#[derive(Debug, Default)]
struct VinylFilter {
    title: Option<String>,
    year: Option<String>,
    operation: Option<Operation>,
}

impl Filter<Vinyl> for VinylFilter {
    fn criteria(&self) -> Vec<Criterion> {
        vec![
            Criterion::matching("title", self.title.as_deref(), self.operation),
            Criterion::eq("year", self.year.as_deref()),
        ]
    }
}

fn vinyl(title: &str, year: u32, label: LabelId) -> VinylChange {
    VinylChange {
        title: Some(title.to_string()),
        year: Some(year),
        label,
    }
}

async fn start() -> (ResourceClient<Label>, ResourceClient<Vinyl>) {
    let (label_actor, labels) = ResourceActor::<Label>::new(10);
    let (vinyl_actor, vinyls) = ResourceActor::<Vinyl>::new(10);
    tokio::spawn(label_actor.run(()));
    tokio::spawn(vinyl_actor.run(labels.clone()));
    (labels, vinyls)
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (labels, vinyls) = start().await;

    // 1. Create
    let label = labels
        .create(LabelChange {
            name: "Blue Note".into(),
        })
        .await
        .unwrap();
    assert_eq!(label, LabelId(1));
    assert_eq!(label.to_string(), "label_1");

    let id = vinyls.create(vinyl("Blue Train", 1957, label)).await.unwrap();
    assert_eq!(id.to_string(), "vinyl_1");

    // 2. Update
    let updated = vinyls
        .update(id, vinyl("Blue Train (Mono)", 1957, label))
        .await
        .unwrap();
    assert_eq!(updated.title, "Blue Train (Mono)");

    // 3. Duplicate
    let copy = vinyls.duplicate(id).await.unwrap();
    assert_eq!(copy, VinylId(2));
    let stored = vinyls.get(copy).await.unwrap().unwrap();
    assert_eq!(stored.title, "Blue Train (Mono)");

    // 4. Delete
    vinyls.delete(id).await.unwrap();
    assert!(vinyls.get(id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_create_collects_every_validation_problem() {
    let (labels, vinyls) = start().await;
    let label = labels
        .create(LabelChange {
            name: "Impulse!".into(),
        })
        .await
        .unwrap();

    let err = vinyls
        .create(VinylChange {
            title: Some("  ".into()),
            year: Some(1900),
            label,
        })
        .await
        .unwrap_err();

    let rejection = match err {
        FrameworkError::Rejected(rejection) => rejection,
        other => panic!("expected a rejection, got {other:?}"),
    };
    assert_eq!(rejection.status(), 422);
    assert_eq!(
        rejection.outcome().codes(),
        vec!["VINYL_TITLE_EMPTY", "VINYL_YEAR_NOT_VALID"]
    );
}

#[tokio::test]
async fn test_hook_checks_dependency_through_context() {
    let (_labels, vinyls) = start().await;

    let err = vinyls
        .create(vinyl("A Love Supreme", 1965, LabelId(42)))
        .await
        .unwrap_err();

    let rejection = match err {
        FrameworkError::Rejected(rejection) => rejection,
        other => panic!("expected a rejection, got {other:?}"),
    };
    assert_eq!(rejection.status(), 404);
    assert_eq!(rejection.outcome().codes(), vec!["LABEL_NOT_EXIST"]);

    let page = vinyls
        .search(None, PagingFilter::default().to_pageable(None))
        .await
        .unwrap();
    assert_eq!(page.total, 0);
}

#[tokio::test]
async fn test_search_with_filter_paging_and_sort() {
    let (labels, vinyls) = start().await;
    let label = labels
        .create(LabelChange {
            name: "Verve".into(),
        })
        .await
        .unwrap();

    for (title, year) in [
        ("Getz/Gilberto", 1964),
        ("Ella and Louis", 1956),
        ("Getz Meets Mulligan", 1957),
        ("Verve Jazz Masters", 1994),
    ] {
        vinyls.create(vinyl(title, year, label)).await.unwrap();
    }

    let spec = VinylFilter {
        title: Some("getz".into()),
        operation: Some(Operation::Like),
        ..Default::default()
    }
    .to_specification()
    .unwrap();

    let page = vinyls
        .search(
            Some(spec),
            PagingFilter::new(Some(1), Some(1)).to_pageable(Some(Sort::asc("year"))),
        )
        .await
        .unwrap();
    assert_eq!(page.total, 2);
    assert_eq!(page.total_pages(), 2);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].title, "Getz Meets Mulligan");

    let exact_year = VinylFilter {
        year: Some("1956".into()),
        ..Default::default()
    }
    .to_specification()
    .unwrap();
    let page = vinyls
        .search(Some(exact_year), PagingFilter::default().to_pageable(None))
        .await
        .unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].title, "Ella and Louis");
}

#[tokio::test]
async fn test_closed_actor_is_reported() {
    let (actor, client) = ResourceActor::<Label>::new(1);
    drop(actor);

    let err = client
        .create(LabelChange {
            name: "Prestige".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(err, FrameworkError::ActorClosed);
}
