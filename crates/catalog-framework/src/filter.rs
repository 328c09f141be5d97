//! # Filters and Specifications
//!
//! A search request arrives as a resource-specific filter: a record of optional
//! string fields (`title`, `year`, ...). The filter either is *empty*, in which
//! case the search runs unfiltered, or compiles into a [`Specification`]: the
//! conjunction of one fragment per non-blank field.
//!
//! Resource filters only declare their fields, in a fixed order, through
//! [`Filter::criteria`]. Everything else (emptiness, compilation, the
//! `EMPTY_FILTER` rejection) is provided here once.
//!
//! ## Fragment rule
//!
//! | value        | operation       | fragment                                   |
//! |--------------|-----------------|--------------------------------------------|
//! | `None`/blank | any             | none, the field is left out of the AND     |
//! | present      | `None` / `Eq`   | stored value equals the value              |
//! | present      | `Like`          | lower-cased stored value contains the lower-cased value |
//!
//! Values are trimmed. Multi-word values are not tokenized; `Like` matches the
//! whole string.

use crate::input_error::InputError;
use crate::record::Record;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Match operator of a single criterion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operation {
    #[default]
    Eq,
    Like,
}

/// One declared filter field: its name, its (optional) value and its (optional) operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criterion {
    pub field: &'static str,
    pub value: Option<String>,
    pub operation: Option<Operation>,
}

impl Criterion {
    /// An exact-match criterion.
    pub fn eq(field: &'static str, value: Option<&str>) -> Self {
        Self {
            field,
            value: value.map(str::to_string),
            operation: Some(Operation::Eq),
        }
    }

    /// A criterion matched with `operation` (exact when `None`).
    pub fn matching(field: &'static str, value: Option<&str>, operation: Option<Operation>) -> Self {
        Self {
            field,
            value: value.map(str::to_string),
            operation,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.value.as_deref().map_or(true, |v| v.trim().is_empty())
    }

    /// The predicate fragment for this criterion, or `None` when the value is blank.
    ///
    /// Surrounding whitespace is not part of the value.
    pub fn fragment<E: Record>(&self) -> Option<Specification<E>> {
        if self.is_blank() {
            return None;
        }
        let value = self.value.as_deref()?.trim().to_string();
        let field = self.field;

        match self.operation.unwrap_or_default() {
            Operation::Eq => Some(Specification::new(format!("{field} = {value:?}"), move |e: &E| {
                e.field(field).is_some_and(|stored| stored.as_text() == value)
            })),
            Operation::Like => {
                let needle = value.to_lowercase();
                Some(Specification::new(
                    format!("lower({field}) LIKE \"%{needle}%\""),
                    move |e: &E| {
                        e.field(field)
                            .is_some_and(|stored| stored.as_text().to_lowercase().contains(&needle))
                    },
                ))
            }
        }
    }
}

type Predicate<E> = Arc<dyn Fn(&E) -> bool + Send + Sync>;

/// A compiled, composable predicate over entities of type `E`.
///
/// Specifications are cheap to clone and can cross task boundaries, so they can be
/// shipped to the actor that owns the store.
pub struct Specification<E> {
    terms: Vec<String>,
    predicate: Predicate<E>,
}

impl<E> Specification<E> {
    pub fn new(term: impl Into<String>, predicate: impl Fn(&E) -> bool + Send + Sync + 'static) -> Self {
        Self {
            terms: vec![term.into()],
            predicate: Arc::new(predicate),
        }
    }

    /// Logical AND of `self` and `other`. `self` is evaluated first.
    pub fn and(self, other: Specification<E>) -> Specification<E>
    where
        E: 'static,
    {
        let (left, right) = (self.predicate, other.predicate);
        let mut terms = self.terms;
        terms.extend(other.terms);
        Self {
            terms,
            predicate: Arc::new(move |e: &E| left(e) && right(e)),
        }
    }

    /// AND of every specification in order; `None` when there are none.
    pub fn all(specs: impl IntoIterator<Item = Specification<E>>) -> Option<Specification<E>>
    where
        E: 'static,
    {
        specs.into_iter().reduce(Specification::and)
    }

    pub fn matches(&self, entity: &E) -> bool {
        (self.predicate)(entity)
    }

    /// Human-readable terms in composition order, e.g. `["year = \"1999\""]`.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}

impl<E> Clone for Specification<E> {
    fn clone(&self) -> Self {
        Self {
            terms: self.terms.clone(),
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<E> fmt::Debug for Specification<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Specification({})", self.terms.join(" AND "))
    }
}

/// A resource-specific search filter compiling to a [`Specification`] over `E`.
///
/// Implementors only list their fields. The order of [`criteria`](Filter::criteria)
/// is the order in which fragments are composed.
///
/// # Example
///
/// ```rust
/// use catalog_framework::filter::{Criterion, Filter, Operation};
/// use catalog_framework::record::{FieldValue, Record};
///
/// struct Film { title: String }
/// impl Record for Film {
///     fn field(&self, name: &str) -> Option<FieldValue> {
///         (name == "title").then(|| FieldValue::from(self.title.as_str()))
///     }
/// }
///
/// #[derive(Debug, Default)]
/// struct FilmFilter { title: Option<String>, operation: Option<Operation> }
/// impl Filter<Film> for FilmFilter {
///     fn criteria(&self) -> Vec<Criterion> {
///         vec![Criterion::matching("title", self.title.as_deref(), self.operation)]
///     }
/// }
///
/// let filter = FilmFilter { title: Some("HEAT".into()), operation: Some(Operation::Like) };
/// let spec = filter.to_specification().unwrap();
/// assert!(spec.matches(&Film { title: "The heat is on".into() }));
/// assert!(FilmFilter::default().is_empty());
/// ```
pub trait Filter<E: Record + 'static>: fmt::Debug + Send + Sync {
    /// Every declared field, in declaration order.
    fn criteria(&self) -> Vec<Criterion>;

    /// `true` iff every declared field is `None` or blank.
    fn is_empty(&self) -> bool {
        self.criteria().iter().all(Criterion::is_blank)
    }

    /// Rejects an empty filter with `EMPTY_FILTER` / 422.
    fn assert_not_empty(&self) -> Result<(), InputError> {
        if self.is_empty() {
            Err(InputError::empty_filter())
        } else {
            Ok(())
        }
    }

    /// Compiles the filter into the AND of its non-blank fields.
    ///
    /// Compiling an empty filter is rejected rather than silently matching everything.
    fn to_specification(&self) -> Result<Specification<E>, InputError> {
        self.assert_not_empty()?;
        let fragments = self.criteria().iter().filter_map(Criterion::fragment::<E>).collect::<Vec<_>>();
        Specification::all(fragments).ok_or_else(InputError::empty_filter)
    }

    /// `None` for an empty filter (run unfiltered), the compiled specification otherwise.
    fn to_optional_specification(&self) -> Result<Option<Specification<E>>, InputError> {
        if self.is_empty() {
            Ok(None)
        } else {
            self.to_specification().map(Some)
        }
    }
}
