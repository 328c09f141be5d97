//! # Validators
//!
//! A [`Validator`] inspects one write request and reports every problem it finds
//! in a single [`Outcome`]. Only at the very end does it decide, once, whether the
//! request is rejected: an outcome with `Error` status becomes an [`InputError`],
//! anything below (`Ok`, `Warn`) lets the request through.
//!
//! Field checks are independent. A missing first name does not stop the last
//! name from being checked, so one response can list both problems. Within one
//! field the checks form a single chain: "null" first, then "empty", never both.
//!
//! [`Checks`] is the small builder validators use to produce consistently named
//! events: `<KIND>_<FIELD>_NULL`, `<KIND>_<FIELD>_EMPTY`, `<KIND>_<FIELD>_NOT_VALID`.
//!
//! ```rust
//! use catalog_framework::validator::{Checks, Validator};
//! use catalog_framework::outcome::Outcome;
//!
//! struct AuthorChange { first_name: Option<String>, last_name: Option<String> }
//! struct AuthorValidator;
//!
//! impl Validator<AuthorChange> for AuthorValidator {
//!     fn check(&self, request: &AuthorChange) -> Outcome {
//!         let mut checks = Checks::new("AUTHOR");
//!         checks.text("FIRST_NAME", "first name", request.first_name.as_deref());
//!         checks.text("LAST_NAME", "last name", request.last_name.as_deref());
//!         checks.finish()
//!     }
//! }
//!
//! let err = AuthorValidator
//!     .validate(&AuthorChange { first_name: None, last_name: Some(String::new()) })
//!     .unwrap_err();
//! let codes: Vec<_> = err.events().iter().map(|e| e.code.as_str()).collect();
//! assert_eq!(codes, ["AUTHOR_FIRST_NAME_NULL", "AUTHOR_LAST_NAME_EMPTY"]);
//! assert_eq!(err.status(), 422);
//! ```

use crate::input_error::{InputError, DEFAULT_STATUS};
use crate::outcome::{Event, Outcome};
use std::fmt::Display;
use std::ops::RangeInclusive;
use tracing::{debug, warn};

/// Validation of one request shape.
pub trait Validator<R: ?Sized>: Send + Sync {
    /// Runs every check and returns the collected outcome. Never fails.
    fn check(&self, request: &R) -> Outcome;

    /// Rejects the request with [`DEFAULT_STATUS`] when the outcome is an error.
    ///
    /// A passing outcome is returned so non-blocking remarks (`Info`, `Warn`) stay
    /// available to the caller.
    fn validate(&self, request: &R) -> Result<Outcome, InputError> {
        self.validate_with_status(request, DEFAULT_STATUS)
    }

    /// Same as [`validate`](Self::validate) with an explicit rejection status.
    fn validate_with_status(&self, request: &R, status: u16) -> Result<Outcome, InputError> {
        let outcome = self.check(request);
        if outcome.is_error() {
            warn!(codes = ?outcome.codes(), status, "Validation failed");
            return Err(InputError::with_status(outcome, status));
        }
        debug!(status = ?outcome.status(), events = outcome.events().len(), "Validation passed");
        Ok(outcome)
    }
}

/// Builder for the events of one validation run, prefixed with a resource kind.
#[derive(Debug)]
pub struct Checks {
    kind: &'static str,
    outcome: Outcome,
}

impl Checks {
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            outcome: Outcome::new(),
        }
    }

    fn code(&self, field: &str, suffix: &str) -> String {
        format!("{}_{}_{}", self.kind, field, suffix)
    }

    fn fail(&mut self, field: &str, suffix: &str, message: String) {
        let code = self.code(field, suffix);
        self.outcome.add_event(Event::error(code, message));
    }

    /// `_NULL` when absent, otherwise `_EMPTY` when blank.
    pub fn text(&mut self, field: &str, label: &str, value: Option<&str>) -> &mut Self {
        match value {
            None => self.fail(field, "NULL", format!("{label} must not be null")),
            Some(v) if v.trim().is_empty() => {
                self.fail(field, "EMPTY", format!("{label} must not be empty"))
            }
            Some(_) => {}
        }
        self
    }

    /// `_NULL` when absent.
    pub fn present<T>(&mut self, field: &str, label: &str, value: Option<&T>) -> &mut Self {
        if value.is_none() {
            self.fail(field, "NULL", format!("{label} must not be null"));
        }
        self
    }

    /// `_NOT_VALID` when present and outside `range`. An absent value is accepted.
    pub fn range<T>(&mut self, field: &str, label: &str, value: Option<T>, range: RangeInclusive<T>) -> &mut Self
    where
        T: PartialOrd + Display,
    {
        if let Some(v) = value {
            if !range.contains(&v) {
                self.fail(
                    field,
                    "NOT_VALID",
                    format!(
                        "{label} must be between {} and {}, got {v}",
                        range.start(),
                        range.end()
                    ),
                );
            }
        }
        self
    }

    /// `_NULL` when absent, otherwise `_NOT_VALID` when outside `range`.
    pub fn required_range<T>(
        &mut self,
        field: &str,
        label: &str,
        value: Option<T>,
        range: RangeInclusive<T>,
    ) -> &mut Self
    where
        T: PartialOrd + Display,
    {
        if value.is_none() {
            self.fail(field, "NULL", format!("{label} must not be null"));
            return self;
        }
        self.range(field, label, value, range)
    }

    /// `_NULL` when absent, otherwise `_NOT_VALID` when zero.
    pub fn positive(&mut self, field: &str, label: &str, value: Option<u32>) -> &mut Self {
        match value {
            None => self.fail(field, "NULL", format!("{label} must not be null")),
            Some(0) => self.fail(field, "NOT_VALID", format!("{label} must be greater than 0")),
            Some(_) => {}
        }
        self
    }

    /// `_NOT_VALID` with `reason` unless `valid`.
    pub fn rule(&mut self, valid: bool, field: &str, label: &str, reason: &str) -> &mut Self {
        if !valid {
            self.fail(field, "NOT_VALID", format!("{label} {reason}"));
        }
        self
    }

    /// `_NULL` when the collection is absent, `_EMPTY` when it has no elements.
    ///
    /// Returns the elements only when they should be checked one by one, so a missing
    /// collection is reported once and never inspected further.
    pub fn list<'a, T>(&mut self, field: &str, label: &str, value: Option<&'a [T]>) -> Option<&'a [T]> {
        match value {
            None => {
                self.fail(field, "NULL", format!("{label} must not be null"));
                None
            }
            Some([]) => {
                self.fail(field, "EMPTY", format!("{label} must not be empty"));
                None
            }
            Some(items) => Some(items),
        }
    }

    /// Appends an already built event, e.g. a non-blocking `Warn` remark.
    pub fn remark(&mut self, event: Event) -> &mut Self {
        self.outcome.add_event(event);
        self
    }

    pub fn finish(self) -> Outcome {
        self.outcome
    }
}

/// Runs several validators over the same request and merges their outcomes in order.
pub struct AllOf<R: ?Sized> {
    validators: Vec<Box<dyn Validator<R>>>,
}

impl<R: ?Sized> AllOf<R> {
    pub fn new() -> Self {
        Self {
            validators: Vec::new(),
        }
    }

    pub fn with(mut self, validator: impl Validator<R> + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }
}

impl<R: ?Sized> Default for AllOf<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ?Sized> Validator<R> for AllOf<R> {
    fn check(&self, request: &R) -> Outcome {
        let outcomes: Vec<Outcome> = self.validators.iter().map(|v| v.check(request)).collect();
        Outcome::merge(&outcomes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::Status;

    #[test]
    fn test_null_and_empty_are_exclusive() {
        let mut checks = Checks::new("GENRE");
        checks.text("NAME", "name", None);
        checks.text("NAME", "name", Some("  "));
        checks.text("NAME", "name", Some("Jazz"));
        let outcome = checks.finish();
        assert_eq!(outcome.codes(), vec!["GENRE_NAME_NULL", "GENRE_NAME_EMPTY"]);
    }

    #[test]
    fn test_missing_list_is_reported_once() {
        let mut checks = Checks::new("MUSIC");
        let tracks: Option<&[String]> = None;
        assert!(checks.list("TRACKS", "tracks", tracks).is_none());
        let outcome = checks.finish();
        assert_eq!(outcome.codes(), vec!["MUSIC_TRACKS_NULL"]);
    }

    #[test]
    fn test_empty_list() {
        let mut checks = Checks::new("MUSIC");
        let tracks: Vec<String> = vec![];
        assert!(checks.list("TRACKS", "tracks", Some(tracks.as_slice())).is_none());
        assert_eq!(checks.finish().codes(), vec!["MUSIC_TRACKS_EMPTY"]);
    }

    #[test]
    fn test_range_messages() {
        let mut checks = Checks::new("MOVIE");
        checks.range("YEAR", "year", Some(1700), 1888..=2100);
        checks.range("YEAR", "year", None::<i32>, 1888..=2100);
        checks.required_range("DURATION", "duration", None::<u32>, 1..=1000);
        let outcome = checks.finish();
        assert_eq!(outcome.codes(), vec!["MOVIE_YEAR_NOT_VALID", "MOVIE_DURATION_NULL"]);
        assert_eq!(
            outcome.events()[0].message,
            "year must be between 1888 and 2100, got 1700"
        );
    }

    #[test]
    fn test_positive_is_null_then_not_valid() {
        let mut checks = Checks::new("SERIES");
        checks.positive("SEASON_NUMBER", "season 1 number", None);
        checks.positive("SEASON_NUMBER", "season 2 number", Some(0));
        checks.positive("SEASON_NUMBER", "season 3 number", Some(3));
        let outcome = checks.finish();
        assert_eq!(
            outcome.codes(),
            vec!["SERIES_SEASON_NUMBER_NULL", "SERIES_SEASON_NUMBER_NOT_VALID"]
        );
        assert_eq!(outcome.events()[1].message, "season 2 number must be greater than 0");
    }

    struct Always(Event);

    impl Validator<str> for Always {
        fn check(&self, _request: &str) -> Outcome {
            let mut outcome = Outcome::new();
            outcome.add_event(self.0.clone());
            outcome
        }
    }

    #[test]
    fn test_warn_passes_validation() {
        let outcome = Always(Event::warn("W", "w")).validate("x").unwrap();
        assert_eq!(outcome.status(), Status::Warn);
    }

    #[test]
    fn test_error_uses_given_status() {
        let err = Always(Event::error("E", "e"))
            .validate_with_status("x", 400)
            .unwrap_err();
        assert_eq!(err.status(), 400);
    }

    #[test]
    fn test_all_of_merges_in_order() {
        let all = AllOf::new()
            .with(Always(Event::warn("FIRST", "first")))
            .with(Always(Event::error("SECOND", "second")));
        let err = all.validate("x").unwrap_err();
        assert_eq!(err.outcome().codes(), vec!["FIRST", "SECOND"]);
    }
}
