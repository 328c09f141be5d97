//! # Outcomes, Events and the Severity Lattice
//!
//! Every validator in the catalog reports its findings through an [`Outcome`]: an
//! ordered list of [`Event`]s plus an overall [`Status`] that only ever escalates.
//!
//! ```text
//! Severity:  Info  <  Warn  <  Error
//!              |       |        |
//! Status:     Ok   <  Warn  <  Error
//! ```
//!
//! The status of an outcome is the fold `max(status, severity.status())` over all
//! events added so far. An outcome with no events is `Ok`, and so is an outcome
//! holding only `Info` events. The difference between the two is visible through
//! [`Outcome::events`].
//!
//! ```rust
//! use catalog_framework::outcome::{Event, Outcome, Status};
//!
//! let mut outcome = Outcome::<()>::new();
//! outcome.add_event(Event::warn("MOVIE_TITLE_LONG", "title is unusually long"));
//! outcome.add_event(Event::error("MOVIE_YEAR_NOT_VALID", "year must be after 1888"));
//! outcome.add_event(Event::info("MOVIE_IMPORTED", "imported from legacy catalog"));
//!
//! assert_eq!(outcome.status(), Status::Error);
//! assert_eq!(outcome.events().len(), 3);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a single [`Event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Info,
    Warn,
    Error,
}

impl Severity {
    /// The status an outcome reaches because of this severity alone.
    pub fn status(self) -> Status {
        match self {
            Severity::Info => Status::Ok,
            Severity::Warn => Status::Warn,
            Severity::Error => Status::Error,
        }
    }
}

/// Overall status of an [`Outcome`]. `Ok` is the identity of the fold.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    #[default]
    Ok,
    Warn,
    Error,
}

impl Status {
    /// Escalates `self` by `severity`. Never downgrades.
    pub fn escalate(self, severity: Severity) -> Status {
        self.max(severity.status())
    }
}

/// One recorded remark: a severity, a stable machine-readable code and a human message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Event {
    pub severity: Severity,
    pub code: String,
    pub message: String,
}

impl Event {
    pub fn new(severity: Severity, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn info(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, code, message)
    }

    pub fn warn(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warn, code, message)
    }

    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, code, message)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {}: {}", self.severity, self.code, self.message)
    }
}

/// Accumulator of [`Event`]s with an escalating [`Status`] and an optional payload.
///
/// # Invariants
///
/// - `status()` always equals the fold of every event added so far.
/// - `events()` preserves insertion order exactly; nothing is reordered or de-duplicated.
/// - The payload is set at most once and is independent of the events.
///
/// An outcome never fails by itself. Deciding what an `Error` status means is left to
/// the caller (see [`Validator`](crate::validator::Validator)).
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<T = ()> {
    status: Status,
    payload: Option<T>,
    events: Vec<Event>,
}

impl<T> Default for Outcome<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Outcome<T> {
    /// An empty outcome: status `Ok`, no payload, no events.
    pub fn new() -> Self {
        Self {
            status: Status::Ok,
            payload: None,
            events: Vec::new(),
        }
    }

    /// An `Ok` outcome carrying `data`.
    pub fn of(data: T) -> Self {
        Self {
            status: Status::Ok,
            payload: Some(data),
            events: Vec::new(),
        }
    }

    /// An outcome holding exactly one `Info` event.
    pub fn info(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::single(Event::info(code, message))
    }

    /// An outcome holding exactly one `Warn` event.
    pub fn warn(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::single(Event::warn(code, message))
    }

    /// An outcome holding exactly one `Error` event.
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::single(Event::error(code, message))
    }

    fn single(event: Event) -> Self {
        let mut outcome = Self::new();
        outcome.add_event(event);
        outcome
    }

    /// Appends `event` and escalates the status.
    pub fn add_event(&mut self, event: Event) {
        self.status = self.status.escalate(event.severity);
        self.events.push(event);
    }

    /// Appends every event in order. Equivalent to calling [`add_event`](Self::add_event) in a loop.
    pub fn add_events(&mut self, events: impl IntoIterator<Item = Event>) {
        for event in events {
            self.add_event(event);
        }
    }

    /// Sets the payload if none is present yet.
    ///
    /// Returns `false` and leaves the existing payload untouched when it was already set.
    pub fn set_payload(&mut self, data: T) -> bool {
        if self.payload.is_some() {
            return false;
        }
        self.payload = Some(data);
        true
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn payload(&self) -> Option<&T> {
        self.payload.as_ref()
    }

    pub fn into_payload(self) -> Option<T> {
        self.payload
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }

    /// `true` iff the status is `Ok`. A `Warn` outcome is neither ok nor error.
    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }

    /// `true` iff the status is `Error`.
    pub fn is_error(&self) -> bool {
        self.status == Status::Error
    }

    /// Codes of all events, in order. Handy for logging.
    pub fn codes(&self) -> Vec<&str> {
        self.events.iter().map(|e| e.code.as_str()).collect()
    }

    /// Drops the payload, keeping status and events.
    pub fn discard_payload(self) -> Outcome<()> {
        Outcome {
            status: self.status,
            payload: None,
            events: self.events,
        }
    }
}

impl Outcome<()> {
    /// Merges several outcomes into one.
    ///
    /// Events are concatenated in argument order (each source keeps its own order) and
    /// the status is the maximum across the sources. Payloads are not kept.
    pub fn merge<'a, I, U>(outcomes: I) -> Outcome<()>
    where
        I: IntoIterator<Item = &'a Outcome<U>>,
        U: 'a,
    {
        let mut merged = Outcome::new();
        for outcome in outcomes {
            merged.status = merged.status.max(outcome.status);
            merged.events.extend(outcome.events.iter().cloned());
        }
        merged
    }
}

impl<T> Extend<Event> for Outcome<T> {
    fn extend<I: IntoIterator<Item = Event>>(&mut self, iter: I) {
        self.add_events(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_outcome_is_ok() {
        let outcome = Outcome::<()>::new();
        assert_eq!(outcome.status(), Status::Ok);
        assert!(outcome.is_ok());
        assert!(!outcome.is_error());
        assert!(outcome.events().is_empty());
        assert!(outcome.payload().is_none());
    }

    #[test]
    fn test_status_follows_running_max() {
        let sequence = [
            (Severity::Info, Status::Ok),
            (Severity::Warn, Status::Warn),
            (Severity::Info, Status::Warn),
            (Severity::Error, Status::Error),
            (Severity::Warn, Status::Error),
            (Severity::Info, Status::Error),
        ];

        let mut outcome = Outcome::<()>::new();
        for (i, (severity, expected)) in sequence.iter().enumerate() {
            outcome.add_event(Event::new(*severity, format!("CODE_{i}"), "message"));
            assert_eq!(outcome.status(), *expected, "after event {i}");
        }

        let codes = outcome.codes();
        assert_eq!(codes, vec!["CODE_0", "CODE_1", "CODE_2", "CODE_3", "CODE_4", "CODE_5"]);
    }

    #[test]
    fn test_info_only_is_ok_but_recorded() {
        let outcome = Outcome::<()>::info("NOTE", "just so you know");
        assert!(outcome.is_ok());
        assert_eq!(outcome.events().len(), 1);
    }

    #[test]
    fn test_warn_is_neither_ok_nor_error() {
        let outcome = Outcome::<()>::warn("ODD", "looks odd");
        assert_eq!(outcome.status(), Status::Warn);
        assert!(!outcome.is_ok());
        assert!(!outcome.is_error());
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut outcome = Outcome::<()>::new();
        let event = Event::error("SAME", "same");
        outcome.add_events(vec![event.clone(), event.clone()]);
        assert_eq!(outcome.events(), &[event.clone(), event]);
    }

    #[test]
    fn test_of_carries_payload() {
        let mut outcome = Outcome::of(7);
        assert!(outcome.is_ok());
        assert_eq!(outcome.payload(), Some(&7));

        assert!(!outcome.set_payload(8));
        assert_eq!(outcome.payload(), Some(&7));
    }

    #[test]
    fn test_merge_concatenates_in_argument_order() {
        let mut first = Outcome::of("payload");
        first.add_event(Event::info("A", "a"));
        first.add_event(Event::warn("B", "b"));
        let second = Outcome::<&str>::new();
        let third = Outcome::<&str>::error("C", "c");

        let merged = Outcome::merge([&first, &second, &third]);
        assert_eq!(merged.codes(), vec!["A", "B", "C"]);
        assert_eq!(merged.status(), Status::Error);
        assert!(merged.payload().is_none());
    }

    #[test]
    fn test_merge_of_nothing_is_ok() {
        let merged = Outcome::merge(Vec::<&Outcome<()>>::new());
        assert!(merged.is_ok());
        assert!(merged.events().is_empty());
    }

    #[test]
    fn test_lattice_order() {
        assert!(Severity::Info < Severity::Warn && Severity::Warn < Severity::Error);
        assert!(Status::Ok < Status::Warn && Status::Warn < Status::Error);
        assert_eq!(Status::Error.escalate(Severity::Info), Status::Error);
    }
}
