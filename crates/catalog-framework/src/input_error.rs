//! # Input Errors
//!
//! [`InputError`] is the single error shape for everything a client can fix by
//! resubmitting: failed validations, empty filters at single-match lookups and
//! unknown ids. It carries the full [`Outcome`] so the boundary can list every
//! problem at once, plus an HTTP-like status code.

use crate::outcome::{Event, Outcome};
use std::fmt;

/// Status used when an input error is raised without an explicit one.
pub const DEFAULT_STATUS: u16 = 422;

/// Status used for `<KIND>_NOT_EXIST` errors.
pub const NOT_FOUND_STATUS: u16 = 404;

/// Code raised when a filter without any criteria is compiled.
pub const EMPTY_FILTER: &str = "EMPTY_FILTER";

/// A rejected request: the outcome explaining why, and the status to answer with.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("input rejected with status {status}: {}", Codes(.outcome.events()))]
pub struct InputError {
    outcome: Outcome<()>,
    status: u16,
}

impl InputError {
    /// Wraps `outcome` with the [`DEFAULT_STATUS`].
    pub fn new(outcome: Outcome<()>) -> Self {
        Self::with_status(outcome, DEFAULT_STATUS)
    }

    pub fn with_status(outcome: Outcome<()>, status: u16) -> Self {
        Self { outcome, status }
    }

    /// Shorthand for an error holding a single `Error` event.
    pub fn single(code: impl Into<String>, message: impl Into<String>, status: u16) -> Self {
        Self::with_status(Outcome::error(code, message), status)
    }

    /// `<KIND>_NOT_EXIST` with status 404.
    pub fn not_found(kind: &str, id: impl fmt::Display) -> Self {
        Self::single(
            format!("{kind}_NOT_EXIST"),
            format!("{} {id} does not exist", kind.to_lowercase()),
            NOT_FOUND_STATUS,
        )
    }

    /// The `EMPTY_FILTER` error raised when a filter without criteria is compiled.
    pub fn empty_filter() -> Self {
        Self::single(
            EMPTY_FILTER,
            "at least one filter criterion is required",
            DEFAULT_STATUS,
        )
    }

    pub fn outcome(&self) -> &Outcome<()> {
        &self.outcome
    }

    pub fn events(&self) -> &[Event] {
        self.outcome.events()
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn into_outcome(self) -> Outcome<()> {
        self.outcome
    }
}

impl From<Outcome<()>> for InputError {
    fn from(outcome: Outcome<()>) -> Self {
        Self::new(outcome)
    }
}

struct Codes<'a>(&'a [Event]);

impl fmt::Display for Codes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let codes: Vec<&str> = self.0.iter().map(|e| e.code.as_str()).collect();
        write!(f, "[{}]", codes.join(", "))
    }
}
