//! # Record Access
//!
//! The query executor does not know anything about movies or books. It only
//! sees entities through the [`Record`] trait: "give me the value of the field
//! called `title`". Filters compile into predicates over this view and the
//! executor sorts by it.

use std::cmp::Ordering;
use std::fmt;

/// The value of a single named field, as seen by filters and sorting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Number(i64),
}

impl FieldValue {
    /// Wire representation used for equality and substring matching.
    pub fn as_text(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) => n.to_string(),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Number(n) => write!(f, "{n}"),
        }
    }
}

// Numbers sort before text; values of the same kind sort naturally.
impl PartialOrd for FieldValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FieldValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (FieldValue::Number(a), FieldValue::Number(b)) => a.cmp(b),
            (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
            (FieldValue::Number(_), FieldValue::Text(_)) => Ordering::Less,
            (FieldValue::Text(_), FieldValue::Number(_)) => Ordering::Greater,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Number(value.into())
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Number(value.into())
    }
}

/// Named-field view of an entity.
///
/// Returning `None` means the entity has no value for that field (or no such field),
/// which never matches a filter fragment and sorts last.
pub trait Record {
    fn field(&self, name: &str) -> Option<FieldValue>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_text_ordering() {
        let mut values = vec![
            FieldValue::from("b"),
            FieldValue::from(10),
            FieldValue::from("a"),
            FieldValue::from(2),
        ];
        values.sort();
        assert_eq!(
            values,
            vec![
                FieldValue::from(2),
                FieldValue::from(10),
                FieldValue::from("a"),
                FieldValue::from("b"),
            ]
        );
    }

    #[test]
    fn test_as_text() {
        assert_eq!(FieldValue::from(1999).as_text(), "1999");
        assert_eq!(FieldValue::from("Heat").as_text(), "Heat");
    }
}
