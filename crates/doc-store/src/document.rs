use std::cmp::Ordering;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::{Result, StoreError};

/// A stored record: a flat map of field names to JSON values.
pub type Record = serde_json::Map<String, Value>;

/// A record together with its store-assigned id.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// The id assigned by the store on creation.
    pub id: String,

    /// The record fields. The id is not repeated inside the record.
    pub data: Record,
}

impl Document {
    /// Creates a document from an id and a record.
    pub fn new(id: impl Into<String>, data: Record) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }
}

/// Sort direction for a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// Ordering applied to a collection listing.
#[derive(Debug, Clone)]
pub struct OrderBy {
    /// The record field to sort on.
    pub field: String,

    /// The sort direction.
    pub direction: Direction,
}

impl OrderBy {
    /// Sorts ascending on `field`.
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Ascending,
        }
    }

    /// Sorts descending on `field`.
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Descending,
        }
    }
}

/// Core trait for schemaless document persistence.
///
/// Documents are addressed by collection name plus string id. All
/// implementations must be thread-safe (Send + Sync). Each operation maps
/// to a single call against the backing store; retries, if any, belong to
/// the implementation, not to callers.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Lists every document in a collection, sorted by `order_by`.
    async fn list(&self, collection: &str, order_by: OrderBy) -> Result<Vec<Document>>;

    /// Retrieves a single document, or `None` if it does not exist.
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>>;

    /// Stores a new record and returns the assigned id.
    async fn create(&self, collection: &str, record: Record) -> Result<String>;

    /// Merges `partial` into an existing record, field by field.
    ///
    /// Fails with [`StoreError::NotFound`] if the document does not exist.
    async fn update(&self, collection: &str, id: &str, partial: Record) -> Result<()>;

    /// Deletes a document. Deleting an absent document is not an error.
    async fn delete(&self, collection: &str, id: &str) -> Result<()>;
}

/// Serializes a value into a [`Record`].
///
/// Fails if the value does not serialize to a JSON object.
pub fn record_from<T: Serialize>(value: &T) -> Result<Record> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(StoreError::Serialization(serde_json::Error::io(
            std::io::Error::other(format!("expected a JSON object, got {other}")),
        ))),
    }
}

/// Total order over JSON values used for listing sorts.
///
/// Null < booleans < numbers < strings < everything else; numbers compare
/// numerically, strings lexicographically. Documents missing the sort field
/// sort as Null.
pub(crate) fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    fn rank(v: Option<&Value>) -> u8 {
        match v {
            None | Some(Value::Null) => 0,
            Some(Value::Bool(_)) => 1,
            Some(Value::Number(_)) => 2,
            Some(Value::String(_)) => 3,
            Some(_) => 4,
        }
    }

    match (a, b) {
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let (x, y) = (x.as_f64().unwrap_or(0.0), y.as_f64().unwrap_or(0.0));
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        _ => rank(a).cmp(&rank(b)),
    }
}

/// Sorts documents in place according to `order_by`, with the id as a
/// tiebreaker so listings are stable.
pub(crate) fn sort_documents(documents: &mut [Document], order_by: &OrderBy) {
    documents.sort_by(|a, b| {
        let ordering = compare_values(a.data.get(&order_by.field), b.data.get(&order_by.field))
            .then_with(|| a.id.cmp(&b.id));
        match order_by.direction {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_from_rejects_non_objects() {
        let result = record_from(&42);
        assert!(matches!(result, Err(StoreError::Serialization(_))));
    }

    #[test]
    fn record_from_flattens_struct() {
        #[derive(Serialize)]
        struct Sample {
            name: String,
            count: u32,
        }

        let record = record_from(&Sample {
            name: "widget".to_string(),
            count: 3,
        })
        .unwrap();

        assert_eq!(record.get("name"), Some(&json!("widget")));
        assert_eq!(record.get("count"), Some(&json!(3)));
    }

    #[test]
    fn compare_values_orders_numbers_and_strings() {
        assert_eq!(
            compare_values(Some(&json!(1)), Some(&json!(2))),
            Ordering::Less
        );
        assert_eq!(
            compare_values(Some(&json!("b")), Some(&json!("a"))),
            Ordering::Greater
        );
        assert_eq!(compare_values(None, Some(&json!(0))), Ordering::Less);
    }

    #[test]
    fn sort_documents_respects_direction() {
        let mut docs = vec![
            Document::new("x", record_from(&json!({"n": 2})).unwrap()),
            Document::new("y", record_from(&json!({"n": 1})).unwrap()),
        ];

        sort_documents(&mut docs, &OrderBy::asc("n"));
        assert_eq!(docs[0].id, "y");

        sort_documents(&mut docs, &OrderBy::desc("n"));
        assert_eq!(docs[0].id, "x");
    }
}
