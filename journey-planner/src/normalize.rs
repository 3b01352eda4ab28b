//! Response envelope decoding.
//!
//! A GraphQL response is `{ data?: { <field>?: payload }, errors?: [...] }`,
//! and any level may be missing or null. [`ResponseEnvelope`] turns the raw
//! JSON into explicit options once, then [`one`] and [`many`] apply the two
//! extraction rules:
//!
//! - single-entity lookups fail with [`Error::NotFound`] when the field is
//!   absent;
//! - collection lookups return an empty `Vec` when the field is absent.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{EntityKind, Error};

/// An entry of the response's `errors` array.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GraphQlError {
    pub message: String,
    #[serde(default)]
    pub path: Vec<Value>,
}

/// A decoded response envelope. Construction never fails.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseEnvelope {
    data: Option<Map<String, Value>>,
    errors: Vec<GraphQlError>,
}

impl ResponseEnvelope {
    /// Read an envelope from raw JSON.
    ///
    /// Anything that is not an object, or a `data` member that is not an
    /// object, counts as no data.
    pub fn from_value(value: Value) -> Self {
        let Value::Object(mut root) = value else {
            return Self::default();
        };

        let data = match root.remove("data") {
            Some(Value::Object(data)) => Some(data),
            _ => None,
        };

        let errors = root
            .remove("errors")
            .and_then(|errors| serde_json::from_value(errors).ok())
            .unwrap_or_default();

        Self { data, errors }
    }

    /// GraphQL errors reported alongside (or instead of) the data.
    pub fn errors(&self) -> &[GraphQlError] {
        &self.errors
    }

    /// Remove the value at `path` under `data`.
    ///
    /// Returns `None` if any step is missing, null, or not an object.
    pub fn take(&mut self, path: &[&str]) -> Option<Value> {
        let (last, parents) = path.split_last()?;

        let mut current = self.data.as_mut()?;
        for key in parents {
            current = match current.get_mut(*key)? {
                Value::Object(map) => map,
                _ => return None,
            };
        }

        match current.remove(*last)? {
            Value::Null => None,
            value => Some(value),
        }
    }
}

/// Extract a single entity, failing with [`Error::NotFound`] when absent.
pub fn one<T: DeserializeOwned>(
    mut envelope: ResponseEnvelope,
    path: &[&str],
    kind: EntityKind,
    id: &str,
) -> Result<T, Error> {
    let value = envelope.take(path).ok_or_else(|| Error::NotFound {
        kind,
        id: id.to_string(),
    })?;

    decode(value, kind)
}

/// Extract a list of entities; an absent list is empty, not an error.
pub fn many<T: DeserializeOwned>(
    mut envelope: ResponseEnvelope,
    path: &[&str],
    kind: EntityKind,
) -> Result<Vec<T>, Error> {
    match envelope.take(path) {
        Some(value) => decode(value, kind),
        None => Ok(Vec::new()),
    }
}

fn decode<T: DeserializeOwned>(value: Value, kind: EntityKind) -> Result<T, Error> {
    serde_json::from_value(value).map_err(|e| Error::Decode {
        kind,
        message: e.to_string(),
    })
}
