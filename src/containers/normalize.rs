//! Resolution of the two `SET_META`/`SET_UI` call forms to one canonical mapping.
//!
//! Typed callers pick the form statically through [`ContainerUpdate`]. Untyped
//! callers (JSON argument lists from a bridge) go through
//! [`ContainerUpdate::from_args`], which applies the dynamic rule: a string
//! first argument means shorthand, anything else must already be a mapping.
//! A mapping keyed by a string id is therefore always passed as an object;
//! a bare string first argument is never read as a mapping.

use serde_json::Value;
use thiserror::Error;

use super::types::{ContainerId, ContainerMapping};

/// Key used when a shorthand call omits the field key.
pub const MISSING_KEY: &str = "undefined";

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("No arguments given; expected a container mapping or <id> <key> <value>")]
    EmptyArguments,

    #[error("Expected a container id or a container mapping, found {found}")]
    NotAMapping { found: &'static str },

    #[error("Fields of container '{container_id}' must be an object, found {found}")]
    NotAFieldMap {
        container_id: String,
        found: &'static str,
    },
}

/// Either call form of a normalizing creator.
#[derive(Debug, Clone, PartialEq)]
pub enum ContainerUpdate {
    /// Already canonical; passed through unchanged.
    Mapping(ContainerMapping),

    /// Shorthand for a single field of a single container.
    Field {
        container_id: ContainerId,
        key: String,
        value: Value,
    },
}

impl ContainerUpdate {
    /// Canonical mapping for this update.
    pub fn into_mapping(self) -> ContainerMapping {
        match self {
            ContainerUpdate::Mapping(mapping) => mapping,
            ContainerUpdate::Field {
                container_id,
                key,
                value,
            } => ContainerMapping::single(container_id, key, value),
        }
    }

    pub fn is_shorthand(&self) -> bool {
        matches!(self, ContainerUpdate::Field { .. })
    }

    /// Interpret an untyped argument list.
    ///
    /// - `[string, key?, value?, ..]` is shorthand. A missing key becomes
    ///   [`MISSING_KEY`], a non-string key the text it would take as an
    ///   object property key, a missing value `null`. Extra arguments are
    ///   ignored.
    /// - `[object, ..]` must be a mapping of container id to field object.
    ///   Extra arguments are ignored.
    pub fn from_args(args: &[Value]) -> Result<Self, DecodeError> {
        let (first, rest) = args.split_first().ok_or(DecodeError::EmptyArguments)?;

        match first {
            Value::String(container_id) => {
                let key = rest
                    .first()
                    .map_or_else(|| MISSING_KEY.to_string(), property_key);
                let value = rest.get(1).cloned().unwrap_or(Value::Null);
                Ok(ContainerUpdate::Field {
                    container_id: ContainerId::new(container_id.as_str()),
                    key,
                    value,
                })
            }
            Value::Object(entries) => {
                let mapping = entries
                    .iter()
                    .map(|(container_id, fields)| match fields {
                        Value::Object(fields) => {
                            Ok((ContainerId::new(container_id.as_str()), fields.clone()))
                        }
                        other => Err(DecodeError::NotAFieldMap {
                            container_id: container_id.clone(),
                            found: json_type(other),
                        }),
                    })
                    .collect::<Result<ContainerMapping, _>>()?;
                Ok(ContainerUpdate::Mapping(mapping))
            }
            other => Err(DecodeError::NotAMapping {
                found: json_type(other),
            }),
        }
    }
}

impl From<ContainerMapping> for ContainerUpdate {
    fn from(mapping: ContainerMapping) -> Self {
        ContainerUpdate::Mapping(mapping)
    }
}

impl<I, K, V> From<(I, K, V)> for ContainerUpdate
where
    I: Into<ContainerId>,
    K: Into<String>,
    V: Into<Value>,
{
    fn from((container_id, key, value): (I, K, V)) -> Self {
        ContainerUpdate::Field {
            container_id: container_id.into(),
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Text a value takes when used as an object property key.
///
/// Strings are kept, numbers drop a zero fraction (`1.0` is `"1"`), arrays
/// join their elements with `,` (null elements become empty) and objects
/// become `"[object Object]"`.
fn property_key(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i.to_string(),
            (_, Some(u), _) => u.to_string(),
            (_, _, Some(f)) => f.to_string(),
            _ => n.to_string(),
        },
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => property_key(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
