//! Value types carried inside container intents.

use std::borrow::Borrow;
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Opaque identifier, unique per container instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContainerId(String);

impl ContainerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ContainerId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ContainerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ContainerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Arbitrary fields of a single container.
pub type FieldMap = Map<String, Value>;

/// Opaque container record, forwarded as-is.
pub type Container = Value;

/// Opaque event object (blur, submit, ...), forwarded as-is.
pub type ContainerEvent = Value;

/// Canonical payload of `SET_META` and `SET_UI`: container id to fields.
///
/// Keys are ordered so the serialized form is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContainerMapping(BTreeMap<ContainerId, FieldMap>);

/// Auxiliary descriptive fields per container.
pub type MetaMapping = ContainerMapping;

/// UI/display state per container (open/closed, error flags, ...).
pub type UiMapping = ContainerMapping;

impl ContainerMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mapping with exactly one container holding exactly one field.
    pub fn single(
        container_id: impl Into<ContainerId>,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        let mut fields = FieldMap::new();
        fields.insert(key.into(), value.into());
        let mut mapping = Self::new();
        mapping.0.insert(container_id.into(), fields);
        mapping
    }

    /// Replace the fields of `container_id`, returning the previous ones.
    pub fn insert(
        &mut self,
        container_id: impl Into<ContainerId>,
        fields: FieldMap,
    ) -> Option<FieldMap> {
        self.0.insert(container_id.into(), fields)
    }

    pub fn get(&self, container_id: &str) -> Option<&FieldMap> {
        self.0.get(container_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(ContainerId, FieldMap)> for ContainerMapping {
    fn from_iter<I: IntoIterator<Item = (ContainerId, FieldMap)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for ContainerMapping {
    type Item = (ContainerId, FieldMap);
    type IntoIter = btree_map::IntoIter<ContainerId, FieldMap>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
