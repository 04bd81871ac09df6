//! The closed set of container intent kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Prefix shared by every container intent kind string.
pub const NAMESPACE: &str = "containers/";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KindError {
    #[error("Unknown container intent kind '{value}'")]
    Unknown { value: String },
}

/// Every kind a container intent can carry.
///
/// `SetMeta` and `SetUi` are each shared by two creators (the raw and the
/// normalizing variant). The reducer sees one kind per payload shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IntentKind {
    SetupContainer,
    TeardownContainer,
    SetMeta,
    SetUi,
    CheckVisibility,
    AddContainer,
    RemoveContainer,
    ReceiveContainer,
    ValidateAllContainers,
    ValidateContainer,
    SubmitForm,
}

impl IntentKind {
    pub const ALL: [IntentKind; 11] = [
        IntentKind::SetupContainer,
        IntentKind::TeardownContainer,
        IntentKind::SetMeta,
        IntentKind::SetUi,
        IntentKind::CheckVisibility,
        IntentKind::AddContainer,
        IntentKind::RemoveContainer,
        IntentKind::ReceiveContainer,
        IntentKind::ValidateAllContainers,
        IntentKind::ValidateContainer,
        IntentKind::SubmitForm,
    ];

    /// Full namespaced kind string, e.g. `containers/SET_META`.
    pub fn as_str(self) -> &'static str {
        match self {
            IntentKind::SetupContainer => "containers/SETUP_CONTAINER",
            IntentKind::TeardownContainer => "containers/TEARDOWN_CONTAINER",
            IntentKind::SetMeta => "containers/SET_META",
            IntentKind::SetUi => "containers/SET_UI",
            IntentKind::CheckVisibility => "containers/CHECK_VISIBILITY",
            IntentKind::AddContainer => "containers/ADD_CONTAINER",
            IntentKind::RemoveContainer => "containers/REMOVE_CONTAINER",
            IntentKind::ReceiveContainer => "containers/RECEIVE_CONTAINER",
            IntentKind::ValidateAllContainers => "containers/VALIDATE_ALL_CONTAINERS",
            IntentKind::ValidateContainer => "containers/VALIDATE_CONTAINER",
            IntentKind::SubmitForm => "containers/SUBMIT_FORM",
        }
    }

    /// Kind name without the namespace, e.g. `SET_META`.
    pub fn name(self) -> &'static str {
        &self.as_str()[NAMESPACE.len()..]
    }
}

impl fmt::Display for IntentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IntentKind {
    type Err = KindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IntentKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| KindError::Unknown {
                value: s.to_string(),
            })
    }
}

impl Serialize for IntentKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for IntentKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_is_namespaced() {
        for kind in IntentKind::ALL {
            assert!(kind.as_str().starts_with(NAMESPACE), "{kind}");
            assert_eq!(format!("{NAMESPACE}{}", kind.name()), kind.as_str());
        }
    }

    #[test]
    fn kind_strings_are_unique() {
        let mut seen: Vec<&str> = IntentKind::ALL.iter().map(|k| k.as_str()).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), IntentKind::ALL.len());
    }

    #[test]
    fn parse_roundtrips_display() {
        for kind in IntentKind::ALL {
            assert_eq!(kind.to_string().parse::<IntentKind>(), Ok(kind));
        }
    }

    #[test]
    fn parse_rejects_unprefixed_name() {
        let err = "SET_META".parse::<IntentKind>().unwrap_err();
        assert_eq!(
            err,
            KindError::Unknown {
                value: "SET_META".to_string()
            }
        );
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&IntentKind::SetUi).unwrap();
        assert_eq!(json, "\"containers/SET_UI\"");
    }
}
