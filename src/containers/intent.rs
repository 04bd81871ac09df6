//! The `{kind, payload}` value every creator returns.

use serde::{Deserialize, Serialize};

use super::kind::IntentKind;
use super::payload::{SetupPayload, SubmitPayload, TeardownPayload, ValidatePayload};
use super::types::{Container, ContainerEvent, ContainerId, MetaMapping, UiMapping};
use crate::mvi::Intent;

/// A container intent, serialized as `{"kind": "containers/...", "payload": ...}`.
///
/// The variant fixes the payload shape. `SetMeta` and `SetUi` always hold a
/// canonical mapping, whichever creator built them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload")]
pub enum ContainerIntent {
    #[serde(rename = "containers/SETUP_CONTAINER")]
    SetupContainer(SetupPayload),

    #[serde(rename = "containers/TEARDOWN_CONTAINER")]
    TeardownContainer(TeardownPayload),

    #[serde(rename = "containers/SET_META")]
    SetMeta(MetaMapping),

    #[serde(rename = "containers/SET_UI")]
    SetUi(UiMapping),

    /// Passthrough of the container id.
    #[serde(rename = "containers/CHECK_VISIBILITY")]
    CheckVisibility(ContainerId),

    /// Passthrough of the container record.
    #[serde(rename = "containers/ADD_CONTAINER")]
    AddContainer(Container),

    /// Passthrough of the container id.
    #[serde(rename = "containers/REMOVE_CONTAINER")]
    RemoveContainer(ContainerId),

    /// Raw, unparsed container representation.
    #[serde(rename = "containers/RECEIVE_CONTAINER")]
    ReceiveContainer(String),

    /// Passthrough of the triggering event.
    #[serde(rename = "containers/VALIDATE_ALL_CONTAINERS")]
    ValidateAllContainers(ContainerEvent),

    #[serde(rename = "containers/VALIDATE_CONTAINER")]
    ValidateContainer(ValidatePayload),

    #[serde(rename = "containers/SUBMIT_FORM")]
    SubmitForm(SubmitPayload),
}

impl ContainerIntent {
    pub fn kind(&self) -> IntentKind {
        match self {
            ContainerIntent::SetupContainer(_) => IntentKind::SetupContainer,
            ContainerIntent::TeardownContainer(_) => IntentKind::TeardownContainer,
            ContainerIntent::SetMeta(_) => IntentKind::SetMeta,
            ContainerIntent::SetUi(_) => IntentKind::SetUi,
            ContainerIntent::CheckVisibility(_) => IntentKind::CheckVisibility,
            ContainerIntent::AddContainer(_) => IntentKind::AddContainer,
            ContainerIntent::RemoveContainer(_) => IntentKind::RemoveContainer,
            ContainerIntent::ReceiveContainer(_) => IntentKind::ReceiveContainer,
            ContainerIntent::ValidateAllContainers(_) => IntentKind::ValidateAllContainers,
            ContainerIntent::ValidateContainer(_) => IntentKind::ValidateContainer,
            ContainerIntent::SubmitForm(_) => IntentKind::SubmitForm,
        }
    }
}

impl Intent for ContainerIntent {
    fn kind_str(&self) -> &'static str {
        self.kind().as_str()
    }
}
