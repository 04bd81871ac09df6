//! Fixed-shape payloads of the structural intents.

use serde::{Deserialize, Serialize};

use super::types::{ContainerEvent, ContainerId, FieldMap};

/// Payload of `SETUP_CONTAINER`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupPayload {
    pub container_id: ContainerId,
    pub meta: FieldMap,
    pub ui: FieldMap,
}

/// Payload of `TEARDOWN_CONTAINER`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeardownPayload {
    pub container_id: ContainerId,
}

/// Payload of `VALIDATE_CONTAINER`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatePayload {
    pub container_id: ContainerId,
    pub event: ContainerEvent,
}

/// Payload of `SUBMIT_FORM`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitPayload {
    pub event: ContainerEvent,
}
