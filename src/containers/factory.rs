//! Intent creators.
//!
//! Every function is pure and total: it wraps its arguments into a
//! [`ContainerIntent`] and returns it. Nothing is validated beyond what the
//! argument types already guarantee.

use serde_json::Value;

use super::intent::ContainerIntent;
use super::normalize::ContainerUpdate;
use super::payload::{SetupPayload, SubmitPayload, TeardownPayload, ValidatePayload};
use super::types::{
    Container, ContainerEvent, ContainerId, ContainerMapping, FieldMap, MetaMapping, UiMapping,
};

/// Initial setup of a container with its meta and UI fields.
pub fn setup_container(
    container_id: impl Into<ContainerId>,
    meta: FieldMap,
    ui: FieldMap,
) -> ContainerIntent {
    ContainerIntent::SetupContainer(SetupPayload {
        container_id: container_id.into(),
        meta,
        ui,
    })
}

/// Prepare the container for removal.
pub fn teardown_container(container_id: impl Into<ContainerId>) -> ContainerIntent {
    ContainerIntent::TeardownContainer(TeardownPayload {
        container_id: container_id.into(),
    })
}

/// Update meta fields from a mapping, without inspecting it.
pub fn set_meta(meta: MetaMapping) -> ContainerIntent {
    ContainerIntent::SetMeta(meta)
}

/// Update meta fields from either call form.
///
/// A mapping is passed through exactly as [`set_meta`] would; a shorthand
/// triple becomes a single-entry mapping.
pub fn set_container_meta(update: impl Into<ContainerUpdate>) -> ContainerIntent {
    set_meta(normalize(update.into(), "meta"))
}

/// Shorthand: set one meta field of one container.
pub fn set_container_meta_field(
    container_id: impl Into<ContainerId>,
    key: impl Into<String>,
    value: impl Into<Value>,
) -> ContainerIntent {
    set_container_meta(ContainerMapping::single(container_id, key, value))
}

/// Update UI fields from a mapping, without inspecting it.
pub fn set_ui(ui: UiMapping) -> ContainerIntent {
    ContainerIntent::SetUi(ui)
}

/// Update UI fields from either call form. See [`set_container_meta`].
pub fn set_container_ui(update: impl Into<ContainerUpdate>) -> ContainerIntent {
    set_ui(normalize(update.into(), "ui"))
}

/// Shorthand: set one UI field of one container.
pub fn set_container_ui_field(
    container_id: impl Into<ContainerId>,
    key: impl Into<String>,
    value: impl Into<Value>,
) -> ContainerIntent {
    set_container_ui(ContainerMapping::single(container_id, key, value))
}

/// Start a visibility check for the container.
pub fn check_visibility(container_id: impl Into<ContainerId>) -> ContainerIntent {
    ContainerIntent::CheckVisibility(container_id.into())
}

pub fn add_container(container: Container) -> ContainerIntent {
    ContainerIntent::AddContainer(container)
}

pub fn remove_container(container_id: impl Into<ContainerId>) -> ContainerIntent {
    ContainerIntent::RemoveContainer(container_id.into())
}

/// Hand over a container in its raw string form; the reducer parses it.
pub fn receive_container(container: impl Into<String>) -> ContainerIntent {
    ContainerIntent::ReceiveContainer(container.into())
}

pub fn validate_all_containers(event: ContainerEvent) -> ContainerIntent {
    ContainerIntent::ValidateAllContainers(event)
}

pub fn validate_container(
    container_id: impl Into<ContainerId>,
    event: ContainerEvent,
) -> ContainerIntent {
    ContainerIntent::ValidateContainer(ValidatePayload {
        container_id: container_id.into(),
        event,
    })
}

/// Notify that a form inside a container was submitted.
pub fn submit_form(event: ContainerEvent) -> ContainerIntent {
    ContainerIntent::SubmitForm(SubmitPayload { event })
}

fn normalize(update: ContainerUpdate, slice: &'static str) -> ContainerMapping {
    if let ContainerUpdate::Field {
        container_id, key, ..
    } = &update
    {
        tracing::trace!(%container_id, %key, slice, "normalizing shorthand update");
    } else {
        tracing::trace!(slice, "passing container mapping through");
    }
    update.into_mapping()
}
