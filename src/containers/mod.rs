//! Intents for the container state slice.
//!
//! Creators in [`factory`] build [`ContainerIntent`] values; the store's
//! reducer consumes them. `SET_META` and `SET_UI` payloads are always a
//! [`ContainerMapping`], whichever call form produced them.

pub mod factory;
mod intent;
mod kind;
mod normalize;
mod payload;
mod types;

pub use factory::*;
pub use intent::ContainerIntent;
pub use kind::{IntentKind, KindError, NAMESPACE};
pub use normalize::{ContainerUpdate, DecodeError, MISSING_KEY};
pub(crate) use normalize::json_type;
pub use payload::{SetupPayload, SubmitPayload, TeardownPayload, ValidatePayload};
pub use types::{
    Container, ContainerEvent, ContainerId, ContainerMapping, FieldMap, MetaMapping, UiMapping,
};
