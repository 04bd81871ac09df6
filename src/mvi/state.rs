//! Base trait for store state in MVI architecture.

/// Marker trait for state owned by a reducer.
///
/// States are replaced wholesale on every transition, so they are `Clone`,
/// and `PartialEq` lets the store skip notifying when nothing changed.
pub trait StoreState: Clone + PartialEq + Default + Send + 'static {}
