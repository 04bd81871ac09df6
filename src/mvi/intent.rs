//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents are immutable values, consumed once by a reducer. They must be
/// cheap to move between threads and carry no borrowed data.
pub trait Intent: Send + 'static {
    /// Namespaced kind string the reducer dispatches on.
    fn kind_str(&self) -> &'static str;
}
