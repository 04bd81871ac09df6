//! Model-View-Intent (MVI) seam between intent producers and the store.
//!
//! # Architecture
//!
//! ```text
//! Creator ──→ Intent ──→ Reducer ──→ State
//! ```
//!
//! - **Intent**: serializable command describing a requested transition
//! - **Reducer**: pure function owned by the store, `(State, Intent) -> State`
//! - **State**: the tree the reducer owns
//!
//! This crate only produces intents. Reducers live with the store.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::StoreState;
