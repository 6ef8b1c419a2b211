//! Chain operations over stacked error layers
//!
//! - `wrap_new` / `wrap_existing` push a more contextual layer in front of a chain
//! - `pop` walks an owned chain one layer at a time, consuming it
//! - `layers` iterates a borrowed chain without touching it
//! - `spin` picks the deepest layer a disclosure budget allows
//!
//! Traversal order is always outer-to-inner: most recently wrapped first.

pub mod layers;
pub mod pop;
pub mod spin;
pub mod wrap;

pub use layers::Layers;
