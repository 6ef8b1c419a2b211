//! Error layer model: unfinalized samples, finalized layers, identity.

pub mod identity;
pub mod node;
pub mod sample;
pub(crate) mod source;

pub use identity::Identity;
pub use node::SpError;
pub use sample::{Cause, Sample};
