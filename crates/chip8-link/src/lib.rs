// Host <-> runtime protocol types
pub mod catalog;
pub mod command;
pub mod cycle_rate;
pub mod error;
pub mod handshake;
pub mod message;
pub mod prelude;
pub mod reflect;

// Re-exports
pub use command::{Command, DirectCall, Route};
pub use error::LinkError;
pub use handshake::{Handshake, HandshakeState};
