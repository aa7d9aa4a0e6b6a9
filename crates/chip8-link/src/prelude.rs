//! Convenient imports for consumers of chip8-link
//!
//! Pull in everything commonly needed in one line:
//! ```rust
//! use chip8_link::prelude::*;
//! ```

// Handshake + commands
pub use crate::command::{Command, DirectCall, Route};
pub use crate::handshake::{Handshake, HandshakeState};

// Wire messages
pub use crate::message::{HostMessage, RuntimeMessage};

// Catalog
pub use crate::catalog::{CATALOG, RomDescriptor};

// UI reflection
pub use crate::reflect::{Control, ModeReflection, Reflection};

// Errors
pub use crate::error::LinkError;
