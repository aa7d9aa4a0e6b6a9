pub mod channel;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod focus;
pub mod resolver;
pub mod runtime;
pub mod startup;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

pub use channel::{Delivery, RuntimeChannel};
pub use config::HostConfig;
pub use dispatcher::Dispatcher;
pub use error::{ResolveError, StartupError};
pub use focus::ClickTarget;
pub use resolver::{RomFetcher, RomFile, RomResponse};
pub use runtime::RuntimeTarget;
pub use view::HostView;
