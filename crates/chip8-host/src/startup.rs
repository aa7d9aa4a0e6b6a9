//! Two-phase startup.
//!
//! Phase one resolves every page anchor and builds the dispatcher; if any
//! anchor is missing the page stays inert. Phase two attaches event handlers
//! and can only be reached through a completed phase one.

use crate::config::HostConfig;
use crate::dispatcher::Dispatcher;
use crate::error::StartupError;
use crate::runtime::RuntimeTarget;
use crate::view::HostView;
use chip8_link::Handshake;
use log::{error, info};
use std::fmt::Display;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Runs `start` at most once per `started` latch.
///
/// A config that failed to parse is logged and does not latch, so the page
/// can call again with a fixed one.
pub fn start_once<T, E, F>(started: &AtomicBool, config: Result<HostConfig, E>, start: F) -> Option<T>
where
    E: Display,
    F: FnOnce(HostConfig) -> T,
{
    let config = config.inspect_err(|e| error!("Invalid host config: {e}")).ok()?;
    if started.swap(true, Ordering::SeqCst) {
        info!("Host already started, skipping");
        return None;
    }
    Some(start(config))
}

pub fn require<T>(name: &'static str, selector: &str, found: Option<T>) -> Result<T, StartupError> {
    found.ok_or_else(|| StartupError::MissingAnchor {
        name,
        selector: selector.to_string(),
    })
}

/// Phase one done: anchors resolved, dispatcher built, handlers not yet attached.
///
/// `A` is whatever the page layer resolved besides the runtime and the view
/// (the controls handlers get attached to); phase two consumes it.
pub struct Initialized<R: RuntimeTarget, V: HostView, A> {
    dispatcher: Rc<Dispatcher<R, V>>,
    anchors: A,
}

pub fn initialize<R, V, A, F>(
    handshake: Rc<Handshake>,
    config: HostConfig,
    resolve: F,
) -> Result<Initialized<R, V, A>, StartupError>
where
    R: RuntimeTarget,
    V: HostView,
    F: FnOnce(&HostConfig) -> Result<(R, V, A), StartupError>,
{
    let (runtime, view, anchors) = resolve(&config).inspect_err(|e| error!("Startup failed: {e}"))?;
    info!("Host initialized");
    Ok(Initialized {
        dispatcher: Rc::new(Dispatcher::new(handshake, runtime, view, config)),
        anchors,
    })
}

impl<R: RuntimeTarget, V: HostView, A> Initialized<R, V, A> {
    pub fn dispatcher(&self) -> &Rc<Dispatcher<R, V>> {
        &self.dispatcher
    }

    /// Phase two
    pub fn bind<F>(self, bind: F) -> anyhow::Result<Rc<Dispatcher<R, V>>>
    where
        F: FnOnce(&Rc<Dispatcher<R, V>>, A) -> anyhow::Result<()>,
    {
        bind(&self.dispatcher, self.anchors).inspect_err(|e| error!("Binding controls failed: {e:#}"))?;
        info!("Controls bound");
        Ok(self.dispatcher)
    }
}
