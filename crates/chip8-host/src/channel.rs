use crate::runtime::RuntimeTarget;
use chip8_link::{Command, Handshake, Route};
use log::{debug, trace};
use std::rc::Rc;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Delivery {
    /// Runtime not ready yet; nothing left the host
    Dropped,
    /// Handed to the runtime as a structured message
    Posted,
    /// Direct call returned, with the new flag state if the entry point reports one
    Returned(Option<bool>),
}

impl Delivery {
    pub fn delivered(&self) -> bool {
        !matches!(self, Delivery::Dropped)
    }

    pub fn flag(&self) -> Option<bool> {
        match self {
            Delivery::Returned(flag) => *flag,
            _ => None,
        }
    }
}

/// The only way commands reach the runtime
pub struct RuntimeChannel<R: RuntimeTarget> {
    handshake: Rc<Handshake>,
    runtime: R,
}

impl<R: RuntimeTarget> RuntimeChannel<R> {
    pub fn new(handshake: Rc<Handshake>, runtime: R) -> Self {
        Self { handshake, runtime }
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.handshake.is_ready()
    }

    pub fn handshake(&self) -> &Rc<Handshake> {
        &self.handshake
    }

    pub(crate) fn runtime(&self) -> &R {
        &self.runtime
    }

    pub fn send(&self, command: Command) -> Delivery {
        if !self.is_ready() {
            trace!("Runtime not ready, dropping {}", command.name());
            return Delivery::Dropped;
        }

        let name = command.name();
        match command.route() {
            Route::Post(message) => {
                debug!("[POST] {name} as {:?}", message.tag());
                self.runtime.post(message);
                Delivery::Posted
            }
            Route::Invoke(call) => {
                let result = self.runtime.invoke(call);
                debug!("[INVOKE] {}() => {:?}", call.entry_point(), result);
                Delivery::Returned(if call.returns_flag() { result } else { None })
            }
        }
    }
}
