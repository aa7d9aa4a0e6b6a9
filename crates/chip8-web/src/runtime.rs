//! Frame side of the protocol, for engines compiled from Rust.
//!
//! The engine calls [`announce_ready`] once its own bootstrap is done and
//! drains [`RuntimeReceiver::poll`] from its update loop.

use crate::messenger::{Messenger, decode, js_err};
use anyhow::Context;
use chip8_link::LinkError;
use chip8_link::message::{DATA_FIELD, HostMessage, MessageTag, RuntimeMessage};
use js_sys::{ArrayBuffer, Reflect, Uint8Array};
use log::{debug, info};
use serde_wasm_bindgen::to_value;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};

/// Tells the parent page the engine is up
pub fn announce_ready() -> anyhow::Result<()> {
    let window = web_sys::window().context("No window")?;
    let messenger = Messenger::for_window(&window)?;
    let Some(parent) = window.parent().map_err(js_err)? else {
        debug!("No parent window, skipping readiness signal");
        return Ok(());
    };

    let value = to_value(&RuntimeMessage::WasmReady)
        .map_err(|e| anyhow::anyhow!("{e}"))
        .context("Encoding readiness signal")?;
    messenger.post(&parent, &value)?;
    info!("Announced readiness to {}", messenger.origin());
    Ok(())
}

fn parse(data: &JsValue) -> Result<HostMessage, LinkError> {
    let tag = decode::<MessageTag>(data.clone())
        .ok_or_else(|| LinkError::UnknownMessage(format!("{data:?}")))?;
    let payload = Reflect::get(data, &DATA_FIELD.into())
        .ok()
        .and_then(|value| value.dyn_into::<ArrayBuffer>().ok())
        .map(|buffer| Uint8Array::new(&buffer).to_vec());
    tag.into_host_message(payload)
}

/// Queue of host messages that passed the origin and shape checks
pub struct RuntimeReceiver {
    queue: Rc<RefCell<VecDeque<HostMessage>>>,
}

impl RuntimeReceiver {
    pub fn listen() -> anyhow::Result<Self> {
        let window = web_sys::window().context("No window")?;
        let messenger = Messenger::for_window(&window)?;
        let queue = Rc::new(RefCell::new(VecDeque::new()));

        let inbox = queue.clone();
        messenger.listen(&window, move |data| match parse(&data) {
            Ok(message) => inbox.borrow_mut().push_back(message),
            Err(e) => debug!("Ignoring message: {e}"),
        })?;

        Ok(Self { queue })
    }

    pub fn poll(&self) -> Option<HostMessage> {
        self.queue.borrow_mut().pop_front()
    }
}
