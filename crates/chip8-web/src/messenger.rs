use anyhow::{Context, anyhow};
use chip8_link::message::{DATA_FIELD, HostMessage, TYPE_FIELD, accepts_origin};
use js_sys::{Object, Reflect, Uint8Array};
use serde::de::DeserializeOwned;
use serde_wasm_bindgen::from_value;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{MessageEvent, Window};

pub(crate) fn js_err(err: JsValue) -> anyhow::Error {
    anyhow!("{err:?}")
}

/// Origin-restricted `postMessage` in both directions.
///
/// Outbound messages are addressed to our own origin only; inbound messages
/// from any other origin never reach the handler.
pub struct Messenger {
    origin: String,
}

impl Messenger {
    pub fn for_window(window: &Window) -> anyhow::Result<Self> {
        let origin = window
            .location()
            .origin()
            .map_err(js_err)
            .context("Reading document origin")?;
        Ok(Self { origin })
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn post(&self, target: &Window, message: &JsValue) -> anyhow::Result<()> {
        target
            .post_message(message, &self.origin)
            .map_err(js_err)
            .context("postMessage failed")
    }

    /// Installs a `message` listener for the lifetime of the page
    pub fn listen<F>(&self, window: &Window, mut handler: F) -> anyhow::Result<()>
    where
        F: FnMut(JsValue) + 'static,
    {
        let origin = self.origin.clone();
        let closure = Closure::<dyn FnMut(MessageEvent)>::new(move |event: MessageEvent| {
            if !accepts_origin(&event.origin(), &origin) {
                log::trace!("Ignoring message from {:?}", event.origin());
                return;
            }
            handler(event.data());
        });

        window
            .add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
            .map_err(js_err)
            .context("Installing message listener")?;

        closure.forget();
        Ok(())
    }
}

/// Decodes an inbound message; anything malformed or unrecognised is `None`
pub fn decode<T: DeserializeOwned>(data: JsValue) -> Option<T> {
    from_value(data).ok()
}

/// Builds the JS object for a host message.
///
/// ROM bytes are copied into a fresh `ArrayBuffer`, which the structured
/// clone of `postMessage` copies again into the runtime's context.
pub fn encode(message: &HostMessage) -> Result<JsValue, JsValue> {
    let obj = Object::new();
    Reflect::set(&obj, &TYPE_FIELD.into(), &message.tag().into())?;
    if let HostMessage::LoadRom { data } = message {
        let bytes = Uint8Array::from(data.as_slice());
        Reflect::set(&obj, &DATA_FIELD.into(), &bytes.buffer())?;
    }
    Ok(obj.into())
}
