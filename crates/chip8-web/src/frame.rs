use crate::messenger::{Messenger, encode, js_err};
use anyhow::Context;
use chip8_host::RuntimeTarget;
use chip8_link::DirectCall;
use chip8_link::message::HostMessage;
use js_sys::{Function, Reflect};
use log::error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlIFrameElement, Window};

/// The sandboxed frame hosting the engine
pub struct FrameRuntime {
    frame: HtmlIFrameElement,
    messenger: Messenger,
}

impl FrameRuntime {
    pub fn new(frame: HtmlIFrameElement, messenger: Messenger) -> Self {
        Self { frame, messenger }
    }

    fn content_window(&self) -> anyhow::Result<Window> {
        self.frame
            .content_window()
            .context("Runtime frame has no window")
    }

    fn try_post(&self, message: &HostMessage) -> anyhow::Result<()> {
        let window = self.content_window()?;
        let value = encode(message).map_err(js_err).context("Encoding message")?;
        self.messenger.post(&window, &value)
    }

    fn try_invoke(&self, call: DirectCall) -> anyhow::Result<JsValue> {
        let window = self.content_window()?;
        let name = call.entry_point();
        let function: Function = Reflect::get(&window, &name.into())
            .map_err(js_err)?
            .dyn_into()
            .map_err(|_| anyhow::anyhow!("{name} is not a function"))?;

        let result = match call.argument() {
            Some(arg) => function.call1(&window, &JsValue::from(arg)),
            None => function.call0(&window),
        };
        result.map_err(js_err).with_context(|| format!("{name}() threw"))
    }
}

impl RuntimeTarget for FrameRuntime {
    fn post(&self, message: HostMessage) {
        if let Err(e) = self.try_post(&message) {
            error!("Posting {} failed: {e:#}", message.tag());
        }
    }

    fn invoke(&self, call: DirectCall) -> Option<bool> {
        match self.try_invoke(call) {
            Ok(value) => value.as_bool(),
            Err(e) => {
                error!("{e:#}");
                None
            }
        }
    }

    fn focus(&self) {
        if let Err(e) = self.frame.focus() {
            error!("Focusing runtime frame failed: {e:?}");
        }
    }
}
