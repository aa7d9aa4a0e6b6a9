#![cfg(target_arch = "wasm32")]
#![warn(clippy::all, rust_2018_idioms)]
use crate::bootstrap::WebDispatcher;
use chip8_host::{HostConfig, startup};
use log::{LevelFilter, error};
use once_cell::unsync::OnceCell;
use std::rc::Rc;
use std::sync::atomic::AtomicBool;
use wasm_bindgen::prelude::*;

mod bootstrap;
mod fetch;
mod frame;
mod logger;
mod messenger;
mod page;
pub mod runtime;

thread_local! {
    static HOST: OnceCell<Rc<WebDispatcher>> = OnceCell::new();
}

static INITIALIZED: AtomicBool = AtomicBool::new(false);

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logger::init(LevelFilter::Debug);
}

/// Wires the host page to the runtime frame.
///
/// `config` may be `undefined` for the stock page layout. A malformed config
/// or a page missing one of its controls is logged and leaves the page inert
/// rather than throwing; a malformed config can be retried with a fixed one.
///
/// The readiness listener is installed here. If the frame is already
/// loading when this runs, it can announce itself before anyone listens and
/// the page never becomes ready, so pages should leave the frame without a
/// `src` and pass it as `frameSrc` instead.
#[wasm_bindgen(js_name = startHost)]
pub fn start_host(config: JsValue) -> Result<(), JsValue> {
    let config = if config.is_undefined() || config.is_null() {
        Ok(HostConfig::default())
    } else {
        serde_wasm_bindgen::from_value::<HostConfig>(config)
    };

    match startup::start_once(&INITIALIZED, config, bootstrap::start_host) {
        Some(Ok(dispatcher)) => HOST.with(|cell| {
            let _ = cell.set(dispatcher);
        }),
        Some(Err(e)) => error!("Host startup failed: {e:#}"),
        None => {}
    }
    Ok(())
}

/// Whether the runtime frame has signalled readiness
#[wasm_bindgen(js_name = isRuntimeReady)]
pub fn is_runtime_ready() -> bool {
    HOST.with(|cell| cell.get().is_some_and(|d| d.is_ready()))
}

/// Called from inside the runtime frame once the engine is up
#[wasm_bindgen(js_name = announceReady)]
pub fn announce_ready() -> Result<(), JsValue> {
    runtime::announce_ready().map_err(|e| JsValue::from_str(&format!("{e:#}")))
}
