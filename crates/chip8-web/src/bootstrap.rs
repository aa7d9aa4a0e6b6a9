use crate::fetch::{HttpFetcher, PickedFile};
use crate::frame::FrameRuntime;
use crate::messenger::{Messenger, decode, js_err};
use crate::page::{PageAnchors, PageView, click_target};
use anyhow::Context;
use chip8_host::startup::{self, Initialized};
use chip8_host::{Dispatcher, HostConfig, StartupError};
use chip8_link::Handshake;
use chip8_link::message::RuntimeMessage;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget, Window};

pub type WebDispatcher = Dispatcher<FrameRuntime, PageView>;

pub fn start_host(config: HostConfig) -> anyhow::Result<Rc<WebDispatcher>> {
    let window = web_sys::window().ok_or(StartupError::NoWindow)?;
    let document = window.document().ok_or(StartupError::NoWindow)?;
    let handshake = Rc::new(Handshake::new());

    // Phase one: anchors, dispatcher, readiness listener
    let frame_messenger = Messenger::for_window(&window)?;
    let init: Initialized<FrameRuntime, PageView, PageAnchors> =
        startup::initialize(handshake, config, |config| {
            let anchors = PageAnchors::resolve(&document, config)?;
            let runtime = FrameRuntime::new(anchors.frame.clone(), frame_messenger);
            let view = PageView::new(&anchors, config);
            Ok((runtime, view, anchors))
        })?;

    listen_for_runtime(&window, init.dispatcher())?;

    // Phase two: controls
    init.bind(|dispatcher, anchors| {
        if let Some(src) = &dispatcher.config().frame_src {
            anchors.frame.set_src(src);
        }
        bind_controls(&window, dispatcher, anchors)
    })
}

fn listen_for_runtime(window: &Window, dispatcher: &Rc<WebDispatcher>) -> anyhow::Result<()> {
    let messenger = Messenger::for_window(window)?;
    let dispatcher = dispatcher.clone();
    messenger.listen(window, move |data| {
        if let Some(message) = decode::<RuntimeMessage>(data) {
            dispatcher.handle_runtime_message(message);
        }
    })
}

fn on<F>(target: &EventTarget, event: &str, handler: F) -> anyhow::Result<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(js_err)
        .with_context(|| format!("Binding {event} listener"))?;
    closure.forget();
    Ok(())
}

fn bind_controls(window: &Window, dispatcher: &Rc<WebDispatcher>, anchors: PageAnchors) -> anyhow::Result<()> {
    let d = dispatcher.clone();
    on(&anchors.reset_button, "click", move |_| d.reset())?;

    let d = dispatcher.clone();
    on(&anchors.legacy_shift_button, "click", move |_| {
        d.toggle_legacy_shift();
    })?;

    let d = dispatcher.clone();
    on(&anchors.legacy_jump_button, "click", move |_| {
        d.toggle_legacy_jump();
    })?;

    let d = dispatcher.clone();
    on(&anchors.legacy_store_load_button, "click", move |_| {
        d.toggle_legacy_store_load();
    })?;

    let d = dispatcher.clone();
    on(&anchors.mode_button, "click", move |_| {
        d.switch_mode();
    })?;

    let d = dispatcher.clone();
    let input = anchors.cycle_rate.clone();
    on(&anchors.cycle_rate, "change", move |_| d.set_cycle_rate(&input.value()))?;

    let d = dispatcher.clone();
    let picker = anchors.rom_picker.clone();
    let fetch_window = window.clone();
    on(&anchors.rom_picker, "change", move |_| {
        let d = d.clone();
        let key = picker.value();
        let fetcher = HttpFetcher::new(fetch_window.clone());
        wasm_bindgen_futures::spawn_local(async move {
            d.load_catalog_rom(&key, &fetcher).await;
        });
    })?;

    let d = dispatcher.clone();
    let file_input = anchors.rom_file.clone();
    on(&anchors.rom_file, "change", move |_| {
        let d = d.clone();
        let file = file_input.files().and_then(|files| files.get(0)).map(PickedFile);
        wasm_bindgen_futures::spawn_local(async move {
            d.load_local_file(file).await;
        });
    })?;

    let d = dispatcher.clone();
    let body = anchors.body.clone();
    let chrome_class = d.config().chrome_class.clone();
    on(&anchors.body, "click", move |event| {
        d.handle_click(click_target(event.target(), &body, &chrome_class));
    })?;

    Ok(())
}
