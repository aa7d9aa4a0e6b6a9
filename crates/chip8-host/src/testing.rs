//! In-memory runtime, page, fetcher and file used by the unit tests

use crate::resolver::{RomFetcher, RomFile, RomResponse};
use crate::runtime::RuntimeTarget;
use crate::view::HostView;
use anyhow::anyhow;
use chip8_link::DirectCall;
use chip8_link::catalog::RomDescriptor;
use chip8_link::message::HostMessage;
use chip8_link::reflect::{Control, Reflection};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Sent {
    Post(HostMessage),
    Invoke(DirectCall),
    SurfaceFocus,
}

/// Flips a flag per boolean entry point, like the engine does
#[derive(Default)]
pub struct FakeRuntime {
    sent: RefCell<Vec<Sent>>,
    flags: RefCell<HashMap<&'static str, bool>>,
    silent: Cell<bool>,
}

impl FakeRuntime {
    pub fn sent(&self) -> Vec<Sent> {
        self.sent.borrow().clone()
    }

    pub fn posted(&self) -> Vec<HostMessage> {
        self.sent
            .borrow()
            .iter()
            .filter_map(|s| match s {
                Sent::Post(msg) => Some(msg.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn invoked(&self) -> Vec<DirectCall> {
        self.sent
            .borrow()
            .iter()
            .filter_map(|s| match s {
                Sent::Invoke(call) => Some(*call),
                _ => None,
            })
            .collect()
    }

    pub fn loaded_roms(&self) -> Vec<Vec<u8>> {
        self.posted()
            .into_iter()
            .filter_map(|msg| match msg {
                HostMessage::LoadRom { data } => Some(data),
                HostMessage::Focus => None,
            })
            .collect()
    }

    pub fn flag(&self, entry_point: &str) -> bool {
        self.flags.borrow().get(entry_point).copied().unwrap_or(false)
    }

    /// Entry points stop answering (e.g. missing from the runtime window)
    pub fn go_silent(&self) {
        self.silent.set(true);
    }
}

impl RuntimeTarget for FakeRuntime {
    fn post(&self, message: HostMessage) {
        self.sent.borrow_mut().push(Sent::Post(message));
    }

    fn invoke(&self, call: DirectCall) -> Option<bool> {
        self.sent.borrow_mut().push(Sent::Invoke(call));
        if self.silent.get() || !call.returns_flag() {
            return None;
        }
        let mut flags = self.flags.borrow_mut();
        let flag = flags.entry(call.entry_point()).or_insert(false);
        *flag = !*flag;
        Some(*flag)
    }

    fn focus(&self) {
        self.sent.borrow_mut().push(Sent::SurfaceFocus);
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewEvent {
    Reflect(Control, Reflection),
    ShowInfo(&'static str),
    HideInfo,
    ResetPicker,
}

#[derive(Default)]
pub struct FakeView {
    events: RefCell<Vec<ViewEvent>>,
}

impl FakeView {
    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.borrow().clone()
    }
}

impl HostView for FakeView {
    fn reflect(&self, control: Control, reflection: &Reflection) {
        self.events
            .borrow_mut()
            .push(ViewEvent::Reflect(control, reflection.clone()));
    }

    fn show_rom_info(&self, rom: &RomDescriptor) {
        self.events.borrow_mut().push(ViewEvent::ShowInfo(rom.display_name));
    }

    fn hide_rom_info(&self) {
        self.events.borrow_mut().push(ViewEvent::HideInfo);
    }

    fn reset_rom_picker(&self) {
        self.events.borrow_mut().push(ViewEvent::ResetPicker);
    }
}

/// Serves canned responses by URL; unknown URLs fail like a dropped connection
#[derive(Default)]
pub struct FakeFetcher {
    responses: HashMap<String, (u16, &'static str, Vec<u8>)>,
    requested: RefCell<Vec<String>>,
}

impl FakeFetcher {
    pub fn with_rom(mut self, url: &str, body: Vec<u8>) -> Self {
        self.responses.insert(url.to_string(), (200, "OK", body));
        self
    }

    pub fn with_status(mut self, url: &str, status: u16, status_text: &'static str) -> Self {
        self.responses
            .insert(url.to_string(), (status, status_text, Vec::new()));
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }
}

impl RomFetcher for FakeFetcher {
    async fn fetch(&self, url: &str) -> anyhow::Result<RomResponse> {
        self.requested.borrow_mut().push(url.to_string());
        let (status, status_text, body) = self
            .responses
            .get(url)
            .cloned()
            .ok_or_else(|| anyhow!("connection refused"))?;
        Ok(RomResponse {
            status,
            status_text: status_text.to_string(),
            body,
        })
    }
}

pub struct FakeFile {
    name: &'static str,
    contents: Result<Vec<u8>, String>,
}

impl FakeFile {
    pub fn new(name: &'static str, contents: Result<Vec<u8>, String>) -> Self {
        Self { name, contents }
    }
}

impl RomFile for FakeFile {
    fn name(&self) -> String {
        self.name.to_string()
    }

    async fn read_bytes(&self) -> anyhow::Result<Vec<u8>> {
        self.contents.clone().map_err(|e| anyhow!(e))
    }
}
