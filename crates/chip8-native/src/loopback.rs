use chip8_host::{HostView, RomFetcher, RomFile, RomResponse, RuntimeTarget};
use chip8_link::prelude::*;
use crossbeam_channel::{Receiver, Sender};
use log::{debug, info};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

pub const DEFAULT_CYCLES_PER_SECOND: u32 = 700;

/// What the engine would be doing; stands in for the real thing inside the frame
#[derive(Debug, PartialEq, Eq)]
pub struct EngineState {
    pub rom: Option<Vec<u8>>,
    pub running: bool,
    pub paused: bool,
    pub legacy_shift: bool,
    pub legacy_jump: bool,
    pub legacy_store_load: bool,
    pub cycles_per_second: u32,
    pub focus_requests: usize,
}

impl Default for EngineState {
    fn default() -> Self {
        Self {
            rom: None,
            running: false,
            paused: false,
            legacy_shift: false,
            legacy_jump: false,
            legacy_store_load: false,
            cycles_per_second: DEFAULT_CYCLES_PER_SECOND,
            focus_requests: 0,
        }
    }
}

impl EngineState {
    fn apply_message(&mut self, message: HostMessage) {
        match message {
            HostMessage::Focus => self.focus_requests += 1,
            HostMessage::LoadRom { data } => {
                self.reset();
                self.rom = Some(data);
                self.running = true;
            }
        }
    }

    fn reset(&mut self) {
        self.running = self.rom.is_some();
    }

    fn call(&mut self, call: DirectCall) -> Option<bool> {
        match call {
            DirectCall::Reset => {
                self.reset();
                None
            }
            DirectCall::ToggleLegacyShift => {
                self.legacy_shift ^= true;
                Some(self.legacy_shift)
            }
            DirectCall::ToggleLegacyJump => {
                self.legacy_jump ^= true;
                Some(self.legacy_jump)
            }
            DirectCall::ToggleLegacyStoreLoad => {
                self.legacy_store_load ^= true;
                Some(self.legacy_store_load)
            }
            DirectCall::SwitchMode => {
                self.paused ^= true;
                Some(self.paused)
            }
            DirectCall::UpdateCycleRate(rate) => {
                self.cycles_per_second = rate.max(1);
                None
            }
        }
    }
}

/// In-process engine: posted messages cross a channel, direct calls don't
pub struct Engine {
    state: RefCell<EngineState>,
    inbox: Receiver<HostMessage>,
    outbox: Sender<RuntimeMessage>,
}

impl Engine {
    pub fn boot(inbox: Receiver<HostMessage>, outbox: Sender<RuntimeMessage>) -> Rc<Self> {
        let engine = Rc::new(Self {
            state: RefCell::new(EngineState::default()),
            inbox,
            outbox,
        });
        engine.outbox.send(RuntimeMessage::WasmReady).ok();
        engine
    }

    /// Handle everything posted so far, in order
    pub fn process_messages(&self) {
        while let Ok(message) = self.inbox.try_recv() {
            debug!("[engine] {}", message.tag());
            self.state.borrow_mut().apply_message(message);
        }
    }

    pub fn call(&self, call: DirectCall) -> Option<bool> {
        self.state.borrow_mut().call(call)
    }

    pub fn with_state<R>(&self, f: impl FnOnce(&EngineState) -> R) -> R {
        f(&self.state.borrow())
    }
}

pub struct LoopbackRuntime {
    engine: Rc<Engine>,
    tx: Sender<HostMessage>,
}

impl LoopbackRuntime {
    pub fn new(engine: Rc<Engine>, tx: Sender<HostMessage>) -> Self {
        Self { engine, tx }
    }
}

impl RuntimeTarget for LoopbackRuntime {
    fn post(&self, message: HostMessage) {
        self.tx.send(message).ok();
    }

    fn invoke(&self, call: DirectCall) -> Option<bool> {
        self.engine.call(call)
    }

    fn focus(&self) {
        debug!("[host] focus runtime surface");
    }
}

/// Prints what the page would show
pub struct ConsoleView;

impl HostView for ConsoleView {
    fn reflect(&self, control: Control, reflection: &Reflection) {
        match reflection {
            Reflection::Toggle { on } => info!("[view] {control:?} toggle-on={on}"),
            Reflection::Mode(mode) => info!("[view] {} ({})", mode.label, mode.tooltip),
        }
    }

    fn show_rom_info(&self, rom: &RomDescriptor) {
        info!("[view] {}: {}", rom.display_name, rom.blurb);
    }

    fn hide_rom_info(&self) {
        info!("[view] ROM info hidden");
    }

    fn reset_rom_picker(&self) {
        debug!("[view] ROM picker reset");
    }
}

/// Serves `/roms/<key>` from a directory, like the static file server does
pub struct DirFetcher {
    root: PathBuf,
}

impl DirFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl RomFetcher for DirFetcher {
    async fn fetch(&self, url: &str) -> anyhow::Result<RomResponse> {
        let path = self.root.join(url.trim_start_matches('/'));
        match std::fs::read(&path) {
            Ok(body) => Ok(RomResponse::ok(body)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(RomResponse {
                status: 404,
                status_text: "Not Found".into(),
                body: Vec::new(),
            }),
            Err(e) => Err(e.into()),
        }
    }
}

pub struct LocalFile(pub PathBuf);

impl LocalFile {
    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl RomFile for LocalFile {
    fn name(&self) -> String {
        self.0.display().to_string()
    }

    async fn read_bytes(&self) -> anyhow::Result<Vec<u8>> {
        Ok(std::fs::read(&self.0)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_rom_starts_running() {
        let mut state = EngineState::default();
        state.apply_message(HostMessage::LoadRom { data: vec![0x00, 0xE0] });
        assert!(state.running);
        assert_eq!(state.rom.as_deref(), Some(&[0x00, 0xE0][..]));
    }

    #[test]
    fn test_cycle_rate_clamped() {
        let mut state = EngineState::default();
        assert_eq!(state.cycles_per_second, 700);
        state.call(DirectCall::UpdateCycleRate(0));
        assert_eq!(state.cycles_per_second, 1);
        state.call(DirectCall::UpdateCycleRate(60));
        assert_eq!(state.cycles_per_second, 60);
    }

    #[test]
    fn test_toggles_report_new_state() {
        let mut state = EngineState::default();
        assert_eq!(state.call(DirectCall::SwitchMode), Some(true));
        assert_eq!(state.call(DirectCall::SwitchMode), Some(false));
        assert_eq!(state.call(DirectCall::ToggleLegacyShift), Some(true));
        assert_eq!(state.call(DirectCall::Reset), None);
    }

    #[test]
    fn test_engine_announces_and_drains_in_order() {
        let (host_tx, engine_rx) = crossbeam_channel::unbounded();
        let (engine_tx, host_rx) = crossbeam_channel::unbounded();
        let engine = Engine::boot(engine_rx, engine_tx);
        assert_eq!(host_rx.try_recv(), Ok(RuntimeMessage::WasmReady));

        let runtime = LoopbackRuntime::new(engine.clone(), host_tx);
        runtime.post(HostMessage::LoadRom { data: vec![1] });
        runtime.post(HostMessage::LoadRom { data: vec![2] });
        runtime.post(HostMessage::Focus);
        engine.process_messages();

        engine.with_state(|state| {
            assert_eq!(state.rom.as_deref(), Some(&[2u8][..]));
            assert_eq!(state.focus_requests, 1);
        });
    }
}
