use crate::channel::RuntimeChannel;
use crate::config::HostConfig;
use crate::focus::{self, ClickTarget};
use crate::runtime::RuntimeTarget;
use crate::view::HostView;
use chip8_link::cycle_rate::parse_cycle_rate;
use chip8_link::message::RuntimeMessage;
use chip8_link::reflect::{Control, Reflection};
use chip8_link::{Command, Handshake};
use log::{debug, info, trace};
use std::rc::Rc;

/// Turns user intents into commands, reflects the answers, and keeps the
/// runtime focused.
///
/// Every operation is a no-op until the runtime has announced itself.
pub struct Dispatcher<R: RuntimeTarget, V: HostView> {
    pub(crate) channel: RuntimeChannel<R>,
    pub(crate) view: V,
    pub(crate) config: HostConfig,
}

impl<R: RuntimeTarget, V: HostView> Dispatcher<R, V> {
    pub fn new(handshake: Rc<Handshake>, runtime: R, view: V, config: HostConfig) -> Self {
        Self {
            channel: RuntimeChannel::new(handshake, runtime),
            view,
            config,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.channel.is_ready()
    }

    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    /// Inbound traffic from the runtime
    pub fn handle_runtime_message(&self, message: RuntimeMessage) {
        trace!("[RECV] {}", message.tag());
        match message {
            RuntimeMessage::WasmReady => {
                if self.channel.handshake().mark_ready() {
                    info!("Runtime ready");
                } else {
                    debug!("Ignoring repeated readiness signal");
                }
            }
        }
    }

    pub fn refocus(&self) -> bool {
        focus::refocus(&self.channel)
    }

    /// Clicks on empty chrome give focus back to the runtime; clicks on
    /// controls are left alone.
    pub fn handle_click(&self, target: ClickTarget) {
        if target.is_chrome() {
            self.refocus();
        }
    }

    pub fn reset(&self) {
        if !self.is_ready() {
            return;
        }
        self.channel.send(Command::Reset);
        self.refocus();
    }

    pub fn toggle_legacy_shift(&self) -> Option<bool> {
        self.toggle(Command::ToggleLegacyShift, Control::LegacyShift)
    }

    pub fn toggle_legacy_jump(&self) -> Option<bool> {
        self.toggle(Command::ToggleLegacyJump, Control::LegacyJump)
    }

    pub fn toggle_legacy_store_load(&self) -> Option<bool> {
        self.toggle(Command::ToggleLegacyStoreLoad, Control::LegacyStoreLoad)
    }

    /// Returns `Some(true)` when the runtime is now paused (step mode)
    pub fn switch_mode(&self) -> Option<bool> {
        self.toggle(Command::SwitchMode, Control::Mode)
    }

    pub fn set_cycle_rate(&self, raw: &str) {
        if !self.is_ready() {
            return;
        }
        let rate = match parse_cycle_rate(raw) {
            Ok(rate) => rate,
            Err(e) => {
                debug!("Not forwarding cycle rate: {e}");
                return;
            }
        };
        self.channel.send(Command::SetCycleRate(rate));
        self.refocus();
    }

    /// Replace the running program and give focus back to it. Returns whether
    /// the image was handed to the runtime.
    pub fn load_rom(&self, bytes: Vec<u8>) -> bool {
        if !self.is_ready() {
            return false;
        }
        let len = bytes.len();
        let delivered = self.channel.send(Command::LoadRom(bytes)).delivered();
        if delivered {
            info!("Loaded ROM ({len} bytes)");
            self.refocus();
        }
        delivered
    }

    fn toggle(&self, command: Command, control: Control) -> Option<bool> {
        if !self.is_ready() {
            return None;
        }
        let flag = self.channel.send(command).flag();
        // A runtime that doesn't answer leaves the control as it was
        if let Some(value) = flag {
            self.view.reflect(control, &Reflection::compute(control, value));
        }
        self.refocus();
        flag
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeRuntime, FakeView, Sent, ViewEvent};
    use chip8_link::DirectCall;
    use chip8_link::message::HostMessage;
    use chip8_link::reflect::ModeReflection;

    type TestDispatcher = Dispatcher<Rc<FakeRuntime>, Rc<FakeView>>;

    fn dispatcher() -> (TestDispatcher, Rc<FakeRuntime>, Rc<FakeView>) {
        let runtime = Rc::new(FakeRuntime::default());
        let view = Rc::new(FakeView::default());
        let dispatcher = Dispatcher::new(
            Rc::new(Handshake::new()),
            runtime.clone(),
            view.clone(),
            HostConfig::default(),
        );
        (dispatcher, runtime, view)
    }

    fn ready() -> (TestDispatcher, Rc<FakeRuntime>, Rc<FakeView>) {
        let (dispatcher, runtime, view) = dispatcher();
        dispatcher.handle_runtime_message(RuntimeMessage::WasmReady);
        (dispatcher, runtime, view)
    }

    #[test]
    fn test_not_ready_is_inert() {
        let (dispatcher, runtime, view) = dispatcher();

        dispatcher.reset();
        assert_eq!(dispatcher.toggle_legacy_shift(), None);
        assert_eq!(dispatcher.toggle_legacy_jump(), None);
        assert_eq!(dispatcher.toggle_legacy_store_load(), None);
        assert_eq!(dispatcher.switch_mode(), None);
        dispatcher.set_cycle_rate("60");
        assert!(!dispatcher.load_rom(vec![0x12, 0x34]));
        assert!(!dispatcher.refocus());
        dispatcher.handle_click(ClickTarget::PageBackground);

        assert!(runtime.sent().is_empty());
        assert!(view.events().is_empty());
    }

    #[test]
    fn test_repeated_ready_signals() {
        let (dispatcher, _, _) = ready();
        for _ in 0..3 {
            dispatcher.handle_runtime_message(RuntimeMessage::WasmReady);
            assert!(dispatcher.is_ready());
        }
    }

    #[test]
    fn test_reset_then_refocus() {
        let (dispatcher, runtime, view) = ready();
        dispatcher.reset();

        assert_eq!(
            runtime.sent(),
            vec![
                Sent::Invoke(DirectCall::Reset),
                Sent::SurfaceFocus,
                Sent::Post(HostMessage::Focus),
            ]
        );
        assert!(view.events().is_empty());
    }

    #[test]
    fn test_legacy_toggles_reflect_result() {
        let (dispatcher, _, view) = ready();

        assert_eq!(dispatcher.toggle_legacy_shift(), Some(true));
        assert_eq!(dispatcher.toggle_legacy_jump(), Some(true));
        assert_eq!(dispatcher.toggle_legacy_shift(), Some(false));
        assert_eq!(dispatcher.toggle_legacy_store_load(), Some(true));

        assert_eq!(
            view.events(),
            vec![
                ViewEvent::Reflect(Control::LegacyShift, Reflection::Toggle { on: true }),
                ViewEvent::Reflect(Control::LegacyJump, Reflection::Toggle { on: true }),
                ViewEvent::Reflect(Control::LegacyShift, Reflection::Toggle { on: false }),
                ViewEvent::Reflect(Control::LegacyStoreLoad, Reflection::Toggle { on: true }),
            ]
        );
    }

    #[test]
    fn test_switch_mode_round_trip() {
        let (dispatcher, runtime, view) = ready();

        assert_eq!(dispatcher.switch_mode(), Some(true));
        assert_eq!(dispatcher.switch_mode(), Some(false));

        assert_eq!(
            view.events(),
            vec![
                ViewEvent::Reflect(Control::Mode, Reflection::Mode(ModeReflection::from_paused(true))),
                ViewEvent::Reflect(Control::Mode, Reflection::Mode(ModeReflection::from_paused(false))),
            ]
        );
        assert!(!runtime.flag("switchMode"));
    }

    #[test]
    fn test_silent_runtime_leaves_control_alone() {
        let (dispatcher, runtime, view) = ready();
        runtime.go_silent();

        assert_eq!(dispatcher.toggle_legacy_jump(), None);
        assert!(view.events().is_empty());
        assert!(runtime.sent().contains(&Sent::Post(HostMessage::Focus)));
    }

    #[test]
    fn test_cycle_rate_numeric() {
        let (dispatcher, runtime, _) = ready();
        dispatcher.set_cycle_rate("60");

        assert_eq!(runtime.invoked(), vec![DirectCall::UpdateCycleRate(60)]);
    }

    #[test]
    fn test_cycle_rate_invalid_is_dropped() {
        let (dispatcher, runtime, _) = ready();
        for raw in ["abc", "", "0", "-10", "1e3"] {
            dispatcher.set_cycle_rate(raw);
        }
        assert!(runtime.sent().is_empty(), "{:?}", runtime.sent());
    }

    #[test]
    fn test_click_targets() {
        let (dispatcher, runtime, _) = ready();

        dispatcher.handle_click(ClickTarget::Control);
        assert!(runtime.sent().is_empty());

        dispatcher.handle_click(ClickTarget::EmptyPanel);
        dispatcher.handle_click(ClickTarget::PageBackground);
        assert_eq!(runtime.posted(), vec![HostMessage::Focus, HostMessage::Focus]);
    }

    #[test]
    fn test_load_rom_posts_bytes() {
        let (dispatcher, runtime, _) = ready();
        assert!(dispatcher.load_rom(vec![0x00, 0xE0]));
        assert_eq!(
            runtime.sent(),
            vec![
                Sent::Post(HostMessage::LoadRom { data: vec![0x00, 0xE0] }),
                Sent::SurfaceFocus,
                Sent::Post(HostMessage::Focus),
            ]
        );
    }
}
