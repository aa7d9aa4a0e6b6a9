use crate::message::HostMessage;

/// Everything the host can ask of the runtime.
///
/// Commands are plain values. Nothing queues or retries them; a command sent
/// before the handshake completes is simply dropped by the channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Focus,
    LoadRom(Vec<u8>),
    Reset,
    ToggleLegacyShift,
    ToggleLegacyJump,
    ToggleLegacyStoreLoad,
    SwitchMode,
    SetCycleRate(u32),
}

/// Functions exported by the runtime's window for same-turn invocation
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DirectCall {
    Reset,
    ToggleLegacyShift,
    ToggleLegacyJump,
    ToggleLegacyStoreLoad,
    SwitchMode,
    UpdateCycleRate(u32),
}

impl DirectCall {
    pub fn entry_point(&self) -> &'static str {
        match self {
            DirectCall::Reset => "resetEmulator",
            DirectCall::ToggleLegacyShift => "toggleLegacyShift",
            DirectCall::ToggleLegacyJump => "toggleLegacyJump",
            DirectCall::ToggleLegacyStoreLoad => "toggleLegacyStoreLoad",
            DirectCall::SwitchMode => "switchMode",
            DirectCall::UpdateCycleRate(_) => "updateCycleRate",
        }
    }

    pub fn argument(&self) -> Option<u32> {
        match self {
            DirectCall::UpdateCycleRate(rate) => Some(*rate),
            _ => None,
        }
    }

    /// Whether the runtime answers with the flag's new state
    pub fn returns_flag(&self) -> bool {
        matches!(
            self,
            DirectCall::ToggleLegacyShift
                | DirectCall::ToggleLegacyJump
                | DirectCall::ToggleLegacyStoreLoad
                | DirectCall::SwitchMode
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    /// Structured message posted to the runtime window; fire-and-forget
    Post(HostMessage),
    /// Direct call into a function exported by the runtime; returns in the same turn
    Invoke(DirectCall),
}

impl Command {
    /// Maps a command onto the delivery mechanism it must use.
    ///
    /// ROM images cross the context boundary as copied message payloads, while
    /// anything whose result feeds back into the UI is a direct call so the
    /// answer lands in the same turn as the click. Adding a command means
    /// adding one arm here.
    pub fn route(self) -> Route {
        match self {
            Command::Focus => Route::Post(HostMessage::Focus),
            Command::LoadRom(data) => Route::Post(HostMessage::LoadRom { data }),
            Command::Reset => Route::Invoke(DirectCall::Reset),
            Command::ToggleLegacyShift => Route::Invoke(DirectCall::ToggleLegacyShift),
            Command::ToggleLegacyJump => Route::Invoke(DirectCall::ToggleLegacyJump),
            Command::ToggleLegacyStoreLoad => Route::Invoke(DirectCall::ToggleLegacyStoreLoad),
            Command::SwitchMode => Route::Invoke(DirectCall::SwitchMode),
            Command::SetCycleRate(rate) => Route::Invoke(DirectCall::UpdateCycleRate(rate)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Focus => "Focus",
            Command::LoadRom(_) => "LoadRom",
            Command::Reset => "Reset",
            Command::ToggleLegacyShift => "ToggleLegacyShift",
            Command::ToggleLegacyJump => "ToggleLegacyJump",
            Command::ToggleLegacyStoreLoad => "ToggleLegacyStoreLoad",
            Command::SwitchMode => "SwitchMode",
            Command::SetCycleRate(_) => "SetCycleRate",
        }
    }
}
