use crate::channel::RuntimeChannel;
use crate::runtime::RuntimeTarget;
use chip8_link::Command;

/// What a pointer interaction on the page landed on
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    /// The document body itself
    PageBackground,
    /// Empty space inside the control panel
    EmptyPanel,
    /// A button, input, select or anything else that wants focus for itself
    Control,
}

impl ClickTarget {
    pub fn is_chrome(&self) -> bool {
        matches!(self, ClickTarget::PageBackground | ClickTarget::EmptyPanel)
    }
}

/// Hands keyboard input back to the runtime.
///
/// Focusing the frame element isn't always observed from inside the frame,
/// so the runtime is also told explicitly with a `focus` message. Does
/// nothing before the handshake. Returns whether the runtime was refocused.
pub fn refocus<R: RuntimeTarget>(channel: &RuntimeChannel<R>) -> bool {
    if !channel.is_ready() {
        return false;
    }
    channel.runtime().focus();
    channel.send(Command::Focus).delivered()
}
