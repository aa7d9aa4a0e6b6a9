//! View state derived from the runtime's boolean answers.
//!
//! Nothing here is stored; a reflection is recomputed from every answer and
//! handed to whatever owns the page.

use crate::command::DirectCall;

pub const TOGGLE_ON_CLASS: &str = "toggle-on";
pub const PLAY_MODE_CLASS: &str = "play-mode";
pub const ICON_PLAY_CLASS: &str = "fa-play";
pub const ICON_PAUSE_CLASS: &str = "fa-pause";

/// Controls whose look follows a runtime flag
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Control {
    LegacyShift,
    LegacyJump,
    LegacyStoreLoad,
    Mode,
}

impl Control {
    pub fn for_call(call: DirectCall) -> Option<Control> {
        match call {
            DirectCall::ToggleLegacyShift => Some(Control::LegacyShift),
            DirectCall::ToggleLegacyJump => Some(Control::LegacyJump),
            DirectCall::ToggleLegacyStoreLoad => Some(Control::LegacyStoreLoad),
            DirectCall::SwitchMode => Some(Control::Mode),
            DirectCall::Reset | DirectCall::UpdateCycleRate(_) => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModeReflection {
    pub paused: bool,
    pub label: &'static str,
    pub play_mode: bool,
    pub icon_add: &'static str,
    pub icon_remove: &'static str,
    pub tooltip: &'static str,
}

impl ModeReflection {
    pub fn from_paused(paused: bool) -> Self {
        if paused {
            Self {
                paused,
                label: "Step Mode",
                play_mode: false,
                icon_add: ICON_PLAY_CLASS,
                icon_remove: ICON_PAUSE_CLASS,
                tooltip: "Enter Run Mode (continuous)",
            }
        } else {
            Self {
                paused,
                label: "Run Mode",
                play_mode: true,
                icon_add: ICON_PAUSE_CLASS,
                icon_remove: ICON_PLAY_CLASS,
                tooltip: "Enter Step Mode (space bar - step)",
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reflection {
    Toggle { on: bool },
    Mode(ModeReflection),
}

impl Reflection {
    pub fn compute(control: Control, value: bool) -> Self {
        match control {
            Control::Mode => Reflection::Mode(ModeReflection::from_paused(value)),
            Control::LegacyShift | Control::LegacyJump | Control::LegacyStoreLoad => {
                Reflection::Toggle { on: value }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_reflection() {
        for control in [Control::LegacyShift, Control::LegacyJump, Control::LegacyStoreLoad] {
            assert_eq!(Reflection::compute(control, true), Reflection::Toggle { on: true });
            assert_eq!(Reflection::compute(control, false), Reflection::Toggle { on: false });
        }
    }

    #[test]
    fn test_paused_mode() {
        let Reflection::Mode(mode) = Reflection::compute(Control::Mode, true) else {
            panic!("expected mode reflection");
        };
        assert_eq!(mode.label, "Step Mode");
        assert!(!mode.play_mode);
        assert_eq!(mode.icon_add, "fa-play");
        assert_eq!(mode.icon_remove, "fa-pause");
        assert_eq!(mode.tooltip, "Enter Run Mode (continuous)");
    }

    #[test]
    fn test_running_mode() {
        let mode = ModeReflection::from_paused(false);
        assert_eq!(mode.label, "Run Mode");
        assert!(mode.play_mode);
        assert_eq!(mode.icon_add, "fa-pause");
        assert_eq!(mode.icon_remove, "fa-play");
        assert_eq!(mode.tooltip, "Enter Step Mode (space bar - step)");
    }

    #[test]
    fn test_control_for_call() {
        assert_eq!(Control::for_call(DirectCall::SwitchMode), Some(Control::Mode));
        assert_eq!(Control::for_call(DirectCall::ToggleLegacyJump), Some(Control::LegacyJump));
        assert_eq!(Control::for_call(DirectCall::Reset), None);
        assert_eq!(Control::for_call(DirectCall::UpdateCycleRate(1)), None);
    }
}
