//! Core types for button configuration and state.

/// Electrical configuration of the button's input pin.
///
/// Fixed at construction; which mode is correct depends on how the button is
/// wired (to VCC with an external pull-down, to GND with a pull-up, etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputMode {
    /// Plain high-impedance input. Requires an external pull resistor.
    Floating,

    /// Input with the internal pull-up resistor enabled (idle high).
    PullUp,

    /// Input with the internal pull-down resistor enabled (idle low).
    PullDown,
}

/// Which signal transitions fire the debounce-and-toggle routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeMode {
    /// Low-to-high transitions only.
    Rising,

    /// High-to-low transitions only.
    Falling,

    /// Any transition.
    Change,
}

/// The logical state of a button.
///
/// Flips on each accepted edge rather than mirroring the raw electrical
/// level, so a press-and-hold reads as a single transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonState {
    /// Initial state; no accepted edge, or an even number of them.
    Released,

    /// An odd number of accepted edges.
    Pressed,
}

impl ButtonState {
    /// Returns true for [`ButtonState::Pressed`].
    #[inline]
    pub fn is_pressed(&self) -> bool {
        matches!(self, ButtonState::Pressed)
    }
}

impl From<bool> for ButtonState {
    fn from(toggled: bool) -> Self {
        if toggled {
            ButtonState::Pressed
        } else {
            ButtonState::Released
        }
    }
}

impl From<ButtonState> for bool {
    fn from(state: ButtonState) -> Self {
        state.is_pressed()
    }
}

/// Errors that can occur while constructing a button.
///
/// Construction is the only fallible operation; all runtime operations are
/// total. On embedded targets a construction failure is a wiring or board
/// configuration mistake and is typically treated as fatal at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonError {
    /// The pin does not refer to a usable digital input.
    InvalidPin,

    /// The pin cannot be configured in the requested mode (e.g. no internal
    /// pull-down on this line).
    UnsupportedMode(InputMode),
}

impl core::fmt::Display for ButtonError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ButtonError::InvalidPin => {
                write!(f, "pin is not a usable digital input")
            }
            ButtonError::UnsupportedMode(mode) => {
                write!(f, "pin does not support input mode {:?}", mode)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ButtonError {}

#[cfg(test)]
mod tests {
    use super::*;
    extern crate std;
    use std::format;

    #[test]
    fn button_state_round_trips_through_bool() {
        assert_eq!(ButtonState::from(false), ButtonState::Released);
        assert_eq!(ButtonState::from(true), ButtonState::Pressed);
        assert!(!bool::from(ButtonState::Released));
        assert!(bool::from(ButtonState::Pressed));
        assert!(ButtonState::Pressed.is_pressed());
        assert!(!ButtonState::Released.is_pressed());
    }

    #[test]
    fn error_messages_format_correctly_for_display() {
        let error = ButtonError::InvalidPin;
        assert!(format!("{}", error).contains("not a usable digital input"));

        let error = ButtonError::UnsupportedMode(InputMode::PullDown);
        let error_str = format!("{}", error);
        assert!(error_str.contains("does not support"));
        assert!(error_str.contains("PullDown"));
    }
}
