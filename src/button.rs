//! Debounced push-button driver.
//!
//! Provides [`DebouncedButton`] which owns an input pin and maintains a
//! toggled boolean state through a bounce filter. Also defines the
//! [`ButtonPin`] trait for hardware abstraction.

use core::marker::PhantomData;

use crate::interrupt;
use crate::state::ToggleState;
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::types::{ButtonError, ButtonState, EdgeMode, InputMode};

/// Default minimum interval between accepted edges.
pub const DEFAULT_DEBOUNCE_MS: u64 = 50;

/// Trait for abstracting button input hardware.
///
/// Implement this for your platform's GPIO pin (PAC, HAL, register access,
/// etc.) to let the driver configure and sample it.
pub trait ButtonPin {
    /// Configures the pin as a digital input in the requested mode.
    ///
    /// Called once during button construction. Return an error if the pin is
    /// not a usable digital input or cannot provide the requested pull
    /// configuration.
    fn configure(&mut self, mode: InputMode) -> Result<(), ButtonError>;

    /// Samples the current electrical level.
    ///
    /// Handle any hardware errors internally - this method cannot fail.
    fn is_high(&mut self) -> bool;

    /// Enables the pin's edge-triggered interrupt for the given transitions.
    ///
    /// Platform-level registration failures are not surfaced; the pin is
    /// already configured as an input when this is called.
    fn enable_edge_interrupt(&mut self, edge: EdgeMode);
}

/// A debounced push button with a toggled boolean state.
///
/// Each button owns its pin and borrows a time source plus a [`ToggleState`]
/// cell. The toggled value starts `false` and flips once per edge that
/// passes the debounce gate, regardless of how many raw edges the contact
/// bounce produces.
///
/// Two usage modes (pick one per button; mixing them reintroduces the
/// interrupt/poll race the cell exists to avoid):
///
/// - **Interrupt-driven**: call
///   [`attach_toggled_interrupt`](Self::attach_toggled_interrupt) once, have
///   the platform ISR call [`crate::dispatch_edge`], and read with
///   [`toggled_state`](Self::toggled_state).
/// - **Polled**: call [`poll`](Self::poll) from the main loop; it samples the
///   raw pin level, feeds matching transitions through the same gate, and
///   returns the toggled state.
///
/// # Type Parameters
/// * `'a` - Lifetime of the borrowed time source and state cell
/// * `I` - Time instant type
/// * `P` - Pin implementation type
/// * `T` - Time source implementation type
pub struct DebouncedButton<'a, I: TimeInstant, P: ButtonPin, T: TimeSource<I>> {
    pin: P,
    clock: &'a T,
    shared: &'a ToggleState,
    input_mode: InputMode,
    poll_edge: EdgeMode,
    debounce_ms: u64,
    last_raw: bool,
    _instant: PhantomData<I>,
}

impl<'a, I: TimeInstant, P: ButtonPin, T: TimeSource<I>> DebouncedButton<'a, I, P, T> {
    /// Creates a button on `pin`, configuring it in `mode`.
    ///
    /// Pin configuration is the only fallible step; an `Err` here is a fatal
    /// wiring/configuration mistake and should be handled at startup. The
    /// initial raw level is sampled so the first [`poll`](Self::poll) does
    /// not see a spurious transition.
    ///
    /// The toggled state starts `false`. `state` should be a fresh cell; a
    /// cell shared between buttons would merge their toggle histories.
    pub fn new(
        mut pin: P,
        mode: InputMode,
        clock: &'a T,
        state: &'a ToggleState,
    ) -> Result<Self, ButtonError> {
        pin.configure(mode)?;
        let last_raw = pin.is_high();

        Ok(Self {
            pin,
            clock,
            shared: state,
            input_mode: mode,
            poll_edge: EdgeMode::Change,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            last_raw,
            _instant: PhantomData,
        })
    }

    /// Sets the minimum interval between accepted edges.
    ///
    /// Defaults to [`DEFAULT_DEBOUNCE_MS`].
    pub fn with_debounce_interval(mut self, interval: I::Duration) -> Self {
        self.debounce_ms = interval.as_millis();
        self
    }

    /// Sets which raw transitions the poll path reacts to.
    ///
    /// Defaults to [`EdgeMode::Change`]. Only affects [`poll`](Self::poll);
    /// in interrupt mode the hardware filters edges per the mode passed to
    /// [`attach_toggled_interrupt`](Self::attach_toggled_interrupt).
    pub fn with_poll_edge(mut self, edge: EdgeMode) -> Self {
        self.poll_edge = edge;
        self
    }

    /// Runs the debounce-and-toggle routine for an externally observed edge.
    ///
    /// Entry point for applications that demultiplex their own interrupts
    /// and deliver edges to the button directly. Returns whether the edge
    /// was accepted.
    pub fn handle_edge(&mut self) -> bool {
        self.shared
            .service(self.clock.now().as_millis(), self.debounce_ms)
    }

    /// Samples the pin and returns the toggled state.
    ///
    /// A raw transition matching the poll edge filter goes through the same
    /// debounce gate as an interrupt-delivered edge; bounce within the
    /// interval is rejected. With no transition this is a pure read.
    pub fn poll(&mut self) -> bool {
        let level = self.pin.is_high();
        let fired = match self.poll_edge {
            EdgeMode::Rising => !self.last_raw && level,
            EdgeMode::Falling => self.last_raw && !level,
            EdgeMode::Change => level != self.last_raw,
        };
        self.last_raw = level;

        if fired {
            self.shared
                .service(self.clock.now().as_millis(), self.debounce_ms);
        }
        self.shared.is_set()
    }

    /// Returns the current toggled state. Pure read, no pin sampling.
    #[inline]
    pub fn toggled_state(&self) -> bool {
        self.shared.is_set()
    }

    /// Returns the toggled state as a [`ButtonState`].
    #[inline]
    pub fn state(&self) -> ButtonState {
        ButtonState::from(self.shared.is_set())
    }

    /// Returns the pin's input mode.
    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    /// Returns the configured debounce interval.
    pub fn debounce_interval(&self) -> I::Duration {
        I::Duration::from_millis(self.debounce_ms)
    }

    /// Returns the time elapsed since the last accepted edge, or `None` if
    /// no edge has been accepted yet.
    pub fn elapsed_since_last_toggle(&self) -> Option<I::Duration> {
        self.shared.last_change_ms().map(|last| {
            let now = self.clock.now().as_millis();
            I::Duration::from_millis(now.saturating_sub(last))
        })
    }

    /// Returns whether this button is the current interrupt delivery target.
    ///
    /// `false` after another button attaches, since attachments silently
    /// supersede each other.
    pub fn is_interrupt_target(&self) -> bool {
        interrupt::is_active(self.shared)
    }
}

impl<I: TimeInstant, P: ButtonPin, T: TimeSource<I>> DebouncedButton<'static, I, P, T> {
    /// Attaches this button for interrupt-driven toggling.
    ///
    /// Enables the pin's edge interrupt for `edge` and installs this
    /// button's state cell as the process-wide dispatch target, superseding
    /// any previously attached button. The platform ISR must route edges via
    /// [`crate::dispatch_edge`] or [`crate::dispatch_edge_at`].
    ///
    /// Only available when the clock and state cell have `'static` lifetime,
    /// since the ISR may fire at any later point in the program.
    pub fn attach_toggled_interrupt(&mut self, edge: EdgeMode) {
        self.pin.enable_edge_interrupt(edge);
        interrupt::set_active(self.shared, self.debounce_ms);
    }
}
