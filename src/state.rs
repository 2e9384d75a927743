//! Interrupt-safe shared toggle state.
//!
//! Provides [`ToggleState`], the cell that holds a button's toggled flag and
//! debounce timestamp. The cell is the single point of mutation for the
//! toggled value and is safe to update from interrupt context while the main
//! flow reads it: both fields are fixed-width atomics, so a concurrent read
//! observes either the pre- or post-toggle value, never a torn one.

use portable_atomic::{AtomicBool, AtomicU64, Ordering};

/// Timestamp sentinel meaning "no edge accepted yet".
///
/// Lets the very first edge pass the debounce gate unconditionally, which a
/// zero-initialized timestamp would not (an edge at t=0 must be accepted).
const NEVER: u64 = u64::MAX;

/// Shared toggle cell for a single button.
///
/// One cell per physical button, usually allocated in a `static` so the
/// interrupt dispatch slot can hold a reference to it:
///
/// ```
/// use toggle_button::ToggleState;
///
/// static BUTTON_STATE: ToggleState = ToggleState::new();
/// assert!(!BUTTON_STATE.is_set());
/// ```
///
/// The expected access pattern is single-writer/single-reader: exactly one
/// context (the ISR, or the polling loop) calls [`service`](Self::service),
/// while any context may call [`is_set`](Self::is_set).
#[derive(Debug)]
pub struct ToggleState {
    toggled: AtomicBool,
    last_change_ms: AtomicU64,
}

impl ToggleState {
    /// Creates a cell in the released (`false`) state.
    pub const fn new() -> Self {
        Self {
            toggled: AtomicBool::new(false),
            last_change_ms: AtomicU64::new(NEVER),
        }
    }

    /// Returns the current toggled value.
    ///
    /// Pure read with no side effects; repeated calls without an intervening
    /// accepted edge return the same value.
    #[inline]
    pub fn is_set(&self) -> bool {
        self.toggled.load(Ordering::Acquire)
    }

    /// Runs the debounce gate for an edge observed at `now_ms`.
    ///
    /// Accepts the edge when no edge has been accepted yet, or when at least
    /// `interval_ms` has elapsed since the last accepted one (inclusive
    /// boundary). An accepted edge flips the toggled value and records
    /// `now_ms`; a rejected edge changes nothing. Returns whether the edge
    /// was accepted.
    pub(crate) fn service(&self, now_ms: u64, interval_ms: u64) -> bool {
        let last = self.last_change_ms.load(Ordering::Acquire);
        if last != NEVER && now_ms.saturating_sub(last) < interval_ms {
            return false;
        }

        self.toggled.fetch_xor(true, Ordering::AcqRel);
        self.last_change_ms.store(now_ms, Ordering::Release);
        true
    }

    /// Timestamp of the last accepted edge, if any.
    pub(crate) fn last_change_ms(&self) -> Option<u64> {
        match self.last_change_ms.load(Ordering::Acquire) {
            NEVER => None,
            ms => Some(ms),
        }
    }
}

impl Default for ToggleState {
    fn default() -> Self {
        Self::new()
    }
}
