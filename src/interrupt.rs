//! Process-wide interrupt dispatch for the active button.
//!
//! Hardware edge interrupts carry no instance context, so the crate keeps a
//! single slot naming the button currently attached for interrupt delivery.
//! Platform glue calls [`dispatch_edge`] (or [`dispatch_edge_at`]) from its
//! ISR body; the slot routes the edge into the attached button's debounce
//! gate. Attaching another button replaces the slot silently; there is no
//! explicit detach.

use core::cell::Cell;

use critical_section::Mutex;

use crate::state::ToggleState;
use crate::time::TimeInstant;

/// Registration record for the button currently receiving edge events.
#[derive(Clone, Copy)]
struct ActiveButton {
    state: &'static ToggleState,
    debounce_ms: u64,
}

/// The one process-wide slot. Only the most recently attached button
/// receives dispatch.
static ACTIVE: Mutex<Cell<Option<ActiveButton>>> = Mutex::new(Cell::new(None));

/// Installs `state` as the interrupt delivery target, superseding any
/// previous attachment.
pub(crate) fn set_active(state: &'static ToggleState, debounce_ms: u64) {
    critical_section::with(|cs| {
        ACTIVE
            .borrow(cs)
            .set(Some(ActiveButton { state, debounce_ms }));
    });
}

/// Returns whether `state` is the current interrupt delivery target.
pub(crate) fn is_active(state: &ToggleState) -> bool {
    critical_section::with(|cs| {
        ACTIVE
            .borrow(cs)
            .get()
            .is_some_and(|active| core::ptr::eq(active.state, state))
    })
}

/// Routes a hardware edge observed at `now` into the attached button.
///
/// Call this from the platform's edge interrupt handler. Returns whether the
/// edge was accepted by the debounce gate; returns `false` when no button is
/// attached (the edge is dropped).
#[inline]
pub fn dispatch_edge<I: TimeInstant>(now: I) -> bool {
    dispatch_edge_at(now.as_millis())
}

/// Millisecond-timestamp variant of [`dispatch_edge`], for ISRs that read a
/// raw tick counter rather than construct an instant.
pub fn dispatch_edge_at(now_ms: u64) -> bool {
    let active = critical_section::with(|cs| ACTIVE.borrow(cs).get());
    match active {
        Some(button) => button.state.service(now_ms, button.debounce_ms),
        None => false,
    }
}
