//! Time abstraction traits for platform-agnostic debounce timing.

/// Trait for abstracting monotonic time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

/// Trait abstraction for instant types.
///
/// Instants must be convertible to milliseconds since the clock's zero point
/// (typically boot), so debounce bookkeeping can live in fixed-width atomic
/// fields shared with interrupt context.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Milliseconds elapsed since the clock's zero point.
    fn as_millis(&self) -> u64;
}
