#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`DebouncedButton`**: Owns an input pin and maintains the debounced toggled state
//! - **`ToggleState`**: Interrupt-safe cell holding the toggled flag and debounce timestamp
//! - **`ButtonPin`**: Trait to implement for your GPIO hardware
//! - **`TimeSource`**: Trait to implement for your timing system
//! - **`InputMode`**: Electrical pin configuration (floating, pull-up, pull-down)
//! - **`EdgeMode`**: Which signal transitions fire the toggle routine
//! - **`ButtonState`**: The two-state machine (`Released`/`Pressed`) behind the toggled bool
//! - **`dispatch_edge`**: Entry point for the platform ISR in interrupt-driven mode
//!
//! The toggled state flips at most once per accepted edge; edges arriving
//! within the debounce interval of the last accepted one are rejected. Reads
//! are lock-free and safe against a concurrent interrupt-context toggle.

pub mod button;
pub mod interrupt;
pub mod state;
pub mod time;
pub mod types;

pub use button::{ButtonPin, DebouncedButton, DEFAULT_DEBOUNCE_MS};
pub use interrupt::{dispatch_edge, dispatch_edge_at};
pub use state::ToggleState;
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use types::{ButtonError, ButtonState, EdgeMode, InputMode};
