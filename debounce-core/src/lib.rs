//! Bit-parallel key debouncing.
//!
//! Debounces up to one word of mechanical switches at a time using a
//! 2-bit vertical counter per channel. Every channel is processed with
//! whole-word bitwise operations, so sampling eight keys costs the same as
//! sampling one.
//!
//! Raw input is active-low (`0` = switch closed). The debounced state is
//! inverted (`1` = pressed), and a channel changes state only after
//! [`CONFIRM_TICKS`] consecutive samples disagree with it. Each press is
//! latched until it is acknowledged with `poll_and_ack`.
//!
//! This crate is `no_std` so it can be used by both the AVR firmware and
//! the host simulator.
//!
//! ```
//! use debounce_core::Debouncer;
//!
//! // Key 0 is released at startup
//! let mut keys: Debouncer = Debouncer::new(0b1111_1111);
//!
//! for _ in 0..4 {
//!     keys.sample(0b1111_1110);
//! }
//! assert_eq!(keys.state(), 0b0000_0001);
//! assert_eq!(keys.poll_and_ack(0b0000_0001), 0b0000_0001);
//! assert_eq!(keys.poll_and_ack(0b0000_0001), 0);
//! ```

#![cfg_attr(not(test), no_std)]

mod counter;
mod debouncer;
mod shared;
mod word;

pub use counter::{VerticalCounter, CONFIRM_TICKS};
pub use debouncer::Debouncer;
pub use shared::{Sampler, SharedKeys};
pub use word::ChannelWord;

/// Re-exported so callers can name the critical section token.
pub use critical_section;
