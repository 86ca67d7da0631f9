//! Channel words: one bit per switch.
//!
//! The debounce arithmetic never looks at individual bits, so any unsigned
//! integer works as the channel word. `u8` is the width the firmware uses;
//! `u16` and `u32` are there for wider key ports.

use core::fmt::{Binary, Debug};
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

/// A fixed-width word where bit `n` carries channel `n`.
pub trait ChannelWord:
    Copy
    + Eq
    + Debug
    + Binary
    + Not<Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + BitAndAssign
    + BitOrAssign
    + BitXorAssign
{
    /// No channel selected.
    const NONE: Self;
    /// Every channel selected.
    const ALL: Self;
    /// Number of channels carried by the word.
    const CHANNELS: u32;

    /// Word with only channel `n` set. Out-of-range channels yield `NONE`.
    fn channel(n: u32) -> Self;
}

macro_rules! impl_channel_word {
    ($T:ty) => {
        impl ChannelWord for $T {
            const NONE: Self = 0;
            const ALL: Self = <$T>::MAX;
            const CHANNELS: u32 = <$T>::BITS;

            #[inline]
            fn channel(n: u32) -> Self {
                (1 as $T).checked_shl(n).unwrap_or(0)
            }
        }
    };
}

impl_channel_word!(u8);
impl_channel_word!(u16);
impl_channel_word!(u32);
