//! Two-bit vertical counter.
//!
//! Bit `n` of `ct0` and bit `n` of `ct1` together form a 2-bit counter for
//! channel `n`, so a single pass over two words advances every channel at
//! once. A channel whose `changed` bit is clear is forced back to the
//! settled value (both bits set). A channel whose `changed` bit stays set
//! walks through `10 -> 01 -> 00 -> 11` (as `ct1 ct0`) and reports a
//! rollover on the fourth step, landing back on the settled value.

use crate::word::ChannelWord;

/// Number of consecutive disagreeing samples before a channel rolls over.
pub const CONFIRM_TICKS: u32 = 4;

/// Per-channel 2-bit counters packed into two channel words.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VerticalCounter<W = u8> {
    ct0: W,
    ct1: W,
}

impl<W: ChannelWord> VerticalCounter<W> {
    /// Counter with every channel settled.
    pub const SETTLED: Self = Self {
        ct0: W::ALL,
        ct1: W::ALL,
    };

    pub const fn new() -> Self {
        Self::SETTLED
    }

    /// Advance every channel flagged in `changed` and reset all others.
    ///
    /// Returns the channels that rolled over on this step.
    #[inline]
    pub fn step(&mut self, changed: W) -> W {
        self.ct0 = !(self.ct0 & changed);
        self.ct1 = self.ct0 ^ (self.ct1 & changed);
        changed & self.ct0 & self.ct1
    }

    /// Channels currently at the settled value.
    pub fn settled(&self) -> W {
        self.ct0 & self.ct1
    }
}

impl<W: ChannelWord> Default for VerticalCounter<W> {
    fn default() -> Self {
        Self::SETTLED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rolls_over_on_fourth_step() {
        let mut counter: VerticalCounter<u8> = VerticalCounter::new();

        for _ in 1..CONFIRM_TICKS {
            assert_eq!(counter.step(0b0000_0001), 0);
            assert_eq!(counter.settled() & 0b0000_0001, 0);
        }
        assert_eq!(counter.step(0b0000_0001), 0b0000_0001);

        // Rollover lands back on the settled value
        assert_eq!(counter, VerticalCounter::SETTLED);
    }

    #[test]
    fn test_count_sequence() {
        let mut counter: VerticalCounter<u8> = VerticalCounter::new();
        let mut seen = [(0u8, 0u8); 4];
        for slot in seen.iter_mut() {
            counter.step(0xFF);
            *slot = (counter.ct1, counter.ct0);
        }
        assert_eq!(seen, [(0xFF, 0x00), (0x00, 0xFF), (0x00, 0x00), (0xFF, 0xFF)]);
    }

    #[test]
    fn test_agreement_resets() {
        let mut counter: VerticalCounter<u8> = VerticalCounter::new();

        // Three steps in, one short of rolling over
        counter.step(0b0000_0100);
        counter.step(0b0000_0100);
        counter.step(0b0000_0100);
        assert_ne!(counter, VerticalCounter::SETTLED);

        // A single agreeing sample puts the channel straight back
        assert_eq!(counter.step(0), 0);
        assert_eq!(counter, VerticalCounter::SETTLED);

        // and counting starts over
        for _ in 1..CONFIRM_TICKS {
            assert_eq!(counter.step(0b0000_0100), 0);
        }
        assert_eq!(counter.step(0b0000_0100), 0b0000_0100);
    }

    #[test]
    fn test_channels_are_independent() {
        let mut counter: VerticalCounter<u8> = VerticalCounter::new();

        // Channel 0 starts two steps ahead of channel 1
        counter.step(0b01);
        counter.step(0b01);
        assert_eq!(counter.step(0b11), 0);
        assert_eq!(counter.step(0b11), 0b01);
        assert_eq!(counter.step(0b10), 0);
        assert_eq!(counter.step(0b10), 0b10);
    }

    #[test]
    fn test_wide_word() {
        let mut counter: VerticalCounter<u32> = VerticalCounter::new();
        let changed = 0x8000_0001;
        for _ in 1..CONFIRM_TICKS {
            assert_eq!(counter.step(changed), 0);
        }
        assert_eq!(counter.step(changed), changed);
    }
}
