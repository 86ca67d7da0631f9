//! Debounced state and press latch for a whole channel word.
//!
//! Raw input is active-low: a `0` bit means the switch is closed. The
//! debounced state is inverted, so a `1` bit means "pressed and stable".
//! A channel only changes its debounced state after the raw input has
//! disagreed with it for [`CONFIRM_TICKS`](crate::CONFIRM_TICKS)
//! consecutive samples.

use crate::counter::VerticalCounter;
use crate::word::ChannelWord;

/// Run one sample through the counter and apply any rollovers to `state`.
///
/// Returns the channels whose debounced state toggled.
#[inline]
pub(crate) fn advance<W: ChannelWord>(
    state: &mut W,
    counter: &mut VerticalCounter<W>,
    raw: W,
) -> W {
    let changed = *state ^ !raw;
    let toggled = counter.step(changed);
    *state ^= toggled;
    toggled
}

/// Single-context debouncer.
///
/// Owns the debounced state, the pending press latch and the counters.
/// Use it where sampling and polling happen on the same thread of
/// execution; for a timer interrupt paired with a main loop see
/// [`SharedKeys`](crate::SharedKeys) and [`Sampler`](crate::Sampler).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Debouncer<W = u8> {
    state: W,
    press: W,
    counter: VerticalCounter<W>,
}

impl<W: ChannelWord> Debouncer<W> {
    /// Create a debouncer that takes `raw` as the stable starting point.
    ///
    /// Switches already closed at startup count as pressed but never
    /// produce a press event.
    pub fn new(raw: W) -> Self {
        Self {
            state: !raw,
            press: W::NONE,
            counter: VerticalCounter::new(),
        }
    }

    /// Feed one raw sample. Call this once per tick.
    ///
    /// Returns the channels whose debounced state toggled on this tick,
    /// both presses and releases.
    pub fn sample(&mut self, raw: W) -> W {
        let toggled = advance(&mut self.state, &mut self.counter, raw);
        // 0 -> 1: press detected
        self.press |= self.state & toggled;
        toggled
    }

    /// Debounced state, `1` = pressed.
    pub fn state(&self) -> W {
        self.state
    }

    /// Presses that have not been acknowledged yet.
    pub fn pending(&self) -> W {
        self.press
    }

    /// Report and clear the pending presses selected by `mask`.
    ///
    /// Bits outside `mask` are neither reported nor cleared.
    pub fn poll_and_ack(&mut self, mask: W) -> W {
        let matched = mask & self.press;
        self.press ^= matched;
        matched
    }
}
