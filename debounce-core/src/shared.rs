//! Debouncer split between a timer interrupt and the main loop.
//!
//! [`SharedKeys`] is the part both sides see. It lives in a `static` and
//! only holds the published debounced state and the press latch.
//! [`Sampler`] is owned by the tick context and keeps the counters, so the
//! only word both contexts write is the press latch.

use core::cell::Cell;

use critical_section::{CriticalSection, Mutex};

use crate::counter::VerticalCounter;
use crate::debouncer::advance;
use crate::word::ChannelWord;

/// Key words shared between the sampler and its consumers.
pub struct SharedKeys<W = u8> {
    state: Mutex<Cell<W>>,
    press: Mutex<Cell<W>>,
}

impl<W: ChannelWord> SharedKeys<W> {
    /// Empty key words, fit for a `static`.
    ///
    /// Nothing is meaningful until a [`Sampler`] has been initialized
    /// against it.
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(Cell::new(W::NONE)),
            press: Mutex::new(Cell::new(W::NONE)),
        }
    }

    /// Debounced state, `1` = pressed. For level-triggered logic.
    pub fn state(&self) -> W {
        critical_section::with(|cs| self.state.borrow(cs).get())
    }

    /// Presses that have not been acknowledged yet, without clearing them.
    pub fn pending(&self) -> W {
        critical_section::with(|cs| self.press.borrow(cs).get())
    }

    /// Report and clear the pending presses selected by `mask`.
    ///
    /// The read and the clear happen in one critical section, so a press
    /// latched by the sampler is reported exactly once.
    pub fn poll_and_ack(&self, mask: W) -> W {
        critical_section::with(|cs| {
            let press = self.press.borrow(cs);
            let matched = mask & press.get();
            press.set(press.get() ^ matched);
            matched
        })
    }

    fn publish(&self, cs: CriticalSection<'_>, state: W, pressed: W) {
        self.state.borrow(cs).set(state);
        let press = self.press.borrow(cs);
        press.set(press.get() | pressed);
    }
}

impl<W: ChannelWord> Default for SharedKeys<W> {
    fn default() -> Self {
        Self::new()
    }
}

/// Tick-side half of the debouncer.
///
/// Sole writer of the debounced state. Must not be ticked re-entrantly;
/// keep it behind the tick context's own critical section.
#[derive(Clone, Copy, Debug)]
pub struct Sampler<W = u8> {
    state: W,
    counter: VerticalCounter<W>,
}

impl<W: ChannelWord> Sampler<W> {
    /// Take `raw` as the stable starting point and reset `keys`.
    ///
    /// Call this before the tick source is enabled. Switches already
    /// closed at this point never produce a press event.
    pub fn init(cs: CriticalSection<'_>, keys: &SharedKeys<W>, raw: W) -> Self {
        let sampler = Self {
            state: !raw,
            counter: VerticalCounter::new(),
        };
        keys.state.borrow(cs).set(sampler.state);
        keys.press.borrow(cs).set(W::NONE);
        sampler
    }

    /// Feed one raw sample and publish the result to `keys`.
    ///
    /// Returns the channels whose debounced state toggled on this tick.
    pub fn tick(&mut self, cs: CriticalSection<'_>, keys: &SharedKeys<W>, raw: W) -> W {
        let toggled = advance(&mut self.state, &mut self.counter, raw);
        keys.publish(cs, self.state, self.state & toggled);
        toggled
    }

    /// Debounced state as last published.
    pub fn state(&self) -> W {
        self.state
    }
}
