//! Timer0 overflow as the debounce tick.
//!
//! Timer0 runs free at clk/8 and overflows every 256 counts, so at 16MHz
//! the sampler runs every 128us and a press is confirmed after 4 ticks.
//! Slow the prescaler down for noisier switches.

use core::cell::RefCell;

use avr_device::atmega328p::Peripherals;
use critical_section::Mutex;
use debounce_core::{Sampler, SharedKeys};

use crate::keys;

/// Debounced key state and pending presses, read by the main loop.
pub static KEYS: SharedKeys<u8> = SharedKeys::new();

/// Counters, only touched by the overflow interrupt once installed.
static SAMPLER: Mutex<RefCell<Option<Sampler<u8>>>> = Mutex::new(RefCell::new(None));

/// Seed the debouncer from the current key levels and start Timer0.
///
/// Must run before interrupts are enabled, so keys held at reset never
/// register as a press.
pub fn init(dp: &Peripherals) {
    critical_section::with(|cs| {
        let sampler = Sampler::init(cs, &KEYS, keys::read_raw(dp));
        SAMPLER.borrow_ref_mut(cs).replace(sampler);
    });

    let tc0 = &dp.TC0;
    tc0.tccr0b.write(|w| w.cs0().prescale_8());
    tc0.timsk0.write(|w| w.toie0().set_bit());
}

#[avr_device::interrupt(atmega328p)]
fn TIMER0_OVF() {
    // Only PINC is read here
    let dp = unsafe { Peripherals::steal() };
    let raw = keys::read_raw(&dp);

    critical_section::with(|cs| {
        if let Some(sampler) = SAMPLER.borrow_ref_mut(cs).as_mut() {
            sampler.tick(cs, &KEYS, raw);
        }
    });
}
