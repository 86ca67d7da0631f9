//! Two-button debounce demo for the ATmega328P.
//!
//! - Buttons on PC0/PC1 (active low, internal pull-ups)
//! - Timer0 overflow interrupt samples and debounces the whole key port
//! - Main loop toggles LED n on PBn for every press of button n

#![no_std]
#![no_main]
#![feature(abi_avr_interrupt)]

mod keys;
mod leds;
mod timer;

use avr_device::atmega328p::Peripherals;

use keys::{KEY0, KEY1};
use leds::{LED0, LED1};
use timer::KEYS;

/// Panic handler — on AVR we just loop forever.
#[panic_handler]
fn panic(_info: &core::panic::PanicInfo) -> ! {
    loop {}
}

/// Main entry point.
#[no_mangle]
pub extern "C" fn main() -> ! {
    let dp = unsafe { Peripherals::steal() };

    keys::init_gpio(&dp);
    leds::init_gpio(&dp);

    // Baseline taken before the first tick: no action on keys held during reset
    timer::init(&dp);

    unsafe { avr_device::interrupt::enable() };

    loop {
        if KEYS.poll_and_ack(1 << KEY0) != 0 {
            leds::toggle(&dp, LED0);
        }

        if KEYS.poll_and_ack(1 << KEY1) != 0 {
            leds::toggle(&dp, LED1);
        }
    }
}
