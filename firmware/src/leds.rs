//! Indicator LEDs on PB0 and PB1, wired to GND.

use avr_device::atmega328p::Peripherals;

pub const LED0: u8 = 0;
pub const LED1: u8 = 1;

/// Drive PORTB low (LEDs off) and make the whole port an output.
pub fn init_gpio(dp: &Peripherals) {
    let portb = &dp.PORTB;

    portb.portb.write(|w| unsafe { w.bits(0x00) });
    portb.ddrb.write(|w| unsafe { w.bits(0xFF) });
}

/// Flip a single LED.
pub fn toggle(dp: &Peripherals, led: u8) {
    dp.PORTB
        .portb
        .modify(|r, w| unsafe { w.bits(r.bits() ^ (1 << led)) });
}
