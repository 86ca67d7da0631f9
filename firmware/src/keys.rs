//! Key port for the two push buttons.
//!
//! The buttons sit between PC0/PC1 and GND, so a closed switch reads as
//! `0`. The whole port is read as one channel word; unused pins are held
//! high by their pull-ups and read as released.

use avr_device::atmega328p::Peripherals;

/// Bit of the key port carrying button 0.
pub const KEY0: u8 = 0;
/// Bit of the key port carrying button 1.
pub const KEY1: u8 = 1;

/// Configure all of PORTC as inputs with pull-ups.
pub fn init_gpio(dp: &Peripherals) {
    let portc = &dp.PORTC;

    // DDRC = 0: input
    portc.ddrc.write(|w| unsafe { w.bits(0x00) });
    // PORTC = 0xFF: pull-ups on
    portc.portc.write(|w| unsafe { w.bits(0xFF) });
}

/// Read the raw key word (active low).
#[inline(always)]
pub fn read_raw(dp: &Peripherals) -> u8 {
    dp.PORTC.pinc.read().bits()
}
