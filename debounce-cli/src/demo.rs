//! Host rendition of the firmware: a sampler thread stands in for the
//! timer interrupt and the calling thread plays the main loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use debounce_core::{critical_section, Sampler, SharedKeys, CONFIRM_TICKS};
use indicatif::ProgressBar;

/// Keys driven by the demo, matching the firmware's two buttons.
pub const KEYS: [u8; 2] = [0, 1];

/// Nothing pressed.
const RELEASED: u8 = 0xFF;

#[derive(Debug, Clone, Copy)]
pub struct DemoConfig {
    /// Sampler tick period.
    pub period: Duration,
    /// Presses generated per key.
    pub presses: u32,
    /// Contact bounces before each press settles and after each release.
    pub bounces: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoReport {
    /// Ticks fed to the sampler.
    pub ticks: u64,
    /// Presses reported to the main loop, per key.
    pub seen: [u32; KEYS.len()],
    /// Final LED word, one bit per key.
    pub leds: u8,
}

/// Raw samples for one press of `key`: bouncing contact, a held press,
/// bouncing release, then a quiet gap.
pub fn bouncy_press(key: u8, bounces: u32) -> Vec<u8> {
    let down = RELEASED & !(1 << key);
    let hold = 2 * CONFIRM_TICKS;
    let mut samples = Vec::new();

    for _ in 0..bounces {
        samples.extend([down, RELEASED]);
    }
    samples.extend((0..hold).map(|_| down));
    for _ in 0..bounces {
        samples.extend([RELEASED, down]);
    }
    samples.extend((0..hold).map(|_| RELEASED));
    samples
}

/// Full raw input script: keys take turns until each has been pressed
/// `presses` times.
pub fn script(config: &DemoConfig) -> Vec<u8> {
    (0..config.presses)
        .flat_map(|_| KEYS.iter().flat_map(|&key| bouncy_press(key, config.bounces)))
        .collect()
}

/// Run the sampler and the main loop until the script is exhausted.
///
/// `on_toggle` is called from the main loop with the key index and the new
/// LED word every time a press is acknowledged.
pub fn run(
    config: &DemoConfig,
    progress: &ProgressBar,
    mut on_toggle: impl FnMut(usize, u8),
) -> DemoReport {
    let keys: SharedKeys<u8> = SharedKeys::new();
    let done = AtomicBool::new(false);
    let samples = script(config);

    progress.set_length(samples.len() as u64);

    // Nothing pressed at boot
    let mut sampler = critical_section::with(|cs| Sampler::init(cs, &keys, RELEASED));

    let mut seen = [0u32; KEYS.len()];
    let mut leds = 0u8;

    thread::scope(|s| {
        s.spawn(|| {
            for &raw in &samples {
                critical_section::with(|cs| sampler.tick(cs, &keys, raw));
                progress.inc(1);
                thread::sleep(config.period);
            }
            done.store(true, Ordering::Release);
        });

        loop {
            let finished = done.load(Ordering::Acquire);
            for (index, &key) in KEYS.iter().enumerate() {
                if keys.poll_and_ack(1 << key) != 0 {
                    leds ^= 1 << key;
                    seen[index] += 1;
                    on_toggle(index, leds);
                }
            }
            if finished {
                break;
            }
            thread::sleep(config.period / 4);
        }
    });

    DemoReport {
        ticks: samples.len() as u64,
        seen,
        leds,
    }
}
