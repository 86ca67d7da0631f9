use std::fmt;

use debounce_core::Debouncer;

use crate::trace::{Step, Trace};

/// What happened at one point of a replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Record {
    /// A raw sample was fed in. `tick` counts from 1.
    Tick {
        tick: u32,
        raw: u8,
        state: u8,
        pending: u8,
        toggled: u8,
    },
    /// Pending presses were acknowledged after tick `tick`.
    Poll { tick: u32, mask: u8, matched: u8 },
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Record::Tick {
                tick,
                raw,
                state,
                pending,
                toggled,
            } => write!(
                f,
                "tick {:>5}  raw {:08b}  state {:08b}  pending {:08b}  toggled {:08b}",
                tick, raw, state, pending, toggled
            ),
            Record::Poll {
                tick,
                mask,
                matched,
            } => write!(f, "poll @{:>4}  mask {:08b}  -> {:08b}", tick, mask, matched),
        }
    }
}

/// Run a trace through a fresh debouncer.
pub fn replay(trace: &Trace) -> Vec<Record> {
    let mut debouncer: Debouncer<u8> = Debouncer::new(trace.boot);
    let mut records = Vec::new();
    let mut tick = 0u32;

    for step in &trace.steps {
        match *step {
            Step::Tick { raw, repeat } => {
                for _ in 0..repeat {
                    tick += 1;
                    let toggled = debouncer.sample(raw);
                    records.push(Record::Tick {
                        tick,
                        raw,
                        state: debouncer.state(),
                        pending: debouncer.pending(),
                        toggled,
                    });
                }
            }
            Step::Poll { mask } => {
                let matched = debouncer.poll_and_ack(mask);
                records.push(Record::Poll {
                    tick,
                    mask,
                    matched,
                });
            }
        }
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::parse_trace;

    fn polls(records: &[Record]) -> Vec<(u32, u8)> {
        records
            .iter()
            .filter_map(|r| match *r {
                Record::Poll { tick, matched, .. } => Some((tick, matched)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_press_held_for_ten_ticks() {
        let trace = parse_trace(
            "0b1111_1110 x5\n\
             poll 0b1\n\
             0b1111_1110\n\
             poll 0b1\n\
             0b1111_1110 x4\n",
        )
        .unwrap();
        let records = replay(&trace);

        let state_at = |n: u32| {
            records.iter().find_map(|r| match *r {
                Record::Tick { tick, state, pending, .. } if tick == n => Some((state, pending)),
                _ => None,
            })
        };
        assert_eq!(state_at(3), Some((0, 0)));
        assert_eq!(state_at(4), Some((1, 1)));
        assert_eq!(state_at(10), Some((1, 0)));
        assert_eq!(polls(&records), vec![(5, 0b1), (6, 0)]);
    }

    #[test]
    fn test_pressed_at_boot() {
        let trace = parse_trace("init 0b1111_1110\npoll 0b1\n0b1111_1110 x8\npoll 0b1\n").unwrap();
        assert_eq!(polls(&replay(&trace)), vec![(0, 0), (8, 0)]);
    }

    #[test]
    fn test_bouncing_press() {
        let trace = parse_trace(
            "0xFE\n0xFF\n0xFE\n0xFE\n0xFF\n0xFE x4\n0xFF\n0xFE\npoll 0xFF\npoll 0xFF\n",
        )
        .unwrap();
        let records = replay(&trace);

        let toggles = records
            .iter()
            .filter(|r| matches!(r, Record::Tick { toggled, .. } if *toggled != 0))
            .count();
        assert_eq!(toggles, 1);
        assert_eq!(polls(&records), vec![(11, 0b1), (11, 0)]);
    }

    #[test]
    fn test_bundled_trace() {
        let trace = parse_trace(include_str!("../../traces/bouncy_press.trace")).unwrap();
        let records = replay(&trace);

        assert_eq!(polls(&records), vec![(11, 0b01), (11, 0), (19, 0)]);
        // Key 1 held since reset stays pressed without ever being reported
        let last_state = records.iter().rev().find_map(|r| match *r {
            Record::Tick { state, .. } => Some(state),
            _ => None,
        });
        assert_eq!(last_state, Some(0b10));
    }

    #[test]
    fn test_display() {
        let record = Record::Poll {
            tick: 5,
            mask: 0b1,
            matched: 0b1,
        };
        assert_eq!(record.to_string(), "poll @   5  mask 00000001  -> 00000001");
    }
}
