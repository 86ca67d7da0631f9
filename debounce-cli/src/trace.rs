use anyhow::{bail, Context, Result};

/// Raw value at startup when a trace has no `init` line: all keys released.
pub const DEFAULT_BOOT: u8 = 0xFF;

/// One statement of an input trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Feed `raw` to the sampler for `repeat` consecutive ticks.
    Tick { raw: u8, repeat: u32 },
    /// Acknowledge the pending presses selected by `mask`.
    Poll { mask: u8 },
}

/// A parsed input trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    pub boot: u8,
    pub steps: Vec<Step>,
}

/// Parse a text trace into a boot value and a list of steps.
///
/// Supported statements, one per line:
/// - `init <word>`: raw value at startup (first statement only)
/// - `<word> [xN]` or `tick <word> [xN]`: raw sample, optionally repeated
/// - `poll <mask>`: acknowledge pending presses
///
/// Blank lines and `#` comments are ignored.
pub fn parse_trace(input: &str) -> Result<Trace> {
    let mut boot = None;
    let mut steps = Vec::new();

    for (line_num, line) in input.lines().enumerate() {
        let line = match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        };
        let mut words = line.split_whitespace();
        let Some(first) = words.next() else {
            continue;
        };
        let rest: Vec<&str> = words.collect();

        match first {
            "init" => {
                if boot.is_some() || !steps.is_empty() {
                    bail!("line {}: init must be the first statement", line_num + 1);
                }
                let [word] = rest.as_slice() else {
                    bail!("line {}: init takes exactly one word", line_num + 1);
                };
                boot = Some(
                    parse_word(word).with_context(|| format!("line {}", line_num + 1))?,
                );
            }
            "poll" => {
                let [word] = rest.as_slice() else {
                    bail!("line {}: poll takes exactly one mask", line_num + 1);
                };
                let mask = parse_word(word).with_context(|| format!("line {}", line_num + 1))?;
                steps.push(Step::Poll { mask });
            }
            "tick" => {
                let step = parse_tick(&rest).with_context(|| format!("line {}", line_num + 1))?;
                steps.push(step);
            }
            _ => {
                let mut args = Vec::with_capacity(rest.len() + 1);
                args.push(first);
                args.extend_from_slice(&rest);
                let step = parse_tick(&args).with_context(|| format!("line {}", line_num + 1))?;
                steps.push(step);
            }
        }
    }

    Ok(Trace {
        boot: boot.unwrap_or(DEFAULT_BOOT),
        steps,
    })
}

fn parse_tick(args: &[&str]) -> Result<Step> {
    match *args {
        [word] => Ok(Step::Tick {
            raw: parse_word(word)?,
            repeat: 1,
        }),
        [word, count] => {
            let Some(count) = count.strip_prefix('x') else {
                bail!("expected repeat count like x4, got {:?}", count);
            };
            let repeat: u32 = count
                .parse()
                .with_context(|| format!("invalid repeat count {:?}", count))?;
            if repeat == 0 {
                bail!("repeat count must be at least 1");
            }
            Ok(Step::Tick {
                raw: parse_word(word)?,
                repeat,
            })
        }
        _ => bail!("expected a raw word and an optional repeat count"),
    }
}

/// Parse an 8-bit channel word in `0b`, `0x` or decimal notation.
pub fn parse_word(text: &str) -> Result<u8> {
    let digits: String = text.chars().filter(|&c| c != '_').collect();
    let (digits, radix) = if let Some(bin) = digits.strip_prefix("0b") {
        (bin, 2)
    } else if let Some(hex) = digits.strip_prefix("0x") {
        (hex, 16)
    } else {
        (digits.as_str(), 10)
    };
    if digits.is_empty() {
        bail!("empty word {:?}", text);
    }
    let value =
        u32::from_str_radix(digits, radix).with_context(|| format!("invalid word {:?}", text))?;
    u8::try_from(value).with_context(|| format!("word {:?} does not fit in 8 channels", text))
}
