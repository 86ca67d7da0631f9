mod demo;
mod replay;
mod trace;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "debounce-cli")]
#[command(about = "Host simulator for the 8-key debouncer")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Replay a raw input trace and print state and polls tick by tick
    Replay {
        /// Path to the trace file
        file: String,
        /// Only print ticks where the debounced state changed, and polls
        #[arg(long)]
        changes: bool,
    },
    /// Run the sampler on its own thread against a bouncy two-button script
    Demo {
        /// Sampler tick period in milliseconds
        #[arg(long, default_value_t = 2)]
        period_ms: u64,
        /// Presses per key
        #[arg(long, default_value_t = 5)]
        presses: u32,
        /// Contact bounces around each press and release
        #[arg(long, default_value_t = 3)]
        bounces: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Replay { file, changes } => {
            let contents =
                fs::read_to_string(&file).with_context(|| format!("reading {}", file))?;
            let parsed = trace::parse_trace(&contents).context("parsing trace")?;

            println!("Boot: raw {:08b}, state {:08b}", parsed.boot, !parsed.boot);

            for record in replay::replay(&parsed) {
                let quiet = matches!(record, replay::Record::Tick { toggled: 0, .. });
                if changes && quiet {
                    continue;
                }
                println!("{}", record);
            }
        }
        Command::Demo {
            period_ms,
            presses,
            bounces,
        } => {
            if presses == 0 {
                bail!("--presses must be at least 1");
            }

            let config = demo::DemoConfig {
                period: Duration::from_millis(period_ms),
                presses,
                bounces,
            };

            let pb = ProgressBar::new(0);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{msg} [{bar:40.cyan/blue}] {pos}/{len} ticks")
                    .context("building progress style")?
                    .progress_chars("=> "),
            );
            pb.set_message("Sampling");

            let report = demo::run(&config, &pb, |index, leds| {
                pb.println(format!(
                    "key {} pressed, LEDs {:02b}",
                    demo::KEYS[index],
                    leds
                ));
            });

            pb.finish_with_message("Done");

            println!(
                "{} ticks, presses seen: key0 {}, key1 {} (of {} each)",
                report.ticks, report.seen[0], report.seen[1], presses
            );
            if report.seen.iter().any(|&n| n != presses) {
                eprintln!("Some presses coalesced before the main loop polled them.");
            }
        }
    }

    Ok(())
}
