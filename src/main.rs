//! calcpad entry point.
//!
//! Replays key labels through a `Calculator` and prints what the screen
//! would show. All calculator behavior lives in the library.

use anyhow::{Context, Result};
use calcpad::keys::parse_sequence;
use calcpad::machine::Calculator;
use clap::Parser;

#[derive(Parser)]
#[command(name = "calcpad")]
#[command(about = "Replay keypad presses and print the display", long_about = None)]
struct Cli {
    /// Print every applied press with the display it produced
    #[arg(long, default_value_t = false)]
    tape: bool,

    /// Print the final state as JSON instead of the display
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Keys: 0-9 . + − × ÷ = C AC (ASCII - * x / also accepted)
    #[arg(required = true, allow_hyphen_values = true)]
    keys: Vec<String>,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let input = cli.keys.join(" ");
    let events = parse_sequence(&input).with_context(|| format!("cannot read keys '{input}'"))?;

    // The whole replay fits on the tape.
    let mut calculator = if cli.tape {
        Calculator::with_tape_capacity(events.len())
    } else {
        Calculator::with_tape_capacity(0)
    };
    calculator.press_all(events);

    if cli.tape {
        let history = calculator.history();
        for record in history.transitions() {
            println!("{:>3}  {}", record.event.to_string(), record.to.display);
        }
        let elapsed = history.duration().unwrap_or_default();
        println!("--- {} presses in {:?}", history.len(), elapsed);
    }

    if cli.json {
        let json = serde_json::to_string_pretty(calculator.current_state())
            .context("serialize calculator state")?;
        println!("{json}");
    } else {
        println!("{}", calculator.display());
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .init();
}
