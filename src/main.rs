//! Heritage Village - Entry Point
//!
//! Interactive text driver for the settlement engine. With `--frames` it
//! runs headless: executes the `--exec` commands, plays the given number of
//! frames and prints the final state.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use heritage_village::command::{Command, CommandExecutor, HELP};
use heritage_village::core::config::SettlementConfig;
use heritage_village::core::error::Result;
use heritage_village::simulation::settlement::{GamePhase, Settlement};
use heritage_village::ui::state::Hud;
use heritage_village::world::placement::PlacementGrid;

/// Heritage Village settlement simulation
#[derive(Parser, Debug)]
#[command(name = "heritage-village")]
#[command(about = "Grow a village: place buildings, balance resources, watch the days pass")]
struct Args {
    /// Settlement config (TOML); stock values when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Run headless for this many frames, then print the final state
    #[arg(long)]
    frames: Option<u32>,

    /// Seconds of frame time per simulated frame
    #[arg(long, default_value_t = 1.0 / 60.0)]
    frame_secs: f64,

    /// Command to run before the frames start (repeatable), e.g. "build farm 4 6"
    #[arg(long = "exec")]
    exec: Vec<String>,

    /// Print the final state as JSON instead of the HUD
    #[arg(long)]
    json: bool,

    /// Print the stock configuration as TOML and exit
    #[arg(long)]
    dump_config: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("heritage_village=info")),
        )
        .init();

    let args = Args::parse();

    if args.dump_config {
        print!("{}", SettlementConfig::default().to_toml_string()?);
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading settlement config");
            SettlementConfig::load_from_toml(path)?
        }
        None => SettlementConfig::default(),
    };

    let grid = PlacementGrid::from_config(&config.placement);
    let executor = CommandExecutor::new(grid, args.frame_secs);
    let mut settlement = Settlement::with_config(config);

    tracing::info!("Heritage Village starting...");

    match args.frames {
        Some(frames) => run_headless(&mut settlement, &executor, &args, frames),
        None => run_interactive(&mut settlement, &executor),
    }
}

fn run_headless(
    settlement: &mut Settlement,
    executor: &CommandExecutor,
    args: &Args,
    frames: u32,
) -> Result<()> {
    settlement.set_phase(GamePhase::Playing);

    for line in &args.exec {
        let command: Command = line.parse()?;
        let result = executor.execute(settlement, &command)?;
        tracing::debug!(command = %line, output = %result.output, "exec");
    }

    for _ in 0..frames {
        settlement.advance_frame(args.frame_secs);
        for event in settlement.take_events() {
            tracing::debug!(?event, "settlement event");
        }
    }

    tracing::info!(
        frames,
        buildings = settlement.buildings().len(),
        season = settlement.season(),
        "Headless run complete"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&settlement.snapshot())?);
    } else {
        println!("{}", Hud::from_settlement(settlement));
    }
    Ok(())
}

fn run_interactive(settlement: &mut Settlement, executor: &CommandExecutor) -> Result<()> {
    println!("\n=== HERITAGE VILLAGE ===");
    println!("Build a sustainable village. Type 'start' to begin.");
    println!();
    println!("{HELP}");
    println!();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let command: Command = match input.parse() {
            Ok(command) => command,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        let result = executor.execute(settlement, &command)?;
        if result.quit {
            break;
        }
        if !result.output.is_empty() {
            println!("{}", result.output);
        }
    }

    println!("Goodbye!");
    Ok(())
}
