use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use simplelog::WriteLogger;

use gridsnake::app::App;
use gridsnake::config::GameConfig;

/// Classic grid snake in the terminal.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Playfield width in cells
    #[arg(long, default_value_t = 40)]
    width: u16,
    /// Playfield height in cells
    #[arg(long, default_value_t = 30)]
    height: u16,
    /// Terminal columns per cell
    #[arg(long, default_value_t = 2)]
    cell_width: u16,
    /// Terminal rows per cell
    #[arg(long, default_value_t = 1)]
    cell_height: u16,
    /// Simulation ticks per second
    #[arg(long, default_value_t = 15)]
    tick_rate: u32,
    /// Points awarded per food item
    #[arg(long, default_value_t = 10)]
    reward: u32,
    /// Starting snake length in cells
    #[arg(long, default_value_t = 1)]
    initial_length: usize,
    /// Seed for the food spawner, for reproducible sessions
    #[arg(long)]
    seed: Option<u64>,
    /// Write event logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        let file = File::create(path)
            .with_context(|| format!("could not create log file {}", path.display()))?;
        WriteLogger::init(LevelFilter::Info, simplelog::Config::default(), file)?;
    }

    let config = GameConfig {
        grid_width: cli.width,
        grid_height: cli.height,
        cell_size: (cli.cell_width, cli.cell_height),
        tick_rate: cli.tick_rate,
        food_reward: cli.reward,
        initial_length: cli.initial_length,
    };

    info!("starting a {}x{} session", config.grid_width, config.grid_height);
    let score = App::new(&config, cli.seed)?.run()?;
    println!("Final score: {}", score);

    Ok(())
}
