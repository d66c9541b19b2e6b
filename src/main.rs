use anyhow::Result;
use autosnake::game::GameConfig;
use autosnake::modes::AutoMode;
use clap::Parser;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "autosnake")]
#[command(version, about = "Self-playing snake driven by a greedy autopilot")]
struct Cli {
    /// Side length of the square grid
    #[arg(long, default_value_t = 20)]
    grid_size: usize,

    /// Simulation tick interval in milliseconds
    #[arg(long, default_value_t = 150)]
    tick_ms: u64,

    /// Points awarded for eating food
    #[arg(long, default_value_t = 10)]
    food_reward: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig {
        grid_size: cli.grid_size,
        food_reward: cli.food_reward,
        ..Default::default()
    };

    let mut mode = AutoMode::new(config, Duration::from_millis(cli.tick_ms));
    mode.run().await?;

    Ok(())
}
