#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use batalha_naval::{
    auto_place_with_retry, format_coord, init_logging, Game, GameStatus, PlayerId,
    GRID_SIZE, PLACEMENT_RETRIES,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::{Rng, SeedableRng};
#[cfg(feature = "std")]
use serde_json::json;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Auto-place both fleets and play uniformly random legal shots to completion.
    Sim {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Run the fleet auto-placer once and print the layout.
    Place {
        #[arg(long, help = "Fix RNG seed for a reproducible layout")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Sim { seed } => {
            let mut rng = make_rng(seed);
            let fleet1 = auto_place_with_retry(&mut rng, PLACEMENT_RETRIES)
                .ok_or_else(|| anyhow::anyhow!("auto-placement failed for player1"))?;
            let fleet2 = auto_place_with_retry(&mut rng, PLACEMENT_RETRIES)
                .ok_or_else(|| anyhow::anyhow!("auto-placement failed for player2"))?;

            let mut game = Game::new(format!("sim-{}", seed.unwrap_or(0)));
            game.set_fleet(PlayerId::Player1, &fleet1)
                .map_err(|e| anyhow::anyhow!(e))?;
            game.set_fleet(PlayerId::Player2, &fleet2)
                .map_err(|e| anyhow::anyhow!(e))?;

            let mut shots = [0usize; 2];
            while game.status() == GameStatus::InProgress {
                let shooter = game.current_turn();
                let attack = game.attack_board(shooter);
                let (row, col) = loop {
                    let r = rng.random_range(0..GRID_SIZE);
                    let c = rng.random_range(0..GRID_SIZE);
                    if attack[r as usize][c as usize].is_none() {
                        break (r, c);
                    }
                };
                game.process_shot(shooter, row, col)
                    .map_err(|e| anyhow::anyhow!(e))?;
                shots[if shooter == PlayerId::Player1 { 0 } else { 1 }] += 1;
            }

            let result = json!({
                "game": game.id(),
                "winner": game.winner().map(|w| w.to_string()),
                "shots": {"player1": shots[0], "player2": shots[1]},
                "total_shots": game.shot_log().len(),
            });
            println!("{}", serde_json::to_string(&result)?);
        }
        Commands::Place { seed } => {
            let mut rng = make_rng(seed);
            let fleet = auto_place_with_retry(&mut rng, PLACEMENT_RETRIES)
                .ok_or_else(|| anyhow::anyhow!("auto-placement failed"))?;
            for ship in &fleet {
                let cells: Vec<String> = ship
                    .cells
                    .iter()
                    .map(|&(r, c)| format_coord(r, c))
                    .collect();
                println!("{:<14} {:<14} {}", ship.instance_id, ship.name, cells.join(" "));
            }
        }
    }

    Ok(())
}
