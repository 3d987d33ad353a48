//! Headless autoplay runner (default binary).
//!
//! Plays complete sessions by greedily placing the first block that fits,
//! printing emitted signals along the way. It drives the engine through
//! the same action/state surface a real presentation layer uses.

use anyhow::{anyhow, Result};

use block_blast::core::GameState;
use block_blast::types::{EngineSignal, GameAction, GridPos, GRID_SIZE, HAND_SIZE};

#[derive(Debug, Clone, Copy)]
struct RunConfig {
    seed: u32,
    games: u32,
}

fn parse_args(args: &[String]) -> Result<RunConfig> {
    let mut config = RunConfig { seed: 1, games: 1 };

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                config.seed = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
            }
            "--games" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --games"))?;
                config.games = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --games value: {}", v))?;
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(config)
}

/// First (hand slot, origin) pair with a legal placement, scanning in
/// hand order then row-major grid order
fn find_move(game: &GameState) -> Option<(usize, GridPos)> {
    for index in 0..HAND_SIZE {
        let block = &game.hand()[index];
        if block.used {
            continue;
        }
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                if game.can_block_be_placed(block, row, col) {
                    return Some((index, GridPos::new(row, col)));
                }
            }
        }
    }
    None
}

/// Play one session to game over, returning the number of placements
fn play_one(game: &mut GameState) -> u32 {
    let mut placements = 0u32;

    while !game.is_game_over() {
        let Some((index, pos)) = find_move(game) else {
            break;
        };

        if !game.select_block(index) {
            break;
        }
        if !game.set_hover_position(Some(pos)) {
            break;
        }
        if !game.place_block() {
            break;
        }
        placements += 1;

        for signal in game.take_signals() {
            if let EngineSignal::LinesCleared {
                rows,
                cols,
                cells,
                points,
            } = signal
            {
                println!(
                    "  cleared {} row(s) / {} col(s), {} cells, +{} points",
                    rows, cols, cells, points
                );
            }
        }
    }

    placements
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_args(&args)?;

    let mut game = GameState::new(config.seed);
    for game_index in 0..config.games {
        if game_index > 0 {
            game.apply_action(GameAction::Restart);
        }
        let placements = play_one(&mut game);
        println!(
            "game {}: {} placements, final score {}",
            game_index + 1,
            placements,
            game.score()
        );
    }

    Ok(())
}
