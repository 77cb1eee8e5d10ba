//! Headless driver: reads line-delimited JSON messages from stdin, applies
//! them to a game session, and prints the applied notation and board. The
//! final move history is dumped as JSON lines when the game ends.

use std::io::{self, BufRead};

use anyhow::Result;
use tracing::{info, warn};

use bombchess_core::{Game, GameResult};
use bombchess_relay::{Applied, apply_message, parse_message};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    info!("bombchess starting");
    let stdin = io::stdin();
    run(&mut stdin.lock())
}

fn run(input: &mut impl BufRead) -> Result<()> {
    let mut game = Game::new();
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        // A surrender line is attributed to the player whose turn it is; a
        // real transport knows which peer each line came from.
        let sender = game.current_player();
        match parse_message(&line).and_then(|msg| apply_message(&mut game, &msg, sender)) {
            Ok(Applied::Move { notation }) => {
                println!("{notation}");
                println!("{}", game.board().pretty());
            }
            Ok(Applied::MinesPlaced { count }) => info!(count, "mine layout installed"),
            Ok(Applied::Resigned(color)) => info!(player = %color, "resignation"),
            Err(err) => warn!(error = %err, "message dropped"),
        }
        if game.result() != GameResult::InProgress {
            println!("{}", game.result());
            for record in game.move_history() {
                println!("{}", serde_json::to_string(record)?);
            }
            break;
        }
    }
    Ok(())
}
