mod config;

use anyhow::{Context, Result};
use draughts_core::{Game, GameStatus, Side};
use log::info;
use tracing_subscriber::EnvFilter;

use crate::config::DriverConfig;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = DriverConfig::from_env()?;
    info!("White plays level {}, Black plays level {}", config.white, config.black);

    let mut white = config.ai(Side::White);
    let mut black = config.ai(Side::Black);
    let mut game = Game::new();
    println!("{}", game.board());

    for ply in 1..=config.max_plies {
        if let GameStatus::Won(winner) = game.status() {
            println!("{winner} wins after {} plies", ply - 1);
            return Ok(());
        }

        let side = game.side_to_move();
        let ai = match side {
            Side::White => &mut white,
            Side::Black => &mut black,
        };
        let mv = ai
            .choose_move(&game)
            .with_context(|| format!("{side} found no move in a live game"))?;
        let applied = game.try_apply(mv)?;

        let capture = applied.captured.map(|sq| format!(" x{sq}")).unwrap_or_default();
        println!("{ply}. {side} {mv}{capture}");
        println!("{}", game.board());
    }

    println!("stopped after {} plies without a winner", config.max_plies);
    Ok(())
}
