//! Engine abstraction layer.
//!
//! Defines the common output payload so different move-selection strategies
//! can sit behind a single trait interface.

use crate::errors::RulesError;
use crate::game::chess_move::Move;
use crate::game::game_state::GameState;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// The selected move, or `None` when the side to move has no legal move.
    pub best_move: Option<Move>,
    /// Human-readable diagnostics emitted alongside the choice.
    pub info_lines: Vec<String>,
}

pub trait Engine {
    fn name(&self) -> &str;

    fn choose_move(&mut self, game_state: &GameState) -> Result<EngineOutput, RulesError>;
}
