//! Random-move engine.
//!
//! Selects uniformly from the legal moves of the side to move. Used for
//! diagnostics, integration testing, and low-strength gameplay; deeper
//! selection strategies are deliberately out of scope.

use rand::prelude::IndexedRandom;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::RulesError;
use crate::game::game_state::GameState;
use crate::movegen::legal::generate_legal_moves;

#[derive(Default)]
pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        RandomEngine
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Quince Random"
    }

    fn choose_move(&mut self, game_state: &GameState) -> Result<EngineOutput, RulesError> {
        let legal_moves = generate_legal_moves(game_state, game_state.turn);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            legal_moves.len()
        ));

        if legal_moves.is_empty() {
            return Ok(out);
        }

        let mut rng = rand::rng();
        out.best_move = legal_moves.as_slice().choose(&mut rng).copied();
        Ok(out)
    }
}
