use super::game::Game;
use crate::board::Board;
use crate::board::Side;

/// Observation handed to an actor callback: everything the engine
/// exposes about the position awaiting a decision, snapshotted together
/// so no reader can see the board and the move mask out of step.
#[derive(Debug, Clone)]
pub struct Batch {
    pub board: Board,
    pub player: Side,
    pub valids: Vec<bool>,
}

impl Batch {
    pub fn snapshot(game: &impl Game) -> Self {
        Self {
            board: game.board(),
            player: game.current_player(),
            valids: game.valid_moves(),
        }
    }
}
