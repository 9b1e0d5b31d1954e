use crate::board::Board;
use crate::board::Side;

/// Read-only view of one live game inside the native engine. The engine
/// owns the rules; this crate only snapshots what it exposes.
pub trait Game {
    fn board(&self) -> Board;
    fn current_player(&self) -> Side;
    /// one flag per action index; length equals the variant's table
    fn valid_moves(&self) -> Vec<bool>;
}
