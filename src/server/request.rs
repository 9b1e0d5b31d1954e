use crate::Action;
use crate::session::Pass;
use serde::Deserialize;

/// Seat credentials carried on every request after login.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Credentials {
    pub id: usize,
    pub pass: Pass,
}

/// Body of a player's turn submission. Exactly one of the three forms is
/// expected: a raw reset action, a raw change-side action, or a chosen
/// move as a pair of cell labels.
#[derive(Debug, Clone, Deserialize)]
pub struct Submission {
    pub reset: Option<Action>,
    #[serde(rename = "changeSide")]
    pub change_side: Option<Action>,
    pub move_from: Option<String>,
    pub move_to: Option<String>,
}
