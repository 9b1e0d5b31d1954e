use super::checkpoint::Checkpoint;
use crate::engine::Client;

/// Evaluation pairing: pit two checkpoint versions against each other
/// on a single game thread instead of selfplaying the latest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duel {
    pub black: Checkpoint,
    pub white: Checkpoint,
}

impl Duel {
    /// hand the pairing to the engine's client half
    pub fn begin(&self, client: &mut impl Client) {
        log::info!("evaluating {} as black against {} as white", self.black, self.white);
        client.set_request(i64::from(self.black), i64::from(self.white), 1);
    }
}

/// parse the "black,white" version-pair argument form
impl TryFrom<&str> for Duel {
    type Error = &'static str;
    fn try_from(pair: &str) -> Result<Self, Self::Error> {
        let (black, white) = pair.split_once(',').ok_or("expected black,white")?;
        Ok(Self {
            black: black
                .trim()
                .parse::<i64>()
                .map(Checkpoint::from)
                .map_err(|_| "bad black version")?,
            white: white
                .trim()
                .parse::<i64>()
                .map(Checkpoint::from)
                .map_err(|_| "bad white version")?,
        })
    }
}
