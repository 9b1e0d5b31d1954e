/// Running win-rate tally mirrored from the engine's game stats, logged
/// at every game end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Wins {
    pub black: u64,
    pub white: u64,
    pub drawn: u64,
}

impl Wins {
    pub fn total(&self) -> u64 {
        self.black + self.white + self.drawn
    }

    /// black's share of decided games, in percent
    pub fn black_rate(&self) -> f64 {
        match self.black + self.white {
            0 => 0.0,
            decided => 100.0 * self.black as f64 / decided as f64,
        }
    }

    pub fn record(&mut self, outcome: Option<crate::board::Side>) {
        match outcome {
            Some(crate::board::Side::Black) => self.black += 1,
            Some(crate::board::Side::White) => self.white += 1,
            None => self.drawn += 1,
        }
    }
}

impl std::fmt::Display for Wins {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "B/W: {}/{}, Draw: {}, Black winrate: {:.2}, Total Games: {}",
            self.black,
            self.white,
            self.drawn,
            self.black_rate(),
            self.total()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Side;

    #[test]
    fn draws_do_not_dilute_the_rate() {
        let mut wins = Wins::default();
        wins.record(Some(Side::Black));
        wins.record(Some(Side::White));
        wins.record(None);
        assert_eq!(wins.total(), 3);
        assert_eq!(wins.black_rate(), 50.0);
    }

    #[test]
    fn no_decided_games_reads_zero() {
        assert_eq!(Wins::default().black_rate(), 0.0);
    }
}
