use super::session::Pass;
use super::session::Session;
use std::sync::Arc;

/// Fixed pool of seats, one per concurrent game the engine was started
/// with. Logging in sweeps idle seats first, so abandoned games recycle
/// themselves without any background task.
#[derive(Debug)]
pub struct Lobby {
    slots: Vec<Arc<Session>>,
}

impl Lobby {
    pub fn new(seats: usize) -> Self {
        log::info!("opening lobby with {} seats", seats);
        Self {
            slots: (0..seats).map(|id| Arc::new(Session::new(id))).collect(),
        }
    }

    pub fn seats(&self) -> usize {
        self.slots.len()
    }

    pub fn session(&self, id: usize) -> Option<Arc<Session>> {
        self.slots.get(id).cloned()
    }

    /// the session behind a credential pair, if the pass still holds
    pub fn authorize(&self, id: usize, pass: Pass) -> Option<Arc<Session>> {
        self.session(id).filter(|s| s.authorize(pass))
    }

    /// reclaim every seat whose player walked away
    pub fn sweep(&self) {
        self.slots
            .iter()
            .filter(|s| s.expired())
            .for_each(|s| s.expire());
    }

    /// sweep, then seat the caller at the first free slot
    pub fn login(&self) -> Option<(usize, Pass)> {
        self.sweep();
        self.slots
            .iter()
            .find(|s| !s.engaged())
            .map(|s| (s.id(), s.claim()))
            .inspect(|(id, _)| log::info!("seated player at session {}", id))
    }

    pub fn logout(&self, id: usize, pass: Pass) -> bool {
        match self.authorize(id, pass) {
            Some(session) => {
                session.release();
                log::info!("player left session {}", id);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn seats_fill_in_order() {
        let lobby = Lobby::new(2);
        let (a, _) = lobby.login().unwrap();
        let (b, _) = lobby.login().unwrap();
        assert_eq!((a, b), (0, 1));
        assert!(lobby.login().is_none());
    }

    #[test]
    fn logout_frees_the_seat() {
        let lobby = Lobby::new(1);
        let (id, pass) = lobby.login().unwrap();
        assert!(!lobby.logout(id, pass + 1));
        assert!(lobby.logout(id, pass));
        assert!(lobby.login().is_some());
    }

    #[test]
    fn sweep_reclaims_only_stale_seats() {
        // just over the idle line is reclaimed, just under is not
        let lobby = Lobby::new(2);
        let (a, pass_a) = lobby.login().unwrap();
        let (b, pass_b) = lobby.login().unwrap();
        lobby.session(a).unwrap().backdate(Duration::from_secs(1201));
        lobby.session(b).unwrap().backdate(Duration::from_secs(1199));
        let (c, _) = lobby.login().unwrap();
        assert_eq!(c, a);
        assert!(lobby.authorize(a, pass_a).is_none());
        assert!(lobby.authorize(b, pass_b).is_some());
    }

    #[test]
    fn stale_pass_never_authorizes() {
        let lobby = Lobby::new(1);
        let (id, pass) = lobby.login().unwrap();
        lobby.session(id).unwrap().backdate(Duration::from_secs(1201));
        lobby.sweep();
        assert!(lobby.authorize(id, pass).is_none());
    }
}
