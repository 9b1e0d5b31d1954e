use super::mailbox::Mailbox;
use crate::Action;
use crate::board::Board;
use crate::board::Point;
use crate::board::Side;
use crate::engine::Reply;
use std::collections::BTreeMap;
use std::sync::Mutex;
use std::time::Duration;
use std::time::Instant;

pub type Pass = u32;

/// What the engine published for the human to look at: board, side to
/// move, and the decoded valid moves, all in one record.
#[derive(Debug, Clone)]
pub struct Observation {
    pub board: Board,
    pub player: Side,
    pub moves: BTreeMap<usize, (Point, Point)>,
}

/// One human seat. The engine thread publishes observations and blocks
/// collecting an action; UI threads read observations and submit moves.
/// A pass token gates every UI access; an idle seat is reclaimed by the
/// lobby sweep, which also unsticks any engine thread still waiting by
/// forcing a resign action.
#[derive(Debug)]
pub struct Session {
    id: usize,
    auth: Mutex<Auth>,
    observation: Mailbox<Observation>,
    action: Mailbox<Action>,
}

#[derive(Debug)]
struct Auth {
    pass: Pass,
    engaged: bool,
    last_move: Instant,
}

impl Session {
    /// a seat untouched this long is up for reclamation
    pub const IDLE: Duration = Duration::from_secs(60 * 20);

    pub fn new(id: usize) -> Self {
        Self {
            id,
            auth: Mutex::new(Auth {
                pass: Self::rotate(),
                engaged: false,
                last_move: Instant::now(),
            }),
            observation: Mailbox::default(),
            action: Mailbox::default(),
        }
    }

    fn rotate() -> Pass {
        rand::Rng::random_range(&mut rand::rng(), 1..10_000_000)
    }

    pub fn id(&self) -> usize {
        self.id
    }
    pub fn engaged(&self) -> bool {
        self.auth.lock().expect("auth lock").engaged
    }
    pub fn authorize(&self, pass: Pass) -> bool {
        let auth = self.auth.lock().expect("auth lock");
        auth.engaged && auth.pass == pass
    }
    pub fn idle(&self) -> Duration {
        self.auth.lock().expect("auth lock").last_move.elapsed()
    }
    pub fn expired(&self) -> bool {
        self.engaged() && self.idle() > Self::IDLE
    }
    pub fn touch(&self) {
        self.auth.lock().expect("auth lock").last_move = Instant::now();
    }

    /// seat this session: fresh pass, idle clock restarted
    pub fn claim(&self) -> Pass {
        let mut auth = self.auth.lock().expect("auth lock");
        auth.pass = Self::rotate();
        auth.engaged = true;
        auth.last_move = Instant::now();
        auth.pass
    }

    /// voluntary logout; the seat becomes claimable again
    pub fn release(&self) {
        let mut auth = self.auth.lock().expect("auth lock");
        auth.pass = Self::rotate();
        auth.engaged = false;
    }

    /// Forced reclamation of an idle seat. The resign action unsticks an
    /// engine thread still blocked on this session.
    pub fn expire(&self) {
        log::info!("session {} idle too long, reclaiming seat", self.id);
        self.release();
        self.observation.clear();
        self.action.post(Reply::RESIGN);
    }

    // engine side

    /// publish a fresh observation for the UI to pick up
    pub fn publish(&self, observation: Observation) {
        self.observation.post(observation);
    }

    /// block until the UI supplies an action
    pub fn decision(&self) -> Action {
        self.action.collect()
    }

    // UI side

    /// block until any observation exists (first page load)
    pub fn observe(&self) -> Observation {
        self.observation.latest()
    }

    /// block until the engine advances past the submitted action
    pub fn refresh(&self) -> Observation {
        self.observation.next()
    }

    /// pass a raw action straight through (reset, change side)
    pub fn steer(&self, action: Action) {
        self.touch();
        self.action.post(action);
    }

    /// Resolve a chosen (from, to) pair against the published valid
    /// moves and queue the matching action index. A miss is rejected
    /// explicitly; nothing is queued and the engine keeps waiting.
    pub fn submit(&self, from: Point, till: Point) -> anyhow::Result<Action> {
        let observation = self
            .observation
            .peek()
            .ok_or_else(|| anyhow::anyhow!("no position to move in yet"))?;
        let (index, _) = observation
            .moves
            .iter()
            .find(|(_, pair)| **pair == (from, till))
            .ok_or_else(|| anyhow::anyhow!("{} => {} is not a legal move here", from, till))?;
        let action = *index as Action;
        self.steer(action);
        Ok(action)
    }
}

#[cfg(test)]
impl Session {
    /// wind the idle clock back for sweep tests
    pub fn backdate(&self, by: Duration) {
        let mut auth = self.auth.lock().expect("auth lock");
        auth.last_move = Instant::now() - by;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::Table;
    use crate::moves::Variant;
    use std::sync::Arc;

    fn observation() -> Observation {
        let table = Table::from(Variant::American);
        let mut valids = vec![false; table.len()];
        valids[10] = true;
        Observation {
            board: Board::default(),
            player: Side::White,
            moves: table.labels(&valids).unwrap(),
        }
    }

    #[test]
    fn pass_gates_access() {
        let session = Session::new(0);
        assert!(!session.authorize(0));
        let pass = session.claim();
        assert!(session.authorize(pass));
        assert!(!session.authorize(pass + 1));
        session.release();
        assert!(!session.authorize(pass));
    }

    #[test]
    fn submit_requires_an_observation() {
        let session = Session::new(0);
        let from = Point::new(0, 5);
        let till = Point::new(1, 4);
        assert!(session.submit(from, till).is_err());
    }

    #[test]
    fn submit_matches_published_moves() {
        let session = Session::new(0);
        session.publish(observation());
        let action = session.submit(Point::new(0, 5), Point::new(1, 4)).unwrap();
        assert_eq!(action, 10);
        assert_eq!(session.decision(), 10);
    }

    #[test]
    fn illegal_submission_queues_nothing() {
        let session = Session::new(0);
        session.publish(observation());
        assert!(session.submit(Point::new(1, 4), Point::new(0, 5)).is_err());
        assert!(session.action.take().is_none());
    }

    #[test]
    fn expiry_unsticks_a_blocked_engine() {
        let session = Arc::new(Session::new(0));
        session.claim();
        let engine = Arc::clone(&session);
        let handle = std::thread::spawn(move || engine.decision());
        std::thread::sleep(Duration::from_millis(50));
        session.expire();
        assert_eq!(handle.join().unwrap(), Reply::RESIGN);
        assert!(!session.engaged());
    }

    #[test]
    fn idle_threshold_is_twenty_minutes() {
        let session = Session::new(0);
        session.claim();
        session.backdate(Duration::from_secs(1199));
        assert!(!session.expired());
        session.backdate(Duration::from_secs(1201));
        assert!(session.expired());
    }
}
