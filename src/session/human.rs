use super::session::Observation;
use super::session::Session;
use crate::engine::Actor;
use crate::engine::Batch;
use crate::engine::Reply;
use crate::moves::Table;
use std::sync::Arc;

/// Actor callback that turns a seat into a player. Each time the engine
/// asks for a move, the position is decoded and published to the
/// session, then the engine thread parks until the UI side answers.
pub struct Human {
    session: Arc<Session>,
    table: Arc<Table>,
}

impl Human {
    pub fn new(session: Arc<Session>, table: Arc<Table>) -> Self {
        Self { session, table }
    }
}

impl Actor for Human {
    fn act(&mut self, batch: &Batch) -> anyhow::Result<Reply> {
        let moves = self
            .table
            .labels(&batch.valids)
            .inspect_err(|e| log::error!("{}", e))?;
        self.session.publish(Observation {
            board: batch.board.clone(),
            player: batch.player,
            moves,
        });
        Ok(Reply::new(self.session.decision()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::board::Point;
    use crate::board::Side;
    use crate::moves::Variant;

    fn batch(valids: Vec<bool>) -> Batch {
        Batch {
            board: Board::default(),
            player: Side::Black,
            valids,
        }
    }

    #[test]
    fn publishes_then_waits_for_the_seat() {
        let table = Arc::new(Table::from(Variant::American));
        let session = Arc::new(Session::new(0));
        let mut valids = vec![false; table.len()];
        valids[10] = true;
        let engine = {
            let session = Arc::clone(&session);
            let table = Arc::clone(&table);
            std::thread::spawn(move || {
                Human::new(session, table).act(&batch(valids)).unwrap()
            })
        };
        let observation = session.observe();
        assert_eq!(observation.moves.len(), 1);
        session
            .submit(Point::new(0, 5), Point::new(1, 4))
            .unwrap();
        assert_eq!(engine.join().unwrap(), Reply::new(10));
    }

    #[test]
    fn skewed_mask_aborts() {
        let table = Arc::new(Table::from(Variant::American));
        let session = Arc::new(Session::new(0));
        let mut human = Human::new(session, table);
        assert!(human.act(&batch(vec![true; 7])).is_err());
    }
}
