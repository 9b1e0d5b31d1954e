use super::batch::Batch;
use super::reply::Reply;

/// Decision callback registered with the engine's run loop, invoked
/// synchronously on the engine's own thread each time a registered
/// player must act. Implementations may block (a human thinking); an
/// Err means the actor and the engine disagree on the action space and
/// the loop must abort rather than desynchronize.
pub trait Actor: Send {
    fn act(&mut self, batch: &Batch) -> anyhow::Result<Reply>;
}
