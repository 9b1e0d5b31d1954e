/// Control surface of the engine's server half, driven by the training
/// loop. Both calls may block for a long time while distributed clients
/// catch up; that is their contract, not a bug.
pub trait Server {
    fn notify_new_version(&mut self, selfplay_ver: i64, trained_ver: i64);
    fn wait_for_sufficient_selfplay(&mut self, selfplay_ver: i64);
}
