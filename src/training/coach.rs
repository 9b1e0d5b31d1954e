use super::checkpoint::Checkpoint;
use super::loader::Loader;
use super::loader::reload;
use crate::engine::Server;
use std::path::PathBuf;

/// Training-side control loop glue. Tracks the selfplay version the
/// engine announced last, gates each training round on sufficient
/// selfplay, and republishes every trained version. Both engine calls
/// may block indefinitely; that contract belongs to the engine.
pub struct Coach<S: Server, L: Loader> {
    server: S,
    loader: L,
    root: PathBuf,
    selfplay_ver: i64,
}

impl<S: Server, L: Loader> Coach<S, L> {
    pub fn new(server: S, loader: L, root: PathBuf) -> Self {
        Self {
            server,
            loader,
            root,
            selfplay_ver: -1,
        }
    }

    pub fn selfplay_ver(&self) -> i64 {
        self.selfplay_ver
    }

    /// Engine announced a new selfplay version: wait until enough games
    /// exist at it, then bring the model at that version up, retrying
    /// through snapshots that are still being written.
    pub fn train_ctrl(&mut self, announced: i64) -> L::Model {
        log::info!(
            "train ctrl: selfplay version {} -> {}",
            self.selfplay_ver,
            announced
        );
        self.selfplay_ver = announced;
        self.server.wait_for_sufficient_selfplay(announced);
        let path = Checkpoint::from(announced).path(&self.root);
        reload(&mut self.loader, &path)
    }

    /// a training episode finished producing this version
    pub fn publish(&mut self, trained_ver: i64) {
        log::info!("publishing trained version {}", trained_ver);
        self.server.notify_new_version(self.selfplay_ver, trained_ver);
    }
}
