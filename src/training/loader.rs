use std::path::Path;
use std::time::Duration;

/// Seam to whatever deserializes a checkpoint into a usable model. The
/// network side of the house owns the format; this crate only drives
/// the retry policy around it.
pub trait Loader {
    type Model;
    fn load(&mut self, path: &Path) -> anyhow::Result<Self::Model>;
}

/// fixed pause between load attempts
pub const BACKOFF: Duration = Duration::from_secs(10);

/// Load a checkpoint, retrying forever on any failure. A missing or
/// half-written snapshot during a live run resolves itself once the
/// trainer catches up, so the loop spins until the environment is fixed
/// rather than giving up mid-session.
pub fn reload<L: Loader>(loader: &mut L, path: &Path) -> L::Model {
    reload_every(loader, path, BACKOFF)
}

pub fn reload_every<L: Loader>(loader: &mut L, path: &Path, backoff: Duration) -> L::Model {
    loop {
        match loader.load(path) {
            Ok(model) => return model,
            Err(e) => {
                log::warn!("load of {} failed, retrying: {}", path.display(), e);
                std::thread::sleep(backoff);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Flaky(usize);
    impl Loader for Flaky {
        type Model = &'static str;
        fn load(&mut self, _: &Path) -> anyhow::Result<Self::Model> {
            match self.0 {
                0 => Ok("model"),
                _ => {
                    self.0 -= 1;
                    Err(anyhow::anyhow!("file not written yet"))
                }
            }
        }
    }

    #[test]
    fn retries_until_the_file_appears() {
        let ref mut loader = Flaky(3);
        let model = reload_every(loader, Path::new("save-1.bin"), Duration::ZERO);
        assert_eq!(model, "model");
    }

    #[test]
    fn clean_load_returns_at_once() {
        let ref mut loader = Flaky(0);
        assert_eq!(reload(loader, Path::new("save-1.bin")), "model");
    }
}
