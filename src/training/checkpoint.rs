use std::path::Path;
use std::path::PathBuf;

/// Model checkpoint version. The training server writes snapshots as
/// save-<ver>.bin in the save root; clients locate them by version.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Checkpoint(i64);

impl Checkpoint {
    pub fn file(&self) -> String {
        format!("save-{}.bin", self.0)
    }
    pub fn path(&self, root: &Path) -> PathBuf {
        root.join(self.file())
    }
}

/// i64 isomorphism
impl From<i64> for Checkpoint {
    fn from(ver: i64) -> Self {
        Self(ver)
    }
}
impl From<Checkpoint> for i64 {
    fn from(c: Checkpoint) -> Self {
        c.0
    }
}

/// parse a checkpoint stem or filename back into its version
impl TryFrom<&str> for Checkpoint {
    type Error = &'static str;
    fn try_from(name: &str) -> Result<Self, Self::Error> {
        name.strip_prefix("save-")
            .map(|rest| rest.strip_suffix(".bin").unwrap_or(rest))
            .and_then(|ver| ver.parse::<i64>().ok())
            .map(Self)
            .ok_or("not a checkpoint name")
    }
}

impl std::fmt::Display for Checkpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.file())
    }
}
