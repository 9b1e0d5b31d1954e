/// Active player, in the engine's 0/1 encoding.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Side {
    Black,
    White,
}

impl Side {
    pub const fn other(&self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }
}

/// i64 isomorphism over the engine's player constants
impl TryFrom<i64> for Side {
    type Error = &'static str;
    fn try_from(n: i64) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(Self::Black),
            1 => Ok(Self::White),
            _ => Err("unknown player value"),
        }
    }
}
impl From<Side> for i64 {
    fn from(s: Side) -> Self {
        match s {
            Side::Black => 0,
            Side::White => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Black => write!(f, "black"),
            Self::White => write!(f, "white"),
        }
    }
}
