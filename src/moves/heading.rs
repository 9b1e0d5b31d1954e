/// The four diagonal travel directions, named in native bit order. One
/// step right-forward is a shift of +4 bit positions under the padded
/// layout, left-forward +5; backward directions negate. Display x is
/// mirrored relative to native bit order, so the "right" headings move
/// toward smaller display columns going backward.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Heading {
    RightForward,
    LeftForward,
    RightBackward,
    LeftBackward,
}

impl Heading {
    /// bit-position delta for one diagonal step
    pub const fn shift(&self) -> i32 {
        match self {
            Self::RightForward => 4,
            Self::LeftForward => 5,
            Self::RightBackward => -4,
            Self::LeftBackward => -5,
        }
    }

    /// one step in display coordinates, (dx, dy)
    pub const fn step(&self) -> (i32, i32) {
        match self {
            Self::RightForward => (1, -1),
            Self::LeftForward => (-1, -1),
            Self::RightBackward => (-1, 1),
            Self::LeftBackward => (1, 1),
        }
    }

    pub const fn reverse(&self) -> Self {
        match self {
            Self::RightForward => Self::RightBackward,
            Self::LeftForward => Self::LeftBackward,
            Self::RightBackward => Self::RightForward,
            Self::LeftBackward => Self::LeftForward,
        }
    }

    pub const fn forward(&self) -> bool {
        matches!(self, Self::RightForward | Self::LeftForward)
    }
}
