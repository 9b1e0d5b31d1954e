use super::heading::Heading;
use super::stride::Stride;

/// Which game the table enumerates. The class schedule and its order are
/// compiled into the engine; reordering silently breaks the shared
/// action space.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Variant {
    American,
    Russian,
    Ugolki,
}

impl Variant {
    pub const fn all() -> &'static [Self] {
        &[Self::American, Self::Russian, Self::Ugolki]
    }

    /// declared action-space size, engine side
    pub const fn actions(&self) -> usize {
        match self {
            Self::American => 170,
            Self::Russian => 280,
            Self::Ugolki => 170,
        }
    }

    /// sentinel index one past the action space
    pub const fn invalid(&self) -> usize {
        self.actions() + 1
    }

    /// Enumeration schedule. American and Ugolki walk the four one-step
    /// classes then the four jump classes; Russian walks the flying
    /// ranges forward then re-reads them backward.
    pub fn strides(&self) -> Vec<Stride> {
        match self {
            Self::American | Self::Ugolki => [1, 2]
                .iter()
                .flat_map(|steps| {
                    [
                        Heading::RightForward,
                        Heading::LeftForward,
                        Heading::RightBackward,
                        Heading::LeftBackward,
                    ]
                    .into_iter()
                    .map(move |h| Stride::new(h, *steps))
                })
                .collect(),
            Self::Russian => [Heading::RightForward, Heading::LeftForward]
                .into_iter()
                .chain([Heading::RightBackward, Heading::LeftBackward])
                .flat_map(|h| {
                    let reach = match h {
                        Heading::RightForward | Heading::RightBackward => 7,
                        _ => 6,
                    };
                    (1..=reach).map(move |steps| Stride::new(h, steps))
                })
                .collect(),
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::American => write!(f, "american"),
            Self::Russian => write!(f, "russian"),
            Self::Ugolki => write!(f, "ugolki"),
        }
    }
}

impl TryFrom<&str> for Variant {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "american" => Ok(Self::American),
            "russian" => Ok(Self::Russian),
            "ugolki" => Ok(Self::Ugolki),
            _ => Err("unknown variant"),
        }
    }
}
