/// Forced blind posted by a seated player.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Blind {
    Small,
    Big,
}

impl TryFrom<&str> for Blind {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "small" => Ok(Self::Small),
            "big" => Ok(Self::Big),
            _ => Err("invalid blind"),
        }
    }
}

impl std::fmt::Display for Blind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Small => write!(f, "small blind"),
            Self::Big => write!(f, "big blind"),
        }
    }
}
