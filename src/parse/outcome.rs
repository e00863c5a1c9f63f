use crate::Amount;

/// Direction of a settlement line.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Lose,
}

impl Outcome {
    /// Losses are stored as negative winnings.
    pub fn signed(&self, amount: Amount) -> Amount {
        match self {
            Self::Win => amount,
            Self::Lose => -amount,
        }
    }
}

impl TryFrom<&str> for Outcome {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "Wins" => Ok(Self::Win),
            "Loses" => Ok(Self::Lose),
            _ => Err("invalid outcome"),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Win => write!(f, "Wins"),
            Self::Lose => write!(f, "Loses"),
        }
    }
}
