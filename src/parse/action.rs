/// Voluntary player action as it appears in the log.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Action {
    Bet,
    Call,
    Raise,
    Fold,
}

impl Action {
    pub const fn all() -> &'static [Self] {
        &[Self::Bet, Self::Call, Self::Raise, Self::Fold]
    }
    /// Puts money in the pot by choice.
    pub const fn is_voluntary(&self) -> bool {
        matches!(self, Self::Call | Self::Raise)
    }
    pub const fn is_aggressive(&self) -> bool {
        matches!(self, Self::Bet | Self::Raise)
    }
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bet => "bet",
            Self::Call => "call",
            Self::Raise => "raise",
            Self::Fold => "fold",
        }
    }
    /// Third-person verb used by the log, e.g. `Player alice raises`.
    pub const fn verb(&self) -> &'static str {
        match self {
            Self::Bet => "bets",
            Self::Call => "calls",
            Self::Raise => "raises",
            Self::Fold => "folds",
        }
    }
}

impl TryFrom<&str> for Action {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "bets" | "bet" => Ok(Self::Bet),
            "calls" | "call" => Ok(Self::Call),
            "raises" | "raise" => Ok(Self::Raise),
            "folds" | "fold" => Ok(Self::Fold),
            _ => Err("invalid action"),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
