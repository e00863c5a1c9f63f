/// Betting round within one hand.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Round {
    #[default]
    Pref = 0isize,
    Flop = 1isize,
    Turn = 2isize,
    Rive = 3isize,
}

impl Round {
    pub const fn all() -> &'static [Self] {
        &[Self::Pref, Self::Flop, Self::Turn, Self::Rive]
    }
    pub const fn postflop() -> &'static [Self] {
        &[Self::Flop, Self::Turn, Self::Rive]
    }
    /// Text that marks the start of this round somewhere in a log line.
    pub const fn marker(&self) -> &'static str {
        match self {
            Self::Pref => "Game started at:",
            Self::Flop => "*** FLOP ***:",
            Self::Turn => "*** TURN ***:",
            Self::Rive => "*** RIVER ***:",
        }
    }
    /// First round whose marker appears in the line.
    pub fn detect(line: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|round| line.contains(round.marker()))
    }
}

impl From<Round> for usize {
    fn from(round: Round) -> Self {
        round as usize
    }
}

impl TryFrom<&str> for Round {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "preflop" => Ok(Self::Pref),
            "flop" => Ok(Self::Flop),
            "turn" => Ok(Self::Turn),
            "river" => Ok(Self::Rive),
            _ => Err("invalid round"),
        }
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Pref => write!(f, "preflop"),
            Self::Flop => write!(f, "flop"),
            Self::Turn => write!(f, "turn"),
            Self::Rive => write!(f, "river"),
        }
    }
}
