use super::*;
use crate::Amount;
use crate::GameID;

/// One classified log line.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    GameHeader {
        game: GameID,
        small: Amount,
        big: Amount,
    },
    SeatAnnouncement {
        player: String,
        stack: Amount,
    },
    RoundMarker(Round),
    BlindAssignment {
        player: String,
        blind: Blind,
    },
    ActionEvent {
        player: String,
        action: Action,
        amount: Option<Amount>,
    },
    Settlement {
        player: String,
        outcome: Outcome,
        amount: Amount,
    },
    Unrecognized,
}

impl Event {
    /// Player the event refers to, if any.
    pub fn player(&self) -> Option<&str> {
        match self {
            Self::SeatAnnouncement { player, .. }
            | Self::BlindAssignment { player, .. }
            | Self::ActionEvent { player, .. }
            | Self::Settlement { player, .. } => Some(player.as_str()),
            Self::GameHeader { .. } | Self::RoundMarker(_) | Self::Unrecognized => None,
        }
    }
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized)
    }
    pub const fn kind(&self) -> Kind {
        match self {
            Self::GameHeader { .. } => Kind::Header,
            Self::SeatAnnouncement { .. } => Kind::Seat,
            Self::RoundMarker(_) => Kind::Round,
            Self::BlindAssignment { .. } => Kind::Blind,
            Self::ActionEvent { .. } => Kind::Action,
            Self::Settlement { .. } => Kind::Settlement,
            Self::Unrecognized => Kind::Unrecognized,
        }
    }
}

/// Classify a raw log line. Never fails: anything outside the grammar,
/// including lines with a malformed numeric group, is `Unrecognized`.
/// A leading byte-order mark and trailing line endings are ignored.
impl From<&str> for Event {
    fn from(line: &str) -> Self {
        let line = line
            .trim_start_matches('\u{feff}')
            .trim_end_matches(['\r', '\n']);
        pattern::header(line)
            .or_else(|| pattern::seat(line))
            .or_else(|| pattern::round(line))
            .or_else(|| pattern::blind(line))
            .or_else(|| pattern::settlement(line))
            .or_else(|| pattern::action(line))
            .unwrap_or_else(|| {
                log::trace!("unrecognized line: {}", line);
                Self::Unrecognized
            })
    }
}

/// Fieldless discriminant of [`Event`], used for counting.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Kind {
    Header,
    Seat,
    Round,
    Blind,
    Action,
    Settlement,
    Unrecognized,
}

impl Kind {
    pub const fn all() -> &'static [Self] {
        &[
            Self::Header,
            Self::Seat,
            Self::Round,
            Self::Blind,
            Self::Action,
            Self::Settlement,
            Self::Unrecognized,
        ]
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Header => write!(f, "header"),
            Self::Seat => write!(f, "seat"),
            Self::Round => write!(f, "round"),
            Self::Blind => write!(f, "blind"),
            Self::Action => write!(f, "action"),
            Self::Settlement => write!(f, "settlement"),
            Self::Unrecognized => write!(f, "unrecognized"),
        }
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::GameHeader { game, small, big } => write!(f, "Game ID: {} {}/{}", game, small, big),
            Self::SeatAnnouncement { player, stack } => write!(f, "Seat 0: {} ({})", player, stack),
            Self::RoundMarker(round) => write!(f, "{}", round.marker()),
            Self::BlindAssignment { player, blind } => write!(f, "Player {} has {}", player, blind),
            Self::ActionEvent {
                player,
                action,
                amount: Some(amount),
            } => write!(f, "Player {} {} ({})", player, action.verb(), amount),
            Self::ActionEvent {
                player,
                action,
                amount: None,
            } => write!(f, "Player {} {}", player, action.verb()),
            Self::Settlement {
                player,
                outcome,
                amount,
            } => write!(f, "Player {} {}: {}", player, outcome, amount),
            Self::Unrecognized => write!(f, "??"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(s: &str) -> String {
        String::from(s)
    }

    #[test]
    fn game_header() {
        assert_eq!(
            Event::from("Game ID: 1024 0.50/1.00"),
            Event::GameHeader {
                game: 1024,
                small: 0.50,
                big: 1.00,
            }
        );
    }

    #[test]
    fn seat_announcement() {
        assert_eq!(
            Event::from("Seat 3: alice (100.00)"),
            Event::SeatAnnouncement {
                player: player("alice"),
                stack: 100.00,
            }
        );
    }

    #[test]
    fn round_markers() {
        assert_eq!(Event::from("Game started at: 2012/6/1 0:1:40"), Event::RoundMarker(Round::Pref));
        assert_eq!(Event::from("*** FLOP ***: [Qs 4d 9c]"), Event::RoundMarker(Round::Flop));
        assert_eq!(Event::from("*** TURN ***: [Qs 4d 9c] [2h]"), Event::RoundMarker(Round::Turn));
        assert_eq!(Event::from("*** RIVER ***: [Qs 4d 9c 2h] [Ks]"), Event::RoundMarker(Round::Rive));
    }

    #[test]
    fn blind_assignment() {
        assert_eq!(
            Event::from("Player bob has small blind (0.50)"),
            Event::BlindAssignment {
                player: player("bob"),
                blind: Blind::Small,
            }
        );
        assert_eq!(
            Event::from("Player alice has big blind (1)"),
            Event::BlindAssignment {
                player: player("alice"),
                blind: Blind::Big,
            }
        );
    }

    #[test]
    fn action_event() {
        assert_eq!(
            Event::from("Player alice raises (6.00)"),
            Event::ActionEvent {
                player: player("alice"),
                action: Action::Raise,
                amount: Some(6.00),
            }
        );
        assert_eq!(
            Event::from("Player bob bets (.75)"),
            Event::ActionEvent {
                player: player("bob"),
                action: Action::Bet,
                amount: Some(0.75),
            }
        );
        assert_eq!(
            Event::from("Player bob folds"),
            Event::ActionEvent {
                player: player("bob"),
                action: Action::Fold,
                amount: None,
            }
        );
    }

    #[test]
    fn settlement() {
        assert_eq!(
            Event::from("Player alice Wins: 30.00"),
            Event::Settlement {
                player: player("alice"),
                outcome: Outcome::Win,
                amount: 30.00,
            }
        );
        assert_eq!(
            Event::from("Player bob mucks cards. Loses: 25"),
            Event::Settlement {
                player: player("bob"),
                outcome: Outcome::Lose,
                amount: 25.0,
            }
        );
    }

    #[test]
    fn unrecognized() {
        assert_eq!(Event::from(""), Event::Unrecognized);
        assert_eq!(Event::from("alice: gl everyone"), Event::Unrecognized);
        assert_eq!(Event::from("Player alice checks"), Event::Unrecognized);
        assert_eq!(Event::from("Player alice Wins:"), Event::Unrecognized);
        assert_eq!(Event::from("Seat 1: alice (lots)"), Event::Unrecognized);
    }

    #[test]
    fn tolerates_carriage_return() {
        assert_eq!(
            Event::from("Seat 1: alice (10)\r"),
            Event::SeatAnnouncement {
                player: player("alice"),
                stack: 10.0,
            }
        );
    }

    #[test]
    fn tolerates_byte_order_mark() {
        assert_eq!(
            Event::from("\u{feff}Game ID: 1 1/2"),
            Event::GameHeader {
                game: 1,
                small: 1.0,
                big: 2.0,
            }
        );
    }

    #[test]
    fn display_reclassifies() {
        for line in [
            "Game ID: 5 1/2",
            "Seat 2: alice (100.5)",
            "Player alice has big blind",
            "Player alice raises (6)",
            "Player alice folds",
            "Player alice Loses: 2.5",
            "*** TURN ***:",
        ] {
            let event = Event::from(line);
            assert!(event.is_recognized());
            assert_eq!(Event::from(event.to_string().as_str()), event);
        }
    }

    #[test]
    fn kinds() {
        assert_eq!(Event::from("Game ID: 5 1/2").kind(), Kind::Header);
        assert_eq!(Event::from("nothing").kind(), Kind::Unrecognized);
        assert_eq!(Event::from("Player x folds").player(), Some("x"));
        assert_eq!(Event::from("*** FLOP ***:").player(), None);
    }
}
