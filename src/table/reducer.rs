use super::*;
use crate::Amount;
use crate::GameID;
use crate::parse::Event;
use crate::parse::Round;

/// Game context set by the most recent header line.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Context {
    game: GameID,
    small: Amount,
    big: Amount,
}

/// Sequential fold from classified events to hand records.
///
/// Which game and which round an event belongs to is never written on the
/// event's own line; it is whatever header and round marker came last.
/// Events are therefore order-dependent and must be fed in file order.
/// Anything that cannot be attributed is counted and dropped, never fatal.
#[derive(Debug, Clone, Default)]
pub struct Reducer {
    context: Option<Context>,
    round: Round,
    table: Table,
    diagnostics: Diagnostics,
}

impl Reducer {
    /// Classify and fold one raw line.
    pub fn feed(&mut self, line: &str) {
        self.step(Event::from(line));
    }

    /// Fold one event.
    pub fn step(&mut self, event: Event) {
        self.diagnostics.observe(event.kind());
        match event {
            Event::Unrecognized => {}
            Event::GameHeader { game, small, big } => {
                log::trace!("game {} {}/{}", game, small, big);
                self.context = Some(Context { game, small, big });
            }
            Event::RoundMarker(round) => {
                self.round = round;
            }
            Event::SeatAnnouncement { player, stack } => match self.context {
                None => self.headless(&player),
                Some(Context { game, small, big }) => {
                    let record = HandRecord::new(game, player, small, big, stack);
                    if !self.table.insert(record) {
                        log::debug!("duplicate seat in game {}", game);
                        self.diagnostics.duplicate();
                    }
                }
            },
            Event::BlindAssignment { player, blind } => {
                if let Some(record) = self.locate(&player) {
                    record.post(blind);
                }
            }
            Event::ActionEvent {
                player,
                action,
                amount,
            } => {
                let round = self.round;
                if let Some(record) = self.locate(&player) {
                    record.act(round, action, amount);
                }
            }
            Event::Settlement {
                player,
                outcome,
                amount,
            } => {
                if let Some(record) = self.locate(&player) {
                    record.settle(outcome.signed(amount));
                }
            }
        }
    }

    /// Record for `player` in the current game, counting misses.
    fn locate(&mut self, player: &str) -> Option<&mut HandRecord> {
        let Some(Context { game, .. }) = self.context else {
            self.headless(player);
            return None;
        };
        if !self.table.contains(game, player) {
            log::debug!("no seat for {} in game {}", player, game);
            self.diagnostics.orphan();
            return None;
        }
        self.table.get_mut(game, player)
    }

    fn headless(&mut self, player: &str) {
        log::warn!("event for {} before any game header", player);
        self.diagnostics.before_header();
    }

    pub fn game(&self) -> Option<GameID> {
        self.context.map(|c| c.game)
    }
    pub fn blinds(&self) -> Option<(Amount, Amount)> {
        self.context.map(|c| (c.small, c.big))
    }
    pub fn round(&self) -> Round {
        self.round
    }
    pub fn table(&self) -> &Table {
        &self.table
    }
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }
    pub fn finish(self) -> Table {
        self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::Action;

    #[test]
    fn header_sets_context_without_records() {
        let mut reducer = Reducer::default();
        reducer.feed("Game ID: 9 0.25/0.50");
        assert_eq!(reducer.game(), Some(9));
        assert_eq!(reducer.blinds(), Some((0.25, 0.50)));
        assert!(reducer.table().is_empty());
    }

    #[test]
    fn round_starts_preflop() {
        let mut reducer = Reducer::default();
        reducer.feed("Game ID: 1 1/2");
        reducer.feed("Seat 1: alice (50)");
        reducer.feed("Player alice calls (2)");
        let record = reducer.table().get(1, "alice").expect("seated");
        assert_eq!(record.action(Round::Pref), Some(Action::Call));
    }

    #[test]
    fn round_marker_is_most_recent_not_monotonic() {
        let mut reducer = Reducer::default();
        for line in [
            "Game ID: 1 1/2",
            "Seat 1: alice (50)",
            "*** RIVER ***:",
            "*** FLOP ***:",
            "Player alice bets (4)",
        ] {
            reducer.feed(line);
        }
        assert_eq!(reducer.round(), Round::Flop);
        let record = reducer.table().get(1, "alice").expect("seated");
        assert_eq!(record.action(Round::Flop), Some(Action::Bet));
        assert_eq!(record.action(Round::Rive), None);
    }

    #[test]
    fn round_carries_over_without_preflop_marker() {
        let mut reducer = Reducer::default();
        for line in [
            "Game ID: 1 1/2",
            "Seat 1: alice (50)",
            "*** TURN ***:",
            "Game ID: 2 1/2",
            "Seat 1: alice (46)",
            "Player alice folds",
        ] {
            reducer.feed(line);
        }
        assert_eq!(reducer.round(), Round::Turn);
        let record = reducer.table().get(2, "alice").expect("seated");
        assert_eq!(record.action(Round::Pref), None);
        assert_eq!(record.action(Round::Turn), Some(Action::Fold));
        reducer.feed("Game started at:");
        assert_eq!(reducer.round(), Round::Pref);
    }

    #[test]
    fn events_before_header_are_dropped() {
        let mut reducer = Reducer::default();
        reducer.feed("Seat 1: alice (50)");
        reducer.feed("Player alice folds");
        assert!(reducer.table().is_empty());
        assert_eq!(reducer.diagnostics().headless(), 2);
    }

    #[test]
    fn duplicate_seat_keeps_first_record() {
        let mut reducer = Reducer::default();
        reducer.feed("Game ID: 1 1/2");
        reducer.feed("Seat 1: alice (50)");
        reducer.feed("Seat 1: alice (75)");
        assert_eq!(reducer.table().len(), 1);
        assert_eq!(reducer.table().get(1, "alice").map(|r| r.stack()), Some(50.0));
        assert_eq!(reducer.diagnostics().duplicates(), 1);
    }

    #[test]
    fn orphans_are_counted() {
        let mut reducer = Reducer::default();
        reducer.feed("Game ID: 1 1/2");
        reducer.feed("Player ghost has big blind");
        reducer.feed("Player ghost raises (6)");
        reducer.feed("Player ghost Wins: 10");
        assert!(reducer.table().is_empty());
        assert_eq!(reducer.diagnostics().orphans(), 3);
        assert_eq!(reducer.diagnostics().lines(), 4);
    }
}
