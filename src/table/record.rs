use super::*;
use crate::Amount;
use crate::GameID;
use crate::WINRATE_HANDS;
use crate::parse::Action;
use crate::parse::Blind;
use crate::parse::Round;

/// One player's participation in one game.
/// Composite key: (game, player)
#[derive(Debug, Clone, PartialEq)]
pub struct HandRecord {
    game: GameID,
    player: String,
    small: Amount,
    big: Amount,
    stack: Amount,
    is_small: bool,
    is_big: bool,
    wagers: [Wager; 4],
    winnings: Amount,
}

impl HandRecord {
    pub fn new(game: GameID, player: String, small: Amount, big: Amount, stack: Amount) -> Self {
        Self {
            game,
            player,
            small,
            big,
            stack,
            is_small: false,
            is_big: false,
            wagers: [Wager::default(); 4],
            winnings: 0.0,
        }
    }
    pub fn game(&self) -> GameID {
        self.game
    }
    pub fn player(&self) -> &str {
        &self.player
    }
    pub fn small_blind(&self) -> Amount {
        self.small
    }
    pub fn big_blind(&self) -> Amount {
        self.big
    }
    pub fn stack(&self) -> Amount {
        self.stack
    }
    pub fn is_small_blind(&self) -> bool {
        self.is_small
    }
    pub fn is_big_blind(&self) -> bool {
        self.is_big
    }
    pub fn wager(&self, round: Round) -> &Wager {
        &self.wagers[usize::from(round)]
    }
    pub fn action(&self, round: Round) -> Option<Action> {
        self.wager(round).action()
    }
    pub fn amount(&self, round: Round) -> Amount {
        self.wager(round).amount()
    }
    /// Signed: positive won, negative lost.
    pub fn winnings(&self) -> Amount {
        self.winnings
    }
    /// Winnings normalized by one hundred big blinds.
    pub fn win_share(&self) -> Amount {
        if self.big > 0.0 {
            self.winnings / (WINRATE_HANDS * self.big)
        } else {
            0.0
        }
    }
    /// Acted in at least one of flop, turn or river.
    pub fn saw_postflop(&self) -> bool {
        Round::postflop()
            .iter()
            .any(|round| self.action(*round).is_some())
    }
    /// Bet or raised in at least one of flop, turn or river.
    pub fn aggressed_postflop(&self) -> bool {
        Round::postflop()
            .iter()
            .any(|round| self.wager(*round).is_aggressive())
    }

    pub fn post(&mut self, blind: Blind) {
        match blind {
            Blind::Small => self.is_small = true,
            Blind::Big => self.is_big = true,
        }
    }
    pub fn act(&mut self, round: Round, action: Action, amount: Option<Amount>) {
        self.wagers[usize::from(round)].record(action, amount);
    }
    pub fn settle(&mut self, winnings: Amount) {
        self.winnings = winnings;
    }
}

/// Flat export row, one column per record attribute.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Row<'a> {
    pub game_id: GameID,
    pub player_id: &'a str,
    pub small_blind_amount: Amount,
    pub big_blind_amount: Amount,
    pub starting_stack: Amount,
    pub is_small_blind: bool,
    pub is_big_blind: bool,
    pub preflop_action: &'static str,
    pub preflop_amount: Amount,
    pub flop_action: &'static str,
    pub flop_amount: Amount,
    pub turn_action: &'static str,
    pub turn_amount: Amount,
    pub river_action: &'static str,
    pub river_amount: Amount,
    pub final_winnings: Amount,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub win_share: Option<Amount>,
}

impl<'a> From<&'a HandRecord> for Row<'a> {
    fn from(record: &'a HandRecord) -> Self {
        let [pref, flop, turn, rive] = &record.wagers;
        Self {
            game_id: record.game,
            player_id: &record.player,
            small_blind_amount: record.small,
            big_blind_amount: record.big,
            starting_stack: record.stack,
            is_small_blind: record.is_small,
            is_big_blind: record.is_big,
            preflop_action: pref.label(),
            preflop_amount: pref.amount(),
            flop_action: flop.label(),
            flop_amount: flop.amount(),
            turn_action: turn.label(),
            turn_amount: turn.amount(),
            river_action: rive.label(),
            river_amount: rive.amount(),
            final_winnings: record.winnings,
            win_share: None,
        }
    }
}

impl Row<'_> {
    pub fn with_share(mut self, share: Amount) -> Self {
        self.win_share = Some(share);
        self
    }
}

impl std::fmt::Display for HandRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "#{:<10} {:<16} {}/{} ({})", self.game, self.player, self.small, self.big, self.stack)?;
        for round in Round::all() {
            let wager = self.wager(*round);
            write!(f, " {}:{}", round, wager.label())?;
            if wager.amount() > 0.0 {
                write!(f, "({})", wager.amount())?;
            }
        }
        write!(f, " {:+}", self.winnings)
    }
}
