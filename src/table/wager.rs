use crate::Amount;
use crate::parse::Action;

/// Final action and wagered amount of one player in one round.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Wager {
    action: Option<Action>,
    amount: Amount,
}

impl Wager {
    pub fn action(&self) -> Option<Action> {
        self.action
    }
    pub fn amount(&self) -> Amount {
        self.amount
    }
    /// Overwrites the action. The amount is only replaced when the line
    /// carried one, so a bare `calls` keeps any earlier stated size.
    pub fn record(&mut self, action: Action, amount: Option<Amount>) {
        self.action = Some(action);
        if let Some(amount) = amount {
            self.amount = amount;
        }
    }
    pub fn is_voluntary(&self) -> bool {
        self.action.is_some_and(|a| a.is_voluntary())
    }
    pub fn is_aggressive(&self) -> bool {
        self.action.is_some_and(|a| a.is_aggressive())
    }
    /// Column label, `none` when the player never acted.
    pub fn label(&self) -> &'static str {
        self.action.map_or("none", |a| a.name())
    }
}

impl From<(Action, Amount)> for Wager {
    fn from((action, amount): (Action, Amount)) -> Self {
        Self {
            action: Some(action),
            amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_no_action() {
        let wager = Wager::default();
        assert_eq!(wager.action(), None);
        assert_eq!(wager.amount(), 0.0);
        assert_eq!(wager.label(), "none");
    }

    #[test]
    fn last_write_wins() {
        let mut wager = Wager::default();
        wager.record(Action::Bet, Some(4.0));
        wager.record(Action::Raise, Some(12.0));
        assert_eq!(wager, Wager::from((Action::Raise, 12.0)));
    }

    #[test]
    fn missing_amount_keeps_previous() {
        let mut wager = Wager::default();
        wager.record(Action::Bet, Some(4.0));
        wager.record(Action::Fold, None);
        assert_eq!(wager.action(), Some(Action::Fold));
        assert_eq!(wager.amount(), 4.0);
    }
}
