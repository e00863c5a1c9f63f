use crate::Amount;
use crate::Percent;
use crate::parse::Action;
use crate::parse::Round;
use crate::table::HandRecord;

/// Behavioral statistics of one player over their recorded hands.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Profile {
    pub player: String,
    /// Hands with a seat announcement.
    pub hands: usize,
    /// Hands with any flop, turn or river action.
    pub postflop: usize,
    /// Voluntarily put money in preflop, by call or raise.
    pub vpip: Percent,
    /// Raised preflop.
    pub pfr: Percent,
    /// Bet or raised postflop, over postflop hands.
    pub agg: Percent,
    /// Sum of per-hand winnings in units of one hundred big blinds.
    pub bbw100: Amount,
}

impl Profile {
    /// Regression features in fixed order.
    pub fn features(&self) -> [f64; 3] {
        [self.vpip, self.pfr, self.agg]
    }
    pub fn target(&self) -> f64 {
        self.bbw100
    }
}

fn percent(count: usize, total: usize) -> Percent {
    match total {
        0 => 0.0,
        n => 100.0 * count as Percent / n as Percent,
    }
}

impl<'a, I> From<(&str, I)> for Profile
where
    I: IntoIterator<Item = &'a HandRecord>,
{
    fn from((player, hands): (&str, I)) -> Self {
        let (hands, vpips, raises, postflop, aggressive, bbw100) = hands.into_iter().fold(
            (0usize, 0usize, 0usize, 0usize, 0usize, 0.0),
            |(n, v, r, p, a, w), hand| {
                (
                    n + 1,
                    v + hand.wager(Round::Pref).is_voluntary() as usize,
                    r + (hand.action(Round::Pref) == Some(Action::Raise)) as usize,
                    p + hand.saw_postflop() as usize,
                    a + hand.aggressed_postflop() as usize,
                    w + hand.win_share(),
                )
            },
        );
        Self {
            player: player.to_string(),
            hands,
            postflop,
            vpip: percent(vpips, hands),
            pfr: percent(raises, hands),
            agg: percent(aggressive, postflop),
            bbw100,
        }
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:<16} {:>6} hands  VPIP {:>5.1}  PFR {:>5.1}  AGG {:>5.1}  BBW/100 {:>+8.3}",
            self.player, self.hands, self.vpip, self.pfr, self.agg, self.bbw100
        )
    }
}
