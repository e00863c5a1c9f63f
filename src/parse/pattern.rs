//! Line grammar of the hand-history log.
//!
//! Header and seat lines are matched from the start of the line; every other
//! shape may appear anywhere in it. Decimals accept an optional integer part
//! (`.5`, `2`, `2.50`).
use super::*;
use crate::Amount;
use crate::GameID;
use regex::Captures;
use regex::Regex;
use std::sync::LazyLock;

macro_rules! decimal {
    () => {
        r"(\d*\.\d+|\d+)"
    };
}

static HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(r"^Game ID: (\d+) ", decimal!(), "/", decimal!())).expect("header regex")
});
static SEAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(r"^Seat (\d+): (\S+) \(", decimal!(), r"\)")).expect("seat regex")
});
static BLIND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Player (\S+) has (small|big) blind").expect("blind regex")
});
static SETTLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(r"Player (\S+)\s.*?\b(Wins|Loses): ", decimal!())).expect("settle regex")
});
static ACTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"Player (\S+) (bets|folds|calls|raises)\b(?: \(",
        decimal!(),
        r"\))?"
    ))
    .expect("action regex")
});

fn amount(caps: &Captures, i: usize) -> Option<Amount> {
    caps.get(i)?.as_str().parse::<Amount>().ok()
}

/// `Game ID: <int> <decimal>/<decimal>`
pub fn header(line: &str) -> Option<Event> {
    let caps = HEADER.captures(line)?;
    Some(Event::GameHeader {
        game: caps[1].parse::<GameID>().ok()?,
        small: amount(&caps, 2)?,
        big: amount(&caps, 3)?,
    })
}

/// `Seat <int>: <token> (<decimal>)`
pub fn seat(line: &str) -> Option<Event> {
    let caps = SEAT.captures(line)?;
    Some(Event::SeatAnnouncement {
        player: caps[2].to_string(),
        stack: amount(&caps, 3)?,
    })
}

/// Any of the four round markers.
pub fn round(line: &str) -> Option<Event> {
    Round::detect(line).map(Event::RoundMarker)
}

/// `Player <token> has small blind` / `has big blind`
pub fn blind(line: &str) -> Option<Event> {
    let caps = BLIND.captures(line)?;
    Some(Event::BlindAssignment {
        player: caps[1].to_string(),
        blind: Blind::try_from(&caps[2]).ok()?,
    })
}

/// `Player <token> ... Wins: <decimal>` / `Loses: <decimal>`
pub fn settlement(line: &str) -> Option<Event> {
    let caps = SETTLE.captures(line)?;
    Some(Event::Settlement {
        player: caps[1].to_string(),
        outcome: Outcome::try_from(&caps[2]).ok()?,
        amount: amount(&caps, 3)?,
    })
}

/// `Player <token> <bets|folds|calls|raises> [(<decimal>)]`
pub fn action(line: &str) -> Option<Event> {
    let caps = ACTION.captures(line)?;
    Some(Event::ActionEvent {
        player: caps[1].to_string(),
        action: Action::try_from(&caps[2]).ok()?,
        amount: amount(&caps, 3),
    })
}
