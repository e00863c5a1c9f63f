use crate::parse::Kind;
use std::collections::BTreeMap;

/// Data-quality counters collected while folding a log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    lines: usize,
    kinds: BTreeMap<Kind, usize>,
    orphans: usize,
    duplicates: usize,
    headless: usize,
    games: usize,
}

impl Diagnostics {
    pub fn lines(&self) -> usize {
        self.lines
    }
    pub fn count(&self, kind: Kind) -> usize {
        self.kinds.get(&kind).copied().unwrap_or(0)
    }
    pub fn unrecognized(&self) -> usize {
        self.count(Kind::Unrecognized)
    }
    /// Blind, action or settlement events with no matching seat.
    pub fn orphans(&self) -> usize {
        self.orphans
    }
    /// Seat announcements repeated within one game.
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }
    /// Events that arrived before any game header.
    pub fn headless(&self) -> usize {
        self.headless
    }
    pub fn games(&self) -> usize {
        self.games
    }

    pub(crate) fn observe(&mut self, kind: Kind) {
        self.lines += 1;
        *self.kinds.entry(kind).or_default() += 1;
        if kind == Kind::Header {
            self.games += 1;
        }
    }
    pub(crate) fn orphan(&mut self) {
        self.orphans += 1;
    }
    pub(crate) fn duplicate(&mut self) {
        self.duplicates += 1;
    }
    pub(crate) fn before_header(&mut self) {
        self.headless += 1;
    }
}

impl std::fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} lines, {} games", self.lines, self.games)?;
        for kind in Kind::all() {
            write!(f, ", {} {}", self.count(*kind), kind)?;
        }
        write!(
            f,
            ", {} orphaned, {} duplicate seats, {} before header",
            self.orphans, self.duplicates, self.headless
        )
    }
}
