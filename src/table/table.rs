use super::*;
use crate::GameID;
use crate::parse::Event;
use anyhow::Context;
use std::collections::HashMap;
use std::collections::HashSet;
use std::io::BufRead;
use std::io::Write;
use std::path::Path;

/// Normalized hand records in first-seen order, indexed by (game, player).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    records: Vec<HandRecord>,
    index: HashMap<GameID, HashMap<String, usize>>,
}

impl Table {
    /// Fold a sequence of log lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .fold(Reducer::default(), |mut reducer, line| {
                reducer.feed(line.as_ref());
                reducer
            })
            .finish()
    }
    /// Fold a sequence of already classified events.
    pub fn from_events<I>(events: I) -> Self
    where
        I: IntoIterator<Item = Event>,
    {
        events
            .into_iter()
            .fold(Reducer::default(), |mut reducer, event| {
                reducer.step(event);
                reducer
            })
            .finish()
    }
    /// Read and fold a log file. Bytes that are not valid UTF-8 are replaced
    /// rather than rejected.
    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<(Self, Diagnostics)> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).with_context(|| format!("open {}", path.display()))?;
        let mut reader = std::io::BufReader::new(file);
        let mut reducer = Reducer::default();
        let ref mut buffer = Vec::new();
        loop {
            buffer.clear();
            let n = reader
                .read_until(b'\n', buffer)
                .with_context(|| format!("read {}", path.display()))?;
            if n == 0 {
                break;
            }
            reducer.feed(&String::from_utf8_lossy(&buffer[..]));
        }
        log::info!("{}: {}", path.display(), reducer.diagnostics());
        let diagnostics = reducer.diagnostics().clone();
        Ok((reducer.finish(), diagnostics))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &HandRecord> {
        self.records.iter()
    }
    pub fn records(&self) -> &[HandRecord] {
        &self.records
    }
    pub fn get(&self, game: GameID, player: &str) -> Option<&HandRecord> {
        self.position(game, player).map(|i| &self.records[i])
    }
    pub fn contains(&self, game: GameID, player: &str) -> bool {
        self.position(game, player).is_some()
    }
    /// Distinct game ids in first-seen order.
    pub fn games(&self) -> Vec<GameID> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .map(HandRecord::game)
            .filter(|game| seen.insert(*game))
            .collect()
    }
    /// Distinct player ids in first-seen order.
    pub fn players(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .map(HandRecord::player)
            .filter(|player| seen.insert(*player))
            .collect()
    }
    pub fn hands_of<'a>(&'a self, player: &'a str) -> impl Iterator<Item = &'a HandRecord> + 'a {
        self.records.iter().filter(move |r| r.player() == player)
    }

    /// Write one CSV row per record, optionally with the win share column.
    pub fn write_csv<W: Write>(&self, writer: W, shares: bool) -> anyhow::Result<()> {
        let mut csv = csv::Writer::from_writer(writer);
        for row in self.rows(shares) {
            csv.serialize(row)?;
        }
        csv.flush()?;
        Ok(())
    }
    /// Write the records as a JSON array.
    pub fn write_json<W: Write>(&self, writer: W, shares: bool) -> anyhow::Result<()> {
        let rows = self.rows(shares).collect::<Vec<_>>();
        serde_json::to_writer_pretty(writer, &rows)?;
        Ok(())
    }
    fn rows(&self, shares: bool) -> impl Iterator<Item = Row<'_>> {
        self.records.iter().map(move |record| match shares {
            true => Row::from(record).with_share(record.win_share()),
            false => Row::from(record),
        })
    }

    fn position(&self, game: GameID, player: &str) -> Option<usize> {
        self.index.get(&game)?.get(player).copied()
    }
    pub(crate) fn get_mut(&mut self, game: GameID, player: &str) -> Option<&mut HandRecord> {
        self.position(game, player).map(|i| &mut self.records[i])
    }
    /// Insert unless the (game, player) pair already exists.
    /// Returns whether a record was created.
    pub(crate) fn insert(&mut self, record: HandRecord) -> bool {
        let slot = self.index.entry(record.game()).or_default();
        match slot.contains_key(record.player()) {
            true => false,
            false => {
                slot.insert(record.player().to_string(), self.records.len());
                self.records.push(record);
                true
            }
        }
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a HandRecord;
    type IntoIter = std::slice::Iter<'a, HandRecord>;
    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for record in self.records.iter() {
            writeln!(f, "{}", record)?;
        }
        Ok(())
    }
}
