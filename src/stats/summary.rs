use super::*;
use crate::table::HandRecord;
use crate::table::Table;
use std::collections::HashMap;
use std::io::Write;

/// Profiles of every player with enough hands, in first-seen order.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    min_hands: usize,
    profiles: Vec<Profile>,
}

impl Summary {
    pub fn from_table(table: &Table, min_hands: usize) -> Self {
        let mut order = Vec::<&str>::new();
        let mut hands = HashMap::<&str, Vec<&HandRecord>>::new();
        for record in table.iter() {
            hands
                .entry(record.player())
                .or_insert_with(|| {
                    order.push(record.player());
                    Vec::new()
                })
                .push(record);
        }
        let profiles = order
            .into_iter()
            .filter_map(|player| hands.remove(player).map(|h| (player, h)))
            .filter(|(_, h)| h.len() >= min_hands)
            .map(|(player, h)| Profile::from((player, h)))
            .collect::<Vec<_>>();
        log::debug!(
            "{} of {} players have at least {} hands",
            profiles.len(),
            table.players().len(),
            min_hands
        );
        Self {
            min_hands,
            profiles,
        }
    }
    pub fn min_hands(&self) -> usize {
        self.min_hands
    }
    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }
    pub fn get(&self, player: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.player == player)
    }
    pub fn len(&self) -> usize {
        self.profiles.len()
    }
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
    pub fn fit(&self) -> anyhow::Result<Fit> {
        Fit::ols(&self.profiles)
    }

    pub fn write_csv<W: Write>(&self, writer: W) -> anyhow::Result<()> {
        let mut csv = csv::Writer::from_writer(writer);
        for profile in self.profiles.iter() {
            csv.serialize(profile)?;
        }
        csv.flush()?;
        Ok(())
    }
    pub fn write_json<W: Write>(&self, writer: W) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(writer, &self.profiles)?;
        Ok(())
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for profile in self.profiles.iter() {
            writeln!(f, "{}", profile)?;
        }
        Ok(())
    }
}
