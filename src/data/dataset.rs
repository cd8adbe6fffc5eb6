//! Ball-by-ball dataset loaded from the cleaned IPL CSV

use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

use crate::features::PlayerReport;
use crate::{CricketError, MatchRecord, Result};

/// Columns that must be present in the CSV header
pub const REQUIRED_COLUMNS: [&str; 5] = ["batter", "venue", "season", "match_number", "runs_batter"];

/// Read-only ball-by-ball dataset
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<MatchRecord>,
}

/// Summary counts for `data status`
#[derive(Debug, Clone)]
pub struct DatasetStats {
    pub record_count: usize,
    pub batter_count: usize,
    pub venue_count: usize,
    pub season_count: usize,
}

impl Dataset {
    /// Load dataset from a CSV file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| {
            CricketError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to open dataset {}: {}", path.display(), e),
            ))
        })?;
        let dataset = Self::from_reader(file)?;
        log::info!(
            "Loaded {} records from {}",
            dataset.records.len(),
            path.display()
        );
        Ok(dataset)
    }

    /// Parse dataset from any CSV reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(CricketError::MissingColumn(column.to_string()));
            }
        }

        let records = reader
            .deserialize::<MatchRecord>()
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Dataset { records })
    }

    /// All records in file order
    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records for one batter, preserving file order
    pub fn player_history(&self, batter: &str) -> PlayerHistory {
        let records = self
            .records
            .iter()
            .filter(|r| r.batter == batter)
            .cloned()
            .collect();

        PlayerHistory {
            batter: batter.to_string(),
            records,
        }
    }

    /// Sorted distinct batter names
    pub fn players(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.batter.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Sorted distinct venues, skipping rows without one
    pub fn venues(&self) -> Vec<String> {
        self.records
            .iter()
            .filter_map(|r| r.venue.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Summary report for a batter, optionally focused on a venue
    ///
    /// Unknown batters produce an all-zero report rather than an error.
    pub fn report(&self, batter: &str, venue: Option<&str>) -> PlayerReport {
        let history = self.player_history(batter);
        if history.is_empty() {
            log::warn!("No records for batter '{}'", batter);
        }
        PlayerReport::build(&history, venue)
    }

    pub fn stats(&self) -> DatasetStats {
        let seasons: BTreeSet<&str> = self.records.iter().map(|r| r.season.as_str()).collect();
        DatasetStats {
            record_count: self.records.len(),
            batter_count: self.players().len(),
            venue_count: self.venues().len(),
            season_count: seasons.len(),
        }
    }
}

/// All balls faced by a single batter, in dataset order
#[derive(Debug, Clone)]
pub struct PlayerHistory {
    pub batter: String,
    records: Vec<MatchRecord>,
}

impl PlayerHistory {
    pub fn new(batter: impl Into<String>, records: Vec<MatchRecord>) -> Self {
        PlayerHistory {
            batter: batter.into(),
            records,
        }
    }

    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
