//! Local persistence: the tournament snapshot as one JSON file, plus CSV import/export.

use crate::models::{Player, Tournament, TournamentError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::{Read, Write};
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed store file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Stored data is invalid: {0}")]
    Invalid(#[from] TournamentError),
}

/// Where the caller keeps its snapshot. The engine never calls this itself.
pub trait Persistence {
    fn load(&self) -> Result<Tournament, PersistenceError>;
    fn save(&self, tournament: &Tournament) -> Result<(), PersistenceError>;
}

/// A tournament stored as pretty-printed JSON in a single file.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn io_error(&self, source: std::io::Error) -> PersistenceError {
        PersistenceError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl Persistence for JsonFileStore {
    /// A missing file is an empty tournament with default settings.
    fn load(&self) -> Result<Tournament, PersistenceError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No store at {}, starting empty", self.path.display());
                return Ok(Tournament::default());
            }
            Err(e) => return Err(self.io_error(e)),
        };
        let tournament: Tournament = serde_json::from_str(&raw)?;
        tournament.settings.validate()?;
        let mut ids = HashSet::new();
        for p in &tournament.players {
            if !ids.insert(p.id.as_str()) {
                return Err(TournamentError::DuplicatePlayer(p.id.clone()).into());
            }
        }
        for round in &tournament.rounds {
            round.validate()?;
        }
        log::debug!(
            "Loaded {} player(s) and {} round(s) from {}",
            tournament.players.len(),
            tournament.rounds.len(),
            self.path.display()
        );
        Ok(tournament)
    }

    /// Write to a sibling temp file, then rename over the store.
    fn save(&self, tournament: &Tournament) -> Result<(), PersistenceError> {
        let json = serde_json::to_string_pretty(tournament)?;
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        std::fs::write(&tmp, json).map_err(|e| self.io_error(e))?;
        std::fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))?;
        log::debug!("Saved store to {}", self.path.display());
        Ok(())
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlayerRow {
    name: String,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    permanent_break: Option<bool>,
}

/// Read a player list. Columns: `name`, optional `id` and `permanentBreak`.
///
/// Ids are kept as given (empty means "assign one on registration"). Names are not validated
/// here; registration does that.
pub fn import_players_csv<R: Read>(reader: R) -> Result<Vec<Player>, PersistenceError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut players = Vec::new();
    for row in rdr.deserialize() {
        let row: PlayerRow = row?;
        let mut player = Player::with_id(row.id.unwrap_or_default(), row.name);
        player.permanent_break = row.permanent_break.unwrap_or(false);
        players.push(player);
    }
    Ok(players)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StandingsRow<'a> {
    rank: usize,
    id: &'a str,
    name: &'a str,
    wins: u32,
    total_points: u64,
    games: u32,
    bye_count: u32,
}

const STANDINGS_HEADER: [&str; 7] =
    ["rank", "id", "name", "wins", "totalPoints", "games", "byeCount"];

/// Write ranked standings (already in display order) as CSV with a header row.
///
/// The header is written even when there are no players.
pub fn write_standings_csv<W: Write>(
    writer: W,
    ranked: &[&Player],
) -> Result<(), PersistenceError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(STANDINGS_HEADER)?;
    for (i, p) in ranked.iter().enumerate() {
        wtr.serialize(StandingsRow {
            rank: i + 1,
            id: &p.id,
            name: &p.name,
            wins: p.wins,
            total_points: p.total_points,
            games: p.games,
            bye_count: p.bye_count,
        })?;
    }
    wtr.flush().map_err(|source| PersistenceError::Io {
        path: PathBuf::from("<csv output>"),
        source,
    })?;
    Ok(())
}
