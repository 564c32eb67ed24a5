//! Player and PlayerStats data structures.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in courts, bye lists and lookups).
pub type PlayerId = String;

/// Generate a fresh opaque id for a player or round.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// The derived part of a player record. Always rebuilt from the round history.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub wins: u32,
    pub total_points: u64,
    pub games: u32,
    pub bye_count: u32,
}

impl PlayerStats {
    pub fn from_player(p: &Player) -> Self {
        Self {
            wins: p.wins,
            total_points: p.total_points,
            games: p.games,
            bye_count: p.bye_count,
        }
    }
}

/// A registered player.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    #[serde(default)]
    pub id: PlayerId,
    pub name: String,
    /// Sitting out for the rest of the event; never planned into a round.
    #[serde(default)]
    pub permanent_break: bool,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub total_points: u64,
    #[serde(default)]
    pub games: u32,
    #[serde(default)]
    pub bye_count: u32,
}

impl Player {
    /// Create a new player with a fresh id. Stats start at zero.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(new_id(), name)
    }

    /// Create a player with a caller-chosen id (imports, fixtures).
    pub fn with_id(id: impl Into<PlayerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            permanent_break: false,
            wins: 0,
            total_points: 0,
            games: 0,
            bye_count: 0,
        }
    }

    /// Current derived stats as a separate struct.
    pub fn stats(&self) -> PlayerStats {
        PlayerStats::from_player(self)
    }

    /// Overwrite every derived field. Name and break flag are left alone.
    pub fn apply_stats(&mut self, stats: PlayerStats) {
        self.wins = stats.wins;
        self.total_points = stats.total_points;
        self.games = stats.games;
        self.bye_count = stats.bye_count;
    }

    /// Whether the player takes part in round planning.
    pub fn is_active(&self) -> bool {
        !self.permanent_break
    }
}
