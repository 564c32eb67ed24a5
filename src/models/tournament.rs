//! Tournament snapshot: players, round history and settings.

use crate::models::player::{new_id, Player, PlayerId};
use crate::models::round::{Round, RoundId};
use crate::models::settings::Settings;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum TournamentError {
    /// Player names must contain something other than whitespace.
    #[error("Player name must not be empty")]
    EmptyName,
    /// A player with this id is already registered.
    #[error("A player with id {0} already exists")]
    DuplicatePlayer(PlayerId),
    /// A round record breaks a structural rule (double booking, bad court number, ...).
    #[error("Invalid round: {reason}")]
    InvalidRound { reason: String },
    /// Settings that cannot drive a tournament (no courts, zero win points).
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
    #[error("Player not found: {0}")]
    PlayerNotFound(PlayerId),
    #[error("Round not found: {0}")]
    RoundNotFound(RoundId),
    #[error("Court {court_number} not found in round {round_id}")]
    CourtNotFound { round_id: RoundId, court_number: u32 },
}

/// Everything the engine reads: the caller owns it and persists it.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    #[serde(default)]
    pub players: Vec<Player>,
    /// Round history in insertion order. Recency is by `Round::date`.
    #[serde(default)]
    pub rounds: Vec<Round>,
    #[serde(default)]
    pub settings: Settings,
}

impl Tournament {
    /// Create a tournament with initial players and default settings.
    pub fn with_players(players: Vec<Player>) -> Self {
        Self {
            players,
            ..Self::default()
        }
    }

    pub fn player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn get_player_mut(&mut self, id: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    pub fn round(&self, id: &str) -> Option<&Round> {
        self.rounds.iter().find(|r| r.id == id)
    }

    /// Register a player by name. Returns the new id.
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<PlayerId, TournamentError> {
        self.register_player(Player::with_id(String::new(), name))
    }

    /// Register a full player record, keeping its id if it has one.
    ///
    /// The name is trimmed and must not be empty; an empty id is replaced by a fresh one.
    pub fn register_player(&mut self, mut player: Player) -> Result<PlayerId, TournamentError> {
        let name = player.name.trim();
        if name.is_empty() {
            return Err(TournamentError::EmptyName);
        }
        player.name = name.to_string();
        if player.id.trim().is_empty() {
            player.id = new_id();
        }
        if self.player(&player.id).is_some() {
            return Err(TournamentError::DuplicatePlayer(player.id));
        }
        log::debug!("Registered player {} ({})", player.name, player.id);
        let id = player.id.clone();
        self.players.push(player);
        Ok(id)
    }

    pub fn rename_player(&mut self, id: &str, name: &str) -> Result<(), TournamentError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TournamentError::EmptyName);
        }
        let p = self
            .get_player_mut(id)
            .ok_or_else(|| TournamentError::PlayerNotFound(id.to_string()))?;
        p.name = name.to_string();
        Ok(())
    }

    /// Put a player on (or take them off) permanent break.
    pub fn set_permanent_break(&mut self, id: &str, on_break: bool) -> Result<(), TournamentError> {
        self.get_player_mut(id)
            .ok_or_else(|| TournamentError::PlayerNotFound(id.to_string()))?
            .permanent_break = on_break;
        Ok(())
    }

    /// Remove a player. Rounds that mention them keep the now orphaned id.
    pub fn remove_player(&mut self, id: &str) -> Result<Player, TournamentError> {
        let idx = self
            .players
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| TournamentError::PlayerNotFound(id.to_string()))?;
        let referenced = self.rounds.iter().filter(|r| r.involves(id)).count();
        if referenced > 0 {
            log::warn!(
                "Removing player {} who appears in {} round(s); those entries are orphaned",
                id,
                referenced
            );
        }
        Ok(self.players.remove(idx))
    }

    pub fn update_settings(&mut self, settings: Settings) -> Result<(), TournamentError> {
        settings.validate()?;
        self.settings = settings;
        Ok(())
    }

    /// Append a round to the history after checking its invariants.
    pub fn push_round(&mut self, round: Round) -> Result<RoundId, TournamentError> {
        round.validate()?;
        if round.id.is_empty() {
            return Err(TournamentError::InvalidRound {
                reason: "round id must not be empty".to_string(),
            });
        }
        if self.round(&round.id).is_some() {
            return Err(TournamentError::InvalidRound {
                reason: format!("round {} already exists", round.id),
            });
        }
        let id = round.id.clone();
        self.rounds.push(round);
        Ok(id)
    }

    pub fn remove_round(&mut self, id: &str) -> Result<Round, TournamentError> {
        let idx = self
            .rounds
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| TournamentError::RoundNotFound(id.to_string()))?;
        Ok(self.rounds.remove(idx))
    }

    /// Enter the score of one court. Only score fields of a round ever change.
    pub fn record_score(
        &mut self,
        round_id: &str,
        court_number: u32,
        score_home: u32,
        score_away: u32,
    ) -> Result<(), TournamentError> {
        let round = self
            .rounds
            .iter_mut()
            .find(|r| r.id == round_id)
            .ok_or_else(|| TournamentError::RoundNotFound(round_id.to_string()))?;
        let court = round
            .court_mut(court_number)
            .ok_or_else(|| TournamentError::CourtNotFound {
                round_id: round_id.to_string(),
                court_number,
            })?;
        court.score_home = score_home;
        court.score_away = score_away;
        Ok(())
    }

    /// Rounds ordered by timestamp, newest first.
    pub fn rounds_newest_first(&self) -> Vec<&Round> {
        let mut rounds: Vec<&Round> = self.rounds.iter().collect();
        rounds.sort_by_key(|r| Reverse(r.date));
        rounds
    }

    /// Players ranked best-first: wins, then total points.
    pub fn standings(&self) -> Vec<&Player> {
        let mut ranked: Vec<&Player> = self.players.iter().collect();
        crate::logic::sort_best_first(&mut ranked);
        ranked
    }
}
