//! Round, Court and Side for 2v2 Americano play.

use crate::models::player::{new_id, PlayerId};
use crate::models::settings::{Settings, WinRule};
use crate::models::tournament::TournamentError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Unique identifier for a round.
pub type RoundId = String;

/// A team is always two players.
pub type Pair = [PlayerId; 2];

/// Which side of a court won.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Side {
    Home,
    Away,
}

/// One court of a round: home pair vs away pair.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Court {
    pub court_number: u32,
    pub home: Pair,
    pub away: Pair,
    #[serde(default)]
    pub score_home: u32,
    #[serde(default)]
    pub score_away: u32,
}

impl Court {
    pub fn new(court_number: u32, home: Pair, away: Pair) -> Self {
        Self {
            court_number,
            home,
            away,
            score_home: 0,
            score_away: 0,
        }
    }

    /// Ids on the given side.
    pub fn team(&self, side: Side) -> &Pair {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    /// Score of the given side.
    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Home => self.score_home,
            Side::Away => self.score_away,
        }
    }

    /// All four ids on this court, home first.
    pub fn player_ids(&self) -> impl Iterator<Item = &PlayerId> {
        self.home.iter().chain(self.away.iter())
    }

    /// Winning side under the given rule, or None on a tie / unfinished game.
    pub fn winner(&self, rule: WinRule, win_points: u32) -> Option<Side> {
        let (a, b) = (self.score_home, self.score_away);
        let (side, score) = if a > b {
            (Side::Home, a)
        } else if b > a {
            (Side::Away, b)
        } else {
            return None;
        };
        match rule {
            WinRule::HighestScore => Some(side),
            WinRule::ReachWinPoints if score >= win_points => Some(side),
            WinRule::ReachWinPoints => None,
        }
    }

    /// Winner according to the tournament settings.
    pub fn winner_under(&self, settings: &Settings) -> Option<Side> {
        self.winner(settings.win_rule, settings.win_points)
    }
}

/// One time-slot: court assignments plus the players sitting out.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    #[serde(default)]
    pub id: RoundId,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub courts: Vec<Court>,
    #[serde(default)]
    pub byes: Vec<PlayerId>,
}

impl Round {
    /// New round stamped with a fresh id and the current time.
    pub fn new(courts: Vec<Court>, byes: Vec<PlayerId>) -> Self {
        Self {
            id: new_id(),
            date: Utc::now(),
            courts,
            byes,
        }
    }

    pub fn court(&self, court_number: u32) -> Option<&Court> {
        self.courts.iter().find(|c| c.court_number == court_number)
    }

    pub fn court_mut(&mut self, court_number: u32) -> Option<&mut Court> {
        self.courts.iter_mut().find(|c| c.court_number == court_number)
    }

    /// Every id booked in this round: court players first, then byes.
    pub fn player_ids(&self) -> impl Iterator<Item = &PlayerId> {
        self.courts
            .iter()
            .flat_map(|c| c.player_ids())
            .chain(self.byes.iter())
    }

    /// Whether the player is on a court or on bye in this round.
    pub fn involves(&self, id: &str) -> bool {
        self.player_ids().any(|p| p == id)
    }

    /// Check the structural invariants of a round record.
    ///
    /// Court numbers must be positive and unique, and no id may appear twice across all
    /// courts and the bye list (which also covers the four-distinct-ids rule of a court).
    pub fn validate(&self) -> Result<(), TournamentError> {
        let mut numbers = HashSet::new();
        for c in &self.courts {
            if c.court_number == 0 {
                return Err(TournamentError::InvalidRound {
                    reason: "court numbers start at 1".to_string(),
                });
            }
            if !numbers.insert(c.court_number) {
                return Err(TournamentError::InvalidRound {
                    reason: format!("court {} appears twice", c.court_number),
                });
            }
        }
        let mut seen = HashSet::new();
        for id in self.player_ids() {
            if !seen.insert(id.as_str()) {
                return Err(TournamentError::InvalidRound {
                    reason: format!("player {} is booked twice", id),
                });
            }
        }
        Ok(())
    }
}
