//! Tournament settings: court capacity and how games are won.

use crate::models::tournament::TournamentError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_COURTS: u32 = 3;
pub const DEFAULT_WIN_POINTS: u32 = 11;

/// Who gets the win on a court.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WinRule {
    /// The side with more points wins, whatever the score.
    #[default]
    HighestScore,
    /// The side with more points wins only once it has reached `win_points`.
    ReachWinPoints,
}

/// What happens to eligible players the pairing could not place on a court.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LeftoverPolicy {
    /// Leave them out of the round (they are neither playing nor on bye).
    #[default]
    Drop,
    /// Record them in the round's bye list.
    Bye,
}

impl FromStr for WinRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "highest-score" | "highestScore" => Ok(WinRule::HighestScore),
            "reach-win-points" | "reachWinPoints" => Ok(WinRule::ReachWinPoints),
            other => Err(format!(
                "unknown win rule '{other}' (expected highest-score or reach-win-points)"
            )),
        }
    }
}

impl fmt::Display for WinRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WinRule::HighestScore => write!(f, "highest-score"),
            WinRule::ReachWinPoints => write!(f, "reach-win-points"),
        }
    }
}

impl FromStr for LeftoverPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "drop" => Ok(LeftoverPolicy::Drop),
            "bye" => Ok(LeftoverPolicy::Bye),
            other => Err(format!("unknown leftover policy '{other}' (expected drop or bye)")),
        }
    }
}

impl fmt::Display for LeftoverPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeftoverPolicy::Drop => write!(f, "drop"),
            LeftoverPolicy::Bye => write!(f, "bye"),
        }
    }
}

/// Process-wide tournament configuration.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Courts playable at the same time. Four players per court.
    #[serde(default = "default_courts")]
    pub courts: u32,
    /// Points that make a completed game.
    #[serde(default = "default_win_points")]
    pub win_points: u32,
    #[serde(default)]
    pub win_rule: WinRule,
    #[serde(default)]
    pub leftover: LeftoverPolicy,
}

fn default_courts() -> u32 {
    DEFAULT_COURTS
}

fn default_win_points() -> u32 {
    DEFAULT_WIN_POINTS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            courts: DEFAULT_COURTS,
            win_points: DEFAULT_WIN_POINTS,
            win_rule: WinRule::default(),
            leftover: LeftoverPolicy::default(),
        }
    }
}

impl Settings {
    pub fn new(courts: u32, win_points: u32) -> Self {
        Self {
            courts,
            win_points,
            ..Self::default()
        }
    }

    /// Players that fit on the courts at once.
    pub fn capacity(&self) -> usize {
        self.courts as usize * crate::models::PLAYERS_PER_COURT
    }

    pub fn validate(&self) -> Result<(), TournamentError> {
        if self.courts < 1 {
            return Err(TournamentError::InvalidConfiguration {
                reason: "courts must be at least 1".to_string(),
            });
        }
        if self.win_points < 1 {
            return Err(TournamentError::InvalidConfiguration {
                reason: "win points must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
