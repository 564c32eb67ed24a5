//! Data structures for an Americano tournament: players, rounds, settings.

mod player;
mod round;
mod settings;
mod tournament;

/// Two players a side, two sides a court.
pub const PLAYERS_PER_COURT: usize = 4;

pub use player::{new_id, Player, PlayerId, PlayerStats};
pub use round::{Court, Pair, Round, RoundId, Side};
pub use settings::{LeftoverPolicy, Settings, WinRule, DEFAULT_COURTS, DEFAULT_WIN_POINTS};
pub use tournament::{Tournament, TournamentError};
