//! Americano tournament organizer: library with models, round planning and standings.

pub mod logic;
pub mod models;
pub mod persistence;

pub use logic::{
    have_partnered, past_partners_of, plan_round, recompute, refresh_standings,
    sort_best_first, start_next_round, submit_score, PartnerHistory,
};
pub use models::{
    Court, LeftoverPolicy, Pair, Player, PlayerId, PlayerStats, Round, RoundId, Settings, Side,
    Tournament, TournamentError, WinRule, PLAYERS_PER_COURT,
};
pub use persistence::{
    import_players_csv, write_standings_csv, JsonFileStore, Persistence, PersistenceError,
};
