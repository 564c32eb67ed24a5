//! Triggers that run the engine over a tournament snapshot and merge the result back.

use crate::logic::{plan_round, recompute};
use crate::models::{RoundId, Tournament, TournamentError};

/// Plan the next round and append it to the history. Returns the new round's id.
pub fn start_next_round(tournament: &mut Tournament) -> Result<RoundId, TournamentError> {
    let round = plan_round(&tournament.players, &tournament.rounds, &tournament.settings)?;
    let courts = round.courts.len();
    let byes = round.byes.len();
    let id = tournament.push_round(round)?;
    log::info!("Started round {} with {} court(s) and {} bye(s)", id, courts, byes);
    Ok(id)
}

/// Rebuild all standings from the round history.
pub fn refresh_standings(tournament: &mut Tournament) -> Result<(), TournamentError> {
    let players = recompute(&tournament.players, &tournament.rounds, &tournament.settings)?;
    tournament.players = players;
    log::info!("Standings refreshed for {} player(s)", tournament.players.len());
    Ok(())
}

/// Record one court's score and refresh standings.
///
/// On error the tournament is left as it was.
pub fn submit_score(
    tournament: &mut Tournament,
    round_id: &str,
    court_number: u32,
    score_home: u32,
    score_away: u32,
) -> Result<(), TournamentError> {
    let mut next = tournament.clone();
    next.record_score(round_id, court_number, score_home, score_away)?;
    refresh_standings(&mut next)?;
    *tournament = next;
    Ok(())
}
