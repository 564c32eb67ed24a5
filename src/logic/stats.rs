//! Standings: rebuild every player's derived stats from the round history.

use crate::models::{Player, PlayerStats, Round, Settings, Side, TournamentError};
use std::collections::HashMap;

/// Recompute wins, points, games and bye counts from scratch.
///
/// Returns the players in input order with every derived field replaced. Ids in the history
/// that match no known player are skipped. Running it again on its own output gives the same
/// result.
pub fn recompute(
    players: &[Player],
    rounds: &[Round],
    settings: &Settings,
) -> Result<Vec<Player>, TournamentError> {
    settings.validate()?;

    let mut stats: HashMap<&str, PlayerStats> = players
        .iter()
        .map(|p| (p.id.as_str(), PlayerStats::default()))
        .collect();

    for round in rounds {
        for id in &round.byes {
            match stats.get_mut(id.as_str()) {
                Some(s) => s.bye_count += 1,
                None => log::debug!("Skipping unknown player {} on bye in round {}", id, round.id),
            }
        }
        for court in &round.courts {
            let winner = court.winner_under(settings);
            for side in [Side::Home, Side::Away] {
                let score = court.score(side);
                for id in court.team(side) {
                    let Some(s) = stats.get_mut(id.as_str()) else {
                        log::debug!(
                            "Skipping unknown player {} on court {} in round {}",
                            id,
                            court.court_number,
                            round.id
                        );
                        continue;
                    };
                    s.games += 1;
                    s.total_points += u64::from(score);
                    if winner == Some(side) {
                        s.wins += 1;
                    }
                }
            }
        }
    }

    Ok(players
        .iter()
        .map(|p| {
            let mut updated = p.clone();
            updated.apply_stats(stats[p.id.as_str()]);
            updated
        })
        .collect())
}
