//! Round planning: byes, Americano pairing and court assignment.

use crate::logic::partners::{have_partnered, past_partners_of, PartnerHistory};
use crate::logic::sort_best_first;
use crate::models::{Court, LeftoverPolicy, Player, PlayerId, Round, Settings, TournamentError};
use std::collections::HashSet;

/// Plan the next round from a snapshot of players, history and settings.
///
/// 1. Drop players on permanent break, and any repeated record of the same id.
/// 2. Sort best-first (wins, then total points, both descending).
/// 3. Above `courts * 4` players, the excess sits out: fewest byes first, then fewest wins,
///    then fewest points.
/// 4. Pair the rest, avoiding previous teammates where possible.
/// 5. Two pairs per court, the first batch on the highest court number.
///
/// Players that could not be placed are handled per `settings.leftover`.
pub fn plan_round(
    players: &[Player],
    rounds: &[Round],
    settings: &Settings,
) -> Result<Round, TournamentError> {
    settings.validate()?;

    let mut seen = HashSet::new();
    let mut active: Vec<&Player> = players
        .iter()
        .filter(|p| p.is_active())
        .filter(|p| {
            let first = seen.insert(p.id.as_str());
            if !first {
                log::warn!("Ignoring duplicate record for player {}", p.id);
            }
            first
        })
        .collect();
    sort_best_first(&mut active);

    let mut byes = select_byes(&active, settings.capacity());
    let on_bye: HashSet<&str> = byes.iter().map(String::as_str).collect();
    let pool: Vec<&Player> = active
        .iter()
        .copied()
        .filter(|p| !on_bye.contains(p.id.as_str()))
        .collect();

    let history = past_partners_of(rounds);
    let pairs = make_pairs(pool, &history);
    let courts = assemble_courts(&pairs, settings.courts);

    let placed: HashSet<&PlayerId> = courts.iter().flat_map(|c| c.player_ids()).collect();
    let leftover: Vec<PlayerId> = active
        .iter()
        .filter(|p| !on_bye.contains(p.id.as_str()) && !placed.contains(&p.id))
        .map(|p| p.id.clone())
        .collect();
    if !leftover.is_empty() {
        match settings.leftover {
            LeftoverPolicy::Drop => log::warn!(
                "{} player(s) could not be placed on a court and are left out: {:?}",
                leftover.len(),
                leftover
            ),
            LeftoverPolicy::Bye => {
                log::info!("Moving unplaced player(s) to bye: {:?}", leftover);
                byes.extend(leftover);
            }
        }
    }

    log::debug!(
        "Planned round: {} court(s), {} bye(s) from {} active player(s)",
        courts.len(),
        byes.len(),
        active.len()
    );
    Ok(Round::new(courts, byes))
}

/// Pick the players that sit out when there are more than `capacity` of them.
fn select_byes(active: &[&Player], capacity: usize) -> Vec<PlayerId> {
    if active.len() <= capacity {
        return Vec::new();
    }
    let mut candidates = active.to_vec();
    candidates.sort_by_key(|p| (p.bye_count, p.wins, p.total_points));
    candidates
        .into_iter()
        .take(active.len() - capacity)
        .map(|p| p.id.clone())
        .collect()
}

/// Greedy Americano pairing over a best-first pool.
///
/// The head of the pool takes the first player it has not partnered before, or the next
/// player in line when everyone left is a repeat. An odd player at the end stays unpaired.
fn make_pairs<'a>(
    mut pool: Vec<&'a Player>,
    history: &PartnerHistory,
) -> Vec<(&'a Player, &'a Player)> {
    let mut pairs = Vec::with_capacity(pool.len() / 2);
    while pool.len() > 1 {
        let anchor = pool.remove(0);
        let idx = match pool
            .iter()
            .position(|q| !have_partnered(history, &anchor.id, &q.id))
        {
            Some(idx) => idx,
            None => {
                log::debug!(
                    "No new partner left for {}; repeating with {}",
                    anchor.id,
                    pool[0].id
                );
                0
            }
        };
        let partner = pool.remove(idx);
        pairs.push((anchor, partner));
    }
    pairs
}

/// Two pairs per court, at most `courts` courts. Court numbers count down from `courts`.
fn assemble_courts(pairs: &[(&Player, &Player)], courts: u32) -> Vec<Court> {
    pairs
        .chunks_exact(2)
        .take(courts as usize)
        .zip((1..=courts).rev())
        .map(|(batch, number)| {
            let (h, a) = (batch[0], batch[1]);
            Court::new(
                number,
                [h.0.id.clone(), h.1.id.clone()],
                [a.0.id.clone(), a.1.id.clone()],
            )
        })
        .collect()
}
