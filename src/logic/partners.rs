//! Partner history: who has already shared a side with whom.

use crate::models::{PlayerId, Round};
use std::collections::{HashMap, HashSet};

/// Player id -> ids they have been teamed with in any past round.
pub type PartnerHistory = HashMap<PlayerId, HashSet<PlayerId>>;

/// Collect past teammates over the whole round history.
///
/// Every id that ever stood on a court gets an entry. Opponents on the same court are not
/// partners. No weighting by recency.
pub fn past_partners_of(rounds: &[Round]) -> PartnerHistory {
    let mut history = PartnerHistory::new();
    for court in rounds.iter().flat_map(|r| r.courts.iter()) {
        for team in [&court.home, &court.away] {
            for a in team {
                let partners = history.entry(a.clone()).or_default();
                partners.extend(team.iter().filter(|b| *b != a).cloned());
            }
        }
    }
    history
}

/// Whether `a` and `b` have been on the same side before.
pub fn have_partnered(history: &PartnerHistory, a: &str, b: &str) -> bool {
    history.get(a).is_some_and(|set| set.contains(b))
}
