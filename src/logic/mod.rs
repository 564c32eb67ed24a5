//! Tournament business logic: partner history, round planning, standings.

mod partners;
mod round_planner;
mod session;
mod stats;

use crate::models::Player;

pub use partners::{have_partnered, past_partners_of, PartnerHistory};
pub use round_planner::plan_round;
pub use session::{refresh_standings, start_next_round, submit_score};
pub use stats::recompute;

/// Best-first order: wins descending, then total points descending. Stable.
pub fn sort_best_first(players: &mut [&Player]) {
    players.sort_by(|a, b| {
        b.wins
            .cmp(&a.wins)
            .then_with(|| b.total_points.cmp(&a.total_points))
    });
}
