//! Leaderboard ranking.

use snipes_types::{LeaderboardEntry, Player};

/// Rank players by points, highest first.
///
/// The sort is stable: players on equal points keep roster order and get
/// consecutive ranks.
pub fn rank_players(players: &[Player]) -> Vec<LeaderboardEntry> {
    let mut sorted: Vec<&Player> = players.iter().collect();
    sorted.sort_by(|a, b| b.points.cmp(&a.points));

    (1_u64..)
        .zip(sorted)
        .map(|(rank, player)| LeaderboardEntry {
            rank,
            id: player.id.clone(),
            name: player.name.clone(),
            kills: player.kills,
            victims: player.victims,
            points: player.points,
        })
        .collect()
}
