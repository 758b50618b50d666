use crate::model::Stats;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub name: String,
    pub points: u32,
    pub level: u32,
    pub avatar: char,
    pub is_me: bool,
}

/// Compañeros de ejemplo (no hay backend): nombre, puntos, nivel.
const CLASSMATES: [(&str, u32, u32); 4] = [
    ("Alex Johnson", 2450, 5),
    ("Priya Sharma", 2100, 5),
    ("David Chen", 1850, 4),
    ("Sarah Miller", 1520, 4),
];

pub const MY_NAME: &str = "You (EDUVA User)";

/// Inserta al usuario y ordena por puntos (descendente). En empate el
/// compañero va primero.
pub fn leaderboard(stats: &Stats) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = CLASSMATES
        .iter()
        .map(|&(name, points, level)| LeaderboardEntry {
            rank: 0,
            name: name.to_string(),
            points,
            level,
            avatar: name.chars().next().unwrap_or('?'),
            is_me: false,
        })
        .collect();

    entries.push(LeaderboardEntry {
        rank: 0,
        name: MY_NAME.to_string(),
        points: stats.points,
        level: stats.level,
        avatar: 'U',
        is_me: true,
    });

    entries.sort_by(|a, b| b.points.cmp(&a.points));
    for (i, entry) in entries.iter_mut().enumerate() {
        entry.rank = i + 1;
    }
    entries
}

/// Posición (1-based) del usuario.
pub fn my_rank(stats: &Stats) -> usize {
    leaderboard(stats)
        .iter()
        .find(|e| e.is_me)
        .map(|e| e.rank)
        .unwrap_or(CLASSMATES.len() + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::default_stats;
    use crate::model::level_for_points;

    fn stats_with(points: u32) -> Stats {
        let mut stats = default_stats();
        stats.points = points;
        stats.level = level_for_points(points);
        stats
    }

    #[test]
    fn new_user_is_last() {
        let board = leaderboard(&stats_with(0));
        assert_eq!(board.len(), 5);
        assert!(board[4].is_me);
        assert_eq!(board[0].name, "Alex Johnson");
        assert_eq!(board[0].rank, 1);
    }

    #[test]
    fn user_climbs_past_classmates() {
        let stats = stats_with(2200);
        assert_eq!(my_rank(&stats), 2);
        let board = leaderboard(&stats);
        assert_eq!(board[1].level, 5);
        assert_eq!(board[1].avatar, 'U');
    }

    #[test]
    fn ties_keep_classmate_ahead() {
        assert_eq!(my_rank(&stats_with(1850)), 4);
    }
}
