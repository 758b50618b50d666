pub mod history;
pub mod home;
pub mod leaderboard;
