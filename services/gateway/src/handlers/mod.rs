pub mod admin;
pub mod leaderboard;
pub mod score;
pub mod ws;
