//! Player profiles: persistence, stats, play gating, match history.

pub mod history;
pub mod limits;
pub mod manager;
pub mod stats;

pub use history::{HistoryStore, MatchRecord};
pub use limits::{PlayGate, FREE_PLAYS_PER_DAY};
pub use manager::{Profile, ProfileInfo, ProfileManager};
pub use stats::ProfileStats;
