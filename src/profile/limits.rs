//! Daily free-play gating.
//!
//! Free profiles get a fixed number of sessions per calendar day, keyed by
//! the local date string. Premium profiles bypass the gate entirely. The
//! gate is a precondition checked before a session is created; the engine
//! itself never consults it.

use serde::{Deserialize, Serialize};

pub const FREE_PLAYS_PER_DAY: u32 = 5;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayGate {
    /// Local date of the last counted play, `YYYY-MM-DD`.
    pub day: String,
    pub plays: u32,
}

impl PlayGate {
    pub fn plays_today(&self, today: &str) -> u32 {
        if self.day == today {
            self.plays
        } else {
            0
        }
    }

    pub fn is_eligible(&self, premium: bool, today: &str) -> bool {
        premium || self.plays_today(today) < FREE_PLAYS_PER_DAY
    }

    pub fn record_play(&mut self, today: &str) {
        if self.day != today {
            self.day = today.to_string();
            self.plays = 0;
        }
        self.plays += 1;
    }

    /// Remaining free plays; None means unlimited.
    pub fn plays_left(&self, premium: bool, today: &str) -> Option<u32> {
        if premium {
            None
        } else {
            Some(FREE_PLAYS_PER_DAY.saturating_sub(self.plays_today(today)))
        }
    }
}

/// The local calendar day used to key the gate.
pub fn today_string() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}
