//! Aggregate play statistics, the engine's result sink.

use crate::core::summary::{GameSummary, ResultSink};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Lifetime statistics stored inside a profile. Keys are the stable game
/// ids and place codes, so the catalog can grow without migrations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileStats {
    pub games_played: u32,
    pub total_score: u64,
    pub total_correct: u64,
    pub total_incorrect: u64,
    #[serde(default)]
    pub best_scores: HashMap<String, u32>,
    #[serde(default)]
    pub place_correct: HashMap<String, u32>,
    #[serde(default)]
    pub place_missed: HashMap<String, u32>,
}

impl ProfileStats {
    pub fn best_for(&self, game_id: &str) -> Option<u32> {
        self.best_scores.get(game_id).copied()
    }

    /// Whole-percent answer accuracy, None before any answer.
    pub fn accuracy_percent(&self) -> Option<u32> {
        let answered = self.total_correct + self.total_incorrect;
        if answered == 0 {
            return None;
        }
        Some(((self.total_correct * 100) / answered) as u32)
    }
}

impl ResultSink for ProfileStats {
    fn record_result(&mut self, summary: &GameSummary) {
        self.games_played += 1;
        self.total_score += u64::from(summary.score);
        self.total_correct += summary.correct.len() as u64;
        self.total_incorrect += summary.incorrect.len() as u64;

        let best = self.best_scores.entry(summary.game_id.to_string()).or_insert(0);
        if summary.score > *best {
            *best = summary.score;
        }

        for code in &summary.correct {
            *self.place_correct.entry(code.to_string()).or_insert(0) += 1;
        }
        for code in &summary.incorrect {
            *self.place_missed.entry(code.to_string()).or_insert(0) += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(score: u32) -> GameSummary {
        GameSummary {
            game_id: "capitals",
            score,
            duration_seconds: 60,
            correct: vec!["FR", "DE"],
            incorrect: vec!["JP"],
        }
    }

    #[test]
    fn test_record_result_accumulates() {
        let mut stats = ProfileStats::default();
        stats.record_result(&summary(40));
        stats.record_result(&summary(25));

        assert_eq!(stats.games_played, 2);
        assert_eq!(stats.total_score, 65);
        assert_eq!(stats.total_correct, 4);
        assert_eq!(stats.total_incorrect, 2);
        assert_eq!(stats.place_correct.get("FR"), Some(&2));
        assert_eq!(stats.place_missed.get("JP"), Some(&2));
    }

    #[test]
    fn test_best_score_keeps_maximum() {
        let mut stats = ProfileStats::default();
        stats.record_result(&summary(40));
        stats.record_result(&summary(25));
        assert_eq!(stats.best_for("capitals"), Some(40));
        assert_eq!(stats.best_for("flags"), None);
    }

    #[test]
    fn test_accuracy_percent() {
        let mut stats = ProfileStats::default();
        assert_eq!(stats.accuracy_percent(), None);
        stats.record_result(&summary(40));
        // 2 correct of 3 answered.
        assert_eq!(stats.accuracy_percent(), Some(66));
    }

    #[test]
    fn test_stats_serialization_roundtrip() {
        let mut stats = ProfileStats::default();
        stats.record_result(&summary(40));
        let json = serde_json::to_string(&stats).unwrap();
        let loaded: ProfileStats = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.games_played, 1);
        assert_eq!(loaded.best_for("capitals"), Some(40));
    }
}
