//! The mini-game catalog: one parameterized configuration per game.
//!
//! Games differ only by configuration (point values, option count,
//! variants, budgets), never by subclassed behavior. The engine consumes
//! a [`GameConfig`]; the menu iterates [`GameKind::ALL`].

use crate::catalog::{Place, COUNTRIES, TERRITORIES};
use crate::core::round::QuestionVariant;

/// Tuning knobs for one mini-game.
#[derive(Debug, Clone, Copy)]
pub struct GameConfig {
    pub base_points: u32,
    /// Score deducted on a wrong answer (floored at zero).
    pub penalty: u32,
    pub option_count: usize,
    pub time_budget_secs: u32,
    /// Some games also cap the number of questions.
    pub round_budget: Option<u32>,
    pub streak_threshold: u32,
    pub streak_bonus: u32,
    /// Per-question countdown; expiry synthesizes a wrong answer.
    pub question_secs: Option<u32>,
    pub variants: &'static [QuestionVariant],
    /// Feedback display delay between answering and the next round.
    pub eval_delay_ticks: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKind {
    Flags,
    Capitals,
    Currencies,
    Regions,
    Territories,
    PopulationDuel,
    AreaDuel,
    DrivingSide,
}

impl GameKind {
    pub const ALL: [GameKind; 8] = [
        GameKind::Flags,
        GameKind::Capitals,
        GameKind::Currencies,
        GameKind::Regions,
        GameKind::Territories,
        GameKind::PopulationDuel,
        GameKind::AreaDuel,
        GameKind::DrivingSide,
    ];

    /// Stable identifier used in stats and history records.
    pub fn id(&self) -> &'static str {
        match self {
            GameKind::Flags => "flags",
            GameKind::Capitals => "capitals",
            GameKind::Currencies => "currencies",
            GameKind::Regions => "regions",
            GameKind::Territories => "territories",
            GameKind::PopulationDuel => "population-duel",
            GameKind::AreaDuel => "area-duel",
            GameKind::DrivingSide => "driving-side",
        }
    }

    pub fn from_id(id: &str) -> Option<GameKind> {
        GameKind::ALL.into_iter().find(|k| k.id() == id)
    }

    pub fn title(&self) -> &'static str {
        match self {
            GameKind::Flags => "Flag Frenzy",
            GameKind::Capitals => "Capital Match",
            GameKind::Currencies => "Currency Exchange",
            GameKind::Regions => "Region Sort",
            GameKind::Territories => "Territory Claims",
            GameKind::PopulationDuel => "Population Duel",
            GameKind::AreaDuel => "Area Duel",
            GameKind::DrivingSide => "Keep Your Lane",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            GameKind::Flags => "\u{2691}",
            GameKind::Capitals => "\u{2302}",
            GameKind::Currencies => "\u{00A4}",
            GameKind::Regions => "\u{25C8}",
            GameKind::Territories => "\u{2693}",
            GameKind::PopulationDuel => "\u{263A}",
            GameKind::AreaDuel => "\u{25A2}",
            GameKind::DrivingSide => "\u{21C6}",
        }
    }

    pub fn blurb(&self) -> &'static str {
        match self {
            GameKind::Flags => "Name the country behind the flag",
            GameKind::Capitals => "Pair capitals with their countries",
            GameKind::Currencies => "Know what they pay with",
            GameKind::Regions => "File each country under its continent",
            GameKind::Territories => "Who administers what, and from where",
            GameKind::PopulationDuel => "Pick the more populous of two",
            GameKind::AreaDuel => "Pick the bigger of two",
            GameKind::DrivingSide => "Left or right, answer before the clock",
        }
    }

    /// Entity pool this game draws targets from.
    pub fn pool(&self) -> &'static [Place] {
        match self {
            GameKind::Territories => TERRITORIES,
            _ => COUNTRIES,
        }
    }

    /// Per-game tuning. Constants intentionally vary between games.
    pub fn config(&self) -> GameConfig {
        match self {
            GameKind::Flags => GameConfig {
                base_points: 10,
                penalty: 0,
                option_count: 4,
                time_budget_secs: 60,
                round_budget: None,
                streak_threshold: 3,
                streak_bonus: 5,
                question_secs: None,
                variants: &[QuestionVariant::FlagOf, QuestionVariant::FlagPick],
                eval_delay_ticks: 7,
            },
            GameKind::Capitals => GameConfig {
                base_points: 10,
                penalty: 0,
                option_count: 4,
                time_budget_secs: 60,
                round_budget: None,
                streak_threshold: 3,
                streak_bonus: 5,
                question_secs: None,
                variants: &[QuestionVariant::CapitalOf, QuestionVariant::CountryOf],
                eval_delay_ticks: 7,
            },
            GameKind::Currencies => GameConfig {
                base_points: 15,
                penalty: 5,
                option_count: 4,
                time_budget_secs: 60,
                round_budget: None,
                streak_threshold: 3,
                streak_bonus: 5,
                question_secs: None,
                variants: &[QuestionVariant::CurrencyOf],
                eval_delay_ticks: 7,
            },
            GameKind::Regions => GameConfig {
                base_points: 10,
                penalty: 0,
                option_count: 4,
                time_budget_secs: 90,
                round_budget: Some(20),
                streak_threshold: 4,
                streak_bonus: 5,
                question_secs: None,
                variants: &[QuestionVariant::RegionOf],
                eval_delay_ticks: 7,
            },
            GameKind::Territories => GameConfig {
                base_points: 20,
                penalty: 5,
                option_count: 4,
                time_budget_secs: 60,
                round_budget: None,
                streak_threshold: 3,
                streak_bonus: 10,
                question_secs: None,
                variants: &[
                    QuestionVariant::SovereignOf,
                    QuestionVariant::TerritoryCapital,
                ],
                eval_delay_ticks: 7,
            },
            GameKind::PopulationDuel => GameConfig {
                base_points: 10,
                penalty: 0,
                option_count: 2,
                time_budget_secs: 45,
                round_budget: None,
                streak_threshold: 5,
                streak_bonus: 5,
                question_secs: None,
                variants: &[QuestionVariant::PopulationDuel],
                eval_delay_ticks: 7,
            },
            GameKind::AreaDuel => GameConfig {
                base_points: 10,
                penalty: 0,
                option_count: 2,
                time_budget_secs: 45,
                round_budget: None,
                streak_threshold: 5,
                streak_bonus: 5,
                question_secs: None,
                variants: &[QuestionVariant::AreaDuel],
                eval_delay_ticks: 7,
            },
            GameKind::DrivingSide => GameConfig {
                base_points: 10,
                penalty: 0,
                option_count: 2,
                time_budget_secs: 60,
                round_budget: Some(10),
                streak_threshold: 3,
                streak_bonus: 5,
                question_secs: Some(5),
                variants: &[QuestionVariant::DrivingSide],
                eval_delay_ticks: 8,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_unique_and_roundtrip() {
        let mut seen = HashSet::new();
        for kind in GameKind::ALL {
            assert!(seen.insert(kind.id()));
            assert_eq!(GameKind::from_id(kind.id()), Some(kind));
        }
        assert_eq!(GameKind::from_id("checkers"), None);
    }

    #[test]
    fn test_configs_are_playable() {
        for kind in GameKind::ALL {
            let config = kind.config();
            assert!(config.option_count >= 2, "{}", kind.id());
            assert!(config.base_points > 0);
            assert!(config.time_budget_secs > 0);
            assert!(!config.variants.is_empty());
            assert!(config.eval_delay_ticks > 0);
            assert!(!kind.pool().is_empty());
            // A multiple-choice game needs a pool big enough for its
            // option count even after excluding the target.
            assert!(kind.pool().len() > config.option_count);
        }
    }

    #[test]
    fn test_duels_are_binary() {
        assert_eq!(GameKind::PopulationDuel.config().option_count, 2);
        assert_eq!(GameKind::AreaDuel.config().option_count, 2);
        assert_eq!(GameKind::DrivingSide.config().option_count, 2);
    }

    #[test]
    fn test_driving_side_has_question_timer() {
        let config = GameKind::DrivingSide.config();
        assert!(config.question_secs.is_some());
        // Other games leave the per-question clock off.
        assert!(GameKind::Flags.config().question_secs.is_none());
    }
}
