//! Question variants and round generation.

use crate::catalog::{flag_emoji, Place};
use crate::core::sampler::sample_distractors;
use rand::seq::SliceRandom;
use rand::Rng;

/// How a round quizzes its target place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionVariant {
    /// What is the capital of X?
    CapitalOf,
    /// X is the capital of which country?
    CountryOf,
    /// Which country does this flag belong to?
    FlagOf,
    /// Which is the flag of X?
    FlagPick,
    /// What is the currency of X?
    CurrencyOf,
    /// In which region is X?
    RegionOf,
    /// Which country administers X?
    SovereignOf,
    /// What is the capital of territory X?
    TerritoryCapital,
    /// Which of two places has more people?
    PopulationDuel,
    /// Which of two places covers more area?
    AreaDuel,
    /// Which side of the road does X drive on?
    DrivingSide,
}

impl QuestionVariant {
    pub fn prompt(&self, target: &Place) -> String {
        match self {
            QuestionVariant::CapitalOf | QuestionVariant::TerritoryCapital => {
                format!("What is the capital of {}?", target.name)
            }
            QuestionVariant::CountryOf => {
                format!("{} is the capital of which country?", target.capital)
            }
            QuestionVariant::FlagOf => {
                format!("Which country does the flag {} belong to?", flag_emoji(target.code))
            }
            QuestionVariant::FlagPick => format!("Which is the flag of {}?", target.name),
            QuestionVariant::CurrencyOf => format!("What is the currency of {}?", target.name),
            QuestionVariant::RegionOf => format!("In which region is {}?", target.name),
            QuestionVariant::SovereignOf => format!("Which country administers {}?", target.name),
            QuestionVariant::PopulationDuel => "Which has the larger population?".to_string(),
            QuestionVariant::AreaDuel => "Which covers the larger area?".to_string(),
            QuestionVariant::DrivingSide => {
                format!("Which side of the road does {} drive on?", target.name)
            }
        }
    }

    /// The correct answer value this variant derives from a place.
    ///
    /// For duels the value is the place name; the generator resolves which
    /// of the two drawn places actually wins.
    pub fn answer(&self, target: &Place) -> String {
        match self {
            QuestionVariant::CapitalOf | QuestionVariant::TerritoryCapital => {
                target.capital.to_string()
            }
            QuestionVariant::CountryOf | QuestionVariant::FlagOf => target.name.to_string(),
            QuestionVariant::FlagPick => flag_emoji(target.code),
            QuestionVariant::CurrencyOf => target.currency.to_string(),
            QuestionVariant::RegionOf => target.region.name().to_string(),
            QuestionVariant::SovereignOf => {
                target.sovereign.unwrap_or(target.name).to_string()
            }
            QuestionVariant::PopulationDuel | QuestionVariant::AreaDuel => {
                target.name.to_string()
            }
            QuestionVariant::DrivingSide => target.drives_on.name().to_string(),
        }
    }

    /// Duel variants compare a numeric magnitude between two places.
    fn duel_metric(&self, place: &Place) -> Option<u64> {
        match self {
            QuestionVariant::PopulationDuel => Some(place.population),
            QuestionVariant::AreaDuel => Some(u64::from(place.area_km2)),
            _ => None,
        }
    }

    /// True when the UI should render the target's flag above the prompt.
    pub fn shows_flag(&self) -> bool {
        matches!(self, QuestionVariant::FlagOf)
    }
}

/// One fully generated question: self-contained, no generator internals.
#[derive(Debug, Clone)]
pub struct Round {
    pub target: &'static Place,
    pub variant: QuestionVariant,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct: String,
}

impl Round {
    pub fn is_correct(&self, index: usize) -> bool {
        self.options.get(index).map_or(false, |o| *o == self.correct)
    }

    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(|o| *o == self.correct)
    }
}

/// Generate the next round for a game.
///
/// The variant is drawn uniformly from the game's variant list, the target
/// uniformly from the pool excluding the previous round's target whenever
/// the pool has another candidate. Options are deduplicated by answer
/// value, then shuffled with a uniform Fisher-Yates permutation.
pub fn generate_round<R: Rng>(
    pool: &'static [Place],
    variants: &[QuestionVariant],
    previous: Option<&str>,
    option_count: usize,
    rng: &mut R,
) -> Round {
    let variant = variants
        .choose(rng)
        .copied()
        .unwrap_or(QuestionVariant::CapitalOf);

    let eligible: Vec<&'static Place> = pool
        .iter()
        .filter(|p| previous != Some(p.code))
        .collect();
    let target = eligible.choose(rng).copied().unwrap_or(&pool[0]);

    let (mut options, correct) = if let Some(metric) = variant.duel_metric(target) {
        build_duel_options(pool, target, metric, variant, rng)
    } else if variant == QuestionVariant::DrivingSide {
        let options = vec!["Left".to_string(), "Right".to_string()];
        (options, target.drives_on.name().to_string())
    } else {
        let correct = variant.answer(target);
        let wanted = option_count.saturating_sub(1);
        let mut options: Vec<String> = sample_distractors(pool, target, wanted, |p| variant.answer(p), rng)
            .into_iter()
            .map(|p| variant.answer(p))
            .collect();
        options.push(correct.clone());
        (options, correct)
    };

    options.shuffle(rng);

    Round {
        target,
        variant,
        prompt: variant.prompt(target),
        options,
        correct,
    }
}

/// Draw one rival with a different magnitude and rank the pair.
fn build_duel_options<R: Rng>(
    pool: &'static [Place],
    target: &'static Place,
    target_metric: u64,
    variant: QuestionVariant,
    rng: &mut R,
) -> (Vec<String>, String) {
    let rival = sample_distractors(pool, target, 1, |p| variant.duel_metric(p), rng)
        .into_iter()
        .next();

    match rival {
        Some(rival) => {
            let rival_metric = variant.duel_metric(rival).unwrap_or(0);
            let correct = if target_metric >= rival_metric {
                target.name
            } else {
                rival.name
            };
            (
                vec![target.name.to_string(), rival.name.to_string()],
                correct.to_string(),
            )
        }
        // Degenerate pool: a one-option round beats no round at all.
        None => (vec![target.name.to_string()], target.name.to_string()),
    }
}
