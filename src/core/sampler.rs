//! Distractor sampling for multiple-choice rounds.

use crate::catalog::Place;
use crate::core::constants::SAMPLER_RETRY_FACTOR;
use rand::Rng;

/// Draw up to `count` pool entries whose key differs from `exclude`'s key
/// and from each other.
///
/// Keys are whatever the caller quizzes on (capital, currency, region
/// name, a population figure), so two countries sharing a currency can
/// never both appear as options. Sampling is rejection-based with a
/// bounded retry budget; a pool too small or too duplicate-heavy yields
/// fewer entries instead of looping or failing.
pub fn sample_distractors<'a, R, F, K>(
    pool: &'a [Place],
    exclude: &Place,
    count: usize,
    key: F,
    rng: &mut R,
) -> Vec<&'a Place>
where
    R: Rng,
    F: Fn(&Place) -> K,
    K: PartialEq,
{
    if pool.is_empty() || count == 0 {
        return Vec::new();
    }

    let excluded_key = key(exclude);
    let mut chosen: Vec<&'a Place> = Vec::with_capacity(count);
    let mut chosen_keys: Vec<K> = Vec::with_capacity(count);
    let mut attempts = count * SAMPLER_RETRY_FACTOR;

    while chosen.len() < count && attempts > 0 {
        attempts -= 1;
        let candidate = &pool[rng.gen_range(0..pool.len())];
        let candidate_key = key(candidate);
        if candidate_key == excluded_key || chosen_keys.contains(&candidate_key) {
            continue;
        }
        chosen.push(candidate);
        chosen_keys.push(candidate_key);
    }

    chosen
}
