//! Round ordering by weighted random draw.

use crate::env::RngOracle;

use super::errors::EncounterError;

/// Draws one candidate with probability proportional to its weight.
///
/// Candidates are walked in ascending weight order (stable for equal
/// weights) while accumulating a running total; the first candidate whose
/// total exceeds a uniform draw from `[0, sum)` is selected. Negative and NaN
/// weights count as zero. When every weight is zero the draw falls back to a
/// uniform pick.
///
/// Returns the position of the selected candidate in `weights`.
pub fn weighted_pick<R>(weights: &[f64], rng: &mut R) -> Result<usize, EncounterError>
where
    R: RngOracle + ?Sized,
{
    let sanitized = |w: f64| if w.is_nan() { 0.0 } else { w.max(0.0) };

    let mut sorted: Vec<usize> = (0..weights.len()).collect();
    sorted.sort_by(|&a, &b| sanitized(weights[a]).total_cmp(&sanitized(weights[b])));

    // Same accumulation order as the walk below, so the last running total
    // equals `sum` exactly.
    let sum = sorted
        .iter()
        .fold(0.0, |acc, &i| acc + sanitized(weights[i]));
    if !weights.is_empty() && (sum <= 0.0 || !sum.is_finite()) {
        tracing::trace!(candidates = weights.len(), "zero weight sum, uniform draw");
        return Ok(rng.pick_index(weights.len()));
    }

    let draw = rng.roll_below(sum);
    let mut cumulative = 0.0;
    for &i in &sorted {
        cumulative += sanitized(weights[i]);
        if draw < cumulative {
            return Ok(i);
        }
    }

    Err(EncounterError::WeightedDrawExhausted {
        candidates: weights.len(),
    })
}

/// Orders all candidates by repeated weighted draws without replacement.
///
/// Returns a permutation of `0..weights.len()`.
pub fn weighted_order<R>(weights: &[f64], rng: &mut R) -> Result<Vec<usize>, EncounterError>
where
    R: RngOracle + ?Sized,
{
    let mut remaining: Vec<usize> = (0..weights.len()).collect();
    let mut order = Vec::with_capacity(weights.len());

    while !remaining.is_empty() {
        let remaining_weights: Vec<f64> = remaining.iter().map(|&i| weights[i]).collect();
        let picked = weighted_pick(&remaining_weights, rng)?;
        order.push(remaining.remove(picked));
    }

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::seeded;

    #[test]
    fn empty_candidates_exhaust() {
        let mut rng = seeded(0);
        assert_eq!(
            weighted_pick(&[], &mut rng),
            Err(EncounterError::WeightedDrawExhausted { candidates: 0 })
        );
        assert_eq!(weighted_order(&[], &mut rng), Ok(Vec::new()));
    }

    #[test]
    fn zero_weight_candidate_is_never_drawn_when_others_have_weight() {
        let mut rng = seeded(1);
        for _ in 0..1_000 {
            assert_ne!(weighted_pick(&[0.0, 3.0, 1.0], &mut rng).unwrap(), 0);
        }
    }

    #[test]
    fn all_zero_weights_fall_back_to_uniform() {
        let mut rng = seeded(2);
        let mut counts = [0usize; 3];
        for _ in 0..3_000 {
            counts[weighted_pick(&[0.0, 0.0, 0.0], &mut rng).unwrap()] += 1;
        }
        assert!(counts.iter().all(|&c| (850..=1_150).contains(&c)), "{counts:?}");
    }

    #[test]
    fn selection_is_proportional_to_weight() {
        let mut rng = seeded(3);
        let trials = 20_000;
        let heavy = (0..trials)
            .filter(|_| weighted_pick(&[1.0, 3.0], &mut rng).unwrap() == 1)
            .count();
        let share = heavy as f64 / trials as f64;
        assert!((share - 0.75).abs() < 0.02, "share = {share}");
    }

    #[test]
    fn order_is_a_permutation() {
        let mut rng = seeded(4);
        for _ in 0..100 {
            let mut order = weighted_order(&[7.5, 0.0, 2.0, 7.5, 1.0], &mut rng).unwrap();
            order.sort_unstable();
            assert_eq!(order, vec![0, 1, 2, 3, 4]);
        }
    }

    #[test]
    fn higher_initiative_tends_to_act_first() {
        let mut rng = seeded(5);
        let first = (0..5_000)
            .filter(|_| weighted_order(&[1.0, 9.0], &mut rng).unwrap()[0] == 1)
            .count();
        assert!(first > 4_300, "first = {first}");
    }
}
