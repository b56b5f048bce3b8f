//! Helper functions for the UCB strategy
//!
//! Small numeric helpers shared by the selector and its tests.

use rand::Rng;

/// Picks an index of the maximal value, uniformly at random among ties
///
/// The random tie-break matters: a deterministic argmax would bias play
/// toward the lowest-indexed arm whenever several arms share the maximal
/// score, which is the normal situation while optimistically-initialized
/// arms are still unpulled.
///
/// `values` must be non-empty.
pub fn argmax_random<R: Rng>(rng: &mut R, values: &[f64]) -> usize {
    let mut best = f64::NEG_INFINITY;
    let mut ties: Vec<usize> = Vec::new();

    for (i, &v) in values.iter().enumerate() {
        if v > best {
            best = v;
            ties.clear();
            ties.push(i);
        } else if v == best {
            ties.push(i);
        }
    }

    ties[rng.gen_range(0..ties.len())]
}

/// Calculates the exploration bonus for an arm
///
/// This is the additive term that keeps under-sampled arms attractive. It
/// grows with the (smoothed) number of rounds played and shrinks as the
/// arm accumulates pulls. Base-10 logarithm is a fixed constant of the
/// strategy, not a tunable.
pub fn exploration_bonus(rho: f64, rounds_played: u64, pulls: u64) -> f64 {
    if pulls == 0 {
        return f64::INFINITY;
    }

    (rho * ((rounds_played + 1) as f64).log10() / pulls as f64).sqrt()
}
