//! The Upper Confidence Bound arm selector
//!
//! This module contains the core of the crate: per-arm statistics and the
//! `play`/`update` round protocol of the UCB strategy.

use std::collections::HashMap;

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::{
    config::UcbConfig,
    strategy::BanditStrategy,
    utils::{argmax_random, exploration_bonus},
    BanditError, Result,
};

/// Upper Confidence Bound (UCB) multi-armed bandit selector
///
/// Each arm carries three statistics: the number of counted pulls, the
/// running mean of its observed rewards, and a UCB index ("score"):
///
/// ```text
/// score = mean_reward + sqrt(rho * log10(rounds + 1) / pull_count)
/// ```
///
/// [`play`](UcbSelector::play) returns an arm with the maximal score,
/// breaking ties uniformly at random; [`update`](UcbSelector::update)
/// folds the observed reward into the pulled arm's mean and recomputes the
/// score of every pulled arm. Arms that have never been updated keep their
/// optimistic initial score (`+inf` by default), so every arm is tried
/// once before the selector starts trusting finite estimates.
///
/// Statistics are owned exclusively by the instance; independent selectors
/// share nothing. The selector is single-threaded — a caller drives one
/// round at a time to completion, and concurrent use requires external
/// mutual exclusion.
#[derive(Debug)]
pub struct UcbSelector {
    /// Validated construction parameters
    config: UcbConfig,

    /// Counted pulls per arm, 0-indexed
    ///
    /// A pull is counted by `play` and reversed if its round is re-issued;
    /// the sum over arms always equals the number of currently counted
    /// selections.
    pull_counts: Vec<u64>,

    /// Running mean reward per arm, 0-indexed
    ///
    /// Starts at the optimistic initial value; the first observation for
    /// an arm displaces that value entirely.
    mean_rewards: Vec<f64>,

    /// Current UCB index per arm, 0-indexed
    scores: Vec<f64>,

    /// Which arm (0-indexed) each round selected, keyed by round number
    ///
    /// Round numbers are caller-supplied and unbounded, so this is the one
    /// growable map in the selector; everything per-arm is a fixed vector.
    chosen_at_round: HashMap<u64, usize>,

    /// Every reward received, in update order
    rewards: Vec<f64>,

    /// Tie-break source, injected for reproducible runs
    rng: StdRng,
}

impl UcbSelector {
    /// Creates a selector with an entropy-seeded tie-break source
    ///
    /// Fails with [`BanditError::InvalidArgument`] if the configuration
    /// has a zero arm count or a non-positive `rho`.
    pub fn new(config: UcbConfig) -> Result<Self> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a selector with a caller-supplied tie-break source
    ///
    /// Handing in a seeded [`StdRng`] makes runs reproducible, which the
    /// crate's own tie-break tests rely on:
    ///
    /// ```
    /// use bandit_ucb::{UcbConfig, UcbSelector};
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let rng = StdRng::seed_from_u64(42);
    /// let selector = UcbSelector::with_rng(UcbConfig::new(5, 1.0), rng).unwrap();
    /// # let _ = selector;
    /// ```
    pub fn with_rng(config: UcbConfig, rng: StdRng) -> Result<Self> {
        config.validate()?;

        let narms = config.narms;
        let q0 = config.initial_value;

        Ok(UcbSelector {
            pull_counts: vec![0; narms],
            mean_rewards: vec![q0; narms],
            scores: vec![q0; narms],
            chosen_at_round: HashMap::new(),
            rewards: Vec::new(),
            rng,
            config,
        })
    }

    /// Plays a round, returning the 1-indexed arm chosen for it
    ///
    /// Returns an arm whose score is maximal, picked uniformly at random
    /// among ties. The chosen arm's pull count is incremented and the
    /// selection recorded against `round`; means and scores are untouched
    /// until the matching [`update`](UcbSelector::update).
    ///
    /// Re-issuing a round number that was already played reverses the pull
    /// previously counted for that round before selecting again, so a
    /// round corresponds to at most one counted pull at any time.
    ///
    /// `context` is accepted for interface compatibility and ignored.
    pub fn play(&mut self, round: u64, _context: Option<&[f64]>) -> usize {
        if let Some(&previous) = self.chosen_at_round.get(&round) {
            self.pull_counts[previous] -= 1;
            debug!(
                "round {} re-issued, reversing pull of arm {}",
                round,
                previous + 1
            );
        }

        let chosen = argmax_random(&mut self.rng, &self.scores);

        self.pull_counts[chosen] += 1;
        self.chosen_at_round.insert(round, chosen);
        trace!("round {}: selected arm {}", round, chosen + 1);

        chosen + 1
    }

    /// Feeds back the reward observed for `arm`, 1-indexed
    ///
    /// Appends the reward to the reward log, folds it into the arm's
    /// running mean, and recomputes the score of every arm that has been
    /// pulled. The recompute is global: the exploration bonus depends on
    /// the total number of rounds played, which this update just changed.
    ///
    /// Fails with [`BanditError::InvalidArgument`] if `arm` is outside
    /// `1..=narms`; the check happens before any state changes.
    ///
    /// # Panics
    ///
    /// Panics if `arm` has no counted pull, i.e. `update` was called
    /// without a matching [`play`](UcbSelector::play). That is caller
    /// misuse of the round protocol, not a runtime condition.
    pub fn update(&mut self, arm: usize, reward: f64, _context: Option<&[f64]>) -> Result<()> {
        if arm < 1 || arm > self.config.narms {
            return Err(BanditError::InvalidArgument(format!(
                "arm must be in 1..={}, got {}",
                self.config.narms, arm
            )));
        }
        let index = arm - 1;

        self.rewards.push(reward);

        let pulls = self.pull_counts[index];
        assert!(pulls > 0, "update for arm {} without a matching play", arm);

        self.mean_rewards[index] = if pulls == 1 {
            // First observation; the optimistic initial value is not a
            // sample and must not blend into the mean.
            reward
        } else {
            (self.mean_rewards[index] * (pulls - 1) as f64 + reward) / pulls as f64
        };

        let rounds = self.chosen_at_round.len() as u64;
        for a in 0..self.config.narms {
            if self.pull_counts[a] > 0 {
                self.scores[a] = self.mean_rewards[a]
                    + exploration_bonus(self.config.rho, rounds, self.pull_counts[a]);
            }
        }
        trace!(
            "arm {} updated with reward {}, mean now {}",
            arm,
            reward,
            self.mean_rewards[index]
        );

        Ok(())
    }

    /// Returns the configuration this selector was built with
    pub fn config(&self) -> &UcbConfig {
        &self.config
    }

    /// Counted pulls per arm, 0-indexed
    pub fn pull_counts(&self) -> &[u64] {
        &self.pull_counts
    }

    /// Running mean reward per arm, 0-indexed
    pub fn mean_rewards(&self) -> &[f64] {
        &self.mean_rewards
    }

    /// Current UCB index per arm, 0-indexed
    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    /// The 1-indexed arm recorded for `round`, if that round was played
    pub fn selected_arm(&self, round: u64) -> Option<usize> {
        self.chosen_at_round.get(&round).map(|&a| a + 1)
    }

    /// Number of distinct rounds played so far
    pub fn rounds_played(&self) -> usize {
        self.chosen_at_round.len()
    }

    /// Number of rewards received so far
    pub fn total_updates(&self) -> usize {
        self.rewards.len()
    }
}

impl BanditStrategy for UcbSelector {
    type Context = [f64];

    fn arms(&self) -> usize {
        self.config.narms
    }

    fn play(&mut self, round: u64, context: Option<&[f64]>) -> usize {
        UcbSelector::play(self, round, context)
    }

    fn update(&mut self, arm: usize, reward: f64, context: Option<&[f64]>) -> Result<()> {
        UcbSelector::update(self, arm, reward, context)
    }
}
