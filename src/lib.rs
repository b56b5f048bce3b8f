//! # bandit-ucb
//!
//! An Upper Confidence Bound (UCB) strategy for the multi-armed bandit problem.
//!
//! A bandit agent repeatedly chooses among a fixed set of options ("arms"),
//! observes a stochastic reward for the chosen arm, and must balance exploring
//! under-sampled arms against exploiting arms with high observed reward. This
//! crate provides the arm-selection and reward-update core of that loop; the
//! environment that pays out rewards and the harness that drives rounds are
//! the caller's side of the boundary.
//!
//! ## Features
//!
//! - Classic UCB index selection with a tunable explore/exploit parameter
//! - Optimistic initialization that guarantees every arm is tried before
//!   any finite estimate is preferred
//! - Uniformly random tie-breaking with an injectable random source for
//!   reproducible runs
//! - Round re-issue semantics: replaying a round number reverses the pull
//!   previously counted for it
//! - A small [`BanditStrategy`] trait so harnesses can swap strategies
//!   behind a trait object
//!
//! ## Basic Usage
//!
//! ```
//! use bandit_ucb::{BanditStrategy, UcbConfig, UcbSelector};
//!
//! fn main() -> Result<(), bandit_ucb::BanditError> {
//!     // Three arms, exploration parameter 1.0, default optimistic start
//!     let config = UcbConfig::new(3, 1.0);
//!     let mut selector = UcbSelector::new(config)?;
//!     assert_eq!(selector.arms(), 3);
//!
//!     // One round: ask for an arm, pull it in the environment, feed the
//!     // reward back. Arms are 1-indexed at this boundary.
//!     let arm = selector.play(1, None);
//!     let reward = 0.8; // observed from the environment
//!     selector.update(arm, reward, None)?;
//!
//!     assert_eq!(selector.pull_counts().iter().sum::<u64>(), 1);
//!     Ok(())
//! }
//! ```
//!
//! ## How It Works
//!
//! The selector keeps three per-arm statistics: the number of counted pulls,
//! the running mean of observed rewards, and a UCB index ("score"):
//!
//! ```text
//! score = mean_reward + sqrt(rho * log10(rounds + 1) / pull_count)
//! ```
//!
//! [`UcbSelector::play`] returns an arm with the maximal score, breaking
//! ties uniformly at random; [`UcbSelector::update`] folds the observed
//! reward into that arm's mean and recomputes the scores of every pulled
//! arm, since the exploration bonus depends on the total number of rounds.
//!
//! Before its first update an arm keeps its optimistic initial score
//! (`+inf` by default), so each arm is pulled at least once before the
//! selector starts trusting finite estimates.
//!
//! ## Choosing `rho`
//!
//! Higher values of `rho` inflate the exploration bonus and keep the
//! selector sampling weak arms for longer; lower values commit to the
//! current best estimate sooner. `1.0` is a reasonable starting point.
//!
//! ## Examples
//!
//! A runnable demo against simulated Bernoulli arms ships with the crate:
//!
//! ```bash
//! cargo run --example bernoulli
//! ```

pub mod config;
pub mod strategy;
pub mod ucb;
pub mod utils;

pub use config::UcbConfig;
pub use strategy::BanditStrategy;
pub use ucb::UcbSelector;

/// Error types for bandit strategies
#[derive(thiserror::Error, Debug)]
pub enum BanditError {
    /// A construction parameter or call argument was out of range
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for bandit operations
pub type Result<T> = std::result::Result<T, BanditError>;
