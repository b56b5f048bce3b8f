//! The protocol implemented by interchangeable bandit strategies.
//!
//! A round-driving harness interacts with a strategy through exactly two
//! calls: [`play`](BanditStrategy::play) to obtain an arm for a round, and
//! [`update`](BanditStrategy::update) to feed back the reward the
//! environment paid for that arm. Everything else — simulating the
//! environment, logging results, loading data — lives on the harness side.

use crate::Result;

/// Trait for strategies that choose arms in a multi-armed bandit
///
/// Arms are exchanged 1-indexed across this boundary: `play` returns an arm
/// in `1..=arms()` and `update` expects one. Strategies keep whatever
/// internal representation they like.
///
/// The `Context` associated type carries optional side information for
/// contextual variants of the problem. Strategies that do not use context
/// (such as [`UcbSelector`](crate::UcbSelector)) accept it and ignore it,
/// so a harness can always pass `None`.
///
/// The trait is object-safe; a harness that swaps strategies at runtime can
/// hold a `Box<dyn BanditStrategy<Context = [f64]>>`.
pub trait BanditStrategy {
    /// Optional side information passed through `play` and `update`
    type Context: ?Sized;

    /// Returns the number of arms this strategy chooses among
    fn arms(&self) -> usize;

    /// Plays a round, returning the 1-indexed arm chosen for it
    ///
    /// `round` is a caller-supplied identifier for the play event. Calling
    /// `play` again with a round number that was already played means
    /// "redo this round's choice": the pull previously counted for that
    /// round is reversed before a new arm is selected and recorded.
    fn play(&mut self, round: u64, context: Option<&Self::Context>) -> usize;

    /// Feeds back the reward observed for `arm`, 1-indexed
    ///
    /// Must be called once per round, after the `play` that chose the arm.
    /// Fails if `arm` is outside `1..=arms()`.
    fn update(&mut self, arm: usize, reward: f64, context: Option<&Self::Context>) -> Result<()>;
}
