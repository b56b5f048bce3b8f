//! Configuration options for the UCB selector
//!
//! This module defines the construction parameters that control the
//! behavior of the UCB strategy.

use crate::{BanditError, Result};

/// Configuration for a [`UcbSelector`](crate::UcbSelector)
///
/// Use the builder methods to customize a configuration before handing it
/// to [`UcbSelector::new`](crate::UcbSelector::new), which validates it.
///
/// # Example
///
/// ```
/// use bandit_ucb::UcbConfig;
///
/// let config = UcbConfig::new(10, 1.0)
///     .with_initial_value(5.0);
/// ```
#[derive(Debug, Clone)]
pub struct UcbConfig {
    /// Number of arms available to the selector
    ///
    /// Fixed at construction; arms are addressed as `1..=narms` at the
    /// public boundary.
    pub narms: usize,

    /// Explore/exploit parameter
    ///
    /// Scales the exploration bonus. Higher values keep under-sampled
    /// arms attractive for longer; must be positive.
    pub rho: f64,

    /// Initial optimistic value assigned to every arm's mean and score
    ///
    /// Defaults to `+inf`, which forces every arm to be tried once before
    /// any finite estimate is preferred. The first observed reward for an
    /// arm displaces this value entirely rather than blending with it.
    pub initial_value: f64,
}

impl UcbConfig {
    /// Creates a configuration with the default optimistic initial value
    pub fn new(narms: usize, rho: f64) -> Self {
        UcbConfig {
            narms,
            rho,
            initial_value: f64::INFINITY,
        }
    }

    /// Sets the initial value assigned to every arm
    pub fn with_initial_value(mut self, initial_value: f64) -> Self {
        self.initial_value = initial_value;
        self
    }

    /// Checks the parameters, rejecting a non-positive arm count or `rho`
    pub fn validate(&self) -> Result<()> {
        if self.narms == 0 {
            return Err(BanditError::InvalidArgument(
                "narms must be a positive integer".to_string(),
            ));
        }
        if !(self.rho > 0.0) {
            return Err(BanditError::InvalidArgument(format!(
                "rho must be positive, got {}",
                self.rho
            )));
        }
        Ok(())
    }
}
