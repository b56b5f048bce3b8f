//! Bernoulli bandit demo
//!
//! Drives the UCB selector against simulated Bernoulli arms and reports
//! the statistics it learned. The round loop here plays the role of the
//! external harness: the selector only ever sees round numbers and
//! rewards.

use bandit_ucb::{BanditError, UcbConfig, UcbSelector};
use rand::Rng;

fn main() -> Result<(), BanditError> {
    // Initialize logging
    env_logger::init();

    println!("UCB Bernoulli Demo");
    println!("==================");
    println!();

    // True win probabilities, unknown to the selector
    let probabilities = [0.15, 0.45, 0.72, 0.30];
    let rounds = 10_000u64;

    let config = UcbConfig::new(probabilities.len(), 1.0);
    let mut selector = UcbSelector::new(config)?;
    let mut environment = rand::thread_rng();

    let mut total_reward = 0.0;
    for round in 1..=rounds {
        let arm = selector.play(round, None);

        let reward = if environment.gen::<f64>() < probabilities[arm - 1] {
            1.0
        } else {
            0.0
        };

        total_reward += reward;
        selector.update(arm, reward, None)?;
    }

    println!(
        "{} rounds, average reward {:.3}",
        rounds,
        total_reward / rounds as f64
    );
    println!();
    println!(
        "{:>4} {:>8} {:>7} {:>8} {:>8}",
        "arm", "p(win)", "pulls", "mean", "score"
    );
    for (i, &p) in probabilities.iter().enumerate() {
        println!(
            "{:>4} {:>8.2} {:>7} {:>8.3} {:>8.3}",
            i + 1,
            p,
            selector.pull_counts()[i],
            selector.mean_rewards()[i],
            selector.scores()[i]
        );
    }

    Ok(())
}
