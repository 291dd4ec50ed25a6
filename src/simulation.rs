use std::fmt;

use log::{debug, info};
use rand::Rng;
use statrs::statistics::Statistics;

use crate::agent::Agent;
use crate::bandit::{Bandit, BernoulliBandit};
use crate::errors::{check_arm, Result};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trial {
    pub choice: usize,
    pub reward: u8,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct History {
    pub trials: Vec<Trial>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    pub trials: usize,
    pub choice_counts: Vec<usize>,
    pub total_reward: u64,
    pub mean_reward: f64,
    pub reward_std_dev: f64,
    /// Expected regret: sum of `p_best - p[choice]` over all trials.
    pub regret: f64,
    pub best_arm: usize,
    pub best_arm_rate: f64,
}

/// Runs the choose / reward / learn loop `trials` times.
///
/// Any error aborts the run and is returned unchanged.
pub fn simulate<A, B, R>(agent: &mut A, bandit: &B, trials: usize, rng: &mut R) -> Result<History>
where
    A: Agent,
    B: Bandit,
    R: Rng + ?Sized,
{
    let mut history = History { trials: Vec::with_capacity(trials) };

    for i in 0..trials {
        let choice = agent.make_choice(rng);
        let reward = bandit.get_reward(choice, rng)?;
        agent.learn(choice, f64::from(reward))?;

        debug!("trial {}: arm {} -> {}", i, choice, reward);
        history.trials.push(Trial { choice, reward });
    }

    info!(
        "Simulated {} trials, total reward {}",
        trials,
        history.total_reward(),
    );
    Ok(history)
}

impl History {
    pub fn total_reward(&self) -> u64 {
        self.trials.iter().map(|t| t.reward as u64).sum()
    }

    /// Fails if a recorded choice is not one of the `arms` arms.
    pub fn choice_counts(&self, arms: usize) -> Result<Vec<usize>> {
        let mut counts = vec![0; arms];
        for trial in &self.trials {
            check_arm(trial.choice, arms)?;
            counts[trial.choice] += 1;
        }
        Ok(counts)
    }

    pub fn summary(&self, bandit: &BernoulliBandit) -> Result<Summary> {
        let choice_counts = self.choice_counts(bandit.arm_count())?;

        let n = self.trials.len();
        let probabilities = bandit.reward_probabilities();
        let best_arm = bandit.best_arm();
        let best_probability = bandit.best_probability();

        let rewards = self.trials.iter().map(|t| t.reward as f64).collect::<Vec<_>>();
        let (mean_reward, reward_std_dev) = match n {
            0 => (0.0, 0.0),
            1 => (rewards[0], 0.0),
            _ => ((&rewards).mean(), (&rewards).std_dev()),
        };

        let regret = self.trials
            .iter()
            .map(|t| best_probability - probabilities[t.choice])
            .sum();

        let best_arm_rate = if n > 0 {
            choice_counts[best_arm] as f64 / n as f64
        } else {
            0.0
        };

        Ok(Summary {
            trials: n,
            choice_counts,
            total_reward: self.total_reward(),
            mean_reward,
            reward_std_dev,
            regret,
            best_arm,
            best_arm_rate,
        })
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "trials: {}", self.trials)?;
        writeln!(f, "total reward: {} (mean {:.4}, std {:.4})", self.total_reward, self.mean_reward, self.reward_std_dev)?;
        writeln!(f, "regret: {:.2}", self.regret)?;
        for (arm, count) in self.choice_counts.iter().enumerate() {
            writeln!(f, "[{}] {}", arm, count)?;
        }
        write!(f, "best arm {} chosen {:.1}%", self.best_arm, self.best_arm_rate * 100.0)
    }
}
