use rand::Rng;

use crate::bandit::Bandit;
use crate::errors::{check_arm, Error, Result};


/// Stationary bandit: arm `i` pays 1 with probability `reward_probabilities[i]`, 0 otherwise.
#[derive(Clone, Debug, PartialEq)]
pub struct BernoulliBandit {
    reward_probabilities: Vec<f64>,
}

impl BernoulliBandit {
    pub fn new(reward_probabilities: Vec<f64>) -> Result<BernoulliBandit> {
        if reward_probabilities.len() < 2 {
            return Err(Error::Cardinality { given: reward_probabilities });
        }

        if let Some(&value) = reward_probabilities.iter().find(|p| !(0.0..=1.0).contains(*p)) {
            return Err(Error::ProbabilityRange { value });
        }

        Ok(BernoulliBandit { reward_probabilities })
    }

    pub fn reward_probabilities(&self) -> &[f64] {
        &self.reward_probabilities
    }

    /// Reward probabilities are fixed for the lifetime of the bandit; this always fails.
    pub fn set_reward_probabilities(&mut self, _reward_probabilities: Vec<f64>) -> Result<()> {
        Err(Error::Immutability)
    }

    /// Arm with the highest reward probability; the first one on ties.
    pub fn best_arm(&self) -> usize {
        let mut best = 0;
        for (arm, &p) in self.reward_probabilities.iter().enumerate() {
            if p > self.reward_probabilities[best] {
                best = arm;
            }
        }
        best
    }

    pub fn best_probability(&self) -> f64 {
        self.reward_probabilities[self.best_arm()]
    }
}

impl Bandit for BernoulliBandit {
    fn get_reward<R: Rng + ?Sized>(&self, choice: usize, rng: &mut R) -> Result<u8> {
        check_arm(choice, self.reward_probabilities.len())?;

        let draw: f64 = rng.gen();
        Ok((draw < self.reward_probabilities[choice]) as u8)
    }

    fn arm_count(&self) -> usize {
        self.reward_probabilities.len()
    }
}
