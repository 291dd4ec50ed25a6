use rand::Rng;

use crate::errors::Result;

mod bernoulli;

pub use bernoulli::BernoulliBandit;

/// Environment producing a stochastic reward for each arm.
pub trait Bandit {
    /// Pulls `choice`, consuming one draw from `rng`.
    fn get_reward<R: Rng + ?Sized>(&self, choice: usize, rng: &mut R) -> Result<u8>;

    /// Number of arms, fixed at construction.
    fn arm_count(&self) -> usize;
}
