use rand::Rng;

use crate::errors::Result;

mod softmax;

pub use softmax::SoftmaxAgent;

/// Decision maker choosing among a fixed set of arms.
pub trait Agent {
    /// Picks an arm index in `[0, arm_count)`, consuming one draw from `rng`.
    fn make_choice<R: Rng + ?Sized>(&self, rng: &mut R) -> usize;

    /// Updates internal estimates after `choice` yielded `reward`.
    fn learn(&mut self, choice: usize, reward: f64) -> Result<()>;

    /// Number of arms, fixed at construction.
    fn arm_count(&self) -> usize;
}
