use log::trace;
use rand::Rng;

use crate::agent::Agent;
use crate::errors::{check_arm, Error, Result};


/// Boltzmann exploration over incrementally updated value estimates.
#[derive(Clone, Debug)]
pub struct SoftmaxAgent {
    learning_rate: f64,
    inverse_temperature: f64,
    values: Vec<f64>,
}

impl SoftmaxAgent {
    pub fn new(learning_rate: f64, inverse_temperature: f64, initial_values: Vec<f64>) -> Result<SoftmaxAgent> {
        if !(0.0..=1.0).contains(&learning_rate) {
            return Err(Error::ParameterRange {
                name: "alpha",
                value: learning_rate,
                expected: "between 0 and 1",
            });
        }
        if !inverse_temperature.is_finite() || inverse_temperature < 0.0 {
            return Err(Error::ParameterRange {
                name: "beta",
                value: inverse_temperature,
                expected: "nonnegative and finite",
            });
        }
        if initial_values.is_empty() {
            return Err(Error::NoArms);
        }

        Ok(SoftmaxAgent {
            learning_rate,
            inverse_temperature,
            values: initial_values,
        })
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn inverse_temperature(&self) -> f64 {
        self.inverse_temperature
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Selection probability of every arm under the current values.
    pub fn probabilities(&self) -> Vec<f64> {
        let beta = self.inverse_temperature;
        let max = self.values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        // Exponent is beta times the gap to the best value: never positive,
        // never inf - inf. Ties with the max weigh exactly 1.
        let weights = self.values
            .iter()
            .map(|&v| {
                if v == max || beta == 0.0 {
                    1.0
                } else {
                    (beta * (v - max)).exp()
                }
            })
            .collect::<Vec<_>>();
        let sum: f64 = weights.iter().sum();

        weights.into_iter().map(|w| w / sum).collect()
    }

    fn cumulative_distribution(&self) -> Vec<f64> {
        let mut cumulative = 0.0;
        self.probabilities()
            .into_iter()
            .map(|p| {
                cumulative += p;
                cumulative
            })
            .collect()
    }
}

impl Agent for SoftmaxAgent {
    fn make_choice<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let cumulative = self.cumulative_distribution();
        let draw: f64 = rng.gen();

        // Rounding may leave the last bound slightly below 1.
        let choice = cumulative
            .iter()
            .position(|&c| draw < c)
            .unwrap_or(cumulative.len() - 1);

        trace!("draw {:.4} -> arm {}", draw, choice);
        choice
    }

    fn learn(&mut self, choice: usize, reward: f64) -> Result<()> {
        check_arm(choice, self.values.len())?;

        let value = &mut self.values[choice];
        *value += self.learning_rate * (reward - *value);
        Ok(())
    }

    fn arm_count(&self) -> usize {
        self.values.len()
    }
}
