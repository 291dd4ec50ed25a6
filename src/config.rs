use std::env;
use std::str::FromStr;

use crate::errors::{Error, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    pub trials: usize,
    pub learning_rate: f64,
    pub inverse_temperature: f64,
    pub initial_value: f64,
    pub reward_probabilities: Vec<f64>,
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            trials: 1000,
            learning_rate: 0.1,
            inverse_temperature: 3.0,
            initial_value: 0.0,
            reward_probabilities: vec![0.2, 0.8],
            seed: None,
        }
    }
}

impl SimulationConfig {
    pub fn from_env() -> Result<SimulationConfig> {
        let default = SimulationConfig::default();

        let config = SimulationConfig {
            trials:               parse_env("BANDIT_TRIALS")?.unwrap_or(default.trials),
            learning_rate:        parse_env("BANDIT_LEARNING_RATE")?.unwrap_or(default.learning_rate),
            inverse_temperature:  parse_env("BANDIT_BETA")?.unwrap_or(default.inverse_temperature),
            initial_value:        parse_env("BANDIT_INITIAL_VALUE")?.unwrap_or(default.initial_value),
            reward_probabilities: parse_env_list("BANDIT_REWARD_PROBABILITIES")?.unwrap_or(default.reward_probabilities),
            seed:                 parse_env("BANDIT_SEED")?,
        };

        Ok(config)
    }

    pub fn initial_values(&self) -> Vec<f64> {
        vec![self.initial_value; self.reward_probabilities.len()]
    }
}

pub fn parse_env<Value: FromStr>(key: &str) -> Result<Option<Value>> {
    match env::var(key) {
        Ok(raw) => parse_value(key, &raw).map(Some),
        Err(_) => Ok(None),
    }
}

/// Comma separated list, e.g. `0.2,0.5,0.8`.
pub fn parse_env_list<Value: FromStr>(key: &str) -> Result<Option<Vec<Value>>> {
    match env::var(key) {
        Ok(raw) => parse_list(key, &raw).map(Some),
        Err(_) => Ok(None),
    }
}

fn parse_value<Value: FromStr>(key: &str, raw: &str) -> Result<Value> {
    raw.trim().parse().map_err(|_| Error::InvalidEnv {
        key: key.to_string(),
        value: raw.to_string(),
    })
}

fn parse_list<Value: FromStr>(key: &str, raw: &str) -> Result<Vec<Value>> {
    raw.split(',')
        .filter(|item| !item.trim().is_empty())
        .map(|item| parse_value(key, item))
        .collect()
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_lists() {
        let list: Vec<f64> = parse_list("KEY", "0.2, 0.5,0.8,").unwrap();
        assert_eq!(list, vec![0.2, 0.5, 0.8]);
    }

    #[test]
    fn reports_unparsable_values() {
        let err = parse_value::<usize>("BANDIT_TRIALS", "many").unwrap_err();
        assert_eq!(err, Error::InvalidEnv { key: "BANDIT_TRIALS".to_string(), value: "many".to_string() });

        assert!(parse_list::<f64>("KEY", "0.2,x").is_err());
    }

    #[test]
    fn missing_variables_are_none() {
        let value: Option<u64> = parse_env("BANDIT_TESTBED_SURELY_UNSET_VARIABLE").unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn initial_values_cover_every_arm() {
        let config = SimulationConfig {
            initial_value: 0.5,
            reward_probabilities: vec![0.1, 0.2, 0.3],
            ..SimulationConfig::default()
        };
        assert_eq!(config.initial_values(), vec![0.5, 0.5, 0.5]);
    }
}
