use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("{name} must be {expected}. Given {value}")]
    ParameterRange {
        name: &'static str,
        value: f64,
        expected: &'static str,
    },

    #[error("Agent needs at least one arm")]
    NoArms,

    #[error("The length of reward probabilities must be greater than 1. Given: {given:?}")]
    Cardinality { given: Vec<f64> },

    #[error("Each reward probability must be between 0 and 1. Given: {value}")]
    ProbabilityRange { value: f64 },

    #[error("Invalid arm index: {index} (arms: {arms})")]
    InvalidArm { index: usize, arms: usize },

    #[error("You can't change the reward probabilities after initialization")]
    Immutability,

    #[error("Can't parse env variable {key}={value:?}")]
    InvalidEnv { key: String, value: String },
}

pub(crate) fn check_arm(index: usize, arms: usize) -> Result<()> {
    if index >= arms {
        return Err(Error::InvalidArm { index, arms });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let err = Error::ParameterRange { name: "alpha", value: 1.1, expected: "between 0 and 1" };
        assert_eq!(err.to_string(), "alpha must be between 0 and 1. Given 1.1");

        let err = Error::InvalidArm { index: 2, arms: 2 };
        assert_eq!(err.to_string(), "Invalid arm index: 2 (arms: 2)");
    }

    #[test]
    fn check_arm_bounds() {
        assert!(check_arm(0, 2).is_ok());
        assert!(check_arm(1, 2).is_ok());
        assert_eq!(check_arm(2, 2), Err(Error::InvalidArm { index: 2, arms: 2 }));
    }
}
