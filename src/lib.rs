pub mod agent;
pub mod bandit;
pub mod config;
pub mod errors;
pub mod simulation;

#[cfg(test)]
pub mod test_utils;
