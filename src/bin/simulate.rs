use anyhow::Context;
use colored::*;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use bandit_testbed::agent::SoftmaxAgent;
use bandit_testbed::bandit::BernoulliBandit;
use bandit_testbed::config::SimulationConfig;
use bandit_testbed::simulation::simulate;


fn main() -> anyhow::Result<()> {
    log4rs::init_file("log4rs.yaml", Default::default()).context("can't init log4rs")?;

    let config = SimulationConfig::from_env()?;
    info!("{:?}", config);

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut agent = SoftmaxAgent::new(config.learning_rate, config.inverse_temperature, config.initial_values())?;
    let bandit = BernoulliBandit::new(config.reward_probabilities.clone())?;

    let history = simulate(&mut agent, &bandit, config.trials, &mut rng)?;
    let summary = history.summary(&bandit)?;

    println!("{}", "Simulation summary".bold());
    println!("{}", summary);
    for (arm, (value, p)) in agent.values().iter().zip(bandit.reward_probabilities()).enumerate() {
        let line = format!("arm {}: estimate {:.4}, true {:.4}", arm, value, p);
        if arm == summary.best_arm {
            println!("{}", line.bright_green());
        } else {
            println!("{}", line);
        }
    }

    Ok(())
}
