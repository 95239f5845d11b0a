mod config;
mod data;
mod errors;
mod policies;
mod replay;
mod report;

use crate::config::AppConfig;
use crate::data::load_log;
use crate::errors::AppError;
use crate::replay::ReplayEvaluator;
use crate::report::{summary_table, write_json, PolicyReport};

use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), AppError> {
    let config = AppConfig::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    let log = load_log(&config.data.path)?;
    let evaluator = ReplayEvaluator::new(config.replay.max_matches);

    let reports = config
        .policies
        .iter()
        .map(|policy_type| -> Result<PolicyReport, AppError> {
            let mut policy = policy_type.build(log.n_arms)?;
            info!(policy = %policy, "Starting replay");

            let outcome = evaluator.run(policy.as_mut(), &log.records)?;
            Ok(PolicyReport::new(policy_type.name(), outcome))
        })
        .collect::<Result<Vec<_>, _>>()?;

    print!("{}", summary_table(&reports, evaluator.max_matches()));

    if let Some(path) = &config.output.path {
        write_json(&reports, path)?;
    }

    Ok(())
}
