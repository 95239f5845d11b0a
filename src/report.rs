use crate::errors::ReportError;
use crate::replay::ReplayOutcome;

use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;
use tracing::info;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PolicyReport {
    pub name: String,
    pub final_reward: f64,
    #[serde(flatten)]
    pub outcome: ReplayOutcome,
}

impl PolicyReport {
    pub fn new(name: impl Into<String>, outcome: ReplayOutcome) -> Self {
        Self {
            name: name.into(),
            final_reward: outcome.final_reward(),
            outcome,
        }
    }
}

/// Renders one row per policy, in the order given.
pub fn summary_table(reports: &[PolicyReport], max_matches: usize) -> String {
    let reward_header = format!("CumulativeReward@{max_matches}");
    let name_width = reports
        .iter()
        .map(|report| report.name.len())
        .chain(std::iter::once("Algorithm".len()))
        .max()
        .unwrap_or_default();

    let reward_width = reward_header.len();

    let mut table = format!(
        "{:<name_width$}  {reward_header:>reward_width$}  {:>8}\n",
        "Algorithm", "Matches"
    );
    for report in reports {
        let _ = writeln!(
            table,
            "{:<name_width$}  {:>reward_width$}  {:>8}",
            report.name,
            report.final_reward,
            report.outcome.matches(),
        );
    }
    table
}

/// Writes the cumulative-reward curves and pull histories for plotting.
pub fn write_json<P: AsRef<Path>>(reports: &[PolicyReport], path: P) -> Result<(), ReportError> {
    let path = path.as_ref();
    info!(path = ?path, policies = reports.len(), "Writing replay report");

    let serialized = serde_json::to_string(reports)?;
    std::fs::write(path, serialized)?;
    Ok(())
}
