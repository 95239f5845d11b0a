use crate::errors::ReplayError;
use crate::policies::{DrawResult, Policy};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoricalRecord {
    pub arm_id: usize,
    pub reward: f64,
}

impl From<(usize, f64)> for HistoricalRecord {
    fn from((arm_id, reward): (usize, f64)) -> Self {
        Self { arm_id, reward }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ReplayOutcome {
    pub cumulative_rewards: Vec<f64>,
    pub pull_history: Vec<usize>,
}

impl ReplayOutcome {
    pub fn matches(&self) -> usize {
        self.pull_history.len()
    }

    /// Reward accumulated over all matched rounds, 0 when nothing matched.
    pub fn final_reward(&self) -> f64 {
        self.cumulative_rewards.last().copied().unwrap_or_default()
    }
}

/// Offline evaluation by replay: a proposal only counts when it matches the logged arm.
#[derive(Clone, Copy, Debug)]
pub struct ReplayEvaluator {
    max_matches: usize,
}

impl ReplayEvaluator {
    pub fn new(max_matches: usize) -> Self {
        Self { max_matches }
    }

    pub fn max_matches(&self) -> usize {
        self.max_matches
    }

    fn validate(log: &[HistoricalRecord], n_arms: usize) -> Result<(), ReplayError> {
        log.iter()
            .enumerate()
            .find(|(_, record)| record.arm_id >= n_arms)
            .map_or(Ok(()), |(index, record)| {
                Err(ReplayError::DomainError {
                    index,
                    arm_id: record.arm_id,
                    n_arms,
                })
            })
    }

    pub fn run(
        &self,
        policy: &mut dyn Policy,
        log: &[HistoricalRecord],
    ) -> Result<ReplayOutcome, ReplayError> {
        // the whole log is checked first so a bad record never leaves the policy half trained
        Self::validate(log, policy.n_arms())?;

        let mut outcome = ReplayOutcome::default();
        if self.max_matches == 0 {
            return Ok(outcome);
        }

        let mut running_total = 0.0;
        for (index, record) in log.iter().enumerate() {
            let DrawResult { arm_id, explored } = policy.draw();
            if arm_id != record.arm_id {
                continue;
            }

            policy.update(arm_id, record.reward)?;
            running_total += record.reward;
            outcome.cumulative_rewards.push(running_total);
            outcome.pull_history.push(arm_id);

            debug!(
                round = outcome.matches() - 1,
                index,
                arm_id,
                ?explored,
                reward = record.reward,
                mean_rewards = ?policy.stats().mean_rewards(),
                "Matched logged arm"
            );

            if outcome.matches() >= self.max_matches {
                break;
            }
        }

        info!(
            policy = %policy,
            matches = outcome.matches(),
            records = log.len(),
            final_reward = outcome.final_reward(),
            "Replay finished"
        );

        Ok(outcome)
    }
}
