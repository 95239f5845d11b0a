use super::epsilon_greedy::EpsilonGreedy;
use super::random::RandomBaseline;
use super::stats::RewardStatistics;
use super::ucb::Ucb1;

use crate::errors::PolicyError;

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawResult {
    pub arm_id: usize,
    /// `Some(true)` when the arm came from an exploration step, `Some(false)` when exploiting.
    /// Policies without that distinction report `None`.
    pub explored: Option<bool>,
}

#[derive(Clone, Debug, Serialize)]
pub struct PolicyStats {
    pub arms: Vec<RewardStatistics>,
}

impl PolicyStats {
    pub fn total_pulls(&self) -> u64 {
        self.arms.iter().map(|arm| arm.pulls()).sum()
    }

    pub fn total_reward(&self) -> f64 {
        self.arms.iter().map(|arm| arm.total_reward()).sum()
    }

    pub fn mean_rewards(&self) -> Vec<f64> {
        self.arms.iter().map(|arm| arm.mean_reward()).collect()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PolicyType {
    EpsilonGreedy { epsilon: f64, seed: Option<u64> },
    Ucb1,
    Random { seed: Option<u64> },
}

impl PolicyType {
    pub fn build(&self, n_arms: usize) -> Result<Box<dyn Policy>, PolicyError> {
        Ok(match *self {
            PolicyType::EpsilonGreedy { epsilon, seed } => {
                Box::new(EpsilonGreedy::new(epsilon, n_arms, seed)?)
            }
            PolicyType::Ucb1 => Box::new(Ucb1::new(n_arms)?),
            PolicyType::Random { seed } => Box::new(RandomBaseline::new(n_arms, seed)?),
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            PolicyType::EpsilonGreedy { .. } => "EpsilonGreedy",
            PolicyType::Ucb1 => "UCB1",
            PolicyType::Random { .. } => "Random",
        }
    }
}

pub trait Policy: fmt::Display {
    fn policy_type(&self) -> PolicyType;
    fn n_arms(&self) -> usize;
    fn reset(&mut self);
    fn draw(&mut self) -> DrawResult;
    fn update(&mut self, arm_id: usize, reward: f64) -> Result<(), PolicyError>;
    fn stats(&self) -> PolicyStats;
}

pub(super) fn check_n_arms(n_arms: usize) -> Result<(), PolicyError> {
    if n_arms == 0 {
        return Err(PolicyError::InvalidParameter {
            name: "n_arms",
            reason: "at least one arm is required".to_string(),
        });
    }
    Ok(())
}

pub(super) fn fmt_stats(f: &mut fmt::Formatter<'_>, stats: &PolicyStats) -> fmt::Result {
    write!(
        f,
        "trained with {} pulls, total reward = {}, mean rewards = {:?}",
        stats.total_pulls(),
        stats.total_reward(),
        stats.mean_rewards()
    )
}
