use super::policy::{check_n_arms, fmt_stats, DrawResult, Policy, PolicyStats, PolicyType};
use super::stats::{argmax, RewardStatistics};

use crate::errors::PolicyError;

use std::fmt;

#[derive(Clone, Debug)]
pub struct Ucb1 {
    arms: Vec<RewardStatistics>,
    rounds: u64,
}

impl Ucb1 {
    pub fn new(n_arms: usize) -> Result<Self, PolicyError> {
        check_n_arms(n_arms)?;

        Ok(Self {
            arms: vec![RewardStatistics::default(); n_arms],
            rounds: 0,
        })
    }

    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    fn score(arm: &RewardStatistics, rounds: u64) -> f64 {
        arm.mean_reward + (2.0 * (rounds as f64).ln() / (arm.pulls as f64)).sqrt()
    }
}

impl Policy for Ucb1 {
    fn policy_type(&self) -> PolicyType {
        PolicyType::Ucb1
    }

    fn n_arms(&self) -> usize {
        self.arms.len()
    }

    fn reset(&mut self) {
        self.arms.iter_mut().for_each(|arm| arm.reset());
        self.rounds = 0;
    }

    fn draw(&mut self) -> DrawResult {
        // counts every proposal, including the ones replay later discards
        self.rounds += 1;

        // every arm is tried once before the confidence bound is defined
        let arm_id = self
            .arms
            .iter()
            .position(|arm| arm.pulls == 0)
            .or_else(|| argmax(self.arms.iter().map(|arm| Self::score(arm, self.rounds))))
            .unwrap_or_default();

        DrawResult {
            arm_id,
            explored: None,
        }
    }

    fn update(&mut self, arm_id: usize, reward: f64) -> Result<(), PolicyError> {
        self.arms
            .get_mut(arm_id)
            .ok_or(PolicyError::ArmNotFound(arm_id))?
            .record(reward);

        Ok(())
    }

    fn stats(&self) -> PolicyStats {
        PolicyStats {
            arms: self.arms.clone(),
        }
    }
}

impl fmt::Display for Ucb1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UCB1(arms={}, t={}): ", self.arms.len(), self.rounds)?;
        fmt_stats(f, &self.stats())
    }
}
