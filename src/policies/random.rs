use super::policy::{check_n_arms, DrawResult, Policy, PolicyStats, PolicyType};
use super::rng::MaybeSeededRng;
use super::stats::RewardStatistics;

use crate::errors::PolicyError;

use rand::Rng;
use std::fmt;

/// Uniform baseline. Feedback is accepted but never learned from.
#[derive(Clone, Debug)]
pub struct RandomBaseline {
    n_arms: usize,
    rng: MaybeSeededRng,
}

impl RandomBaseline {
    pub fn new(n_arms: usize, seed: Option<u64>) -> Result<Self, PolicyError> {
        check_n_arms(n_arms)?;

        Ok(Self {
            n_arms,
            rng: MaybeSeededRng::new(seed),
        })
    }
}

impl Policy for RandomBaseline {
    fn policy_type(&self) -> PolicyType {
        PolicyType::Random {
            seed: self.rng.seed,
        }
    }

    fn n_arms(&self) -> usize {
        self.n_arms
    }

    fn reset(&mut self) {}

    fn draw(&mut self) -> DrawResult {
        DrawResult {
            arm_id: self.rng.get_rng().random_range(0..self.n_arms),
            explored: None,
        }
    }

    fn update(&mut self, arm_id: usize, _: f64) -> Result<(), PolicyError> {
        if arm_id < self.n_arms {
            Ok(())
        } else {
            Err(PolicyError::ArmNotFound(arm_id))
        }
    }

    fn stats(&self) -> PolicyStats {
        PolicyStats {
            arms: vec![RewardStatistics::default(); self.n_arms],
        }
    }
}

impl fmt::Display for RandomBaseline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Random(arms={})", self.n_arms)
    }
}
