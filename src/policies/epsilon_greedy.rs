use super::policy::{check_n_arms, fmt_stats, DrawResult, Policy, PolicyStats, PolicyType};
use super::rng::MaybeSeededRng;
use super::stats::{argmax, RewardStatistics};

use crate::errors::PolicyError;

use rand::Rng;
use std::fmt;

#[derive(Clone, Debug)]
pub struct EpsilonGreedy {
    arms: Vec<RewardStatistics>,
    epsilon: f64,
    rng: MaybeSeededRng,
}

impl EpsilonGreedy {
    pub fn new(epsilon: f64, n_arms: usize, seed: Option<u64>) -> Result<Self, PolicyError> {
        if !(0.0..=1.0).contains(&epsilon) {
            return Err(PolicyError::InvalidParameter {
                name: "epsilon",
                reason: format!("{epsilon} is not in [0, 1]"),
            });
        }
        check_n_arms(n_arms)?;

        Ok(Self {
            arms: vec![RewardStatistics::default(); n_arms],
            epsilon,
            rng: MaybeSeededRng::new(seed),
        })
    }
}

impl Policy for EpsilonGreedy {
    fn policy_type(&self) -> PolicyType {
        PolicyType::EpsilonGreedy {
            epsilon: self.epsilon,
            seed: self.rng.seed,
        }
    }

    fn n_arms(&self) -> usize {
        self.arms.len()
    }

    fn reset(&mut self) {
        self.arms.iter_mut().for_each(|arm| arm.reset());
    }

    fn draw(&mut self) -> DrawResult {
        let rng = self.rng.get_rng();

        // exploit strictly above epsilon so that epsilon = 1 always explores
        if rng.random::<f64>() > self.epsilon {
            let arm_id = argmax(self.arms.iter().map(|arm| arm.mean_reward)).unwrap_or_default();
            DrawResult {
                arm_id,
                explored: Some(false),
            }
        } else {
            DrawResult {
                arm_id: rng.random_range(0..self.arms.len()),
                explored: Some(true),
            }
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

impl fmt::Display for EpsilonGreedy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EpsilonGreedy(epsilon={}, arms={}): ", self.epsilon, self.arms.len())?;
        fmt_stats(f, &self.stats())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: Option<u64> = Some(1234);
    const EPS: f64 = 1e-9;

    #[test]
    fn invalid_epsilon() {
        for epsilon in [-0.01, 1.01, f64::NAN] {
            assert!(matches!(
                EpsilonGreedy::new(epsilon, 3, SEED),
                Err(PolicyError::InvalidParameter { name: "epsilon", .. })
            ));
        }
    }

    #[test]
    fn boundary_epsilon() {
        assert!(EpsilonGreedy::new(0.0, 3, SEED).is_ok());
        assert!(EpsilonGreedy::new(1.0, 3, SEED).is_ok());
    }

    #[test]
    fn no_arms() {
        assert!(EpsilonGreedy::new(0.1, 0, SEED).is_err());
    }

    #[test]
    fn draw_cold_start_exploits_first_arm() {
        let mut policy = EpsilonGreedy::new(0.0, 4, SEED).unwrap();
        let result = policy.draw();
        assert_eq!(result.arm_id, 0);
        assert_eq!(result.explored, Some(false));
    }

    #[test]
    fn draw_best() {
        let mut policy = EpsilonGreedy::new(0.0, 3, SEED).unwrap();
        policy.update(2, 1.0).unwrap();
        policy.update(1, 0.5).unwrap();

        (0..100).for_each(|_| assert_eq!(policy.draw().arm_id, 2));
    }

    #[test]
    fn draw_tie_lowest_index() {
        let mut policy = EpsilonGreedy::new(0.0, 3, SEED).unwrap();
        policy.update(1, 1.0).unwrap();
        policy.update(2, 1.0).unwrap();
        assert_eq!(policy.draw().arm_id, 1);
    }

    #[test]
    fn zero_epsilon_never_explores() {
        let mut policy = EpsilonGreedy::new(0.0, 5, SEED).unwrap();
        assert!((0..1000).all(|_| policy.draw().explored == Some(false)));
    }

    #[test]
    fn unit_epsilon_always_explores() {
        let mut policy = EpsilonGreedy::new(1.0, 5, SEED).unwrap();
        policy.update(3, 10.0).unwrap();

        let draws: Vec<DrawResult> = (0..1000).map(|_| policy.draw()).collect();
        assert!(draws.iter().all(|draw| draw.explored == Some(true)));
        assert!(draws.iter().all(|draw| draw.arm_id < 5));
        // uniform over all arms, not only the best one
        assert!(draws.iter().any(|draw| draw.arm_id != 3));
    }

    #[test]
    fn single_arm() {
        let mut policy = EpsilonGreedy::new(0.5, 1, SEED).unwrap();
        assert!((0..100).all(|_| policy.draw().arm_id == 0));
    }

    #[test]
    fn update() {
        let mut policy = EpsilonGreedy::new(0.0, 2, SEED).unwrap();

        assert!(policy.update(0, 1.0).is_ok());
        assert!(policy.update(0, 0.0).is_ok());
        assert!((policy.arms[0].mean_reward() - 0.5).abs() < EPS);
        assert_eq!(policy.arms[0].pulls(), 2);
        assert_eq!(policy.arms[1], RewardStatistics::default());
    }

    #[test]
    fn update_unknown_arm() {
        let mut policy = EpsilonGreedy::new(0.0, 2, SEED).unwrap();
        assert!(matches!(
            policy.update(2, 1.0),
            Err(PolicyError::ArmNotFound(2))
        ));
    }

    #[test]
    fn reset_matches_fresh_policy() {
        let fresh = EpsilonGreedy::new(0.1, 3, SEED).unwrap();
        let mut policy = EpsilonGreedy::new(0.1, 3, SEED).unwrap();
        policy.update(0, 1.0).unwrap();
        policy.update(2, 3.0).unwrap();

        policy.reset();
        assert_eq!(policy.arms, fresh.arms);
        policy.reset();
        policy.reset();
        assert_eq!(policy.arms, fresh.arms);
    }

    #[test]
    fn stats() {
        let mut policy = EpsilonGreedy::new(0.1, 2, SEED).unwrap();
        policy.update(0, 1.0).unwrap();
        policy.update(1, 2.0).unwrap();
        policy.update(1, 4.0).unwrap();

        let stats = policy.stats();
        assert_eq!(stats.total_pulls(), 3);
        assert!((stats.total_reward() - 7.0).abs() < EPS);
        assert!(policy.to_string().starts_with("EpsilonGreedy(epsilon=0.1, arms=2)"));
    }
}
