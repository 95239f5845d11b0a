use serde::Serialize;

/// Running reward counters for a single arm.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RewardStatistics {
    pub(super) pulls: u64,
    pub(super) total_reward: f64,
    pub(super) mean_reward: f64,
}

impl RewardStatistics {
    pub fn record(&mut self, reward: f64) {
        self.pulls += 1;
        self.total_reward += reward;
        // incremental form keeps the mean stable over long runs
        self.mean_reward += (reward - self.mean_reward) / (self.pulls as f64);
    }

    pub fn reset(&mut self) {
        self.pulls = 0;
        self.total_reward = 0.0;
        self.mean_reward = 0.0;
    }

    pub fn pulls(&self) -> u64 {
        self.pulls
    }

    pub fn total_reward(&self) -> f64 {
        self.total_reward
    }

    pub fn mean_reward(&self) -> f64 {
        self.mean_reward
    }
}

/// Index of the largest value, lowest index on ties. NaN ranks below every number.
pub(super) fn argmax<I>(values: I) -> Option<usize>
where
    I: IntoIterator<Item = f64>,
{
    values
        .into_iter()
        .map(|value| if value.is_nan() { f64::NEG_INFINITY } else { value })
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (idx, value)| match best {
            Some((_, best_value)) if value <= best_value => best,
            _ => Some((idx, value)),
        })
        .map(|(idx, _)| idx)
}
