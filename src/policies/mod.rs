pub mod epsilon_greedy;
mod policy;
pub mod random;
mod rng;
pub mod stats;
pub mod ucb;

pub use policy::{DrawResult, Policy, PolicyStats, PolicyType};
