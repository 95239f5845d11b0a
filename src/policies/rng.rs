use rand::{rngs::SmallRng, SeedableRng};

#[derive(Clone, Debug)]
pub struct MaybeSeededRng {
    pub(super) seed: Option<u64>,
    rng: SmallRng,
}

impl MaybeSeededRng {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = if let Some(seed) = seed {
            SmallRng::seed_from_u64(seed)
        } else {
            SmallRng::from_os_rng()
        };

        Self { seed, rng }
    }

    pub fn get_rng(&mut self) -> &mut SmallRng {
        &mut self.rng
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn seeded_streams_are_identical() {
        let mut a = MaybeSeededRng::new(Some(42));
        let mut b = MaybeSeededRng::new(Some(42));

        let xs: Vec<u64> = (0..16).map(|_| a.get_rng().random()).collect();
        let ys: Vec<u64> = (0..16).map(|_| b.get_rng().random()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn keeps_seed() {
        assert_eq!(MaybeSeededRng::new(Some(7)).seed, Some(7));
        assert_eq!(MaybeSeededRng::new(None).seed, None);
    }
}
