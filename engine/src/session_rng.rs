use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Seeded per session so that every game, including the bot's random-move
// rolls, can be reproduced from the recorded seed.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }

    pub fn random_chance(&mut self, probability: f64) -> bool {
        self.rng.random::<f64>() < probability
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_gives_same_sequence() {
        let mut a = SessionRng::new(42);
        let mut b = SessionRng::new(42);
        for _ in 0..32 {
            assert_eq!(
                a.random_range(0..9usize),
                b.random_range(0..9usize)
            );
        }
    }

    #[test]
    fn test_chance_bounds() {
        let mut rng = SessionRng::new(7);
        for _ in 0..100 {
            assert!(!rng.random_chance(0.0));
            assert!(rng.random_chance(1.0));
        }
    }
}
