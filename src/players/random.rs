//! Uniform-random strategy.
//!
//! Not a search: the random player is the simplest possible selection policy
//! over the option set, useful as a baseline opponent and for exercising the
//! referee in tests. Seeded construction gives reproducible games.

use crate::players::Strategy;
use crate::CombinatorialGame;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Picks uniformly among the legal options.
pub struct RandomStrategy {
    rng: Xoshiro256PlusPlus,
}

impl RandomStrategy {
    /// A strategy seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: Xoshiro256PlusPlus::from_rng(&mut rand::rng()),
        }
    }

    /// A strategy with a fixed seed, for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: CombinatorialGame> Strategy<G> for RandomStrategy {
    fn name(&self) -> &'static str {
        "Random"
    }

    fn choose(&mut self, _position: &G, options: &[G]) -> Option<G> {
        if options.is_empty() {
            return None;
        }
        let pick = self.rng.random_range(0..options.len());
        Some(options[pick].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::gomoku::GomokuPosition;
    use crate::PlayerId;

    #[test]
    fn test_chooses_a_legal_option() {
        let position = GomokuPosition::new(5, false);
        let options = position.options(PlayerId::Black);
        let mut strategy = RandomStrategy::seeded(42);

        let chosen = strategy.choose(&position, &options).unwrap();
        assert!(options.contains(&chosen));
    }

    #[test]
    fn test_empty_options_yield_none() {
        let position = GomokuPosition::new(5, false);
        let mut strategy = RandomStrategy::seeded(42);
        assert!(strategy.choose(&position, &[]).is_none());
    }

    #[test]
    fn test_seeded_games_are_reproducible() {
        let position = GomokuPosition::new(7, false);
        let options = position.options(PlayerId::Black);

        let mut a = RandomStrategy::seeded(1234);
        let mut b = RandomStrategy::seeded(1234);
        for _ in 0..10 {
            assert_eq!(a.choose(&position, &options), b.choose(&position, &options));
        }
    }
}
