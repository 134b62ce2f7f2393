//! Seedable source for stochastic action outcomes.
//!
//! Some actions carry a small probability of going wrong (a bad trip, a
//! forced orgasm, vomiting). Those draws go through a [`Chance`] that the
//! caller owns, so runs are reproducible and tests can switch the draws off.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Probability source threaded through action application.
#[derive(Debug, Clone)]
pub struct Chance {
    rng: Option<SmallRng>,
}

impl Chance {
    /// A source that never fires.
    pub const fn disabled() -> Self {
        Self { rng: None }
    }

    /// An enabled source seeded deterministically.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(SmallRng::seed_from_u64(seed))
    }

    /// An enabled source drawing from `rng`.
    pub const fn from_rng(rng: SmallRng) -> Self {
        Self { rng: Some(rng) }
    }

    /// Whether stochastic outcomes can fire at all.
    pub const fn is_enabled(&self) -> bool {
        self.rng.is_some()
    }

    /// Draw once and report whether an event with probability `p` fired.
    ///
    /// A disabled source always returns `false` and draws nothing.
    pub fn hits(&mut self, p: f64) -> bool {
        self.rng.as_mut().is_some_and(|rng| rng.random::<f64>() < p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_never_fires() {
        let mut chance = Chance::disabled();
        assert!(!chance.is_enabled());
        assert!((0..100).all(|_| !chance.hits(1.0)));
    }

    #[test]
    fn certain_and_impossible_events() {
        let mut chance = Chance::seeded(42);
        assert!(chance.is_enabled());
        assert!((0..100).all(|_| chance.hits(1.0)));
        assert!((0..100).all(|_| !chance.hits(0.0)));
    }

    #[test]
    fn same_seed_same_draws() {
        let mut a = Chance::seeded(7);
        let mut b = Chance::seeded(7);
        let left: Vec<bool> = (0..50).map(|_| a.hits(0.5)).collect();
        let right: Vec<bool> = (0..50).map(|_| b.hits(0.5)).collect();
        assert_eq!(left, right);
    }
}
