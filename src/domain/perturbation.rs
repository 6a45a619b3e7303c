//! The cosmetic random-walk step applied to every token on a tick.
//!
//! Each step draws three uniform values from the supplied random source, in
//! this order, and applies:
//!
//! ```text
//! price            *= 1 + U(-price_step,  price_step)
//! price_change_24h += U(-change_step, change_step)
//! volume_24h       *= 1 + U(-volume_step, volume_step)
//! ```
//!
//! There is no mean reversion and no floor or ceiling. Multiplying by a
//! factor in `[0.99, 1.01)` keeps a positive price positive, but nothing
//! stops it from drifting arbitrarily close to zero over a long run.

use chrono::{DateTime, Utc};
use rand::Rng;

use super::Token;

/// Step sizes of the random walk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Perturbation {
    /// Half-width of the relative price step (0.01 = ±1%).
    pub price_step: f64,
    /// Half-width of the additive 24h-change step in percentage points.
    pub change_step: f64,
    /// Half-width of the relative volume step (0.05 = ±5%).
    pub volume_step: f64,
}

impl Default for Perturbation {
    fn default() -> Self {
        Self {
            price_step: 0.01,
            change_step: 0.25,
            volume_step: 0.05,
        }
    }
}

impl Perturbation {
    /// Returns a perturbed copy of `token`, stamped with `now`.
    #[must_use]
    pub fn apply<R: Rng + ?Sized>(&self, token: &Token, rng: &mut R, now: DateTime<Utc>) -> Token {
        let price_factor = 1.0 + symmetric(rng, self.price_step);
        let change_delta = symmetric(rng, self.change_step);
        let volume_factor = 1.0 + symmetric(rng, self.volume_step);

        Token {
            price: token.price * price_factor,
            price_change_24h: token.price_change_24h + change_delta,
            volume_24h: token.volume_24h * volume_factor,
            updated_at: now,
            ..token.clone()
        }
    }
}

/// Uniform draw from `[-half_width, half_width)`.
fn symmetric<R: Rng + ?Sized>(rng: &mut R, half_width: f64) -> f64 {
    (rng.r#gen::<f64>() - 0.5) * 2.0 * half_width
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::rngs::mock::StepRng;

    use super::*;
    use crate::domain::token::fixtures::token;

    #[test]
    fn midpoint_draw_leaves_values_unchanged() {
        // 2^63 maps to exactly 0.5 in the standard f64 distribution.
        let mut rng = StepRng::new(1 << 63, 0);
        let mut t = token("atom", 1.0, 1_000.0, true);
        t.price = 8.45;
        t.price_change_24h = 5.2;
        let now = Utc::now();

        let next = Perturbation::default().apply(&t, &mut rng, now);
        assert_eq!(next.price, 8.45);
        assert_eq!(next.price_change_24h, 5.2);
        assert_eq!(next.volume_24h, 1_000.0);
        assert_eq!(next.updated_at, now);
    }

    #[test]
    fn steps_stay_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let t = token("osmo", 1.0, 1_000.0, true);
        let p = Perturbation::default();
        for _ in 0..1_000 {
            let next = p.apply(&t, &mut rng, Utc::now());
            assert!(next.price >= 0.99 && next.price <= 1.01);
            assert!(next.price_change_24h >= -0.25 && next.price_change_24h <= 0.25);
            assert!(next.volume_24h >= 950.0 && next.volume_24h <= 1_050.0);
        }
    }

    #[test]
    fn same_seed_reproduces_the_same_walk() {
        let t = token("juno", 1.0, 1_000.0, true);
        let p = Perturbation::default();
        let now = Utc::now();
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..10 {
            assert_eq!(p.apply(&t, &mut a, now), p.apply(&t, &mut b, now));
        }
    }

    #[test]
    fn untouched_fields_are_preserved() {
        let mut rng = StdRng::seed_from_u64(1);
        let t = token("akash", 420.0, 12.0, false);
        let next = Perturbation::default().apply(&t, &mut rng, Utc::now());
        assert_eq!(next.id, t.id);
        assert_eq!(next.market_cap, t.market_cap);
        assert_eq!(next.is_verified, t.is_verified);
        assert_eq!(next.created_at, t.created_at);
    }
}
