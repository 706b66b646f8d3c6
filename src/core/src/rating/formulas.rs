use rand::Rng;
use rand_distr::{Distribution, Normal};

pub const AGE_PEAK: i32 = 30;
pub const DEFAULT_SIGMA: f64 = 90.0;
pub const DEFAULT_K: f64 = 24.0;

const STREAK_MIN: i32 = -3;
const STREAK_MAX: i32 = 5;

/// Gap used by the rank factor when only one side is ranked.
const ONE_SIDED_RANK_GAP: f64 = 12.0;

const MULTIPLIER_MIN: f64 = 0.55;
const MULTIPLIER_MAX: f64 = 2.2;

pub fn clamp_streak(streak: i32) -> i32 {
    streak.clamp(STREAK_MIN, STREAK_MAX)
}

/// +20 at the peak age, 4 points lost per year away from it, never below -40.
pub fn age_bonus(age: u8) -> f64 {
    (20.0 - 4.0 * (age as i32 - AGE_PEAK).abs() as f64).max(-40.0)
}

pub fn streak_bonus(streak: i32) -> f64 {
    clamp_streak(streak) as f64 * 10.0
}

/// Expected score of A against B.
pub fn elo_probability(ra: f64, rb: f64) -> f64 {
    1.0 / (1.0 + 10f64.powf((rb - ra) / 400.0))
}

/// Fight-night rating: base plus age and streak modifiers plus gaussian noise.
pub fn effective_rating<R: Rng + ?Sized>(
    base: f64,
    age: u8,
    streak: i32,
    sigma: f64,
    rng: &mut R,
) -> f64 {
    base + age_bonus(age) + streak_bonus(streak) + noise(sigma, rng)
}

fn noise<R: Rng + ?Sized>(sigma: f64, rng: &mut R) -> f64 {
    if sigma <= 0.0 {
        return 0.0;
    }

    match Normal::new(0.0, sigma) {
        Ok(normal) => normal.sample(rng),
        Err(_) => 0.0,
    }
}

fn rank_factor(rank_a: Option<u8>, rank_b: Option<u8>) -> f64 {
    let gap = match (rank_a, rank_b) {
        (None, None) => return 0.0,
        (Some(a), Some(b)) => (a as f64 - b as f64).abs(),
        _ => ONE_SIDED_RANK_GAP,
    };

    (gap / 15.0).min(1.0) * 0.35
}

fn mismatch_factor(ra: f64, rb: f64) -> f64 {
    0.65 + ((ra - rb).abs() / 350.0).min(1.0) * 0.75
}

/// 0.8 for an even fight, growing as the winner's expected score drops.
/// Measured from a certain win rather than from an even fight, so a
/// favourite's win still earns a small bonus.
fn upset_bonus(expected: f64) -> f64 {
    (1.0 - expected).max(0.0) * 1.6
}

/// K multiplier for a result: mismatch, rank gap and upset size, clamped.
pub fn k_multiplier(
    ra: f64,
    rb: f64,
    winner_is_a: bool,
    rank_a: Option<u8>,
    rank_b: Option<u8>,
) -> f64 {
    let pa = elo_probability(ra, rb);
    let expected_of_winner = if winner_is_a { pa } else { 1.0 - pa };

    let mult = mismatch_factor(ra, rb) + rank_factor(rank_a, rank_b) + upset_bonus(expected_of_winner);

    mult.clamp(MULTIPLIER_MIN, MULTIPLIER_MAX)
}

/// Zero-sum Elo update with a dynamic K. Returns the new `(ra, rb)`.
pub fn apply_elo(
    ra: f64,
    rb: f64,
    winner_is_a: bool,
    k: f64,
    rank_a: Option<u8>,
    rank_b: Option<u8>,
) -> (f64, f64) {
    let pa = elo_probability(ra, rb);
    let sa = if winner_is_a { 1.0 } else { 0.0 };

    let k_eff = k * k_multiplier(ra, rb, winner_is_a, rank_a, rank_b);
    let delta = k_eff * (sa - pa);

    (ra + delta, rb - delta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_age_bonus_curve() {
        assert_eq!(age_bonus(30), 20.0);
        assert_eq!(age_bonus(28), 12.0);
        assert_eq!(age_bonus(33), 8.0);
        assert_eq!(age_bonus(45), -40.0);
        assert_eq!(age_bonus(18), -28.0);
    }

    #[test]
    fn test_streak_bonus_is_clamped() {
        assert_eq!(streak_bonus(0), 0.0);
        assert_eq!(streak_bonus(9), 50.0);
        assert_eq!(streak_bonus(-7), -30.0);
        assert_eq!(streak_bonus(2), 20.0);
    }

    #[test]
    fn test_elo_probability_even_and_monotonic() {
        for r in [800.0, 1500.0, 2210.5] {
            assert!((elo_probability(r, r) - 0.5).abs() < EPS);
        }

        let mut last = 0.0;
        for diff in (-800..=800).step_by(50) {
            let p = elo_probability(1500.0 + diff as f64, 1500.0);
            assert!(p > last, "probability must grow with the gap, diff={}", diff);
            last = p;
        }
    }

    #[test]
    fn test_apply_elo_is_zero_sum() {
        let cases = [
            (1500.0, 1500.0, true, None, None),
            (1720.0, 1480.0, false, Some(3), None),
            (1390.0, 1655.0, true, Some(0), Some(14)),
            (2100.0, 1200.0, true, None, Some(1)),
        ];

        for (ra, rb, winner_is_a, rank_a, rank_b) in cases {
            let (ra2, rb2) = apply_elo(ra, rb, winner_is_a, DEFAULT_K, rank_a, rank_b);
            assert!(((ra2 - ra) + (rb2 - rb)).abs() < EPS);
        }
    }

    #[test]
    fn test_even_unranked_fight_update() {
        let (ra, rb) = (1500.0, 1500.0);
        assert!((elo_probability(ra, rb) - 0.5).abs() < EPS);

        let mult = k_multiplier(ra, rb, true, None, None);
        assert!((mult - 1.45).abs() < EPS, "mult was {}", mult);

        let (ra2, rb2) = apply_elo(ra, rb, true, 24.0, None, None);
        assert!((ra2 - 1517.4).abs() < 1e-6, "ra2 was {}", ra2);
        assert!((rb2 - 1482.6).abs() < 1e-6, "rb2 was {}", rb2);
    }

    #[test]
    fn test_upset_moves_ratings_more_than_expected_win() {
        let (favourite_win, _) = apply_elo(1700.0, 1400.0, true, DEFAULT_K, None, None);
        let (_, upset_win) = apply_elo(1700.0, 1400.0, false, DEFAULT_K, None, None);

        assert!(favourite_win - 1700.0 < upset_win - 1400.0);
    }

    #[test]
    fn test_upset_bonus_is_measured_from_a_certain_win() {
        assert!((upset_bonus(0.5) - 0.8).abs() < 1e-12);
        assert!((upset_bonus(0.85) - 0.24).abs() < 1e-12);
        assert_eq!(upset_bonus(1.0), 0.0);

        let favourite = k_multiplier(1800.0, 1500.0, true, None, None);
        assert!(favourite > mismatch_factor(1800.0, 1500.0), "favourite: {}", favourite);
    }

    #[test]
    fn test_multiplier_is_clamped() {
        let mult = k_multiplier(2400.0, 1000.0, false, Some(0), None);
        assert!(mult <= MULTIPLIER_MAX + EPS);
        assert!(mult >= MULTIPLIER_MIN - EPS);
    }

    #[test]
    fn test_effective_rating_without_noise_is_deterministic() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let rating = effective_rating(1500.0, 30, 2, 0.0, &mut rng);
        assert_eq!(rating, 1540.0);
    }

    #[test]
    fn test_effective_rating_noise_is_reproducible() {
        let mut first = ChaCha8Rng::seed_from_u64(99);
        let mut second = ChaCha8Rng::seed_from_u64(99);

        let a = effective_rating(1500.0, 27, 0, DEFAULT_SIGMA, &mut first);
        let b = effective_rating(1500.0, 27, 0, DEFAULT_SIGMA, &mut second);
        assert_eq!(a, b);
    }
}
