use crate::fighter::Fighter;
use crate::rating::{apply_elo, effective_rating, elo_probability};
use crate::simulation::SimConfig;
use chrono::{Duration, NaiveDate};
use log::debug;
use rand::Rng;

#[derive(Debug, Clone, PartialEq)]
pub struct FightOutcome {
    pub winner_id: u32,
    pub loser_id: u32,
    pub rating_a: f64,
    pub rating_b: f64,
    pub next_available_a: NaiveDate,
    pub next_available_b: NaiveDate,
    /// Extra recovery days on top of the regular rest, 0 when uninjured.
    pub injury_days_a: i64,
    pub injury_days_b: i64,
}

impl FightOutcome {
    pub fn a_won(&self, a_id: u32) -> bool {
        self.winner_id == a_id
    }
}

pub struct FightSimulator;

impl FightSimulator {
    pub fn simulate<R: Rng + ?Sized>(
        a: &Fighter,
        b: &Fighter,
        event_date: NaiveDate,
        config: &SimConfig,
        rng: &mut R,
    ) -> FightOutcome {
        let ra_eff = effective_rating(a.rating, a.age, a.streak, config.sigma, rng);
        let rb_eff = effective_rating(b.rating, b.age, b.streak, config.sigma, rng);

        let a_wins = Self::choose_winner(ra_eff, rb_eff, rng);

        let (rating_a, rating_b) = apply_elo(
            a.rating,
            b.rating,
            a_wins,
            config.k,
            a.rank.value(),
            b.rank.value(),
        );

        let (next_available_a, injury_days_a) = Self::after_fight_availability(event_date, config, rng);
        let (next_available_b, injury_days_b) = Self::after_fight_availability(event_date, config, rng);

        let (winner_id, loser_id) = if a_wins { (a.id, b.id) } else { (b.id, a.id) };

        debug!(
            "🥊 {} vs {}: effective {:.1} / {:.1}, winner {}",
            a.name, b.name, ra_eff, rb_eff, winner_id
        );

        FightOutcome {
            winner_id,
            loser_id,
            rating_a,
            rating_b,
            next_available_a,
            next_available_b,
            injury_days_a,
            injury_days_b,
        }
    }

    fn choose_winner<R: Rng + ?Sized>(ra_eff: f64, rb_eff: f64, rng: &mut R) -> bool {
        let p = elo_probability(ra_eff, rb_eff);
        rng.gen_range(0.0..1.0) < p
    }

    /// Regular rest, plus a random recovery period when the fighter got hurt.
    pub fn after_fight_availability<R: Rng + ?Sized>(
        event_date: NaiveDate,
        config: &SimConfig,
        rng: &mut R,
    ) -> (NaiveDate, i64) {
        let base = event_date + Duration::days(config.rest_days);

        if config.injury_chance > 0.0 && rng.gen_range(0.0..1.0) < config.injury_chance {
            let extra = rng.gen_range(config.injury_extra_min..=config.injury_extra_max);
            return (base + Duration::days(extra), extra);
        }

        (base, 0)
    }
}
