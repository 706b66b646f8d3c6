use rand::Rng;
use rand::seq::SliceRandom;

const DECISIONS: [&str; 3] = ["U-DEC", "S-DEC", "M-DEC"];

const KNOCKOUTS: [&str; 4] = [
    "KO (head kick)",
    "TKO (punches)",
    "TKO (ground and pound)",
    "TKO (doctor stoppage)",
];

const SUBMISSIONS: [&str; 5] = [
    "SUB (RNC)",
    "SUB (Armbar)",
    "SUB (Guillotine)",
    "SUB (Triangle)",
    "SUB (Kimura)",
];

const KNOCKOUT_ROUNDS: [u8; 5] = [1, 1, 2, 2, 3];
const SUBMISSION_ROUNDS: [u8; 4] = [1, 2, 2, 3];

const FINAL_ROUND: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishKind {
    Decision,
    Knockout,
    Submission,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinishDetails {
    pub kind: FinishKind,
    pub method: String,
    pub round: u8,
    /// Elapsed time in the final round, `mm:ss`.
    pub time: String,
}

/// Draws how a bout ended: 52% decision, 30% KO/TKO, 18% submission.
pub fn random_method_and_time<R: Rng + ?Sized>(rng: &mut R) -> FinishDetails {
    let roll: f64 = rng.gen_range(0.0..1.0);

    let (kind, method, round, seconds) = if roll < 0.52 {
        let method = DECISIONS.choose(rng).copied().unwrap_or(DECISIONS[0]);
        (FinishKind::Decision, method, FINAL_ROUND, rng.gen_range(10..=300))
    } else if roll < 0.82 {
        let method = KNOCKOUTS.choose(rng).copied().unwrap_or(KNOCKOUTS[0]);
        let round = KNOCKOUT_ROUNDS.choose(rng).copied().unwrap_or(1);
        (FinishKind::Knockout, method, round, stoppage_seconds(round, rng))
    } else {
        let method = SUBMISSIONS.choose(rng).copied().unwrap_or(SUBMISSIONS[0]);
        let round = SUBMISSION_ROUNDS.choose(rng).copied().unwrap_or(1);
        (FinishKind::Submission, method, round, stoppage_seconds(round, rng))
    };

    FinishDetails {
        kind,
        method: method.to_string(),
        round,
        time: format_mmss(seconds),
    }
}

fn stoppage_seconds<R: Rng + ?Sized>(round: u8, rng: &mut R) -> u32 {
    if round < FINAL_ROUND {
        rng.gen_range(10..=290)
    } else {
        rng.gen_range(10..=300)
    }
}

fn format_mmss(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn seconds_of(time: &str) -> u32 {
        let (mm, ss) = time.split_once(':').unwrap();
        mm.parse::<u32>().unwrap() * 60 + ss.parse::<u32>().unwrap()
    }

    #[test]
    fn test_format_mmss() {
        assert_eq!(format_mmss(10), "00:10");
        assert_eq!(format_mmss(300), "05:00");
        assert_eq!(format_mmss(127), "02:07");
    }

    #[test]
    fn test_finishes_respect_round_and_time_rules() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);

        for _ in 0..2_000 {
            let finish = random_method_and_time(&mut rng);
            let seconds = seconds_of(&finish.time);
            assert!(seconds >= 10);

            match finish.kind {
                FinishKind::Decision => {
                    assert_eq!(finish.round, 3);
                    assert!(DECISIONS.contains(&finish.method.as_str()));
                    assert!(seconds <= 300);
                }
                FinishKind::Knockout | FinishKind::Submission => {
                    assert!((1..=3).contains(&finish.round));
                    let limit = if finish.round < 3 { 290 } else { 300 };
                    assert!(seconds <= limit, "{} in round {}", finish.time, finish.round);
                }
            }

            if finish.kind == FinishKind::Submission {
                assert!(finish.method.starts_with("SUB"));
            }
        }
    }

    #[test]
    fn test_finish_mix_matches_weights() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut decisions = 0;
        let mut knockouts = 0;

        for _ in 0..10_000 {
            match random_method_and_time(&mut rng).kind {
                FinishKind::Decision => decisions += 1,
                FinishKind::Knockout => knockouts += 1,
                FinishKind::Submission => {}
            }
        }

        assert!((4_900..5_500).contains(&decisions), "decisions {}", decisions);
        assert!((2_700..3_300).contains(&knockouts), "knockouts {}", knockouts);
    }
}
