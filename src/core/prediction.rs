//! SR H/E prediction.
//!
//! Each day's prediction is computed from the day before it: the H ("house")
//! seed from the two digits of the older first round, the E ("ending") seed
//! from the last digits of both older rounds. A day is scored against its own
//! rounds once both have been announced.

use crate::domain::model::{PredictionResult, ResultRecord, Verdict, NO_PREDICTION};

/// Seeds derived from the older of two adjacent records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seeds {
    pub house: u32,
    pub ending: u32,
}

impl Seeds {
    pub fn from_previous(prev: &ResultRecord) -> Self {
        // E inputs fall back to 0 and H inputs to 1; both defaults are observable
        let f1 = digit_at(&prev.first_round, 1).unwrap_or(0);
        let s1 = digit_at(&prev.second_round, 1).unwrap_or(0);
        let ending = (f1 + s1) % 10;

        let d1 = digit_at(&prev.first_round, 0).unwrap_or(1);
        let d2 = digit_at(&prev.first_round, 1).unwrap_or(1);
        let house = (d1 + d2) % 10;

        Self { house, ending }
    }

    pub fn house_candidates(&self) -> [u32; 2] {
        [self.house, (self.house + 1) % 10]
    }

    pub fn ending_candidates(&self) -> [u32; 2] {
        [self.ending, (self.ending + 1) % 10]
    }

    pub fn render(&self) -> String {
        let [h1, h2] = self.house_candidates();
        let [e1, e2] = self.ending_candidates();
        format!("H={}, {} / E={}, {}", h1, h2, e1, e2)
    }

    /// Scores the seeds against a day's rounds. `Unknown` unless both rounds
    /// are two-digit numbers.
    pub fn score(&self, first_round: &str, second_round: &str) -> Verdict {
        let (Some(first), Some(second)) = (round_digits(first_round), round_digits(second_round))
        else {
            return Verdict::Unknown;
        };

        let house = self.house_candidates();
        let ending = self.ending_candidates();

        let house_hit = house.contains(&first[0]) || house.contains(&second[0]);
        let ending_hit = ending.contains(&first[1]) || ending.contains(&second[1]);

        Verdict::from_hit(house_hit || ending_hit)
    }
}

/// Builds one prediction per record.
///
/// `records` must be newest first with consecutive days adjacent; the record
/// at `i + 1` is treated as the day before `i`. The output has the same length
/// and order. The oldest record gets [`NO_PREDICTION`] and an unknown verdict.
pub fn predict(records: &[ResultRecord]) -> Vec<PredictionResult> {
    records
        .iter()
        .enumerate()
        .map(|(i, current)| {
            let (prediction, verdict) = match records.get(i + 1) {
                Some(prev) => {
                    let seeds = Seeds::from_previous(prev);
                    (
                        seeds.render(),
                        seeds.score(&current.first_round, &current.second_round),
                    )
                }
                None => (NO_PREDICTION.to_string(), Verdict::Unknown),
            };

            PredictionResult {
                date: current.date.clone(),
                first_round: current.first_round.clone(),
                second_round: current.second_round.clone(),
                prediction,
                verdict,
            }
        })
        .collect()
}

/// Decimal digit at character position `index`, if there is one.
fn digit_at(round: &str, index: usize) -> Option<u32> {
    round.chars().nth(index).and_then(|c| c.to_digit(10))
}

/// Both digits of a round, when it is exactly two ASCII decimal digits.
fn round_digits(round: &str) -> Option<[u32; 2]> {
    match round.as_bytes() {
        [a, b] if a.is_ascii_digit() && b.is_ascii_digit() => {
            Some([u32::from(a - b'0'), u32::from(b - b'0')])
        }
        _ => None,
    }
}
