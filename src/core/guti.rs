use crate::domain::model::{GutiNumber, PredictionResult};
use regex::Regex;
use std::sync::LazyLock;

static HOUSE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"H=([0-9]+), ([0-9]+)").expect("house pattern is a valid regex"));
static ENDING_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"E=([0-9]+), ([0-9]+)").expect("ending pattern is a valid regex"));

/// Pairs each H candidate with each E candidate of a prediction.
///
/// Returns four `--` tokens when the prediction has no `H=a, b` or no
/// `E=c, d` part, e.g. for the oldest record's `XXX`.
pub fn derive_guti(prediction: &PredictionResult) -> GutiNumber {
    let (Some(house), Some(ending)) = (
        candidates(&HOUSE_PATTERN, &prediction.prediction),
        candidates(&ENDING_PATTERN, &prediction.prediction),
    ) else {
        tracing::debug!(
            "No H/E pattern in prediction '{}' for {}",
            prediction.prediction,
            prediction.date
        );
        return GutiNumber::placeholder(prediction.date.clone());
    };

    let [h1, h2] = house;
    let [e1, e2] = ending;

    GutiNumber {
        date: prediction.date.clone(),
        numbers: [
            format!("{}{}", h1, e1),
            format!("{}{}", h1, e2),
            format!("{}{}", h2, e1),
            format!("{}{}", h2, e2),
        ],
    }
}

/// Guti numbers for the newest prediction, if there is one.
pub fn latest_guti(predictions: &[PredictionResult]) -> Option<GutiNumber> {
    predictions.first().map(derive_guti)
}

fn candidates<'a>(pattern: &Regex, text: &'a str) -> Option<[&'a str; 2]> {
    let caps = pattern.captures(text)?;
    Some([caps.get(1)?.as_str(), caps.get(2)?.as_str()])
}
