use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Placeholder the feed uses for a round that has not been announced yet.
pub const PENDING_ROUND: &str = "XX";

/// Prediction text for the oldest record, which has nothing older to predict from.
pub const NO_PREDICTION: &str = "XXX";

/// Token used in place of a guti number when no prediction could be parsed.
pub const GUTI_PLACEHOLDER: &str = "--";

/// A feed record as received, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawResult {
    pub data: HashMap<String, serde_json::Value>,
}

impl RawResult {
    pub fn from_json(value: serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Object(obj) => Some(Self {
                data: obj.into_iter().collect(),
            }),
            _ => None,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.data
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }
}

/// One day's draw results.
///
/// Rounds are two characters, normally two decimal digits. Unannounced rounds
/// carry [`PENDING_ROUND`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub date: String,
    pub first_round: String,
    pub second_round: String,
}

impl ResultRecord {
    pub fn new(
        date: impl Into<String>,
        first_round: impl Into<String>,
        second_round: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            first_round: first_round.into(),
            second_round: second_round.into(),
        }
    }
}

/// Whether a day's rounds matched the H/E prediction made from the day before.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Correct,
    Incorrect,
    Unknown,
}

impl Verdict {
    pub fn from_hit(hit: bool) -> Self {
        if hit {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Verdict::Correct => "✓",
            Verdict::Incorrect => "✗",
            Verdict::Unknown => "⏳",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Correct => "correct",
            Verdict::Incorrect => "wrong",
            Verdict::Unknown => "pending",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub date: String,
    pub first_round: String,
    pub second_round: String,
    pub prediction: String,
    pub verdict: Verdict,
}

/// The four guti combinations for one prediction, in H1E1, H1E2, H2E1, H2E2 order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GutiNumber {
    pub date: String,
    pub numbers: [String; 4],
}

impl GutiNumber {
    pub fn placeholder(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            numbers: std::array::from_fn(|_| GUTI_PLACEHOLDER.to_string()),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.numbers.iter().all(|n| n == GUTI_PLACEHOLDER)
    }
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub records: Vec<ResultRecord>,
    pub predictions: Vec<PredictionResult>,
    pub guti: Option<GutiNumber>,
    pub csv_output: String,
    pub tsv_output: String,
}

#[derive(Debug, Clone)]
pub struct RunReport {
    pub output_path: Option<String>,
    pub predictions: Vec<PredictionResult>,
    pub guti: Option<GutiNumber>,
}
