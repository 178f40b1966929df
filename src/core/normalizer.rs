use crate::domain::model::{RawResult, ResultRecord, PENDING_ROUND};
use serde_json::Value;

/// Gives a raw feed record the fixed [`ResultRecord`] shape.
///
/// Missing or blank rounds become [`PENDING_ROUND`]. Nothing else is checked;
/// the prediction engine copes with whatever round text comes through.
pub fn normalize(raw: &RawResult) -> ResultRecord {
    let date = match raw.data.get("date") {
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    };

    ResultRecord {
        date,
        first_round: round_field(raw.data.get("first_round")),
        second_round: round_field(raw.data.get("second_round")),
    }
}

pub fn normalize_all(raw: &[RawResult]) -> Vec<ResultRecord> {
    raw.iter().map(normalize).collect()
}

fn round_field(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => PENDING_ROUND.to_string(),
    }
}
