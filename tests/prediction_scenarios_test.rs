use teer_sr::core::guti::latest_guti;
use teer_sr::core::normalizer::normalize_all;
use teer_sr::{derive_guti, predict, RawResult, ResultRecord, Verdict};

fn record(date: &str, first: &str, second: &str) -> ResultRecord {
    ResultRecord::new(date, first, second)
}

fn sample_feed() -> Vec<ResultRecord> {
    vec![
        record("2024-05-08", "XX", "XX"),
        record("2024-05-07", "81", "XX"),
        record("2024-05-06", "47", "90"),
        record("2024-05-05", "12", "38"),
        record("2024-05-04", "66", "05"),
        record("2024-05-03", "10", "44"),
        record("2024-05-02", "32", "63"),
        record("2024-05-01", "05", "07"),
    ]
}

#[test]
fn scenario_a_two_days() {
    let results = predict(&[record("d2", "32", "63"), record("d1", "05", "07")]);

    assert_eq!(results[0].date, "d2");
    assert_eq!(results[0].prediction, "H=5, 6 / E=2, 3");
    assert_eq!(results[0].verdict, Verdict::Correct);
}

#[test]
fn scenario_b_guti_from_scenario_a() {
    let results = predict(&[record("d2", "32", "63"), record("d1", "05", "07")]);
    let guti = derive_guti(&results[0]);

    assert_eq!(guti.date, "d2");
    assert_eq!(guti.numbers, ["52", "53", "62", "63"]);
}

#[test]
fn scenario_c_single_record() {
    let results = predict(&[record("d1", "05", "07")]);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].prediction, "XXX");
    assert_eq!(results[0].verdict, Verdict::Unknown);
}

#[test]
fn scenario_d_pending_current_round() {
    let results = predict(&[record("d2", "XX", "63"), record("d1", "05", "07")]);

    assert_eq!(results[0].prediction, "H=5, 6 / E=2, 3");
    assert_eq!(results[0].verdict, Verdict::Unknown);
}

#[test]
fn output_matches_input_length_and_order() {
    let input = sample_feed();
    let results = predict(&input);

    assert_eq!(results.len(), input.len());
    for (result, record) in results.iter().zip(&input) {
        assert_eq!(result.date, record.date);
        assert_eq!(result.first_round, record.first_round);
        assert_eq!(result.second_round, record.second_round);
    }
}

#[test]
fn last_element_is_always_unpredicted() {
    let input = sample_feed();
    for len in 1..=input.len() {
        let results = predict(&input[..len]);
        let last = results.last().unwrap();
        assert_eq!(last.prediction, "XXX");
        assert_eq!(last.verdict, Verdict::Unknown);
    }
}

#[test]
fn announced_days_with_history_get_a_definite_verdict() {
    let input = sample_feed();
    let results = predict(&input);

    for (i, result) in results.iter().enumerate().take(results.len() - 1) {
        let announced = input[i].first_round.chars().all(|c| c.is_ascii_digit())
            && input[i].second_round.chars().all(|c| c.is_ascii_digit());
        if announced {
            assert_ne!(result.verdict, Verdict::Unknown, "day {}", result.date);
        } else {
            assert_eq!(result.verdict, Verdict::Unknown, "day {}", result.date);
        }
    }
}

#[test]
fn sample_feed_expected_table() {
    let results = predict(&sample_feed());
    let rows: Vec<(&str, Verdict)> = results
        .iter()
        .map(|r| (r.prediction.as_str(), r.verdict))
        .collect();

    assert_eq!(
        rows,
        vec![
            // from 81 / XX: H = 8+1, E = 1+0 (pending second round reads as 0)
            ("H=9, 0 / E=1, 2", Verdict::Unknown),
            // from 47 / 90: H = 4+7, E = 7+0
            ("H=1, 2 / E=7, 8", Verdict::Unknown),
            // from 12 / 38: H = 1+2, E = 2+8; 47 hits on H, 90 on E
            ("H=3, 4 / E=0, 1", Verdict::Correct),
            // from 66 / 05: H = 6+6, E = 6+5; 38 hits on H, 12 on E
            ("H=2, 3 / E=1, 2", Verdict::Correct),
            // from 10 / 44: H = 1+0, E = 0+4; 66/05 hits on E (5)
            ("H=1, 2 / E=4, 5", Verdict::Correct),
            // from 32 / 63: 10/44 misses
            ("H=5, 6 / E=5, 6", Verdict::Incorrect),
            ("H=5, 6 / E=2, 3", Verdict::Correct),
            ("XXX", Verdict::Unknown),
        ]
    );
}

#[test]
fn guti_always_four_two_char_tokens() {
    let results = predict(&sample_feed());

    for result in &results {
        let guti = derive_guti(result);
        assert_eq!(guti.numbers.len(), 4);
        for number in &guti.numbers {
            assert_eq!(number.chars().count(), 2, "{:?}", guti);
        }
    }

    let oldest = derive_guti(results.last().unwrap());
    assert_eq!(oldest.numbers, ["--", "--", "--", "--"]);
}

#[test]
fn guti_for_newest_prediction() {
    let results = predict(&sample_feed());
    let guti = latest_guti(&results).unwrap();

    assert_eq!(guti.date, "2024-05-08");
    assert_eq!(guti.numbers, ["91", "92", "01", "02"]);
}

#[test]
fn results_are_deterministic() {
    let input = sample_feed();

    let first = predict(&input);
    let second = predict(&input);
    assert_eq!(first, second);

    let guti_a: Vec<_> = first.iter().map(derive_guti).collect();
    let guti_b: Vec<_> = second.iter().map(derive_guti).collect();
    assert_eq!(guti_a, guti_b);
}

#[test]
fn normalized_feed_with_missing_rounds() {
    let raw: Vec<RawResult> = [
        serde_json::json!({"date": "2024-05-02"}),
        serde_json::json!({"date": "2024-05-01", "first_round": "05", "second_round": "07"}),
    ]
    .into_iter()
    .filter_map(RawResult::from_json)
    .collect();

    let records = normalize_all(&raw);
    assert_eq!(records[0], record("2024-05-02", "XX", "XX"));

    let results = predict(&records);
    assert_eq!(results[0].prediction, "H=5, 6 / E=2, 3");
    assert_eq!(results[0].verdict, Verdict::Unknown);
}
