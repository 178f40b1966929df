use anyhow::Result;
use httpmock::prelude::*;
use std::io::Read;
use std::time::Duration;
use teer_sr::{
    FeedSettings, HttpResultsFeed, LocalStorage, PredictionPipeline, ReportEngine, TomlConfig,
    Verdict,
};
use tempfile::TempDir;

fn feed_body() -> serde_json::Value {
    serde_json::json!([
        {"id": 3, "date": "2024-05-03", "first_round": "10", "second_round": null},
        {"id": 2, "date": "2024-05-02", "first_round": "32", "second_round": "63"},
        {"id": 1, "date": "2024-05-01", "first_round": "05", "second_round": "07"}
    ])
}

fn config_for(endpoint: &str, output_path: &str, extra_extract: &str) -> Result<TomlConfig> {
    let normalized_path = output_path.replace('\\', "/");
    let content = format!(
        r#"
[report]
name = "integration"

[source]
endpoint = "{}"
timeout_seconds = 5

[extract]
{}

[load]
output_path = "{}"
output_formats = ["csv", "tsv", "json"]
"#,
        endpoint, extra_extract, normalized_path
    );
    Ok(TomlConfig::from_toml_str(&content)?)
}

fn feed(config: &TomlConfig) -> HttpResultsFeed {
    HttpResultsFeed::new(FeedSettings {
        retry_delay: Duration::from_millis(10),
        ..config.feed_settings()
    })
}

#[tokio::test]
async fn test_end_to_end_report_with_real_http() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/teer/api/results/");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(feed_body());
    });

    let config = config_for(&server.url("/teer/api/results/"), &output_path, "")?;
    let storage = LocalStorage::new(output_path.clone());
    let engine = ReportEngine::new(PredictionPipeline::new(feed(&config), storage, config));

    let report = engine.run().await?;
    api_mock.assert();

    assert_eq!(report.predictions.len(), 3);
    assert_eq!(report.predictions[0].second_round, "XX");
    assert_eq!(report.predictions[0].verdict, Verdict::Unknown);
    assert_eq!(report.predictions[1].prediction, "H=5, 6 / E=2, 3");
    assert_eq!(report.predictions[1].verdict, Verdict::Correct);
    assert_eq!(report.predictions[2].prediction, "XXX");

    let guti = report.guti.expect("newest prediction has a guti");
    assert_eq!(guti.date, "2024-05-03");
    assert_eq!(guti.numbers, ["55", "56", "65", "66"]);

    let output_file_path = report.output_path.expect("export is enabled");
    assert!(output_file_path.ends_with("teer_predictions.zip"));

    let full_path = temp_dir.path().join("teer_predictions.zip");
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(std::fs::read(&full_path)?))?;
    assert_eq!(archive.len(), 4);

    let mut csv_content = String::new();
    archive
        .by_name("predictions.csv")?
        .read_to_string(&mut csv_content)?;
    assert!(csv_content.starts_with("date,first_round,second_round,prediction,verdict,mark"));
    assert!(csv_content.contains("2024-05-02,32,63,\"H=5, 6 / E=2, 3\",correct,✓"));

    let mut json_content = String::new();
    archive
        .by_name("predictions.json")?
        .read_to_string(&mut json_content)?;
    let json: serde_json::Value = serde_json::from_str(&json_content)?;
    assert_eq!(json[0]["verdict"], "unknown");
    assert_eq!(json[1]["verdict"], "correct");

    Ok(())
}

#[tokio::test]
async fn test_feed_limited_to_max_records() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/results");
        then.status(200).json_body(feed_body());
    });

    let config = config_for(&server.url("/results"), &output_path, "max_records = 2")?;
    let storage = LocalStorage::new(output_path.clone());
    let engine = ReportEngine::new(PredictionPipeline::new(feed(&config), storage, config));

    let report = engine.run().await?;
    api_mock.assert();

    assert_eq!(report.predictions.len(), 2);
    assert_eq!(report.predictions[1].date, "2024-05-02");
    assert_eq!(report.predictions[1].prediction, "XXX");
    Ok(())
}

#[tokio::test]
async fn test_feed_outage_serves_last_known_snapshot() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    // first run succeeds and leaves a snapshot behind
    let server = MockServer::start();
    let mut ok_mock = server.mock(|when, then| {
        when.method(GET).path("/results");
        then.status(200).json_body(feed_body());
    });

    let config = config_for(
        &server.url("/results"),
        &output_path,
        "fallback_file = \"last_known.json\"",
    )?;
    let engine = ReportEngine::new(PredictionPipeline::new(
        feed(&config),
        LocalStorage::new(output_path.clone()),
        config.clone(),
    ));
    let first = engine.run().await?;
    ok_mock.assert();
    ok_mock.delete();

    assert!(temp_dir.path().join("last_known.json").exists());

    // second run sees the feed down
    let down_mock = server.mock(|when, then| {
        when.method(GET).path("/results");
        then.status(502);
    });

    let engine = ReportEngine::new(PredictionPipeline::new(
        feed(&config),
        LocalStorage::new(output_path.clone()),
        config,
    ));
    let second = engine.run().await?;
    down_mock.assert();

    assert_eq!(second.predictions, first.predictions);
    assert_eq!(second.guti, first.guti);
    Ok(())
}

#[tokio::test]
async fn test_feed_outage_without_fallback_renders_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/results");
        then.status(500);
    });

    let config = config_for(&server.url("/results"), &output_path, "")?;
    let engine = ReportEngine::new(PredictionPipeline::new(
        feed(&config),
        LocalStorage::new(output_path.clone()),
        config,
    ));

    let report = engine.run().await?;
    api_mock.assert();

    assert!(report.predictions.is_empty());
    assert!(report.guti.is_none());

    // the archive still exists, with header-only tables
    let full_path = temp_dir.path().join("teer_predictions.zip");
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(std::fs::read(&full_path)?))?;
    assert_eq!(archive.len(), 3);

    let mut tsv_content = String::new();
    archive
        .by_name("predictions.tsv")?
        .read_to_string(&mut tsv_content)?;
    assert_eq!(tsv_content.lines().count(), 1);
    Ok(())
}
