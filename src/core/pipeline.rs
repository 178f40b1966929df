use crate::adapters::http::parse_results;
use crate::core::export::{self, ExportBundle};
use crate::core::{guti, normalizer, prediction};
use crate::domain::model::{RawResult, TransformResult};
use crate::domain::ports::{ConfigProvider, Pipeline, ResultsFeed, Storage};
use crate::utils::error::Result;

/// Feed → normalize → predict → guti → archive.
pub struct PredictionPipeline<F: ResultsFeed, S: Storage, C: ConfigProvider> {
    feed: F,
    storage: S,
    config: C,
}

impl<F: ResultsFeed, S: Storage, C: ConfigProvider> PredictionPipeline<F, S, C> {
    pub fn new(feed: F, storage: S, config: C) -> Self {
        Self {
            feed,
            storage,
            config,
        }
    }

    /// Keeps the last good fetch around for when the feed is down.
    async fn save_snapshot(&self, records: &[RawResult]) {
        if !self.config.export_enabled() {
            return;
        }
        let Some(path) = self.config.fallback_file() else {
            return;
        };

        let body: Vec<serde_json::Value> = records.iter().map(RawResult::to_json).collect();
        let written = match serde_json::to_vec_pretty(&body) {
            Ok(bytes) => self.storage.write_file(path, &bytes).await,
            Err(e) => Err(e.into()),
        };

        match written {
            Ok(()) => tracing::debug!("Saved {} records to fallback file {}", records.len(), path),
            Err(e) => tracing::warn!("Could not update fallback file {}: {}", path, e),
        }
    }

    async fn load_fallback(&self) -> Vec<RawResult> {
        let Some(path) = self.config.fallback_file() else {
            tracing::warn!("No fallback file configured, continuing with no results");
            return Vec::new();
        };

        let loaded = match self.storage.read_file(path).await {
            Ok(bytes) => serde_json::from_slice::<serde_json::Value>(&bytes)
                .map_err(Into::into)
                .and_then(|json| parse_results(json, self.config.max_records())),
            Err(e) => Err(e),
        };

        match loaded {
            Ok(records) => {
                tracing::info!("Serving {} records from fallback file {}", records.len(), path);
                records
            }
            Err(e) => {
                tracing::warn!("Fallback file {} unusable: {}", path, e);
                Vec::new()
            }
        }
    }
}

#[async_trait::async_trait]
impl<F: ResultsFeed, S: Storage, C: ConfigProvider> Pipeline for PredictionPipeline<F, S, C> {
    async fn extract(&self) -> Result<Vec<RawResult>> {
        match self.feed.fetch().await {
            Ok(records) if !records.is_empty() => {
                self.save_snapshot(&records).await;
                return Ok(records);
            }
            Ok(_) => tracing::warn!("Results feed returned no records"),
            Err(e) => tracing::warn!("Error fetching results: {}", e),
        }

        Ok(self.load_fallback().await)
    }

    async fn transform(&self, data: Vec<RawResult>) -> Result<TransformResult> {
        let records = normalizer::normalize_all(&data);
        let predictions = prediction::predict(&records);
        let guti = guti::latest_guti(&predictions);

        tracing::debug!(
            "Built {} predictions, guti {}",
            predictions.len(),
            if guti.is_some() { "available" } else { "unavailable" }
        );

        let csv_output = export::to_csv(&predictions)?;
        let tsv_output = export::to_tsv(&predictions)?;

        Ok(TransformResult {
            records,
            predictions,
            guti,
            csv_output,
            tsv_output,
        })
    }

    async fn load(&self, result: &TransformResult) -> Result<Option<String>> {
        if !self.config.export_enabled() {
            tracing::debug!("Export disabled, skipping archive");
            return Ok(None);
        }

        let bundle = ExportBundle {
            formats: self.config.output_formats(),
            csv_output: &result.csv_output,
            tsv_output: &result.tsv_output,
            predictions: &result.predictions,
            guti: result.guti.as_ref(),
        };

        tracing::debug!("Creating ZIP file with {:?}", bundle.file_names());
        let zip_data = bundle.to_zip()?;

        let archive_name = self.config.archive_name();
        tracing::debug!("Writing ZIP file ({} bytes) to storage", zip_data.len());
        self.storage.write_file(archive_name, &zip_data).await?;

        Ok(Some(format!("{}/{}", self.config.output_path(), archive_name)))
    }
}
