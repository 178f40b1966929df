use crate::domain::model::RunReport;
use crate::domain::ports::Pipeline;
use crate::utils::error::Result;
use chrono::Local;
use std::time::Instant;

pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    pub async fn run(&self) -> Result<RunReport> {
        let started = Instant::now();
        tracing::info!("Starting prediction run at {}", Local::now().format("%Y-%m-%d %H:%M:%S"));

        let raw_data = self.pipeline.extract().await?;
        tracing::info!("Extracted {} records", raw_data.len());

        let result = self.pipeline.transform(raw_data).await?;
        tracing::info!("Built {} predictions", result.predictions.len());

        let output_path = self.pipeline.load(&result).await?;
        if let Some(path) = &output_path {
            tracing::info!("Output saved to: {}", path);
        }

        tracing::info!("Prediction run finished in {:?}", started.elapsed());

        Ok(RunReport {
            output_path,
            predictions: result.predictions,
            guti: result.guti,
        })
    }
}
