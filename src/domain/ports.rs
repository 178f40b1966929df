use crate::domain::model::{RawResult, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn output_path(&self) -> &str;
    fn max_records(&self) -> usize;
    fn fallback_file(&self) -> Option<&str>;
    fn output_formats(&self) -> &[String];
    fn archive_name(&self) -> &str;
    fn export_enabled(&self) -> bool;
}

/// Source of the newest-first daily results.
#[async_trait]
pub trait ResultsFeed: Send + Sync {
    async fn fetch(&self) -> Result<Vec<RawResult>>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<RawResult>>;
    async fn transform(&self, data: Vec<RawResult>) -> Result<TransformResult>;
    async fn load(&self, result: &TransformResult) -> Result<Option<String>>;
}
