pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::http::{FeedSettings, HttpResultsFeed};
pub use adapters::storage::LocalStorage;
pub use crate::core::{
    engine::ReportEngine, guti::derive_guti, normalizer::normalize, pipeline::PredictionPipeline,
    prediction::predict,
};
pub use domain::model::{GutiNumber, PredictionResult, RawResult, ResultRecord, Verdict};
pub use utils::error::{Result, TeerError};
