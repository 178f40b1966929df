pub mod display;
pub mod engine;
pub mod export;
pub mod guti;
pub mod normalizer;
pub mod pipeline;
pub mod prediction;

pub use crate::domain::model::{
    GutiNumber, PredictionResult, RawResult, ResultRecord, RunReport, TransformResult, Verdict,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, ResultsFeed, Storage};
pub use crate::utils::error::Result;
