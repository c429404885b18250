pub mod engine;
pub mod geometry;
pub mod pipeline;
pub mod report;

pub use crate::domain::model::{Report, Scenario};
pub use crate::domain::ports::{ConfigProvider, OutputSink, Pipeline};
pub use crate::utils::error::Result;
