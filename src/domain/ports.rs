use crate::domain::model::{OutputFormat, Report, Scenario};
use crate::utils::error::Result;

pub trait OutputSink {
    fn write_line(&self, line: &str) -> Result<()>;
}

pub trait ConfigProvider {
    fn scenario_path(&self) -> Option<&str>;
    fn output_format(&self) -> OutputFormat;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Scenario>;
    fn transform(&self, scenario: Scenario) -> Result<Report>;
    fn load(&self, report: Report) -> Result<usize>;
}
