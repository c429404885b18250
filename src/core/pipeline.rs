use crate::config::toml_config::ScenarioConfig;
use crate::core::report::render;
use crate::core::{ConfigProvider, OutputSink, Pipeline, Report, Scenario};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

pub struct RecordPipeline<S: OutputSink, C: ConfigProvider> {
    sink: S,
    config: C,
}

impl<S: OutputSink, C: ConfigProvider> RecordPipeline<S, C> {
    pub fn new(sink: S, config: C) -> Self {
        Self { sink, config }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

impl<S: OutputSink, C: ConfigProvider> Pipeline for RecordPipeline<S, C> {
    fn extract(&self) -> Result<Scenario> {
        match self.config.scenario_path() {
            Some(path) => {
                tracing::debug!("Loading scenario from: {}", path);
                let scenario_config = ScenarioConfig::from_file(path)?;
                scenario_config.validate()?;
                Ok(scenario_config.into_scenario())
            }
            None => {
                tracing::debug!("No scenario file given, using built-in demo");
                Ok(Scenario::demo())
            }
        }
    }

    fn transform(&self, scenario: Scenario) -> Result<Report> {
        tracing::debug!(
            "Rectangle width={} height={}",
            scenario.rectangle.width,
            scenario.rectangle.height
        );
        Ok(Report::from_scenario(scenario))
    }

    fn load(&self, report: Report) -> Result<usize> {
        let lines = render(&report, self.config.output_format())?;
        for line in &lines {
            self.sink.write_line(line)?;
        }
        Ok(lines.len())
    }
}
