use crate::core::Pipeline;
use crate::utils::error::Result;

#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub perimeter: f64,
    pub lines_written: usize,
}

pub struct RecordEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> RecordEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<RunSummary> {
        tracing::info!("Starting record demo...");

        // Extract
        tracing::debug!("Building scenario...");
        let scenario = self.pipeline.extract()?;
        tracing::debug!("Scenario for student '{}'", scenario.student.name);

        // Transform
        tracing::debug!("Computing report...");
        let report = self.pipeline.transform(scenario)?;
        let perimeter = report.perimeter;
        tracing::info!("Rectangle perimeter: {}", perimeter);

        // Load
        let lines_written = self.pipeline.load(report)?;
        tracing::info!("Wrote {} lines", lines_written);

        Ok(RunSummary {
            perimeter,
            lines_written,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Report, Scenario};
    use crate::utils::error::RecordError;
    use std::cell::Cell;

    struct StubPipeline {
        fail_load: bool,
        loaded: Cell<bool>,
    }

    impl Pipeline for StubPipeline {
        fn extract(&self) -> Result<Scenario> {
            Ok(Scenario::demo())
        }

        fn transform(&self, scenario: Scenario) -> Result<Report> {
            Ok(Report::from_scenario(scenario))
        }

        fn load(&self, report: Report) -> Result<usize> {
            if self.fail_load {
                return Err(RecordError::OutputError {
                    message: "sink closed".to_string(),
                });
            }
            self.loaded.set(true);
            Ok(report.lines().len())
        }
    }

    #[test]
    fn test_run_reports_summary() {
        let engine = RecordEngine::new(StubPipeline {
            fail_load: false,
            loaded: Cell::new(false),
        });

        let summary = engine.run().unwrap();
        assert!((summary.perimeter - 31.4).abs() < 1e-9);
        assert_eq!(summary.lines_written, 11);
        assert!(engine.pipeline.loaded.get());
    }

    #[test]
    fn test_run_propagates_load_error() {
        let engine = RecordEngine::new(StubPipeline {
            fail_load: true,
            loaded: Cell::new(false),
        });

        let err = engine.run().unwrap_err();
        assert!(matches!(err, RecordError::OutputError { .. }));
    }
}
