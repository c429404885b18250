use algo_records::core::{ConfigProvider, OutputSink};
use algo_records::{OutputFormat, RecordEngine, RecordError, RecordPipeline, Report};
use anyhow::Result;
use std::io::Write;
use std::sync::{Arc, Mutex};
use tempfile::NamedTempFile;

#[derive(Clone, Default)]
struct SharedSink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl OutputSink for SharedSink {
    fn write_line(&self, line: &str) -> algo_records::Result<()> {
        self.lines.lock().unwrap().push(line.to_string());
        Ok(())
    }
}

struct TestConfig {
    scenario: Option<String>,
    format: OutputFormat,
}

impl ConfigProvider for TestConfig {
    fn scenario_path(&self) -> Option<&str> {
        self.scenario.as_deref()
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }
}

fn run(scenario: Option<String>, format: OutputFormat) -> algo_records::Result<Vec<String>> {
    let sink = SharedSink::default();
    let pipeline = RecordPipeline::new(sink.clone(), TestConfig { scenario, format });
    let engine = RecordEngine::new(pipeline);

    let summary = engine.run()?;
    let lines = sink.lines.lock().unwrap().clone();
    assert_eq!(summary.lines_written, lines.len());
    Ok(lines)
}

#[test]
fn test_built_in_demo_output() -> Result<()> {
    let lines = run(None, OutputFormat::Text)?;

    let expected = [
        "Point 1: (0.0, 0.0)",
        "Point 2: (5.0, 3.0)",
        "Rectangle: top-left=(0.0, 0.0), width=10.5, height=5.2",
        "Perimeter = 31.4",
        "Student: Alice",
        "Age: 20",
        "Active: true",
        "Grades:",
        "  Grade 0 = 15",
        "  Grade 1 = 12",
        "  Grade 2 = 18",
    ];
    assert_eq!(lines, expected);
    Ok(())
}

#[test]
fn test_scenario_file_end_to_end() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(
        br#"
[point]
x = 2.0
y = -1.0

[rectangle]
width = -3.0
height = 1.0

[student]
name = "Dana"
age = 33
grades = [9, 10, 11]
"#,
    )?;

    let lines = run(
        Some(file.path().to_string_lossy().to_string()),
        OutputFormat::Text,
    )?;

    assert_eq!(lines[1], "Point 2: (2.0, -1.0)");
    assert_eq!(
        lines[2],
        "Rectangle: top-left=(0.0, 0.0), width=-3.0, height=1.0"
    );
    assert_eq!(lines[3], "Perimeter = -4.0");
    assert_eq!(lines[6], "Active: false");
    assert_eq!(&lines[8..], ["  Grade 0 = 9", "  Grade 1 = 10", "  Grade 2 = 11"]);
    Ok(())
}

#[test]
fn test_json_output_round_trips_report() -> Result<()> {
    let lines = run(None, OutputFormat::Json)?;
    let report: Report = serde_json::from_str(&lines.join("\n"))?;

    assert_eq!(report.student.grades, [15, 12, 18]);
    assert!((report.perimeter - 31.4).abs() < 1e-9);
    Ok(())
}

#[test]
fn test_invalid_scenario_stops_before_output() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"[student]\ngrades = [1, 2, 3, 4]\n")?;

    let sink = SharedSink::default();
    let config = TestConfig {
        scenario: Some(file.path().to_string_lossy().to_string()),
        format: OutputFormat::Text,
    };
    let engine = RecordEngine::new(RecordPipeline::new(sink.clone(), config));

    let err = engine.run().unwrap_err();
    assert!(matches!(err, RecordError::ConfigValidationError { .. }));
    assert!(sink.lines.lock().unwrap().is_empty());
    Ok(())
}
