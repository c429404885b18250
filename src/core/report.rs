use crate::core::geometry::perimeter;
use crate::domain::model::{format_real, OutputFormat, Report, Scenario};
use crate::utils::error::Result;

impl Report {
    pub fn from_scenario(scenario: Scenario) -> Self {
        let perimeter = perimeter(&scenario.rectangle);

        Self {
            origin: scenario.origin,
            point: scenario.point,
            rectangle: scenario.rectangle,
            perimeter,
            student: scenario.student,
        }
    }

    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Point 1: {}", self.origin),
            format!("Point 2: {}", self.point),
            format!(
                "Rectangle: top-left={}, width={}, height={}",
                self.rectangle.top_left,
                format_real(self.rectangle.width),
                format_real(self.rectangle.height)
            ),
            format!("Perimeter = {}", format_real(self.perimeter)),
            format!("Student: {}", self.student.name),
            format!("Age: {}", self.student.age),
            format!("Active: {}", self.student.active),
            "Grades:".to_string(),
        ];

        // 每個成績一行，依索引順序
        for (i, grade) in self.student.grades.iter().enumerate() {
            lines.push(format!("  Grade {} = {}", i, grade));
        }

        lines
    }
}

pub fn render(report: &Report, format: OutputFormat) -> Result<Vec<String>> {
    match format {
        OutputFormat::Text => Ok(report.lines()),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(report)?;
            Ok(json.lines().map(str::to_string).collect())
        }
    }
}
