use serde::{Deserialize, Serialize};
use std::fmt;

/// 實數一律保留小數部分輸出，例如 `5.0` 而不是 `5`
pub fn format_real(value: f64) -> String {
    format!("{:?}", value)
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", format_real(self.x), format_real(self.y))
    }
}

/// `top_left` 以值保存：指定 Point 進來時是複製，之後改原本的 Point 不會影響矩形。
/// 寬高不做檢查，負數也照收。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Rectangle {
    pub top_left: Point,
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn perimeter(&self) -> f64 {
        crate::core::geometry::perimeter(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Student {
    pub name: String,
    pub age: i32,
    pub grades: [i32; Student::GRADE_COUNT],
    pub active: bool,
}

impl Student {
    pub const GRADE_COUNT: usize = 3;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// 一次示範執行的輸入：p1 保持預設值，其餘欄位逐一指定；矩形左上角是 p1 的複本
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scenario {
    pub origin: Point,
    pub point: Point,
    pub rectangle: Rectangle,
    pub student: Student,
}

impl Scenario {
    /// 內建示範情境
    #[allow(clippy::field_reassign_with_default)]
    pub fn demo() -> Self {
        let origin = Point::default();

        let mut point = Point::default();
        point.x = 5.0;
        point.y = 3.0;

        let mut rectangle = Rectangle::default();
        rectangle.top_left = origin;
        rectangle.width = 10.5;
        rectangle.height = 5.2;

        let mut student = Student::default();
        student.name = "Alice".to_string();
        student.age = 20;
        student.active = true;
        student.grades[0] = 15;
        student.grades[1] = 12;
        student.grades[2] = 18;

        Self {
            origin,
            point,
            rectangle,
            student,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub origin: Point,
    pub point: Point,
    pub rectangle: Rectangle,
    pub perimeter: f64,
    pub student: Student,
}
