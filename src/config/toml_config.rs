use crate::core::geometry::perimeter;
use crate::domain::model::{Point, Rectangle, Scenario, Student};
use crate::utils::error::{RecordError, Result};
use crate::utils::validation::{validate_finite, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 情境檔；所有區段與欄位都可省略，省略時為零值
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub point: Point,
    pub rectangle: RectangleConfig,
    pub student: Student,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RectangleConfig {
    pub top_left: Option<Point>,
    pub width: f64,
    pub height: f64,
}

impl ScenarioConfig {
    /// 從 TOML 檔案載入情境
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RecordError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析情境
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RecordError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${STUDENT_NAME})，找不到的變數原樣保留
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RecordError::config(e.to_string()))?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 沒給 top_left 時左上角是 p1 (原點) 的複本
    fn rectangle(&self) -> Rectangle {
        Rectangle {
            top_left: self.rectangle.top_left.unwrap_or_default(),
            width: self.rectangle.width,
            height: self.rectangle.height,
        }
    }

    pub fn into_scenario(self) -> Scenario {
        let rectangle = self.rectangle();

        Scenario {
            origin: Point::default(),
            point: self.point,
            rectangle,
            student: self.student,
        }
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_finite("point.x", self.point.x)?;
        validate_finite("point.y", self.point.y)?;

        if let Some(top_left) = &self.rectangle.top_left {
            validate_finite("rectangle.top_left.x", top_left.x)?;
            validate_finite("rectangle.top_left.y", top_left.y)?;
        }
        validate_finite("rectangle.width", self.rectangle.width)?;
        validate_finite("rectangle.height", self.rectangle.height)?;

        // 寬高各自有限，相加後仍可能溢位成 inf
        validate_finite("rectangle.perimeter", perimeter(&self.rectangle()))?;

        Ok(())
    }
}

impl Validate for ScenarioConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
