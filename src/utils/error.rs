use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Output error: {message}")]
    OutputError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Serialization,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RecordError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RecordError::IoError(_) => ErrorCategory::Io,
            RecordError::SerializationError(_) => ErrorCategory::Serialization,
            RecordError::ConfigError { .. }
            | RecordError::ConfigValidationError { .. }
            | RecordError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            RecordError::OutputError { .. } => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 設定錯誤：使用者修正後即可重跑
            RecordError::ConfigError { .. }
            | RecordError::ConfigValidationError { .. }
            | RecordError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            RecordError::SerializationError(_) => ErrorSeverity::High,
            // stdout 被關閉 (例如 pipe 到 head) 時重試即可
            RecordError::OutputError { .. } => ErrorSeverity::Medium,
            RecordError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            RecordError::IoError(e) => format!("無法讀取或寫入檔案: {}", e),
            RecordError::SerializationError(e) => format!("無法輸出 JSON 報表: {}", e),
            RecordError::ConfigError { message } => format!("設定檔有誤: {}", message),
            RecordError::ConfigValidationError { field, message } => {
                format!("設定欄位 '{}' 無效: {}", field, message)
            }
            RecordError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("設定欄位 '{}' 的值 '{}' 無效: {}", field, value, reason),
            RecordError::OutputError { message } => format!("無法輸出報表: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "確認情境檔路徑存在且可讀取",
            ErrorCategory::Configuration => {
                "檢查情境檔：數值必須是有限數字，周長也不能溢位，grades 必須剛好 3 個"
            }
            ErrorCategory::Serialization => "改用 --format text 輸出",
            ErrorCategory::Output => "確認標準輸出沒有被關閉後重試",
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        RecordError::ConfigError {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RecordError>;
