use crate::core::OutputSink;
use crate::utils::error::{RecordError, Result};
use std::io::Write;

/// 把報表逐行寫到 stdout
#[derive(Debug, Clone, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl OutputSink for ConsoleSink {
    fn write_line(&self, line: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", line).map_err(|e| RecordError::OutputError {
            message: e.to_string(),
        })
    }
}
