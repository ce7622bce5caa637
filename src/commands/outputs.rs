use anyhow::{Context, Result};
use serde_json::Value;

/// How JSON responses are rendered on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStyle {
    Pretty,
    Compact,
}

/// The response body exactly as the service returned it.
#[derive(Debug)]
pub struct ApiResponse {
    pub value: Value,
    pub style: OutputStyle,
}

#[derive(Debug)]
pub struct HelpOutput(pub String);

pub trait ConsoleOutput {
    fn output(&self) -> Result<Vec<String>>;
}

impl ConsoleOutput for ApiResponse {
    fn output(&self) -> Result<Vec<String>> {
        let text = match self.style {
            OutputStyle::Pretty => serde_json::to_string_pretty(&self.value),
            OutputStyle::Compact => serde_json::to_string(&self.value),
        };
        let text = text.context("Could not render response as JSON")?;
        Ok(vec![text])
    }
}

impl ConsoleOutput for HelpOutput {
    fn output(&self) -> Result<Vec<String>> {
        Ok(vec![self.0.trim_end().to_string()])
    }
}
