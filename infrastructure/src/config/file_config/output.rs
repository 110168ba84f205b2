//! Output configuration from TOML (`[output]` section)

use super::ConfigIssue;
use serde::{Deserialize, Serialize};

/// How command results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileOutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for FileOutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(FileOutputFormat::Text),
            "json" => Ok(FileOutputFormat::Json),
            other => Err(format!("unknown output format: {other:?}")),
        }
    }
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format: "text" or "json"
    pub format: Option<String>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

impl FileOutputConfig {
    pub fn validate(&self) -> Vec<ConfigIssue> {
        match self.format.as_deref().map(str::parse::<FileOutputFormat>) {
            Some(Err(message)) => vec![ConfigIssue::new(
                "output.format",
                format!("{message}, using text"),
            )],
            _ => Vec::new(),
        }
    }

    /// Parsed output format; unset or unknown values mean text
    pub fn output_format(&self) -> FileOutputFormat {
        self.format
            .as_deref()
            .and_then(|f| f.parse().ok())
            .unwrap_or(FileOutputFormat::Text)
    }

    pub fn is_json(&self) -> bool {
        self.output_format() == FileOutputFormat::Json
    }
}
