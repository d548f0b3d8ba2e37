//! Runtime configuration types
//!
//! aka-io has no configuration file: everything is chosen on the command
//! line. These enums are what the CLI parses its options into.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;

/// Operator key type for authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(Default)]
pub enum OpType {
    /// Operator key (OP) - needs to be converted to OPc
    Op,
    /// Operator key derived (OPc) - used directly
    #[default]
    Opc,
}

impl OpType {
    /// Label used for the operator key in reports.
    pub fn label(&self) -> &'static str {
        match self {
            OpType::Op => "OP",
            OpType::Opc => "OPc",
        }
    }
}

impl fmt::Display for OpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpType::Op => write!(f, "op"),
            OpType::Opc => write!(f, "opc"),
        }
    }
}

impl FromStr for OpType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "op" => Ok(OpType::Op),
            "opc" => Ok(OpType::Opc),
            _ => Err(format!("unknown operator key type: {s} (expected op or opc)")),
        }
    }
}

/// Report format written to standard out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `[INPUT]` / `[OUTPUT]` blocks with fixed-width labels
    #[default]
    Text,
    /// Single YAML document
    Yaml,
    /// Single pretty-printed JSON document
    Json,
}

impl OutputFormat {
    /// Serializes `value` in this format.
    ///
    /// Only the structured formats are handled here; the text layout is
    /// produced by the CLI formatter, so `Text` yields a configuration error.
    pub fn serialize<T: Serialize>(&self, value: &T) -> Result<String, Error> {
        match self {
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            OutputFormat::Json => {
                let mut out = serde_json::to_string_pretty(value)?;
                out.push('\n');
                Ok(out)
            }
            OutputFormat::Text => Err(Error::Config(
                "text output is not a serde format".to_string(),
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Yaml => write!(f, "yaml"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("unknown output format: {s} (expected text, yaml or json)")),
        }
    }
}
