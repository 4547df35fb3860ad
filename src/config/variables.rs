//! TOML variables file feeding template placeholders.
//!
//! # File Format
//!
//! ```toml
//! [vars]
//! MODULE_NAME = "ShellPkg"
//! VERSION = 2
//! DEBUG = true
//! GUID_NAME = ["gEfiShellProtocolGuid", "gEfiShellParametersProtocolGuid"]
//! GUID_VALUE = [
//!   "{0x6302d008, 0x7f9b, 0x4f30, {0x87, 0xac, 0x60, 0xc9, 0xfe, 0xf5, 0xda, 0x4e}}",
//!   "{0x752f3136, 0x4e16, 0x4fdc, {0xa2, 0x2a, 0xe5, 0xf4, 0x68, 0x12, 0xf4, 0xca}}",
//! ]
//! ```
//!
//! Strings, integers, floats, booleans and datetimes become scalars; arrays of those
//! become sequences. Nested tables and arrays of arrays are rejected.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::core::BasetoolsError;
use crate::templating::{Placeholders, TemplateValue};

/// Parsed variables file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VariablesFile {
    /// Placeholder bindings
    #[serde(default)]
    pub vars: toml::Table,
}

impl VariablesFile {
    /// Parses variables from TOML text. `file` is only used in error messages.
    pub fn parse(content: &str, file: &str) -> Result<Self, BasetoolsError> {
        toml::from_str(content).map_err(|e| BasetoolsError::VariablesParseError {
            file: file.to_string(),
            reason: e.to_string(),
        })
    }

    /// Reads and parses a variables file.
    pub async fn load_from(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read variables file {}", path.display()))?;

        Ok(Self::parse(&content, &path.display().to_string())?)
    }

    /// Converts the bindings into template placeholders.
    pub fn to_placeholders(&self, file: &str) -> Result<Placeholders, BasetoolsError> {
        let mut placeholders = Placeholders::new();

        for (name, value) in &self.vars {
            let converted = match value {
                toml::Value::Array(items) => {
                    let values = items
                        .iter()
                        .map(|item| scalar_text(item).ok_or_else(|| shape_error(file, name)))
                        .collect::<Result<Vec<_>, _>>()?;
                    TemplateValue::Sequence(values)
                }
                other => TemplateValue::Scalar(
                    scalar_text(other).ok_or_else(|| shape_error(file, name))?,
                ),
            };
            placeholders.insert(name.clone(), converted);
        }

        Ok(placeholders)
    }
}

fn shape_error(file: &str, name: &str) -> BasetoolsError {
    BasetoolsError::VariablesParseError {
        file: file.to_string(),
        reason: format!("'{name}' must be a scalar or an array of scalars"),
    }
}

fn scalar_text(value: &toml::Value) -> Option<String> {
    match value {
        toml::Value::String(s) => Some(s.clone()),
        toml::Value::Integer(i) => Some(i.to_string()),
        toml::Value::Float(f) => Some(f.to_string()),
        toml::Value::Boolean(b) => Some(b.to_string()),
        toml::Value::Datetime(d) => Some(d.to_string()),
        toml::Value::Array(_) | toml::Value::Table(_) => None,
    }
}
