//! Schema field descriptors.

use serde::{Deserialize, Serialize};

/// One row of schema metadata describing a single column.
///
/// `table_name` and `column_name` are required and must be non-blank;
/// everything else is optional. Serde defaults let absent JSON keys
/// deserialize to the falsy value, and unknown keys are ignored, so the
/// descriptor accepts whatever extra metadata a caller carries along.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldDescriptor {
    #[serde(default)]
    pub table_name: String,
    #[serde(default)]
    pub column_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub data_type: Option<String>,
    #[serde(default)]
    pub primary_key: bool,
    #[serde(default)]
    pub foreign_key: bool,
}

impl FieldDescriptor {
    /// Bare descriptor with just the required keys.
    pub fn new(table_name: impl Into<String>, column_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            column_name: column_name.into(),
            ..Self::default()
        }
    }

    /// The description with surrounding whitespace removed; empty when the
    /// description is absent or whitespace-only.
    pub fn description_trimmed(&self) -> &str {
        self.description.as_deref().map(str::trim).unwrap_or("")
    }

    /// Whether a human-written description is present.
    pub fn has_description(&self) -> bool {
        !self.description_trimmed().is_empty()
    }

    /// Whether a data type is declared. An empty string counts as absent,
    /// but the value is otherwise never inspected.
    pub fn has_data_type(&self) -> bool {
        self.data_type.as_deref().is_some_and(|t| !t.is_empty())
    }
}
