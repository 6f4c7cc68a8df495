//! Import mode and the per-file result summary.

use serde::{Deserialize, Serialize};

use crate::entity_kind::EntityKind;
use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Import mode
// ---------------------------------------------------------------------------

/// Transaction scope used while importing one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportMode {
    /// Every row commits on its own. A failure leaves earlier rows in place.
    #[default]
    PerRow,
    /// The whole file runs in one transaction. A failure rolls back every
    /// row of the file.
    Atomic,
}

impl ImportMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PerRow => "per_row",
            Self::Atomic => "atomic",
        }
    }

    /// Parse a mode name. Accepts `per_row` and `per-row` spellings.
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "per_row" | "per-row" => Some(Self::PerRow),
            "atomic" => Some(Self::Atomic),
            _ => None,
        }
    }

    pub const ALL: &'static [ImportMode] = &[Self::PerRow, Self::Atomic];

    /// Comma-separated list of every valid name, for error messages.
    pub fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(ImportMode::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for ImportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ImportMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| {
            CoreError::Validation(format!(
                "unknown import mode '{s}' (expected one of: {})",
                Self::valid_names()
            ))
        })
    }
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// Outcome of importing one CSV file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub entity: EntityKind,
    pub path: String,
    pub rows_created: u64,
    pub mode: ImportMode,
    /// True when the rows were rolled back after a successful pass.
    pub dry_run: bool,
}

impl ImportSummary {
    /// Operator-facing confirmation line.
    pub fn success_message(&self) -> String {
        if self.dry_run {
            format!(
                "Dry run: the file \"{}\" would load {} row(s)",
                self.path, self.rows_created
            )
        } else {
            format!("Successfully loaded the file \"{}\"", self.path)
        }
    }
}
