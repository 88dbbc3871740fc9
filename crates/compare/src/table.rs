//! Row-oriented comparison table, built from the current selection.
//!
//! Pure data transformation; rendering stays with the external collaborator.

use serde::{Deserialize, Serialize};

use crate::selector::SelectionEntry;

/// One attribute row: a label plus one value per compared product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeRow {
    pub label: String,
    pub values: Vec<String>,
}

/// Side-by-side comparison: header columns are the entry names (selection
/// order), rows are the tracked attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonTable {
    pub columns: Vec<String>,
    pub rows: Vec<AttributeRow>,
}

impl ComparisonTable {
    /// Build a table from the selection. Returns `None` below two entries —
    /// a one-product comparison is meaningless.
    pub fn from_entries(entries: &[SelectionEntry]) -> Option<Self> {
        if entries.len() < 2 {
            return None;
        }

        let columns = entries.iter().map(|e| e.name().to_string()).collect();
        let rows = vec![
            AttributeRow {
                label: "Brand".to_string(),
                values: entries.iter().map(|e| e.brand().to_string()).collect(),
            },
            AttributeRow {
                label: "Price (USD)".to_string(),
                values: entries.iter().map(|e| format!("${}", e.price())).collect(),
            },
            AttributeRow {
                label: "Description".to_string(),
                values: entries.iter().map(|e| e.description().to_string()).collect(),
            },
            AttributeRow {
                label: "Details".to_string(),
                values: entries.iter().map(|e| e.details().to_string()).collect(),
            },
        ];

        Some(Self { columns, rows })
    }
}
