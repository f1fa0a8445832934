//! Table-ready data structures for licence report output.
//!
//! This module provides `LicenceTable`, a presentation-ready data structure
//! that can be directly consumed by a renderer or serialized to JSON.
//!
//! The data flow is:
//! 1. Results document (ProjectResults)
//! 2. LicenceTable (table-ready: title, headings, rows)
//! 3. Renderer (text table, CSV, JSON)

use serde::{Deserialize, Serialize};

use crate::results::ProjectResults;

/// A single row in the licence table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenceRow {
    /// 1-based licence counter, shared by every product under one licence
    pub index: usize,
    /// Licence name (e.g., "MIT")
    pub licence: String,
    /// Product identifier
    pub prod_key: String,
}

/// Table-ready licence report data.
///
/// This is the final data structure before presentation. Renderers iterate
/// over headings/rows and apply formatting - no computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenceTable {
    /// Report title
    pub title: String,
    /// Column headings: index, licence, product_keys
    pub headings: Vec<String>,
    /// Data rows, one per (licence, product) pair
    pub rows: Vec<LicenceRow>,
}

impl LicenceTable {
    /// Create an empty licence table with the report title and headings.
    pub fn new() -> Self {
        LicenceTable {
            title: "Licences".to_string(),
            headings: vec![
                "index".to_string(),
                "licence".to_string(),
                "product_keys".to_string(),
            ],
            rows: Vec::new(),
        }
    }

    /// Append one row per (licence, product) pair from a results document.
    ///
    /// Licences are visited in document order. The index starts at 1 and
    /// advances once per licence, so every product of one licence shares the
    /// same index; a licence without products still consumes an index value.
    /// A missing `licenses` field means there is nothing to report and leaves
    /// the table untouched.
    pub fn format(&mut self, results: &ProjectResults) {
        let Some(licences) = &results.licenses else {
            return;
        };

        let mut index = 1;
        for (licence, products) in licences {
            for product in products {
                self.rows.push(LicenceRow {
                    index,
                    licence: licence.clone(),
                    prod_key: product.prod_key.clone(),
                });
            }
            index += 1;
        }
    }

    /// Create a table from a results document in one step.
    pub fn from_results(results: &ProjectResults) -> Self {
        let mut table = LicenceTable::new();
        table.format(results);
        table
    }
}

impl Default for LicenceTable {
    fn default() -> Self {
        Self::new()
    }
}
