//! Typed model for the externally supplied results document.
//!
//! The document is a JSON object produced upstream (typically an API
//! response). Only the `licenses` mapping is consumed here; everything else
//! in the document is ignored. Licence iteration order follows the document,
//! so the mapping is stored in an `IndexMap`.

use std::fs;
use std::io::Read;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::LicrepError;
use crate::Result;

/// A product record under a licence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRef {
    /// Identifier of the product distributed under the licence
    pub prod_key: String,
}

/// Pre-fetched analysis results for one project.
///
/// `licenses` is optional: an absent or `null` field means there is nothing
/// to report, which is not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectResults {
    /// Licence name -> products under that licence, in document order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub licenses: Option<IndexMap<String, Vec<ProductRef>>>,
}

impl ProjectResults {
    /// Parse a results document from a JSON string.
    ///
    /// A product record without `prod_key` is rejected here; the formatter
    /// never sees a malformed record.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a results document from a reader.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }
}

/// Load and parse a results document from a file.
pub fn load_results(path: impl AsRef<Path>) -> Result<ProjectResults> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| LicrepError::ResultsRead {
        path: path.to_path_buf(),
        source,
    })?;
    ProjectResults::from_json_str(&json)
}
