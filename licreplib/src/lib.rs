//! # licreplib
//!
//! A licence report formatting library that turns project analysis results
//! into table-ready data.
//!
//! ## Overview
//!
//! Dependency analysis backends report, per project, which software licences
//! are in use and which products are distributed under each of them. This
//! library consumes that results document and shapes it for tabular display:
//!
//! - **ProjectResults**: typed model of the results document, preserving the
//!   document's licence order
//! - **LicenceTable**: presentation-ready table (title, headings, rows) with
//!   one row per (licence, product) pair
//!
//! The library performs no I/O of its own beyond reading a results file; it
//! does not talk to any API. Rendering the table (text, CSV, JSON) is left to
//! the consumer.
//!
//! ## Example
//!
//! ```rust
//! use licreplib::{LicenceTable, ProjectResults};
//!
//! let json = r#"{
//!     "licenses": {
//!         "MIT": [{"prod_key": "rails"}, {"prod_key": "rack"}],
//!         "Apache-2.0": [{"prod_key": "thrift"}]
//!     }
//! }"#;
//! let results = ProjectResults::from_json_str(json).unwrap();
//! let table = LicenceTable::from_results(&results);
//!
//! assert_eq!(table.title, "Licences");
//! assert_eq!(table.rows.len(), 3);
//! // Products of the same licence share one index value
//! assert_eq!(table.rows[0].index, 1);
//! assert_eq!(table.rows[1].index, 1);
//! assert_eq!(table.rows[2].index, 2);
//! assert_eq!(table.rows[2].prod_key, "thrift");
//! ```

pub mod error;
pub mod results;
pub mod table;

pub use error::LicrepError;
pub use results::{load_results, ProductRef, ProjectResults};
pub use table::{LicenceRow, LicenceTable};

/// Result type for licreplib operations
pub type Result<T> = std::result::Result<T, LicrepError>;
