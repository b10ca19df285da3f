//! # dedupx IO
//!
//! The boundaries of the dedupx engine:
//!
//! - [`ContactLoader`] - Reads a CSV contact table into a
//!   [`ContactCollection`](dedupx_core::ContactCollection)
//! - [`load_weights`] - Reads an alternate weight set from JSON
//! - [`ReportWriter`] - Writes report rows as CSV or JSON

pub mod error;
pub mod loader;
pub mod writer;

pub use error::{IoError, Result};
pub use loader::{load_weights, ColumnMapping, ContactLoader};
pub use writer::{ReportFormat, ReportWriter, REPORT_HEADER};
