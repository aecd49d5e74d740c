//! Policy Table - Core Library
//!
//! Filtering and label formatting for a static dataset of policy records.
//! Everything here is pure and synchronous: presentation layers own the
//! filter selection and call [`filter`] whenever it changes.

pub mod dataset;
pub mod error;
pub mod filter;
pub mod label;
pub mod record;
pub mod status;
pub mod table;

pub use dataset::Dataset;
pub use error::{DatasetError, Result};
pub use filter::{filter, FilterSelection};
pub use label::format_label;
pub use record::{Field, FieldValue, Record};
pub use status::{StatusCode, StatusSelector, UnknownStatus};
