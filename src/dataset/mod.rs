//! Dataset description, candidate scanning, and validation.
//!
//! # Architecture
//!
//! - [`source`] - Static description of the expected external dataset
//! - [`scan`] - Data directory creation and candidate enumeration
//! - [`validate`] - Size-based validity classification

pub mod scan;
pub mod source;
pub mod validate;

pub use scan::{ensure_data_dir, scan_candidates};
pub use source::{DatasetSource, KAGGLE_BASKETBALL};
pub use validate::{validate_files, InvalidFile, ValidFile, ValidationReport};
