//! Hoopdata - NBA dataset presence checker.
//!
//! Hoopdata verifies that the Kaggle `wyattowalsh/basketball` dataset has
//! been downloaded manually into the local data directory. It reports which
//! CSV files look usable, and walks the user through the manual download
//! whenever nothing valid is found. It never touches the network itself.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`dataset`] - Dataset description, candidate scanning, and validation
//! - [`error`] - Error types and result aliases
//! - [`report`] - Report and instruction rendering
//! - [`ui`] - Terminal output, theming, and output modes
//!
//! # Example
//!
//! ```
//! use hoopdata::dataset::{validate_files, KAGGLE_BASKETBALL};
//!
//! // Classify a set of candidate paths against the dataset's size floor
//! let report = validate_files(&[], KAGGLE_BASKETBALL.min_valid_bytes);
//! assert!(report.is_empty());
//! ```

pub mod cli;
pub mod dataset;
pub mod error;
pub mod report;
pub mod ui;

pub use error::{HoopdataError, Result};
