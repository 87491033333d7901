//! Abxref - Antibiotic dosing and coverage reference.
//!
//! Abxref is a CLI tool that answers the questions a clinician asks at
//! the point of prescribing: which agents cover a set of pathogens, how
//! a dose changes with renal function, and what the empiric choices are
//! for a clinical syndrome. All answers come from a YAML dataset that is
//! embedded at build time and can be swapped out with `--dataset`.
//!
//! # Modules
//!
//! - [`catalog`] - Validated, indexed view over a loaded dataset
//! - [`cli`] - Command-line interface and argument parsing
//! - [`dataset`] - Dataset schema, loading, and validation
//! - [`error`] - Error types and result aliases
//! - [`query`] - Renal resolution, coverage matching, dose lookup
//! - [`ui`] - Terminal output, themes, and tables
//!
//! # Example
//!
//! ```
//! use abxref::catalog::Catalog;
//! use abxref::dataset::loader::load_builtin;
//! use abxref::query::renal::resolve_crcl_range;
//!
//! let catalog = Catalog::new(load_builtin().unwrap()).unwrap();
//! let range = resolve_crcl_range(&catalog, Some(55.0));
//! assert_eq!(range.label, "50~60");
//! ```

pub mod catalog;
pub mod cli;
pub mod dataset;
pub mod error;
pub mod query;
pub mod ui;

pub use error::{AbxError, Result};
