//! Query operations over an indexed catalog.
//!
//! Each submodule covers one lookup surface: renal function
//! classification, coverage-based search, dose projection, and empiric
//! syndrome guides.

pub mod coverage;
pub mod dosing;
pub mod empiric;
pub mod renal;

pub use coverage::{match_by_coverage, EntrySummary};
pub use dosing::{dosage_for, DosageReport, RegimenDosage, RenalSelection};
pub use empiric::{syndrome_guide, syndrome_names, RecommendedAgent, SyndromeGuide, TierGroup};
pub use renal::{dialysis_dosages, resolve_crcl_range, DialysisDosageView};
