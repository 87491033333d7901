//! Dataset loading, parsing, and validation.
//!
//! The dataset is declarative YAML: reference tables (pathogens,
//! penetration sites, CrCl ranges) plus the antibiotic formulary,
//! empiric syndromes, and institution overrides. A seed dataset is
//! embedded at compile time; `--dataset <dir>` loads files instead.

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{load_builtin, load_dataset, load_dir, parse_dataset};
pub use schema::{
    AgentType, AntibioticRecord, Category, CoverageOverrideRecord, CrclRangeRecord, Dataset,
    DialysisDoseRecord, DialysisMode, DoseRecord, DoseStepRecord, EmpiricTier, InstitutionRecord,
    NoteRecord, PathogenRecord, PathogenType, PenetrationSiteRecord, RecommendationRecord,
    RegimenRecord, Route, SyndromeRecord, ToxicityCategory, ToxicityRecord, WeightType,
};
pub use validator::{validate, validate_dataset, ValidationError};
