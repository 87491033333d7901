//! Dataset validation rules.
//!
//! This module validates a loaded dataset for correctness:
//! - CrCl ranges must form a contiguous, non-overlapping partition of [0, ∞)
//!   with exactly one open-bottom and one open-top range
//! - Codes, labels, and names must be unique
//! - Coverage facts, penetration sites, dosage values, recommendations, and
//!   institution overrides must reference known reference rows

use crate::dataset::schema::Dataset;
use crate::error::{AbxError, Result};
use std::collections::HashSet;

/// Validation error with context.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
    /// Antibiotic name if error is entry-specific
    pub antibiotic: Option<String>,
}

impl ValidationError {
    fn new(rule: &str, message: String) -> Self {
        Self {
            rule: rule.to_string(),
            message,
            antibiotic: None,
        }
    }

    fn for_antibiotic(rule: &str, antibiotic: &str, message: String) -> Self {
        Self {
            rule: rule.to_string(),
            message,
            antibiotic: Some(antibiotic.to_string()),
        }
    }
}

/// Validate a dataset and return all errors.
///
/// This function collects all validation errors rather than stopping
/// at the first one, allowing maintainers to fix multiple issues at once.
pub fn validate_dataset(dataset: &Dataset) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(validate_ranges(dataset));
    errors.extend(validate_reference_codes(dataset));
    errors.extend(validate_antibiotics(dataset));
    errors.extend(validate_syndromes(dataset));
    errors.extend(validate_institutions(dataset));

    errors
}

/// Validate the CrCl range partition.
fn validate_ranges(dataset: &Dataset) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut labels = HashSet::new();
    for r in &dataset.crcl_ranges {
        if !labels.insert(r.label.as_str()) {
            errors.push(ValidationError::new(
                "duplicate-range-label",
                format!("CrCl range label '{}' is defined more than once", r.label),
            ));
        }
        if let (Some(lo), Some(hi)) = (r.lower_bound, r.upper_bound) {
            if lo >= hi {
                errors.push(ValidationError::new(
                    "range-bounds-inverted",
                    format!(
                        "CrCl range '{}' has lower bound {} >= upper bound {}",
                        r.label, lo, hi
                    ),
                ));
            }
        }
    }

    let open_bottom = dataset
        .crcl_ranges
        .iter()
        .filter(|r| r.lower_bound.is_none())
        .count();
    if open_bottom != 1 {
        errors.push(ValidationError::new(
            "range-open-bottom",
            format!(
                "Expected exactly one open-bottom CrCl range (no lower bound), found {}",
                open_bottom
            ),
        ));
    }

    let open_top = dataset
        .crcl_ranges
        .iter()
        .filter(|r| r.upper_bound.is_none())
        .count();
    if open_top != 1 {
        errors.push(ValidationError::new(
            "range-open-top",
            format!(
                "Expected exactly one open-top CrCl range (no upper bound), found {}",
                open_top
            ),
        ));
    }

    // Contiguity: sorted by sort_order, each upper bound must equal the
    // next range's lower bound.
    let mut sorted: Vec<_> = dataset.crcl_ranges.iter().collect();
    sorted.sort_by_key(|r| r.sort_order);
    for pair in sorted.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if a.sort_order == b.sort_order {
            errors.push(ValidationError::new(
                "duplicate-range-order",
                format!(
                    "CrCl ranges '{}' and '{}' share sort order {}",
                    a.label, b.label, a.sort_order
                ),
            ));
            continue;
        }
        match (a.upper_bound, b.lower_bound) {
            (Some(hi), Some(lo)) if hi == lo => {}
            (Some(hi), Some(lo)) => {
                errors.push(ValidationError::new(
                    "range-gap",
                    format!(
                        "CrCl ranges '{}' (upper {}) and '{}' (lower {}) do not meet",
                        a.label, hi, b.label, lo
                    ),
                ));
            }
            _ => {
                errors.push(ValidationError::new(
                    "range-open-interior",
                    format!(
                        "CrCl range '{}' or '{}' leaves an open bound in the interior of the partition",
                        a.label, b.label
                    ),
                ));
            }
        }
    }

    errors
}

/// Validate uniqueness of pathogen and penetration site codes.
fn validate_reference_codes(dataset: &Dataset) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut codes = HashSet::new();
    for p in &dataset.pathogens {
        if !codes.insert(p.code.as_str()) {
            errors.push(ValidationError::new(
                "duplicate-pathogen-code",
                format!("Pathogen code '{}' is defined more than once", p.code),
            ));
        }
    }

    let mut sites = HashSet::new();
    for s in &dataset.penetration_sites {
        if !sites.insert(s.code.as_str()) {
            errors.push(ValidationError::new(
                "duplicate-site-code",
                format!("Penetration site code '{}' is defined more than once", s.code),
            ));
        }
    }

    errors
}

/// Validate formulary entries against the reference tables.
fn validate_antibiotics(dataset: &Dataset) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let pathogens: HashSet<_> = dataset.pathogens.iter().map(|p| p.code.as_str()).collect();
    let sites: HashSet<_> = dataset
        .penetration_sites
        .iter()
        .map(|s| s.code.as_str())
        .collect();
    let ranges: HashSet<_> = dataset.crcl_ranges.iter().map(|r| r.label.as_str()).collect();

    let mut names = HashSet::new();
    for ab in &dataset.antibiotics {
        if !names.insert(ab.name.as_str()) {
            errors.push(ValidationError::new(
                "duplicate-antibiotic-name",
                format!("Antibiotic '{}' is defined more than once", ab.name),
            ));
        }

        for code in ab.coverage.keys() {
            if !pathogens.contains(code.as_str()) {
                errors.push(ValidationError::for_antibiotic(
                    "unknown-coverage-pathogen",
                    &ab.name,
                    format!(
                        "Antibiotic '{}' records coverage for unknown pathogen '{}'",
                        ab.name, code
                    ),
                ));
            }
        }

        for code in &ab.penetration {
            if !sites.contains(code.as_str()) {
                errors.push(ValidationError::for_antibiotic(
                    "unknown-penetration-site",
                    &ab.name,
                    format!(
                        "Antibiotic '{}' references unknown penetration site '{}'",
                        ab.name, code
                    ),
                ));
            }
        }

        for (i, reg) in ab.regimens.iter().enumerate() {
            let mut seen = HashSet::new();
            for dose in &reg.doses {
                if !ranges.contains(dose.range.as_str()) {
                    errors.push(ValidationError::for_antibiotic(
                        "unknown-dose-range",
                        &ab.name,
                        format!(
                            "Antibiotic '{}' regimen {} has a dose for unknown CrCl range '{}'",
                            ab.name, i, dose.range
                        ),
                    ));
                }
                if !seen.insert(dose.range.as_str()) {
                    errors.push(ValidationError::for_antibiotic(
                        "duplicate-dose-range",
                        &ab.name,
                        format!(
                            "Antibiotic '{}' regimen {} has multiple doses for CrCl range '{}'",
                            ab.name, i, dose.range
                        ),
                    ));
                }
            }

            let mut modes = HashSet::new();
            for dd in &reg.dialysis {
                if !modes.insert(dd.mode) {
                    errors.push(ValidationError::for_antibiotic(
                        "duplicate-dialysis-mode",
                        &ab.name,
                        format!(
                            "Antibiotic '{}' regimen {} has multiple doses for dialysis mode {}",
                            ab.name, i, dd.mode
                        ),
                    ));
                }
            }
        }
    }

    errors
}

/// Validate empiric syndromes.
fn validate_syndromes(dataset: &Dataset) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let antibiotics: HashSet<_> = dataset.antibiotics.iter().map(|a| a.name.as_str()).collect();

    let mut names = HashSet::new();
    for s in &dataset.syndromes {
        if !names.insert(s.name.as_str()) {
            errors.push(ValidationError::new(
                "duplicate-syndrome-name",
                format!("Syndrome '{}' is defined more than once", s.name),
            ));
        }

        for rec in &s.recommendations {
            if !antibiotics.contains(rec.antibiotic.as_str()) {
                errors.push(ValidationError::new(
                    "unknown-recommendation-antibiotic",
                    format!(
                        "Syndrome '{}' recommends unknown antibiotic '{}'",
                        s.name, rec.antibiotic
                    ),
                ));
            }
        }
    }

    errors
}

/// Validate institution overrides.
fn validate_institutions(dataset: &Dataset) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let antibiotics: HashSet<_> = dataset.antibiotics.iter().map(|a| a.name.as_str()).collect();
    let pathogens: HashSet<_> = dataset.pathogens.iter().map(|p| p.code.as_str()).collect();

    let mut codes = HashSet::new();
    for inst in &dataset.institutions {
        if !codes.insert(inst.code.as_str()) {
            errors.push(ValidationError::new(
                "duplicate-institution-code",
                format!("Institution code '{}' is defined more than once", inst.code),
            ));
        }

        for o in &inst.overrides {
            if !antibiotics.contains(o.antibiotic.as_str()) {
                errors.push(ValidationError::new(
                    "unknown-override-antibiotic",
                    format!(
                        "Institution '{}' overrides unknown antibiotic '{}'",
                        inst.code, o.antibiotic
                    ),
                ));
            }
            if !pathogens.contains(o.pathogen.as_str()) {
                errors.push(ValidationError::new(
                    "unknown-override-pathogen",
                    format!(
                        "Institution '{}' overrides unknown pathogen '{}'",
                        inst.code, o.pathogen
                    ),
                ));
            }
        }
    }

    errors
}

/// Validate and return Result (for convenience).
///
/// # Errors
///
/// Returns `DatasetValidationError` if any validation rules fail.
pub fn validate(dataset: &Dataset) -> Result<()> {
    let errors = validate_dataset(dataset);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(AbxError::DatasetValidationError {
            message: messages.join("; "),
        })
    }
}
