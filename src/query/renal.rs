//! CrCl range resolution.
//!
//! Maps a measured creatinine clearance value (or its absence) onto one
//! labeled range from the ordered partition of [0, ∞), or short-circuits
//! to dialysis-specific dosing when a dialysis mode is selected.
//!
//! Boundary rule: a value exactly equal to a shared boundary belongs to
//! the range that *starts* at that boundary (50 resolves to "50~60", not
//! "40~50"; 90 resolves to "Normal", not "80~90").

use crate::catalog::Catalog;
use crate::dataset::schema::{AntibioticRecord, CrclRangeRecord, DialysisMode, Route};

/// Resolve a CrCl value to exactly one range.
///
/// - `None` resolves to the open-top range: no value provided is treated
///   as assuming normal renal function.
/// - A value above the open-top range's lower bound resolves to the
///   open-top range.
/// - Otherwise the ranges are scanned from highest to lowest, returning
///   the first whose lower bound is at most the value and whose upper
///   bound (if any) is at least the value.
/// - Anything below every concrete lower bound, including negative input,
///   falls through to the open-bottom range.
///
/// Never fails; deterministic given the catalog's range table.
pub fn resolve_crcl_range(catalog: &Catalog, value: Option<f64>) -> &CrclRangeRecord {
    let v = match value {
        None => return catalog.open_top_range(),
        Some(v) => v,
    };

    if let Some(lb) = catalog.open_top_range().lower_bound {
        if v > lb {
            return catalog.open_top_range();
        }
    }

    for range in catalog.crcl_ranges().iter().rev() {
        let Some(lb) = range.lower_bound else {
            continue;
        };
        if lb > v {
            continue;
        }
        match range.upper_bound {
            None => return range,
            Some(ub) if v <= ub => return range,
            Some(_) => {}
        }
    }

    // Unreachable for a well-formed partition and v >= 0, but negative or
    // otherwise malformed input must still land somewhere.
    catalog.open_bottom_range()
}

/// Dialysis dose projection: one row per (regimen, matching mode).
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct DialysisDosageView {
    /// Route of the regimen this dose belongs to.
    pub route: Route,
    /// Regimen descriptor, when present.
    pub dose_descriptor: Option<String>,
    pub mode: DialysisMode,
    pub dose_text: String,
    pub notes: Option<String>,
}

/// Collect the dialysis dosages matching `mode` across every regimen of
/// an antibiotic, in regimen sort order. Bypasses CrCl ranges entirely.
pub fn dialysis_dosages(antibiotic: &AntibioticRecord, mode: DialysisMode) -> Vec<DialysisDosageView> {
    let mut regimens: Vec<_> = antibiotic.regimens.iter().collect();
    regimens.sort_by_key(|r| r.sort_order);

    let mut rows = Vec::new();
    for regimen in regimens {
        for dd in &regimen.dialysis {
            if dd.mode == mode {
                rows.push(DialysisDosageView {
                    route: regimen.route,
                    dose_descriptor: regimen.dose_descriptor.clone(),
                    mode: dd.mode,
                    dose_text: dd.dose_text.clone(),
                    notes: dd.notes.clone(),
                });
            }
        }
    }
    rows
}
