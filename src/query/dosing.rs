//! Dose lookup for one antibiotic under a given renal function.
//!
//! A dialysis mode, when given, takes precedence over any CrCl value:
//! dialysis patients get mode-specific doses and the range partition is
//! never consulted. Otherwise the CrCl resolves to exactly one range and
//! each regimen is projected down to the dose recorded for that range;
//! regimens with no dose for the range are dropped.

use crate::catalog::Catalog;
use crate::dataset::schema::{DialysisMode, DoseRecord, RegimenRecord, Route, WeightType};
use crate::error::Result;
use crate::query::renal::{dialysis_dosages, resolve_crcl_range, DialysisDosageView};

/// How the renal function was classified for a lookup.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RenalSelection {
    /// Resolved CrCl range label, e.g. "50~60" or "Normal".
    Range { label: String },
    /// Dialysis mode, bypassing the range partition.
    Dialysis { mode: DialysisMode },
}

/// One regimen narrowed to the single dose for the resolved range.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct RegimenDosage {
    pub route: Route,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indication: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dose_descriptor: Option<String>,
    pub is_weight_based: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_type: Option<WeightType>,
    pub is_preferred: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preparation_instructions: Option<String>,
    pub dose: DoseRecord,
}

/// Full result of a dose lookup.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct DosageReport {
    pub antibiotic: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crcl: Option<f64>,
    pub selection: RenalSelection,
    /// Populated on the range path; empty under dialysis.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub regimens: Vec<RegimenDosage>,
    /// Populated on the dialysis path; empty otherwise.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dialysis: Vec<DialysisDosageView>,
}

/// Look up doses for `name` given a CrCl value and/or dialysis mode.
///
/// # Errors
///
/// Returns `UnknownAntibiotic` when `name` is not in the formulary. A
/// valid antibiotic never fails here; an entry with no dose for the
/// resolved range yields an empty `regimens` list, not an error.
pub fn dosage_for(
    catalog: &Catalog,
    name: &str,
    crcl: Option<f64>,
    dialysis: Option<DialysisMode>,
) -> Result<DosageReport> {
    let antibiotic = catalog.antibiotic(name)?;

    if let Some(mode) = dialysis {
        return Ok(DosageReport {
            antibiotic: antibiotic.name.clone(),
            crcl,
            selection: RenalSelection::Dialysis { mode },
            regimens: Vec::new(),
            dialysis: dialysis_dosages(antibiotic, mode),
        });
    }

    let range = resolve_crcl_range(catalog, crcl);
    tracing::debug!(antibiotic = %antibiotic.name, crcl = ?crcl, range = %range.label, "resolved dose lookup");

    let mut regimens: Vec<&RegimenRecord> = antibiotic.regimens.iter().collect();
    regimens.sort_by_key(|r| r.sort_order);

    let projected = regimens
        .into_iter()
        .filter_map(|r| {
            r.doses
                .iter()
                .find(|d| d.range == range.label)
                .map(|dose| RegimenDosage {
                    route: r.route,
                    indication: r.indication.clone(),
                    dose_descriptor: r.dose_descriptor.clone(),
                    is_weight_based: r.is_weight_based,
                    weight_type: r.weight_type,
                    is_preferred: r.is_preferred,
                    fixed_duration: r.fixed_duration.clone(),
                    preparation_instructions: r.preparation_instructions.clone(),
                    dose: dose.clone(),
                })
        })
        .collect();

    Ok(DosageReport {
        antibiotic: antibiotic.name.clone(),
        crcl,
        selection: RenalSelection::Range {
            label: range.label.clone(),
        },
        regimens: projected,
        dialysis: Vec::new(),
    })
}
