//! Coverage-based search.
//!
//! Finds the antibiotics whose recorded coverage facts include every
//! requested pathogen (conjunctive match). Matching counts distinct
//! requested pathogens with an explicit `is_covered = true` fact; a fact
//! recorded as `false` and an absent fact both simply do not count.

use crate::catalog::Catalog;
use crate::dataset::schema::{AgentType, AntibioticRecord, Category};
use crate::error::{AbxError, Result};
use std::collections::BTreeSet;

/// One matched antibiotic with its coverage and penetration summary.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct EntrySummary {
    pub name: String,
    pub generic_name: Option<String>,
    pub category: Category,
    pub agent_type: AgentType,
    pub generation: Option<String>,
    /// Every pathogen code this entry covers, requested or not.
    pub covered_pathogens: Vec<String>,
    /// Every penetration site code this entry reaches.
    pub penetration_sites: Vec<String>,
}

/// Find antibiotics covering all of `required_codes`.
///
/// An empty requirement returns every entry with its summary. With an
/// institution selected, that institution's overrides replace the base
/// coverage facts for their (antibiotic, pathogen) pairs first.
///
/// Results keep the catalog's natural entry order.
///
/// # Errors
///
/// Returns `UnknownPathogenCode` naming every requested code that does
/// not exist in the reference set. Never fails on codes an entry merely
/// lacks facts for.
pub fn match_by_coverage(
    catalog: &Catalog,
    required_codes: &[String],
    institution: Option<&str>,
) -> Result<Vec<EntrySummary>> {
    let required: BTreeSet<&str> = required_codes.iter().map(|c| c.as_str()).collect();

    let missing: Vec<String> = required
        .iter()
        .filter(|code| catalog.pathogen(code).is_none())
        .map(|code| code.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(AbxError::UnknownPathogenCode { codes: missing });
    }

    let overrides = match institution {
        Some(code) => Some(catalog.institution(code)?),
        None => None,
    };

    let mut results = Vec::new();
    for ab in catalog.antibiotics() {
        let covers = |pathogen: &str| -> bool {
            let base = ab.coverage.get(pathogen).copied();
            let effective = overrides
                .and_then(|inst| {
                    inst.overrides
                        .iter()
                        .find(|o| o.antibiotic == ab.name && o.pathogen == pathogen)
                        .map(|o| o.is_covered)
                })
                .or(base);
            effective == Some(true)
        };

        // Set containment via counting distinct covered requests.
        let covered_count = required.iter().filter(|code| covers(code)).count();
        if covered_count == required.len() {
            results.push(summarize(catalog, ab, &covers));
        }
    }

    Ok(results)
}

fn summarize(
    catalog: &Catalog,
    ab: &AntibioticRecord,
    covers: &dyn Fn(&str) -> bool,
) -> EntrySummary {
    // Pathogen sort order, not coverage-map order.
    let covered_pathogens = catalog
        .pathogens()
        .iter()
        .filter(|p| covers(&p.code))
        .map(|p| p.code.clone())
        .collect();

    EntrySummary {
        name: ab.name.clone(),
        generic_name: ab.generic_name.clone(),
        category: ab.category,
        agent_type: ab.agent_type,
        generation: ab.generation.clone(),
        covered_pathogens,
        penetration_sites: ab.penetration.clone(),
    }
}
