//! Empiric therapy recommendations by clinical syndrome.

use crate::catalog::Catalog;
use crate::dataset::schema::{Category, EmpiricTier};
use crate::error::Result;

/// One recommended agent within a tier.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct RecommendedAgent {
    pub antibiotic: String,
    pub category: Category,
    /// Add-on to the tier's standalone choices rather than one itself.
    pub is_addon: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addon_notes: Option<String>,
}

/// Recommendations for one syndrome, grouped by tier.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SyndromeGuide {
    pub syndrome: String,
    pub tiers: Vec<TierGroup>,
}

/// One tier with its recommended agents in dataset order.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct TierGroup {
    pub tier: EmpiricTier,
    pub agents: Vec<RecommendedAgent>,
}

/// Names of every syndrome in the reference set, in natural order.
pub fn syndrome_names(catalog: &Catalog) -> Vec<&str> {
    catalog.syndromes().iter().map(|s| s.name.as_str()).collect()
}

/// Build the tiered guide for one syndrome.
///
/// Tiers appear in escalation order (primary, severe, alternative);
/// tiers with no recommendations are omitted. Within a tier the
/// dataset's recommendation order is kept.
///
/// # Errors
///
/// Returns `UnknownSyndrome` when `name` is not in the reference set.
pub fn syndrome_guide(catalog: &Catalog, name: &str) -> Result<SyndromeGuide> {
    let syndrome = catalog.syndrome(name)?;

    let mut tiers = Vec::new();
    for tier in [EmpiricTier::Primary, EmpiricTier::Severe, EmpiricTier::Alternative] {
        let agents: Vec<RecommendedAgent> = syndrome
            .recommendations
            .iter()
            .filter(|r| r.tier == tier)
            .map(|r| {
                // Validated at catalog construction, so the entry exists.
                let category = catalog
                    .antibiotic(&r.antibiotic)
                    .map(|ab| ab.category)
                    .unwrap_or(Category::Other);
                RecommendedAgent {
                    antibiotic: r.antibiotic.clone(),
                    category,
                    is_addon: r.is_addon,
                    addon_notes: r.addon_notes.clone(),
                }
            })
            .collect();
        if !agents.is_empty() {
            tiers.push(TierGroup { tier, agents });
        }
    }

    Ok(SyndromeGuide {
        syndrome: syndrome.name.clone(),
        tiers,
    })
}
