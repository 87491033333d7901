//! Dataset schema definitions for abxref.
//!
//! This module contains all the struct definitions that map to the
//! YAML dataset file format: reference tables (pathogens, penetration
//! sites, CrCl ranges) and the antibiotic formulary (coverage facts,
//! dosage regimens, toxicities, empiric syndromes, institutions).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Root dataset structure.
///
/// A dataset directory may spread these sections across several files;
/// each file parses into a `Dataset` with the absent sections defaulted,
/// and the loader concatenates them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    /// Pathogen reference table.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pathogens: Vec<PathogenRecord>,

    /// Tissue penetration site reference table.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub penetration_sites: Vec<PenetrationSiteRecord>,

    /// CrCl range reference table.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub crcl_ranges: Vec<CrclRangeRecord>,

    /// Antibiotic formulary entries.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub antibiotics: Vec<AntibioticRecord>,

    /// Empiric therapy syndromes.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub syndromes: Vec<SyndromeRecord>,

    /// Institutions with local coverage overrides.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub institutions: Vec<InstitutionRecord>,
}

impl Dataset {
    /// Fold another dataset's sections into this one.
    pub fn extend(&mut self, other: Dataset) {
        self.pathogens.extend(other.pathogens);
        self.penetration_sites.extend(other.penetration_sites);
        self.crcl_ranges.extend(other.crcl_ranges);
        self.antibiotics.extend(other.antibiotics);
        self.syndromes.extend(other.syndromes);
        self.institutions.extend(other.institutions);
    }
}

/// One pathogen (spectrum organism or resistance marker).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathogenRecord {
    /// Short unique code, e.g. "MRSA", "ESBL".
    pub code: String,

    /// Full display name.
    pub name: String,

    /// Whether this row is a spectrum organism or a resistance marker.
    pub pathogen_type: PathogenType,

    /// Display ordering.
    #[serde(default)]
    pub sort_order: i32,
}

/// One tissue penetration site, e.g. blood-brain barrier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PenetrationSiteRecord {
    /// Short unique code, e.g. "BBB".
    pub code: String,

    /// Full display name.
    pub name: String,

    /// Display ordering.
    #[serde(default)]
    pub sort_order: i32,
}

/// One labeled CrCl range.
///
/// Ranges ordered by `sort_order` must form a contiguous, non-overlapping
/// partition of [0, ∞): exactly one range has no lower bound (the
/// open-bottom "<5" range) and exactly one has no upper bound (the
/// open-top "Normal" range). The validator enforces this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrclRangeRecord {
    /// Unique label, e.g. "50~60", "Normal".
    pub label: String,

    /// Inclusive lower bound in ml/min; `None` for the open-bottom range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lower_bound: Option<f64>,

    /// Inclusive upper bound in ml/min; `None` for the open-top range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper_bound: Option<f64>,

    /// Partition ordering, ascending from the lowest range.
    #[serde(default)]
    pub sort_order: i32,
}

/// One formulary entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AntibioticRecord {
    /// Unique display name, e.g. "Tazocin (Piperacillin/Tazobactam)".
    pub name: String,

    /// Generic (nonproprietary) name, when the display name is a brand.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generic_name: Option<String>,

    /// Drug class.
    pub category: Category,

    /// Antibacterial, antifungal, or antiviral.
    #[serde(default)]
    pub agent_type: AgentType,

    /// Generation within the class, e.g. "3rd" for cephalosporins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation: Option<String>,

    /// Coverage facts keyed by pathogen code. An explicit `false` is
    /// distinct from an absent key ("known not covered" vs "no data").
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub coverage: BTreeMap<String, bool>,

    /// Penetration site codes this agent reaches.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub penetration: Vec<String>,

    /// Dosage regimens.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub regimens: Vec<RegimenRecord>,

    /// Known toxicities.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub toxicities: Vec<ToxicityRecord>,

    /// Free-text notes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<NoteRecord>,
}

/// One dosage regimen of an antibiotic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegimenRecord {
    /// Administration route.
    pub route: Route,

    /// Clinical indication this regimen applies to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indication: Option<String>,

    /// Short descriptor, e.g. "Standard dose", "Prolonged infusion".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dose_descriptor: Option<String>,

    /// Whether doses scale with patient weight.
    #[serde(default)]
    pub is_weight_based: bool,

    /// Which weight to use when weight-based.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_type: Option<WeightType>,

    /// Preferred regimen among this antibiotic's regimens.
    #[serde(default)]
    pub is_preferred: bool,

    /// Fixed treatment duration, e.g. "7-14 days".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_duration: Option<String>,

    /// Preparation/administration instructions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preparation_instructions: Option<String>,

    /// Display ordering within the antibiotic.
    #[serde(default)]
    pub sort_order: i32,

    /// Dose per applicable CrCl range; unique per range label.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub doses: Vec<DoseRecord>,

    /// Dose per dialysis mode.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dialysis: Vec<DialysisDoseRecord>,
}

/// One dose for one CrCl range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoseRecord {
    /// CrCl range label this dose applies to.
    pub range: String,

    /// Free-text dose, e.g. "1g q8h".
    pub dose_text: String,

    /// Structured amount, when extractable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dose_amount: Option<f64>,

    /// Unit for `dose_amount`, e.g. "mg".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dose_unit: Option<String>,

    /// Dosing frequency, e.g. "q8h".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,

    /// Loading-then-maintenance style dosing.
    #[serde(default)]
    pub is_sequential: bool,

    /// Ordered steps for sequential dosing.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<DoseStepRecord>,
}

/// One step of a sequential dose (e.g. loading dose, then maintenance).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoseStepRecord {
    /// Free-text step description.
    pub step_text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dose_amount: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dose_unit: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

/// One dose for one dialysis mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialysisDoseRecord {
    /// Dialysis mode this dose applies to.
    pub mode: DialysisMode,

    /// Free-text dose.
    pub dose_text: String,

    /// Additional notes, e.g. "give after dialysis session".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// One known toxicity of an antibiotic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToxicityRecord {
    pub category: ToxicityCategory,
    pub description: String,
}

/// One free-text note attached to an antibiotic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteRecord {
    /// Audience: "doctor", "nurse", or "general".
    pub note_type: String,
    pub content: String,
}

/// One clinical syndrome with tiered empiric recommendations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyndromeRecord {
    /// Unique syndrome name, e.g. "Biliary Tract Infections".
    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<RecommendationRecord>,
}

/// One empiric recommendation within a syndrome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationRecord {
    /// Antibiotic name; must exist in the formulary.
    pub antibiotic: String,

    /// Recommendation tier.
    pub tier: EmpiricTier,

    /// Whether this agent is an add-on rather than a standalone choice.
    #[serde(default)]
    pub is_addon: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addon_notes: Option<String>,
}

/// One institution with local coverage overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstitutionRecord {
    /// Unique institution code.
    pub code: String,

    pub name: String,

    /// Overrides replacing the base coverage fact for their pair.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub overrides: Vec<CoverageOverrideRecord>,
}

/// One institution-local coverage override.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageOverrideRecord {
    pub antibiotic: String,
    pub pathogen: String,
    pub is_covered: bool,
}

/// Pathogen classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathogenType {
    /// General antimicrobial spectrum organism.
    Spectrum,
    /// Resistance marker (MRSA, ESBL, ...).
    Resistance,
}

impl fmt::Display for PathogenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PathogenType::Spectrum => "spectrum",
            PathogenType::Resistance => "resistance",
        };
        f.write_str(s)
    }
}

/// Drug class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Penicillin,
    Cephalosporin,
    Carbapenem,
    Fluoroquinolone,
    Glycopeptide,
    Oxazolidinone,
    Tetracycline,
    Macrolide,
    Lincosamide,
    Polymyxin,
    Aminoglycoside,
    Other,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::Penicillin => "penicillin",
            Category::Cephalosporin => "cephalosporin",
            Category::Carbapenem => "carbapenem",
            Category::Fluoroquinolone => "fluoroquinolone",
            Category::Glycopeptide => "glycopeptide",
            Category::Oxazolidinone => "oxazolidinone",
            Category::Tetracycline => "tetracycline",
            Category::Macrolide => "macrolide",
            Category::Lincosamide => "lincosamide",
            Category::Polymyxin => "polymyxin",
            Category::Aminoglycoside => "aminoglycoside",
            Category::Other => "other",
        };
        f.write_str(s)
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "penicillin" => Ok(Category::Penicillin),
            "cephalosporin" => Ok(Category::Cephalosporin),
            "carbapenem" => Ok(Category::Carbapenem),
            "fluoroquinolone" => Ok(Category::Fluoroquinolone),
            "glycopeptide" => Ok(Category::Glycopeptide),
            "oxazolidinone" => Ok(Category::Oxazolidinone),
            "tetracycline" => Ok(Category::Tetracycline),
            "macrolide" => Ok(Category::Macrolide),
            "lincosamide" => Ok(Category::Lincosamide),
            "polymyxin" => Ok(Category::Polymyxin),
            "aminoglycoside" => Ok(Category::Aminoglycoside),
            "other" => Ok(Category::Other),
            _ => Err(format!("unknown category '{}'", s)),
        }
    }
}

/// Agent classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentType {
    #[default]
    Antibacterial,
    Antifungal,
    Antiviral,
}

impl fmt::Display for AgentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AgentType::Antibacterial => "antibacterial",
            AgentType::Antifungal => "antifungal",
            AgentType::Antiviral => "antiviral",
        };
        f.write_str(s)
    }
}

impl FromStr for AgentType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "antibacterial" => Ok(AgentType::Antibacterial),
            "antifungal" => Ok(AgentType::Antifungal),
            "antiviral" => Ok(AgentType::Antiviral),
            _ => Err(format!("unknown agent type '{}'", s)),
        }
    }
}

/// Administration route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    #[serde(rename = "IV")]
    Iv,
    #[serde(rename = "PO")]
    Po,
    #[serde(rename = "INHL")]
    Inhl,
    #[serde(rename = "IV/PO")]
    IvPo,
    #[serde(rename = "IV/IM")]
    IvIm,
    #[serde(rename = "IM")]
    Im,
    #[serde(rename = "topical")]
    Topical,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Route::Iv => "IV",
            Route::Po => "PO",
            Route::Inhl => "INHL",
            Route::IvPo => "IV/PO",
            Route::IvIm => "IV/IM",
            Route::Im => "IM",
            Route::Topical => "topical",
        };
        f.write_str(s)
    }
}

/// Which body weight a weight-based dose uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightType {
    Actual,
    Ideal,
    Adjusted,
}

/// Renal replacement therapy mode. Selecting one bypasses CrCl ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DialysisMode {
    /// Hemodialysis.
    HD,
    /// Peritoneal dialysis.
    PD,
    /// Continuous renal replacement therapy.
    CRRT,
}

impl fmt::Display for DialysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DialysisMode::HD => "HD",
            DialysisMode::PD => "PD",
            DialysisMode::CRRT => "CRRT",
        };
        f.write_str(s)
    }
}

impl FromStr for DialysisMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "HD" => Ok(DialysisMode::HD),
            "PD" => Ok(DialysisMode::PD),
            "CRRT" => Ok(DialysisMode::CRRT),
            _ => Err(format!("unknown dialysis mode '{}' (expected HD, PD, or CRRT)", s)),
        }
    }
}

/// Organ-system toxicity classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToxicityCategory {
    General,
    Renal,
    Hepatic,
    Cardiac,
    Neurologic,
    Musculoskeletal,
    Gi,
    Skin,
    Obgyn,
    Hematologic,
    Endocrine,
}

impl fmt::Display for ToxicityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ToxicityCategory::General => "general",
            ToxicityCategory::Renal => "renal",
            ToxicityCategory::Hepatic => "hepatic",
            ToxicityCategory::Cardiac => "cardiac",
            ToxicityCategory::Neurologic => "neurologic",
            ToxicityCategory::Musculoskeletal => "musculoskeletal",
            ToxicityCategory::Gi => "gi",
            ToxicityCategory::Skin => "skin",
            ToxicityCategory::Obgyn => "obgyn",
            ToxicityCategory::Hematologic => "hematologic",
            ToxicityCategory::Endocrine => "endocrine",
        };
        f.write_str(s)
    }
}

/// Empiric recommendation tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmpiricTier {
    /// First-line choice.
    Primary,
    /// Escalation for severe presentation.
    Severe,
    /// Alternative when first-line is unsuitable.
    Alternative,
}

impl fmt::Display for EmpiricTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EmpiricTier::Primary => "primary",
            EmpiricTier::Severe => "severe",
            EmpiricTier::Alternative => "alternative",
        };
        f.write_str(s)
    }
}
