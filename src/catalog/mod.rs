//! Indexed in-memory catalog built from a validated dataset.
//!
//! The relational store of the reference data becomes explicit ownership
//! here: tables are loaded once, validated, sorted, and indexed by code or
//! name, then passed by shared reference into the query functions. No
//! per-call loading happens anywhere in the query path.

use crate::dataset::schema::{
    AntibioticRecord, CrclRangeRecord, Dataset, InstitutionRecord, PathogenRecord,
    PenetrationSiteRecord, SyndromeRecord,
};
use crate::dataset::validator::validate;
use crate::error::{AbxError, Result};
use std::collections::HashMap;

/// Read-only, indexed view over the reference and formulary tables.
#[derive(Debug)]
pub struct Catalog {
    pathogens: Vec<PathogenRecord>,
    sites: Vec<PenetrationSiteRecord>,
    ranges: Vec<CrclRangeRecord>,
    antibiotics: Vec<AntibioticRecord>,
    syndromes: Vec<SyndromeRecord>,
    institutions: Vec<InstitutionRecord>,

    pathogen_index: HashMap<String, usize>,
    antibiotic_index: HashMap<String, usize>,
    syndrome_index: HashMap<String, usize>,
    institution_index: HashMap<String, usize>,

    /// Index of the open-bottom range (no lower bound), e.g. "<5".
    open_bottom: usize,
    /// Index of the open-top range (no upper bound), e.g. "Normal".
    open_top: usize,
}

impl Catalog {
    /// Validate a dataset and build the indexed catalog from it.
    ///
    /// # Errors
    ///
    /// Returns `DatasetValidationError` listing every invariant violation.
    pub fn new(dataset: Dataset) -> Result<Self> {
        validate(&dataset)?;

        let Dataset {
            mut pathogens,
            mut penetration_sites,
            mut crcl_ranges,
            antibiotics,
            syndromes,
            institutions,
        } = dataset;

        pathogens.sort_by_key(|p| p.sort_order);
        penetration_sites.sort_by_key(|s| s.sort_order);
        crcl_ranges.sort_by_key(|r| r.sort_order);

        let pathogen_index = pathogens
            .iter()
            .enumerate()
            .map(|(i, p)| (p.code.clone(), i))
            .collect();
        let antibiotic_index = antibiotics
            .iter()
            .enumerate()
            .map(|(i, a)| (a.name.clone(), i))
            .collect();
        let syndrome_index = syndromes
            .iter()
            .enumerate()
            .map(|(i, s)| (s.name.clone(), i))
            .collect();
        let institution_index = institutions
            .iter()
            .enumerate()
            .map(|(i, inst)| (inst.code.clone(), i))
            .collect();

        // Guaranteed unique by validation.
        let open_bottom = crcl_ranges
            .iter()
            .position(|r| r.lower_bound.is_none())
            .ok_or_else(|| AbxError::DatasetValidationError {
                message: "no open-bottom CrCl range".to_string(),
            })?;
        let open_top = crcl_ranges
            .iter()
            .position(|r| r.upper_bound.is_none())
            .ok_or_else(|| AbxError::DatasetValidationError {
                message: "no open-top CrCl range".to_string(),
            })?;

        Ok(Self {
            pathogens,
            sites: penetration_sites,
            ranges: crcl_ranges,
            antibiotics,
            syndromes,
            institutions,
            pathogen_index,
            antibiotic_index,
            syndrome_index,
            institution_index,
            open_bottom,
            open_top,
        })
    }

    /// The open-bottom range ("<5"): target of the defensive fallback.
    pub fn open_bottom_range(&self) -> &CrclRangeRecord {
        &self.ranges[self.open_bottom]
    }

    /// The open-top range ("Normal"): default for absent or high CrCl.
    pub fn open_top_range(&self) -> &CrclRangeRecord {
        &self.ranges[self.open_top]
    }

    /// All pathogens in sort order.
    pub fn pathogens(&self) -> &[PathogenRecord] {
        &self.pathogens
    }

    /// Look up a pathogen by code.
    pub fn pathogen(&self, code: &str) -> Option<&PathogenRecord> {
        self.pathogen_index.get(code).map(|&i| &self.pathogens[i])
    }

    /// All penetration sites in sort order.
    pub fn penetration_sites(&self) -> &[PenetrationSiteRecord] {
        &self.sites
    }

    /// All CrCl ranges in ascending partition order.
    pub fn crcl_ranges(&self) -> &[CrclRangeRecord] {
        &self.ranges
    }

    /// All antibiotics in natural (dataset) order.
    pub fn antibiotics(&self) -> &[AntibioticRecord] {
        &self.antibiotics
    }

    /// Look up an antibiotic by its unique name.
    ///
    /// # Errors
    ///
    /// Returns `UnknownAntibiotic` when no entry matches.
    pub fn antibiotic(&self, name: &str) -> Result<&AntibioticRecord> {
        self.antibiotic_index
            .get(name)
            .map(|&i| &self.antibiotics[i])
            .ok_or_else(|| AbxError::UnknownAntibiotic {
                name: name.to_string(),
            })
    }

    /// All empiric syndromes in natural order.
    pub fn syndromes(&self) -> &[SyndromeRecord] {
        &self.syndromes
    }

    /// Look up a syndrome by name.
    ///
    /// # Errors
    ///
    /// Returns `UnknownSyndrome` when no entry matches.
    pub fn syndrome(&self, name: &str) -> Result<&SyndromeRecord> {
        self.syndrome_index
            .get(name)
            .map(|&i| &self.syndromes[i])
            .ok_or_else(|| AbxError::UnknownSyndrome {
                name: name.to_string(),
            })
    }

    /// All institutions in natural order.
    pub fn institutions(&self) -> &[InstitutionRecord] {
        &self.institutions
    }

    /// Look up an institution by code.
    ///
    /// # Errors
    ///
    /// Returns `UnknownInstitution` when no entry matches.
    pub fn institution(&self, code: &str) -> Result<&InstitutionRecord> {
        self.institution_index
            .get(code)
            .map(|&i| &self.institutions[i])
            .ok_or_else(|| AbxError::UnknownInstitution {
                code: code.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::loader::{load_builtin, parse_dataset};
    use std::path::Path;

    fn builtin_catalog() -> Catalog {
        Catalog::new(load_builtin().unwrap()).unwrap()
    }

    #[test]
    fn catalog_builds_from_builtin_dataset() {
        let catalog = builtin_catalog();
        assert!(!catalog.antibiotics().is_empty());
        assert_eq!(catalog.crcl_ranges().len(), 12);
    }

    #[test]
    fn ranges_are_in_ascending_partition_order() {
        let catalog = builtin_catalog();
        let ranges = catalog.crcl_ranges();
        assert_eq!(ranges.first().unwrap().label, "<5");
        assert_eq!(ranges.last().unwrap().label, "Normal");
        for pair in ranges.windows(2) {
            assert!(pair[0].sort_order < pair[1].sort_order);
        }
    }

    #[test]
    fn pathogen_lookup_by_code() {
        let catalog = builtin_catalog();
        let mrsa = catalog.pathogen("MRSA").unwrap();
        assert!(mrsa.name.contains("Methicillin-Resistant"));
        assert!(catalog.pathogen("NOPE").is_none());
    }

    #[test]
    fn antibiotic_lookup_unknown_errors() {
        let catalog = builtin_catalog();
        let result = catalog.antibiotic("Ghostacillin");
        assert!(matches!(result, Err(AbxError::UnknownAntibiotic { .. })));
    }

    #[test]
    fn syndrome_lookup_unknown_errors() {
        let catalog = builtin_catalog();
        let result = catalog.syndrome("Imaginary Syndrome");
        assert!(matches!(result, Err(AbxError::UnknownSyndrome { .. })));
    }

    #[test]
    fn institution_lookup_unknown_errors() {
        let catalog = builtin_catalog();
        let result = catalog.institution("NOPE");
        assert!(matches!(result, Err(AbxError::UnknownInstitution { .. })));
    }

    #[test]
    fn invalid_dataset_is_rejected() {
        let ds = parse_dataset(
            r#"
crcl_ranges:
  - {label: "only", lower_bound: 5, upper_bound: 10, sort_order: 1}
"#,
            Path::new("test.yml"),
        )
        .unwrap();
        assert!(matches!(
            Catalog::new(ds),
            Err(AbxError::DatasetValidationError { .. })
        ));
    }

    #[test]
    fn open_bound_ranges_resolve() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.open_bottom_range().label, "<5");
        assert_eq!(catalog.open_top_range().label, "Normal");
    }

    #[test]
    fn antibiotics_keep_dataset_order() {
        let ds = parse_dataset(
            r#"
crcl_ranges:
  - {label: "<5", upper_bound: 5, sort_order: 1}
  - {label: "Normal", lower_bound: 5, sort_order: 2}
antibiotics:
  - {name: Zeta, category: other}
  - {name: Alpha, category: other}
"#,
            Path::new("test.yml"),
        )
        .unwrap();
        let catalog = Catalog::new(ds).unwrap();
        let names: Vec<_> = catalog.antibiotics().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Zeta", "Alpha"]);
    }
}
