//! Coverage command implementation.
//!
//! The `abxref coverage` command finds antibiotics covering every
//! requested pathogen code.

use crate::catalog::Catalog;
use crate::cli::args::CoverageArgs;
use crate::error::{AbxError, Result};
use crate::query::coverage::match_by_coverage;
use crate::ui::{Table, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The coverage command implementation.
pub struct CoverageCommand {
    catalog: Catalog,
    args: CoverageArgs,
}

impl CoverageCommand {
    /// Create a new coverage command.
    pub fn new(catalog: Catalog, args: CoverageArgs) -> Self {
        Self { catalog, args }
    }
}

impl Command for CoverageCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let matches = match match_by_coverage(
            &self.catalog,
            &self.args.pathogens,
            self.args.institution.as_deref(),
        ) {
            Ok(matches) => matches,
            Err(AbxError::UnknownPathogenCode { codes }) => {
                ui.error(&format!("Unknown pathogen codes: {}", codes.join(", ")));
                return Ok(CommandResult::failure(2));
            }
            Err(AbxError::UnknownInstitution { code }) => {
                ui.error(&format!("Unknown institution: {}", code));
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        if self.args.json {
            ui.message(&serde_json::to_string_pretty(&matches)?);
            return Ok(CommandResult::success());
        }

        if matches.is_empty() {
            ui.warning("No antibiotic covers all requested pathogens");
            return Ok(CommandResult::success());
        }

        let mut table = Table::new(vec!["Name", "Category", "Covers", "Penetrates"]);
        for entry in &matches {
            table.add_row(vec![
                &entry.name,
                &entry.category.to_string(),
                &entry.covered_pathogens.join(", "),
                &entry.penetration_sites.join(", "),
            ]);
        }
        ui.table(&table);
        ui.message(&format!("{} matches", matches.len()));

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::loader::load_builtin;
    use crate::ui::MockUI;

    fn catalog() -> Catalog {
        Catalog::new(load_builtin().unwrap()).unwrap()
    }

    fn args(pathogens: &[&str]) -> CoverageArgs {
        CoverageArgs {
            pathogens: pathogens.iter().map(|s| s.to_string()).collect(),
            institution: None,
            json: false,
        }
    }

    #[test]
    fn coverage_finds_mrsa_agents() {
        let cmd = CoverageCommand::new(catalog(), args(&["MRSA"]));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.contains("Vancomycin"));
        assert!(!ui.contains("Meropenem"));
    }

    #[test]
    fn coverage_conjunctive_narrowing() {
        let cmd = CoverageCommand::new(catalog(), args(&["ESBL", "Anae"]));
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui.contains("Meropenem"));
        assert!(!ui.contains("Ceftriaxone"));
    }

    #[test]
    fn coverage_unknown_codes_fail_with_exit_code() {
        let cmd = CoverageCommand::new(catalog(), args(&["XYZ", "MRSA", "ZZZ"]));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
        assert!(ui.contains("XYZ, ZZZ"));
    }

    #[test]
    fn coverage_empty_requirement_lists_everything() {
        let cmd = CoverageCommand::new(catalog(), args(&[]));
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui.contains("Meropenem"));
        assert!(ui.contains("Vancomycin"));
    }

    #[test]
    fn coverage_json_is_parseable() {
        let mut a = args(&["MRSA"]);
        a.json = true;
        let cmd = CoverageCommand::new(catalog(), a);
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        let body = ui.of_kind("message").join("\n");
        let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert!(parsed.as_array().unwrap().iter().any(|e| e["name"] == "Vancomycin"));
    }
}
