//! Show command implementation.
//!
//! The `abxref show` command prints one antibiotic in full: coverage,
//! penetration, toxicities, notes, and all regimens with their doses.

use crate::catalog::Catalog;
use crate::cli::args::ShowArgs;
use crate::error::{AbxError, Result};
use crate::ui::{Table, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The show command implementation.
pub struct ShowCommand {
    catalog: Catalog,
    args: ShowArgs,
}

impl ShowCommand {
    /// Create a new show command.
    pub fn new(catalog: Catalog, args: ShowArgs) -> Self {
        Self { catalog, args }
    }
}

impl Command for ShowCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ab = match self.catalog.antibiotic(&self.args.name) {
            Ok(ab) => ab,
            Err(AbxError::UnknownAntibiotic { name }) => {
                ui.error(&format!("Unknown antibiotic: {}", name));
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        if self.args.json {
            ui.message(&serde_json::to_string_pretty(ab)?);
            return Ok(CommandResult::success());
        }

        ui.show_header(&ab.name);
        if let Some(generic) = &ab.generic_name {
            ui.key_value("Generic", generic);
        }
        ui.key_value("Category", &ab.category.to_string());
        ui.key_value("Type", &ab.agent_type.to_string());
        if let Some(generation) = &ab.generation {
            ui.key_value("Generation", generation);
        }

        let covered: Vec<&str> = self
            .catalog
            .pathogens()
            .iter()
            .filter(|p| ab.coverage.get(&p.code) == Some(&true))
            .map(|p| p.code.as_str())
            .collect();
        if !covered.is_empty() {
            ui.key_value("Covers", &covered.join(", "));
        }
        if !ab.penetration.is_empty() {
            ui.key_value("Penetrates", &ab.penetration.join(", "));
        }

        if !ab.regimens.is_empty() {
            ui.message("");
            let mut regimens: Vec<_> = ab.regimens.iter().collect();
            regimens.sort_by_key(|r| r.sort_order);
            for regimen in regimens {
                let descriptor = regimen.dose_descriptor.as_deref().unwrap_or("Regimen");
                let marker = if regimen.is_preferred { " (preferred)" } else { "" };
                ui.message(&format!("{} [{}]{}", descriptor, regimen.route, marker));
                if let Some(indication) = &regimen.indication {
                    ui.key_value("Indication", indication);
                }

                let mut table = Table::new(vec!["CrCl range", "Dose"]);
                for dose in &regimen.doses {
                    table.add_row(vec![&dose.range, &dose.dose_text]);
                }
                for dialysis in &regimen.dialysis {
                    table.add_row(vec![&dialysis.mode.to_string(), &dialysis.dose_text]);
                }
                if !table.is_empty() {
                    ui.table(&table);
                }
            }
        }

        for toxicity in &ab.toxicities {
            ui.warning(&format!("{}: {}", toxicity.category, toxicity.description));
        }
        for note in &ab.notes {
            ui.message(&format!("[{}] {}", note.note_type, note.content));
        }

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

    #[test]
    fn show_renders_known_antibiotic() {
        let args = ShowArgs {
            name: "Meropenem".to_string(),
            json: false,
        };
        let cmd = ShowCommand::new(catalog(), args);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.contains("Meropenem"));
        assert!(ui.contains("carbapenem"));
    }

    #[test]
    fn show_unknown_antibiotic_fails_with_exit_code() {
        let args = ShowArgs {
            name: "Nonexistomycin".to_string(),
            json: false,
        };
        let cmd = ShowCommand::new(catalog(), args);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
        assert!(ui.contains("Unknown antibiotic"));
    }

    #[test]
    fn show_json_round_trips() {
        let args = ShowArgs {
            name: "Meropenem".to_string(),
            json: true,
        };
        let cmd = ShowCommand::new(catalog(), args);
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        let body = ui.of_kind("message").join("\n");
        let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed["name"], "Meropenem");
    }
}
