//! Empiric command implementation.
//!
//! The `abxref empiric` command lists clinical syndromes or prints the
//! tiered recommendations for one of them.

use crate::catalog::Catalog;
use crate::cli::args::EmpiricArgs;
use crate::error::{AbxError, Result};
use crate::query::empiric::{syndrome_guide, syndrome_names};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The empiric command implementation.
pub struct EmpiricCommand {
    catalog: Catalog,
    args: EmpiricArgs,
}

impl EmpiricCommand {
    /// Create a new empiric command.
    pub fn new(catalog: Catalog, args: EmpiricArgs) -> Self {
        Self { catalog, args }
    }
}

impl Command for EmpiricCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(name) = &self.args.syndrome else {
            let names = syndrome_names(&self.catalog);
            if self.args.json {
                ui.message(&serde_json::to_string_pretty(&names)?);
            } else {
                for name in names {
                    ui.message(name);
                }
            }
            return Ok(CommandResult::success());
        };

        let guide = match syndrome_guide(&self.catalog, name) {
            Ok(guide) => guide,
            Err(AbxError::UnknownSyndrome { name }) => {
                ui.error(&format!("Unknown syndrome: {}", name));
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        if self.args.json {
            ui.message(&serde_json::to_string_pretty(&guide)?);
            return Ok(CommandResult::success());
        }

        ui.show_header(&guide.syndrome);
        for group in &guide.tiers {
            ui.message(&format!("{}:", group.tier));
            for agent in &group.agents {
                if agent.is_addon {
                    let notes = agent.addon_notes.as_deref().unwrap_or("add-on");
                    ui.message(&format!("  + {} ({})", agent.antibiotic, notes));
                } else {
                    ui.message(&format!("  - {}", agent.antibiotic));
                }
            }
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
    fn empiric_without_name_lists_syndromes() {
        let cmd = EmpiricCommand::new(catalog(), EmpiricArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.contains("Biliary Tract Infections"));
    }

    #[test]
    fn empiric_with_name_shows_tiers() {
        let args = EmpiricArgs {
            syndrome: Some("Biliary Tract Infections".to_string()),
            json: false,
        };
        let cmd = EmpiricCommand::new(catalog(), args);
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui.contains("primary"));
        assert!(ui.contains("severe"));
    }

    #[test]
    fn empiric_unknown_syndrome_fails_with_exit_code() {
        let args = EmpiricArgs {
            syndrome: Some("Imaginary Syndrome".to_string()),
            json: false,
        };
        let cmd = EmpiricCommand::new(catalog(), args);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
    }

    #[test]
    fn empiric_json_guide_has_tiers() {
        let args = EmpiricArgs {
            syndrome: Some("Biliary Tract Infections".to_string()),
            json: true,
        };
        let cmd = EmpiricCommand::new(catalog(), args);
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        let body = ui.of_kind("message").join("\n");
        let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert!(!parsed["tiers"].as_array().unwrap().is_empty());
    }
}
