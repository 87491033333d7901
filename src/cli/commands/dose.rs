//! Dose command implementation.
//!
//! The `abxref dose` command resolves a CrCl value (or dialysis mode)
//! and prints the matching doses for one antibiotic.

use std::str::FromStr;

use crate::catalog::Catalog;
use crate::cli::args::DoseArgs;
use crate::dataset::schema::DialysisMode;
use crate::error::{AbxError, Result};
use crate::query::dosing::{dosage_for, RenalSelection};
use crate::ui::{Table, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The dose command implementation.
pub struct DoseCommand {
    catalog: Catalog,
    args: DoseArgs,
}

impl DoseCommand {
    /// Create a new dose command.
    pub fn new(catalog: Catalog, args: DoseArgs) -> Self {
        Self { catalog, args }
    }
}

impl Command for DoseCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let dialysis = match &self.args.dialysis {
            Some(s) => Some(
                DialysisMode::from_str(s)
                    .map_err(|message| AbxError::InvalidArgument { message })?,
            ),
            None => None,
        };

        let report = match dosage_for(&self.catalog, &self.args.name, self.args.crcl, dialysis) {
            Ok(report) => report,
            Err(AbxError::UnknownAntibiotic { name }) => {
                ui.error(&format!("Unknown antibiotic: {}", name));
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        if self.args.json {
            ui.message(&serde_json::to_string_pretty(&report)?);
            return Ok(CommandResult::success());
        }

        ui.show_header(&report.antibiotic);
        match &report.selection {
            RenalSelection::Range { label } => {
                match report.crcl {
                    Some(v) => ui.key_value("CrCl", &format!("{} mL/min ({})", v, label)),
                    None => ui.key_value("CrCl", &format!("not given ({})", label)),
                }

                if report.regimens.is_empty() {
                    ui.warning("No dose recorded for this range");
                    return Ok(CommandResult::success());
                }

                for regimen in &report.regimens {
                    let descriptor = regimen.dose_descriptor.as_deref().unwrap_or("Regimen");
                    let marker = if regimen.is_preferred { " (preferred)" } else { "" };
                    ui.message(&format!("{} [{}]{}", descriptor, regimen.route, marker));
                    ui.key_value("Dose", &regimen.dose.dose_text);
                    if regimen.dose.is_sequential {
                        for (i, step) in regimen.dose.steps.iter().enumerate() {
                            ui.message(&format!("  {}. {}", i + 1, step.step_text));
                        }
                    }
                    if let Some(duration) = &regimen.fixed_duration {
                        ui.key_value("Duration", duration);
                    }
                    if let Some(prep) = &regimen.preparation_instructions {
                        ui.key_value("Preparation", prep);
                    }
                }
            }
            RenalSelection::Dialysis { mode } => {
                ui.key_value("Dialysis", &mode.to_string());

                if report.dialysis.is_empty() {
                    ui.warning("No dose recorded for this dialysis mode");
                    return Ok(CommandResult::success());
                }

                let mut table = Table::new(vec!["Route", "Dose", "Notes"]);
                for entry in &report.dialysis {
                    table.add_row(vec![
                        &entry.route.to_string(),
                        &entry.dose_text,
                        entry.notes.as_deref().unwrap_or("-"),
                    ]);
                }
                ui.table(&table);
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

    fn args(name: &str, crcl: Option<f64>, dialysis: Option<&str>) -> DoseArgs {
        DoseArgs {
            name: name.to_string(),
            crcl,
            dialysis: dialysis.map(|s| s.to_string()),
            json: false,
        }
    }

    #[test]
    fn dose_without_crcl_resolves_to_normal() {
        let cmd = DoseCommand::new(catalog(), args("Meropenem", None, None));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.contains("Normal"));
    }

    #[test]
    fn dose_with_impaired_crcl_shows_range_label() {
        let cmd = DoseCommand::new(catalog(), args("Meropenem", Some(35.0), None));
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui.contains("30~40"));
    }

    #[test]
    fn dose_with_dialysis_mode_ignores_crcl() {
        let cmd = DoseCommand::new(catalog(), args("Meropenem", Some(95.0), Some("hd")));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.contains("HD"));
        assert!(!ui.contains("Normal"));
    }

    #[test]
    fn dose_rejects_invalid_dialysis_mode() {
        let cmd = DoseCommand::new(catalog(), args("Meropenem", None, Some("XX")));
        let mut ui = MockUI::new();

        assert!(cmd.execute(&mut ui).is_err());
    }

    #[test]
    fn dose_unknown_antibiotic_fails_with_exit_code() {
        let cmd = DoseCommand::new(catalog(), args("Nonexistomycin", None, None));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
    }

    #[test]
    fn dose_json_includes_selection() {
        let mut a = args("Meropenem", Some(55.0), None);
        a.json = true;
        let cmd = DoseCommand::new(catalog(), a);
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        let body = ui.of_kind("message").join("\n");
        let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed["selection"]["label"], "50~60");
    }
}
