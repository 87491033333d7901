//! Lint command implementation.
//!
//! The `abxref lint` command validates a dataset and reports every
//! violation, not just the first.

use std::path::PathBuf;

use crate::cli::args::LintArgs;
use crate::dataset::loader::load_dataset;
use crate::dataset::validator::validate_dataset;
use crate::error::{AbxError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The lint command implementation.
pub struct LintCommand {
    dataset: Option<PathBuf>,
    args: LintArgs,
}

impl LintCommand {
    /// Create a new lint command.
    pub fn new(dataset: Option<PathBuf>, args: LintArgs) -> Self {
        Self { dataset, args }
    }
}

impl Command for LintCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let dataset = load_dataset(self.dataset.as_deref())?;
        let errors = validate_dataset(&dataset);

        match self.args.format.as_str() {
            "json" => {
                ui.message(&serde_json::to_string_pretty(&errors)?);
            }
            "human" => {
                for error in &errors {
                    match &error.antibiotic {
                        Some(name) => {
                            ui.error(&format!("[{}] {}: {}", error.rule, name, error.message))
                        }
                        None => ui.error(&format!("[{}] {}", error.rule, error.message)),
                    }
                }
                if errors.is_empty() {
                    ui.success("Dataset valid");
                } else {
                    ui.message(&format!("{} errors", errors.len()));
                }
            }
            other => {
                return Err(AbxError::InvalidArgument {
                    message: format!("unknown lint format '{}' (expected human or json)", other),
                });
            }
        }

        if errors.is_empty() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn lint_builtin_dataset_passes() {
        let cmd = LintCommand::new(None, LintArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.contains("Dataset valid"));
    }

    #[test]
    fn lint_reports_range_gap() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("bad.yml"),
            r#"
crcl_ranges:
  - {label: "<10", upper_bound: 10, sort_order: 1}
  - {label: "Normal", lower_bound: 20, sort_order: 2}
"#,
        )
        .unwrap();

        let cmd = LintCommand::new(Some(temp.path().to_path_buf()), LintArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
        assert!(ui.contains("range-gap"));
    }

    #[test]
    fn lint_json_format_is_parseable() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("bad.yml"),
            r#"
crcl_ranges:
  - {label: "<10", upper_bound: 10, sort_order: 1}
  - {label: "Normal", lower_bound: 20, sort_order: 2}
"#,
        )
        .unwrap();

        let args = LintArgs {
            format: "json".to_string(),
        };
        let cmd = LintCommand::new(Some(temp.path().to_path_buf()), args);
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        let body = ui.of_kind("message").join("\n");
        let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert!(!parsed.as_array().unwrap().is_empty());
    }

    #[test]
    fn lint_rejects_unknown_format() {
        let args = LintArgs {
            format: "sarif".to_string(),
        };
        let cmd = LintCommand::new(None, args);
        let mut ui = MockUI::new();

        assert!(cmd.execute(&mut ui).is_err());
    }
}
