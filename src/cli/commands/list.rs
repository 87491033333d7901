//! List command implementation.
//!
//! The `abxref list` command lists formulary entries.

use std::str::FromStr;

use crate::catalog::Catalog;
use crate::cli::args::ListArgs;
use crate::dataset::schema::{AgentType, AntibioticRecord, Category};
use crate::error::Result;
use crate::ui::{Table, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    catalog: Catalog,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(catalog: Catalog, args: ListArgs) -> Self {
        Self { catalog, args }
    }

    fn filtered(&self) -> Result<Vec<&AntibioticRecord>> {
        let category = match &self.args.category {
            Some(s) => Some(
                Category::from_str(s)
                    .map_err(|message| crate::error::AbxError::InvalidArgument { message })?,
            ),
            None => None,
        };
        let agent_type = match &self.args.agent_type {
            Some(s) => Some(
                AgentType::from_str(s)
                    .map_err(|message| crate::error::AbxError::InvalidArgument { message })?,
            ),
            None => None,
        };

        Ok(self
            .catalog
            .antibiotics()
            .iter()
            .filter(|ab| category.is_none_or(|c| ab.category == c))
            .filter(|ab| agent_type.is_none_or(|t| ab.agent_type == t))
            .collect())
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let entries = self.filtered()?;

        if self.args.json {
            let names: Vec<serde_json::Value> = entries
                .iter()
                .map(|ab| {
                    serde_json::json!({
                        "name": ab.name,
                        "generic_name": ab.generic_name,
                        "category": ab.category.to_string(),
                        "agent_type": ab.agent_type.to_string(),
                        "generation": ab.generation,
                    })
                })
                .collect();
            ui.message(&serde_json::to_string_pretty(&names)?);
            return Ok(CommandResult::success());
        }

        let mut table = Table::new(vec!["Name", "Category", "Type", "Generation"]);
        for ab in &entries {
            table.add_row(vec![
                &ab.name,
                &ab.category.to_string(),
                &ab.agent_type.to_string(),
                ab.generation.as_deref().unwrap_or("-"),
            ]);
        }
        ui.table(&table);
        ui.message(&format!("{} entries", entries.len()));

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
    fn list_renders_table_with_entry_count() {
        let cmd = ListCommand::new(catalog(), ListArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.contains("Meropenem"));
        assert!(ui.contains("entries"));
    }

    #[test]
    fn list_filters_by_category() {
        let args = ListArgs {
            category: Some("carbapenem".to_string()),
            ..Default::default()
        };
        let cmd = ListCommand::new(catalog(), args);
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui.contains("Meropenem"));
        assert!(!ui.contains("Vancomycin"));
    }

    #[test]
    fn list_filters_by_agent_type() {
        let args = ListArgs {
            agent_type: Some("antifungal".to_string()),
            ..Default::default()
        };
        let cmd = ListCommand::new(catalog(), args);
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui.contains("Fluconazole"));
        assert!(!ui.contains("Meropenem"));
    }

    #[test]
    fn list_rejects_unknown_category() {
        let args = ListArgs {
            category: Some("nonsense".to_string()),
            ..Default::default()
        };
        let cmd = ListCommand::new(catalog(), args);
        let mut ui = MockUI::new();

        assert!(cmd.execute(&mut ui).is_err());
    }

    #[test]
    fn list_json_is_parseable() {
        let args = ListArgs {
            json: true,
            ..Default::default()
        };
        let cmd = ListCommand::new(catalog(), args);
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        let body = ui.of_kind("message").join("\n");
        let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert!(parsed.as_array().unwrap().len() > 1);
    }
}
