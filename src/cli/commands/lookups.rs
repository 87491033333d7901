//! Reference table commands.
//!
//! The `abxref pathogens`, `ranges`, `sites`, and `institutions`
//! commands print the reference tables a dataset is built on.

use crate::catalog::Catalog;
use crate::cli::args::{InstitutionsArgs, PathogensArgs, RangesArgs, SitesArgs};
use crate::error::Result;
use crate::query::renal::resolve_crcl_range;
use crate::ui::{Table, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The pathogens command implementation.
pub struct PathogensCommand {
    catalog: Catalog,
    args: PathogensArgs,
}

impl PathogensCommand {
    /// Create a new pathogens command.
    pub fn new(catalog: Catalog, args: PathogensArgs) -> Self {
        Self { catalog, args }
    }
}

impl Command for PathogensCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.json {
            ui.message(&serde_json::to_string_pretty(self.catalog.pathogens())?);
            return Ok(CommandResult::success());
        }

        let mut table = Table::new(vec!["Code", "Name", "Type"]);
        for pathogen in self.catalog.pathogens() {
            table.add_row(vec![
                &pathogen.code,
                &pathogen.name,
                &pathogen.pathogen_type.to_string(),
            ]);
        }
        ui.table(&table);

        Ok(CommandResult::success())
    }
}

/// The ranges command implementation.
pub struct RangesCommand {
    catalog: Catalog,
    args: RangesArgs,
}

impl RangesCommand {
    /// Create a new ranges command.
    pub fn new(catalog: Catalog, args: RangesArgs) -> Self {
        Self { catalog, args }
    }
}

impl Command for RangesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if let Some(value) = self.args.resolve {
            let range = resolve_crcl_range(&self.catalog, Some(value));
            if self.args.json {
                ui.message(&serde_json::to_string_pretty(range)?);
            } else {
                ui.key_value(&format!("{} mL/min", value), &range.label);
            }
            return Ok(CommandResult::success());
        }

        if self.args.json {
            ui.message(&serde_json::to_string_pretty(self.catalog.crcl_ranges())?);
            return Ok(CommandResult::success());
        }

        let mut table = Table::new(vec!["Label", "Lower", "Upper"]);
        for range in self.catalog.crcl_ranges() {
            let lower = range
                .lower_bound
                .map(|v| v.to_string())
                .unwrap_or_else(|| "-".to_string());
            let upper = range
                .upper_bound
                .map(|v| v.to_string())
                .unwrap_or_else(|| "-".to_string());
            table.add_row(vec![&range.label, &lower, &upper]);
        }
        ui.table(&table);

        Ok(CommandResult::success())
    }
}

/// The sites command implementation.
pub struct SitesCommand {
    catalog: Catalog,
    args: SitesArgs,
}

impl SitesCommand {
    /// Create a new sites command.
    pub fn new(catalog: Catalog, args: SitesArgs) -> Self {
        Self { catalog, args }
    }
}

impl Command for SitesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.json {
            ui.message(&serde_json::to_string_pretty(self.catalog.penetration_sites())?);
            return Ok(CommandResult::success());
        }

        let mut table = Table::new(vec!["Code", "Name"]);
        for site in self.catalog.penetration_sites() {
            table.add_row(vec![&site.code, &site.name]);
        }
        ui.table(&table);

        Ok(CommandResult::success())
    }
}

/// The institutions command implementation.
pub struct InstitutionsCommand {
    catalog: Catalog,
    args: InstitutionsArgs,
}

impl InstitutionsCommand {
    /// Create a new institutions command.
    pub fn new(catalog: Catalog, args: InstitutionsArgs) -> Self {
        Self { catalog, args }
    }
}

impl Command for InstitutionsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.json {
            ui.message(&serde_json::to_string_pretty(self.catalog.institutions())?);
            return Ok(CommandResult::success());
        }

        let mut table = Table::new(vec!["Code", "Name", "Overrides"]);
        for institution in self.catalog.institutions() {
            table.add_row(vec![
                &institution.code,
                &institution.name,
                &institution.overrides.len().to_string(),
            ]);
        }
        ui.table(&table);

        Ok(CommandResult::success())
    }
}
