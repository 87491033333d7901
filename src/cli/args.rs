//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Abxref - Antibiotic dosing and coverage reference.
#[derive(Debug, Parser)]
#[command(name = "abxref")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a dataset directory (overrides the built-in reference set)
    #[arg(short, long, global = true, env = "ABXREF_DATASET")]
    pub dataset: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List formulary entries
    List(ListArgs),

    /// Show one antibiotic in full
    Show(ShowArgs),

    /// Look up doses for an antibiotic by renal function
    Dose(DoseArgs),

    /// Find antibiotics covering a set of pathogens
    Coverage(CoverageArgs),

    /// Show empiric recommendations by clinical syndrome
    Empiric(EmpiricArgs),

    /// List pathogen codes
    Pathogens(PathogensArgs),

    /// List CrCl ranges
    Ranges(RangesArgs),

    /// List penetration sites
    Sites(SitesArgs),

    /// List institutions with local coverage overrides
    Institutions(InstitutionsArgs),

    /// Validate a dataset
    Lint(LintArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Filter by category (e.g. carbapenem)
    #[arg(long)]
    pub category: Option<String>,

    /// Filter by agent type: antibacterial, antifungal, antiviral
    #[arg(long, value_name = "TYPE")]
    pub agent_type: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ShowArgs {
    /// Antibiotic name
    pub name: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `dose` command.
#[derive(Debug, Clone, clap::Args)]
pub struct DoseArgs {
    /// Antibiotic name
    pub name: String,

    /// Creatinine clearance in mL/min (omit for normal renal function)
    #[arg(long, value_name = "ML_MIN")]
    pub crcl: Option<f64>,

    /// Dialysis mode: HD, PD, or CRRT (takes precedence over --crcl)
    #[arg(long, value_name = "MODE")]
    pub dialysis: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `coverage` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CoverageArgs {
    /// Pathogen codes that must all be covered (comma-separated)
    #[arg(value_delimiter = ',')]
    pub pathogens: Vec<String>,

    /// Apply one institution's local coverage overrides
    #[arg(long, value_name = "CODE")]
    pub institution: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `empiric` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct EmpiricArgs {
    /// Syndrome name (omit to list all syndromes)
    pub syndrome: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `pathogens` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct PathogensArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `ranges` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RangesArgs {
    /// Resolve a CrCl value to its range instead of listing all
    #[arg(long, value_name = "ML_MIN")]
    pub resolve: Option<f64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `sites` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SitesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `institutions` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InstitutionsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `lint` command.
#[derive(Debug, Clone, clap::Args)]
pub struct LintArgs {
    /// Output format: human, json
    #[arg(long, default_value = "human")]
    pub format: String,
}

impl Default for LintArgs {
    fn default() -> Self {
        Self {
            format: "human".to_string(),
        }
    }
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
