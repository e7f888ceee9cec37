use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

use crate::catalog;
use crate::config::BuilderConfig;
use crate::error::{BuilderError, Result};
use crate::generator::{self, GeneratorConfig};
use crate::selection::SelectionRecord;
use crate::types::{Category, JoinMode};

/// Syllabus Builder - assemble an AI-use statement for a course syllabus
#[derive(Parser, Debug)]
#[command(name = "syllabus-builder")]
#[command(about = "Build an AI-use policy statement for a course syllabus")]
#[command(version)]
pub struct Cli {
    /// Path to a JSON configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Write logs to this file (recommended while the interactive wizard runs)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive step-by-step wizard
    Build {
        /// Write the final statement to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Generate a statement without the wizard, from option numbers
    Generate(GenerateArgs),
    /// List the numbered options of every category
    Options {
        /// Only list this category (e.g. general-policy, applied-tools)
        #[arg(short, long)]
        category: Option<Category>,
    },
    /// Write the default configuration to a file
    InitConfig {
        /// Destination path
        path: PathBuf,
    },
}

/// Option numbers are 1-based, as printed by `options`.
#[derive(clap::Args, Debug, Default, Clone)]
pub struct GenerateArgs {
    /// General policy option number
    #[arg(long)]
    pub policy: Option<usize>,

    /// Applied tool option number (repeatable; a repeat toggles it off again)
    #[arg(long = "tool")]
    pub tools: Vec<usize>,

    /// Condition option number (repeatable; a repeat toggles it off again)
    #[arg(long = "condition")]
    pub conditions: Vec<usize>,

    /// Required process option number (repeatable; a repeat toggles it off again)
    #[arg(long = "process")]
    pub processes: Vec<usize>,

    /// Rationale option number
    #[arg(long)]
    pub rationale: Option<usize>,

    /// Consequences option number
    #[arg(long)]
    pub consequences: Option<usize>,

    /// Support resources option number
    #[arg(long)]
    pub support: Option<usize>,

    /// Additional position statement option number
    #[arg(long)]
    pub position: Option<usize>,

    /// Joining mode (overrides the config file)
    #[arg(short, long)]
    pub mode: Option<JoinMode>,

    /// Separator between checked items (overrides the config file)
    #[arg(short, long)]
    pub separator: Option<String>,

    /// Print the selections and the statement as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Resolve a 1-based option number to its catalog text
fn resolve_option(category: Category, number: usize) -> Result<&'static str> {
    catalog::option_by_number(category, number).ok_or_else(|| {
        BuilderError::validation(format!(
            "{} has no option {} (valid: 1-{}; run `syllabus-builder options` to list them)",
            category,
            number,
            catalog::options(category).len()
        ))
    })
}

impl GenerateArgs {
    /// Build the selection record the flags describe.
    ///
    /// Single-choice flags set the value; multi-choice flags are applied as
    /// toggles in the order given.
    pub fn selections(&self) -> Result<SelectionRecord> {
        let mut record = SelectionRecord::new();

        let singles = [
            (Category::GeneralPolicy, self.policy),
            (Category::Rationale, self.rationale),
            (Category::Consequences, self.consequences),
            (Category::Support, self.support),
            (Category::PositionStatement, self.position),
        ];
        for (category, number) in singles {
            if let Some(number) = number {
                record.set_single(category, resolve_option(category, number)?);
            }
        }

        let multis = [
            (Category::AppliedTools, &self.tools),
            (Category::Conditions, &self.conditions),
            (Category::Processes, &self.processes),
        ];
        for (category, numbers) in multis {
            for &number in numbers {
                record.toggle_multi(category, resolve_option(category, number)?);
            }
        }

        Ok(record)
    }

    /// Generator settings: config file values overridden by flags.
    ///
    /// The merged settings are validated, so a flag cannot sneak in a value
    /// the config file would be refused for.
    pub fn generator_config(&self, base: &BuilderConfig) -> Result<GeneratorConfig> {
        let mut config = base.generator();
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(ref separator) = self.separator {
            config.separator = separator.clone();
        }
        config.validate()?;
        Ok(config)
    }

    /// Resolve the flags and generate the statement
    pub fn build(&self, base: &BuilderConfig) -> Result<GenerateOutput> {
        let selections = self.selections()?;
        let config = self.generator_config(base)?;
        let statement = generator::generate(&selections, &config);
        Ok(GenerateOutput {
            selections,
            mode: config.mode,
            statement,
        })
    }
}

/// Result of the `generate` command; `--json` prints it as is
#[derive(Debug, Clone, Serialize)]
pub struct GenerateOutput {
    pub selections: SelectionRecord,
    pub mode: JoinMode,
    pub statement: String,
}

impl GenerateOutput {
    /// Pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["syllabus-builder"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_generate_args() {
        let cli = Cli::try_parse_from([
            "syllabus-builder",
            "generate",
            "--policy",
            "2",
            "--tool",
            "1",
            "--tool",
            "3",
            "--mode",
            "strict",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Generate(args)) => {
                assert_eq!(args.policy, Some(2));
                assert_eq!(args.tools, vec![1, 3]);
                assert_eq!(args.mode, Some(JoinMode::Strict));
                assert!(!args.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_selections_from_numbers() {
        let args = GenerateArgs {
            policy: Some(4),
            tools: vec![3, 1],
            ..Default::default()
        };
        let record = args.selections().unwrap();
        assert_eq!(
            record.single(Category::GeneralPolicy),
            Some("Students are never allowed to use AI tools.")
        );
        let tools = record.multi(Category::AppliedTools).unwrap();
        assert_eq!(tools.len(), 2);
        assert!(tools[0].starts_with("AI code generators"));
        assert!(tools[1].starts_with("AI chatbots"));
    }

    #[test]
    fn test_repeated_tool_toggles_off() {
        let args = GenerateArgs {
            tools: vec![2, 2],
            ..Default::default()
        };
        let record = args.selections().unwrap();
        assert!(record.is_category_empty(Category::AppliedTools));
    }

    #[test]
    fn test_out_of_range_number_is_rejected() {
        let args = GenerateArgs {
            support: Some(3),
            ..Default::default()
        };
        let err = args.selections().unwrap_err();
        assert!(matches!(err, BuilderError::Validation(_)));
        assert!(err.to_string().contains("valid: 1-2"));
    }

    #[test]
    fn test_flags_override_config() {
        let args = GenerateArgs {
            mode: Some(JoinMode::Strict),
            ..Default::default()
        };
        let config = args.generator_config(&BuilderConfig::default()).unwrap();
        assert_eq!(config.mode, JoinMode::Strict);
        assert_eq!(config.separator, "; ");
    }

    #[test]
    fn test_empty_separator_flag_is_rejected() {
        let args = GenerateArgs {
            tools: vec![1, 3],
            separator: Some(String::new()),
            ..Default::default()
        };
        let err = args.generator_config(&BuilderConfig::default()).unwrap_err();
        assert!(matches!(err, BuilderError::Validation(_)));
        assert!(err.to_string().contains("Separator must not be empty"));
        assert!(args.build(&BuilderConfig::default()).is_err());
    }

    #[test]
    fn test_build_json_shape() {
        let args = GenerateArgs {
            policy: Some(4),
            tools: vec![3, 1],
            ..Default::default()
        };
        let output = args.build(&BuilderConfig::default()).unwrap();
        assert!(output.statement.starts_with("General policy about AI use in this course:"));

        let json: serde_json::Value = serde_json::from_str(&output.to_json().unwrap()).unwrap();
        assert_eq!(json["mode"], "normalized");
        assert_eq!(json["statement"], output.statement.as_str());
        assert_eq!(
            json["selections"]["generalPolicy"],
            "Students are never allowed to use AI tools."
        );
        let tools = json["selections"]["appliedTools"].as_array().unwrap();
        assert_eq!(tools.len(), 2);
        assert!(tools[0].as_str().unwrap().starts_with("AI code generators"));
        assert_eq!(json["selections"]["positionStatement"], "");
        assert!(json["selections"].get("applied_tools").is_none());
    }

    #[test]
    fn test_options_category_parses() {
        let cli =
            Cli::try_parse_from(["syllabus-builder", "options", "--category", "applied-tools"])
                .unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Options {
                category: Some(Category::AppliedTools)
            })
        ));
    }

    #[test]
    fn test_global_config_flag() {
        let cli =
            Cli::try_parse_from(["syllabus-builder", "build", "--config", "cfg.json"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("cfg.json")));
    }
}
