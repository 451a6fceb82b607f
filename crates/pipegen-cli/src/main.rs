//! pipegen CLI tool.

use clap::{Args, Parser, Subcommand};
use pipegen_config::GeneratorPaths;
use pipegen_config::paths::{DEFAULT_BLUEPRINT_PATH, DEFAULT_OUTPUT_PATH, DEFAULT_TEMPLATE_ROOT};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "pipegen")]
#[command(about = "Generate CI pipelines from project blueprints", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    generate: GenerateArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the pipeline file (default)
    Generate(GenerateArgs),
    /// Check a blueprint without writing anything
    Validate {
        /// Path to the blueprint file
        #[arg(long, default_value = DEFAULT_BLUEPRINT_PATH)]
        blueprint: PathBuf,
    },
}

#[derive(Args)]
struct GenerateArgs {
    /// Path to the blueprint file
    #[arg(long, default_value = DEFAULT_BLUEPRINT_PATH)]
    blueprint: PathBuf,

    /// Where to write the pipeline definition
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Directory prefix for template include paths
    #[arg(long, default_value = DEFAULT_TEMPLATE_ROOT)]
    template_root: String,
}

impl From<GenerateArgs> for GeneratorPaths {
    fn from(args: GenerateArgs) -> Self {
        Self {
            blueprint: args.blueprint,
            output: args.output,
            template_root: args.template_root,
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only the confirmation line
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Generate(cli.generate)) {
        Commands::Generate(args) => {
            let paths: GeneratorPaths = args.into();
            commands::generate(&paths)?;
        }
        Commands::Validate { blueprint } => {
            commands::validate(&blueprint)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_generates_with_defaults() {
        let cli = Cli::try_parse_from(["pipegen"]).unwrap();

        assert!(cli.command.is_none());
        assert_eq!(GeneratorPaths::from(cli.generate), GeneratorPaths::default());
    }

    #[test]
    fn test_top_level_flags_override_defaults() {
        let cli = Cli::try_parse_from(["pipegen", "--output", "ci.yml"]).unwrap();
        let paths = GeneratorPaths::from(cli.generate);

        assert!(cli.command.is_none());
        assert_eq!(paths.output, PathBuf::from("ci.yml"));
        assert_eq!(paths.blueprint, PathBuf::from(DEFAULT_BLUEPRINT_PATH));
    }

    #[test]
    fn test_validate_subcommand() {
        let cli = Cli::try_parse_from(["pipegen", "validate"]).unwrap();

        match cli.command {
            Some(Commands::Validate { blueprint }) => {
                assert_eq!(blueprint, PathBuf::from(DEFAULT_BLUEPRINT_PATH));
            }
            _ => panic!("expected validate subcommand"),
        }
    }
}
