//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use shipkit_core::domain::{Database as CoreDatabase, Environment as CoreEnvironment};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "shipkit",
    bin_name = "shipkit",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f6a2} Infrastructure scaffolding for existing projects",
    long_about = "Shipkit inspects an existing project, detects its stack, and \
                  generates Docker, CI/CD, Terraform and Kubernetes files for it.",
    after_help = "EXAMPLES:\n\
        \x20 shipkit init                         # scaffold the current directory\n\
        \x20 shipkit init ../shop -n shop -y --skip-vcs\n\
        \x20 shipkit detect --format json\n\
        \x20 shipkit completions bash > /usr/share/bash-completion/completions/shipkit",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Detect the project stack and generate infrastructure files.
    #[command(
        visible_alias = "i",
        about = "Scaffold infrastructure for an existing project",
        after_help = "EXAMPLES:\n\
            \x20 shipkit init                                  # interactive, current directory\n\
            \x20 shipkit init -n my-api -d postgres -e production -y\n\
            \x20 shipkit init ../shop --dry-run\n\
            \x20 shipkit init --protect --repo acme/shop"
    )]
    Init(InitArgs),

    /// Report the detected archetype and language version.
    #[command(
        visible_alias = "d",
        about = "Detect the project stack without generating anything",
        after_help = "EXAMPLES:\n\
            \x20 shipkit detect\n\
            \x20 shipkit detect ../shop\n\
            \x20 shipkit detect --format json"
    )]
    Detect(DetectArgs),

    /// Manage the shipkit configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 shipkit config get defaults.database\n\
            \x20 shipkit config list\n\
            \x20 shipkit config path"
    )]
    Config(ConfigCommands),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 shipkit completions bash > ~/.local/share/bash-completion/completions/shipkit\n\
            \x20 shipkit completions zsh  > ~/.zfunc/_shipkit\n\
            \x20 shipkit completions fish > ~/.config/fish/completions/shipkit.fish"
    )]
    Completions(CompletionsArgs),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `shipkit init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Project directory to scaffold.
    #[arg(value_name = "DIR", help = "Project directory (default: current directory)")]
    pub path: Option<PathBuf>,

    /// Application name used in generated files.
    #[arg(
        short = 'n',
        long = "name",
        value_name = "NAME",
        help = "Application name (prompted when omitted)"
    )]
    pub name: Option<String>,

    /// Database for the generated stack.
    #[arg(
        short = 'd',
        long = "database",
        value_name = "DATABASE",
        value_enum,
        help = "Database service to include"
    )]
    pub database: Option<DatabaseArg>,

    /// Target deployment environment.
    #[arg(
        short = 'e',
        long = "env",
        value_name = "ENV",
        value_enum,
        help = "Deployment environment"
    )]
    pub environment: Option<EnvironmentArg>,

    /// Skip all prompts, using flags and config defaults.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip prompts and confirmation (requires --name)"
    )]
    pub yes: bool,

    /// Overwrite files that already exist (destructive).
    #[arg(long = "force", help = "Overwrite existing generated files")]
    pub force: bool,

    /// Preview what would be generated without writing any files.
    #[arg(long = "dry-run", help = "Show the file plan without writing")]
    pub dry_run: bool,

    /// Skip the GitHub authentication check and branch protection.
    #[arg(long = "skip-vcs", help = "Skip GitHub auth check and branch protection")]
    pub skip_vcs: bool,

    /// Apply branch protection without asking.
    #[arg(
        long = "protect",
        conflicts_with = "skip_vcs",
        help = "Apply branch protection rules after generating"
    )]
    pub protect: bool,

    /// Repository to protect, as owner/repo.
    #[arg(
        long = "repo",
        value_name = "OWNER/REPO",
        help = "GitHub repository for branch protection"
    )]
    pub repo: Option<String>,
}

// ── detect ────────────────────────────────────────────────────────────────────

/// Arguments for `shipkit detect`.
#[derive(Debug, Args)]
pub struct DetectArgs {
    /// Project directory to inspect.
    #[arg(value_name = "DIR", help = "Project directory (default: current directory)")]
    pub path: Option<PathBuf>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: DetectFormat,
}

/// Output format for the `detect` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DetectFormat {
    /// Human-readable lines.
    Human,
    /// JSON object.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `shipkit completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `shipkit config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.database`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Database choices accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum DatabaseArg {
    /// Also accepted as `pg`.
    #[value(alias = "pg")]
    Postgres,
    Mysql,
    Sqlite,
    None,
}

impl From<DatabaseArg> for CoreDatabase {
    fn from(value: DatabaseArg) -> Self {
        match value {
            DatabaseArg::Postgres => Self::Postgres,
            DatabaseArg::Mysql => Self::Mysql,
            DatabaseArg::Sqlite => Self::Sqlite,
            DatabaseArg::None => Self::None,
        }
    }
}

/// Deployment environments accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum EnvironmentArg {
    /// Also accepted as `dev`.
    #[value(alias = "dev")]
    Development,
    Staging,
    /// Also accepted as `prod`.
    #[value(alias = "prod")]
    Production,
}

impl From<EnvironmentArg> for CoreEnvironment {
    fn from(value: EnvironmentArg) -> Self {
        match value {
            EnvironmentArg::Development => Self::Development,
            EnvironmentArg::Staging => Self::Staging,
            EnvironmentArg::Production => Self::Production,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_init_command() {
        let cli = Cli::parse_from([
            "shipkit", "init", "-n", "my-api", "-d", "postgres", "-e", "production", "-y",
        ]);
        if let Commands::Init(args) = cli.command {
            assert_eq!(args.name.as_deref(), Some("my-api"));
            assert_eq!(args.database, Some(DatabaseArg::Postgres));
            assert_eq!(args.environment, Some(EnvironmentArg::Production));
            assert!(args.yes);
        } else {
            panic!("expected Init command");
        }
    }

    #[test]
    fn database_pg_alias() {
        let cli = Cli::parse_from(["shipkit", "init", "-d", "pg"]);
        if let Commands::Init(args) = cli.command {
            assert_eq!(args.database, Some(DatabaseArg::Postgres));
        } else {
            panic!("expected Init command");
        }
    }

    #[test]
    fn environment_prod_alias() {
        let cli = Cli::parse_from(["shipkit", "init", "-e", "prod"]);
        if let Commands::Init(args) = cli.command {
            assert_eq!(args.environment, Some(EnvironmentArg::Production));
        } else {
            panic!("expected Init command");
        }
    }

    #[test]
    fn detect_defaults_to_human_format() {
        let cli = Cli::parse_from(["shipkit", "detect"]);
        if let Commands::Detect(args) = cli.command {
            assert!(matches!(args.format, DetectFormat::Human));
            assert!(args.path.is_none());
        } else {
            panic!("expected Detect command");
        }
    }

    #[test]
    fn protect_conflicts_with_skip_vcs() {
        let result = Cli::try_parse_from(["shipkit", "init", "--protect", "--skip-vcs"]);
        assert!(result.is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["shipkit", "--quiet", "--verbose", "detect"]);
        assert!(result.is_err());
    }

    #[test]
    fn database_arg_converts_to_core() {
        assert_eq!(CoreDatabase::from(DatabaseArg::Mysql), CoreDatabase::Mysql);
        assert_eq!(CoreDatabase::from(DatabaseArg::None), CoreDatabase::None);
    }

    #[test]
    fn environment_arg_converts_to_core() {
        assert_eq!(
            CoreEnvironment::from(EnvironmentArg::Staging),
            CoreEnvironment::Staging
        );
    }
}
