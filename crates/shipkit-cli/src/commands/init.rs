//! Implementation of the `shipkit init` command.
//!
//! Responsibility: resolve answers from flags, config and prompts, call the
//! core detection and scaffold services, and display results. No business
//! logic lives here.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use shipkit_adapters::{BuiltinTemplates, GhCli, LocalFilesystem, SubstitutionRenderer};
use shipkit_core::{
    application::{ScaffoldService, VcsHost},
    domain::{Database, Environment, ProjectProfile, ScaffoldAnswers},
};

use crate::{
    cli::{DatabaseArg, EnvironmentArg, InitArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompt,
};

/// Execute the `shipkit init` command.
///
/// Dispatch sequence:
/// 1. Resolve and validate the project directory
/// 2. Check GitHub authentication (unless `--skip-vcs`)
/// 3. Detect the project archetype and language version
/// 4. Resolve answers from flags, config defaults, or prompts
/// 5. Check the file plan for collisions; early-exit if `--dry-run`
/// 6. Render and write the files
/// 7. Offer branch protection (unless `--skip-vcs`)
#[instrument(skip_all)]
pub fn execute(
    args: InitArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Resolve project directory
    let project_dir = args.path.clone().unwrap_or_else(|| PathBuf::from("."));
    if !project_dir.is_dir() {
        return Err(CliError::InvalidInput {
            message: format!("'{}' is not a directory", project_dir.display()),
            source: None,
        });
    }

    // 2. VCS auth check — fail before any prompts so a missing `gh` session
    //    doesn't waste the user's answers.
    if !args.skip_vcs {
        output.info("Checking GitHub authentication...")?;
        GhCli::new().check_auth()?;
    }

    // 3. Detect the stack
    let profile = super::detector_from(&config).detect(&LocalFilesystem::new(), &project_dir)?;
    output.success(&format!(
        "Detected {} project (version {})",
        profile.archetype().display_name(),
        profile.language_version()
    ))?;

    // 4. Resolve answers
    let assume = args.yes || global.quiet;
    let app_name = resolve_app_name(args.name.clone(), assume)?;
    let database = match database_from_flag_or_config(args.database, &config)? {
        Some(db) => db,
        None if assume => Database::Postgres,
        None => prompt::select_database()?,
    };
    let environment = match environment_from_flag_or_config(args.environment, &config)? {
        Some(env) => env,
        None if assume => Environment::Development,
        None => prompt::select_environment()?,
    };

    let answers = ScaffoldAnswers::new(app_name, database, environment)
        .map_err(|e| CliError::Core(e.into()))?;

    // Fail before writing anything: protection in non-interactive mode has
    // no way to ask for the repository later.
    if args.protect && args.repo.is_none() && assume {
        return Err(CliError::InvalidInput {
            message: "--repo is required with --protect --yes".into(),
            source: None,
        });
    }

    debug!(
        app = %answers.app_name(),
        database = %answers.database(),
        environment = %answers.environment(),
        "answers resolved"
    );

    // 5. Plan, collision check, confirmation, dry-run
    let plan = ScaffoldService::plan(&profile);
    if !args.force {
        for planned in &plan {
            let target = project_dir.join(&planned.output);
            if target.exists() {
                return Err(CliError::OutputExists { path: target });
            }
        }
    }

    if !assume {
        show_configuration(&profile, &answers, &project_dir, &output)?;
        if !prompt::confirm("Generate these files?", true)? {
            return Err(CliError::Cancelled);
        }
    }

    if args.dry_run {
        output.info(&format!(
            "Dry run: would generate {} files in '{}'",
            plan.len(),
            project_dir.display()
        ))?;
        for planned in &plan {
            output.print(&format!("  {}", planned.output.display()))?;
        }
        return Ok(());
    }

    // 6. Scaffold
    let service = ScaffoldService::new(
        Box::new(BuiltinTemplates::new()),
        Box::new(SubstitutionRenderer::new()),
        Box::new(LocalFilesystem::new()),
    );

    output.header(&format!("Scaffolding '{}'...", answers.app_name()))?;
    info!(app = %answers.app_name(), path = %project_dir.display(), "scaffold started");

    let written = service.scaffold(&profile, &answers, &project_dir)?;
    for path in &written {
        output.print(&format!("  {}", path.display()))?;
    }
    output.success(&format!("Generated {} files", written.len()))?;

    // 7. Branch protection
    if !args.skip_vcs {
        protect_branches(&args, &config, assume, &output)?;
    }

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print("  git add . && git commit -m \"Add infrastructure\"")?;
        output.print("  docker compose up --build")?;
    }

    Ok(())
}

// ── Answer resolution ─────────────────────────────────────────────────────────

fn resolve_app_name(flag: Option<String>, assume: bool) -> CliResult<String> {
    match flag {
        Some(name) => Ok(name),
        None if assume => Err(CliError::InvalidInput {
            message: "--name is required with --yes or --quiet".into(),
            source: None,
        }),
        None => prompt::input_app_name(),
    }
}

/// Database from `--database`, falling back to `[defaults]` in the config.
/// `Ok(None)` means undecided — the caller prompts or applies the built-in
/// default.
fn database_from_flag_or_config(
    flag: Option<DatabaseArg>,
    config: &AppConfig,
) -> CliResult<Option<Database>> {
    if let Some(db) = flag {
        return Ok(Some(db.into()));
    }
    match &config.defaults.database {
        Some(raw) => raw
            .parse::<Database>()
            .map(Some)
            .map_err(|e| CliError::ConfigError {
                message: format!("defaults.database: {e}"),
                source: None,
            }),
        None => Ok(None),
    }
}

/// Environment from `--env`, falling back to `[defaults]` in the config.
fn environment_from_flag_or_config(
    flag: Option<EnvironmentArg>,
    config: &AppConfig,
) -> CliResult<Option<Environment>> {
    if let Some(env) = flag {
        return Ok(Some(env.into()));
    }
    match &config.defaults.environment {
        Some(raw) => raw
            .parse::<Environment>()
            .map(Some)
            .map_err(|e| CliError::ConfigError {
                message: format!("defaults.environment: {e}"),
                source: None,
            }),
        None => Ok(None),
    }
}

// ── Branch protection ─────────────────────────────────────────────────────────

/// Apply protection to the configured branches, warning on per-branch
/// failures.  The files are already on disk at this point; a protection
/// failure must not turn the whole run into an error.
fn protect_branches(
    args: &InitArgs,
    config: &AppConfig,
    assume: bool,
    output: &OutputManager,
) -> CliResult<()> {
    let wanted = if args.protect {
        true
    } else if assume {
        false
    } else {
        prompt::confirm("Apply branch protection rules?", false)?
    };
    if !wanted {
        return Ok(());
    }

    let repo = match &args.repo {
        Some(repo) => repo.clone(),
        None => prompt::input_repo()?,
    };

    let vcs = GhCli::new();
    for branch in &config.vcs.protected_branches {
        match vcs.protect_branch(&repo, branch) {
            Ok(()) => output.success(&format!("Protected branch '{branch}'"))?,
            Err(e) => {
                warn!(%repo, branch, error = %e, "branch protection failed");
                output.warning(&format!("Could not protect '{branch}': {e}"))?;
            }
        }
    }
    Ok(())
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_configuration(
    profile: &ProjectProfile,
    answers: &ScaffoldAnswers,
    project_dir: &Path,
    out: &OutputManager,
) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Application:  {}", answers.app_name()))?;
    out.print(&format!(
        "  Archetype:    {}",
        profile.archetype().display_name()
    ))?;
    out.print(&format!("  Version:      {}", profile.language_version()))?;
    out.print(&format!("  Database:     {}", answers.database()))?;
    out.print(&format!("  Environment:  {}", answers.environment()))?;
    out.print(&format!("  Location:     {}", project_dir.display()))?;
    out.print("")?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
