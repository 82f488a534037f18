//! Interactive prompts for `init`.
//!
//! Compiled behind the `interactive` feature (on by default).  Without the
//! feature every function returns [`CliError::FeatureNotAvailable`], so
//! callers can `?` unconditionally and scripted invocations (`--yes` plus
//! flags) keep working in minimal builds.

#[cfg(feature = "interactive")]
mod enabled {
    use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};

    use shipkit_core::domain::{Database, Environment, validate_app_name};

    use crate::error::{CliError, CliResult};

    fn prompt_err(e: dialoguer::Error) -> CliError {
        CliError::PromptFailed {
            message: e.to_string(),
        }
    }

    /// Ask for the application name, validating as the user types.
    pub fn input_app_name() -> CliResult<String> {
        Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Application name")
            .validate_with(|name: &String| validate_app_name(name).map_err(|e| e.to_string()))
            .interact_text()
            .map_err(prompt_err)
    }

    /// Ask which database to include.
    pub fn select_database() -> CliResult<Database> {
        const CHOICES: [Database; 4] = [
            Database::Postgres,
            Database::Mysql,
            Database::Sqlite,
            Database::None,
        ];
        let labels: Vec<&str> = CHOICES.iter().map(Database::as_str).collect();

        let index = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Database")
            .items(&labels)
            .default(0)
            .interact()
            .map_err(prompt_err)?;
        Ok(CHOICES[index])
    }

    /// Ask which environment the manifests should target.
    pub fn select_environment() -> CliResult<Environment> {
        const CHOICES: [Environment; 3] = [
            Environment::Development,
            Environment::Staging,
            Environment::Production,
        ];
        let labels: Vec<&str> = CHOICES.iter().map(Environment::as_str).collect();

        let index = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Environment")
            .items(&labels)
            .default(0)
            .interact()
            .map_err(prompt_err)?;
        Ok(CHOICES[index])
    }

    /// Ask for the GitHub repository to protect.
    pub fn input_repo() -> CliResult<String> {
        Input::with_theme(&ColorfulTheme::default())
            .with_prompt("GitHub repository (owner/repo)")
            .validate_with(|repo: &String| -> Result<(), &str> {
                let mut parts = repo.splitn(2, '/');
                match (parts.next(), parts.next()) {
                    (Some(owner), Some(name)) if !owner.is_empty() && !name.is_empty() => Ok(()),
                    _ => Err("expected owner/repo"),
                }
            })
            .interact_text()
            .map_err(prompt_err)
    }

    /// Yes/no confirmation.
    pub fn confirm(prompt: &str, default: bool) -> CliResult<bool> {
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(prompt_err)
    }
}

#[cfg(feature = "interactive")]
pub use enabled::*;

#[cfg(not(feature = "interactive"))]
mod disabled {
    use shipkit_core::domain::{Database, Environment};

    use crate::error::{CliError, CliResult};

    const UNAVAILABLE: CliError = CliError::FeatureNotAvailable {
        feature: "interactive",
    };

    pub fn input_app_name() -> CliResult<String> {
        Err(UNAVAILABLE)
    }

    pub fn select_database() -> CliResult<Database> {
        Err(UNAVAILABLE)
    }

    pub fn select_environment() -> CliResult<Environment> {
        Err(UNAVAILABLE)
    }

    pub fn input_repo() -> CliResult<String> {
        Err(UNAVAILABLE)
    }

    pub fn confirm(_prompt: &str, _default: bool) -> CliResult<bool> {
        Err(UNAVAILABLE)
    }
}

#[cfg(not(feature = "interactive"))]
pub use disabled::*;
