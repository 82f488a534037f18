//! GitHub CLI adapter for the `VcsHost` port.
//!
//! shipkit never talks to the GitHub API or handles tokens itself. It shells
//! out to the `gh` CLI and relies on the session the user established with
//! `gh auth login`. Both operations are synchronous, one-shot subprocess
//! invocations with no retries.

use std::process::Command;

use shipkit_core::{
    application::{ApplicationError, ports::VcsHost},
    error::ShipkitResult,
};
use tracing::{debug, info, instrument};

/// Branch-protection settings applied by [`GhCli::protect_branch`]:
/// one approving PR review, strict status checks gated on the generated
/// pipeline job, enforced for admins, no push restrictions.
const PROTECTION_FIELDS: &[&str] = &[
    "required_pull_request_reviews[enabled]=true",
    "required_pull_request_reviews[required_approving_review_count]=1",
    "required_status_checks[strict]=true",
    "required_status_checks[contexts][]=ci/cd-pipeline",
    "enforce_admins=true",
    "restrictions=null",
];

/// GitHub CLI subprocess client.
#[derive(Debug, Clone)]
pub struct GhCli {
    program: String,
}

impl GhCli {
    /// Client invoking `gh` from `PATH`.
    pub fn new() -> Self {
        Self {
            program: "gh".to_string(),
        }
    }

    /// Client invoking a specific executable (tests point this at a stub).
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn spawn_failed(&self, args: &[&str], e: std::io::Error) -> shipkit_core::error::ShipkitError {
        ApplicationError::VcsCommandFailed {
            command: format!("{} {}", self.program, args.join(" ")),
            reason: e.to_string(),
        }
        .into()
    }
}

impl Default for GhCli {
    fn default() -> Self {
        Self::new()
    }
}

impl VcsHost for GhCli {
    /// `gh auth status` — exit 0 means an authenticated session exists.
    #[instrument(skip(self))]
    fn check_auth(&self) -> ShipkitResult<()> {
        let args = ["auth", "status"];
        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|e| self.spawn_failed(&args, e))?;

        if !output.status.success() {
            debug!(status = ?output.status, "gh auth status failed");
            return Err(ApplicationError::VcsNotAuthenticated.into());
        }

        debug!("gh session authenticated");
        Ok(())
    }

    /// `gh api repos/{repo}/branches/{branch}/protection -X PUT …`
    #[instrument(skip(self))]
    fn protect_branch(&self, repo: &str, branch: &str) -> ShipkitResult<()> {
        let endpoint = format!("repos/{repo}/branches/{branch}/protection");

        let mut command = Command::new(&self.program);
        command.args(["api", &endpoint, "-X", "PUT", "--silent"]);
        for field in PROTECTION_FIELDS {
            command.args(["-f", field]);
        }

        let output = command
            .output()
            .map_err(|e| self.spawn_failed(&["api", &endpoint], e))?;

        if !output.status.success() {
            return Err(ApplicationError::BranchProtectionFailed {
                repo: repo.to_string(),
                branch: branch.to_string(),
                reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }

        info!(repo, branch, "branch protection applied");
        Ok(())
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use shipkit_core::error::ShipkitError;

    #[test]
    fn missing_executable_is_command_failure() {
        let client = GhCli::with_program("/definitely/not/gh");
        let err = client.check_auth().unwrap_err();
        assert!(matches!(
            err,
            ShipkitError::Application(ApplicationError::VcsCommandFailed { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn failing_auth_is_not_authenticated() {
        // `false` exits non-zero regardless of arguments, which is exactly
        // what an unauthenticated `gh auth status` does.
        let client = GhCli::with_program("false");
        let err = client.check_auth().unwrap_err();
        assert!(matches!(
            err,
            ShipkitError::Application(ApplicationError::VcsNotAuthenticated)
        ));
    }

    #[cfg(unix)]
    #[test]
    fn successful_commands_pass() {
        let client = GhCli::with_program("true");
        assert!(client.check_auth().is_ok());
        assert!(client.protect_branch("owner/repo", "main").is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn failed_protection_reports_repo_and_branch() {
        let client = GhCli::with_program("false");
        let err = client.protect_branch("owner/repo", "main").unwrap_err();
        assert!(err.to_string().contains("main"));
        assert!(err.to_string().contains("owner/repo"));
    }
}
