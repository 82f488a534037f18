//! Application layer errors.
//!
//! These errors represent failures in orchestration and in the outside world
//! reached through ports — not business logic. Business logic errors are
//! `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// No template exists at the requested catalog path.
    #[error("Template not found: {path}")]
    TemplateNotFound { path: String },

    /// Template rendering failed.
    #[error("Template rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// The VCS host CLI is present but the session is not authenticated.
    #[error("VCS host is not authenticated")]
    VcsNotAuthenticated,

    /// The VCS host CLI could not be invoked at all.
    #[error("VCS command failed: {command}")]
    VcsCommandFailed { command: String, reason: String },

    /// The host rejected a branch-protection request.
    #[error("Failed to protect branch '{branch}' on '{repo}': {reason}")]
    BranchProtectionFailed {
        repo: String,
        branch: String,
        reason: String,
    },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::TemplateNotFound { path } => vec![
                format!("No built-in template at '{}'", path),
                "This is likely a bug in shipkit — please report it".into(),
            ],
            Self::RenderingFailed { reason } => vec![
                format!("Rendering failed: {}", reason),
                "Check the template variables above".into(),
            ],
            Self::VcsNotAuthenticated => vec![
                "The GitHub CLI is not authenticated".into(),
                "Run: gh auth login".into(),
                "Or skip VCS integration with --skip-vcs".into(),
            ],
            Self::VcsCommandFailed { command, .. } => vec![
                format!("Could not run: {}", command),
                "Ensure the GitHub CLI ('gh') is installed and in your PATH".into(),
                "Or skip VCS integration with --skip-vcs".into(),
            ],
            Self::BranchProtectionFailed { repo, branch, .. } => vec![
                format!("Branch '{}' on '{}' was not protected", branch, repo),
                "Check that the repository exists and you have admin access".into(),
                "Protection can be applied later from the repository settings".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Filesystem { .. } | Self::RenderingFailed { .. } => ErrorCategory::Internal,
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::VcsNotAuthenticated => ErrorCategory::Configuration,
            Self::VcsCommandFailed { .. } => ErrorCategory::Configuration,
            Self::BranchProtectionFailed { .. } => ErrorCategory::Internal,
        }
    }
}
