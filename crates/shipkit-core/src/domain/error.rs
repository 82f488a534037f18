//! Domain errors: violations of detection and answer rules.
//!
//! All errors are:
//! - Cloneable (cheap to pass through layers)
//! - Categorizable (for CLI display)
//! - Actionable (provide suggestions)

use std::path::PathBuf;
use thiserror::Error;

/// Root domain error type.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid archetype: {0}")]
    InvalidArchetype(String),

    #[error("Invalid application name '{name}': {reason}")]
    InvalidAppName { name: String, reason: String },

    #[error("Invalid answer: {0}")]
    InvalidAnswer(String),

    // ========================================================================
    // Constraint Errors
    // ========================================================================
    #[error("Invalid version constraint '{constraint}': {reason}")]
    InvalidConstraint { constraint: String, reason: String },

    #[error("no known runtime version satisfies '{constraint}'")]
    NoCompatibleVersion { constraint: String },

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("could not determine project type at {}", path.display())]
    UnrecognizedProject { path: PathBuf },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidArchetype(name) => vec![
                format!("'{}' is not a recognized archetype", name),
                "Known archetypes: php_laravel, java_spring_boot, python_fastapi, nodejs_nextjs"
                    .into(),
            ],
            Self::InvalidAppName { name, reason } => vec![
                format!("Application name '{}' is invalid: {}", name, reason),
                "Use short, lowercase names: letters, digits, hyphens, underscores".into(),
                "Examples: my-api, billing_worker, web3".into(),
            ],
            Self::UnrecognizedProject { path } => vec![
                format!("No recognized project markers found in {}", path.display()),
                "shipkit looks for: composer.json + artisan (Laravel), pom.xml or \
                 build.gradle (Spring Boot), requirements.txt with fastapi (FastAPI), \
                 package.json with \"next\" (Next.js)"
                    .into(),
                "Run shipkit from the project root, or pass --path".into(),
            ],
            Self::InvalidConstraint { constraint, .. } => vec![
                format!("The version requirement '{}' could not be parsed", constraint),
                "Check the \"php\" entry in composer.json's require section".into(),
            ],
            Self::NoCompatibleVersion { constraint } => vec![
                format!("No known runtime satisfies '{}'", constraint),
                "The project will fall back to the default runtime version".into(),
            ],
            Self::InvalidAnswer(msg) => vec![
                format!("Details: {}", msg),
                "Use --help to see accepted values".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidArchetype(_) | Self::InvalidAppName { .. } | Self::InvalidAnswer(_) => {
                ErrorCategory::Validation
            }
            Self::UnrecognizedProject { .. } => ErrorCategory::NotFound,
            Self::InvalidConstraint { .. } | Self::NoCompatibleVersion { .. } => {
                ErrorCategory::Validation
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
