//! User answers and the render context built from them.
//!
//! `Database` and `Environment` are pure value types in the same mold as
//! [`crate::domain::Archetype`]: `Copy`, string conversions, `FromStr`
//! parsers with the common aliases. `ScaffoldAnswers` validates the
//! application name on construction so the scaffold service never sees a bad
//! one.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{archetype::ProjectProfile, error::DomainError};

// ── Database ─────────────────────────────────────────────────────────────────

/// Database choice for the generated stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    Postgres,
    Mysql,
    Sqlite,
    /// No database service in the generated stack.
    None,
}

impl Database {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::Mysql => "mysql",
            Self::Sqlite => "sqlite",
            Self::None => "none",
        }
    }

    /// Container image used in the compose template.
    pub const fn image(&self) -> &'static str {
        match self {
            Self::Postgres => "postgres:16-alpine",
            Self::Mysql => "mysql:8.4",
            // sqlite is file-backed and "none" needs no service; the compose
            // template still wants a value, so fall back to a no-op image.
            Self::Sqlite | Self::None => "alpine:3.20",
        }
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Database {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(Self::Postgres),
            "mysql" | "mariadb" => Ok(Self::Mysql),
            "sqlite" => Ok(Self::Sqlite),
            "none" => Ok(Self::None),
            other => Err(DomainError::InvalidAnswer(format!(
                "unknown database: {other}"
            ))),
        }
    }
}

// ── Environment ──────────────────────────────────────────────────────────────

/// Deployment environment the generated manifests target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Environment {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Staging => "staging",
            Self::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "staging" | "stage" => Ok(Self::Staging),
            "production" | "prod" => Ok(Self::Production),
            other => Err(DomainError::InvalidAnswer(format!(
                "unknown environment: {other}"
            ))),
        }
    }
}

// ── ScaffoldAnswers ──────────────────────────────────────────────────────────

/// The user's answers, validated on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldAnswers {
    app_name: String,
    database: Database,
    environment: Environment,
}

impl ScaffoldAnswers {
    /// Build answers, validating the application name.
    ///
    /// Names end up in container tags, k8s labels, and compose service names,
    /// so the accepted alphabet is the intersection of all three: lowercase
    /// ASCII letters, digits, `-` and `_`, starting with a letter or digit.
    pub fn new(
        app_name: impl Into<String>,
        database: Database,
        environment: Environment,
    ) -> Result<Self, DomainError> {
        let app_name = app_name.into();
        validate_app_name(&app_name)?;
        Ok(Self {
            app_name,
            database,
            environment,
        })
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub const fn database(&self) -> Database {
        self.database
    }

    pub const fn environment(&self) -> Environment {
        self.environment
    }
}

/// Validate an application name without building [`ScaffoldAnswers`].
///
/// Exposed so interactive front-ends can validate while the user types.
pub fn validate_app_name(name: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidAppName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if name.is_empty() {
        return Err(invalid("name cannot be empty"));
    }
    if !name.chars().next().is_some_and(|c| c.is_ascii_alphanumeric()) {
        return Err(invalid("name must start with a letter or digit"));
    }
    if name
        .chars()
        .any(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_'))
    {
        return Err(invalid(
            "only lowercase letters, digits, '-' and '_' are allowed",
        ));
    }
    Ok(())
}

// ── RenderContext ────────────────────────────────────────────────────────────

/// Variable map for template substitution.
///
/// Built once per scaffold run from the profile and answers. Substitution is
/// plain `{{key}}` replacement — no conditionals, no loops. A `BTreeMap`
/// keeps iteration (and therefore replacement) order deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    variables: BTreeMap<String, String>,
}

impl RenderContext {
    pub fn new(profile: &ProjectProfile, answers: &ScaffoldAnswers) -> Self {
        let mut ctx = Self::default();
        ctx.insert("app_name", answers.app_name());
        ctx.insert("archetype", profile.archetype().as_str());
        ctx.insert("language_version", profile.language_version());
        ctx.insert("database", answers.database().as_str());
        ctx.insert("database_image", answers.database().image());
        ctx.insert("environment", answers.environment().as_str());
        ctx
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Substitute every `{{key}}` (and the spaced `{{ key }}` form) in
    /// `source`. Unknown placeholders are left untouched.
    pub fn render(&self, source: &str) -> String {
        let mut out = source.to_string();
        for (key, value) in &self.variables {
            out = out.replace(&format!("{{{{{key}}}}}"), value);
            out = out.replace(&format!("{{{{ {key} }}}}"), value);
        }
        out
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
