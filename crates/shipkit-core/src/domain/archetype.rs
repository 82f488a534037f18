//! The `Archetype` value object and the `ProjectProfile` it anchors.
//!
//! # Design
//!
//! `Archetype` is a pure value type — `Copy`, equality-by-value, no identity.
//! It holds NO detection logic. All marker-file heuristics live in
//! `application::services::detect`. This file's only job is to define the
//! type, its string representations, and its `FromStr` parser.
//!
//! # Adding New Archetypes
//!
//! 1. Add the enum variant here (plus `as_str` / `FromStr` arms)
//! 2. Add a detection rule in `application::services::detect`
//! 3. Add a template set under `templates/<tag>/` in shipkit-adapters
//! 4. Done — nothing else changes

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Archetype ─────────────────────────────────────────────────────────────────

/// A recognized technology stack for which infrastructure templates exist.
///
/// The snake_case string form (`php_laravel`, ...) doubles as the template
/// directory name in the adapters crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    /// Sentinel for "not a recognized stack". Parseable and displayable, but
    /// never produced by a successful detection.
    Unknown,
    JavaSpringBoot,
    PythonFastapi,
    PhpLaravel,
    NodejsNextjs,
}

impl Archetype {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::JavaSpringBoot => "java_spring_boot",
            Self::PythonFastapi => "python_fastapi",
            Self::PhpLaravel => "php_laravel",
            Self::NodejsNextjs => "nodejs_nextjs",
        }
    }

    /// Human-facing name for prompts and summaries.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::JavaSpringBoot => "Java / Spring Boot",
            Self::PythonFastapi => "Python / FastAPI",
            Self::PhpLaravel => "PHP / Laravel",
            Self::NodejsNextjs => "Node.js / Next.js",
        }
    }

    /// Template directory for this archetype in the adapters catalog.
    pub const fn template_dir(&self) -> &'static str {
        self.as_str()
    }

    /// Whether this archetype has templates at all.
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Archetype {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "unknown" => Ok(Self::Unknown),
            "java_spring_boot" | "spring" | "spring-boot" => Ok(Self::JavaSpringBoot),
            "python_fastapi" | "fastapi" => Ok(Self::PythonFastapi),
            "php_laravel" | "laravel" => Ok(Self::PhpLaravel),
            "nodejs_nextjs" | "nextjs" | "next" => Ok(Self::NodejsNextjs),
            other => Err(DomainError::InvalidArchetype(other.to_string())),
        }
    }
}

// ── ProjectProfile ────────────────────────────────────────────────────────────

/// The detector's output: archetype plus inferred runtime version.
///
/// Immutable once constructed; consumed by the scaffold service. Exactly one
/// profile exists per detection call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectProfile {
    archetype: Archetype,
    language_version: String,
}

impl ProjectProfile {
    pub fn new(archetype: Archetype, language_version: impl Into<String>) -> Self {
        Self {
            archetype,
            language_version: language_version.into(),
        }
    }

    pub const fn archetype(&self) -> Archetype {
        self.archetype
    }

    pub fn language_version(&self) -> &str {
        &self.language_version
    }
}

impl fmt::Display for ProjectProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.archetype, self.language_version)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archetype_roundtrip() {
        for tag in [
            "unknown",
            "java_spring_boot",
            "python_fastapi",
            "php_laravel",
            "nodejs_nextjs",
        ] {
            let parsed: Archetype = tag.parse().unwrap();
            assert_eq!(parsed.as_str(), tag);
        }
    }

    #[test]
    fn archetype_aliases() {
        assert_eq!("laravel".parse::<Archetype>().unwrap(), Archetype::PhpLaravel);
        assert_eq!("spring".parse::<Archetype>().unwrap(), Archetype::JavaSpringBoot);
        assert_eq!("fastapi".parse::<Archetype>().unwrap(), Archetype::PythonFastapi);
        assert_eq!("next".parse::<Archetype>().unwrap(), Archetype::NodejsNextjs);
    }

    #[test]
    fn unknown_strings_are_rejected() {
        assert!(matches!(
            "cobol".parse::<Archetype>(),
            Err(DomainError::InvalidArchetype(_))
        ));
    }

    #[test]
    fn profile_display() {
        let profile = ProjectProfile::new(Archetype::PhpLaravel, "8.2");
        assert_eq!(profile.to_string(), "php_laravel (8.2)");
    }

    #[test]
    fn profile_serializes_with_snake_case_tag() {
        let profile = ProjectProfile::new(Archetype::JavaSpringBoot, "17");
        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("\"java_spring_boot\""));
        assert!(json.contains("\"17\""));
    }
}
