//! Archetype detection: classify a directory into a [`ProjectProfile`].
//!
//! The detector is a priority-ordered chain of independent rules evaluated
//! over a [`ProjectFilesystem`]. The first matching rule wins and detection
//! short-circuits — order matters because marker sets overlap (a Laravel
//! project usually also carries a `package.json`, and must not classify as
//! Node). Adding an archetype is a pure append: one probe function plus one
//! entry in [`RULES`].
//!
//! ## Failure policy
//!
//! The only terminal outcome is "no rule matched". Everything that can go
//! wrong *inside* a matched rule — unreadable manifest, malformed JSON,
//! missing requirement field, unsatisfiable constraint — degrades to the
//! archetype's fixed default version instead of failing detection.

use std::path::Path;

use semver::Version;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::application::ports::ProjectFilesystem;
use crate::domain::{
    Archetype, DomainError, ProjectProfile, VersionConstraint,
    constraint::{DEFAULT_PHP_VERSION, default_php_candidates},
};
use crate::error::{ShipkitError, ShipkitResult};

/// Default runtime versions for archetypes without manifest parsing.
const DEFAULT_JAVA_VERSION: &str = "17";
const DEFAULT_PYTHON_VERSION: &str = "3.9";
const DEFAULT_NODE_VERSION: &str = "18";

// ── Rule table ────────────────────────────────────────────────────────────────

type Probe = fn(&ProfileDetector, &dyn ProjectFilesystem, &Path) -> Option<ProjectProfile>;

struct DetectionRule {
    archetype: Archetype,
    probe: Probe,
}

/// Priority order. PHP first: its marker set is the most specific and the
/// most likely to be shadowed by the generic `package.json` check.
const RULES: &[DetectionRule] = &[
    DetectionRule {
        archetype: Archetype::PhpLaravel,
        probe: probe_php_laravel,
    },
    DetectionRule {
        archetype: Archetype::JavaSpringBoot,
        probe: probe_java_spring_boot,
    },
    DetectionRule {
        archetype: Archetype::PythonFastapi,
        probe: probe_python_fastapi,
    },
    DetectionRule {
        archetype: Archetype::NodejsNextjs,
        probe: probe_nodejs_nextjs,
    },
];

// ── Detector ─────────────────────────────────────────────────────────────────

/// Classifies a directory into an archetype and best-guess runtime version.
///
/// Stateless with respect to prior calls; a detection is a pure function of
/// the directory contents and the configured candidate list.
pub struct ProfileDetector {
    php_candidates: Vec<Version>,
}

impl ProfileDetector {
    /// Detector with the built-in PHP candidate list.
    pub fn new() -> Self {
        Self {
            php_candidates: default_php_candidates(),
        }
    }

    /// Detector with a config-provided candidate list (newest first).
    /// An empty list falls back to the built-in one.
    pub fn with_php_candidates(candidates: Vec<Version>) -> Self {
        if candidates.is_empty() {
            return Self::new();
        }
        Self {
            php_candidates: candidates,
        }
    }

    /// Classify `dir`, returning its profile or the terminal
    /// `UnrecognizedProject` error.
    #[instrument(skip(self, fs), fields(dir = %dir.display()))]
    pub fn detect(
        &self,
        fs: &dyn ProjectFilesystem,
        dir: &Path,
    ) -> ShipkitResult<ProjectProfile> {
        for rule in RULES {
            if let Some(profile) = (rule.probe)(self, fs, dir) {
                debug!(
                    archetype = %rule.archetype,
                    version = %profile.language_version(),
                    "archetype matched"
                );
                return Ok(profile);
            }
        }

        debug!("no detection rule matched");
        Err(ShipkitError::Domain(DomainError::UnrecognizedProject {
            path: dir.to_path_buf(),
        }))
    }

    /// Resolve the PHP runtime from composer.json, or explain why not.
    ///
    /// Every failure path returns `Err` with a reason; the caller (the
    /// Laravel probe) turns any `Err` into the fixed default. Split out so
    /// the degradation points stay visible and testable.
    fn php_version_from_composer(
        &self,
        fs: &dyn ProjectFilesystem,
        composer: &Path,
    ) -> Result<String, String> {
        let raw = fs
            .read_to_string(composer)
            .map_err(|e| format!("composer.json unreadable: {e}"))?;

        let manifest: ComposerManifest = serde_json::from_str(&raw)
            .map_err(|e| format!("composer.json is not valid JSON: {e}"))?;

        let requirement = manifest
            .require
            .php
            .ok_or_else(|| "no \"php\" entry in composer.json require".to_string())?;

        let constraint =
            VersionConstraint::parse(&requirement).map_err(|e| e.to_string())?;
        constraint
            .resolve(&self.php_candidates)
            .map_err(|e| e.to_string())
    }
}

impl Default for ProfileDetector {
    fn default() -> Self {
        Self::new()
    }
}

// ── composer.json shape ───────────────────────────────────────────────────────

/// The slice of composer.json the detector cares about.
#[derive(Debug, Deserialize)]
struct ComposerManifest {
    #[serde(default)]
    require: ComposerRequire,
}

#[derive(Debug, Default, Deserialize)]
struct ComposerRequire {
    php: Option<String>,
}

// ── Probes ────────────────────────────────────────────────────────────────────

/// PHP/Laravel: dependency manifest + framework entry-point script.
///
/// Version comes from the composer `php` requirement; any resolution failure
/// falls back to [`DEFAULT_PHP_VERSION`] — still a PHP project.
fn probe_php_laravel(
    detector: &ProfileDetector,
    fs: &dyn ProjectFilesystem,
    dir: &Path,
) -> Option<ProjectProfile> {
    let composer = dir.join("composer.json");
    if !fs.is_file(&composer) || !fs.is_file(&dir.join("artisan")) {
        return None;
    }

    let version = match detector.php_version_from_composer(fs, &composer) {
        Ok(version) => version,
        Err(reason) => {
            warn!(%reason, default = DEFAULT_PHP_VERSION, "php version resolution degraded");
            DEFAULT_PHP_VERSION.to_string()
        }
    };

    Some(ProjectProfile::new(Archetype::PhpLaravel, version))
}

/// Java/Spring Boot: a Maven or Gradle build descriptor. No manifest parsing.
fn probe_java_spring_boot(
    _detector: &ProfileDetector,
    fs: &dyn ProjectFilesystem,
    dir: &Path,
) -> Option<ProjectProfile> {
    if fs.is_file(&dir.join("pom.xml")) || fs.is_file(&dir.join("build.gradle")) {
        return Some(ProjectProfile::new(
            Archetype::JavaSpringBoot,
            DEFAULT_JAVA_VERSION,
        ));
    }
    None
}

/// Python/FastAPI: requirements.txt naming the framework (case-insensitive).
fn probe_python_fastapi(
    _detector: &ProfileDetector,
    fs: &dyn ProjectFilesystem,
    dir: &Path,
) -> Option<ProjectProfile> {
    let requirements = dir.join("requirements.txt");
    if !fs.is_file(&requirements) {
        return None;
    }
    let content = fs.read_to_string(&requirements).ok()?;
    if !content.to_ascii_lowercase().contains("fastapi") {
        return None;
    }
    Some(ProjectProfile::new(
        Archetype::PythonFastapi,
        DEFAULT_PYTHON_VERSION,
    ))
}

/// Node/Next.js: package.json carrying the literal `"next"` dependency key.
fn probe_nodejs_nextjs(
    _detector: &ProfileDetector,
    fs: &dyn ProjectFilesystem,
    dir: &Path,
) -> Option<ProjectProfile> {
    let package = dir.join("package.json");
    if !fs.is_file(&package) {
        return None;
    }
    let content = fs.read_to_string(&package).ok()?;
    if !content.contains("\"next\"") {
        return None;
    }
    Some(ProjectProfile::new(
        Archetype::NodejsNextjs,
        DEFAULT_NODE_VERSION,
    ))
}

// ── tests ─────────────────────────────────────────────────────────────────────
