//! Composer-style version constraints and their resolution.
//!
//! composer.json expresses PHP requirements as range expressions: `"^8.2"`,
//! `">=8.1 <8.4"`, `"~8.1 || ^7.4"`. The [`semver`] crate parses individual
//! requirements but expects comma-separated comparators, so
//! [`VersionConstraint::parse`] normalizes composer syntax first:
//!
//! - `||` splits alternatives (any one may match)
//! - whitespace inside an alternative joins comparators with AND
//!
//! Resolution scans a fixed candidate list in order and returns the first
//! satisfying version as `major.minor` — so list order is the tie-break, and
//! the list is kept newest-first so the newest compatible runtime wins.
//!
//! A `VersionConstraint` is transient: it exists only inside a detection call.

use std::fmt;
use std::str::FromStr;

use semver::{Version, VersionReq};

use crate::domain::error::DomainError;

/// Runtime used when composer.json gives nothing usable.
pub const DEFAULT_PHP_VERSION: &str = "8.2";

/// Known PHP runtimes, newest first.
///
/// Hardcoded and bound to drift out of date; the CLI config can override it
/// without changing the resolution contract.
pub const PHP_VERSION_CANDIDATES: &[&str] = &["8.2.0", "8.1.0", "8.0.0", "7.4.0"];

/// Parse the built-in candidate list. Entries that fail to parse are skipped.
pub fn default_php_candidates() -> Vec<Version> {
    parse_candidates(PHP_VERSION_CANDIDATES.iter().copied())
}

/// Parse an arbitrary candidate list, skipping invalid entries.
pub fn parse_candidates<'a>(raw: impl IntoIterator<Item = &'a str>) -> Vec<Version> {
    raw.into_iter()
        .filter_map(|s| Version::parse(s.trim()).ok())
        .collect()
}

// ── VersionConstraint ─────────────────────────────────────────────────────────

/// A parsed version-range expression from a dependency manifest.
#[derive(Debug, Clone)]
pub struct VersionConstraint {
    raw: String,
    alternatives: Vec<VersionReq>,
}

impl VersionConstraint {
    /// Parse a composer-style constraint expression.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let mut alternatives = Vec::new();

        for alternative in raw.split("||") {
            let comparators: Vec<&str> = alternative.split_whitespace().collect();
            if comparators.is_empty() {
                continue;
            }
            let req = VersionReq::parse(&comparators.join(", ")).map_err(|e| {
                DomainError::InvalidConstraint {
                    constraint: raw.to_string(),
                    reason: e.to_string(),
                }
            })?;
            alternatives.push(req);
        }

        if alternatives.is_empty() {
            return Err(DomainError::InvalidConstraint {
                constraint: raw.to_string(),
                reason: "empty constraint expression".to_string(),
            });
        }

        Ok(Self {
            raw: raw.to_string(),
            alternatives,
        })
    }

    /// The original expression, for diagnostics.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Whether `version` satisfies any alternative.
    pub fn matches(&self, version: &Version) -> bool {
        self.alternatives.iter().any(|req| req.matches(version))
    }

    /// The first candidate satisfying this constraint, as `major.minor`.
    ///
    /// Candidates are checked in list order; callers pass a newest-first list
    /// so the newest compatible version wins.
    pub fn resolve(&self, candidates: &[Version]) -> Result<String, DomainError> {
        candidates
            .iter()
            .find(|v| self.matches(v))
            .map(|v| format!("{}.{}", v.major, v.minor))
            .ok_or_else(|| DomainError::NoCompatibleVersion {
                constraint: self.raw.clone(),
            })
    }
}

impl fmt::Display for VersionConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for VersionConstraint {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(expr: &str) -> Result<String, DomainError> {
        VersionConstraint::parse(expr)?.resolve(&default_php_candidates())
    }

    #[test]
    fn caret_resolves_to_exact_minor() {
        assert_eq!(resolve("^8.2").unwrap(), "8.2");
    }

    #[test]
    fn range_prefers_newest_candidate_in_range() {
        // 8.2 is the newest candidate inside [8.1, 8.4)
        assert_eq!(resolve(">=8.1 <8.4").unwrap(), "8.2");
    }

    #[test]
    fn lower_bound_only_prefers_newest() {
        assert_eq!(resolve(">=7.4").unwrap(), "8.2");
    }

    #[test]
    fn old_caret_resolves_to_old_minor() {
        assert_eq!(resolve("^7.4").unwrap(), "7.4");
    }

    #[test]
    fn or_alternatives_match_any() {
        assert_eq!(resolve("^7.4 || ^8.1").unwrap(), "8.2");
    }

    #[test]
    fn unsatisfiable_constraint_is_no_compatible_version() {
        assert!(matches!(
            resolve("^9.0"),
            Err(DomainError::NoCompatibleVersion { .. })
        ));
    }

    #[test]
    fn garbage_constraint_is_invalid() {
        assert!(matches!(
            VersionConstraint::parse("not a version"),
            Err(DomainError::InvalidConstraint { .. })
        ));
    }

    #[test]
    fn empty_constraint_is_invalid() {
        assert!(matches!(
            VersionConstraint::parse("   "),
            Err(DomainError::InvalidConstraint { .. })
        ));
    }

    #[test]
    fn candidate_list_skips_invalid_entries() {
        let candidates = parse_candidates(["8.2.0", "nope", "8.1.0"]);
        assert_eq!(candidates.len(), 2);
    }

    #[test]
    fn tilde_constraint_parses() {
        assert_eq!(resolve("~8.1.0").unwrap(), "8.1");
    }
}
