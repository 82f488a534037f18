//! Command handlers.
//!
//! Each submodule exposes a single `execute` function; all wiring of core
//! services to real adapters happens here, never in `shipkit-core`.

use shipkit_core::application::ProfileDetector;
use shipkit_core::domain::parse_candidates;

use crate::config::AppConfig;

pub mod completions;
pub mod config;
pub mod detect;
pub mod init;

/// Build a detector honouring the `[detector]` config section.
pub(crate) fn detector_from(config: &AppConfig) -> ProfileDetector {
    if config.detector.php_candidates.is_empty() {
        ProfileDetector::new()
    } else {
        let candidates =
            parse_candidates(config.detector.php_candidates.iter().map(String::as_str));
        ProfileDetector::with_php_candidates(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_builtin_candidates() {
        // Just assert construction succeeds; candidate behaviour is covered
        // in shipkit-core.
        let _ = detector_from(&AppConfig::default());
    }

    #[test]
    fn configured_candidates_are_parsed() {
        let mut cfg = AppConfig::default();
        cfg.detector.php_candidates = vec!["8.3.0".into(), "not-a-version".into()];
        // Invalid entries are skipped by parse_candidates; construction
        // must still succeed.
        let _ = detector_from(&cfg);
    }
}
