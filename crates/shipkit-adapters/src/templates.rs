//! Built-in template catalog, embedded at compile time.
//!
//! Templates live under `crates/shipkit-adapters/templates/` and are baked
//! into the binary with `include_str!`, so a deployed `shipkit` needs no
//! sidecar files. Catalog paths mirror the on-disk layout:
//! `common/<name>` for shared templates, `<archetype>/<name>` for
//! archetype-specific ones.

use shipkit_core::{
    application::{ApplicationError, ports::TemplateSource},
    error::ShipkitResult,
};
use tracing::trace;

/// catalog path → embedded template text
const CATALOG: &[(&str, &str)] = &[
    // shared
    (
        "common/docker-compose.yml",
        include_str!("../templates/common/docker-compose.yml"),
    ),
    (
        "common/terraform/main.tf",
        include_str!("../templates/common/terraform/main.tf"),
    ),
    (
        "common/kubernetes/deployment.yml",
        include_str!("../templates/common/kubernetes/deployment.yml"),
    ),
    // php_laravel
    (
        "php_laravel/Dockerfile",
        include_str!("../templates/php_laravel/Dockerfile"),
    ),
    (
        "php_laravel/pipeline.yml",
        include_str!("../templates/php_laravel/pipeline.yml"),
    ),
    // java_spring_boot
    (
        "java_spring_boot/Dockerfile",
        include_str!("../templates/java_spring_boot/Dockerfile"),
    ),
    (
        "java_spring_boot/pipeline.yml",
        include_str!("../templates/java_spring_boot/pipeline.yml"),
    ),
    // python_fastapi
    (
        "python_fastapi/Dockerfile",
        include_str!("../templates/python_fastapi/Dockerfile"),
    ),
    (
        "python_fastapi/pipeline.yml",
        include_str!("../templates/python_fastapi/pipeline.yml"),
    ),
    // nodejs_nextjs
    (
        "nodejs_nextjs/Dockerfile",
        include_str!("../templates/nodejs_nextjs/Dockerfile"),
    ),
    (
        "nodejs_nextjs/pipeline.yml",
        include_str!("../templates/nodejs_nextjs/pipeline.yml"),
    ),
];

/// The embedded template catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplates;

impl BuiltinTemplates {
    pub fn new() -> Self {
        Self
    }

    /// All catalog paths (for diagnostics and tests).
    pub fn paths() -> impl Iterator<Item = &'static str> {
        CATALOG.iter().map(|(path, _)| *path)
    }
}

impl TemplateSource for BuiltinTemplates {
    fn get(&self, path: &str) -> ShipkitResult<String> {
        trace!(path, "template lookup");
        CATALOG
            .iter()
            .find(|(key, _)| *key == path)
            .map(|(_, text)| (*text).to_string())
            .ok_or_else(|| {
                ApplicationError::TemplateNotFound {
                    path: path.to_string(),
                }
                .into()
            })
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use shipkit_core::domain::Archetype;

    #[test]
    fn every_known_archetype_has_a_full_template_set() {
        let templates = BuiltinTemplates::new();
        for archetype in [
            Archetype::PhpLaravel,
            Archetype::JavaSpringBoot,
            Archetype::PythonFastapi,
            Archetype::NodejsNextjs,
        ] {
            for file in ["Dockerfile", "pipeline.yml"] {
                let path = format!("{}/{}", archetype.template_dir(), file);
                assert!(templates.get(&path).is_ok(), "missing template: {path}");
            }
        }
    }

    #[test]
    fn shared_templates_exist() {
        let templates = BuiltinTemplates::new();
        assert!(templates.get("common/docker-compose.yml").is_ok());
        assert!(templates.get("common/terraform/main.tf").is_ok());
        assert!(templates.get("common/kubernetes/deployment.yml").is_ok());
    }

    #[test]
    fn unknown_path_is_not_found() {
        let err = BuiltinTemplates::new().get("cobol/Dockerfile").unwrap_err();
        assert!(err.to_string().contains("cobol/Dockerfile"));
    }

    #[test]
    fn templates_only_use_known_placeholders() {
        // Every {{placeholder}} in the catalog must be a variable the
        // RenderContext actually provides.
        let known = [
            "app_name",
            "archetype",
            "language_version",
            "database",
            "database_image",
            "environment",
        ];
        for (path, text) in CATALOG {
            for chunk in text.split("{{").skip(1) {
                let Some(end) = chunk.find("}}") else {
                    panic!("unclosed placeholder in {path}");
                };
                let name = chunk[..end].trim();
                assert!(
                    known.contains(&name),
                    "unknown placeholder '{{{{{name}}}}}' in {path}"
                );
            }
        }
    }
}
