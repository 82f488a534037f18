//! Scaffold service - renders and writes the infrastructure file set.
//!
//! This service coordinates the generation workflow:
//! 1. Build a render context from the profile and answers
//! 2. For each planned file: look up the template, render it, write it
//!
//! The plan itself is fixed: three shared templates plus an archetype-specific
//! Dockerfile and CI pipeline. [`ScaffoldService::plan`] is public so the CLI
//! can show it for dry runs without touching any port.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::{
    application::ports::{ProjectFilesystem, TemplateRenderer, TemplateSource},
    domain::{ProjectProfile, RenderContext, ScaffoldAnswers},
    error::ShipkitResult,
};

/// Templates shared by every archetype: catalog path → output path.
const SHARED_FILES: &[(&str, &str)] = &[
    ("common/docker-compose.yml", "docker-compose.yml"),
    ("common/terraform/main.tf", "terraform/main.tf"),
    ("common/kubernetes/deployment.yml", "kubernetes/deployment.yml"),
];

/// Archetype-specific templates: catalog file name → output path.
const ARCHETYPE_FILES: &[(&str, &str)] = &[
    ("Dockerfile", "Dockerfile"),
    ("pipeline.yml", ".github/workflows/pipeline.yml"),
];

/// One entry of the generation plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    /// Catalog-relative template path.
    pub template: String,
    /// Output path, relative to the project root.
    pub output: PathBuf,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    templates: Box<dyn TemplateSource>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn ProjectFilesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(
        templates: Box<dyn TemplateSource>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn ProjectFilesystem>,
    ) -> Self {
        Self {
            templates,
            renderer,
            filesystem,
        }
    }

    /// The fixed file plan for a profile.
    pub fn plan(profile: &ProjectProfile) -> Vec<PlannedFile> {
        let mut plan: Vec<PlannedFile> = SHARED_FILES
            .iter()
            .map(|(template, output)| PlannedFile {
                template: (*template).to_string(),
                output: PathBuf::from(output),
            })
            .collect();

        let dir = profile.archetype().template_dir();
        plan.extend(ARCHETYPE_FILES.iter().map(|(template, output)| PlannedFile {
            template: format!("{dir}/{template}"),
            output: PathBuf::from(output),
        }));

        plan
    }

    /// Render and write every planned file under `output_root`.
    ///
    /// Returns the written paths in plan order. Fails fast on the first
    /// error — by then earlier files are on disk; the caller decides whether
    /// that partial output is worth keeping (the CLI reports it and leaves
    /// the files for inspection).
    #[instrument(
        skip_all,
        fields(
            app = %answers.app_name(),
            archetype = %profile.archetype(),
            output_root = %output_root.display()
        )
    )]
    pub fn scaffold(
        &self,
        profile: &ProjectProfile,
        answers: &ScaffoldAnswers,
        output_root: &Path,
    ) -> ShipkitResult<Vec<PathBuf>> {
        let context = RenderContext::new(profile, answers);
        let mut written = Vec::new();

        for planned in Self::plan(profile) {
            let source = self.templates.get(&planned.template)?;
            let rendered = self.renderer.render(&source, &context)?;

            let path = output_root.join(&planned.output);
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                self.filesystem.create_dir_all(parent)?;
            }
            self.filesystem.write_file(&path, &rendered)?;

            info!(path = %path.display(), template = %planned.template, "file generated");
            written.push(path);
        }

        info!(files = written.len(), "scaffold completed");
        Ok(written)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
