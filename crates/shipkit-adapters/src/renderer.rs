//! Simple variable substitution renderer.

use shipkit_core::{
    application::ports::TemplateRenderer, domain::RenderContext, error::ShipkitResult,
};
use tracing::instrument;

/// Renderer using basic `{{key}}` substitution.
///
/// All substitution logic lives in [`RenderContext::render`]; this adapter
/// exists so richer engines can slot in behind the same port later.
#[derive(Debug, Clone, Copy)]
pub struct SubstitutionRenderer;

impl SubstitutionRenderer {
    /// Create a new substitution renderer.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SubstitutionRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for SubstitutionRenderer {
    #[instrument(skip_all)]
    fn render(&self, source: &str, context: &RenderContext) -> ShipkitResult<String> {
        Ok(context.render(source))
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
