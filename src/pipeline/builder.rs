// src/pipeline/builder.rs
use super::orchestrator::DocumentPipeline;
use crate::error::PipelineError;
use serde_json::Value;
use std::sync::Arc;
use treedoc_compiler::CompileOptions;
use treedoc_element::Context;
use treedoc_render::{DocumentRenderer, FontFamily, FontRegistry, JsonDefinitionRenderer};

/// A builder for creating a `DocumentPipeline`.
pub struct PipelineBuilder {
    options: CompileOptions,
    fonts: FontRegistry,
    renderer: Option<Arc<dyn DocumentRenderer>>,
    context: Context,
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self {
            options: CompileOptions::default(),
            fonts: FontRegistry::new(),
            renderer: None,
            context: Context::new(),
        }
    }
}

impl PipelineBuilder {
    /// Creates a new `PipelineBuilder` with the default compile options and no fonts.
    pub fn new() -> Self {
        Default::default()
    }

    /// Replaces all compile options at once.
    pub fn with_options(mut self, options: CompileOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the style copied into the definition's `defaultStyle`.
    pub fn with_default_style(mut self, style: Value) -> Self {
        self.options.default_style = Some(style);
        self
    }

    /// Omits `defaultStyle` from the definition entirely.
    pub fn without_default_style(mut self) -> Self {
        self.options.default_style = None;
        self
    }

    /// Turns unknown tags into a compile error instead of dropping them.
    pub fn with_strict_tags(mut self, strict: bool) -> Self {
        self.options.strict_tags = strict;
        self
    }

    /// Controls whether a resolved `0` is dropped like other blank values.
    pub fn with_drop_zero(mut self, drop_zero: bool) -> Self {
        self.options.drop_zero = drop_zero;
        self
    }

    /// Registers one font family under `name`.
    pub fn with_font_family(mut self, name: impl Into<String>, family: FontFamily) -> Self {
        self.fonts.insert(name, family);
        self
    }

    /// Replaces the font registry.
    pub fn with_fonts(mut self, fonts: FontRegistry) -> Self {
        self.fonts = fonts;
        self
    }

    /// Selects the renderer. Defaults to [`JsonDefinitionRenderer`].
    pub fn with_renderer(mut self, renderer: impl DocumentRenderer + 'static) -> Self {
        self.renderer = Some(Arc::new(renderer));
        self
    }

    /// Sets the context every component in a compiled tree starts from.
    pub fn with_context(mut self, context: Context) -> Self {
        self.context = context;
        self
    }

    /// Consumes the builder and creates the `DocumentPipeline`.
    pub fn build(self) -> Result<DocumentPipeline, PipelineError> {
        if let Some(font) = self.options.default_font() {
            if !self.fonts.is_empty() && !self.fonts.contains(font) {
                let known: Vec<&str> = self.fonts.names().collect();
                return Err(PipelineError::Config(format!(
                    "Default font '{}' is not registered. Known families: {}",
                    font,
                    known.join(", ")
                )));
            }
        }

        let renderer: Arc<dyn DocumentRenderer> = match self.renderer {
            Some(renderer) => renderer,
            None => Arc::new(JsonDefinitionRenderer::new()),
        };
        log::info!(
            "Building pipeline with renderer {} ({} font families, strict tags: {})",
            renderer.name(),
            self.fonts.len(),
            self.options.strict_tags
        );

        Ok(DocumentPipeline::new(
            self.options,
            Arc::new(self.fonts),
            renderer,
            self.context,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn build_rejects_unregistered_default_font() {
        let result = PipelineBuilder::new()
            .with_font_family("Mono", FontFamily::single("mono.ttf"))
            .build();
        assert!(matches!(result, Err(PipelineError::Config(msg)) if msg.contains("'OpenSans'")));
    }

    #[test]
    fn build_accepts_registered_default_font() {
        let pipeline = PipelineBuilder::new()
            .with_font_family("Mono", FontFamily::single("mono.ttf"))
            .with_default_style(json!({ "font": "Mono" }))
            .build()
            .unwrap();
        assert_eq!(pipeline.options().default_font(), Some("Mono"));
        assert!(pipeline.fonts().contains("Mono"));
    }

    #[test]
    fn empty_registry_skips_font_check() {
        let pipeline = PipelineBuilder::new().build().unwrap();
        assert_eq!(pipeline.options(), &CompileOptions::default());
    }

    #[test]
    fn setters_update_options() {
        let pipeline = PipelineBuilder::new()
            .with_strict_tags(true)
            .with_drop_zero(false)
            .without_default_style()
            .build()
            .unwrap();
        let options = pipeline.options();
        assert!(options.strict_tags);
        assert!(!options.drop_zero);
        assert_eq!(options.default_style, None);
    }
}
