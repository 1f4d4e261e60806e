// src/pipeline/orchestrator.rs
use crate::error::PipelineError;
use crate::template;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use treedoc_compiler::{CompileOptions, Compiler};
use treedoc_docdef::DocDefinition;
use treedoc_element::{Context, Element};
use treedoc_render::{DocumentRenderer, FontRegistry};

/// The main document generation pipeline.
/// Compiles element trees into document definitions and passes them to the renderer.
pub struct DocumentPipeline {
    options: CompileOptions,
    fonts: Arc<FontRegistry>,
    renderer: Arc<dyn DocumentRenderer>,
    context: Context,
}

impl DocumentPipeline {
    pub(crate) fn new(
        options: CompileOptions,
        fonts: Arc<FontRegistry>,
        renderer: Arc<dyn DocumentRenderer>,
        context: Context,
    ) -> Self {
        Self {
            options,
            fonts,
            renderer,
            context,
        }
    }

    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    pub fn fonts(&self) -> &FontRegistry {
        &self.fonts
    }

    /// Compiles `root` into a document definition.
    pub fn compile(&self, root: &Element) -> Result<DocDefinition, PipelineError> {
        let start = Instant::now();
        let definition = Compiler::new(&self.options).compile_document(root, &self.context)?;
        log::debug!("Compiled element tree in {:?}", start.elapsed());
        Ok(definition)
    }

    /// Loads a static JSON template and compiles it.
    pub fn compile_json_str(&self, source: &str) -> Result<DocDefinition, PipelineError> {
        let root = template::from_json_str(source)?;
        self.compile(&root)
    }

    /// Compiles `root` and renders it into `writer`, which is handed back to the caller.
    pub fn render<W: Write>(&self, root: &Element, mut writer: W) -> Result<W, PipelineError> {
        let definition = self.compile(root)?;
        self.write_definition(&definition, &mut writer)?;
        Ok(writer)
    }

    /// Compiles `root` and renders it into a newly created file at `path`.
    ///
    /// Nothing is written to disk unless compilation succeeds. If rendering fails the
    /// partially written file is removed.
    pub fn render_to_file<P: AsRef<Path>>(&self, root: &Element, path: P) -> Result<(), PipelineError> {
        let definition = self.compile(root)?;

        let output_path = path.as_ref();
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(output_path).map_err(|e| {
            PipelineError::Io(io::Error::new(
                e.kind(),
                format!("Failed to create output file '{}': {}", output_path.display(), e),
            ))
        })?;
        let mut writer = BufWriter::new(file);
        let written = self
            .write_definition(&definition, &mut writer)
            .and_then(|()| writer.flush().map_err(PipelineError::from));
        if let Err(e) = written {
            drop(writer);
            if let Err(remove_err) = fs::remove_file(output_path) {
                log::warn!("Failed to remove '{}': {}", output_path.display(), remove_err);
            }
            return Err(e);
        }
        log::info!("Wrote {}", output_path.display());
        Ok(())
    }

    fn write_definition(
        &self,
        definition: &DocDefinition,
        writer: &mut dyn Write,
    ) -> Result<(), PipelineError> {
        self.renderer.render(definition, &self.fonts, writer)?;
        log::info!("Rendered document with {}", self.renderer.name());
        Ok(())
    }
}
