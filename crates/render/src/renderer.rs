use crate::error::RenderError;
use crate::font::FontRegistry;
use serde::Serialize;
use std::io::Write;
use treedoc_docdef::DocDefinition;

/// Turns a compiled document definition into output bytes.
///
/// Implementations own everything after compilation: font loading, pagination and
/// glyph layout. They receive the font registry exactly as it was configured.
pub trait DocumentRenderer: Send + Sync {
    fn render(
        &self,
        definition: &DocDefinition,
        fonts: &FontRegistry,
        writer: &mut dyn Write,
    ) -> Result<(), RenderError>;

    /// Returns a human-readable name for this renderer (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// Writes the definition and font registry as one JSON payload, ready for a
/// pdfmake-compatible layout service.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDefinitionRenderer {
    pub pretty: bool,
}

#[derive(Serialize)]
struct Payload<'a> {
    fonts: &'a FontRegistry,
    definition: &'a DocDefinition,
}

impl JsonDefinitionRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl DocumentRenderer for JsonDefinitionRenderer {
    fn render(
        &self,
        definition: &DocDefinition,
        fonts: &FontRegistry,
        writer: &mut dyn Write,
    ) -> Result<(), RenderError> {
        let default_font = definition
            .default_style
            .as_ref()
            .and_then(|style| style.get("font"))
            .and_then(|font| font.as_str());
        if let Some(family) = default_font {
            if !fonts.is_empty() && !fonts.contains(family) {
                return Err(RenderError::MissingFont {
                    family: family.to_string(),
                });
            }
        }

        let payload = Payload { fonts, definition };
        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, &payload)?;
        } else {
            serde_json::to_writer(&mut *writer, &payload)?;
        }
        writer.flush()?;
        log::debug!("{} wrote definition with {} font families", self.name(), fonts.len());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "JsonDefinitionRenderer"
    }
}
