use serde_json::{Value, json};

/// Configuration for a compilation run.
#[derive(Debug, Clone, PartialEq)]
pub struct CompileOptions {
    /// Copied verbatim into the definition's `defaultStyle`.
    pub default_style: Option<Value>,
    /// If true, tags outside the vocabulary are an error instead of being dropped.
    pub strict_tags: bool,
    /// If true, a resolved `0` is treated as blank and dropped like `""` or `NaN`.
    pub drop_zero: bool,
}

impl CompileOptions {
    pub const DEFAULT_FONT: &'static str = "OpenSans";
    pub const DEFAULT_FONT_SIZE: u32 = 10;

    /// The `font` named by the default style, if any.
    pub fn default_font(&self) -> Option<&str> {
        self.default_style
            .as_ref()
            .and_then(|style| style.get("font"))
            .and_then(Value::as_str)
    }
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            default_style: Some(json!({
                "font": Self::DEFAULT_FONT,
                "fontSize": Self::DEFAULT_FONT_SIZE,
            })),
            strict_tags: false,
            drop_zero: true,
        }
    }
}
