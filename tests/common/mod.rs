#![allow(dead_code)]

use serde_json::{Value, json};
use treedoc::{CompileOptions, Element, PipelineBuilder, PipelineError};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// The `defaultStyle` attached by a default pipeline.
pub fn default_style() -> Value {
    json!({ "font": "OpenSans", "fontSize": 10 })
}

/// Compiles `root` with default options and returns the definition as JSON.
pub fn compile_to_value(root: impl Into<Element>) -> Result<Value, PipelineError> {
    let pipeline = PipelineBuilder::new().build()?;
    let definition = pipeline.compile(&root.into())?;
    Ok(definition.to_value()?)
}

/// Compiles `root` with `options` and returns the definition as JSON.
pub fn compile_with_options(
    root: impl Into<Element>,
    options: CompileOptions,
) -> Result<Value, PipelineError> {
    let pipeline = PipelineBuilder::new().with_options(options).build()?;
    let definition = pipeline.compile(&root.into())?;
    Ok(definition.to_value()?)
}

/// Compiles `root` and returns the error message, panicking if compilation succeeds.
pub fn compile_error_message(root: impl Into<Element>) -> String {
    match compile_to_value(root) {
        Ok(value) => panic!("expected compilation to fail, got {value}"),
        Err(err) => err.to_string(),
    }
}

/// Wraps `children` in `<document><content>...</content></document>`.
pub fn in_content(children: Vec<Element>) -> Element {
    use treedoc::builders::{content, document};
    document().child(content().children(children)).into()
}
