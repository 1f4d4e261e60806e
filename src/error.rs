// src/error.rs
use thiserror::Error;
use treedoc_compiler::CompileError;
use treedoc_render::RenderError;

/// A comprehensive error type for the entire document generation pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Compilation failed: {0}")]
    Compile(#[from] CompileError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Template error: {0}")]
    Template(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid pipeline configuration: {0}")]
    Config(String),
}
