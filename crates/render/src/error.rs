use thiserror::Error;

/// Error type for handing a compiled document to a renderer.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize document definition: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Font family '{family}' is not registered")]
    MissingFont { family: String },
}
