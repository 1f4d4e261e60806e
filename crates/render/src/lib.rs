pub mod error;
pub mod font;
pub mod renderer;

pub use error::RenderError;
pub use font::{FontFamily, FontRegistry};
pub use renderer::{DocumentRenderer, JsonDefinitionRenderer};
