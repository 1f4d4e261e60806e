//! Document generation pipeline orchestration.
//!
//! - [`PipelineBuilder`]: fluent builder for a configured pipeline
//! - [`DocumentPipeline`]: compiles element trees and hands the result to a renderer
//!
//! # Example
//!
//! ```ignore
//! use treedoc::PipelineBuilder;
//!
//! let pipeline = PipelineBuilder::new()
//!     .with_strict_tags(true)
//!     .build()?;
//!
//! pipeline.render_to_file(&tree, "definition.json")?;
//! ```

mod builder;
mod orchestrator;

pub use builder::PipelineBuilder;
pub use orchestrator::DocumentPipeline;
