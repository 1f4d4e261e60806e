//! # treedoc
//!
//! Compiles declarative element trees into validated, pdfmake-style document
//! definitions.
//!
//! A tree is built from structural tags (`document`, `content`, `text`, `table`, ...)
//! and reusable components. Components are expanded while the tree is walked, reading
//! and overriding a context that flows from ancestors to descendants. The result is a
//! [`DocDefinition`] that a [`DocumentRenderer`] turns into output.
//!
//! ## Quick Start
//!
//! ```ignore
//! use treedoc::builders::*;
//! use treedoc::PipelineBuilder;
//!
//! let tree = document()
//!     .attr("size", "A4")
//!     .child(content().child(text("Hello, world")))
//!     .into();
//!
//! let pipeline = PipelineBuilder::new().build()?;
//! let definition = pipeline.compile(&tree)?;
//! ```
//!
//! ## Crates
//!
//! - [`treedoc_element`]: element tree, components and context
//! - [`treedoc_docdef`]: the compiled document definition
//! - [`treedoc_compiler`]: resolution and compilation
//! - [`treedoc_render`]: fonts and renderers

pub mod error;
pub mod pipeline;
pub mod template;

pub use error::PipelineError;
pub use pipeline::{DocumentPipeline, PipelineBuilder};

pub use treedoc_compiler::{CompileError, CompileOptions, compile, compile_with_context};
pub use treedoc_docdef::DocDefinition;
pub use treedoc_element::{
    Attributes, Component, Context, Element, ElementType, Props, Scope, TagName, builders,
    create,
};
pub use treedoc_render::{
    DocumentRenderer, FontFamily, FontRegistry, JsonDefinitionRenderer, RenderError,
};
