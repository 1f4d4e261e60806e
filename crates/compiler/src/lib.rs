//! Resolution and compilation of element trees.
//!
//! This crate turns a [`treedoc_element::Element`] tree into a
//! [`treedoc_docdef::DocDefinition`] in a single depth-first pass:
//!
//! - **Resolution** ([`resolve`]): composites are expanded until a tag, leaf, fragment
//!   or nothing remains. Each child is resolved against its own branch of the context.
//! - **Validation**: `document` must be the root and appear once; `header`, `content`
//!   and `footer` may only be immediate children of `document`. Checked inline.
//! - **Compilation** ([`Compiler`]): every tag maps to a layout primitive, adjacent text
//!   is coalesced and blank values are dropped.

mod coalesce;
pub mod compiler;
pub mod error;
pub mod options;
pub mod resolve;

pub use compiler::{Compiler, compile, compile_with_context};
pub use error::CompileError;
pub use options::CompileOptions;
pub use resolve::{Resolved, resolve};
