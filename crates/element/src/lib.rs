//! The element tree that treedoc templates are written in.
//!
//! A template is a tree of [`Element`]s. Each element is either a scalar leaf, a
//! structural tag from a fixed vocabulary (see [`TagName`]), a group of siblings, or a
//! *composite*: a [`Component`] that is expanded lazily by the compiler into another
//! element. Components can read the [`Context`] flowing down the tree and provide new
//! values for their own descendants through a [`Scope`].
//!
//! # Creating Reusable Components
//!
//! A component is any `Fn(&Props, &mut Scope<'_>) -> Element`. It receives the
//! attributes and children it was created with.
//!
//! ```ignore
//! use treedoc_element::builders::*;
//! use treedoc_element::{Element, Props, Scope};
//!
//! // A component that wraps its children in a titled stack.
//! let section = Element::component(|props: &Props, _scope: &mut Scope<'_>| {
//!     let title = props.attr_str("title").unwrap_or_default().to_string();
//!     stack()
//!         .child(text(title).attr("style", "title"))
//!         .children(props.children.clone())
//!         .into()
//! });
//!
//! let doc = document().child(content().child(section.attr("title", "Summary")));
//! ```

mod component;
mod context;
mod element;
mod factory;
mod scalar;
mod tag;

/// Shorthand constructors for every structural tag.
///
/// Import with `use treedoc_element::builders::*;` for convenience.
pub mod builders {
    pub use super::factory::{
        cell, column, columns, content, document, footer, group, header, image, ol, row, stack,
        table, text, ul,
    };
}

pub use self::component::{Component, Props, Scope};
pub use self::context::Context;
pub use self::element::{CompositeElement, Element, TagElement};
pub use self::factory::{ElementType, create, flatten_children};
pub use self::scalar::Scalar;
pub use self::tag::TagName;

/// Attribute map carried by tags and composites. Values are arbitrary JSON.
pub type Attributes = serde_json::Map<String, serde_json::Value>;
