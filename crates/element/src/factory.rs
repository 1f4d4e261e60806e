use crate::component::{Component, Props, Scope};
use crate::element::{CompositeElement, Element, TagElement};
use crate::tag::TagName;
use crate::Attributes;
use std::sync::Arc;

/// The first argument of [`create`]: a tag name or a component.
#[derive(Clone)]
pub enum ElementType {
    Name(TagName),
    Component(Arc<dyn Component>),
}

impl ElementType {
    pub fn component<F>(render: F) -> Self
    where
        F: Fn(&Props, &mut Scope<'_>) -> Element + Send + Sync + 'static,
    {
        ElementType::Component(Arc::new(render))
    }
}

impl From<&str> for ElementType {
    fn from(name: &str) -> Self {
        ElementType::Name(TagName::parse(name))
    }
}

impl From<String> for ElementType {
    fn from(name: String) -> Self {
        ElementType::Name(TagName::parse(&name))
    }
}

impl From<TagName> for ElementType {
    fn from(name: TagName) -> Self {
        ElementType::Name(name)
    }
}

impl From<Arc<dyn Component>> for ElementType {
    fn from(component: Arc<dyn Component>) -> Self {
        ElementType::Component(component)
    }
}

/// Builds an element from a tag name or component, its attributes and its children.
///
/// Nested fragments among `children` are flattened into one ordered list. A component
/// is not invoked here: it becomes a [`Element::Composite`] that the compiler expands
/// with the context in effect at its position.
pub fn create(
    element_type: impl Into<ElementType>,
    attributes: Attributes,
    children: impl IntoIterator<Item = Element>,
) -> Element {
    let children = flatten_children(children);
    match element_type.into() {
        ElementType::Name(name) => Element::Tag(TagElement {
            name,
            attributes,
            children,
        }),
        ElementType::Component(component) => Element::Composite(CompositeElement {
            component,
            attributes,
            children,
        }),
    }
}

/// Recursively splices fragments into a single flat list of children.
pub fn flatten_children(children: impl IntoIterator<Item = Element>) -> Vec<Element> {
    let mut flat = Vec::new();
    for child in children {
        push_flat(&mut flat, child);
    }
    flat
}

fn push_flat(out: &mut Vec<Element>, element: Element) {
    match element {
        Element::Fragment(items) => {
            for item in items {
                push_flat(out, item);
            }
        }
        other => out.push(other),
    }
}

macro_rules! define_tag_builder {
    ($($fn_name:ident => $variant:ident),* $(,)?) => {
        $(
            pub fn $fn_name() -> TagElement {
                TagElement::new(TagName::$variant)
            }
        )*
    };
}

define_tag_builder!(
    document => Document,
    header => Header,
    content => Content,
    footer => Footer,
    stack => Stack,
    group => Group,
    column => Column,
    columns => Columns,
    table => Table,
    row => Row,
    cell => Cell,
    ul => Ul,
    ol => Ol,
);

/// A `text` tag holding `content`.
pub fn text(content: impl Into<Element>) -> TagElement {
    TagElement::new(TagName::Text).child(content)
}

/// An `image` tag with its `src` attribute set.
pub fn image(src: impl Into<String>) -> TagElement {
    TagElement::new(TagName::Image).attr("src", src.into())
}
