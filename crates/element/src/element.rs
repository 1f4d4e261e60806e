use crate::component::{Component, Props, Scope};
use crate::factory::flatten_children;
use crate::scalar::Scalar;
use crate::tag::TagName;
use crate::Attributes;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// A node in a template tree.
#[derive(Debug, Clone, Default)]
pub enum Element {
    /// Renders nothing.
    #[default]
    Empty,
    /// A string, number or boolean.
    Leaf(Scalar),
    /// A structural tag.
    Tag(TagElement),
    /// An unexpanded component.
    Composite(CompositeElement),
    /// Siblings without a wrapper; spliced into the parent's children.
    Fragment(Vec<Element>),
}

impl Element {
    pub fn tag(name: impl Into<TagName>) -> TagElement {
        TagElement::new(name)
    }

    pub fn text(content: impl Into<String>) -> Element {
        Element::Leaf(Scalar::Str(content.into()))
    }

    pub fn number(value: impl Into<Scalar>) -> Element {
        Element::Leaf(value.into())
    }

    /// Wraps a closure as a composite element.
    pub fn component<F>(render: F) -> CompositeElement
    where
        F: Fn(&Props, &mut Scope<'_>) -> Element + Send + Sync + 'static,
    {
        CompositeElement::new(Arc::new(render))
    }

    /// Short description used in error messages and logs.
    pub fn describe(&self) -> String {
        match self {
            Element::Empty => "nothing".to_string(),
            Element::Leaf(scalar) => format!("text {:?}", scalar.to_string()),
            Element::Tag(tag) => format!("<{}>", tag.name),
            Element::Composite(composite) => format!("component {}", composite.component.name()),
            Element::Fragment(items) => format!("fragment of {} elements", items.len()),
        }
    }
}

/// A structural tag with attributes and children.
#[derive(Debug, Clone, PartialEq)]
pub struct TagElement {
    pub name: TagName,
    pub attributes: Attributes,
    pub children: Vec<Element>,
}

impl TagElement {
    pub fn new(name: impl Into<TagName>) -> Self {
        Self {
            name: name.into(),
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn attrs(mut self, attributes: Attributes) -> Self {
        self.attributes.extend(attributes);
        self
    }

    pub fn child(self, child: impl Into<Element>) -> Self {
        self.children([child.into()])
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(flatten_children(children));
        self
    }
}

/// An unexpanded component together with the attributes and children it was given.
#[derive(Clone)]
pub struct CompositeElement {
    pub component: Arc<dyn Component>,
    pub attributes: Attributes,
    pub children: Vec<Element>,
}

impl CompositeElement {
    pub fn new(component: Arc<dyn Component>) -> Self {
        Self {
            component,
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn attrs(mut self, attributes: Attributes) -> Self {
        self.attributes.extend(attributes);
        self
    }

    pub fn child(self, child: impl Into<Element>) -> Self {
        self.children([child.into()])
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(flatten_children(children));
        self
    }

    pub fn props(&self) -> Props {
        Props {
            attributes: self.attributes.clone(),
            children: self.children.clone(),
        }
    }

    /// Expands the component once against the given scope.
    pub fn render(&self, scope: &mut Scope<'_>) -> Element {
        self.component.render(&self.props(), scope)
    }
}

impl fmt::Debug for CompositeElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeElement")
            .field("component", &self.component.name())
            .field("attributes", &self.attributes)
            .field("children", &self.children)
            .finish()
    }
}

impl PartialEq for CompositeElement {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.component, &other.component)
            && self.attributes == other.attributes
            && self.children == other.children
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Element::Empty, Element::Empty) => true,
            (Element::Leaf(a), Element::Leaf(b)) => a == b,
            (Element::Tag(a), Element::Tag(b)) => a == b,
            (Element::Composite(a), Element::Composite(b)) => a == b,
            (Element::Fragment(a), Element::Fragment(b)) => a == b,
            _ => false,
        }
    }
}

impl From<TagElement> for Element {
    fn from(tag: TagElement) -> Self {
        Element::Tag(tag)
    }
}

impl From<CompositeElement> for Element {
    fn from(composite: CompositeElement) -> Self {
        Element::Composite(composite)
    }
}

impl From<Scalar> for Element {
    fn from(scalar: Scalar) -> Self {
        Element::Leaf(scalar)
    }
}

impl From<&str> for Element {
    fn from(s: &str) -> Self {
        Element::Leaf(s.into())
    }
}

impl From<String> for Element {
    fn from(s: String) -> Self {
        Element::Leaf(s.into())
    }
}

impl From<i64> for Element {
    fn from(n: i64) -> Self {
        Element::Leaf(n.into())
    }
}

impl From<i32> for Element {
    fn from(n: i32) -> Self {
        Element::Leaf(n.into())
    }
}

impl From<u32> for Element {
    fn from(n: u32) -> Self {
        Element::Leaf(n.into())
    }
}

impl From<f64> for Element {
    fn from(n: f64) -> Self {
        Element::Leaf(n.into())
    }
}

impl From<bool> for Element {
    fn from(b: bool) -> Self {
        Element::Leaf(b.into())
    }
}

impl From<Vec<Element>> for Element {
    fn from(items: Vec<Element>) -> Self {
        Element::Fragment(items)
    }
}

impl<T: Into<Element>> From<Option<T>> for Element {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}
