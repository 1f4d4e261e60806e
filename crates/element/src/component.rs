use crate::context::Context;
use crate::element::Element;
use crate::Attributes;
use serde_json::Value;

/// What a component is rendered with: its attributes and its flattened children.
#[derive(Debug, Clone, Default)]
pub struct Props {
    pub attributes: Attributes,
    pub children: Vec<Element>,
}

impl Props {
    pub fn attr(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    pub fn attr_str(&self, key: &str) -> Option<&str> {
        self.attr(key).and_then(Value::as_str)
    }

    /// Returns a copy of the first child, or [`Element::Empty`] if there is none.
    pub fn first_child(&self) -> Element {
        self.children.first().cloned().unwrap_or_default()
    }

    /// Returns all children as a single fragment.
    pub fn children_fragment(&self) -> Element {
        Element::Fragment(self.children.clone())
    }
}

/// Gives a component access to the context at its position in the tree.
///
/// Values provided through [`Scope::provide`] are visible to everything the component
/// renders, and to the descendants of that output, but not to the component's siblings
/// or its parent.
pub struct Scope<'a> {
    context: &'a mut Context,
}

impl<'a> Scope<'a> {
    pub fn new(context: &'a mut Context) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &Context {
        self.context
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.context.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.context.get_str(key)
    }

    /// Sets `key` for this component's own output and its descendants.
    pub fn provide(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.context.insert(key, value);
    }

    pub fn provide_all<K, V>(&mut self, entries: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<Value>,
    {
        for (key, value) in entries {
            self.context.insert(key, value);
        }
    }
}

/// A function-valued node: expands into another element when the tree is resolved.
pub trait Component: Send + Sync {
    fn render(&self, props: &Props, scope: &mut Scope<'_>) -> Element;

    /// A name for log output.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<F> Component for F
where
    F: Fn(&Props, &mut Scope<'_>) -> Element + Send + Sync,
{
    fn render(&self, props: &Props, scope: &mut Scope<'_>) -> Element {
        self(props, scope)
    }
}
