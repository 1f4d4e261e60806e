//! Lazy expansion of composite elements.

use std::borrow::Cow;
use treedoc_element::{CompositeElement, Context, Element, Scalar, Scope, TagElement};

/// An element with every composite layer expanded away.
///
/// Borrows from the input tree when no expansion was needed.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved<'e> {
    Empty,
    Leaf(Cow<'e, Scalar>),
    Tag(Cow<'e, TagElement>),
    Fragment(Cow<'e, [Element]>),
}

impl Resolved<'_> {
    pub fn describe(&self) -> String {
        match self {
            Resolved::Empty => "nothing".to_string(),
            Resolved::Leaf(scalar) => format!("text {:?}", scalar.to_string()),
            Resolved::Tag(tag) => format!("<{}>", tag.name),
            Resolved::Fragment(items) => format!("fragment of {} elements", items.len()),
        }
    }
}

/// Expands `element` until it is no longer a composite.
///
/// Each component is rendered against `context`; values it provides are written into
/// `context`, so the caller must pass a branch that belongs to this element alone. The
/// same branch is then used for the resolved element's children.
pub fn resolve<'e>(element: &'e Element, context: &mut Context) -> Resolved<'e> {
    let mut rendered = match element {
        Element::Empty => return Resolved::Empty,
        Element::Leaf(scalar) => return Resolved::Leaf(Cow::Borrowed(scalar)),
        Element::Tag(tag) => return Resolved::Tag(Cow::Borrowed(tag)),
        Element::Fragment(items) => return Resolved::Fragment(Cow::Borrowed(items)),
        Element::Composite(composite) => expand(composite, context),
    };

    let mut depth = 1usize;
    loop {
        rendered = match rendered {
            Element::Composite(composite) => {
                depth += 1;
                expand(&composite, context)
            }
            Element::Empty => {
                log::debug!("Component chain of depth {} rendered nothing", depth);
                return Resolved::Empty;
            }
            Element::Leaf(scalar) => return Resolved::Leaf(Cow::Owned(scalar)),
            Element::Tag(tag) => return Resolved::Tag(Cow::Owned(tag)),
            Element::Fragment(items) => return Resolved::Fragment(Cow::Owned(items)),
        };
    }
}

fn expand(composite: &CompositeElement, context: &mut Context) -> Element {
    log::trace!(
        "Expanding component {} with {} context entries",
        composite.component.name(),
        context.len()
    );
    let mut scope = Scope::new(context);
    composite.render(&mut scope)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use treedoc_element::builders::*;
    use treedoc_element::{Props, TagName};

    #[test]
    fn plain_elements_are_borrowed() {
        let element: Element = text("hi").into();
        let mut ctx = Context::new();
        match resolve(&element, &mut ctx) {
            Resolved::Tag(Cow::Borrowed(tag)) => assert_eq!(tag.name, TagName::Text),
            other => panic!("expected a borrowed tag, got {other:?}"),
        }
    }

    #[test]
    fn chains_of_composites_are_unwrapped() {
        let inner = Element::component(|_: &Props, _: &mut Scope<'_>| text("deep").into());
        let outer = Element::component(move |_: &Props, _: &mut Scope<'_>| inner.clone().into());
        let element: Element = outer.into();

        let mut ctx = Context::new();
        match resolve(&element, &mut ctx) {
            Resolved::Tag(tag) => assert_eq!(tag.children, vec![Element::from("deep")]),
            other => panic!("expected a tag, got {other:?}"),
        }
    }

    #[test]
    fn provided_values_reach_nested_components_but_not_the_source_context() {
        let reader = Element::component(|_: &Props, scope: &mut Scope<'_>| {
            Element::from(scope.get_str("theme").unwrap_or("none").to_string())
        });
        let provider = Element::component(move |_: &Props, scope: &mut Scope<'_>| {
            scope.provide("theme", "dark");
            reader.clone().into()
        });
        let element: Element = provider.into();

        let parent = Context::new();
        let mut branch = parent.branch();
        let resolved = resolve(&element, &mut branch);

        assert_eq!(resolved, Resolved::Leaf(Cow::Owned(Scalar::from("dark"))));
        assert_eq!(branch.get("theme"), Some(&json!("dark")));
        assert!(parent.is_empty());
    }

    #[test]
    fn component_rendering_nothing_resolves_to_empty() {
        let element: Element = Element::component(|_: &Props, _: &mut Scope<'_>| Element::Empty).into();
        let mut ctx = Context::new();
        assert_eq!(resolve(&element, &mut ctx), Resolved::Empty);
    }
}
