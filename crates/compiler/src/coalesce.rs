use serde_json::Number;
use treedoc_docdef::{Content, TextValue};
use treedoc_element::Scalar;

enum Entry {
    Text(Scalar),
    Content(Content),
}

/// Accumulates a compiled child list, merging adjacent text.
///
/// Text stays a [`Scalar`] until the list is finished so that a lone number keeps its
/// numeric form and merged numbers print the way they were written.
#[derive(Default)]
pub(crate) struct ChildList {
    entries: Vec<Entry>,
}

impl ChildList {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push_text(&mut self, scalar: &Scalar) {
        if let Some(Entry::Text(previous)) = self.entries.last_mut() {
            *previous = Scalar::Str(format!("{previous}{scalar}"));
        } else {
            self.entries.push(Entry::Text(scalar.clone()));
        }
    }

    pub(crate) fn push(&mut self, content: Content) {
        self.entries.push(Entry::Content(content));
    }

    pub(crate) fn finish(self) -> Vec<Content> {
        self.entries
            .into_iter()
            .map(|entry| match entry {
                Entry::Text(scalar) => Content::Text(text_value(scalar)),
                Entry::Content(content) => content,
            })
            .collect()
    }
}

fn text_value(scalar: Scalar) -> TextValue {
    match scalar {
        Scalar::Str(s) => TextValue::String(s),
        Scalar::Int(n) => TextValue::Number(n.into()),
        Scalar::Float(f) => Number::from_f64(f)
            .map(TextValue::Number)
            .unwrap_or_else(|| TextValue::String(Scalar::Float(f).to_string())),
        Scalar::Bool(b) => TextValue::String(b.to_string()),
    }
}
