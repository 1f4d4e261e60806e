//! Document Definition
//! The compiled, renderer-facing representation of a document. It is the only thing the
//! compiler produces, and serializes to the definition shape a pdfmake-style layout
//! renderer consumes.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Number, Value};

/// Attributes passed through verbatim onto compiled fragments.
pub type Attributes = serde_json::Map<String, Value>;

// --- Content ---

/// A compiled text run: a string, or a number kept numeric.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TextValue {
    String(String),
    Number(Number),
}

impl From<&str> for TextValue {
    fn from(s: &str) -> Self {
        TextValue::String(s.to_string())
    }
}

impl From<String> for TextValue {
    fn from(s: String) -> Self {
        TextValue::String(s)
    }
}

impl From<i64> for TextValue {
    fn from(n: i64) -> Self {
        TextValue::Number(n.into())
    }
}

/// One entry of a compiled child list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Content {
    Text(TextValue),
    Fragment(Fragment),
    /// A table row: a bare list of cells.
    Row(Vec<Content>),
}

impl Content {
    pub fn text(value: impl Into<TextValue>) -> Self {
        Content::Text(value.into())
    }
}

impl From<Fragment> for Content {
    fn from(fragment: Fragment) -> Self {
        Content::Fragment(fragment)
    }
}

/// The body of a `text` fragment: a single value when there is exactly one child.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TextBody {
    Single(Box<Content>),
    Runs(Vec<Content>),
}

impl TextBody {
    pub fn from_children(mut children: Vec<Content>) -> Self {
        if children.len() == 1 {
            if let Some(only) = children.pop() {
                return TextBody::Single(Box::new(only));
            }
        }
        TextBody::Runs(children)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableBody {
    pub body: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_rows: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub widths: Option<Value>,
}

/// A compiled layout primitive.
///
/// Each variant serializes as an object whose first key names the primitive, followed
/// by the passthrough attributes. An attribute that collides with the primitive's own
/// key is not emitted.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    Stack {
        stack: Vec<Content>,
        attributes: Attributes,
    },
    Text {
        text: TextBody,
        attributes: Attributes,
    },
    Columns {
        columns: Vec<Content>,
        attributes: Attributes,
    },
    Image {
        image: Option<Value>,
        attributes: Attributes,
    },
    Table {
        table: TableBody,
        attributes: Attributes,
    },
    Ul {
        ul: Vec<Content>,
        attributes: Attributes,
    },
    Ol {
        ol: Vec<Content>,
        attributes: Attributes,
    },
}

impl Fragment {
    /// The key the primitive is serialized under.
    pub fn kind(&self) -> &'static str {
        match self {
            Fragment::Stack { .. } => "stack",
            Fragment::Text { .. } => "text",
            Fragment::Columns { .. } => "columns",
            Fragment::Image { .. } => "image",
            Fragment::Table { .. } => "table",
            Fragment::Ul { .. } => "ul",
            Fragment::Ol { .. } => "ol",
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            Fragment::Stack { attributes, .. }
            | Fragment::Text { attributes, .. }
            | Fragment::Columns { attributes, .. }
            | Fragment::Image { attributes, .. }
            | Fragment::Table { attributes, .. }
            | Fragment::Ul { attributes, .. }
            | Fragment::Ol { attributes, .. } => attributes,
        }
    }
}

impl Serialize for Fragment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let key = self.kind();
        let attributes = self.attributes();
        let mut map = serializer.serialize_map(None)?;
        match self {
            Fragment::Stack { stack: items, .. }
            | Fragment::Columns { columns: items, .. }
            | Fragment::Ul { ul: items, .. }
            | Fragment::Ol { ol: items, .. } => map.serialize_entry(key, items)?,
            Fragment::Text { text, .. } => map.serialize_entry(key, text)?,
            Fragment::Table { table, .. } => map.serialize_entry(key, table)?,
            Fragment::Image { image, .. } => {
                if let Some(src) = image {
                    map.serialize_entry(key, src)?;
                }
            }
        }
        for (name, value) in attributes {
            if name != key {
                map.serialize_entry(name, value)?;
            }
        }
        map.end()
    }
}

// --- Document ---

/// Document metadata copied from the `document` tag.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DocInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Value>,
}

impl DocInfo {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.subject.is_none()
            && self.keywords.is_none()
    }
}

/// The complete compiled document handed to the layout renderer.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_margins: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<DocInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_style: Option<Value>,
}

impl DocDefinition {
    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
