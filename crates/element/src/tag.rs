use std::fmt;

/// The structural tag vocabulary understood by the compiler.
///
/// Names outside the vocabulary are kept as [`TagName::Unknown`] so that the compiler
/// can decide whether to drop them or reject them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TagName {
    Document,
    Header,
    Content,
    Footer,
    Stack,
    Group,
    Column,
    Text,
    Columns,
    Image,
    Table,
    Row,
    Cell,
    Ul,
    Ol,
    Unknown(String),
}

impl TagName {
    pub fn parse(name: &str) -> Self {
        match name {
            "document" => TagName::Document,
            "header" => TagName::Header,
            "content" => TagName::Content,
            "footer" => TagName::Footer,
            "stack" => TagName::Stack,
            "group" => TagName::Group,
            "column" => TagName::Column,
            "text" => TagName::Text,
            "columns" => TagName::Columns,
            "image" => TagName::Image,
            "table" => TagName::Table,
            "row" => TagName::Row,
            "cell" => TagName::Cell,
            "ul" => TagName::Ul,
            "ol" => TagName::Ol,
            other => TagName::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TagName::Document => "document",
            TagName::Header => "header",
            TagName::Content => "content",
            TagName::Footer => "footer",
            TagName::Stack => "stack",
            TagName::Group => "group",
            TagName::Column => "column",
            TagName::Text => "text",
            TagName::Columns => "columns",
            TagName::Image => "image",
            TagName::Table => "table",
            TagName::Row => "row",
            TagName::Cell => "cell",
            TagName::Ul => "ul",
            TagName::Ol => "ol",
            TagName::Unknown(name) => name,
        }
    }

    /// Header, content and footer: the only tags allowed directly under `document`.
    pub fn is_section(&self) -> bool {
        matches!(self, TagName::Header | TagName::Content | TagName::Footer)
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for TagName {
    fn from(name: &str) -> Self {
        TagName::parse(name)
    }
}

impl From<String> for TagName {
    fn from(name: String) -> Self {
        TagName::parse(&name)
    }
}
