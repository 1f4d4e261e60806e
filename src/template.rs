//! Static element trees loaded from JSON.
//!
//! A JSON template describes an element tree without components:
//!
//! - strings, numbers and booleans are leaves, `null` renders nothing;
//! - arrays are fragments whose items are spliced into the parent;
//! - objects are tags: `{ "tag": "text", "attributes": { ... }, "children": [ ... ] }`.
//!   `attributes` and `children` are optional, and `children` may be a single value.

use crate::error::PipelineError;
use serde_json::Value;
use std::fs;
use std::io;
use std::path::Path;
use treedoc_element::{Attributes, Element, Scalar, create};

/// Parses a JSON template string into an element tree.
pub fn from_json_str(source: &str) -> Result<Element, PipelineError> {
    let value: Value = serde_json::from_str(source)?;
    from_json_value(&value)
}

/// Converts a parsed JSON template into an element tree.
pub fn from_json_value(value: &Value) -> Result<Element, PipelineError> {
    convert(value, "")
}

/// Reads and parses a JSON template file.
pub fn from_json_file(path: impl AsRef<Path>) -> Result<Element, PipelineError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|e| {
        PipelineError::Io(io::Error::new(
            e.kind(),
            format!("Failed to read template from '{}': {}", path.display(), e),
        ))
    })?;
    log::debug!("Loaded template '{}' ({} bytes)", path.display(), source.len());
    from_json_str(&source)
}

fn convert(value: &Value, pointer: &str) -> Result<Element, PipelineError> {
    match value {
        Value::Null => Ok(Element::Empty),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| convert(item, &format!("{pointer}/{i}")))
            .collect::<Result<Vec<_>, _>>()
            .map(Element::Fragment),
        Value::Object(object) => {
            let mut name = None;
            let mut attributes = Attributes::new();
            let mut children = Vec::new();
            for (key, field) in object {
                match (key.as_str(), field) {
                    ("tag", Value::String(tag)) => name = Some(tag.clone()),
                    ("attributes", Value::Object(map)) => attributes = map.clone(),
                    ("attributes", Value::Null) => {}
                    ("children", Value::Array(items)) => {
                        for (i, item) in items.iter().enumerate() {
                            children.push(convert(item, &format!("{pointer}/children/{i}"))?);
                        }
                    }
                    ("children", single) => {
                        children.push(convert(single, &format!("{pointer}/children"))?)
                    }
                    ("tag" | "attributes", other) => {
                        return Err(PipelineError::Template(format!(
                            "'{}' at '{}' has the wrong type: {}",
                            key,
                            display_pointer(pointer),
                            other
                        )));
                    }
                    (unexpected, _) => {
                        return Err(PipelineError::Template(format!(
                            "Unexpected key '{}' at '{}'",
                            unexpected,
                            display_pointer(pointer)
                        )));
                    }
                }
            }
            let name = name.ok_or_else(|| {
                PipelineError::Template(format!(
                    "Object at '{}' has no 'tag'",
                    display_pointer(pointer)
                ))
            })?;
            Ok(create(name, attributes, children))
        }
        scalar => Ok(Scalar::from_json(scalar).map(Element::Leaf).unwrap_or_default()),
    }
}

fn display_pointer(pointer: &str) -> &str {
    if pointer.is_empty() { "/" } else { pointer }
}
