//! Implements the "Compilation" phase.
//! It walks a resolved element tree, validates where structural tags appear, and builds
//! the `DocDefinition` handed to the layout renderer.

use crate::coalesce::ChildList;
use crate::error::CompileError;
use crate::options::CompileOptions;
use crate::resolve::{Resolved, resolve};
use serde_json::Value;
use treedoc_docdef::{Content, DocDefinition, DocInfo, Fragment, TableBody, TextBody};
use treedoc_element::{Context, Element, TagElement, TagName};

/// Compiles `root` with an empty starting context.
pub fn compile(root: &Element, options: &CompileOptions) -> Result<DocDefinition, CompileError> {
    Compiler::new(options).compile_document(root, &Context::new())
}

/// Compiles `root` with `context` visible to every component in the tree.
pub fn compile_with_context(
    root: &Element,
    context: &Context,
    options: &CompileOptions,
) -> Result<DocDefinition, CompileError> {
    Compiler::new(options).compile_document(root, context)
}

/// A stateless compiler that transforms an element tree into a document definition.
pub struct Compiler<'a> {
    options: &'a CompileOptions,
}

impl<'a> Compiler<'a> {
    pub fn new(options: &'a CompileOptions) -> Self {
        Self { options }
    }

    /// Resolves the root and assembles the document definition.
    pub fn compile_document(
        &self,
        root: &Element,
        context: &Context,
    ) -> Result<DocDefinition, CompileError> {
        let mut scoped = context.branch();
        match resolve(root, &mut scoped) {
            Resolved::Tag(tag) if tag.name == TagName::Document => {
                let definition = self.assemble(&tag, &scoped)?;
                log::debug!(
                    "Compiled document (header: {}, content: {}, footer: {})",
                    definition.header.is_some(),
                    definition.content.is_some(),
                    definition.footer.is_some()
                );
                Ok(definition)
            }
            other => Err(CompileError::RootElement {
                found: other.describe(),
            }),
        }
    }

    fn assemble(&self, document: &TagElement, context: &Context) -> Result<DocDefinition, CompileError> {
        let mut definition = DocDefinition::default();
        for child in &document.children {
            self.assemble_section(child, context, &mut definition)?;
        }

        let attribute = |key: &str| document.attributes.get(key).filter(|v| is_set(v)).cloned();
        definition.page_size = attribute("size");
        definition.page_margins = attribute("margin");

        let info = DocInfo {
            title: attribute("title"),
            author: attribute("author"),
            subject: attribute("subject"),
            keywords: attribute("keywords"),
        };
        if !info.is_empty() {
            definition.info = Some(info);
        }
        definition.default_style = self.options.default_style.clone();
        Ok(definition)
    }

    /// Resolves one child of `document` and stores it under its section key.
    fn assemble_section(
        &self,
        child: &Element,
        context: &Context,
        definition: &mut DocDefinition,
    ) -> Result<(), CompileError> {
        let mut scoped = context.branch();
        match resolve(child, &mut scoped) {
            Resolved::Empty => Ok(()),
            Resolved::Leaf(scalar) if scalar.is_blank(self.options.drop_zero) => Ok(()),
            leaf @ Resolved::Leaf(_) => Err(CompileError::UnexpectedTopLevelChild {
                found: leaf.describe(),
            }),
            Resolved::Fragment(items) => {
                for item in items.iter() {
                    self.assemble_section(item, &scoped, definition)?;
                }
                Ok(())
            }
            Resolved::Tag(tag) => {
                let Some(section) = self.compile_tag(&tag, &scoped, true)? else {
                    return Ok(());
                };
                let slot = match tag.name {
                    TagName::Header => &mut definition.header,
                    TagName::Footer => &mut definition.footer,
                    _ => &mut definition.content,
                };
                if slot.is_some() {
                    log::warn!("Duplicate <{}> section; the later one replaces the earlier", tag.name);
                }
                *slot = Some(section);
                Ok(())
            }
        }
    }

    /// Compiles a resolved tag into its layout primitive.
    ///
    /// `is_top_level` is true only for the immediate (resolved) children of `document`.
    /// Returns `None` for tags that produce no output.
    pub fn compile_tag(
        &self,
        tag: &TagElement,
        context: &Context,
        is_top_level: bool,
    ) -> Result<Option<Content>, CompileError> {
        if !self.check_placement(&tag.name, is_top_level)? {
            return Ok(None);
        }

        let children = self.compile_children(&tag.children, context)?;
        let mut attributes = tag.attributes.clone();

        let fragment = match tag.name {
            TagName::Header
            | TagName::Content
            | TagName::Footer
            | TagName::Stack
            | TagName::Group
            | TagName::Column
            | TagName::Cell => Fragment::Stack {
                stack: children,
                attributes,
            },
            TagName::Text => Fragment::Text {
                text: TextBody::from_children(children),
                attributes,
            },
            TagName::Columns => Fragment::Columns {
                columns: children,
                attributes,
            },
            TagName::Image => Fragment::Image {
                image: attributes.remove("src"),
                attributes,
            },
            TagName::Table => Fragment::Table {
                table: TableBody {
                    body: children,
                    header_rows: attributes.remove("headerRows"),
                    widths: attributes.remove("widths"),
                },
                attributes,
            },
            TagName::Ul => Fragment::Ul {
                ul: children,
                attributes,
            },
            TagName::Ol => Fragment::Ol {
                ol: children,
                attributes,
            },
            TagName::Row => return Ok(Some(Content::Row(children))),
            // rejected or dropped by check_placement
            TagName::Document | TagName::Unknown(_) => return Ok(None),
        };
        Ok(Some(Content::Fragment(fragment)))
    }

    /// Enforces where structural tags may appear. Returns false if the tag is dropped.
    fn check_placement(&self, name: &TagName, is_top_level: bool) -> Result<bool, CompileError> {
        match name {
            TagName::Document => Err(CompileError::DuplicateRoot),
            TagName::Unknown(name) if self.options.strict_tags => {
                Err(CompileError::UnknownTag { name: name.clone() })
            }
            TagName::Unknown(name) => {
                log::warn!("Dropping unknown tag <{}>", name);
                Ok(false)
            }
            name if name.is_section() && !is_top_level => Err(CompileError::TopLevelPlacement {
                tag: name.to_string(),
            }),
            name if !name.is_section() && is_top_level => {
                Err(CompileError::UnexpectedTopLevelChild {
                    found: format!("<{name}>"),
                })
            }
            _ => Ok(true),
        }
    }

    /// Resolves and compiles a child list, each child against its own context branch.
    fn compile_children(
        &self,
        children: &[Element],
        context: &Context,
    ) -> Result<Vec<Content>, CompileError> {
        let mut list = ChildList::new();
        for child in children {
            self.compile_child(child, context, &mut list)?;
        }
        Ok(list.finish())
    }

    fn compile_child(
        &self,
        child: &Element,
        context: &Context,
        list: &mut ChildList,
    ) -> Result<(), CompileError> {
        let mut scoped = context.branch();
        match resolve(child, &mut scoped) {
            Resolved::Empty => {}
            Resolved::Leaf(scalar) => {
                if !scalar.is_blank(self.options.drop_zero) {
                    list.push_text(&scalar);
                }
            }
            Resolved::Tag(tag) => {
                if let Some(content) = self.compile_tag(&tag, &scoped, false)? {
                    list.push(content);
                }
            }
            Resolved::Fragment(items) => {
                for item in items.iter() {
                    self.compile_child(item, &scoped, list)?;
                }
            }
        }
        Ok(())
    }
}

/// Document attributes that are null, `false`, `""` or `0` are treated as unset.
fn is_set(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64() != Some(0.0),
        _ => true,
    }
}
