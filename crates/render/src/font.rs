//! Font descriptors passed through to the renderer.
//!
//! The compiler never reads font files. A [`FontRegistry`] maps a family name, as used
//! in a `font` style attribute, to the files holding each style variant, and is handed
//! to the [`DocumentRenderer`](crate::DocumentRenderer) unchanged.

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// File paths for the style variants of one font family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FontFamily {
    pub normal: PathBuf,
    pub bold: PathBuf,
    pub italics: PathBuf,
    pub bolditalics: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub light: Option<PathBuf>,
}

impl FontFamily {
    /// Uses the same file for every variant.
    pub fn single(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            normal: path.clone(),
            bold: path.clone(),
            italics: path.clone(),
            bolditalics: path,
            light: None,
        }
    }

    /// Builds the conventional `<stem>-Regular.ttf`, `<stem>-Bold.ttf`, ... layout found
    /// in font distributions. The files are not checked for existence.
    pub fn from_dir(dir: impl AsRef<Path>, stem: &str) -> Self {
        let dir = dir.as_ref();
        let file = |variant: &str| dir.join(format!("{stem}-{variant}.ttf"));
        Self {
            normal: file("Regular"),
            bold: file("Bold"),
            italics: file("Italic"),
            bolditalics: file("BoldItalic"),
            light: Some(file("Light")),
        }
    }
}

/// Family name to font files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FontRegistry {
    families: BTreeMap<String, FontFamily>,
}

impl FontRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_family(mut self, name: impl Into<String>, family: FontFamily) -> Self {
        self.insert(name, family);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, family: FontFamily) -> Option<FontFamily> {
        let name = name.into();
        log::debug!("Registering font family '{}'", name);
        self.families.insert(name, family)
    }

    pub fn get(&self, name: &str) -> Option<&FontFamily> {
        self.families.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.families.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.families.keys().map(String::as_str)
    }
}
