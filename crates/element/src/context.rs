use indexmap::IndexMap;
use serde_json::Value;
use std::sync::Arc;

/// A key-value environment threaded down the element tree during resolution.
///
/// Contexts are immutable from the outside and cheap to clone: every clone shares the
/// same entries until one side writes, at which point only the writer copies. The
/// compiler hands each child its own [`Context::branch`], so values provided inside one
/// subtree never reach its siblings or its parent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    entries: Arc<IndexMap<String, Value>>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns a copy of this context for a child subtree.
    pub fn branch(&self) -> Context {
        self.clone()
    }

    /// Returns a new context with `key` set, leaving `self` untouched.
    pub fn with(&self, key: impl Into<String>, value: impl Into<Value>) -> Context {
        let mut next = self.branch();
        next.insert(key, value);
        next
    }

    pub(crate) fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        Arc::make_mut(&mut self.entries).insert(key.into(), value.into());
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Context {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut context = Context::new();
        for (key, value) in iter {
            context.insert(key, value);
        }
        context
    }
}
