// Author: Alexander Starov
// License: MIT

use indexmap::IndexMap;

/// Properties of one `@name { ... }` block.
pub type Block = IndexMap<String, Value>;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Number(f64),
    Boolean(bool),
    Array(Vec<Value>),
    Object(IndexMap<String, Value>),
}

/// A parsed FPL document: block name to its properties.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    blocks: IndexMap<String, Block>,
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        if let Value::String(s) = self { Some(s) } else { None }
    }

    pub fn as_number(&self) -> Option<f64> {
        if let Value::Number(n) = self { Some(*n) } else { None }
    }

    pub fn as_bool(&self) -> Option<bool> {
        if let Value::Boolean(b) = self { Some(*b) } else { None }
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        if let Value::Array(items) = self { Some(items) } else { None }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        if let Value::Object(entries) = self { Some(entries) } else { None }
    }

    /// Look up a key if this value is an object.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|entries| entries.get(key))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Number(_) => "number",
            Value::Boolean(_) => "boolean",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a block, replacing any earlier block of the same name wholesale.
    pub(crate) fn insert_block(&mut self, name: String, block: Block) {
        self.blocks.insert(name, block);
    }

    pub fn get(&self, name: &str) -> Option<&Block> {
        self.blocks.get(name)
    }

    /// Look up a single property of a block.
    pub fn property(&self, block: &str, key: &str) -> Option<&Value> {
        self.blocks.get(block).and_then(|props| props.get(key))
    }

    pub fn contains_block(&self, name: &str) -> bool {
        self.blocks.contains_key(name)
    }

    pub fn block_names(&self) -> impl Iterator<Item = &str> {
        self.blocks.keys().map(String::as_str)
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Block> {
        self.blocks.iter()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn into_inner(self) -> IndexMap<String, Block> {
        self.blocks
    }
}

impl IntoIterator for Document {
    type Item = (String, Block);
    type IntoIter = indexmap::map::IntoIter<String, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = (&'a String, &'a Block);
    type IntoIter = indexmap::map::Iter<'a, String, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
