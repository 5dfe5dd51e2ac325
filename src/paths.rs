//! Facilities for working with paths within schemas or validated instances.
use serde_json::Value;
use std::{fmt, fmt::Write};

/// JSON Pointer as a wrapper around individual path components.
///
/// Displayed in URI fragment form (`#`, `#/a/b/0`), which is how report messages
/// and resolution faults name locations.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct JSONPointer(Vec<PathChunk>);

/// A single reference token of a [`JSONPointer`].
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum PathChunk {
    /// Object property name.
    Name(String),
    /// Array index.
    Index(usize),
}

impl JSONPointer {
    /// Parse the decoded fragment part of a reference (`""`, `"/a/b"`).
    /// Returns `None` for anything that is not a JSON Pointer, e.g. `"foo"`.
    pub(crate) fn from_fragment(fragment: &str) -> Option<JSONPointer> {
        if fragment.is_empty() {
            return Some(JSONPointer::default());
        }
        if !fragment.starts_with('/') {
            return None;
        }
        Some(JSONPointer(
            fragment
                .split('/')
                .skip(1)
                .map(|token| PathChunk::Name(token.replace("~1", "/").replace("~0", "~")))
                .collect(),
        ))
    }

    /// A new pointer, one token deeper.
    #[must_use]
    pub fn join(&self, chunk: impl Into<PathChunk>) -> JSONPointer {
        let mut chunks = Vec::with_capacity(self.0.len() + 1);
        chunks.extend_from_slice(&self.0);
        chunks.push(chunk.into());
        JSONPointer(chunks)
    }

    /// Follow the pointer inside `document`.
    pub(crate) fn resolve<'v>(&self, document: &'v Value) -> Option<&'v Value> {
        let mut target = document;
        for chunk in &self.0 {
            target = match (target, chunk) {
                (Value::Object(map), PathChunk::Name(name)) => map.get(name)?,
                (Value::Object(map), PathChunk::Index(idx)) => map.get(&idx.to_string())?,
                (Value::Array(list), PathChunk::Name(name)) => list.get(parse_index(name)?)?,
                (Value::Array(list), PathChunk::Index(idx)) => list.get(*idx)?,
                _ => return None,
            };
        }
        Some(target)
    }
}

impl fmt::Display for JSONPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('#')?;
        for chunk in &self.0 {
            f.write_char('/')?;
            match chunk {
                PathChunk::Name(value) => {
                    for ch in value.chars() {
                        match ch {
                            '~' => f.write_str("~0")?,
                            '/' => f.write_str("~1")?,
                            _ => f.write_char(ch)?,
                        }
                    }
                }
                PathChunk::Index(idx) => write!(f, "{}", idx)?,
            }
        }
        Ok(())
    }
}

fn parse_index(s: &str) -> Option<usize> {
    if s.starts_with('+') || (s.starts_with('0') && s.len() != 1) {
        None
    } else {
        s.parse().ok()
    }
}

impl From<String> for PathChunk {
    #[inline]
    fn from(value: String) -> Self {
        PathChunk::Name(value)
    }
}
impl From<&str> for PathChunk {
    #[inline]
    fn from(value: &str) -> Self {
        PathChunk::Name(value.to_string())
    }
}
impl From<usize> for PathChunk {
    #[inline]
    fn from(value: usize) -> Self {
        PathChunk::Index(value)
    }
}
