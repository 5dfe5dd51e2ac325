use crate::error::SchemaError;
use num_cmp::NumCmp;
use serde_json::{Map, Number, Value};
use std::{
    cmp::Ordering,
    collections::{hash_map::DefaultHasher, HashSet},
    hash::{Hash, Hasher},
};

macro_rules! num_cmp {
    ($left:expr, $right:expr) => {
        if let Some(b) = $right.as_u64() {
            NumCmp::num_eq($left, b)
        } else if let Some(b) = $right.as_i64() {
            NumCmp::num_eq($left, b)
        } else {
            NumCmp::num_eq($left, $right.as_f64().expect("Always valid"))
        }
    };
}

macro_rules! num_ordering {
    ($left:expr, $right:expr) => {
        if let Some(b) = $right.as_u64() {
            NumCmp::num_cmp($left, b)
        } else if let Some(b) = $right.as_i64() {
            NumCmp::num_cmp($left, b)
        } else {
            NumCmp::num_cmp($left, $right.as_f64().expect("Always valid"))
        }
    };
}

/// Exact numeric ordering across integer and float representations.
#[inline]
pub(crate) fn compare(left: &Number, right: &Number) -> Option<Ordering> {
    if let Some(a) = left.as_u64() {
        num_ordering!(a, right)
    } else if let Some(a) = left.as_i64() {
        num_ordering!(a, right)
    } else {
        let a = left.as_f64().expect("Always valid");
        num_ordering!(a, right)
    }
}

/// JSON equality where numbers compare by value, so `1 == 1.0`.
#[inline]
pub(crate) fn equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(left), Value::Number(right)) => {
            if let Some(a) = left.as_u64() {
                num_cmp!(a, right)
            } else if let Some(a) = left.as_i64() {
                num_cmp!(a, right)
            } else {
                let a = left.as_f64().expect("Always valid");
                num_cmp!(a, right)
            }
        }
        (Value::Array(left), Value::Array(right)) => equal_arrays(left, right),
        (Value::Object(left), Value::Object(right)) => equal_objects(left, right),
        (_, _) => left == right,
    }
}

#[inline]
pub(crate) fn equal_arrays(left: &[Value], right: &[Value]) -> bool {
    left.len() == right.len() && left.iter().zip(right.iter()).all(|(a, b)| equal(a, b))
}

#[inline]
pub(crate) fn equal_objects(left: &Map<String, Value>, right: &Map<String, Value>) -> bool {
    left.len() == right.len()
        && left
            .iter()
            .all(|(key, a)| right.get(key).map_or(false, |b| equal(a, b)))
}

// Based on implementation proposed by Sven Marnach:
// https://stackoverflow.com/questions/60882381/what-is-the-fastest-correct-way-to-detect-that-there-are-no-duplicates-in-a-json
pub(crate) struct HashedValue<'a>(&'a Value);

impl PartialEq for HashedValue<'_> {
    fn eq(&self, other: &Self) -> bool {
        equal(self.0, other.0)
    }
}

impl Eq for HashedValue<'_> {}

impl Hash for HashedValue<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.0 {
            Value::Null => state.write_u32(3_221_225_473), // chosen randomly
            Value::Bool(ref item) => item.hash(state),
            Value::Number(ref item) => {
                // Equal numbers of different representations must collide
                let number = item.as_f64().unwrap_or(0.0);
                if number == 0.0 {
                    0_u64.hash(state)
                } else {
                    number.to_bits().hash(state)
                }
            }
            Value::String(ref item) => item.hash(state),
            Value::Array(ref items) => {
                for item in items {
                    HashedValue(item).hash(state);
                }
            }
            Value::Object(ref items) => {
                let mut hash = 0;
                for (key, value) in items {
                    // We have no way of building a new hasher of type `H`, so we
                    // hardcode using the default hasher of a hash map.
                    let mut item_hasher = DefaultHasher::default();
                    key.hash(&mut item_hasher);
                    HashedValue(value).hash(&mut item_hasher);
                    hash ^= item_hasher.finish();
                }
                state.write_u64(hash);
            }
        }
    }
}

pub(crate) fn is_unique(items: &[Value]) -> bool {
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().map(HashedValue).all(move |x| seen.insert(x))
}

/// `"a", "b"` for property names in messages.
pub(crate) fn quoted<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    names
        .into_iter()
        .map(|name| format!(r#""{}""#, name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Value of a keyword that must be a non-negative integer.
pub(crate) fn non_negative_integer(keyword: &'static str, schema: &Value) -> Result<u64, SchemaError> {
    schema
        .as_u64()
        .ok_or_else(|| SchemaError::invalid_keyword(keyword, "a non-negative integer", schema))
}
