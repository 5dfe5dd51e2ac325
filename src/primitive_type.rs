//! Classification of instances into the primitive kinds used by `type`, `disallow` and formats.
use serde_json::Value;
use std::{convert::TryFrom, fmt, ops::BitOrAssign};

/// For faster error handling in "type" keyword validator we have this enum, to match
/// with it instead of a string.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PrimitiveType {
    Array,
    Boolean,
    Integer,
    Null,
    Number,
    Object,
    String,
}

impl PrimitiveType {
    /// The kind of `instance`. Numbers without a fractional representation are integers;
    /// `1.0` is a number, as it is in the draft-03 test fixtures.
    #[must_use]
    pub fn of(instance: &Value) -> PrimitiveType {
        match instance {
            Value::Array(_) => PrimitiveType::Array,
            Value::Bool(_) => PrimitiveType::Boolean,
            Value::Null => PrimitiveType::Null,
            Value::Number(number) => {
                if number.is_u64() || number.is_i64() {
                    PrimitiveType::Integer
                } else {
                    PrimitiveType::Number
                }
            }
            Value::Object(_) => PrimitiveType::Object,
            Value::String(_) => PrimitiveType::String,
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimitiveType::Array => write!(f, "array"),
            PrimitiveType::Boolean => write!(f, "boolean"),
            PrimitiveType::Integer => write!(f, "integer"),
            PrimitiveType::Null => write!(f, "null"),
            PrimitiveType::Number => write!(f, "number"),
            PrimitiveType::Object => write!(f, "object"),
            PrimitiveType::String => write!(f, "string"),
        }
    }
}

impl TryFrom<&str> for PrimitiveType {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "array" => Ok(PrimitiveType::Array),
            "boolean" => Ok(PrimitiveType::Boolean),
            "integer" => Ok(PrimitiveType::Integer),
            "null" => Ok(PrimitiveType::Null),
            "number" => Ok(PrimitiveType::Number),
            "object" => Ok(PrimitiveType::Object),
            "string" => Ok(PrimitiveType::String),
            _ => Err(()),
        }
    }
}

const fn primitive_type_to_bit_map_representation(primitive_type: PrimitiveType) -> u8 {
    match primitive_type {
        PrimitiveType::Array => 1,
        PrimitiveType::Boolean => 2,
        PrimitiveType::Integer => 4,
        PrimitiveType::Null => 8,
        PrimitiveType::Number => 16,
        PrimitiveType::Object => 32,
        PrimitiveType::String => 64,
    }
}

const ALL_TYPES: [PrimitiveType; 7] = [
    PrimitiveType::Array,
    PrimitiveType::Boolean,
    PrimitiveType::Integer,
    PrimitiveType::Null,
    PrimitiveType::Number,
    PrimitiveType::Object,
    PrimitiveType::String,
];

/// Compact representation of multiple [`PrimitiveType`]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PrimitiveTypesBitMap {
    inner: u8,
}

impl PrimitiveTypesBitMap {
    #[must_use]
    pub const fn new() -> Self {
        Self { inner: 0 }
    }

    #[must_use]
    pub const fn add_type(mut self, primitive_type: PrimitiveType) -> Self {
        self.inner |= primitive_type_to_bit_map_representation(primitive_type);
        self
    }

    #[must_use]
    pub const fn contains_type(self, primitive_type: PrimitiveType) -> bool {
        primitive_type_to_bit_map_representation(primitive_type) & self.inner != 0
    }

    /// Whether `instance` is of one of the contained kinds. `number` covers integers.
    #[must_use]
    pub fn contains_instance(self, instance: &Value) -> bool {
        match PrimitiveType::of(instance) {
            PrimitiveType::Integer => {
                self.contains_type(PrimitiveType::Integer)
                    || self.contains_type(PrimitiveType::Number)
            }
            primitive_type => self.contains_type(primitive_type),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.inner == 0
    }

    /// Contained kinds, in alphabetical order.
    pub fn iter(self) -> impl Iterator<Item = PrimitiveType> {
        ALL_TYPES
            .iter()
            .copied()
            .filter(move |primitive_type| self.contains_type(*primitive_type))
    }
}

impl BitOrAssign<PrimitiveType> for PrimitiveTypesBitMap {
    #[inline]
    fn bitor_assign(&mut self, rhs: PrimitiveType) {
        *self = self.add_type(rhs);
    }
}

impl From<PrimitiveType> for PrimitiveTypesBitMap {
    fn from(primitive_type: PrimitiveType) -> Self {
        PrimitiveTypesBitMap::new().add_type(primitive_type)
    }
}
