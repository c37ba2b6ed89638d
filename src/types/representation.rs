use serde::{Deserialize, Serialize};
use std::fmt;

/// The low-level storage kind of a host value.
///
/// This is the only structural fact the classifier reads besides the class
/// annotation; everything a host cannot map onto one of the array kinds is `Other`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RepresentationKind {
    BooleanArray,
    IntegerArray,
    FloatArray,
    ComplexArray,
    StringArray,
    ByteArray,
    GenericSequence,
    Other,
}

impl fmt::Display for RepresentationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::BooleanArray => "boolean-array",
            Self::IntegerArray => "integer-array",
            Self::FloatArray => "float-array",
            Self::ComplexArray => "complex-array",
            Self::StringArray => "string-array",
            Self::ByteArray => "byte-array",
            Self::GenericSequence => "generic-sequence",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}
