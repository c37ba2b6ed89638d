//! This module defines the canonical, type-safe representation of vector kinds.

use crate::error::VctypeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of vector kinds a value can be classified as.
///
/// The display names are part of the public contract: they are what
/// `type_of()` returns, what serde writes, and what `FromStr` parses.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TypeTag {
    #[serde(rename = "null")]
    Null,
    #[serde(rename = "logical")]
    Logical,
    #[serde(rename = "integer")]
    Integer,
    #[serde(rename = "double")]
    Double,
    #[serde(rename = "complex")]
    Complex,
    #[serde(rename = "character")]
    Character,
    #[serde(rename = "raw")]
    Raw,
    #[serde(rename = "list")]
    List,
    #[serde(rename = "dataframe")]
    DataFrame,
    #[serde(rename = "s3")]
    Extensible,
    #[serde(rename = "scalar")]
    OpaqueScalar,
}

impl TypeTag {
    /// Every tag, in declaration order.
    pub const ALL: [TypeTag; 11] = [
        TypeTag::Null,
        TypeTag::Logical,
        TypeTag::Integer,
        TypeTag::Double,
        TypeTag::Complex,
        TypeTag::Character,
        TypeTag::Raw,
        TypeTag::List,
        TypeTag::DataFrame,
        TypeTag::Extensible,
        TypeTag::OpaqueScalar,
    ];

    /// Returns the stable display name of the tag.
    ///
    /// No wildcard arm: adding a tag without a name is a compile error.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Logical => "logical",
            Self::Integer => "integer",
            Self::Double => "double",
            Self::Complex => "complex",
            Self::Character => "character",
            Self::Raw => "raw",
            Self::List => "list",
            Self::DataFrame => "dataframe",
            Self::Extensible => "s3",
            Self::OpaqueScalar => "scalar",
        }
    }

    /// Returns `true` for the concrete built-in vector kinds, which are
    /// vectors without consulting any resolver.
    pub fn is_builtin_vector(&self) -> bool {
        matches!(
            self,
            Self::Logical
                | Self::Integer
                | Self::Double
                | Self::Complex
                | Self::Character
                | Self::Raw
                | Self::List
                | Self::DataFrame
        )
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeTag {
    type Err = VctypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeTag::ALL
            .iter()
            .copied()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| VctypeError::UnknownTypeName(s.to_string()))
    }
}

/// The result of classifying a value.
///
/// Mirrors `TypeTag` one-to-one, except that `Extensible` keeps the value's
/// class names so resolver logic can match on them without re-reading the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VectorType {
    Null,
    Logical,
    Integer,
    Double,
    Complex,
    Character,
    Raw,
    List,
    DataFrame,
    Extensible(Vec<String>),
    OpaqueScalar,
}

impl VectorType {
    pub fn tag(&self) -> TypeTag {
        match self {
            Self::Null => TypeTag::Null,
            Self::Logical => TypeTag::Logical,
            Self::Integer => TypeTag::Integer,
            Self::Double => TypeTag::Double,
            Self::Complex => TypeTag::Complex,
            Self::Character => TypeTag::Character,
            Self::Raw => TypeTag::Raw,
            Self::List => TypeTag::List,
            Self::DataFrame => TypeTag::DataFrame,
            Self::Extensible(_) => TypeTag::Extensible,
            Self::OpaqueScalar => TypeTag::OpaqueScalar,
        }
    }

    /// The class names carried by an extensible classification.
    pub fn class_names(&self) -> Option<&[String]> {
        match self {
            Self::Extensible(class) => Some(class),
            _ => None,
        }
    }
}

impl fmt::Display for VectorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag().as_str())
    }
}
