use serde::{Deserialize, Serialize};

use super::RepresentationKind;
use crate::traits::ClassifiableValue;

/// An owned description of a host value: its storage kind and its ordered
/// class annotation.
///
/// Hosts that keep their own object model can implement `ClassifiableValue`
/// directly; this type covers everyone else (and the tests).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HostValue {
    pub kind: RepresentationKind,
    #[serde(default)]
    pub class: Vec<String>,
}

impl HostValue {
    /// An unclassed value of the given kind.
    pub fn new(kind: RepresentationKind) -> Self {
        Self {
            kind,
            class: Vec::new(),
        }
    }

    /// Replaces the class annotation, keeping the given order.
    pub fn with_class<I, S>(mut self, class: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.class = class.into_iter().map(Into::into).collect();
        self
    }

    pub fn logical() -> Self {
        Self::new(RepresentationKind::BooleanArray)
    }

    pub fn integer() -> Self {
        Self::new(RepresentationKind::IntegerArray)
    }

    pub fn double() -> Self {
        Self::new(RepresentationKind::FloatArray)
    }

    pub fn complex() -> Self {
        Self::new(RepresentationKind::ComplexArray)
    }

    pub fn character() -> Self {
        Self::new(RepresentationKind::StringArray)
    }

    pub fn raw() -> Self {
        Self::new(RepresentationKind::ByteArray)
    }

    pub fn list() -> Self {
        Self::new(RepresentationKind::GenericSequence)
    }

    /// A generic sequence tagged with `data.frame`, the way hosts build tables.
    pub fn data_frame() -> Self {
        Self::list().with_class(["data.frame"])
    }

    pub fn other() -> Self {
        Self::new(RepresentationKind::Other)
    }
}

impl ClassifiableValue for HostValue {
    fn representation_kind(&self) -> RepresentationKind {
        self.kind
    }

    fn class_names(&self) -> &[String] {
        &self.class
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_class_preserves_order() {
        let value = HostValue::list().with_class(["tbl_df", "tbl", "data.frame"]);
        assert_eq!(value.class_names(), ["tbl_df", "tbl", "data.frame"]);
        assert!(value.is_object());
        assert!(value.inherits("tbl"));
        assert!(!value.inherits("tibble"));
    }

    #[test]
    fn test_unclassed_value_is_not_an_object() {
        let value = HostValue::integer();
        assert!(!value.is_object());
        assert!(value.class_names().is_empty());
        assert!(value.as_arrow().is_none());
    }

    #[test]
    fn test_deserializes_without_class_field() {
        let value: HostValue = serde_json::from_str(r#"{"kind": "complex_array"}"#).unwrap();
        assert_eq!(value, HostValue::complex());
    }
}
