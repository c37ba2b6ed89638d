//! This module defines the traits shared between the classifier, the resolver
//! and the host adapters.

use arrow::array::ArrayRef;

use crate::types::RepresentationKind;

/// Read access to the two facts the classifier needs from a host value.
///
/// The host's object model stays opaque: implementors only report the storage
/// kind and the class annotation, in the order the host attached it.
pub trait ClassifiableValue {
    fn representation_kind(&self) -> RepresentationKind;

    /// The attached class names, empty when the value carries no annotation.
    fn class_names(&self) -> &[String];

    /// Whether the value carries a class annotation at all.
    fn is_object(&self) -> bool {
        !self.class_names().is_empty()
    }

    /// Whether `class` appears anywhere in the class annotation.
    fn inherits(&self, class: &str) -> bool {
        self.class_names().iter().any(|c| c == class)
    }

    /// The value's data as an Arrow array, for hosts that store it that way.
    ///
    /// Resolvers that need to look at the data (length, element type) rather
    /// than only the class annotation read it from here.
    fn as_arrow(&self) -> Option<&ArrayRef> {
        None
    }
}
