// In: src/dispatch/classifier.rs

use crate::config::MarkerClasses;
use crate::traits::ClassifiableValue;
use crate::types::{RepresentationKind, VectorType};

/// Classifies a host value into its vector type.
///
/// Total and pure: every value gets exactly one classification. Complex
/// arrays fold into `Double`, and anything that is not one of the array kinds
/// or a generic sequence lands in `OpaqueScalar`.
pub fn classify(value: &dyn ClassifiableValue, markers: &MarkerClasses) -> VectorType {
    match value.representation_kind() {
        RepresentationKind::BooleanArray => VectorType::Logical,
        RepresentationKind::IntegerArray => VectorType::Integer,
        RepresentationKind::FloatArray => VectorType::Double,
        RepresentationKind::ComplexArray => VectorType::Double,
        RepresentationKind::StringArray => VectorType::Character,
        RepresentationKind::ByteArray => VectorType::Raw,
        RepresentationKind::GenericSequence => {
            if !value.is_object() {
                VectorType::List
            } else if value.inherits(&markers.data_frame) {
                VectorType::DataFrame
            } else {
                VectorType::Extensible(value.class_names().to_vec())
            }
        }
        RepresentationKind::Other => VectorType::OpaqueScalar,
    }
}
