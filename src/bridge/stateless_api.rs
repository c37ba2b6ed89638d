// In: src/bridge/stateless_api.rs

use std::sync::OnceLock;

use crate::bridge::Dispatcher;
use crate::error::Result;
use crate::traits::ClassifiableValue;
use crate::types::VectorType;

/// Since this is a stateless API, every call shares one default-configured facade.
fn default_dispatcher() -> &'static Dispatcher {
    static DEFAULT: OnceLock<Dispatcher> = OnceLock::new();
    DEFAULT.get_or_init(Dispatcher::default)
}

/// Classifies `value` with the default marker classes.
pub fn vec_type(value: &dyn ClassifiableValue) -> VectorType {
    default_dispatcher().vec_type(value)
}

/// Returns one of the `TypeTag` display names.
pub fn type_of(value: &dyn ClassifiableValue) -> &'static str {
    default_dispatcher().type_of(value)
}

/// Whether `value` behaves as a vector. Fails only on the extensible path,
/// when the resolver is missing or answers with a non-boolean.
pub fn is_vector(value: &dyn ClassifiableValue) -> Result<bool> {
    default_dispatcher().is_vector(value)
}

pub fn require_vector(value: &dyn ClassifiableValue, operation: &str) -> Result<VectorType> {
    default_dispatcher().require_vector(value, operation)
}

pub fn is_data_frame(value: &dyn ClassifiableValue) -> bool {
    default_dispatcher().is_data_frame(value)
}

pub fn is_record(value: &dyn ClassifiableValue) -> bool {
    default_dispatcher().is_record(value)
}

pub fn is_scalar(value: &dyn ClassifiableValue) -> bool {
    default_dispatcher().is_scalar(value)
}
