// In: src/bridge/dispatcher.rs

use std::sync::Arc;

use crate::config::DispatchConfig;
use crate::dispatch::{classify, is_vector_extended};
use crate::error::{Result, VctypeError};
use crate::traits::ClassifiableValue;
use crate::types::VectorType;

/// The stateful query facade. Holds a shared, read-only config so every
/// answer is computed against the same marker classes.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    config: Arc<DispatchConfig>,
}

impl Dispatcher {
    pub fn new(config: Arc<DispatchConfig>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Classifies `value`. Never fails.
    pub fn vec_type(&self, value: &dyn ClassifiableValue) -> VectorType {
        classify(value, &self.config.markers)
    }

    /// The display name of the value's type tag.
    pub fn type_of(&self, value: &dyn ClassifiableValue) -> &'static str {
        self.vec_type(value).tag().as_str()
    }

    /// Whether `value` behaves as a vector.
    ///
    /// Null and opaque scalars never do, built-in kinds always do, and
    /// extensible values are handed to the registered resolver.
    pub fn is_vector(&self, value: &dyn ClassifiableValue) -> Result<bool> {
        match self.vec_type(value) {
            VectorType::Null | VectorType::OpaqueScalar => Ok(false),
            VectorType::Logical
            | VectorType::Integer
            | VectorType::Double
            | VectorType::Complex
            | VectorType::Character
            | VectorType::Raw
            | VectorType::List
            | VectorType::DataFrame => Ok(true),
            VectorType::Extensible(_) => is_vector_extended(value, &self.config.markers),
        }
    }

    /// Returns the classification of `value`, or `UnsupportedType` naming
    /// `operation` if the value is not a vector.
    pub fn require_vector(
        &self,
        value: &dyn ClassifiableValue,
        operation: &str,
    ) -> Result<VectorType> {
        let vec_type = self.vec_type(value);
        let is_vector = match &vec_type {
            VectorType::Extensible(_) => is_vector_extended(value, &self.config.markers)?,
            other => other.tag().is_builtin_vector(),
        };
        if is_vector {
            Ok(vec_type)
        } else {
            Err(VctypeError::unsupported_type(vec_type.tag(), operation))
        }
    }

    pub fn is_data_frame(&self, value: &dyn ClassifiableValue) -> bool {
        value.inherits(&self.config.markers.data_frame)
    }

    /// Record vectors, including the legacy date/time-list class.
    pub fn is_record(&self, value: &dyn ClassifiableValue) -> bool {
        let markers = &self.config.markers;
        value.inherits(&markers.record) || value.inherits(&markers.legacy_record)
    }

    pub fn is_scalar(&self, value: &dyn ClassifiableValue) -> bool {
        value.inherits(&self.config.markers.scalar)
    }
}
