// In: src/error.rs

//! This module defines the single, unified error type for the vctype library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.
//!
//! Classification itself is total. Everything here is raised either at the
//! extensible-resolver boundary or by the host adapters.

use thiserror::Error;

use crate::types::TypeTag;

#[derive(Error, Debug)]
pub enum VctypeError {
    // =========================================================================
    // === Dispatch Errors (host-side contract breaches)
    // =========================================================================
    /// The registered resolver answered with something other than a strict boolean.
    #[error("`vec_is_vector()` must return `TRUE` or `FALSE`, got {0}")]
    ContractViolation(String),

    /// An extensible value reached the resolver before one was registered.
    #[error("No vector resolver registered; call `register_resolver()` during initialization")]
    UnregisteredResolver,

    /// A consumer was handed a value whose type it cannot operate on.
    #[error("Unsupported vctrs type `{vec_type}` in `{operation}`")]
    UnsupportedType {
        vec_type: TypeTag,
        operation: String,
    },

    #[error("Unknown vector type name: {0:?}")]
    UnknownTypeName(String),

    // =========================================================================
    // === Host Adapter Errors
    // =========================================================================
    #[error("Invalid class metadata: {0}")]
    InvalidMetadata(String),

    /// An error originating from the Arrow library.
    #[error("Arrow operation failed: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// An error from the Serde JSON library, typically while loading config or metadata.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// An error for Python FFI (Foreign Function Interface) operations.
    #[error("FFI operation failed: {0}")]
    FfiError(String), // PyErr doesn't impl Error, so we can't use #[from] here.
}

impl VctypeError {
    /// Builds the error a consumer raises when `vec_type` is outside what
    /// `operation` supports.
    pub fn unsupported_type(vec_type: TypeTag, operation: impl Into<String>) -> Self {
        VctypeError::UnsupportedType {
            vec_type,
            operation: operation.into(),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, VctypeError>;

// =============================================================================
// === Manual `From` Implementations ===
// =============================================================================

#[cfg(feature = "python")]
impl From<pyo3::PyErr> for VctypeError {
    fn from(err: pyo3::PyErr) -> Self {
        VctypeError::FfiError(err.to_string())
    }
}

#[cfg(feature = "python")]
impl From<VctypeError> for pyo3::PyErr {
    fn from(err: VctypeError) -> pyo3::PyErr {
        match err {
            VctypeError::ContractViolation(_) | VctypeError::UnregisteredResolver => {
                pyo3::exceptions::PyRuntimeError::new_err(err.to_string())
            }
            _ => pyo3::exceptions::PyValueError::new_err(err.to_string()),
        }
    }
}
