//! This module serves as the public API for the Foreign Function Interface (FFI) layer.
//!
//! Currently it only contains the Python bridge, compiled in with the `python`
//! feature.

//==================================================================================
// 1. Module Declarations
//==================================================================================
/// Contains all logic for interfacing with the Python/CPython ecosystem.
pub mod python;

//==================================================================================
// 2. Public API Re-exports
//==================================================================================
pub use self::python::{
    enable_verbose_logging_py, is_data_frame_py, is_record_py, is_scalar_py, is_vector_py,
    register_resolver_py, type_of_py,
};
