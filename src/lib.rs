//! This file is the root of the `vctype` Rust crate.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of our library (`types`, `dispatch`, `bridge`, etc.)
//!     and re-exporting the public query surface.
//! 2.  Defining the `#[pymodule]` (feature `python`) which acts as the main entry
//!     point when the compiled library is imported into Python.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[doc(hidden)]
pub use log as __log;

//==================================================================================
// 1. Module Declarations
//==================================================================================
#[macro_use]
mod observability; // Make macros available throughout the crate

pub mod bridge;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod traits;
pub mod types;

#[cfg(feature = "python")]
mod ffi;

pub use bridge::{
    is_data_frame, is_record, is_scalar, is_vector, require_vector, type_of, vec_type,
    ArrowValue, Dispatcher,
};
pub use config::{DispatchConfig, MarkerClasses};
pub use dispatch::{register_resolver, reset_resolver, ResolverReply, VectorResolver};
pub use error::{Result, VctypeError};
pub use observability::enable_verbose_logging;
pub use traits::ClassifiableValue;
pub use types::{HostValue, RepresentationKind, TypeTag, VectorType};

//==================================================================================
// 2. Python Module Definition
//==================================================================================
#[cfg(feature = "python")]
use pyo3::prelude::*;

/// The `vctype` Python module, containing all exposed Rust functions.
#[cfg(feature = "python")]
#[pymodule]
fn vctype(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // --- Classification & dispatch ---
    m.add_function(wrap_pyfunction!(ffi::is_vector_py, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::type_of_py, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::is_data_frame_py, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::is_record_py, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::is_scalar_py, m)?)?;

    // --- One-time initialization ---
    m.add_function(wrap_pyfunction!(ffi::register_resolver_py, m)?)?;

    // --- Expose the custom error type ---
    m.add(
        "VctypeError",
        m.py().get_type_bound::<pyo3::exceptions::PyValueError>(),
    )?;

    // --- Expose version string as a module attribute ---
    m.add("__version__", VERSION)?;

    // --- Turn on logging for resolver registration and dispatch ---
    m.add_function(wrap_pyfunction!(ffi::enable_verbose_logging_py, m)?)?;

    Ok(())
}
