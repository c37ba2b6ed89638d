// In: src/ffi/python.rs

use std::cell::RefCell;
use std::sync::Arc;

use arrow::array::{make_array, Array, ArrayData};
use arrow::pyarrow::{PyArrowType, ToPyArrow};
use pyo3::prelude::*;
use pyo3::types::PyBool;

use crate::bridge::{self, ArrowValue};
use crate::dispatch::{self, ResolverReply, VectorResolver};
use crate::observability;
use crate::traits::ClassifiableValue;

//==================================================================================
// I. Host Value Conversion
//==================================================================================

/// Wraps a pyarrow array and an optional class vector as a classifiable value.
fn to_value(array: PyArrowType<ArrayData>, classes: Option<Vec<String>>) -> ArrowValue {
    ArrowValue::new(make_array(array.0)).with_class(classes.unwrap_or_default())
}

//==================================================================================
// II. Resolver Adapter
//==================================================================================

thread_local! {
    /// The exception raised by the Python resolver during the current call, if any.
    static RESOLVER_EXCEPTION: RefCell<Option<PyErr>> = const { RefCell::new(None) };
}

/// A Python callable acting as the vector resolver. It is called as
/// `resolver(array, classes)`, where `array` is the value as a pyarrow array
/// (or `None` for values not backed by Arrow), and must return a `bool`.
struct PyResolver {
    callable: PyObject,
}

impl PyResolver {
    fn call(&self, py: Python<'_>, value: &dyn ClassifiableValue) -> PyResult<ResolverReply> {
        let array = match value.as_arrow() {
            Some(array) => array.to_data().to_pyarrow(py)?,
            None => py.None(),
        };
        let out = self
            .callable
            .call1(py, (array, value.class_names().to_vec()))?;
        Ok(reply_from_py(out.bind(py)))
    }
}

impl VectorResolver for PyResolver {
    fn resolve(&self, value: &dyn ClassifiableValue) -> ResolverReply {
        Python::with_gil(|py| match self.call(py, value) {
            Ok(reply) => reply,
            Err(err) => {
                let shape = format!("an exception ({})", err);
                RESOLVER_EXCEPTION.with(|slot| *slot.borrow_mut() = Some(err));
                ResolverReply::Other(shape)
            }
        })
    }
}

fn take_resolver_exception() -> Option<PyErr> {
    RESOLVER_EXCEPTION.with(|slot| slot.borrow_mut().take())
}

fn reply_from_py(out: &Bound<'_, PyAny>) -> ResolverReply {
    if out.is_none() {
        return ResolverReply::Missing;
    }
    match out.downcast::<PyBool>() {
        Ok(b) => ResolverReply::Logical(b.is_true()),
        Err(_) => ResolverReply::Other(format!("`{}`", out)),
    }
}

//==================================================================================
// III. Stateless Query API
//==================================================================================

/// Returns whether a pyarrow array (with an optional class vector) is a vector.
#[pyfunction]
#[pyo3(name = "is_vector", signature = (array, classes = None))]
pub fn is_vector_py(array: PyArrowType<ArrayData>, classes: Option<Vec<String>>) -> PyResult<bool> {
    let value = to_value(array, classes);
    take_resolver_exception();
    // An exception from the resolver is re-raised as is, not as a contract violation.
    bridge::is_vector(&value)
        .map_err(|err| take_resolver_exception().unwrap_or_else(|| err.into()))
}

/// Returns the vector type name, e.g. "integer" or "dataframe".
#[pyfunction]
#[pyo3(name = "type_of", signature = (array, classes = None))]
pub fn type_of_py(array: PyArrowType<ArrayData>, classes: Option<Vec<String>>) -> &'static str {
    bridge::type_of(&to_value(array, classes))
}

#[pyfunction]
#[pyo3(name = "is_data_frame", signature = (array, classes = None))]
pub fn is_data_frame_py(array: PyArrowType<ArrayData>, classes: Option<Vec<String>>) -> bool {
    bridge::is_data_frame(&to_value(array, classes))
}

#[pyfunction]
#[pyo3(name = "is_record", signature = (array, classes = None))]
pub fn is_record_py(array: PyArrowType<ArrayData>, classes: Option<Vec<String>>) -> bool {
    bridge::is_record(&to_value(array, classes))
}

#[pyfunction]
#[pyo3(name = "is_scalar", signature = (array, classes = None))]
pub fn is_scalar_py(array: PyArrowType<ArrayData>, classes: Option<Vec<String>>) -> bool {
    bridge::is_scalar(&to_value(array, classes))
}

//==================================================================================
// IV. Module Initialization
//==================================================================================

/// Registers the process-wide resolver. Call once, right after import.
#[pyfunction]
#[pyo3(name = "register_resolver")]
pub fn register_resolver_py(py: Python<'_>, callable: PyObject) -> PyResult<()> {
    if !callable.bind(py).is_callable() {
        return Err(pyo3::exceptions::PyTypeError::new_err(
            "resolver must be callable",
        ));
    }
    dispatch::register_resolver(Arc::new(PyResolver { callable }));
    Ok(())
}

#[pyfunction]
#[pyo3(name = "enable_verbose_logging", signature = (log_file = None))]
pub fn enable_verbose_logging_py(log_file: Option<String>) {
    observability::enable_verbose_logging(log_file);
}
