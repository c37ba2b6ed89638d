//! This module defines the core, strongly-typed representations used
//! throughout the classification pipeline.
//!
//! It includes the canonical `TypeTag` enum, the `VectorType` classification
//! result that carries the class payload of extensible values, the low-level
//! `RepresentationKind` of a host value, and `HostValue`, an owned value that
//! hosts and tests can classify directly.

pub mod host_value;
pub mod representation;
pub mod vector_type;

// Re-export the main type(s) for easier access.
pub use host_value::HostValue;
pub use representation::RepresentationKind;
pub use vector_type::{TypeTag, VectorType};
