// In: src/bridge/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Bridge Layer
// ====================================================================================
//
// The `bridge` is the public-facing query surface of the vctype library. It
// composes the pure classifier with the extension resolver and normalizes their
// results into the answers hosts ask for.
//
// Data Flow (is_vector):
//
//   1. [Host adapter (ArrowValue / HostValue / custom)] -> &dyn ClassifiableValue
//         |
//   2. [Stateful Facade (Dispatcher)] or [Stateless API (is_vector)]
//         |
//         `-> a. dispatch::classify            -> VectorType
//         |
//         `-> b. static rule for built-in tags -> bool
//         |
//         `-> c. dispatch::is_vector_extended  -> Result<bool> (extensible only)
//
// Marker predicates (`is_data_frame`, `is_record`, `is_scalar`) skip the classifier
// and only look at the class annotation.
// ====================================================================================
pub mod arrow_impl;
pub(crate) mod dispatcher;
pub mod stateless_api;

// --- High-Level Stateful API ---
pub use dispatcher::Dispatcher;

// --- Host Adapters ---
pub use arrow_impl::ArrowValue;

// --- Low-Level Stateless API (for FFI and hosts without their own config) ---
pub use stateless_api::{
    is_data_frame, is_record, is_scalar, is_vector, require_vector, type_of, vec_type,
};

#[cfg(test)]
mod tests;
