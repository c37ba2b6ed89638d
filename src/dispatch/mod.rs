// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Dispatch Core
// ====================================================================================
//
// Data flows one way:
//
//   1. [Host value (&dyn ClassifiableValue)]  -> representation kind + class names
//         |
//   2. [classifier::classify]                 -> VectorType (total, pure)
//         |
//         `-> built-in kinds: answered by static rules in the bridge
//         |
//         `-> VectorType::Extensible(class):
//   3. [resolver::is_vector_extended]         -> base-vector marker fast path,
//                                                otherwise the registered resolver
//
// The resolver slot is the only mutable state in the crate. It is written once
// at startup (`register_resolver`) and read by every extensible lookup afterwards.
// ====================================================================================

pub mod classifier;
pub mod resolver;

pub use classifier::classify;
pub use resolver::{
    is_registered, is_vector_extended, register_resolver, reset_resolver, ResolverReply,
    VectorResolver,
};
