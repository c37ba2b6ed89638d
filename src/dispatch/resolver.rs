// In: src/dispatch/resolver.rs

//! The extension point for values the built-in rules cannot decide.
//!
//! A single process-wide slot holds the host's resolver. It is filled once during
//! initialization and only read afterwards; `reset_resolver` exists so tests can
//! start from an empty slot.

use std::sync::{Arc, PoisonError, RwLock};

use crate::config::MarkerClasses;
use crate::error::{Result, VctypeError};
use crate::traits::ClassifiableValue;

//==================================================================================
// I. Resolver Contract
//==================================================================================

/// What a resolver handed back, before it is checked against the contract.
///
/// Hosts with a dynamic object model (e.g. Python callables) cannot promise a
/// boolean at compile time, so the shape is checked here instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolverReply {
    Logical(bool),
    /// A logical answer that was missing (NA / None).
    Missing,
    /// Any other shape; the string describes it for the error message.
    Other(String),
}

impl ResolverReply {
    /// Accepts only a strict `true` or `false`.
    pub fn into_bool(self) -> Result<bool> {
        match self {
            ResolverReply::Logical(b) => Ok(b),
            ResolverReply::Missing => Err(VctypeError::ContractViolation(
                "a missing value".to_string(),
            )),
            ResolverReply::Other(shape) => Err(VctypeError::ContractViolation(shape)),
        }
    }
}

impl From<bool> for ResolverReply {
    fn from(b: bool) -> Self {
        ResolverReply::Logical(b)
    }
}

/// Decides whether a value of an extensible type behaves as a vector.
pub trait VectorResolver: Send + Sync {
    fn resolve(&self, value: &dyn ClassifiableValue) -> ResolverReply;
}

impl<F> VectorResolver for F
where
    F: Fn(&dyn ClassifiableValue) -> ResolverReply + Send + Sync,
{
    fn resolve(&self, value: &dyn ClassifiableValue) -> ResolverReply {
        self(value)
    }
}

//==================================================================================
// II. Registration Slot
//==================================================================================

static RESOLVER: RwLock<Option<Arc<dyn VectorResolver>>> = RwLock::new(None);

/// Installs the process-wide resolver. Call once, before any classification.
///
/// The first registration wins. Offering the same `Arc` again is a no-op;
/// a different resolver is ignored with a warning.
pub fn register_resolver(resolver: Arc<dyn VectorResolver>) {
    let mut slot = RESOLVER.write().unwrap_or_else(PoisonError::into_inner);
    match slot.as_ref() {
        Some(existing) if Arc::ptr_eq(existing, &resolver) => {
            log::debug!("vector resolver already registered; ignoring repeat registration");
        }
        Some(_) => {
            log::warn!("a different vector resolver is already registered; keeping the first one");
        }
        None => {
            log::info!("vector resolver registered");
            *slot = Some(resolver);
        }
    }
}

/// Empties the slot so the next `register_resolver` takes effect.
#[doc(hidden)]
pub fn reset_resolver() {
    let mut slot = RESOLVER.write().unwrap_or_else(PoisonError::into_inner);
    if slot.take().is_some() {
        log::info!("vector resolver reset");
    }
}

pub fn is_registered() -> bool {
    RESOLVER
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .is_some()
}

fn current() -> Option<Arc<dyn VectorResolver>> {
    RESOLVER
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

//==================================================================================
// III. Extensible Lookup
//==================================================================================

/// Answers `is_vector` for a value classified as extensible.
///
/// Values inheriting the base-vector marker are vectors without a resolver call.
/// The lock is released before the resolver runs, so a resolver may itself
/// classify values.
pub fn is_vector_extended(value: &dyn ClassifiableValue, markers: &MarkerClasses) -> Result<bool> {
    if value.inherits(&markers.base_vector) {
        return Ok(true);
    }

    let resolver = current().ok_or(VctypeError::UnregisteredResolver)?;
    log_metric!("event" = "resolve_extensible", "class" = value.class_names().join(","));

    resolver.resolve(value).into_bool().map_err(|err| {
        log::warn!("vector resolver broke its contract: {}", err);
        err
    })
}

/// Serializes tests that read or write the process-wide slot.
#[cfg(test)]
pub(crate) static TEST_SLOT_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
pub(crate) fn lock_slot_for_test() -> std::sync::MutexGuard<'static, ()> {
    let guard = TEST_SLOT_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    reset_resolver();
    guard
}
