//! Process-wide cache of irreducible moduli keyed by `(p, k)`.
//!
//! Finding an irreducible polynomial is the only expensive step in setting
//! up a field, so callers that build many fields of the same shape can share
//! one [`Modulus`] through here. Entries live until [`clear`] is called.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use once_cell::sync::Lazy;
use tracing::{debug, trace};

use crate::error::FieldError;
use crate::structures::gf::Modulus;

type Key = (u64, usize);

static MODULI: Lazy<RwLock<HashMap<Key, Arc<Modulus>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// The irreducible modulus of degree `k` over F_p, found once per process.
///
/// The search runs without holding the lock. If two threads miss at the
/// same time both search, and the first one to insert wins so every caller
/// still receives the same `Arc`.
///
/// # Errors
///
/// Whatever [`Modulus::find`] reports; failures are not cached.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use gfpk::cached_modulus;
///
/// let a = cached_modulus(3, 4).unwrap();
/// let b = cached_modulus(3, 4).unwrap();
/// assert!(Arc::ptr_eq(&a, &b));
/// ```
pub fn cached_modulus(p: u64, k: usize) -> Result<Arc<Modulus>, FieldError> {
    {
        let map = MODULI.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(modulus) = map.get(&(p, k)) {
            trace!(p, k, "modulus cache hit");
            return Ok(Arc::clone(modulus));
        }
    }

    debug!(p, k, "modulus cache miss");
    let found = Arc::new(Modulus::find(p, k)?);

    let mut map = MODULI.write().unwrap_or_else(PoisonError::into_inner);
    Ok(Arc::clone(map.entry((p, k)).or_insert(found)))
}

/// Whether a modulus for `(p, k)` is currently cached.
pub fn is_cached(p: u64, k: usize) -> bool {
    MODULI
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .contains_key(&(p, k))
}

/// Drop every cached modulus. Elements already built keep theirs alive.
pub fn clear() {
    let mut map = MODULI.write().unwrap_or_else(PoisonError::into_inner);
    debug!(entries = map.len(), "clearing modulus cache");
    map.clear();
}
