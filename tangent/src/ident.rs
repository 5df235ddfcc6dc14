//! Identifier allocation for independent variables.
//!
//! Every independent variable created by [`Jet::variable`](crate::Jet::variable)
//! is tagged with a [`VarId`] so that partial derivatives can be looked up by
//! variable identity after a computation. Identifiers are issued by an
//! [`IdentSource`], an explicit counter object: the crate keeps one
//! process-wide source for convenience, and callers that need isolated or
//! reproducible identifier sequences (tests, embedded evaluators) can
//! construct their own and pass it to
//! [`Jet::variable_in`](crate::Jet::variable_in).
//!
//! Identifiers are unique *within* their source. Jets seeded from different
//! sources must not be combined in one expression: two sources issue the
//! same identifier sequence, so a partial-derivative lookup could conflate
//! unrelated variables.

use std::num::NonZeroU64;
use std::sync::atomic::{AtomicU64, Ordering};

/// An opaque identifier naming one independent variable.
///
/// Identifiers are strictly positive and strictly increasing in issue order.
/// A constant or derived quantity carries no identifier at all
/// (`Option<VarId>::None`), so a "not a variable" sentinel can never collide
/// with an issued identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VarId(NonZeroU64);

/// A source of fresh variable identifiers.
///
/// The counter starts at zero and is incremented before each issuance, so
/// the first identifier is 1. Issuance is a single atomic `fetch_add`:
/// calling [`issue`](IdentSource::issue) from many threads concurrently
/// yields unique identifiers, with no guarantee about the relative order in
/// which different threads observe them.
///
/// # Examples
///
/// ```
/// use tangent::IdentSource;
///
/// let source = IdentSource::new();
/// let a = source.issue();
/// let b = source.issue();
/// assert_ne!(a, b);
/// assert!(a < b);
/// ```
#[derive(Debug)]
pub struct IdentSource {
    next: AtomicU64,
}

impl IdentSource {
    /// Create a source whose first issued identifier will be 1.
    pub const fn new() -> Self {
        Self {
            next: AtomicU64::new(0),
        }
    }

    /// Issue a previously unused identifier, strictly greater than every
    /// identifier this source has issued before.
    ///
    /// # Panics
    ///
    /// Panics if the 64-bit identifier space is exhausted. The counter
    /// never silently wraps back to an already-issued identifier.
    pub fn issue(&self) -> VarId {
        let prev = self.next.fetch_add(1, Ordering::Relaxed);
        match NonZeroU64::new(prev.wrapping_add(1)) {
            Some(id) => VarId(id),
            None => panic!("variable identifier space exhausted"),
        }
    }
}

impl Default for IdentSource {
    fn default() -> Self {
        Self::new()
    }
}

/// The process-wide source backing [`Jet::variable`](crate::Jet::variable).
static PROCESS_SOURCE: IdentSource = IdentSource::new();

pub(crate) fn process_source() -> &'static IdentSource {
    &PROCESS_SOURCE
}
