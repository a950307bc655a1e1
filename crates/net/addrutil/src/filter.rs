//! Predicate combinators over multiaddrs.

use std::fmt;

use libp2p::Multiaddr;
use tracing::trace;

/// A boolean test over a single [`Multiaddr`].
///
/// Implemented for every `Fn(&Multiaddr) -> bool`, so closures and plain
/// functions such as [`is_fd_costly_transport`](crate::is_fd_costly_transport)
/// can be used directly.
pub trait AddrFilter {
    /// Returns `true` if `addr` passes this filter.
    fn matches(&self, addr: &Multiaddr) -> bool;

    /// Invert this filter.
    fn negate(self) -> Neg<Self>
    where
        Self: Sized,
    {
        Neg(self)
    }

    /// Accept only addresses that pass both `self` and `other`.
    fn and<F>(self, other: F) -> And<Self, F>
    where
        Self: Sized,
        F: AddrFilter,
    {
        And(self, other)
    }
}

impl<F> AddrFilter for F
where
    F: Fn(&Multiaddr) -> bool,
{
    fn matches(&self, addr: &Multiaddr) -> bool {
        self(addr)
    }
}

/// Rejects every address structurally equal to one in its removal set.
///
/// Equality is over the full component sequence: `/ip4/0.0.0.0/tcp/1234` only
/// matches itself, never a concrete host on the same port.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubtractFilter {
    remove: Vec<Multiaddr>,
}

impl SubtractFilter {
    /// The addresses this filter rejects.
    pub fn removed(&self) -> &[Multiaddr] {
        &self.remove
    }
}

impl AddrFilter for SubtractFilter {
    fn matches(&self, addr: &Multiaddr) -> bool {
        !self.remove.contains(addr)
    }
}

/// Logical negation of the wrapped filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neg<F>(F);

impl<F> Neg<F> {
    /// Unwrap the negated filter.
    pub fn into_inner(self) -> F {
        self.0
    }
}

impl<F: AddrFilter> AddrFilter for Neg<F> {
    fn matches(&self, addr: &Multiaddr) -> bool {
        !self.0.matches(addr)
    }
}

/// Conjunction of two filters. The right side is not evaluated when the left rejects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<A, B>(A, B);

impl<A: AddrFilter, B: AddrFilter> AddrFilter for And<A, B> {
    fn matches(&self, addr: &Multiaddr) -> bool {
        self.0.matches(addr) && self.1.matches(addr)
    }
}

/// Type-erased filter, for storing a filter built at runtime.
pub struct BoxedAddrFilter(Box<dyn AddrFilter + Send + Sync>);

impl BoxedAddrFilter {
    pub fn new<F>(filter: F) -> Self
    where
        F: AddrFilter + Send + Sync + 'static,
    {
        Self(Box::new(filter))
    }
}

impl AddrFilter for BoxedAddrFilter {
    fn matches(&self, addr: &Multiaddr) -> bool {
        self.0.matches(addr)
    }
}

impl fmt::Debug for BoxedAddrFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxedAddrFilter").finish_non_exhaustive()
    }
}

/// Build a filter that rejects any of `addrs` and accepts everything else.
///
/// An empty removal set accepts every address.
pub fn subtract_filter<I>(addrs: I) -> SubtractFilter
where
    I: IntoIterator<Item = Multiaddr>,
{
    SubtractFilter {
        remove: addrs.into_iter().collect(),
    }
}

/// Invert `filter`. Negating twice wraps twice but accepts the same addresses.
pub fn filter_neg<F: AddrFilter>(filter: F) -> Neg<F> {
    Neg(filter)
}

/// Return the addresses accepted by `filter`, in their original order.
///
/// The input is left untouched. When nothing passes the result is an empty `Vec`.
pub fn filter_addrs<F>(addrs: &[Multiaddr], filter: &F) -> Vec<Multiaddr>
where
    F: AddrFilter + ?Sized,
{
    let mut kept = Vec::with_capacity(addrs.len());
    for addr in addrs {
        if filter.matches(addr) {
            kept.push(addr.clone());
        } else {
            trace!(%addr, "Address rejected by filter");
        }
    }

    trace!(
        kept = kept.len(),
        rejected = addrs.len() - kept.len(),
        "Filtered addresses"
    );
    kept
}

/// Return the addresses accepted by every one of `filters`, in their original order.
///
/// With no filters every address is kept.
pub fn filter_addrs_all(addrs: &[Multiaddr], filters: &[&dyn AddrFilter]) -> Vec<Multiaddr> {
    filter_addrs(addrs, &|addr: &Multiaddr| {
        filters.iter().all(|filter| filter.matches(addr))
    })
}
