#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

#[cfg(feature = "std")]
pub(crate) type NodeMap<N, V> = HashMap<N, V>;
#[cfg(not(feature = "std"))]
pub(crate) type NodeMap<N, V> = BTreeMap<N, V>;

/// Identity of a host node, usable as a lookup key for per-element state.
///
/// With `std` this is `Hash + Eq`; without it, `Ord` (backed by a `BTreeMap`).
#[cfg(feature = "std")]
pub trait NodeKey: Clone + core::hash::Hash + Eq {}
#[cfg(feature = "std")]
impl<N: Clone + core::hash::Hash + Eq> NodeKey for N {}

#[cfg(not(feature = "std"))]
pub trait NodeKey: Clone + Ord {}
#[cfg(not(feature = "std"))]
impl<N: Clone + Ord> NodeKey for N {}
