//! Helpers over arbitrary sequences.
//!
//! Everything here takes `IntoIterator`, so owned collections, borrowed
//! collections and lazy iterator chains all work. Where the input already
//! knows its size (`ExactSizeIterator`-style exact `size_hint`), `count` and
//! `to_list` use it instead of walking the sequence.

use std::borrow::Borrow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::{BuildHasher, Hash};

use rand::Rng;

use crate::storage::GraphStore;
use crate::{Error, Result};

/// Number of items in `iterable`.
///
/// Constant time when the iterator reports an exact size; otherwise the
/// sequence is walked once.
pub fn count<I: IntoIterator>(iterable: I) -> usize {
    let iter = iterable.into_iter();
    match iter.size_hint() {
        (lower, Some(upper)) if lower == upper => lower,
        _ => {
            tracing::trace!("counting by iteration");
            iter.count()
        }
    }
}

/// Whether any item equals `object`. Stops at the first match.
pub fn contains<I, T>(iterable: I, object: &T) -> bool
where
    I: IntoIterator,
    I::Item: Borrow<T>,
    T: PartialEq + ?Sized,
{
    iterable.into_iter().any(|item| item.borrow() == object)
}

/// Whether `collection` holds `object`, using the collection's own lookup.
pub fn contains_in<C, T>(collection: &C, object: &T) -> bool
where
    C: Membership<T> + ?Sized,
    T: ?Sized,
{
    collection.has(object)
}

/// Collect `iterable` into a `Vec`, preserving iteration order.
pub fn to_list<I: IntoIterator>(iterable: I) -> Vec<I::Item> {
    let iter = iterable.into_iter();
    let mut list = Vec::with_capacity(iter.size_hint().0);
    list.extend(iter);
    list
}

/// A uniformly chosen item of `iterable`, using the thread-local RNG.
///
/// Fails with [`Error::InvalidArgument`] when `iterable` is empty.
pub fn random<I: IntoIterator>(iterable: I) -> Result<I::Item> {
    random_with(iterable, &mut rand::thread_rng())
}

/// Like [`random`], with a caller-supplied RNG.
pub fn random_with<I, R>(iterable: I, rng: &mut R) -> Result<I::Item>
where
    I: IntoIterator,
    R: Rng,
{
    let mut list = to_list(iterable);
    if list.is_empty() {
        return Err(Error::InvalidArgument("empty iterable can't be randomized".into()));
    }
    let index = rng.gen_range(0..list.len());
    tracing::trace!(index, len = list.len(), "picked random element");
    Ok(list.swap_remove(index))
}

/// The only item of `iterable`, or `None` if it is empty.
///
/// Fails with [`Error::IllegalState`] if there is more than one item. At most
/// two items are pulled from the iterator.
pub fn get_single<I: IntoIterator>(iterable: I) -> Result<Option<I::Item>> {
    let mut iter = iterable.into_iter();
    let first = iter.next();
    if first.is_some() && iter.next().is_some() {
        return Err(Error::IllegalState(
            "iterable has more than one element, which is unexpected".into(),
        ));
    }
    Ok(first)
}

/// Count all nodes in the store.
///
/// Can be expensive on a store without a maintained counter; meant mainly
/// for tests.
pub async fn count_nodes<S: GraphStore>(store: &S, tx: &S::Tx) -> Result<u64> {
    store.node_count(tx).await
}

// ============================================================================
// Membership
// ============================================================================

/// Collections with their own membership test.
pub trait Membership<T: ?Sized> {
    fn has(&self, item: &T) -> bool;
}

impl<T: Eq + Hash, S: BuildHasher> Membership<T> for HashSet<T, S> {
    fn has(&self, item: &T) -> bool { self.contains(item) }
}

impl<T: Eq + Hash, S: BuildHasher> Membership<T> for hashbrown::HashSet<T, S> {
    fn has(&self, item: &T) -> bool { self.contains(item) }
}

impl<T: Ord> Membership<T> for BTreeSet<T> {
    fn has(&self, item: &T) -> bool { self.contains(item) }
}

impl<K: Eq + Hash, V, S: BuildHasher> Membership<K> for HashMap<K, V, S> {
    fn has(&self, item: &K) -> bool { self.contains_key(item) }
}

impl<K: Ord, V> Membership<K> for BTreeMap<K, V> {
    fn has(&self, item: &K) -> bool { self.contains_key(item) }
}

impl<T: PartialEq> Membership<T> for [T] {
    fn has(&self, item: &T) -> bool { self.contains(item) }
}

impl<T: PartialEq> Membership<T> for Vec<T> {
    fn has(&self, item: &T) -> bool { self.as_slice().contains(item) }
}
