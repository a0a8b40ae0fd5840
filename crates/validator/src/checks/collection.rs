//! Collection and map checks

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};
use std::sync::Arc;

use crate::chain::{Chain, Rule};
use crate::foundation::{Checkable, Parameter};
use crate::message::MessageTemplate;

// ============================================================================
// CONTAINERS
// ============================================================================

/// Sequences and sets whose elements can be looked up.
pub trait Container: Checkable {
    /// Element type.
    type Item;

    /// Number of elements.
    fn size(&self) -> usize;

    /// Returns true if `item` is an element.
    fn holds(&self, item: &Self::Item) -> bool;
}

impl<T: Checkable + PartialEq> Container for Vec<T> {
    type Item = T;

    fn size(&self) -> usize {
        self.len()
    }

    fn holds(&self, item: &T) -> bool {
        self.contains(item)
    }
}

impl<T: Checkable + PartialEq, const N: usize> Container for [T; N] {
    type Item = T;

    fn size(&self) -> usize {
        N
    }

    fn holds(&self, item: &T) -> bool {
        self.contains(item)
    }
}

impl<T: Checkable + PartialEq> Container for VecDeque<T> {
    type Item = T;

    fn size(&self) -> usize {
        self.len()
    }

    fn holds(&self, item: &T) -> bool {
        self.contains(item)
    }
}

impl<T, S> Container for HashSet<T, S>
where
    T: Checkable + Eq + Hash,
    S: BuildHasher + Send + Sync + 'static,
{
    type Item = T;

    fn size(&self) -> usize {
        self.len()
    }

    fn holds(&self, item: &T) -> bool {
        self.contains(item)
    }
}

impl<T: Checkable + Ord> Container for BTreeSet<T> {
    type Item = T;

    fn size(&self) -> usize {
        self.len()
    }

    fn holds(&self, item: &T) -> bool {
        self.contains(item)
    }
}

/// Maps whose keys can be looked up.
pub trait Keyed: Checkable {
    /// Key type.
    type Key;

    /// Number of entries.
    fn size(&self) -> usize;

    /// Returns true if `key` has an entry.
    fn has_key(&self, key: &Self::Key) -> bool;
}

impl<K, V, S> Keyed for HashMap<K, V, S>
where
    K: Checkable + Eq + Hash,
    V: Checkable,
    S: BuildHasher + Send + Sync + 'static,
{
    type Key = K;

    fn size(&self) -> usize {
        self.len()
    }

    fn has_key(&self, key: &K) -> bool {
        self.contains_key(key)
    }
}

impl<K: Checkable + Ord, V: Checkable> Keyed for BTreeMap<K, V> {
    type Key = K;

    fn size(&self) -> usize {
        self.len()
    }

    fn has_key(&self, key: &K) -> bool {
        self.contains_key(key)
    }
}

// ============================================================================
// CHECKS
// ============================================================================

/// Checks over sequences and sets.
///
/// # Examples
///
/// ```rust,ignore
/// use verity_validator::prelude::*;
///
/// let tags = that(vec!["a", "b"]).not().is_empty().contains("a");
/// assert!(tags.is_valid());
/// ```
pub trait CollectionChecks<I>: Sized {
    /// The collection should have no elements.
    fn is_empty(self) -> Self;

    /// The collection should have exactly `size` elements.
    fn has_size(self, size: usize) -> Self;

    /// The collection should contain `item`.
    fn contains(self, item: I) -> Self;
}

impl<C> CollectionChecks<C::Item> for Chain<C>
where
    C: Container,
    C::Item: Checkable,
{
    fn is_empty(self) -> Self {
        self.verify(Rule::new(
            |value: &C| value.size() == 0,
            MessageTemplate::key("collection.empty"),
        ))
    }

    fn has_size(self, size: usize) -> Self {
        self.verify(Rule::new(
            move |value: &C| value.size() == size,
            MessageTemplate::key("collection.size").arg(size),
        ))
    }

    fn contains(self, item: C::Item) -> Self {
        let item = Arc::new(item);
        let template = MessageTemplate::key("collection.contains")
            .param(Parameter::shared_argument(Arc::clone(&item)));
        self.verify(Rule::new(move |value: &C| value.holds(&item), template))
    }
}

/// Checks over maps.
///
/// # Examples
///
/// ```rust,ignore
/// use std::collections::HashMap;
/// use verity_validator::prelude::*;
///
/// let headers = HashMap::from([("host", "example.com")]);
/// assert!(that(headers).contains_key("host").is_valid());
/// ```
pub trait MapChecks<K>: Sized {
    /// The map should have no entries.
    fn is_empty(self) -> Self;

    /// The map should have exactly `size` entries.
    fn has_size(self, size: usize) -> Self;

    /// The map should have an entry for `key`.
    fn contains_key(self, key: K) -> Self;
}

impl<M> MapChecks<M::Key> for Chain<M>
where
    M: Keyed,
    M::Key: Checkable,
{
    fn is_empty(self) -> Self {
        self.verify(Rule::new(
            |value: &M| value.size() == 0,
            MessageTemplate::key("collection.empty"),
        ))
    }

    fn has_size(self, size: usize) -> Self {
        self.verify(Rule::new(
            move |value: &M| value.size() == size,
            MessageTemplate::key("collection.size").arg(size),
        ))
    }

    fn contains_key(self, key: M::Key) -> Self {
        let key = Arc::new(key);
        let template = MessageTemplate::key("map.contains_key")
            .param(Parameter::shared_argument(Arc::clone(&key)));
        self.verify(Rule::new(move |value: &M| value.has_key(&key), template))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::that;
    use crate::foundation::Locale;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_vec_checks() {
        assert!(that(Vec::<u8>::new()).is_empty().is_valid());
        assert!(that(vec![1, 2, 3]).has_size(3).contains(2).is_valid());
        assert_eq!(
            that(vec![1, 2]).contains(5).evaluate().errors_in(&Locale::ENGLISH).as_deref(),
            Some("[1, 2] should contain 5")
        );
    }

    #[test]
    fn test_array_and_deque() {
        assert!(that(["a", "b"]).contains("b").is_valid());
        assert!(that(VecDeque::from([1, 2])).not().is_empty().is_valid());
    }

    #[test]
    fn test_sets() {
        let set: HashSet<&str> = HashSet::from(["x"]);
        assert!(that(set).contains("x").has_size(1).is_valid());
        let ordered = BTreeSet::from([3, 1, 2]);
        assert_eq!(
            that(ordered).has_size(2).evaluate().errors_in(&Locale::ENGLISH).as_deref(),
            Some("{1, 2, 3} should have a size of 2")
        );
    }

    #[test]
    fn test_maps() {
        let map = BTreeMap::from([("a", 1), ("b", 2)]);
        assert!(that(map.clone()).contains_key("a").has_size(2).is_valid());
        assert_eq!(
            that(map).contains_key("z").evaluate().errors_in(&Locale::ENGLISH).as_deref(),
            Some("{\"a\": 1, \"b\": 2} should contain the key \"z\"")
        );
        assert!(that(HashMap::<String, u8>::new()).is_empty().is_valid());
    }
}
