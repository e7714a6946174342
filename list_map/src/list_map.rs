//! [ListMap] is an ordered map stored as a key list and a parallel value list.
use crate::{
    util::{impl_iterator, simplify_range},
    Error,
};
use std::{borrow::Borrow, fmt, ops::RangeBounds};

/// An ordered map stored as two parallel lists, looked up by linear scan.
///
/// The entry at position `i` consists of `keys[i]` and `values[i]`; both lists always have the
/// same length. New entries are appended at the end and removal preserves the order of the
/// remaining entries.
#[derive(Clone, PartialEq, Eq)]
pub struct ListMap<K, V> {
    keys: Vec<K>,
    values: Vec<V>,
}

impl<K, V> Default for ListMap<K, V> {
    fn default() -> Self {
        ListMap {
            keys: Vec::new(),
            values: Vec::new(),
        }
    }
}

impl<K, V> ListMap<K, V> {
    /// Returns an empty map.
    pub fn new() -> Self {
        Self::default()
    }
    /// Returns an empty map with room for `capacity` entries in both lists.
    pub fn with_capacity(capacity: usize) -> Self {
        ListMap {
            keys: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for ListMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> ListMap<K, V> {
    /// Returns the number of entries in the map.
    pub fn len(&self) -> usize {
        self.keys.len()
    }
    /// Returns `true` if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
    /// Always returns `false`, a [ListMap] can always be modified through `&mut`.
    pub const fn is_read_only(&self) -> bool {
        false
    }
    /// Returns the key list.
    pub fn key_slice(&self) -> &[K] {
        &self.keys
    }
    /// Returns the value list.
    pub fn value_slice(&self) -> &[V] {
        &self.values
    }
    /// Returns a copy of the key list that is independent of later changes to the map.
    pub fn keys_snapshot(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.keys.clone()
    }
    /// Returns a copy of the value list that is independent of later changes to the map.
    pub fn values_snapshot(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.values.clone()
    }
    /// Splits the map into its key list and its value list.
    pub fn into_parts(self) -> (Vec<K>, Vec<V>) {
        (self.keys, self.values)
    }
    /// Removes all entries from the map, but keeps the allocated memory.
    pub fn clear(&mut self) {
        self.keys.clear();
        self.values.clear();
    }
    /// Removes all entries except for the first `len` entries from the map.
    pub fn truncate(&mut self, len: usize) {
        self.keys.truncate(len);
        self.values.truncate(len);
    }
    /// Reserves room for at least `additional` more entries in both lists.
    pub fn reserve(&mut self, additional: usize) {
        self.keys.reserve(additional);
        self.values.reserve(additional);
    }
    /// Shrinks the capacity of both lists as much as possible.
    pub fn shrink_to_fit(&mut self) {
        self.keys.shrink_to_fit();
        self.values.shrink_to_fit();
    }
    /// Returns an iterator over all key-value pairs.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.keys.iter().zip(self.values.iter()),
        }
    }
    /// Returns an iterator over all key-value pairs, allowing mutation of values.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            inner: self.keys.iter().zip(self.values.iter_mut()),
        }
    }
    /// Returns an iterator over all keys.
    pub fn keys(&self) -> Keys<'_, K> {
        Keys {
            inner: self.keys.iter(),
        }
    }
    /// Returns an iterator over all values.
    pub fn values(&self) -> Values<'_, V> {
        Values {
            inner: self.values.iter(),
        }
    }
    /// Returns an iterator over all values, allowing mutation.
    pub fn values_mut(&mut self) -> ValuesMut<'_, V> {
        ValuesMut {
            inner: self.values.iter_mut(),
        }
    }
    /// Returns references to the key and value at the specified index, if it exists.
    pub fn get_index(&self, index: usize) -> Option<(&K, &V)> {
        Some((self.keys.get(index)?, &self.values[index]))
    }
    /// Returns a shared reference to the key and a mutable reference to the value at the
    /// specified index, if it exists.
    pub fn get_index_mut(&mut self, index: usize) -> Option<(&K, &mut V)> {
        Some((self.keys.get(index)?, &mut self.values[index]))
    }
    /// Removes the entry at the specified index and returns its key and value, if it exists.
    ///
    /// All following entries are shifted down by one.
    pub fn remove_index(&mut self, index: usize) -> Option<(K, V)> {
        if index >= self.len() {
            return None;
        }
        Some((self.keys.remove(index), self.values.remove(index)))
    }
    /// Swaps the positions of two entries.
    ///
    /// Panics if either index is out of bounds.
    pub fn swap_indices(&mut self, a: usize, b: usize) {
        let len = self.len();
        assert!(a < len && b < len, "index out of bounds: {a}, {b} for length {len}");
        self.keys.swap(a, b);
        self.values.swap(a, b);
    }
    /// Moves the entry at index `from` to index `to`, shifting the entries in between.
    ///
    /// Panics if either index is out of bounds.
    pub fn move_index(&mut self, from: usize, to: usize) {
        let len = self.len();
        assert!(
            from < len && to < len,
            "index out of bounds: {from}, {to} for length {len}"
        );
        if from < to {
            self.keys[from..=to].rotate_left(1);
            self.values[from..=to].rotate_left(1);
        } else {
            self.keys[to..=from].rotate_right(1);
            self.values[to..=from].rotate_right(1);
        }
    }
    /// Removes all entries for which `f` evaluates to `false`.
    ///
    /// `f` is called exactly once for each entry and in order, and may mutate the values.
    ///
    /// The order of the remaining entries is preserved.
    pub fn retain(&mut self, mut f: impl FnMut(&K, &mut V) -> bool) {
        let mut out_index = 0;
        for in_index in 0..self.len() {
            if f(&self.keys[in_index], &mut self.values[in_index]) {
                if in_index != out_index {
                    self.keys.swap(in_index, out_index);
                    self.values.swap(in_index, out_index);
                }
                out_index += 1;
            }
        }
        self.truncate(out_index);
    }
    /// Returns an iterator yielding all key-value pairs with indices in the specified range and
    /// removes those entries.
    ///
    /// Panics if the range is invalid or out of bounds.
    pub fn drain(&mut self, range: impl RangeBounds<usize>) -> Drain<'_, K, V> {
        let range = simplify_range(range, self.len());
        Drain {
            inner: self.keys.drain(range.clone()).zip(self.values.drain(range)),
        }
    }
    /// Clones all entries, in order, into `buffer` starting at position `offset`.
    ///
    /// Fails without touching the buffer if it does not have room for every entry, which
    /// includes an `offset` past the end of the buffer even when the map is empty.
    pub fn copy_pairs_to(&self, buffer: &mut [(K, V)], offset: usize) -> Result<(), Error>
    where
        K: Clone,
        V: Clone,
    {
        let too_small = |available| Error::BufferTooSmall {
            needed: self.len(),
            available,
        };
        // an offset past the end is reported like a buffer with no room left
        let tail = buffer.get_mut(offset..).ok_or_else(|| too_small(0))?;
        if tail.len() < self.len() {
            return Err(too_small(tail.len()));
        }
        for (slot, (key, value)) in tail.iter_mut().zip(self.iter()) {
            *slot = (key.clone(), value.clone());
        }
        Ok(())
    }
}

impl<K: Eq, V> ListMap<K, V> {
    /// Builds a map from a key list and a value list, where `values[i]` belongs to `keys[i]`.
    ///
    /// Fails if the lists have different lengths. Repeated keys are kept as they are: the first
    /// occurrence of a key is the one all lookups, updates and removals operate on.
    pub fn from_parts(keys: Vec<K>, values: Vec<V>) -> Result<Self, Error> {
        if keys.len() != values.len() {
            log::trace!(
                "rejecting {} keys with {} values",
                keys.len(),
                values.len()
            );
            return Err(Error::LengthMismatch {
                keys: keys.len(),
                values: values.len(),
            });
        }
        let map = ListMap { keys, values };
        if let Some((first, repeated)) = map.first_duplicate_key() {
            log::warn!(
                "key at index {repeated} repeats the key at index {first}, only the first is used"
            );
        }
        Ok(map)
    }
    /// Returns the indices of the first key that occurs twice, if any.
    ///
    /// The second index is the smallest index whose key already occurred earlier, the first
    /// index is the position of that earlier occurrence.
    pub fn first_duplicate_key(&self) -> Option<(usize, usize)> {
        self.keys.iter().enumerate().skip(1).find_map(|(repeated, key)| {
            let first = self.keys[..repeated].iter().position(|other| other == key)?;
            Some((first, repeated))
        })
    }
    /// Inserts `value` at `key`, replacing any previous value.
    /// Returns the index of the entry and any previous value.
    ///
    /// If there was no previous value, the key-value pair is inserted at the end.
    pub fn insert_full(&mut self, key: K, value: V) -> (usize, Option<V>) {
        match self.get_index_of(&key) {
            Some(index) => {
                let old_value = std::mem::replace(&mut self.values[index], value);
                (index, Some(old_value))
            }
            None => {
                let index = self.len();
                self.keys.push(key);
                self.values.push(value);
                (index, None)
            }
        }
    }
    /// Inserts `value` at `key`, replacing and returning any previous value.
    ///
    /// If there was no previous value, the key-value pair is inserted at the end.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.insert_full(key, value).1
    }
    /// Inserts a key-value pair, see [`insert`](ListMap::insert).
    pub fn insert_pair(&mut self, (key, value): (K, V)) -> Option<V> {
        self.insert(key, value)
    }
    /// Returns a mutable reference to the value at `key`, inserting `f()` first if the key is
    /// absent.
    pub fn get_or_insert_with(&mut self, key: K, f: impl FnOnce() -> V) -> &mut V {
        self.entry(key).or_insert_with(f)
    }
    /// Returns the entry corresponding to the given key, allowing for insertion and/or in-place
    /// mutation.
    pub fn entry(&mut self, key: K) -> Entry<'_, K, V> {
        match self.get_index_of(&key) {
            Some(index) => Entry::Occupied(OccupiedEntry { map: self, index }),
            None => Entry::Vacant(VacantEntry { map: self, key }),
        }
    }
}

impl<K, V> ListMap<K, V> {
    /// Returns the index of the first entry with the specified key, if it exists.
    pub fn get_index_of<Q>(&self, key: &Q) -> Option<usize>
    where
        Q: Eq + ?Sized,
        K: Borrow<Q>,
    {
        self.keys.iter().position(|k| k.borrow() == key)
    }
    /// Returns `true` if the map contains the specified key.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: Eq + ?Sized,
        K: Borrow<Q>,
    {
        self.get_index_of(key).is_some()
    }
    /// Returns the index and references to the key and value of the entry with the specified
    /// key, if it exists.
    pub fn get_full<Q>(&self, key: &Q) -> Option<(usize, &K, &V)>
    where
        Q: Eq + ?Sized,
        K: Borrow<Q>,
    {
        let index = self.get_index_of(key)?;
        Some((index, &self.keys[index], &self.values[index]))
    }
    /// Returns references to the key and value of the entry with the specified key, if it
    /// exists.
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        Q: Eq + ?Sized,
        K: Borrow<Q>,
    {
        self.get_full(key).map(|(_, key, value)| (key, value))
    }
    /// Returns a reference to the value corresponding to the specified key, if it exists.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        Q: Eq + ?Sized,
        K: Borrow<Q>,
    {
        let index = self.get_index_of(key)?;
        Some(&self.values[index])
    }
    /// Returns a mutable reference to the value corresponding to the specified key, if it exists.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        Q: Eq + ?Sized,
        K: Borrow<Q>,
    {
        let index = self.get_index_of(key)?;
        Some(&mut self.values[index])
    }
    /// Returns a reference to the value corresponding to the specified key or
    /// [`Error::KeyNotFound`].
    pub fn try_get<Q>(&self, key: &Q) -> Result<&V, Error>
    where
        Q: Eq + ?Sized,
        K: Borrow<Q>,
    {
        self.get(key).ok_or(Error::KeyNotFound)
    }
    /// Returns a mutable reference to the value corresponding to the specified key or
    /// [`Error::KeyNotFound`].
    pub fn try_get_mut<Q>(&mut self, key: &Q) -> Result<&mut V, Error>
    where
        Q: Eq + ?Sized,
        K: Borrow<Q>,
    {
        self.get_mut(key).ok_or(Error::KeyNotFound)
    }
    /// Returns `true` if the map contains the specified key and its value equals `value`.
    pub fn contains_pair<Q>(&self, key: &Q, value: &V) -> bool
    where
        Q: Eq + ?Sized,
        K: Borrow<Q>,
        V: PartialEq,
    {
        self.get(key) == Some(value)
    }
    /// Removes the entry with the specified key and returns its index, key and value, if it
    /// exists.
    ///
    /// All following entries are shifted down by one.
    pub fn remove_full<Q>(&mut self, key: &Q) -> Option<(usize, K, V)>
    where
        Q: Eq + ?Sized,
        K: Borrow<Q>,
    {
        let index = self.get_index_of(key)?;
        let (key, value) = self.remove_index(index)?;
        Some((index, key, value))
    }
    /// Removes the entry with the specified key and returns its key and value, if it exists.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        Q: Eq + ?Sized,
        K: Borrow<Q>,
    {
        self.remove_full(key).map(|(_, key, value)| (key, value))
    }
    /// Removes the entry with the specified key and returns its value, if it exists.
    ///
    /// All following entries are shifted down by one.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        Q: Eq + ?Sized,
        K: Borrow<Q>,
    {
        self.remove_full(key).map(|x| x.2)
    }
    /// Removes the entry with the specified key only if its value equals `value`.
    ///
    /// Returns `true` if an entry was removed.
    pub fn remove_pair<Q>(&mut self, key: &Q, value: &V) -> bool
    where
        Q: Eq + ?Sized,
        K: Borrow<Q>,
        V: PartialEq,
    {
        match self.get_index_of(key) {
            Some(index) if self.values[index] == *value => {
                self.remove_index(index);
                true
            }
            _ => false,
        }
    }
}

impl<K, V, Q> std::ops::Index<&Q> for ListMap<K, V>
where
    Q: Eq + ?Sized,
    K: Borrow<Q>,
{
    type Output = V;

    /// Returns a reference to the value at `key`.
    ///
    /// Panics if the key is not present, use [`get`](ListMap::get) or
    /// [`try_get`](ListMap::try_get) when that is possible.
    fn index(&self, key: &Q) -> &V {
        match self.try_get(key) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<K: Eq, V> Extend<(K, V)> for ListMap<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Eq, V> FromIterator<(K, V)> for ListMap<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = ListMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Eq, V, const N: usize> From<[(K, V); N]> for ListMap<K, V> {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// An iterator over the entries of a [`ListMap`].
///
/// This struct is created by the [`iter`](`ListMap::iter`) method on [`ListMap`].
pub struct Iter<'a, K, V> {
    inner: std::iter::Zip<std::slice::Iter<'a, K>, std::slice::Iter<'a, V>>,
}
impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);
    impl_iterator!();
}
impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

/// An iterator over the entries of a [`ListMap`], allowing mutation of values.
///
/// This struct is created by the [`iter_mut`](`ListMap::iter_mut`) method on [`ListMap`].
pub struct IterMut<'a, K, V> {
    inner: std::iter::Zip<std::slice::Iter<'a, K>, std::slice::IterMut<'a, V>>,
}
impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);
    impl_iterator!();
}
impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}

/// An iterator over the keys of a [`ListMap`].
///
/// This struct is created by the [`keys`](`ListMap::keys`) method on [`ListMap`].
pub struct Keys<'a, K> {
    inner: std::slice::Iter<'a, K>,
}
impl<'a, K> Iterator for Keys<'a, K> {
    type Item = &'a K;
    impl_iterator!();
}
impl<K> ExactSizeIterator for Keys<'_, K> {}

/// An iterator over the values of a [`ListMap`].
///
/// This struct is created by the [`values`](`ListMap::values`) method on [`ListMap`].
pub struct Values<'a, V> {
    inner: std::slice::Iter<'a, V>,
}
impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;
    impl_iterator!();
}
impl<V> ExactSizeIterator for Values<'_, V> {}

/// An iterator over the values of a [`ListMap`], allowing mutation.
///
/// This struct is created by the [`values_mut`](`ListMap::values_mut`) method on [`ListMap`].
pub struct ValuesMut<'a, V> {
    inner: std::slice::IterMut<'a, V>,
}
impl<'a, V> Iterator for ValuesMut<'a, V> {
    type Item = &'a mut V;
    impl_iterator!();
}
impl<V> ExactSizeIterator for ValuesMut<'_, V> {}

/// An iterator moving entries out of a [`ListMap`].
///
/// This struct is created by the `into_iter` method on [`ListMap`].
pub struct IntoIter<K, V> {
    inner: std::iter::Zip<std::vec::IntoIter<K>, std::vec::IntoIter<V>>,
}
impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);
    impl_iterator!();
}
impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

/// An iterator that removes entries from a map, see [`drain`](ListMap::drain).
pub struct Drain<'a, K, V> {
    inner: std::iter::Zip<std::vec::Drain<'a, K>, std::vec::Drain<'a, V>>,
}
impl<K, V> Iterator for Drain<'_, K, V> {
    type Item = (K, V);
    impl_iterator!();
}
impl<K, V> ExactSizeIterator for Drain<'_, K, V> {}

impl<K, V> IntoIterator for ListMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.keys.into_iter().zip(self.values),
        }
    }
}
impl<'a, K, V> IntoIterator for &'a ListMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
impl<'a, K, V> IntoIterator for &'a mut ListMap<K, V> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// A vacant entry in a [`ListMap`].
pub struct VacantEntry<'a, K, V> {
    map: &'a mut ListMap<K, V>,
    key: K,
}

/// An occupied entry in a [`ListMap`].
pub struct OccupiedEntry<'a, K, V> {
    map: &'a mut ListMap<K, V>,
    index: usize,
}

/// An entry in a [`ListMap`].
pub enum Entry<'a, K, V> {
    /// A vacant entry.
    Vacant(VacantEntry<'a, K, V>),
    /// An occupied entry.
    Occupied(OccupiedEntry<'a, K, V>),
}

impl<'a, K, V> VacantEntry<'a, K, V> {
    /// Returns a reference to the key that would be used for insertion.
    pub fn key(&self) -> &K {
        &self.key
    }
    /// Returns the key that would be used for insertion.
    pub fn into_key(self) -> K {
        self.key
    }
    /// Returns the index at which an entry would be inserted.
    pub fn index(&self) -> usize {
        self.map.len()
    }
    /// Appends the key and `value` to the map, returning a mutable reference to the value.
    pub fn insert(self, value: V) -> &'a mut V {
        let map = self.map;
        let index = map.len();
        map.keys.push(self.key);
        map.values.push(value);
        &mut map.values[index]
    }
}

impl<'a, K, V> OccupiedEntry<'a, K, V> {
    /// Returns a reference to the key of the entry.
    pub fn key(&self) -> &K {
        &self.map.keys[self.index]
    }
    /// Returns the index of the entry.
    pub fn index(&self) -> usize {
        self.index
    }
    /// Returns a reference to the value in the entry.
    pub fn get(&self) -> &V {
        &self.map.values[self.index]
    }
    /// Returns a mutable reference to the value in the entry.
    pub fn get_mut(&mut self) -> &mut V {
        &mut self.map.values[self.index]
    }
    /// Returns a mutable reference to the value in the entry, bound to the lifetime of the map.
    pub fn into_mut(self) -> &'a mut V {
        &mut self.map.values[self.index]
    }
    /// Replaces the value in the entry with the provided value, returning the previous value.
    pub fn insert(self, value: V) -> V {
        std::mem::replace(self.into_mut(), value)
    }
    /// Removes the entry from the map and returns the key-value pair.
    ///
    /// All following entries are shifted down by one.
    pub fn remove_entry(self) -> (K, V) {
        let index = self.index;
        (self.map.keys.remove(index), self.map.values.remove(index))
    }
    /// Removes the entry from the map and returns the value.
    pub fn remove(self) -> V {
        self.remove_entry().1
    }
}

impl<'a, K, V> Entry<'a, K, V> {
    /// Returns a reference to the key of the entry.
    pub fn key(&self) -> &K {
        match self {
            Entry::Vacant(entry) => entry.key(),
            Entry::Occupied(entry) => entry.key(),
        }
    }
    /// Returns the index of the entry.
    pub fn index(&self) -> usize {
        match self {
            Entry::Vacant(entry) => entry.index(),
            Entry::Occupied(entry) => entry.index(),
        }
    }
    /// Inserts the default value if the entry is vacant. Returns a mutable reference to the value.
    pub fn or_default(self) -> &'a mut V
    where
        V: Default,
    {
        self.or_insert_with(V::default)
    }
    /// Inserts the provided value if the entry is vacant. Returns a mutable reference to the value.
    pub fn or_insert(self, value: V) -> &'a mut V {
        self.or_insert_with(|| value)
    }
    /// Inserts the value returned by `f()` if the entry is vacant. Returns a mutable reference to
    /// the value.
    pub fn or_insert_with(self, f: impl FnOnce() -> V) -> &'a mut V {
        self.or_insert_with_key(|_| f())
    }
    /// Inserts the value returned by `f(&key)` if the entry is vacant. Returns a mutable reference
    /// to the value.
    pub fn or_insert_with_key(self, f: impl FnOnce(&K) -> V) -> &'a mut V {
        match self {
            Entry::Vacant(entry) => {
                let value = f(entry.key());
                entry.insert(value)
            }
            Entry::Occupied(entry) => entry.into_mut(),
        }
    }
    /// Modifies the value by calling `f(&mut value)` if the entry is occupied. Returns the entry
    /// itself.
    pub fn and_modify(self, f: impl FnOnce(&mut V)) -> Self {
        match self {
            Entry::Vacant(entry) => Entry::Vacant(entry),
            Entry::Occupied(mut entry) => {
                f(entry.get_mut());
                Entry::Occupied(entry)
            }
        }
    }
}

impl<K: Eq, V> ListMap<K, V> {
    #[cfg(test)]
    pub(crate) fn check(&self) {
        assert_eq!(self.keys.len(), self.values.len());
        assert_eq!(self.first_duplicate_key(), None);
    }
}

#[test]
fn test() {
    let mut map: ListMap<&str, usize> = ListMap::new();
    map.insert("adam", 10);
    map.insert("eve", 25);
    map.insert("mallory", 8);
    map.insert("jim", 14);
    match map.entry("eve") {
        Entry::Vacant(_) => unreachable!(),
        Entry::Occupied(entry) => entry.remove(),
    };
    dbg!(&map);
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), ["adam", "mallory", "jim"]);
    map.check();
}
