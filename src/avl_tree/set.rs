use crate::avl_tree::node::Node;
use crate::avl_tree::tree;
use crate::avl_tree::{Error, Result};
use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::fmt;
use std::iter::FromIterator;
use std::marker::PhantomData;
use std::result;

/// An ordered set implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one.
///
/// # Examples
/// ```
/// use avl_collections::avl_tree::AvlSet;
///
/// let mut set = AvlSet::new();
/// assert!(set.add(0));
/// assert!(set.add(3));
/// assert!(!set.add(3));
///
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(&3));
///
/// assert!(set.remove(&0));
/// assert!(!set.remove(&1));
/// ```
#[derive(Clone)]
pub struct AvlSet<T> {
    tree: tree::Tree<T>,
    len: usize,
}

impl<T> AvlSet<T> {
    /// Constructs a new, empty `AvlSet<T>`.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// ```
    pub fn new() -> Self {
        AvlSet { tree: None, len: 0 }
    }

    /// Adds a value to the set. Returns `true` if the value was not already present. An equal
    /// value that is already present is kept and the new one is dropped.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// assert!(set.add(1));
    /// assert!(set.contains(&1));
    /// assert!(!set.add(1));
    /// ```
    pub fn add(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let added = tree::insert(&mut self.tree, value);
        if added {
            self.len += 1;
        }
        added
    }

    /// Removes a value from the set. Returns `true` if the value was present.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.add(1);
    /// assert!(set.remove(&1));
    /// assert!(!set.remove(&1));
    /// ```
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: Ord,
    {
        self.take(value).is_some()
    }

    /// Removes a value from the set and returns it. Returns `None` if the value was not present.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.add(1);
    /// assert_eq!(set.take(&1), Some(1));
    /// assert_eq!(set.take(&1), None);
    /// ```
    pub fn take(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let ret = tree::remove(&mut self.tree, value);
        if ret.is_some() {
            self.len -= 1;
        }
        ret
    }

    /// Checks if a value exists in the set.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.add(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        match tree::find(&self.tree, value) {
            Some(node) => node.value == *value,
            None => false,
        }
    }

    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clears the set, removing all values.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.add(1);
    /// set.add(2);
    /// set.clear();
    /// assert!(set.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.tree = None;
        self.len = 0;
    }

    /// Returns the height of the root of the set, where a single element has height zero.
    /// Returns `Error::EmptyCollection` if the set is empty.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::{AvlSet, Error};
    ///
    /// let mut set = AvlSet::new();
    /// assert_eq!(set.height(), Err(Error::EmptyCollection));
    /// set.add(1);
    /// set.add(2);
    /// assert_eq!(set.height(), Ok(1));
    /// ```
    pub fn height(&self) -> Result<i32> {
        match self.tree {
            Some(ref node) => Ok(node.height),
            None => Err(Error::EmptyCollection),
        }
    }

    /// Returns the minimum value of the set. Returns `None` if the set is empty.
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.tree)
    }

    /// Returns the maximum value of the set. Returns `None` if the set is empty.
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.tree)
    }

    /// Renders the structure of the set. Each node is printed on its own line in pre-order as
    /// `(height)value`, indented by two spaces per level, followed by a line reporting the
    /// height of the root. Returns `Error::EmptyCollection` if the set is empty.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.add(2);
    /// set.add(1);
    /// set.add(3);
    ///
    /// assert_eq!(
    ///     set.render().unwrap(),
    ///     "(1)2\n  (0)1\n  (0)3\nTree height: 1",
    /// );
    /// ```
    pub fn render(&self) -> Result<String>
    where
        T: fmt::Display,
    {
        let height = self.height()?;
        let mut out = String::new();
        tree::render(&self.tree, 0, &mut out);
        out.push_str(&format!("Tree height: {}", height));
        Ok(out)
    }

    /// Returns an iterator over the set. The iterator will yield values using in-order
    /// traversal.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.add(3);
    /// set.add(1);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> AvlSetIter<T> {
        AvlSetIter {
            current: &self.tree,
            stack: Vec::new(),
        }
    }

    /// Adds every value of `other` to the set.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set: AvlSet<u32> = vec![1, 2].into_iter().collect();
    /// let other: AvlSet<u32> = vec![2, 3].into_iter().collect();
    /// set.add_all(&other);
    /// assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&1, &2, &3]);
    /// ```
    pub fn add_all(&mut self, other: &AvlSet<T>)
    where
        T: Ord + Clone,
    {
        for value in other {
            self.add(value.clone());
        }
    }

    /// Keeps only the values that `other` also contains.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set: AvlSet<u32> = vec![1, 2, 3].into_iter().collect();
    /// let other: AvlSet<u32> = vec![2, 3, 4].into_iter().collect();
    /// set.retain_all(&other);
    /// assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&2, &3]);
    /// ```
    pub fn retain_all(&mut self, other: &AvlSet<T>)
    where
        T: Ord,
    {
        let values = AvlSetIntoIter {
            current: self.tree.take(),
            stack: Vec::new(),
        };
        self.len = 0;
        for value in values {
            if other.contains(&value) {
                self.add(value);
            }
        }
    }

    /// Removes every value that `other` contains.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set: AvlSet<u32> = vec![1, 2, 3].into_iter().collect();
    /// let other: AvlSet<u32> = vec![2, 3, 4].into_iter().collect();
    /// set.remove_all(&other);
    /// assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&1]);
    /// ```
    pub fn remove_all(&mut self, other: &AvlSet<T>)
    where
        T: Ord,
    {
        for value in other {
            self.remove(value);
        }
    }
}

impl<T> IntoIterator for AvlSet<T> {
    type Item = T;
    type IntoIter = AvlSetIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            current: self.tree,
            stack: Vec::new(),
        }
    }
}

impl<'a, T> IntoIterator for &'a AvlSet<T>
where
    T: 'a,
{
    type Item = &'a T;
    type IntoIter = AvlSetIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `AvlSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields owned values.
pub struct AvlSetIntoIter<T> {
    current: tree::Tree<T>,
    stack: Vec<Node<T>>,
}

impl<T> Iterator for AvlSetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node { value, right, .. } = node;
            self.current = right;
            value
        })
    }
}

/// An iterator for `AvlSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references.
pub struct AvlSetIter<'a, T>
where
    T: 'a,
{
    current: &'a tree::Tree<T>,
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for AvlSetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ref node) = self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            self.current = &node.right;
            &node.value
        })
    }
}

impl<T> Default for AvlSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for AvlSet<T>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T> FromIterator<T> for AvlSet<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = AvlSet::new();
        set.extend(iter);
        set
    }
}

impl<T> PartialEq for AvlSet<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &AvlSet<T>) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> Eq for AvlSet<T> where T: Eq {}

impl<T> fmt::Debug for AvlSet<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Serialize for AvlSet<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len))?;
        for value in self {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

struct AvlSetVisitor<T> {
    marker: PhantomData<T>,
}

impl<'de, T> Visitor<'de> for AvlSetVisitor<T>
where
    T: Ord + Deserialize<'de>,
{
    type Value = AvlSet<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of ordered values")
    }

    fn visit_seq<A>(self, mut seq: A) -> result::Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut set = AvlSet::new();
        while let Some(value) = seq.next_element()? {
            set.add(value);
        }
        Ok(set)
    }
}

impl<'de, T> Deserialize<'de> for AvlSet<T>
where
    T: Ord + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(AvlSetVisitor {
            marker: PhantomData,
        })
    }
}
