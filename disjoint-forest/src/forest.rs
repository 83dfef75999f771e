use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;

use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Node {
    /// Index of the parent node; equal to the node's own index at a root.
    parent: usize,
    /// Upper bound on the height of the subtree under this node.
    rank: u32,
}

/// Partition of a growing set of elements into disjoint groups.
///
/// Elements are interned on first sight: `index` maps each element to the
/// slot holding its node, and `elements[i]` is the element owning `nodes[i]`.
/// Slots are never freed.
#[derive(Debug, Clone)]
pub struct DisjointSets<T> {
    index: HashMap<T, usize>,
    elements: Vec<T>,
    nodes: Vec<Node>,
    count: usize,
}

impl<T> Default for DisjointSets<T> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            elements: Vec::new(),
            nodes: Vec::new(),
            count: 0,
        }
    }
}

impl<T> DisjointSets<T> {
    /// Number of disjoint groups.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Number of registered elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Registered elements in registration order.
    pub fn elements(&self) -> impl Iterator<Item = &T> {
        self.elements.iter()
    }

    /// Root slot of `idx` without relinking anything on the way.
    pub(crate) fn root_of(&self, mut idx: usize) -> usize {
        while self.nodes[idx].parent != idx {
            idx = self.nodes[idx].parent;
        }
        idx
    }

    pub(crate) fn element_at(&self, idx: usize) -> &T {
        &self.elements[idx]
    }

    /// Root slot of `idx`; every node on the path is relinked to the root.
    fn find_root(&mut self, idx: usize) -> usize {
        let root = self.root_of(idx);
        let mut cur = idx;
        while cur != root {
            let next = self.nodes[cur].parent;
            self.nodes[cur].parent = root;
            cur = next;
        }
        root
    }
}

impl<T> DisjointSets<T>
where
    T: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            index: HashMap::with_capacity(capacity),
            elements: Vec::with_capacity(capacity),
            nodes: Vec::with_capacity(capacity),
            count: 0,
        }
    }

    /// Returns the slot of `x`, creating a singleton group for it if needed.
    fn intern(&mut self, x: T) -> (usize, bool) {
        match self.index.entry(x) {
            Entry::Occupied(e) => (*e.get(), false),
            Entry::Vacant(e) => {
                let idx = self.nodes.len();
                self.elements.push(e.key().clone());
                self.nodes.push(Node {
                    parent: idx,
                    rank: 0,
                });
                e.insert(idx);
                self.count += 1;
                trace!(slot = idx, groups = self.count, "registered element");
                (idx, true)
            }
        }
    }

    fn slot<Q>(&self, x: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(x).copied()
    }

    /// Registers `x` as a singleton group. Returns `false` if it was
    /// already registered, in which case nothing changes.
    pub fn make_set(&mut self, x: T) -> bool {
        self.intern(x).1
    }

    /// Registers every item as a singleton group.
    ///
    /// Items may be plain elements or `Option`s; `None` is skipped, as are
    /// elements that are already registered. Returns how many elements were
    /// newly registered.
    pub fn register<I>(&mut self, items: I) -> usize
    where
        I: IntoIterator,
        I::Item: Into<Option<T>>,
    {
        items
            .into_iter()
            .filter_map(Into::<Option<T>>::into)
            .map(|x| self.make_set(x))
            .filter(|&added| added)
            .count()
    }

    pub fn exists<Q>(&self, x: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(x)
    }

    /// Representative of the group containing `x`, or `None` if `x` was
    /// never registered.
    ///
    /// The representative is stable across calls to `find` and only changes
    /// when a `union` subsumes the group.
    pub fn find<Q>(&mut self, x: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = self.slot(x)?;
        let root = self.find_root(idx);
        Some(&self.elements[root])
    }

    /// Whether `x` and `y` are in the same group. Unregistered elements are
    /// connected to nothing, not even to themselves.
    pub fn connected<Q>(&mut self, x: &Q, y: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match (self.slot(x), self.slot(y)) {
            (Some(a), Some(b)) => self.find_root(a) == self.find_root(b),
            _ => false,
        }
    }

    /// Merges the groups of `x` and `y`, registering either one first if it
    /// is new. Returns `true` if two distinct groups were merged.
    pub fn union(&mut self, x: T, y: T) -> bool {
        let (a, _) = self.intern(x);
        let (b, _) = self.intern(y);
        let ra = self.find_root(a);
        let rb = self.find_root(b);
        if ra == rb {
            return false;
        }

        let (root, child) = match self.nodes[ra].rank.cmp(&self.nodes[rb].rank) {
            Ordering::Less => (rb, ra),
            Ordering::Greater => (ra, rb),
            Ordering::Equal => {
                self.nodes[ra].rank += 1;
                (ra, rb)
            }
        };
        self.nodes[child].parent = root;
        self.count -= 1;
        trace!(
            root,
            child,
            rank = self.nodes[root].rank,
            groups = self.count,
            "merged groups"
        );
        true
    }

    #[cfg(test)]
    fn rank<Q>(&self, x: &Q) -> Option<u32>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.slot(x).map(|idx| self.nodes[idx].rank)
    }

    #[cfg(test)]
    fn parent<Q>(&self, x: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.slot(x).map(|idx| &self.elements[self.nodes[idx].parent])
    }
}

impl<T> Extend<T> for DisjointSets<T>
where
    T: Eq + Hash + Clone,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.register(iter);
    }
}

impl<T> FromIterator<T> for DisjointSets<T>
where
    T: Eq + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut sets = Self::new();
        sets.extend(iter);
        sets
    }
}
