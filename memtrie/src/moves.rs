use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// Per-node branching policy: maps a key symbol to an exclusively owned
/// child subtree. The enumeration order of `for_each` fixes the global
/// traversal order of the whole trie.
pub trait Moves<C, N>: Default {
    /// Calls `f` once per existing child, in the policy's defined order.
    fn for_each<F: FnMut(&C, &N)>(&self, f: F);

    /// Returns the child for `symbol`, if any. Never creates.
    fn get(&self, symbol: &C) -> Option<&N>;

    /// Returns the existing child for `symbol`, or inserts one built by
    /// `make`. The flag is true iff a child was created.
    fn get_or_create<F: FnOnce() -> N>(&mut self, symbol: &C, make: F) -> (&mut N, bool);

    /// Drops all children and, transitively, their subtrees.
    fn clear(&mut self);
}

/// Selects a `Moves` implementation for a symbol type while staying
/// generic over the node type it stores.
pub trait MovesFamily<C> {
    type Moves<N>: Moves<C, N>;
}

/// Default family: `MapMoves`, ascending symbol order.
pub struct SortedMoves;

impl<C: Ord + Clone> MovesFamily<C> for SortedMoves {
    type Moves<N> = MapMoves<C, N>;
}

/// Unordered family: `HashMapMoves`, average-case O(1) lookup at the
/// cost of an unspecified enumeration order.
pub struct HashedMoves;

impl<C: Hash + Eq + Clone> MovesFamily<C> for HashedMoves {
    type Moves<N> = HashMapMoves<C, N>;
}

/// Ordered-map branching, backed by a `BTreeMap`.
pub struct MapMoves<C, N> {
    subtrees: BTreeMap<C, N>,
}

impl<C, N> Default for MapMoves<C, N> {
    fn default() -> Self {
        Self {
            subtrees: BTreeMap::new(),
        }
    }
}

impl<C, N> Moves<C, N> for MapMoves<C, N>
where
    C: Ord + Clone,
{
    fn for_each<F: FnMut(&C, &N)>(&self, mut f: F) {
        for (symbol, child) in &self.subtrees {
            f(symbol, child);
        }
    }

    fn get(&self, symbol: &C) -> Option<&N> {
        self.subtrees.get(symbol)
    }

    fn get_or_create<F: FnOnce() -> N>(&mut self, symbol: &C, make: F) -> (&mut N, bool) {
        let mut created = false;
        let child = self.subtrees.entry(symbol.clone()).or_insert_with(|| {
            created = true;
            make()
        });
        (child, created)
    }

    fn clear(&mut self) {
        self.subtrees.clear();
    }
}

/// Hash-map branching. Enumeration order is unspecified; traversal over
/// a trie using this policy is still a pre-order, only sibling order is
/// arbitrary.
pub struct HashMapMoves<C, N> {
    subtrees: HashMap<C, N>,
}

impl<C, N> Default for HashMapMoves<C, N> {
    fn default() -> Self {
        Self {
            subtrees: HashMap::new(),
        }
    }
}

impl<C, N> Moves<C, N> for HashMapMoves<C, N>
where
    C: Hash + Eq + Clone,
{
    fn for_each<F: FnMut(&C, &N)>(&self, mut f: F) {
        for (symbol, child) in &self.subtrees {
            f(symbol, child);
        }
    }

    fn get(&self, symbol: &C) -> Option<&N> {
        self.subtrees.get(symbol)
    }

    fn get_or_create<F: FnOnce() -> N>(&mut self, symbol: &C, make: F) -> (&mut N, bool) {
        let mut created = false;
        let child = self.subtrees.entry(symbol.clone()).or_insert_with(|| {
            created = true;
            make()
        });
        (child, created)
    }

    fn clear(&mut self) {
        self.subtrees.clear();
    }
}
