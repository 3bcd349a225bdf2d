use smallvec::SmallVec;

use crate::moves::{Moves, MovesFamily};
use crate::values::Values;

/// Prefix buffer shared across the recursive traversal. Inline capacity
/// covers typical short keys without touching the heap.
pub(crate) type PrefixBuf<C> = SmallVec<[C; 8]>;

/// One trie vertex: a branching-policy instance plus a value-storage
/// instance. Each child is exclusively owned by its parent through the
/// Moves container, so dropping a node releases its whole subtree.
pub(crate) struct Node<C, V, F, W>
where
    F: MovesFamily<C>,
{
    pub(crate) moves: F::Moves<Node<C, V, F, W>>,
    pub(crate) values: W,
}

impl<C, V, F, W> Default for Node<C, V, F, W>
where
    F: MovesFamily<C>,
    W: Default,
{
    fn default() -> Self {
        Self {
            moves: Default::default(),
            values: W::default(),
        }
    }
}

impl<C, V, F, W> Node<C, V, F, W>
where
    F: MovesFamily<C>,
    W: Values<V>,
{
    /// Returns the child reached by `symbol`, creating it if absent.
    /// The flag is true iff a node was allocated.
    pub(crate) fn get_move(&mut self, symbol: &C) -> (&mut Self, bool) {
        self.moves.get_or_create(symbol, Self::default)
    }

    pub(crate) fn add(&mut self, value: V) {
        self.values.add(value);
    }

    pub(crate) fn clear(&mut self) {
        self.moves.clear();
        self.values.clear();
    }

    /// Pre-order walk of the subtree rooted here. `prefix` is the path
    /// from the trie root to this node; it is pushed to before each
    /// descent and popped after, so one buffer serves the whole walk.
    pub(crate) fn for_each_in_subtree<T>(&self, prefix: &mut PrefixBuf<C>, to_do: &mut T)
    where
        C: Clone,
        T: FnMut(&[C], &V),
    {
        self.values.for_each(|value| to_do(prefix.as_slice(), value));

        self.moves.for_each(|symbol, child| {
            prefix.push(symbol.clone());
            child.for_each_in_subtree(prefix, to_do);
            prefix.pop();
        });
    }
}
