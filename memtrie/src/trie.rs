use tracing::trace;

use crate::moves::{Moves, MovesFamily, SortedMoves};
use crate::node::{Node, PrefixBuf};
use crate::values::{Values, VecValues};

/// In-memory trie mapping key sequences to values, with ordered
/// prefix-scoped enumeration.
///
/// `C` is the key symbol type, `V` the stored value type. `F` selects
/// the branching policy (default: `SortedMoves`, i.e. a `BTreeMap` in
/// ascending symbol order, which makes the traversal order
/// lexicographic) and `W` the per-node value storage (default:
/// `VecValues`, insertion-ordered with duplicates retained).
///
/// The trie is move-only: it owns the whole node tree exclusively, and
/// a deep copy is deliberately not provided. Use `std::mem::take` to
/// transfer the contents and leave an empty trie behind.
pub struct MemTrie<C, V, F = SortedMoves, W = VecValues<V>>
where
    F: MovesFamily<C>,
{
    root: Node<C, V, F, W>,
    num_nodes: usize,
}

impl<C, V, F, W> Default for MemTrie<C, V, F, W>
where
    C: Clone,
    F: MovesFamily<C>,
    W: Values<V>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<C, V, F, W> MemTrie<C, V, F, W>
where
    C: Clone,
    F: MovesFamily<C>,
    W: Values<V>,
{
    pub fn new() -> Self {
        Self {
            root: Node::default(),
            num_nodes: 1,
        }
    }

    /// Adds a key-value pair. An empty key stores the value directly at
    /// the root. Repeated adds under an identical key accumulate
    /// according to the values policy; the default policy keeps them
    /// all.
    pub fn add<K>(&mut self, key: K, value: V)
    where
        K: IntoIterator<Item = C>,
    {
        let mut created_nodes = 0usize;
        let mut cur = &mut self.root;
        for symbol in key {
            let (next, created) = cur.get_move(&symbol);
            if created {
                created_nodes += 1;
            }
            cur = next;
        }
        cur.add(value);
        self.num_nodes += created_nodes;
        trace!(created_nodes, num_nodes = self.num_nodes, "trie add");
    }

    /// Visits every key-value pair, pre-order: values stored at a node
    /// come before anything in its subtrees, and subtrees are visited
    /// in the branching policy's symbol order. The visitor receives the
    /// reconstructed key and the value.
    pub fn for_each_in_trie<T>(&self, mut to_do: T)
    where
        T: FnMut(&[C], &V),
    {
        let mut prefix = PrefixBuf::new();
        self.root.for_each_in_subtree(&mut prefix, &mut to_do);
    }

    /// Visits the values stored exactly at the node reached by
    /// `prefix`, without descending further. Does nothing if no such
    /// node exists.
    pub fn for_each_in_node<K, T>(&self, prefix: K, mut to_do: T)
    where
        K: IntoIterator<Item = C>,
        T: FnMut(&[C], &V),
    {
        let prefix: PrefixBuf<C> = prefix.into_iter().collect();
        if let Some(node) = self.resolve(&prefix) {
            node.values.for_each(|value| to_do(prefix.as_slice(), value));
        }
    }

    /// Visits every key-value pair whose key has `prefix` as a prefix,
    /// including the entry at `prefix` itself, in the same pre-order as
    /// `for_each_in_trie`. Does nothing if no such subtree exists.
    pub fn for_each_in_subtree<K, T>(&self, prefix: K, mut to_do: T)
    where
        K: IntoIterator<Item = C>,
        T: FnMut(&[C], &V),
    {
        let mut prefix: PrefixBuf<C> = prefix.into_iter().collect();
        if let Some(node) = self.resolve(&prefix) {
            node.for_each_in_subtree(&mut prefix, &mut to_do);
        }
    }

    /// Resets to the empty state in place.
    pub fn clear(&mut self) {
        self.root.clear();
        self.num_nodes = 1;
        trace!("trie cleared");
    }

    /// Number of nodes currently in the trie, root included. Starts at
    /// 1, grows by one per distinct new prefix created by `add`, and
    /// only `clear` resets it.
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Read-only view of the root node. The view borrows the trie, so
    /// no mutation can happen while any view derived from it is alive.
    pub fn root_view(&self) -> NodeView<'_, C, V, F, W> {
        NodeView { node: &self.root }
    }

    fn resolve(&self, prefix: &[C]) -> Option<&Node<C, V, F, W>> {
        let mut cur = &self.root;
        for symbol in prefix {
            cur = cur.moves.get(symbol)?;
        }
        Some(cur)
    }
}

/// A read-only, non-owning view of one trie node, for pull-style
/// traversal decoupled from the internal node type.
pub struct NodeView<'a, C, V, F, W>
where
    F: MovesFamily<C>,
{
    node: &'a Node<C, V, F, W>,
}

impl<C, V, F, W> Clone for NodeView<'_, C, V, F, W>
where
    F: MovesFamily<C>,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<C, V, F, W> Copy for NodeView<'_, C, V, F, W> where F: MovesFamily<C> {}

impl<'a, C, V, F, W> NodeView<'a, C, V, F, W>
where
    F: MovesFamily<C>,
    W: Values<V>,
{
    /// Visits each move out of this node, in the branching policy's
    /// order, wrapping the target node in a fresh view.
    pub fn for_each_move<T>(&self, mut to_do: T)
    where
        T: FnMut(&C, NodeView<'_, C, V, F, W>),
    {
        self.node
            .moves
            .for_each(|symbol, child| to_do(symbol, NodeView { node: child }));
    }

    /// Visits each value stored at this node.
    pub fn for_each_value<T>(&self, to_do: T)
    where
        T: FnMut(&V),
    {
        self.node.values.for_each(to_do);
    }
}
