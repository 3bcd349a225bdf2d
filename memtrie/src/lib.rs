//! A generic in-memory trie which maps key sequences to values and
//! traverses them in sorted order. Branching and value storage are
//! pluggable per-node policies; see `MovesFamily` and `Values`.

mod moves;
mod node;
mod trie;
mod values;

#[cfg(test)]
mod tests;

pub use moves::{HashMapMoves, HashedMoves, MapMoves, Moves, MovesFamily, SortedMoves};
pub use trie::{MemTrie, NodeView};
pub use values::{SlotValues, Values, VecValues};
