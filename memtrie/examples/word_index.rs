//! Indexes a few tokenized names under their search keys, then lists
//! the matches for a typed prefix.

use memtrie::MemTrie;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let places = [
        ("cambridge", 1u32),
        ("camden", 2),
        ("canberra", 3),
        ("cape town", 4),
        ("canberra", 5),
    ];

    let mut index: MemTrie<char, u32> = MemTrie::new();
    for (name, id) in places {
        index.add(name.chars(), id);
    }
    println!("indexed {} names across {} nodes", places.len(), index.num_nodes());

    let query = "can";
    println!("matches for {query:?}:");
    index.for_each_in_subtree(query.chars(), |key, id| {
        println!("  {} -> {id}", key.iter().collect::<String>());
    });
}
