use std::mem;

use crate::{HashedMoves, MemTrie, NodeView, SlotValues, SortedMoves, VecValues};

fn collect_all(trie: &MemTrie<char, i32>) -> Vec<(String, i32)> {
    let mut out = Vec::new();
    trie.for_each_in_trie(|prefix, value| out.push((prefix.iter().collect(), *value)));
    out
}

fn sample() -> MemTrie<char, i32> {
    let mut trie = MemTrie::new();
    trie.add("cat".chars(), 1);
    trie.add("car".chars(), 2);
    trie.add("cat".chars(), 3);
    trie
}

#[test]
fn traversal_is_sorted_and_complete() {
    let trie = sample();
    assert_eq!(
        collect_all(&trie),
        vec![
            ("car".to_string(), 2),
            ("cat".to_string(), 1),
            ("cat".to_string(), 3),
        ]
    );
}

#[test]
fn node_count_tracks_distinct_prefixes() {
    let mut trie: MemTrie<char, i32> = MemTrie::new();
    assert_eq!(trie.num_nodes(), 1);
    trie.add("cat".chars(), 1);
    assert_eq!(trie.num_nodes(), 4);
    trie.add("car".chars(), 2);
    assert_eq!(trie.num_nodes(), 5);
    trie.add("cat".chars(), 3);
    assert_eq!(trie.num_nodes(), 5);
}

#[test]
fn node_scope_yields_exact_key_only() {
    let trie = sample();

    let mut at_ca = Vec::new();
    trie.for_each_in_node("ca".chars(), |_, value| at_ca.push(*value));
    assert!(at_ca.is_empty());

    let mut at_cat = Vec::new();
    trie.for_each_in_node("cat".chars(), |prefix, value| {
        assert_eq!(prefix.iter().collect::<String>(), "cat");
        at_cat.push(*value);
    });
    assert_eq!(at_cat, vec![1, 3]);
}

#[test]
fn missing_prefix_is_a_silent_no_match() {
    let trie = sample();
    let mut seen = 0;
    trie.for_each_in_node("dog".chars(), |_, _| seen += 1);
    trie.for_each_in_subtree("cab".chars(), |_, _| seen += 1);
    assert_eq!(seen, 0);
}

#[test]
fn subtree_scope_yields_full_keys_in_order() {
    let trie = sample();
    let mut out = Vec::new();
    trie.for_each_in_subtree("ca".chars(), |prefix, value| {
        out.push((prefix.iter().collect::<String>(), *value));
    });
    assert_eq!(
        out,
        vec![
            ("car".to_string(), 2),
            ("cat".to_string(), 1),
            ("cat".to_string(), 3),
        ]
    );
}

#[test]
fn subtree_scope_includes_the_entry_at_the_prefix_itself() {
    let mut trie = sample();
    trie.add("ca".chars(), 9);

    let mut out = Vec::new();
    trie.for_each_in_subtree("ca".chars(), |prefix, value| {
        out.push((prefix.iter().collect::<String>(), *value));
    });
    assert_eq!(
        out,
        vec![
            ("ca".to_string(), 9),
            ("car".to_string(), 2),
            ("cat".to_string(), 1),
            ("cat".to_string(), 3),
        ]
    );
}

#[test]
fn empty_key_stores_at_root_and_comes_first() {
    let mut trie = sample();
    trie.add("".chars(), 7);
    assert_eq!(trie.num_nodes(), 5);

    let all = collect_all(&trie);
    assert_eq!(all[0], ("".to_string(), 7));

    let mut at_root = Vec::new();
    trie.for_each_in_node("".chars(), |prefix, value| {
        assert!(prefix.is_empty());
        at_root.push(*value);
    });
    assert_eq!(at_root, vec![7]);
}

#[test]
fn prefix_keys_precede_their_extensions() {
    let mut trie = MemTrie::new();
    trie.add("cat".chars(), 1);
    trie.add("ca".chars(), 2);
    trie.add("c".chars(), 3);
    let keys: Vec<String> = collect_all(&trie).into_iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["c", "ca", "cat"]);
}

#[test]
fn clear_resets_and_trie_stays_usable() {
    let mut trie = sample();
    trie.clear();
    assert_eq!(trie.num_nodes(), 1);
    assert!(collect_all(&trie).is_empty());

    trie.add("ox".chars(), 9);
    assert_eq!(trie.num_nodes(), 3);
    assert_eq!(collect_all(&trie), vec![("ox".to_string(), 9)]);
}

#[test]
fn take_transfers_content_and_empties_source() {
    let mut source = sample();
    let taken = mem::take(&mut source);

    assert_eq!(source.num_nodes(), 1);
    assert!(collect_all(&source).is_empty());

    assert_eq!(taken.num_nodes(), 5);
    assert_eq!(collect_all(&taken).len(), 3);
}

#[test]
fn hashed_moves_visit_the_same_multiset() {
    let mut trie: MemTrie<char, i32, HashedMoves> = MemTrie::new();
    trie.add("cat".chars(), 1);
    trie.add("car".chars(), 2);
    trie.add("cat".chars(), 3);
    assert_eq!(trie.num_nodes(), 5);

    let mut out = Vec::new();
    trie.for_each_in_trie(|prefix, value| {
        out.push((prefix.iter().collect::<String>(), *value));
    });
    out.sort();
    assert_eq!(
        out,
        vec![
            ("car".to_string(), 2),
            ("cat".to_string(), 1),
            ("cat".to_string(), 3),
        ]
    );
}

#[test]
fn slot_values_keep_only_the_latest_value() {
    let mut trie: MemTrie<char, i32, SortedMoves, SlotValues<i32>> = MemTrie::new();
    trie.add("cat".chars(), 1);
    trie.add("cat".chars(), 3);

    let mut out = Vec::new();
    trie.for_each_in_trie(|prefix, value| {
        out.push((prefix.iter().collect::<String>(), *value));
    });
    assert_eq!(out, vec![("cat".to_string(), 3)]);
}

fn walk_views(
    view: NodeView<'_, char, i32, SortedMoves, VecValues<i32>>,
    prefix: &mut String,
    out: &mut Vec<(String, i32)>,
) {
    view.for_each_value(|value| out.push((prefix.clone(), *value)));
    view.for_each_move(|symbol, child| {
        prefix.push(*symbol);
        walk_views(child, prefix, out);
        prefix.pop();
    });
}

#[test]
fn node_views_walk_the_same_order_as_traversal() {
    let trie = sample();

    let mut via_views = Vec::new();
    walk_views(trie.root_view(), &mut String::new(), &mut via_views);
    assert_eq!(via_views, collect_all(&trie));
}

#[test]
fn root_view_exposes_moves_in_symbol_order() {
    let mut trie: MemTrie<char, i32> = MemTrie::new();
    trie.add("b".chars(), 1);
    trie.add("a".chars(), 2);
    trie.add("c".chars(), 3);

    let mut symbols = Vec::new();
    trie.root_view().for_each_move(|symbol, _| symbols.push(*symbol));
    assert_eq!(symbols, vec!['a', 'b', 'c']);
}
