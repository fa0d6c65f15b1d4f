use std::collections::HashSet;
use super::*;
use crate::Tree as _;

/// Collects the values along the `next` chain, starting from the first child.
fn forward_walk<T: Copy>(tree: &LinkedTree<T>) -> Vec<T> {
    let mut values = Vec::new();
    let mut current = tree.root().first_child();
    while let Some(node) = current {
        values.push(*node.value());
        current = node.next_sibling();
    }
    values
}

/// Collects the values along the `prev` chain, starting from the last child.
fn backward_walk<T: Copy>(tree: &LinkedTree<T>) -> Vec<T> {
    let mut values = Vec::new();
    let mut current = tree.root().last_child();
    while let Some(node) = current {
        values.push(*node.value());
        current = node.prev_sibling();
    }
    values
}

/// Checks that both sibling chains agree with the child list of the root.
fn assert_chains_match<T: Copy + PartialEq + core::fmt::Debug>(tree: &LinkedTree<T>) {
    let in_order: Vec<T> = tree.root().children().map(|child| *child.value()).collect();
    assert_eq!(forward_walk(tree), in_order);
    let mut reversed = backward_walk(tree);
    reversed.reverse();
    assert_eq!(reversed, in_order);
}

#[test]
fn fresh_tree_is_a_single_root_leaf() {
    let tree = LinkedTree::<_>::new(5);
    let root = tree.root();

    assert!(root.is_root());
    assert!(root.is_leaf());
    assert_eq!(*root.value(), 5);
    assert_eq!(root.height(), 1);
    assert_eq!(root.count(), 1);
    assert!(root.prev_sibling().is_none());
    assert!(root.next_sibling().is_none());
    assert_eq!(tree.node_count(), 1);
}

#[test]
fn added_children_are_chained_in_order() {
    let mut tree = LinkedTree::<_>::new(0);
    let mut root = tree.root_mut();
    for value in 1..=4 {
        root.add_child(value);
    }

    assert_eq!(tree.root().count(), 5);
    assert_eq!(tree.root().height(), 2);
    assert_chains_match(&tree);
    assert_eq!(forward_walk(&tree), vec![1, 2, 3, 4]);

    // The ends of the chain are open.
    let first = tree.root().first_child().expect("children exist");
    let last = tree.root().last_child().expect("children exist");
    assert!(first.prev_sibling().is_none());
    assert!(last.next_sibling().is_none());
}

#[test]
fn insert_child_splices_into_the_middle() {
    let mut tree = LinkedTree::<_>::new(0);
    let mut root = tree.root_mut();
    root.add_child(1);
    root.add_child(3);
    let middle = root.insert_child(1, 2);

    assert_eq!(forward_walk(&tree), vec![1, 2, 3]);
    assert_chains_match(&tree);

    let middle = tree.get(middle).expect("just inserted");
    assert_eq!(*middle.prev_sibling().expect("linked").value(), 1);
    assert_eq!(*middle.next_sibling().expect("linked").value(), 3);
}

#[test]
fn insert_child_at_zero_becomes_the_first_child() {
    let mut tree = LinkedTree::<_>::new(0);
    tree.root_mut().add_child(2);
    tree.root_mut().insert_child(0, 1);

    assert_eq!(forward_walk(&tree), vec![1, 2]);
    assert_chains_match(&tree);
    let first = tree.root().first_child().expect("children exist");
    assert!(first.prev_sibling().is_none());
}

#[test]
fn out_of_range_insert_appends() {
    let mut tree = LinkedTree::<_>::new(0);
    tree.root_mut().add_child(1);
    tree.root_mut().insert_child(100, 2);
    tree.root_mut().insert_child(usize::MAX, 3);

    assert_eq!(forward_walk(&tree), vec![1, 2, 3]);
    assert_chains_match(&tree);
}

#[test]
fn removing_a_middle_child_splices_its_neighbors_together() {
    let mut tree = LinkedTree::<_>::new("root");
    let a = tree.root_mut().add_child("A");
    let b = tree.root_mut().add_child("B");
    let c = tree.root_mut().add_child("C");

    assert!(tree.root_mut().remove_child(&b));
    let a_ref = tree.get(a).expect("untouched");
    assert_eq!(a_ref.next_sibling().expect("spliced").raw_key(), &c);
    let c_ref = tree.get(c).expect("untouched");
    assert_eq!(c_ref.prev_sibling().expect("spliced").raw_key(), &a);
    assert_chains_match(&tree);
}

#[test]
fn removing_an_end_child_reopens_the_chain() {
    let mut tree = LinkedTree::<_>::new(0);
    let first = tree.root_mut().add_child(1);
    let last = tree.root_mut().add_child(2);

    assert!(tree.root_mut().remove_child(&first));
    let survivor = tree.get(last).expect("untouched");
    assert!(survivor.prev_sibling().is_none());
    assert!(survivor.next_sibling().is_none());
    assert_eq!(forward_walk(&tree), vec![2]);
}

#[test]
fn value_removal_splices_around_adjacent_victims() {
    let mut tree = LinkedTree::<_>::new(0);
    let mut root = tree.root_mut();
    for value in [1, 7, 7, 2, 7].iter().copied() {
        root.add_child(value);
    }

    assert_eq!(tree.root_mut().remove_children_by_value(&7), 3);
    assert_eq!(forward_walk(&tree), vec![1, 2]);
    assert_chains_match(&tree);
}

#[test]
fn remove_child_by_value_agrees_with_the_counting_variant() {
    let mut tree = LinkedTree::<_>::new(0);
    tree.root_mut().add_child(1);
    tree.root_mut().add_child(2);

    assert!(tree.root_mut().remove_child_by_value(&1));
    assert!(!tree.root_mut().remove_child_by_value(&1));
    assert_eq!(forward_walk(&tree), vec![2]);
}

#[test]
fn set_removal_overloads_keep_the_chain_consistent() {
    let mut tree = LinkedTree::<_>::new(0);
    let mut keys = Vec::new();
    for value in 1..=5 {
        keys.push(tree.root_mut().add_child(value));
    }

    let mut values = HashSet::new();
    values.insert(2);
    values.insert(4);
    assert_eq!(tree.root_mut().remove_children_by_values(&values), 2);
    assert_eq!(forward_walk(&tree), vec![1, 3, 5]);
    assert_chains_match(&tree);

    let mut doomed_keys = HashSet::new();
    doomed_keys.insert(keys[2]);
    assert_eq!(tree.root_mut().remove_children_by_keys(&doomed_keys), 1);
    assert_eq!(forward_walk(&tree), vec![1, 5]);
    assert_chains_match(&tree);
}

#[test]
fn detach_child_resets_the_links_of_the_detached_root() {
    let mut tree = LinkedTree::<_>::new(0);
    tree.root_mut().add_child(1);
    let middle = tree.root_mut().add_child(2);
    tree.root_mut().add_child(3);
    tree.get_mut(middle).expect("just added").add_child(20);

    let detached = tree
        .root_mut()
        .detach_child(&middle)
        .expect("middle is a direct child");
    assert_eq!(forward_walk(&tree), vec![1, 3]);
    assert_chains_match(&tree);

    let detached_root = detached.root();
    assert!(detached_root.is_root());
    assert!(detached_root.prev_sibling().is_none());
    assert!(detached_root.next_sibling().is_none());
    assert_eq!(detached_root.count(), 2);
}

#[test]
fn adopt_links_the_new_last_child() {
    let mut tree = LinkedTree::<_>::new(0);
    tree.root_mut().add_child(1);
    let branch = tree.root_mut().add_child(2);
    tree.get_mut(branch).expect("just added").add_child(20);
    tree.get_mut(branch).expect("just added").add_child(21);
    let detached = tree
        .root_mut()
        .detach_child(&branch)
        .expect("branch is a direct child");

    let adopted = tree.root_mut().adopt(detached);
    assert_eq!(forward_walk(&tree), vec![1, 2]);
    assert_chains_match(&tree);

    // The sibling chain inside the moved subtree was rebuilt too.
    let adopted = tree.get(adopted).expect("adopted root is in the tree");
    let grandchild = adopted.first_child().expect("children moved along");
    assert_eq!(*grandchild.value(), 20);
    assert_eq!(*grandchild.next_sibling().expect("linked").value(), 21);
    assert_eq!(tree.root().count(), 5);
}

#[test]
fn deep_chains_grow_the_height() {
    let mut tree = LinkedTree::<_>::new(0);
    let child = tree.root_mut().add_child(1);
    tree.get_mut(child).expect("just added").add_child(2);
    tree.root_mut().add_child(3);

    assert_eq!(tree.root().height(), 3);
    assert_eq!(tree.root().count(), 4);
}

#[test]
fn display_summarizes_the_root() {
    let mut tree = LinkedTree::<_>::new(8);
    tree.root_mut().add_child(4);
    assert_eq!(tree.to_string(), "Root: 8, Height: 2, Count: 2");
}

#[cfg(feature = "slotmap")]
#[test]
fn slotmap_backend_behaves_the_same() {
    let mut tree = SlotMapLinkedTree::new(0);
    tree.root_mut().add_child(1);
    let middle = tree.root_mut().add_child(2);
    tree.root_mut().add_child(3);
    assert!(tree.root_mut().remove_child(&middle));
    let order: Vec<_> = tree.root().children().map(|child| *child.value()).collect();
    assert_eq!(order, vec![1, 3]);
}
