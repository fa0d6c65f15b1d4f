use std::collections::HashSet;
use super::*;
use crate::Tree as _;

/// Checks that every parent/child link in the tree is consistent both ways.
fn assert_links_consistent<T>(tree: &RoseTree<T>) {
    fn walk<T>(node: NodeRef<'_, T>) {
        for child in node.children() {
            let parent = child.parent().expect("children must have a parent");
            assert_eq!(parent.raw_key(), node.raw_key());
            let occurrences = node
                .children()
                .filter(|other| other.raw_key() == child.raw_key())
                .count();
            assert_eq!(occurrences, 1);
            walk(child);
        }
    }
    walk(tree.root());
}

#[test]
fn fresh_tree_is_a_single_root_leaf() {
    let tree = RoseTree::<_>::new(5);
    let root = tree.root();

    assert!(root.is_root());
    assert!(root.is_leaf());
    assert_eq!(*root.value(), 5);
    assert_eq!(root.height(), 1);
    assert_eq!(root.count(), 1);
    assert_eq!(tree.node_count(), 1);
}

#[test]
fn adding_children_updates_metrics() {
    let mut tree = RoseTree::<_>::new("root");
    let mut root = tree.root_mut();
    root.add_child("leaf");
    root.add_child("leaf2");

    let root = tree.root();
    assert!(!root.is_leaf());
    assert_eq!(root.height(), 2);
    assert_eq!(root.count(), 3);
    assert_links_consistent(&tree);
}

#[test]
fn chained_children_grow_the_height() {
    let mut tree = RoseTree::<_>::new("root");
    let intermediate = tree.root_mut().add_child("intermediate");
    let leaf = tree
        .get_mut(intermediate)
        .expect("just added")
        .add_child("leaf");

    assert_eq!(tree.root().height(), 3);
    assert_eq!(tree.root().count(), 3);

    let intermediate = tree.get(intermediate).expect("still there");
    assert_eq!(intermediate.height(), 2);
    assert_eq!(intermediate.count(), 2);
    assert!(!intermediate.is_root());

    let leaf = tree.get(leaf).expect("still there");
    assert!(leaf.is_leaf());
    assert_eq!(leaf.height(), 1);
    assert_eq!(leaf.count(), 1);
}

#[test]
fn mixed_depths_report_the_longest_path() {
    let mut tree = RoseTree::<_>::new("root");
    let mut root = tree.root_mut();
    root.add_child("leaf");
    let intermediate = root.add_child("intermediate");
    let intermediate2 = tree
        .get_mut(intermediate)
        .expect("just added")
        .add_child("intermediate2");
    tree.get_mut(intermediate2)
        .expect("just added")
        .add_child("leaf2");

    assert_eq!(tree.root().height(), 4);
    assert_eq!(tree.root().count(), 5);
    assert_eq!(tree.get(intermediate).expect("present").height(), 3);
    assert_eq!(tree.get(intermediate2).expect("present").count(), 2);
    assert_links_consistent(&tree);
}

#[test]
fn remove_child_restores_metrics_and_releases_the_node() {
    let mut tree = RoseTree::<_>::new("root");
    let doomed = tree.root_mut().add_child("leaf");
    tree.root_mut().add_child("leaf2");
    assert_eq!(tree.root().count(), 3);

    assert!(tree.root_mut().remove_child(&doomed));
    assert!(tree.get(doomed).is_none());
    assert_eq!(tree.root().child_count(), 1);
    assert_eq!(tree.root().height(), 2);
    assert_eq!(tree.root().count(), 2);
    assert_links_consistent(&tree);

    // A second attempt finds nothing and changes nothing.
    assert!(!tree.root_mut().remove_child(&doomed));
    assert_eq!(tree.root().count(), 2);
}

#[test]
fn remove_child_takes_the_grandchildren_along() {
    let mut tree = RoseTree::<_>::new(0);
    let child = tree.root_mut().add_child(1);
    let grandchild = tree.get_mut(child).expect("just added").add_child(2);
    assert_eq!(tree.root().count(), 3);

    assert!(tree.root_mut().remove_child(&child));
    assert_eq!(tree.root().count(), 1);
    assert!(tree.get(child).is_none());
    assert!(tree.get(grandchild).is_none());
}

#[test]
fn remove_children_by_value_removes_every_match() {
    let mut tree = RoseTree::<_>::new(8);
    let mut root = tree.root_mut();
    for value in [4, 3, 5, 4, 7].iter().copied() {
        root.add_child(value);
    }

    assert_eq!(tree.root_mut().remove_children_by_value(&4), 2);
    let root = tree.root();
    assert_eq!(root.child_count(), 3);
    assert_eq!(root.count(), 4);
    assert_eq!(root.height(), 2);
    // Order of the survivors is preserved.
    let survivors: Vec<_> = root.children().map(|child| *child.value()).collect();
    assert_eq!(survivors, vec![3, 5, 7]);
}

#[test]
fn remove_child_by_value_agrees_with_the_counting_variant() {
    let mut tree = RoseTree::<_>::new("root");
    tree.root_mut().add_child("a");
    tree.root_mut().add_child("b");
    tree.root_mut().add_child("a");

    assert!(tree.root_mut().remove_child_by_value(&"a"));
    assert_eq!(tree.root().child_count(), 1);
    assert!(!tree.root_mut().remove_child_by_value(&"a"));
    assert!(!tree.root_mut().remove_child_by_value(&"missing"));
}

#[test]
fn remove_children_by_values_matches_set_members_only() {
    let mut tree = RoseTree::<_>::new(8);
    let mut root = tree.root_mut();
    for value in [4, 3, 5, 4, 7].iter().copied() {
        root.add_child(value);
    }

    let mut values = HashSet::new();
    values.insert(4);
    values.insert(7);
    values.insert(100); // not present, matches nothing

    assert_eq!(tree.root_mut().remove_children_by_values(&values), 3);
    assert_eq!(tree.root().child_count(), 2);
    let survivors: Vec<_> = tree.root().children().map(|child| *child.value()).collect();
    assert_eq!(survivors, vec![3, 5]);
}

#[test]
fn remove_children_by_keys_uses_identity_not_equality() {
    let mut tree = RoseTree::<_>::new("root");
    let first = tree.root_mut().add_child("twin");
    let second = tree.root_mut().add_child("twin");
    tree.root_mut().add_child("other");

    let mut keys = HashSet::new();
    keys.insert(first);

    // Only the named twin goes away, not its equal-valued sibling.
    assert_eq!(tree.root_mut().remove_children_by_keys(&keys), 1);
    assert!(tree.get(first).is_none());
    assert_eq!(*tree.get(second).expect("still there").value(), "twin");
    assert_eq!(tree.root().child_count(), 2);
}

#[test]
fn empty_sets_remove_nothing() {
    let mut tree = RoseTree::<_>::new(1);
    tree.root_mut().add_child(2);

    assert_eq!(tree.root_mut().remove_children_by_values(&HashSet::new()), 0);
    assert_eq!(tree.root_mut().remove_children_by_keys(&HashSet::new()), 0);
    assert_eq!(tree.root().count(), 2);
}

#[test]
fn detach_child_yields_an_independent_tree() {
    let mut tree = RoseTree::<_>::new("root");
    let branch = tree.root_mut().add_child("branch");
    tree.get_mut(branch).expect("just added").add_child("deep");
    tree.root_mut().add_child("leaf");
    assert_eq!(tree.root().count(), 4);

    let detached = tree
        .root_mut()
        .detach_child(&branch)
        .expect("branch is a direct child");
    assert_eq!(tree.root().count(), 2);
    assert_links_consistent(&tree);

    let detached_root = detached.root();
    assert!(detached_root.is_root());
    assert_eq!(*detached_root.value(), "branch");
    assert_eq!(detached_root.count(), 2);
    assert_eq!(detached_root.height(), 2);
    assert_links_consistent(&detached);
}

#[test]
fn detach_of_a_non_child_is_a_no_op() {
    let mut tree = RoseTree::<_>::new("root");
    let child = tree.root_mut().add_child("child");
    let grandchild = tree.get_mut(child).expect("just added").add_child("deep");

    // A grandchild is not a *direct* child of the root.
    assert!(tree.root_mut().detach_child(&grandchild).is_none());
    assert_eq!(tree.root().count(), 3);
}

#[test]
fn adopt_reattaches_a_detached_subtree() {
    let mut tree = RoseTree::<_>::new("root");
    let branch = tree.root_mut().add_child("branch");
    tree.get_mut(branch).expect("just added").add_child("deep");
    let detached = tree
        .root_mut()
        .detach_child(&branch)
        .expect("branch is a direct child");

    let other_child = tree.root_mut().add_child("sibling");
    let adopted = tree
        .get_mut(other_child)
        .expect("just added")
        .adopt(detached);

    assert_eq!(tree.root().count(), 4);
    assert_eq!(tree.root().height(), 4);
    let adopted = tree.get(adopted).expect("adopted root is in the tree");
    assert_eq!(*adopted.value(), "branch");
    assert_eq!(
        adopted.parent().expect("no longer a root").raw_key(),
        &other_child,
    );
    assert_links_consistent(&tree);
}

#[test]
fn value_mut_changes_the_payload_in_place() {
    let mut tree = RoseTree::<_>::new(10);
    *tree.root_mut().value_mut() = 20;
    assert_eq!(*tree.root().value(), 20);
    assert_eq!(tree.root().count(), 1);
}

#[test]
fn children_iterate_in_insertion_order() {
    let mut tree = RoseTree::<_>::new(0);
    let mut root = tree.root_mut();
    for value in 1..=5 {
        root.add_child(value);
    }
    let order: Vec<_> = tree.root().children().map(|child| *child.value()).collect();
    assert_eq!(order, vec![1, 2, 3, 4, 5]);
    assert_eq!(tree.root().children().len(), 5);
}

#[test]
fn display_summarizes_the_root() {
    let mut tree = RoseTree::<_>::new(8);
    tree.root_mut().add_child(4);
    assert_eq!(tree.to_string(), "Root: 8, Height: 2, Count: 2");
}

#[test]
fn with_capacity_does_not_affect_the_structure() {
    let tree = RoseTree::<_>::with_capacity(16, "root");
    assert!(tree.root().is_leaf());
    assert_eq!(tree.node_count(), 1);
}

#[cfg(feature = "slotmap")]
#[test]
fn slotmap_backend_behaves_the_same() {
    let mut tree = SlotMapRoseTree::new("root");
    let child = tree.root_mut().add_child("leaf");
    assert_eq!(tree.root().count(), 2);
    assert!(tree.root_mut().remove_child(&child));
    assert_eq!(tree.root().count(), 1);
}
