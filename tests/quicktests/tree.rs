use ordtree::{Deletion, Insertion, Tree};

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of insert, delete and invert operations to a tree and a set.
/// This way we can ensure that after a random smattering of operations we
/// have the same values in both, whichever way the tree is currently ordered.
fn do_ops(ops: &[Op], tree: &mut Tree, set: &mut BTreeSet<i32>) -> bool {
    for op in ops {
        let agrees = match *op {
            Op::Insert(v) => {
                let inserted = tree.insert(v.into()) == Insertion::Inserted;
                inserted == set.insert(v.into())
            }
            Op::Delete(v) => {
                let deleted = tree.delete(v.into()) == Deletion::Deleted;
                deleted == set.remove(&i32::from(v))
            }
            Op::Invert => {
                tree.invert();
                true
            }
        };
        if !agrees || tree.len() != set.len() {
            return false;
        }
    }
    true
}

fn tree_of(xs: &[i8]) -> Tree {
    xs.iter().map(|&x| i32::from(x)).collect()
}

fn is_strictly_ascending(values: &[i32]) -> bool {
    values.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    if !do_ops(&ops, &mut tree, &mut set) {
        return false;
    }

    let ascending: Vec<i32> = set.iter().copied().collect();
    if tree.is_inverted() {
        let descending: Vec<i32> = ascending.iter().rev().copied().collect();
        if tree.inorder() != descending {
            return false;
        }
        tree.invert();
    }
    tree.inorder() == ascending && tree.is_valid()
}

#[quickcheck]
fn inverted_tree_finds_every_value(xs: Vec<i8>, ops: Vec<Op>) -> bool {
    let mut tree = tree_of(&xs);
    let mut set: BTreeSet<i32> = xs.iter().map(|&x| x.into()).collect();
    tree.invert();
    if !do_ops(&ops, &mut tree, &mut set) {
        return false;
    }

    set.iter().all(|&x| tree.contains(x))
        && set
            .iter()
            .all(|&x| tree.insert(x) == Insertion::AlreadyPresent)
        && tree.len() == set.len()
}

#[quickcheck]
fn inorder_is_strictly_ascending(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = tree_of(&xs);
    for delete in &deletes {
        let _ = tree.delete((*delete).into());
    }

    is_strictly_ascending(&tree.inorder())
}

#[quickcheck]
fn every_walk_has_len_values(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);
    let len = tree.len();

    tree.inorder().len() == len
        && tree.preorder().len() == len
        && tree.postorder().len() == len
        && tree.level_order().len() == len
        && tree.reverse_level_order().len() == len
        && tree.iter().count() == len
}

#[quickcheck]
fn reinserting_changes_nothing(xs: Vec<i8>) -> bool {
    let mut tree = tree_of(&xs);
    let before = tree.inorder();

    xs.iter()
        .all(|&x| tree.insert(x.into()) == Insertion::AlreadyPresent)
        && tree.inorder() == before
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = tree_of(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|&x| !tree.contains(x.into()))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = tree_of(&xs);
    for delete in &deletes {
        let _ = tree.delete((*delete).into());
    }

    let mut still_present = xs;
    // We may have inserted the same value multiple times - drop each one.
    still_present.retain(|x| !deletes.contains(x));

    deletes.iter().all(|&x| !tree.contains(x.into()))
        && still_present.iter().all(|&x| tree.contains(x.into()))
        && tree.is_valid()
}

#[quickcheck]
fn invert_reverses_inorder(xs: Vec<i8>) -> bool {
    let mut tree = tree_of(&xs);
    let mut expected = tree.inorder();
    expected.reverse();

    tree.invert();
    tree.inorder() == expected
}

#[quickcheck]
fn invert_twice_restores(ops: Vec<Op>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();
    do_ops(&ops, &mut tree, &mut set);

    let before = tree.clone();
    tree.invert();
    tree.invert();
    tree == before && tree.preorder() == before.preorder()
}

#[quickcheck]
fn balance_agrees_with_heights(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);
    let (min, max) = (tree.min_height(), tree.max_height());

    if tree.is_empty() {
        return min == -1 && max == -1 && tree.is_balanced();
    }
    min <= max && tree.is_balanced() == (max - min <= 1)
}
