use llrb::tree::Tree;

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use crate::Op;

type IntTree = Tree<i8, fn(&i8, &i8) -> Ordering>;

/// Applies a set of operations to a tree and a map of occurrence counts.
/// This way we can ensure that after a random smattering of inserts and
/// removes the tree agrees with the model about exactly which elements
/// remain and how many.
fn do_ops(ops: &[Op<i8>], tree: &mut IntTree) -> HashMap<i8, usize> {
    let mut counts: HashMap<i8, usize> = HashMap::new();

    for op in ops {
        match *op {
            Op::Insert(x) => {
                tree.insert(x);
                *counts.entry(x).or_insert(0) += 1;
            }
            Op::Remove(x) => {
                let expected = counts.get(&x).map_or(false, |count| *count > 0);
                assert_eq!(tree.remove(&x), expected);
                if expected {
                    *counts.get_mut(&x).unwrap() -= 1;
                }
            }
            Op::Contains(x) => {
                let expected = counts.get(&x).map_or(false, |count| *count > 0);
                assert_eq!(tree.contains(&x), expected);
            }
        }
    }

    counts
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let counts = do_ops(&ops, &mut tree);

        tree.len() == counts.values().sum::<usize>()
            && counts.iter().all(|(x, count)| tree.contains(x) == (*count > 0))
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x);
        }

        xs.iter().all(|x| tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x);
        }
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn round_trip_leaves_nothing_behind(xs: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x);
        }

        for x in &xs {
            if !tree.remove(x) {
                return false;
            }
        }

        tree.is_empty() && xs.iter().all(|x| !tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn membership_is_order_independent(xs: Vec<i8>) -> bool {
        let mut ascending = xs.clone();
        ascending.sort_unstable();
        let mut descending = ascending.clone();
        descending.reverse();

        let mut from_given = Tree::new();
        let mut from_sorted = Tree::new();
        let mut from_reversed = Tree::new();
        for ((x, asc), desc) in xs.iter().zip(&ascending).zip(&descending) {
            from_given.insert(*x);
            from_sorted.insert(*asc);
            from_reversed.insert(*desc);
        }

        xs.iter().all(|x| {
            from_given.contains(x) && from_sorted.contains(x) && from_reversed.contains(x)
        })
    }
}
