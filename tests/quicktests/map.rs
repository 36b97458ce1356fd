use bst_map::{BstMap, KeyNotFound, Map, Traversal};
use quickcheck_macros::quickcheck;

use std::collections::{BTreeMap, HashSet};

use crate::Op;

/// Applies a set of operations to a `BstMap` and a `BTreeMap`.
/// This way we can ensure that after a random smattering of puts,
/// gets and clears both maps hold the same keys and values.
fn do_ops<K, V>(ops: &[Op<K, V>], bst: &mut BstMap<K, V>, map: &mut BTreeMap<K, V>) -> bool
where
    K: Clone + Ord,
    V: std::fmt::Debug + PartialEq + Clone,
{
    for op in ops {
        match op {
            Op::Put(k, v) => {
                bst.put(k.clone(), v.clone());
                map.insert(k.clone(), v.clone());
            }
            Op::Get(k) => {
                if bst.get(k).ok() != map.get(k) {
                    return false;
                }
            }
            Op::Clear => {
                bst.clear();
                map.clear();
            }
        }
    }

    bst.size() == map.len()
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8, i8>>) -> bool {
    let mut bst = BstMap::new();
    let mut map = BTreeMap::new();

    do_ops(&ops, &mut bst, &mut map) && map.keys().all(|key| bst.get(key) == Ok(&map[key]))
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i8>) -> bool {
    let bst: BstMap<_, _> = xs.iter().map(|x| (*x, ())).collect();
    let keys: Vec<i8> = bst
        .entry_list_in(Traversal::InOrder)
        .iter()
        .map(|e| *e.key())
        .collect();

    keys.windows(2).all(|pair| pair[0] < pair[1]) && keys.len() == bst.size()
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let bst: BstMap<_, _> = xs.iter().map(|x| (*x, *x)).collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !bst.contains_key(x) && bst.get(x) == Err(KeyNotFound))
}

#[quickcheck]
fn size_grows_only_for_new_keys(xs: Vec<i8>) -> bool {
    let mut bst = BstMap::new();
    let mut seen = HashSet::new();

    xs.into_iter().all(|x| {
        let before = bst.size();
        bst.put(x, x);
        let grew_by = bst.size() - before;
        grew_by == usize::from(seen.insert(x))
    })
}

#[quickcheck]
fn selectors_cover_every_order(xs: Vec<i8>, selector: u8) -> bool {
    let bst: BstMap<_, _> = xs.iter().map(|x| (*x, ())).collect();

    match Traversal::try_from(selector) {
        Ok(order) => bst.entry_list_in(order).len() == bst.size(),
        Err(_) => !(1..=3).contains(&selector),
    }
}

#[quickcheck]
fn clear_keeps_loop_counts(xs: Vec<i8>) -> bool {
    let mut bst: BstMap<_, _> = xs.iter().map(|x| (*x, ())).collect();
    for x in &xs {
        bst.contains_key(x);
    }
    let (gets, puts) = (bst.get_loop_count(), bst.put_loop_count());

    bst.clear();

    bst.size() == 0
        && bst.height() == 0
        && bst.get_loop_count() == gets
        && bst.put_loop_count() == puts
        && xs.iter().all(|x| bst.get(x).is_err())
}
