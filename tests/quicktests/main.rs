//! Property tests for the public API, checked against `std::collections::BTreeMap`.

use quickcheck::{Arbitrary, Gen};

mod map;

/// An enum for the various kinds of "things" to do to
/// a map in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op<K, V> {
    /// Put the K, V into the map
    Put(K, V),
    /// Get the K from the map
    Get(K),
    /// Empty the map
    Clear,
}

impl<K, V> Arbitrary for Op<K, V>
where
    K: Arbitrary,
    V: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 0, 1, 1, 2]).unwrap() {
            0 => Op::Put(K::arbitrary(g), V::arbitrary(g)),
            1 => Op::Get(K::arbitrary(g)),
            2 => Op::Clear,
            _ => unreachable!(),
        }
    }
}
