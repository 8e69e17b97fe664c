#[macro_use]
extern crate quickcheck_macros;

use quickcheck::{Arbitrary, Gen};

mod tree;

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op {
    /// Insert the value into the tree
    Insert(i8),
    /// Delete the value from the tree
    Delete(i8),
    /// Mirror the tree
    Invert,
}

impl Arbitrary for Op {
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 1, 1, 2]).copied().unwrap_or(0) {
            0 => Op::Insert(i8::arbitrary(g)),
            1 => Op::Delete(i8::arbitrary(g)),
            2 => Op::Invert,
            _ => unreachable!(),
        }
    }
}
