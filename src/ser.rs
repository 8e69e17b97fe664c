//! `serde` support. A tree is written as the sequence of its values in pre-order and read back by
//! inserting that sequence, so a valid tree comes back with exactly the same shape. An inverted
//! tree is read back in ascending order: it comes back as the tree it was before inverting.

use std::fmt;

use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Insertion, Tree};

impl Serialize for Tree {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for value in self.preorder() {
            seq.serialize_element(&value)?;
        }
        seq.end()
    }
}

struct TreeVisitor;

impl<'de> Visitor<'de> for TreeVisitor {
    type Value = Tree;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a sequence of distinct integers")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut tree = Tree::new();
        while let Some(value) = seq.next_element::<i32>()? {
            if tree.insert(value) == Insertion::AlreadyPresent {
                return Err(de::Error::custom(format_args!("duplicate value {value}")));
            }
        }
        Ok(tree)
    }
}

impl<'de> Deserialize<'de> for Tree {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(TreeVisitor)
    }
}
