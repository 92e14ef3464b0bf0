//! Binary prefix trie for longest-prefix matching
//!
//! This implements a bitwise trie over the 32-bit address space where:
//! - Each node sits at a depth equal to the number of address bits consumed
//! - Bit 0 descends left, bit 1 descends right, starting from bit 31
//! - An entry attached at depth `n` binds every address sharing those `n` bits
//! - Lookups keep the deepest entry seen, so the most specific subnet wins

mod node;
mod tree;

pub use node::{NodeId, TrieNode};
pub use tree::{Iter, PrefixTrie};
