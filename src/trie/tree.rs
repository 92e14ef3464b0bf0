//! Arena-backed binary trie keyed by IPv4 prefixes

use super::{NodeId, TrieNode};
use crate::model::{addr, Subnet, MAX_PREFIX_LEN};
use crate::{Error, Result};

const ROOT: NodeId = 0;
const HIGH_BIT: u32 = 0x8000_0000;

/// A binary trie mapping IPv4 prefixes to payloads
///
/// All nodes live in a single arena with the root at index 0. Nodes are
/// created lazily by [`PrefixTrie::insert`] and are never removed, so the
/// only state change a node ever sees is the one-time attachment of its
/// entry.
#[derive(Clone, Debug)]
pub struct PrefixTrie<T> {
    nodes: Vec<TrieNode<T>>,
    len: usize,
}

impl<T> PrefixTrie<T> {
    /// Create an empty trie holding only the root node
    pub fn new() -> Self {
        PrefixTrie {
            nodes: vec![TrieNode::empty()],
            len: 0,
        }
    }

    /// Number of entries stored
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes in the arena, root included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Bind `entry` to the first `prefix_len` bits of `network`
    ///
    /// Existing nodes along the bit path are reused; the remainder of the
    /// path is created in one pass. A prefix that already carries an entry
    /// is rejected with [`Error::DuplicateSubnet`] and keeps its original
    /// entry. Length 0 binds the root, matching every address.
    pub fn insert(&mut self, network: u32, prefix_len: u8, entry: T) -> Result<()> {
        if prefix_len > MAX_PREFIX_LEN {
            return Err(Error::InvalidPrefixLength(prefix_len));
        }

        let mut node = ROOT;
        let mut bit = HIGH_BIT;
        let mut depth = 0;

        while depth < prefix_len {
            match self.nodes[node].child(network & bit != 0) {
                Some(next) => {
                    node = next;
                    bit >>= 1;
                    depth += 1;
                }
                None => break,
            }
        }

        if depth == prefix_len {
            let slot = &mut self.nodes[node].entry;
            if slot.is_some() {
                return Err(Error::DuplicateSubnet(format!(
                    "{}/{}",
                    addr::format_dotted_quad(network),
                    prefix_len
                )));
            }
            *slot = Some(entry);
            self.len += 1;
            return Ok(());
        }

        while depth < prefix_len {
            let id = self.nodes.len();
            self.nodes.push(TrieNode::empty());
            self.nodes[node].set_child(network & bit != 0, id);
            node = id;
            bit >>= 1;
            depth += 1;
        }

        self.nodes[node].entry = Some(entry);
        self.len += 1;
        Ok(())
    }

    /// Find the entry of the most specific prefix containing `addr`
    pub fn lookup(&self, addr: u32) -> Option<&T> {
        self.longest_match(addr).map(|(_, entry)| entry)
    }

    /// Like [`lookup`](Self::lookup), also returning the matched subnet
    pub fn longest_match(&self, addr: u32) -> Option<(Subnet, &T)> {
        let mut best = None;
        for (depth, node) in self.path(addr) {
            if let Some(entry) = &self.nodes[node].entry {
                best = Some((depth, entry));
            }
        }
        best.map(|(depth, entry)| (Subnet::truncated(addr, depth), entry))
    }

    /// Every prefix containing `addr`, least specific first
    pub fn matches(&self, addr: u32) -> Vec<(Subnet, &T)> {
        self.path(addr)
            .filter_map(|(depth, node)| {
                self.nodes[node]
                    .entry
                    .as_ref()
                    .map(|entry| (Subnet::truncated(addr, depth), entry))
            })
            .collect()
    }

    /// Get the entry bound to exactly this prefix, if any
    pub fn get(&self, network: u32, prefix_len: u8) -> Option<&T> {
        if prefix_len > MAX_PREFIX_LEN {
            return None;
        }
        self.path(network)
            .find(|(depth, _)| *depth == prefix_len)
            .and_then(|(_, node)| self.nodes[node].entry.as_ref())
    }

    /// Iterate over all entries, depth first with 0-bits before 1-bits
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            trie: self,
            stack: vec![(ROOT, 0, 0)],
        }
    }

    /// Walk the nodes selected by the bits of `addr`, root first
    fn path(&self, addr: u32) -> Path<'_, T> {
        Path {
            trie: self,
            addr,
            next: Some((0, ROOT)),
        }
    }
}

impl<T> Default for PrefixTrie<T> {
    fn default() -> Self {
        PrefixTrie::new()
    }
}

impl<'a, T> IntoIterator for &'a PrefixTrie<T> {
    type Item = (Subnet, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Nodes on the descent path of one address, with their depths
struct Path<'a, T> {
    trie: &'a PrefixTrie<T>,
    addr: u32,
    next: Option<(u8, NodeId)>,
}

impl<'a, T> Iterator for Path<'a, T> {
    type Item = (u8, NodeId);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.next.take()?;
        if depth < MAX_PREFIX_LEN {
            let bit = self.addr & (HIGH_BIT >> depth) != 0;
            self.next = self.trie.nodes[node]
                .child(bit)
                .map(|child| (depth + 1, child));
        }
        Some((depth, node))
    }
}

/// Iterator over the entries of a [`PrefixTrie`]
pub struct Iter<'a, T> {
    trie: &'a PrefixTrie<T>,
    /// Pending nodes with the network bits and depth that reach them
    stack: Vec<(NodeId, u32, u8)>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (Subnet, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((id, network, depth)) = self.stack.pop() {
            let node = &self.trie.nodes[id];

            if depth < MAX_PREFIX_LEN {
                let bit = HIGH_BIT >> depth;
                if let Some(right) = node.right {
                    self.stack.push((right, network | bit, depth + 1));
                }
                if let Some(left) = node.left {
                    self.stack.push((left, network, depth + 1));
                }
            }

            if let Some(entry) = &node.entry {
                return Some((Subnet::truncated(network, depth), entry));
            }
        }
        None
    }
}
