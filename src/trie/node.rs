//! Trie node types

/// Index of a node inside a trie's arena
pub type NodeId = usize;

/// A node in the prefix trie
///
/// Children are indices into the owning trie's arena rather than boxed
/// pointers; nodes are never freed individually, so an index stays valid for
/// the lifetime of the trie.
#[derive(Clone, Debug)]
pub struct TrieNode<T> {
    /// Child taken when the next address bit is 0
    pub left: Option<NodeId>,
    /// Child taken when the next address bit is 1
    pub right: Option<NodeId>,
    /// Payload for a prefix ending exactly at this depth
    pub entry: Option<T>,
}

impl<T> TrieNode<T> {
    /// Create a node with no children and no entry
    pub fn empty() -> Self {
        TrieNode {
            left: None,
            right: None,
            entry: None,
        }
    }

    /// The child selected by an address bit
    pub fn child(&self, bit: bool) -> Option<NodeId> {
        if bit {
            self.right
        } else {
            self.left
        }
    }

    pub(crate) fn set_child(&mut self, bit: bool, id: NodeId) {
        if bit {
            self.right = Some(id);
        } else {
            self.left = Some(id);
        }
    }
}
