//! Area bindings stored in the view trie

use serde::{Deserialize, Serialize};

/// An area label together with the subnet text it was configured under
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewEntry {
    /// The area (view) name returned for matching addresses
    pub area: String,
    /// The subnet exactly as it appeared in the configuration
    pub subnet: String,
}

impl ViewEntry {
    pub fn new(area: impl Into<String>, subnet: impl Into<String>) -> Self {
        ViewEntry {
            area: area.into(),
            subnet: subnet.into(),
        }
    }
}
