//! Core data model types for netview

pub mod addr;
mod entry;
mod subnet;

pub use entry::ViewEntry;
pub use subnet::{Subnet, MAX_PREFIX_LEN};
