//! # netview
//!
//! Resolve IPv4 addresses to named areas (DNS-view style labels) using
//! longest-prefix matching over a set of subnet to area bindings.
//!
//! ## Core Concepts
//!
//! - **Subnets**: `a.b.c.d/len` prefixes, each bound to one area
//! - **Areas**: opaque labels returned for matching addresses
//! - **Longest match**: among all subnets containing an address, the one with
//!   the greatest prefix length wins; `0.0.0.0/0` acts as a catch-all
//!
//! ## Example
//!
//! ```
//! use netview::View;
//!
//! let view = View::parse(
//!     "view WORLD x y {0.0.0.0/0;};};\n\
//!      view LAN x y {10.0.0.0/8;};};\n",
//! )?;
//! assert_eq!(view.lookup("10.1.2.3")?.unwrap().area, "LAN");
//! assert_eq!(view.lookup("8.8.8.8")?.unwrap().area, "WORLD");
//! # Ok::<(), netview::Error>(())
//! ```

pub mod config;
pub mod model;
pub mod settings;
pub mod trie;

mod error;
mod shared;
mod view;

pub use error::{Error, Result};
pub use model::{Subnet, ViewEntry};
pub use settings::{OutputFormat, Settings, SettingsStore};
pub use shared::SharedView;
pub use trie::PrefixTrie;
pub use view::View;
