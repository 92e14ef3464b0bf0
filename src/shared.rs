//! A view shared between threads, with whole-view reloads
//!
//! A single [`View`] is never mutated while readers use it. Reloading builds
//! a complete replacement first and only then swaps it in under the write
//! lock, so lookups always see either the old or the new view in full.

use crate::model::ViewEntry;
use crate::{Result, View};
use log::info;
use parking_lot::RwLock;
use std::path::Path;
use std::sync::Arc;

/// Cloneable handle to a reloadable [`View`]
#[derive(Clone, Debug, Default)]
pub struct SharedView {
    inner: Arc<RwLock<View>>,
}

impl SharedView {
    pub fn new(view: View) -> Self {
        SharedView {
            inner: Arc::new(RwLock::new(view)),
        }
    }

    /// Load a view file into a new shared handle
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Ok(SharedView::new(View::load(path)?))
    }

    /// Resolve an address to its area name
    pub fn lookup(&self, address: &str) -> Result<Option<ViewEntry>> {
        Ok(self.inner.read().lookup(address)?.cloned())
    }

    /// Run `f` against the current view while holding the read lock
    pub fn with_view<R>(&self, f: impl FnOnce(&View) -> R) -> R {
        f(&self.inner.read())
    }

    /// Replace the current view with a freshly loaded file
    ///
    /// On error the current view stays in place.
    pub fn reload(&self, path: impl AsRef<Path>) -> Result<()> {
        let view = View::load(path)?;
        self.replace(view);
        Ok(())
    }

    /// Swap in an already built view, returning the old one
    pub fn replace(&self, view: View) -> View {
        let entries = view.len();
        let old = std::mem::replace(&mut *self.inner.write(), view);
        info!("Swapped in view with {} subnets", entries);
        old
    }
}
