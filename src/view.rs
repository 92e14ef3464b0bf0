//! High-level View API
//!
//! A [`View`] is a loaded view configuration: every subnet of every line
//! bound to its area in a [`PrefixTrie`], ready for address lookups.

use crate::config::parse_line;
use crate::model::{addr, Subnet, ViewEntry};
use crate::trie::{Iter, PrefixTrie};
use crate::{Error, Result};
use log::{debug, info, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Source name used for views parsed from in-memory text
const INLINE_SOURCE: &str = "<inline>";

/// Subnet to area bindings with longest-prefix lookups
#[derive(Clone, Debug, Default)]
pub struct View {
    trie: PrefixTrie<ViewEntry>,
    /// File (or other source) the view was loaded from
    source: Option<String>,
    /// Lines consumed so far, for error reporting
    line_num: usize,
}

impl View {
    /// Create an empty view
    pub fn new() -> Self {
        View::default()
    }

    /// Load a view configuration file
    ///
    /// Loading stops at the first bad line, bad subnet or duplicate subnet;
    /// the error carries the file name and line number.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        View::from_reader(path.display().to_string(), BufReader::new(file))
    }

    /// Load a view from any line-oriented reader
    pub fn from_reader(name: impl Into<String>, reader: impl BufRead) -> Result<Self> {
        let mut view = View {
            source: Some(name.into()),
            ..View::default()
        };
        view.read_lines(reader)?;

        info!(
            "Loaded {} subnets from {} ({} lines)",
            view.len(),
            view.source_name(),
            view.line_num
        );
        Ok(view)
    }

    /// Load a view from configuration text
    pub fn parse(text: &str) -> Result<Self> {
        View::from_reader(INLINE_SOURCE, text.as_bytes())
    }

    fn read_lines(&mut self, reader: impl BufRead) -> Result<()> {
        for line in reader.lines() {
            let line = line?;
            self.line_num += 1;

            self.insert_line(&line).map_err(|e| Error::Load {
                source_name: self.source_name().to_string(),
                line: self.line_num,
                source: Box::new(e),
            })?;
        }
        Ok(())
    }

    /// Bind every subnet on one configuration line; returns how many were added
    pub fn insert_line(&mut self, line: &str) -> Result<usize> {
        let Some(parsed) = parse_line(line)? else {
            return Ok(0);
        };

        for subnet in &parsed.subnets {
            self.insert_subnet(subnet, parsed.area)?;
        }
        Ok(parsed.subnets.len())
    }

    /// Bind one `a.b.c.d/len` subnet to `area`
    pub fn insert_subnet(&mut self, subnet_text: &str, area: &str) -> Result<()> {
        let subnet: Subnet = subnet_text.parse()?;
        if subnet.has_host_bits() {
            if self.line_num == 0 {
                warn!("Subnet {} has bits set below its prefix length", subnet_text);
            } else {
                warn!(
                    "{} line {}: subnet {} has bits set below its prefix length",
                    self.source_name(),
                    self.line_num,
                    subnet_text
                );
            }
        }

        self.trie.insert(
            subnet.network(),
            subnet.prefix_len(),
            ViewEntry::new(area, subnet_text),
        )?;
        debug!("Bound {} to area {}", subnet_text, area);
        Ok(())
    }

    /// Find the area for a dotted-quad address
    ///
    /// Malformed addresses are an error; an address outside every configured
    /// subnet is `Ok(None)`.
    pub fn lookup(&self, address: &str) -> Result<Option<&ViewEntry>> {
        let addr = addr::parse_dotted_quad(address)?;
        Ok(self.lookup_addr(addr))
    }

    /// Find the area for a packed address
    pub fn lookup_addr(&self, addr: u32) -> Option<&ViewEntry> {
        self.trie.lookup(addr)
    }

    /// All entries whose subnet contains `address`, least specific first
    pub fn matches(&self, address: &str) -> Result<Vec<(Subnet, &ViewEntry)>> {
        let addr = addr::parse_dotted_quad(address)?;
        Ok(self.trie.matches(addr))
    }

    /// Iterate over every binding in address order
    pub fn entries(&self) -> Iter<'_, ViewEntry> {
        self.trie.iter()
    }

    /// Number of subnets bound
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// Number of lines read while loading
    pub fn line_count(&self) -> usize {
        self.line_num
    }

    /// Where the view was loaded from, if anywhere
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// The underlying trie
    pub fn trie(&self) -> &PrefixTrie<ViewEntry> {
        &self.trie
    }

    fn source_name(&self) -> &str {
        self.source.as_deref().unwrap_or(INLINE_SOURCE)
    }
}
