//! Parsing of a single view configuration line

use crate::{Error, Result};

/// Number of whitespace separated fields on a view line
pub const LINE_FIELDS: usize = 5;

const AREA_FIELD: usize = 1;
const NET_FIELD: usize = 4;

const NET_FIELD_PREFIX: &str = "{";
const NET_FIELD_SUFFIX: &str = ";};};";
const NET_FIELD_SEPARATOR: char = ';';

/// The pieces of one non-blank configuration line
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewLine<'a> {
    /// Area name every subnet on this line binds to
    pub area: &'a str,
    /// Subnet expressions, still unparsed
    pub subnets: Vec<&'a str>,
}

/// Split a configuration line into its area and subnet expressions
///
/// Returns `Ok(None)` for blank lines. An empty list (`{;};};`) yields no
/// subnets but an empty entry inside a list is an [`Error::InvalidSubnet`].
/// Subnet text itself is not validated here.
pub fn parse_line(line: &str) -> Result<Option<ViewLine<'_>>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != LINE_FIELDS {
        return Err(Error::InvalidLine {
            expected: LINE_FIELDS,
            found: fields.len(),
        });
    }

    let mut nets = fields[NET_FIELD];
    nets = nets.strip_prefix(NET_FIELD_PREFIX).unwrap_or(nets);
    nets = nets.strip_suffix(NET_FIELD_SUFFIX).unwrap_or(nets);

    let subnets: Vec<&str> = if nets.is_empty() {
        Vec::new()
    } else {
        nets.split(NET_FIELD_SEPARATOR).collect()
    };
    if subnets.iter().any(|s| s.is_empty()) {
        return Err(Error::InvalidSubnet(fields[NET_FIELD].to_string()));
    }

    Ok(Some(ViewLine {
        area: fields[AREA_FIELD],
        subnets,
    }))
}
