//! View configuration line format
//!
//! A view file binds areas to subnets, one area per line:
//!
//! ```text
//! view CN_TEL match-clients key {1.0.1.0/24;1.0.2.0/23;};};
//! ```
//!
//! Lines have exactly five whitespace separated fields. The second field is
//! the area name and the fifth holds a `;` separated subnet list, optionally
//! wrapped in `{` ... `;};};`. Blank lines are ignored.

mod line;

pub use line::{parse_line, ViewLine, LINE_FIELDS};
