//! Fortigate configuration block parsing and table-writing primitives used by
//! higher-level export tools.

pub mod parser;
pub mod record;
pub mod writer;

pub use parser::{BlockParser, BlockProfile, ParseError, ParseOutcome, SplitRule};
pub use record::{KeyOrder, Record};
pub use writer::{render, write_file, TableOptions, WriteError};
