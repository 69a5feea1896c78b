//! Command-line option parsing with declarative option tables.
//!
//! This crate turns an argument vector into an ordered, queryable record of
//! option occurrences and positional arguments:
//!
//! - [`OptionSpec`]: one recognized option (short name, long name, argument
//!   shape, help text, optional bound destination).
//! - [`OptionRegistry`]: the grouped table of options a parse runs against.
//! - [`Parser`]: classifies tokens (long options, short clusters, `=`
//!   assignments, the `--` end marker) and converts typed arguments.
//! - [`ParserResult`]: entries in scan order plus positional arguments.
//! - [`HelpFormatter`]: renders the table as aligned help text.
//!
//! Syntax markers (prefixes, assignment separator, end indicator, quoting)
//! come from [`ParserConfig`]. Table problems such as duplicate names are
//! reported by [`validate_registry`].
//!
//! # Example
//!
//! ```
//! use optline_core::*;
//!
//! let lines = Slot::new();
//! let mut registry = OptionRegistry::new();
//! registry.add(OptionSpec::new("number", 'n').with_description("number all output lines"));
//! registry.add(
//!     OptionSpec::new("lines", 'l')
//!         .with_argument("N", true)
//!         .with_description("print at most N lines")
//!         .bind_uint(&lines),
//! );
//!
//! let result = Parser::default()
//!     .parse_args(&registry, ["cat", "-nl", "10", "notes.txt"], true)
//!     .unwrap();
//!
//! assert!(result.contains_long("number"));
//! assert_eq!(lines.get(), Some(10));
//! assert_eq!(result.positional(), ["notes.txt"]);
//! assert!(validate_registry(&registry, &ParserConfig::default()).is_empty());
//! ```

mod binder;
mod config;
mod error;
mod help;
mod parser;
mod registry;
mod result;
pub mod text;
mod types;
mod validate;

pub use binder::convert;
pub use config::ParserConfig;
pub use error::{ErrorKind, IndexOutOfRange, ParseError, Result};
pub use help::{HelpFormatter, HelpLayout};
pub use parser::Parser;
pub use registry::{OptionGroup, OptionRegistry};
pub use result::{ParsedEntry, ParserResult};
pub use types::*;
pub use validate::{ValidationError, validate_registry};
