//! Parse check files: text whose comments carry `CHECK`-style directives
//! describing a program's expected output.
//!
//! ```no_run
//! use outputcheck::parser::CheckFileParser;
//!
//! let parser = CheckFileParser::new("CHECK", "#")?;
//! let directives = parser.parse_str("t.txt", "# CHECK: foo\n# CHECK-NEXT: bar\n")?;
//! assert_eq!(directives.len(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod directive;
pub mod engine;
pub mod parser;
pub mod types;
