//! A low-level text-scanning cursor.
//!
//! `textscan` tracks a read position within an immutable text buffer and
//! provides safe, allocation-conscious operations to inspect, advance, and
//! extract substrings. It is a building block for hand-written tokenizers
//! and line/column diagnostics, not a parser or grammar engine. It
//! includes:
//! - Clamped navigation with a [`NUL`] sentinel for out-of-range reads
//! - Predicate, char-set, literal, and regex scanning in skip/parse pairs
//! - Lazy token and match iterators
//! - Quoted-text scanning with configurable escape semantics
//! - A 1-based line/column position mapper
//!
//! Out-of-range access is converted into defined values and boolean
//! outcomes by design: `peek` past either end returns [`NUL`], a failed
//! search advances to the end of the text and returns `false`, and only
//! pattern compilation can actually fail.
//!
//! # Example
//!
//! ```
//! use textscan::{Case, Cursor};
//!
//! let mut cursor = Cursor::from(r#"name = "Anne ""The Brave""", age = 37"#);
//!
//! let key = cursor.parse_while(|c| c.is_alphanumeric());
//! assert_eq!(key, "name");
//!
//! cursor.skip_to_literal("\"", Case::Sensitive, false);
//! let value = cursor.parse_quoted();
//! assert_eq!(value, r#"Anne "The Brave""#);
//!
//! cursor.skip_to_matching(r"\d+", false)?;
//! let age = cursor.parse_while(|c| c.is_ascii_digit());
//! assert_eq!(age, "37");
//! assert!(cursor.at_end());
//! # Ok::<(), textscan::ScanError>(())
//! ```
//!
//! Offsets count chars (Unicode scalar values). A cursor is not safe for
//! concurrent mutation; clone it to scan shared text independently.

mod cursor;
mod error;
mod pattern;
mod position;
mod quoted;
mod scan;
mod token;

pub use cursor::{Case, Cursor, NUL};
pub use error::{ScanError, ScanResult};
pub use pattern::{Matches, PatternOptions};
pub use position::{line_column, LineColumn};
pub use quoted::{QuoteEscape, QuoteOptions};
pub use scan::{is_line_break, WhitespaceStop, LINE_BREAK_CHARS};
pub use token::Tokens;
