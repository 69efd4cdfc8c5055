//! esparse_core: Core utilities for the esparse ECMAScript parser.
//!
//! Provides text ranges, the char-offset line map, string interning, and the
//! arena helpers used by every later stage.

pub mod arena;
pub mod intern;
pub mod text;

// Re-export commonly used types
pub use arena::alloc_vec_in;
pub use intern::{InternedString, StringInterner};
pub use text::{LineAndColumn, LineMap, TextPos, TextRange, TextSpan};
