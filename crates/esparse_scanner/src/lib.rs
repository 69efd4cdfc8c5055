//! esparse_scanner: the token source for the esparse parser.
//!
//! [`Scanner`] turns ECMAScript source text into tokens, recording comments
//! and attaching lexical errors to the token they occur in.
//! [`TokenStream`] wraps it with unbounded lookahead, explicit regex and
//! template-continuation modes, and a rewindable [`Cursor`].

mod char_codes;
mod scanner;
mod stream;
mod token;

pub use scanner::{is_identifier_part, is_identifier_start, Scanner};
pub use stream::{Cursor, TokenStream};
pub use token::{Comment, CommentKind, ScanError, TokenInfo};
