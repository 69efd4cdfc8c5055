//! esparse_parser: Recursive descent parser for ECMAScript.
//!
//! Pulls tokens from an [`esparse_scanner::TokenStream`] and builds an
//! arena-allocated tree, recording which language features the source uses,
//! the comments it contains and every syntax problem found along the way.
//! Parsing never fails: malformed input yields a best-effort tree with
//! placeholder nodes plus diagnostics.

mod expressions;
mod members;
mod modules;
mod parser;
mod patterns;
mod precedence;
mod statements;

use bumpalo::Bump;
use esparse_ast::node::Program;
use esparse_ast::types::FeatureSet;
use esparse_core::intern::StringInterner;
use esparse_core::text::LineMap;
use esparse_diagnostics::DiagnosticCollection;
use esparse_options::ParserOptions;
use esparse_scanner::Comment;

pub use parser::{Config, Parser, MAX_RECURSION_DEPTH};

/// Everything one parse produces.
#[derive(Debug)]
pub struct ParseResult<'a> {
    /// `None` only when the parse was abandoned for nesting too deeply.
    pub program: Option<Program<'a>>,
    /// Language features the source was seen to use.
    pub features: FeatureSet,
    /// Comments in source order.
    pub comments: Vec<Comment>,
    /// Value of the last `//# sourceMappingURL=` comment.
    pub source_mapping_url: Option<String>,
    pub diagnostics: DiagnosticCollection,
    pub line_map: LineMap,
    /// Resolves the `InternedString` keys held by identifiers.
    pub interner: StringInterner,
}

impl<'a> ParseResult<'a> {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }
}

/// Parse `source_text` as a script named `input.js`.
pub fn parse<'a>(arena: &'a Bump, source_text: &str, options: ParserOptions) -> ParseResult<'a> {
    Parser::new(arena, "input.js", source_text, options).parse_program()
}
