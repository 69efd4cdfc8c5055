//! The ECMAScript parser.
//!
//! A recursive descent parser over a [`TokenStream`]. Every `parse_*`
//! function consumes at least one token on every path, error paths
//! included, which is what guarantees the list loops terminate. Prefixes
//! that stay ambiguous until a later token (arrow parameters, destructuring
//! assignment, async arrows, `for` heads) are resolved by saving a
//! [`Cursor`] and re-parsing the span under the other rule.
//!
//! The grammar is split over several files that each add an
//! `impl Parser` block: statements, expressions, patterns, class and object
//! members, and module items.

use bumpalo::Bump;
use esparse_ast::node::*;
use esparse_ast::syntax_kind::SyntaxKind;
use esparse_ast::types::FeatureSet;
use esparse_core::arena::alloc_vec_in;
use esparse_core::intern::{InternedString, StringInterner};
use esparse_core::text::TextSpan;
use esparse_diagnostics::{messages, Diagnostic, DiagnosticCollection, DiagnosticMessage};
use esparse_options::{LanguageMode, ParserOptions};
use esparse_scanner::{Comment, TokenInfo, TokenStream};
use tracing::debug;

use crate::ParseResult;

/// Maximum recursion depth to prevent stack overflow on deeply nested input.
pub const MAX_RECURSION_DEPTH: u32 = 200;

const SOURCE_MAPPING_URL_PREFIX: &str = "//# sourceMappingURL=";

// ============================================================================
// Configuration and parse-wide state
// ============================================================================

/// Edition switches derived once from [`ParserOptions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// `for (var x = 1 in o)` is an error rather than a warning.
    pub at_least_6: bool,
    /// Trailing commas are allowed in parameter and argument lists.
    pub at_least_8: bool,
    /// Trailing commas in array and object literals draw a warning.
    pub warn_trailing_commas: bool,
    /// Strict-mode reserved words cannot be used as identifiers.
    pub strict: bool,
}

impl Config {
    pub fn new(options: ParserOptions) -> Self {
        Self {
            at_least_6: options.mode.at_least_6(),
            at_least_8: options.mode.at_least_8(),
            warn_trailing_commas: options.mode == LanguageMode::Es3,
            strict: options.strict,
        }
    }
}

/// The kind of function whose body is being parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FunctionFlavor {
    Normal,
    Generator,
    Async,
    AsyncGenerator,
}

impl FunctionFlavor {
    pub(crate) fn new(is_async: bool, is_generator: bool) -> Self {
        match (is_async, is_generator) {
            (false, false) => FunctionFlavor::Normal,
            (false, true) => FunctionFlavor::Generator,
            (true, false) => FunctionFlavor::Async,
            (true, true) => FunctionFlavor::AsyncGenerator,
        }
    }

    pub(crate) fn is_generator(self) -> bool {
        matches!(self, FunctionFlavor::Generator | FunctionFlavor::AsyncGenerator)
    }

    pub(crate) fn is_async(self) -> bool {
        matches!(self, FunctionFlavor::Async | FunctionFlavor::AsyncGenerator)
    }
}

/// Whether `in` may be read as a binary operator. It may not inside the
/// head of a `for` statement, before the `in` that splits the head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InMode {
    Normal,
    NoIn,
}

/// What a destructuring pattern may bind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PatternKind {
    /// Declarations, parameters and catch bindings: leaves are identifiers.
    Initializer,
    /// Assignment targets: leaves may be any assignable expression.
    Any,
}

/// A word that is only special in some positions (`async`, `of`, ...).
/// The scanner produces these as plain identifiers.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Contextual {
    pub(crate) atom: InternedString,
    pub(crate) text: &'static str,
}

impl Contextual {
    fn new(interner: &StringInterner, text: &'static str) -> Self {
        Self {
            atom: interner.intern_static(text),
            text,
        }
    }
}

pub(crate) struct PredefinedNames {
    pub(crate) async_: Contextual,
    pub(crate) await_: Contextual,
    pub(crate) of: Contextual,
    pub(crate) get: Contextual,
    pub(crate) set: Contextual,
    pub(crate) from: Contextual,
    pub(crate) as_: Contextual,
    pub(crate) target: Contextual,
    pub(crate) meta: Contextual,
    /// Text of the placeholder identifiers built on error paths.
    pub(crate) empty: InternedString,
}

impl PredefinedNames {
    fn new(interner: &StringInterner) -> Self {
        Self {
            async_: Contextual::new(interner, "async"),
            await_: Contextual::new(interner, "await"),
            of: Contextual::new(interner, "of"),
            get: Contextual::new(interner, "get"),
            set: Contextual::new(interner, "set"),
            from: Contextual::new(interner, "from"),
            as_: Contextual::new(interner, "as"),
            target: Contextual::new(interner, "target"),
            meta: Contextual::new(interner, "meta"),
            empty: interner.intern_static(""),
        }
    }
}

/// The parser produces a [`Program`] from ECMAScript source text.
pub struct Parser<'a> {
    pub(crate) arena: &'a Bump,
    pub(crate) stream: TokenStream,
    pub(crate) interner: StringInterner,
    pub(crate) file_name: String,
    pub(crate) config: Config,
    pub(crate) names: PredefinedNames,
    pub(crate) diagnostics: DiagnosticCollection,
    pub(crate) features: FeatureSet,
    /// One entry per enclosing function body, innermost last.
    pub(crate) function_context: Vec<FunctionFlavor>,
    /// Tracks recursion depth to prevent stack overflow on deeply nested input.
    pub(crate) recursion_depth: u32,
    /// Set once the depth limit is hit; no diagnostics are reported after.
    aborted: bool,
    /// Start of the last token whose lexical error was reported, so tokens
    /// re-read after a rewind do not report twice.
    last_lexical_error: Option<u32>,
}

impl<'a> Parser<'a> {
    pub fn new(arena: &'a Bump, file_name: &str, source_text: &str, options: ParserOptions) -> Self {
        let interner = StringInterner::new();
        let names = PredefinedNames::new(&interner);
        Self {
            arena,
            stream: TokenStream::new(source_text, interner.clone()),
            interner,
            file_name: file_name.to_string(),
            config: Config::new(options),
            names,
            diagnostics: DiagnosticCollection::new(),
            features: FeatureSet::empty(),
            function_context: vec![FunctionFlavor::Normal],
            recursion_depth: 0,
            aborted: false,
            last_lexical_error: None,
        }
    }

    pub fn config(&self) -> Config {
        self.config
    }

    /// Parse the whole input as a script, module items included.
    pub fn parse_program(mut self) -> ParseResult<'a> {
        debug!(
            file = %self.file_name,
            length = self.stream.source_len(),
            strict = self.config.strict,
            "parse start"
        );

        let mut elements = Vec::new();
        while !self.peek(SyntaxKind::EndOfFileToken) {
            elements.push(self.parse_script_element());
        }
        let element_count = elements.len();
        let elements = alloc_vec_in(self.arena, elements);

        // An unterminated trailing comment is carried by the end-of-file token.
        let eof = self.stream.peek(0).clone();
        self.report_token_error(&eof);

        let program = if self.aborted {
            None
        } else {
            Some(Program {
                data: NodeData::new(SyntaxKind::Program, 0, self.last_end()),
                elements,
            })
        };

        let comments = self.stream.take_comments();
        let source_mapping_url = find_source_mapping_url(&comments);

        debug!(
            file = %self.file_name,
            elements = element_count,
            errors = self.diagnostics.error_count(),
            warnings = self.diagnostics.warning_count(),
            features = %self.features,
            aborted = self.aborted,
            "parse finished"
        );

        ParseResult {
            program,
            features: self.features,
            comments,
            source_mapping_url,
            diagnostics: self.diagnostics,
            line_map: self.stream.line_map().clone(),
            interner: self.interner,
        }
    }

    // ========================================================================
    // Token management
    // ========================================================================

    #[inline]
    pub(crate) fn peek_kind(&mut self, k: usize) -> SyntaxKind {
        self.stream.peek_kind(k)
    }

    #[inline]
    pub(crate) fn peek(&mut self, kind: SyntaxKind) -> bool {
        self.stream.peek_kind(0) == kind
    }

    #[inline]
    pub(crate) fn peek_at(&mut self, k: usize, kind: SyntaxKind) -> bool {
        self.stream.peek_kind(k) == kind
    }

    /// Start offset of the next token, where a node about to be parsed begins.
    #[inline]
    pub(crate) fn node_start(&mut self) -> u32 {
        self.stream.peek(0).pos
    }

    /// End offset of the last consumed token.
    #[inline]
    pub(crate) fn last_end(&self) -> u32 {
        self.stream.position().offset()
    }

    /// Node data spanning from `start` to the end of the last consumed token.
    #[inline]
    pub(crate) fn node_data(&self, kind: SyntaxKind, start: u32) -> NodeData {
        NodeData::new(kind, start, self.last_end().max(start))
    }

    /// Consume the next token, reporting any lexical error it carries.
    /// Template tokens are left to the template parser, which decides
    /// whether their errors matter.
    pub(crate) fn next_token(&mut self) -> TokenInfo {
        let token = self.stream.next();
        if !token.kind.is_template() {
            self.report_token_error(&token);
        }
        token
    }

    pub(crate) fn report_token_error(&mut self, token: &TokenInfo) {
        let Some(error) = token.error else {
            return;
        };
        if self.last_lexical_error.map_or(false, |pos| token.pos <= pos) {
            return;
        }
        self.last_lexical_error = Some(token.pos);
        let args = error.message_args();
        self.report_at(token.pos, token.end, &error.message(), &args);
    }

    /// Consume the next token whatever it is. Returns `None` and reports
    /// `'X' expected` when it is not `kind`.
    pub(crate) fn eat(&mut self, kind: SyntaxKind) -> Option<TokenInfo> {
        let token = self.next_token();
        if token.kind != kind {
            self.report_expected(&token, kind.display_text());
            return None;
        }
        Some(token)
    }

    /// Consume the next token only if it is `kind`.
    pub(crate) fn eat_opt(&mut self, kind: SyntaxKind) -> Option<TokenInfo> {
        if self.peek(kind) {
            Some(self.next_token())
        } else {
            None
        }
    }

    /// An identifier, or a strict-mode reserved word outside strict code.
    pub(crate) fn peek_id(&mut self, k: usize) -> bool {
        let kind = self.peek_kind(k);
        kind == SyntaxKind::Identifier || (!self.config.strict && kind.is_strict_keyword())
    }

    pub(crate) fn peek_id_or_keyword(&mut self, k: usize) -> bool {
        let kind = self.peek_kind(k);
        kind == SyntaxKind::Identifier || kind.is_keyword()
    }

    /// Whether `id` was spelled as a reserved word that cannot name a
    /// binding under the current strictness.
    pub(crate) fn is_reserved_word(&self, id: &Identifier<'a>) -> bool {
        id.keyword
            .map_or(false, |kind| self.config.strict || !kind.is_strict_keyword())
    }

    pub(crate) fn peek_predefined(&mut self, k: usize, word: Contextual) -> bool {
        let token = self.stream.peek(k);
        token.kind == SyntaxKind::Identifier && token.atom == Some(word.atom)
    }

    /// Consume an identifier. Otherwise report, consume the token only if it
    /// is a reserved word, and return `None`.
    pub(crate) fn eat_id(&mut self) -> Option<Identifier<'a>> {
        if self.peek_id(0) {
            return Some(self.eat_id_or_keyword_as_id());
        }
        let token = self.stream.peek(0).clone();
        self.report_expected(&token, "identifier");
        if token.kind.is_keyword() {
            self.next_token();
        }
        None
    }

    pub(crate) fn eat_id_opt(&mut self) -> Option<Identifier<'a>> {
        if self.peek_id(0) {
            Some(self.eat_id_or_keyword_as_id())
        } else {
            None
        }
    }

    /// Consume an IdentifierName (reserved words allowed). Any other token
    /// is consumed too, reported, and turned into an empty placeholder name.
    pub(crate) fn eat_id_or_keyword_as_id(&mut self) -> Identifier<'a> {
        let token = self.next_token();
        if token.is_identifier_or_keyword() {
            self.identifier_from_token(&token)
        } else {
            self.report_expected(&token, "identifier");
            self.missing_identifier(token.pos, token.end)
        }
    }

    /// Consume a contextual word such as `from` or `as`.
    pub(crate) fn eat_predefined(&mut self, word: Contextual) -> Option<Identifier<'a>> {
        if self.peek_predefined(0, word) {
            return Some(self.eat_id_or_keyword_as_id());
        }
        let token = self.stream.peek(0).clone();
        self.report_expected(&token, word.text);
        if token.is_identifier_or_keyword() {
            self.next_token();
        }
        None
    }

    /// Whether automatic semicolon insertion applies before the token `k`
    /// positions ahead.
    pub(crate) fn peek_implicit_semicolon(&mut self, k: usize) -> bool {
        let token = self.stream.peek(k);
        token.has_preceding_line_break()
            || matches!(
                token.kind,
                SyntaxKind::SemicolonToken
                    | SyntaxKind::CloseBraceToken
                    | SyntaxKind::EndOfFileToken
            )
    }

    /// Consume an explicit `;`, or accept an inserted one.
    pub(crate) fn eat_possibly_implicit_semicolon(&mut self) {
        if self.eat_opt(SyntaxKind::SemicolonToken).is_some() {
            return;
        }
        if self.peek_implicit_semicolon(0) {
            return;
        }
        self.error(&messages::SEMI_COLON_EXPECTED, &[]);
    }

    // ========================================================================
    // Node construction
    // ========================================================================

    pub(crate) fn alloc<T>(&self, value: T) -> &'a T {
        self.arena.alloc(value)
    }

    pub(crate) fn alloc_slice<T>(&self, values: Vec<T>) -> &'a [T] {
        alloc_vec_in(self.arena, values)
    }

    pub(crate) fn alloc_str(&self, text: &str) -> &'a str {
        self.arena.alloc_str(text)
    }

    pub(crate) fn identifier_from_token(&self, token: &TokenInfo) -> Identifier<'a> {
        Identifier {
            data: NodeData::new(SyntaxKind::Identifier, token.pos, token.end),
            text: token
                .atom
                .unwrap_or_else(|| self.interner.intern(&token.value)),
            name: self.alloc_str(&token.value),
            keyword: token.kind.is_keyword().then_some(token.kind),
        }
    }

    pub(crate) fn missing_identifier(&self, pos: u32, end: u32) -> Identifier<'a> {
        Identifier {
            data: NodeData::new(SyntaxKind::Identifier, pos, end),
            text: self.names.empty,
            name: "",
            keyword: None,
        }
    }

    pub(crate) fn literal_from_token(&self, token: &TokenInfo) -> Literal<'a> {
        let raw = self.alloc_str(&token.text);
        let value = if token.kind == SyntaxKind::StringLiteral {
            self.alloc_str(&token.value)
        } else {
            raw
        };
        Literal {
            data: NodeData::new(token.kind, token.pos, token.end),
            raw,
            value,
            flags: token.flags,
        }
    }

    /// A zero-length placeholder at the end of the last consumed token.
    pub(crate) fn missing_expression(&self) -> Expression<'a> {
        let end = self.last_end();
        Expression::Missing(NodeData::new(SyntaxKind::MissingExpression, end, end))
    }

    // ========================================================================
    // Function context
    // ========================================================================

    pub(crate) fn push_function(&mut self, flavor: FunctionFlavor) {
        self.function_context.push(flavor);
    }

    pub(crate) fn pop_function(&mut self) {
        self.function_context.pop();
    }

    fn current_flavor(&self) -> FunctionFlavor {
        self.function_context
            .last()
            .copied()
            .unwrap_or(FunctionFlavor::Normal)
    }

    pub(crate) fn in_generator_context(&self) -> bool {
        self.current_flavor().is_generator()
    }

    pub(crate) fn in_async_context(&self) -> bool {
        self.current_flavor().is_async()
    }

    // ========================================================================
    // Diagnostics and features
    // ========================================================================

    pub(crate) fn record_feature(&mut self, feature: FeatureSet) {
        self.features |= feature;
    }

    pub(crate) fn report_at(&mut self, pos: u32, end: u32, msg: &DiagnosticMessage, args: &[&str]) {
        if self.aborted {
            return;
        }
        self.diagnostics.add(Diagnostic::with_location(
            self.file_name.clone(),
            TextSpan::from_bounds(pos, end.max(pos)),
            msg,
            args,
        ));
    }

    /// Report at the next unconsumed token.
    pub(crate) fn error(&mut self, msg: &DiagnosticMessage, args: &[&str]) {
        let (pos, end) = {
            let token = self.stream.peek(0);
            (token.pos, token.end)
        };
        self.report_at(pos, end, msg, args);
    }

    pub(crate) fn report_expected(&mut self, token: &TokenInfo, expected: &str) {
        self.report_at(token.pos, token.end, &messages::_0_EXPECTED, &[expected]);
    }

    /// Give up on input nested deeper than [`MAX_RECURSION_DEPTH`]: report
    /// once, then jump to the end of input so every pending loop stops.
    pub(crate) fn abandon_too_deep(&mut self) {
        if self.aborted {
            return;
        }
        self.error(&messages::TOO_DEEP_RECURSION, &[]);
        debug!(
            file = %self.file_name,
            depth = self.recursion_depth,
            offset = self.last_end(),
            "recursion limit reached, abandoning parse"
        );
        self.aborted = true;
        self.stream.skip_to_end();
    }
}

/// The URL of the last `//# sourceMappingURL=` line comment.
fn find_source_mapping_url(comments: &[Comment]) -> Option<String> {
    comments
        .iter()
        .rev()
        .find_map(|comment| {
            comment
                .text
                .trim()
                .strip_prefix(SOURCE_MAPPING_URL_PREFIX)
                .map(|url| url.trim().to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use esparse_scanner::CommentKind;
    use esparse_core::text::TextRange;

    fn line_comment(text: &str) -> Comment {
        Comment {
            kind: CommentKind::Line,
            text: text.to_string(),
            range: TextRange::new(0, text.chars().count() as u32),
            unterminated: false,
        }
    }

    #[test]
    fn test_function_flavor() {
        assert_eq!(FunctionFlavor::new(false, false), FunctionFlavor::Normal);
        assert!(FunctionFlavor::new(true, true).is_async());
        assert!(FunctionFlavor::new(true, true).is_generator());
        assert!(!FunctionFlavor::new(true, false).is_generator());
    }

    #[test]
    fn test_config_from_mode() {
        let es3 = Config::new(ParserOptions::new(LanguageMode::Es3, false));
        assert!(es3.warn_trailing_commas);
        assert!(!es3.at_least_6);
        let es8 = Config::new(ParserOptions::new(LanguageMode::Es8OrGreater, true));
        assert!(es8.at_least_6 && es8.at_least_8 && es8.strict);
        assert!(!es8.warn_trailing_commas);
    }

    #[test]
    fn test_source_mapping_url_last_wins() {
        let comments = vec![
            line_comment("//# sourceMappingURL=first.map"),
            line_comment("// unrelated"),
            line_comment("//# sourceMappingURL= second.map "),
        ];
        assert_eq!(
            find_source_mapping_url(&comments).as_deref(),
            Some("second.map")
        );
        assert_eq!(find_source_mapping_url(&comments[1..2]), None);
    }
}
