//! Token information produced by the scanner.

use esparse_ast::syntax_kind::SyntaxKind;
use esparse_ast::types::TokenFlags;
use esparse_core::intern::InternedString;
use esparse_core::text::TextRange;
use esparse_diagnostics::messages;
use esparse_diagnostics::DiagnosticMessage;
use thiserror::Error;

/// A lexical error attached to the token it was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("Unterminated string literal.")]
    UnterminatedString,
    #[error("Unterminated template literal.")]
    UnterminatedTemplate,
    #[error("Unterminated regular expression literal.")]
    UnterminatedRegex,
    #[error("'*/' expected.")]
    UnterminatedComment,
    #[error("Invalid character.")]
    InvalidCharacter,
    #[error("Invalid escape sequence.")]
    InvalidEscape,
    #[error("Hexadecimal digit expected.")]
    HexDigitExpected,
    #[error("Binary digit expected.")]
    BinaryDigitExpected,
    #[error("Octal digit expected.")]
    OctalDigitExpected,
    #[error("Digit expected.")]
    DigitExpected,
    #[error("An identifier or keyword cannot immediately follow a numeric literal.")]
    IdentifierAfterNumber,
    #[error("Numeric separators are not allowed here.")]
    InvalidSeparator,
    #[error("Invalid Unicode escape sequence.")]
    InvalidUnicodeEscape,
    #[error("Octal escape sequences are not allowed in template strings.")]
    OctalEscapeInTemplate,
    #[error("Unexpected template literal token {found}.")]
    UnexpectedTemplateToken { found: SyntaxKind },
}

impl ScanError {
    /// The catalogue entry reported for this error.
    pub fn message(&self) -> DiagnosticMessage {
        match self {
            ScanError::UnterminatedString => messages::UNTERMINATED_STRING_LITERAL,
            ScanError::UnterminatedTemplate => messages::UNTERMINATED_TEMPLATE_LITERAL,
            ScanError::UnterminatedRegex => messages::UNTERMINATED_REGULAR_EXPRESSION,
            ScanError::UnterminatedComment => messages::UNTERMINATED_COMMENT,
            ScanError::InvalidCharacter => messages::INVALID_CHARACTER,
            ScanError::InvalidEscape => messages::INVALID_ESCAPE_SEQUENCE,
            ScanError::HexDigitExpected => messages::HEXADECIMAL_DIGIT_EXPECTED,
            ScanError::BinaryDigitExpected => messages::BINARY_DIGIT_EXPECTED,
            ScanError::OctalDigitExpected => messages::OCTAL_DIGIT_EXPECTED,
            ScanError::DigitExpected => messages::DIGIT_EXPECTED,
            ScanError::IdentifierAfterNumber => messages::IDENTIFIER_DIRECTLY_AFTER_NUMBER,
            ScanError::InvalidSeparator => messages::INVALID_NUMERIC_SEPARATOR,
            ScanError::InvalidUnicodeEscape => messages::INVALID_UNICODE_ESCAPE,
            ScanError::OctalEscapeInTemplate => messages::OCTAL_ESCAPE_IN_TEMPLATE,
            ScanError::UnexpectedTemplateToken { .. } => {
                messages::UNEXPECTED_TEMPLATE_LITERAL_TOKEN
            }
        }
    }

    /// Arguments for the `{0}` placeholders of [`ScanError::message`].
    pub fn message_args(&self) -> Vec<&'static str> {
        match self {
            ScanError::UnexpectedTemplateToken { found } => vec![found.display_text()],
            _ => Vec::new(),
        }
    }

    /// Whether this error is a malformed escape, which tagged templates tolerate.
    pub fn is_escape_error(&self) -> bool {
        matches!(
            self,
            ScanError::InvalidEscape
                | ScanError::HexDigitExpected
                | ScanError::InvalidUnicodeEscape
                | ScanError::OctalEscapeInTemplate
        )
    }
}

/// Information about a scanned token.
#[derive(Debug, Clone)]
pub struct TokenInfo {
    /// The kind of token.
    pub kind: SyntaxKind,
    /// Start position in the source text.
    pub pos: u32,
    /// End position in the source text (exclusive).
    pub end: u32,
    /// Source text of the token. For template tokens this is the raw text
    /// between the delimiters.
    pub text: String,
    /// Cooked value of string and template tokens, the identifier name with
    /// escapes resolved for identifiers.
    pub value: String,
    /// Token flags (preceding line break, numeric format, etc.).
    pub flags: TokenFlags,
    /// Interned identifier or keyword text, filled in by the token stream.
    pub atom: Option<InternedString>,
    pub error: Option<ScanError>,
}

impl TokenInfo {
    pub fn new(kind: SyntaxKind, pos: u32, end: u32) -> Self {
        Self {
            kind,
            pos,
            end,
            text: String::new(),
            value: String::new(),
            flags: TokenFlags::NONE,
            atom: None,
            error: None,
        }
    }

    /// The length of this token in characters.
    pub fn len(&self) -> u32 {
        self.end - self.pos
    }

    /// Whether this token has zero length.
    pub fn is_empty(&self) -> bool {
        self.pos == self.end
    }

    pub fn range(&self) -> TextRange {
        TextRange::new(self.pos, self.end)
    }

    /// Whether there was a line break before this token.
    pub fn has_preceding_line_break(&self) -> bool {
        self.flags.contains(TokenFlags::PRECEDING_LINE_BREAK)
    }

    /// Identifier and keyword tokens.
    pub fn is_identifier_or_keyword(&self) -> bool {
        self.kind == SyntaxKind::Identifier || self.kind.is_keyword()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    /// `// ...`
    Line,
    /// `/* ... */`
    Block,
}

/// A comment seen while skipping trivia.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub kind: CommentKind,
    /// Full comment text, delimiters included, trailing whitespace of line
    /// comments removed.
    pub text: String,
    pub range: TextRange,
    /// A block comment that ran into the end of input.
    pub unterminated: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_error_messages_match_catalogue() {
        assert_eq!(
            ScanError::UnterminatedString.to_string(),
            ScanError::UnterminatedString.message().message
        );
        assert_eq!(
            ScanError::InvalidCharacter.to_string(),
            ScanError::InvalidCharacter.message().message
        );
        let err = ScanError::UnexpectedTemplateToken {
            found: SyntaxKind::SemicolonToken,
        };
        assert_eq!(err.message_args(), vec![";"]);
    }

    #[test]
    fn test_escape_errors() {
        assert!(ScanError::InvalidEscape.is_escape_error());
        assert!(!ScanError::UnterminatedTemplate.is_escape_error());
    }
}
