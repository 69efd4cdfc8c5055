//! Scanner integration tests.
//!
//! Verifies that the scanner correctly tokenizes ECMAScript constructs.

use esparse_ast::syntax_kind::SyntaxKind;
use esparse_ast::types::TokenFlags;
use esparse_core::StringInterner;
use esparse_scanner::{CommentKind, ScanError, Scanner, TokenStream};

/// Helper: scan all tokens from source and return as (kind, text) pairs.
fn scan_all(source: &str) -> Vec<(SyntaxKind, String)> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    loop {
        let kind = scanner.scan();
        if kind == SyntaxKind::EndOfFileToken {
            break;
        }
        tokens.push((kind, scanner.token_text().to_string()));
    }
    tokens
}

/// Helper: scan all token kinds.
fn scan_kinds(source: &str) -> Vec<SyntaxKind> {
    scan_all(source).into_iter().map(|(k, _)| k).collect()
}

/// Helper: scan a single token and return the scanner positioned on it.
fn scan_one(source: &str) -> Scanner {
    let mut scanner = Scanner::new(source);
    scanner.scan();
    scanner
}

#[test]
fn test_empty_source() {
    let tokens = scan_all("");
    assert!(tokens.is_empty());
}

#[test]
fn test_whitespace_only() {
    let tokens = scan_all("   \n\t  \u{feff}");
    assert!(tokens.is_empty());
}

#[test]
fn test_numeric_literals() {
    let tokens = scan_all("42 3.14 .5 0xFF 0b1010 0o17 1e10 2.5E-3");
    let kinds: Vec<_> = tokens.iter().map(|t| t.0).collect();
    assert!(kinds.iter().all(|k| *k == SyntaxKind::NumericLiteral));
    let texts: Vec<_> = tokens.iter().map(|t| t.1.as_str()).collect();
    assert_eq!(
        texts,
        vec!["42", "3.14", ".5", "0xFF", "0b1010", "0o17", "1e10", "2.5E-3"]
    );
}

#[test]
fn test_number_flags() {
    assert!(scan_one("0xFF").token_flags().contains(TokenFlags::HEX_SPECIFIER));
    assert!(scan_one("0b1").token_flags().contains(TokenFlags::BINARY_SPECIFIER));
    assert!(scan_one("0o7").token_flags().contains(TokenFlags::OCTAL_SPECIFIER));
    assert!(scan_one("017").token_flags().contains(TokenFlags::OCTAL));
    assert!(!scan_one("089").token_flags().contains(TokenFlags::OCTAL));
    assert!(scan_one("1e3").token_flags().contains(TokenFlags::SCIENTIFIC));
}

#[test]
fn test_number_errors() {
    assert_eq!(scan_one("0x").token_error(), Some(ScanError::HexDigitExpected));
    assert_eq!(scan_one("0b2").token_error(), Some(ScanError::BinaryDigitExpected));
    assert_eq!(scan_one("1e").token_error(), Some(ScanError::DigitExpected));
    let scanner = scan_one("3in");
    assert_eq!(scanner.token(), SyntaxKind::NumericLiteral);
    assert_eq!(scanner.token_error(), Some(ScanError::IdentifierAfterNumber));
    assert_eq!(scanner.token_text(), "3in");
}

#[test]
fn test_bigint_literal() {
    for source in ["10n", "0n", "0b101n", "0o17n", "0xFFn", "123456789012345678901234567890n"] {
        let scanner = scan_one(source);
        assert_eq!(scanner.token(), SyntaxKind::BigIntLiteral, "{}", source);
        assert_eq!(scanner.token_text(), source);
    }
    // A fraction cannot carry the suffix.
    assert_eq!(
        scan_one("1.5n").token_error(),
        Some(ScanError::IdentifierAfterNumber)
    );
}

#[test]
fn test_numeric_separator() {
    let scanner = scan_one("1_000_000");
    assert_eq!(scanner.token(), SyntaxKind::NumericLiteral);
    assert!(scanner.token_flags().contains(TokenFlags::CONTAINS_SEPARATOR));
    assert!(scanner.token_error().is_none());

    assert_eq!(scan_one("1_").token_error(), Some(ScanError::InvalidSeparator));
    assert_eq!(scan_one("1._5").token_error(), Some(ScanError::InvalidSeparator));
}

#[test]
fn test_string_literals() {
    let scanner = scan_one(r#""hello""#);
    assert_eq!(scanner.token(), SyntaxKind::StringLiteral);
    assert_eq!(scanner.token_value(), "hello");
    assert_eq!(scanner.token_text(), r#""hello""#);

    let scanner = scan_one("'it\\'s'");
    assert_eq!(scanner.token_value(), "it's");
}

#[test]
fn test_string_escape_sequences() {
    let scanner = scan_one(r#""\t\r\b\f\v\0A\x42\u{1F600}""#);
    assert_eq!(scanner.token_value(), "\t\r\u{8}\u{c}\u{b}\0AB\u{1F600}");
    assert!(scanner
        .token_flags()
        .contains(TokenFlags::EXTENDED_UNICODE_ESCAPE));
}

#[test]
fn test_string_line_continuation() {
    let scanner = scan_one("'a\\\nb'");
    assert_eq!(scanner.token_value(), "ab");
    assert!(scanner.token_error().is_none());
}

#[test]
fn test_unterminated_string() {
    let scanner = scan_one("'abc\nx");
    assert_eq!(scanner.token(), SyntaxKind::StringLiteral);
    assert_eq!(scanner.token_error(), Some(ScanError::UnterminatedString));
    assert!(scanner.token_flags().contains(TokenFlags::UNTERMINATED));
}

#[test]
fn test_template_literal() {
    let scanner = scan_one("`hello world`");
    assert_eq!(scanner.token(), SyntaxKind::NoSubstitutionTemplateLiteral);
    assert_eq!(scanner.token_text(), "hello world");

    let scanner = scan_one("``");
    assert_eq!(scanner.token(), SyntaxKind::NoSubstitutionTemplateLiteral);
    assert_eq!(scanner.token_value(), "");
}

#[test]
fn test_template_raw_and_cooked() {
    let scanner = scan_one("`a\\tb\r\nc`");
    assert_eq!(scanner.token_text(), "a\\tb\nc");
    assert_eq!(scanner.token_value(), "a\tb\nc");
}

#[test]
fn test_template_octal_escape() {
    let scanner = scan_one(r"`\01`");
    assert_eq!(scanner.token_error(), Some(ScanError::OctalEscapeInTemplate));
    assert!(scanner
        .token_flags()
        .contains(TokenFlags::CONTAINS_INVALID_ESCAPE));
}

#[test]
fn test_unterminated_template() {
    let scanner = scan_one("`abc");
    assert_eq!(scanner.token_error(), Some(ScanError::UnterminatedTemplate));
}

#[test]
fn test_identifiers() {
    let tokens = scan_all("foo _bar $baz café \u{3c0}");
    assert_eq!(tokens.len(), 5);
    assert!(tokens.iter().all(|t| t.0 == SyntaxKind::Identifier));
    assert_eq!(tokens[3].1, "café");
}

#[test]
fn test_keywords() {
    let kinds = scan_kinds("if else for while do return function var let const class new this");
    assert_eq!(
        kinds,
        vec![
            SyntaxKind::IfKeyword,
            SyntaxKind::ElseKeyword,
            SyntaxKind::ForKeyword,
            SyntaxKind::WhileKeyword,
            SyntaxKind::DoKeyword,
            SyntaxKind::ReturnKeyword,
            SyntaxKind::FunctionKeyword,
            SyntaxKind::VarKeyword,
            SyntaxKind::LetKeyword,
            SyntaxKind::ConstKeyword,
            SyntaxKind::ClassKeyword,
            SyntaxKind::NewKeyword,
            SyntaxKind::ThisKeyword,
        ]
    );
}

#[test]
fn test_contextual_words_are_identifiers() {
    let kinds = scan_kinds("async await of get set from as target meta");
    assert!(kinds.iter().all(|k| *k == SyntaxKind::Identifier));
}

#[test]
fn test_strict_mode_keywords() {
    let kinds = scan_kinds("implements interface package private protected public static yield");
    assert!(kinds.iter().all(|k| k.is_strict_keyword()));
}

#[test]
fn test_operators() {
    let kinds = scan_kinds("+ - * / % ** ++ -- == != === !== < > <= >= && || ! ?? ?.");
    assert_eq!(
        kinds,
        vec![
            SyntaxKind::PlusToken,
            SyntaxKind::MinusToken,
            SyntaxKind::AsteriskToken,
            SyntaxKind::SlashToken,
            SyntaxKind::PercentToken,
            SyntaxKind::AsteriskAsteriskToken,
            SyntaxKind::PlusPlusToken,
            SyntaxKind::MinusMinusToken,
            SyntaxKind::EqualsEqualsToken,
            SyntaxKind::ExclamationEqualsToken,
            SyntaxKind::EqualsEqualsEqualsToken,
            SyntaxKind::ExclamationEqualsEqualsToken,
            SyntaxKind::LessThanToken,
            SyntaxKind::GreaterThanToken,
            SyntaxKind::LessThanEqualsToken,
            SyntaxKind::GreaterThanEqualsToken,
            SyntaxKind::AmpersandAmpersandToken,
            SyntaxKind::BarBarToken,
            SyntaxKind::ExclamationToken,
            SyntaxKind::QuestionQuestionToken,
            SyntaxKind::QuestionDotToken,
        ]
    );
}

#[test]
fn test_question_dot_before_digit_is_conditional() {
    let kinds = scan_kinds("a?.5:b");
    assert_eq!(
        kinds,
        vec![
            SyntaxKind::Identifier,
            SyntaxKind::QuestionToken,
            SyntaxKind::NumericLiteral,
            SyntaxKind::ColonToken,
            SyntaxKind::Identifier,
        ]
    );
}

#[test]
fn test_punctuation() {
    let kinds = scan_kinds("{ } ( ) [ ] ; , . ... : => ~");
    assert_eq!(
        kinds,
        vec![
            SyntaxKind::OpenBraceToken,
            SyntaxKind::CloseBraceToken,
            SyntaxKind::OpenParenToken,
            SyntaxKind::CloseParenToken,
            SyntaxKind::OpenBracketToken,
            SyntaxKind::CloseBracketToken,
            SyntaxKind::SemicolonToken,
            SyntaxKind::CommaToken,
            SyntaxKind::DotToken,
            SyntaxKind::DotDotDotToken,
            SyntaxKind::ColonToken,
            SyntaxKind::EqualsGreaterThanToken,
            SyntaxKind::TildeToken,
        ]
    );
}

#[test]
fn test_assignment_operators() {
    let kinds = scan_kinds("= += -= *= /= %= **= <<= >>= >>>= &= |= ^= &&= ||= ??=");
    assert_eq!(kinds.len(), 16);
    assert!(kinds.iter().all(|k| k.is_assignment_operator()));
}

#[test]
fn test_shift_operators() {
    let kinds = scan_kinds("a << b >> c >>> d");
    assert_eq!(kinds[1], SyntaxKind::LessThanLessThanToken);
    assert_eq!(kinds[3], SyntaxKind::GreaterThanGreaterThanToken);
    assert_eq!(kinds[5], SyntaxKind::GreaterThanGreaterThanGreaterThanToken);
}

#[test]
fn test_shebang_skipping() {
    let kinds = scan_kinds("#!/usr/bin/env node\nlet x");
    assert_eq!(kinds, vec![SyntaxKind::LetKeyword, SyntaxKind::Identifier]);
}

#[test]
fn test_hash_is_invalid() {
    let scanner = scan_one("#x");
    assert_eq!(scanner.token(), SyntaxKind::Unknown);
    assert_eq!(scanner.token_error(), Some(ScanError::InvalidCharacter));
}

#[test]
fn test_comments_skipped() {
    let kinds = scan_kinds("a // line comment\n/* block\ncomment */ b");
    assert_eq!(kinds, vec![SyntaxKind::Identifier, SyntaxKind::Identifier]);
}

#[test]
fn test_block_comment_line_break_sets_flag() {
    let mut scanner = Scanner::new("a /*\n*/ b");
    scanner.scan();
    scanner.scan();
    assert!(scanner.has_preceding_line_break());

    let mut scanner = Scanner::new("a /* */ b");
    scanner.scan();
    scanner.scan();
    assert!(!scanner.has_preceding_line_break());
}

#[test]
fn test_unterminated_comment() {
    let mut scanner = Scanner::new("a /* never closed");
    scanner.scan();
    assert_eq!(scanner.scan(), SyntaxKind::EndOfFileToken);
    assert_eq!(scanner.token_error(), Some(ScanError::UnterminatedComment));
    let comments = scanner.take_comments();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].kind, CommentKind::Block);
    assert!(comments[0].unterminated);
}

#[test]
fn test_regex_literal() {
    let mut scanner = Scanner::new("/=a/");
    assert_eq!(scanner.scan(), SyntaxKind::SlashEqualsToken);
    assert_eq!(scanner.rescan_slash_token(), SyntaxKind::RegularExpressionLiteral);
    assert_eq!(scanner.token_text(), "/=a/");

    let mut scanner = Scanner::new("/a\\/b/u");
    scanner.scan();
    scanner.rescan_slash_token();
    assert_eq!(scanner.token_text(), "/a\\/b/u");
}

#[test]
fn test_unterminated_regex() {
    let mut scanner = Scanner::new("/abc\n/");
    scanner.scan();
    scanner.rescan_slash_token();
    assert_eq!(scanner.token_error(), Some(ScanError::UnterminatedRegex));
}

#[test]
fn test_variable_declaration_tokens() {
    let kinds = scan_kinds("const x = 42;");
    assert_eq!(
        kinds,
        vec![
            SyntaxKind::ConstKeyword,
            SyntaxKind::Identifier,
            SyntaxKind::EqualsToken,
            SyntaxKind::NumericLiteral,
            SyntaxKind::SemicolonToken,
        ]
    );
}

#[test]
fn test_token_positions() {
    let mut scanner = Scanner::new("  foo  bar");
    scanner.scan();
    assert_eq!(scanner.token_start(), 2);
    assert_eq!(scanner.token_end(), 5);
    scanner.scan();
    assert_eq!(scanner.token_start(), 7);
    assert_eq!(scanner.token_end(), 10);
}

#[test]
fn test_positions_are_char_offsets() {
    let mut scanner = Scanner::new("'é' x");
    scanner.scan();
    assert_eq!(scanner.token_end(), 3);
    scanner.scan();
    assert_eq!(scanner.token_start(), 4);
}

#[test]
fn test_stream_line_of() {
    let stream = TokenStream::new("a\nb\r\nc", StringInterner::new());
    assert_eq!(stream.line_of(0), 0);
    assert_eq!(stream.line_of(2), 1);
    assert_eq!(stream.line_of(5), 2);
}

#[test]
fn test_stream_skip_to_end() {
    let mut stream = TokenStream::new("a b c", StringInterner::new());
    stream.next();
    stream.skip_to_end();
    assert_eq!(stream.peek_kind(0), SyntaxKind::EndOfFileToken);
}

#[test]
fn test_stream_cursor_after_node() {
    let mut stream = TokenStream::new("f (x) => 1", StringInterner::new());
    let f = stream.next();
    stream.next();
    stream.next();
    stream.set_position(stream.cursor_after(f.end));
    assert_eq!(stream.peek_kind(0), SyntaxKind::OpenParenToken);
}
