//! The ECMAScript scanner.
//!
//! Converts source text into tokens one at a time. The scanner is lexically
//! context sensitive in two places, `/` and `}`, so the token stream asks for
//! a rescan as a regular expression or template continuation when the
//! grammar calls for one.

use crate::char_codes::*;
use crate::token::{Comment, CommentKind, ScanError, TokenInfo};
use esparse_ast::syntax_kind::SyntaxKind;
use esparse_ast::types::TokenFlags;
use esparse_core::text::TextRange;

/// The scanner converts ECMAScript source text into tokens.
pub struct Scanner {
    /// The source text being scanned.
    text: Vec<char>,
    /// Current position in the text.
    pos: usize,
    /// Start of the current token (after leading trivia).
    token_start: usize,
    /// The current token kind.
    token: SyntaxKind,
    /// Source text of the current token, raw portion for templates.
    token_text: String,
    /// Cooked value of the current token.
    token_value: String,
    /// Token flags for the current token.
    token_flags: TokenFlags,
    /// First lexical error found in the current token or its leading trivia.
    token_error: Option<ScanError>,
    /// Comments skipped since the last `take_comments`.
    comments: Vec<Comment>,
}

impl Scanner {
    /// Create a new scanner for the given source text.
    pub fn new(text: &str) -> Self {
        let mut scanner = Self {
            text: text.chars().collect(),
            pos: 0,
            token_start: 0,
            token: SyntaxKind::Unknown,
            token_text: String::new(),
            token_value: String::new(),
            token_flags: TokenFlags::NONE,
            token_error: None,
            comments: Vec::new(),
        };
        scanner.skip_shebang();
        scanner
    }

    /// Skip a shebang line at the very beginning of the file (e.g., `#!/usr/bin/env node`).
    fn skip_shebang(&mut self) {
        if self.pos == 0 && self.text.len() >= 2 && self.text[0] == '#' && self.text[1] == '!' {
            self.pos = 2;
            while !self.is_eof() && !is_line_break(self.text[self.pos]) {
                self.pos += 1;
            }
        }
    }

    /// Get the full source text length.
    pub fn text_len(&self) -> usize {
        self.text.len()
    }

    pub fn text(&self) -> &[char] {
        &self.text
    }

    /// Get the current token kind.
    #[inline]
    pub fn token(&self) -> SyntaxKind {
        self.token
    }

    /// Get the current token's cooked value.
    #[inline]
    pub fn token_value(&self) -> &str {
        &self.token_value
    }

    /// Get the current token's source text.
    #[inline]
    pub fn token_text(&self) -> &str {
        &self.token_text
    }

    /// Get the start position of the current token (after trivia).
    #[inline]
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    /// Get the current position (end of current token).
    #[inline]
    pub fn token_end(&self) -> usize {
        self.pos
    }

    /// Get the current token flags.
    #[inline]
    pub fn token_flags(&self) -> TokenFlags {
        self.token_flags
    }

    #[inline]
    pub fn token_error(&self) -> Option<ScanError> {
        self.token_error
    }

    /// Whether the current token was preceded by a line break.
    #[inline]
    pub fn has_preceding_line_break(&self) -> bool {
        self.token_flags.contains(TokenFlags::PRECEDING_LINE_BREAK)
    }

    /// Get a TokenInfo for the current token.
    pub fn token_info(&self) -> TokenInfo {
        TokenInfo {
            kind: self.token,
            pos: self.token_start as u32,
            end: self.pos as u32,
            text: self.token_text.clone(),
            value: self.token_value.clone(),
            flags: self.token_flags,
            atom: None,
            error: self.token_error,
        }
    }

    /// Take the comments skipped so far.
    pub fn take_comments(&mut self) -> Vec<Comment> {
        std::mem::take(&mut self.comments)
    }

    /// Reset the scanner to a specific position.
    pub fn set_pos(&mut self, pos: usize) {
        self.pos = pos.min(self.text.len());
        self.token_start = self.pos;
        self.token = SyntaxKind::Unknown;
        self.token_text.clear();
        self.token_value.clear();
        self.token_flags = TokenFlags::NONE;
        self.token_error = None;
        if self.pos == 0 {
            self.skip_shebang();
        }
    }

    // ========================================================================
    // Core scanning
    // ========================================================================

    /// Look at the character at the current position without advancing.
    #[inline]
    fn current_char(&self) -> Option<char> {
        self.text.get(self.pos).copied()
    }

    /// Look at the character at position pos + offset.
    #[inline]
    fn char_at(&self, offset: usize) -> Option<char> {
        self.text.get(self.pos + offset).copied()
    }

    /// Whether we've reached the end of the text.
    #[inline]
    fn is_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Record a lexical error; the first one per token wins.
    fn error(&mut self, error: ScanError) {
        if self.token_error.is_none() {
            self.token_error = Some(error);
        }
    }

    /// Skip whitespace and comments (trivia), setting token_flags for line breaks.
    fn skip_trivia(&mut self) {
        loop {
            if self.is_eof() {
                return;
            }
            let ch = self.text[self.pos];
            match ch {
                '\r' => {
                    self.token_flags |= TokenFlags::PRECEDING_LINE_BREAK;
                    self.pos += 1;
                    if self.current_char() == Some('\n') {
                        self.pos += 1;
                    }
                }
                '\n' | LINE_SEPARATOR | PARAGRAPH_SEPARATOR => {
                    self.token_flags |= TokenFlags::PRECEDING_LINE_BREAK;
                    self.pos += 1;
                }
                '/' => match self.char_at(1) {
                    Some('/') => self.skip_line_comment(),
                    Some('*') => self.skip_block_comment(),
                    _ => return,
                },
                c if is_white_space_single_line(c) => {
                    self.pos += 1;
                }
                _ => return,
            }
        }
    }

    fn skip_line_comment(&mut self) {
        let start = self.pos;
        self.pos += 2;
        while !self.is_eof() && !is_line_break(self.text[self.pos]) {
            self.pos += 1;
        }
        let text = self.chars_to_string(start, self.pos);
        self.comments.push(Comment {
            kind: CommentKind::Line,
            text: text.trim_end().to_string(),
            range: TextRange::new(start as u32, self.pos as u32),
            unterminated: false,
        });
    }

    fn skip_block_comment(&mut self) {
        let start = self.pos;
        self.pos += 2;
        let mut unterminated = true;
        while !self.is_eof() {
            let ch = self.text[self.pos];
            if ch == '*' && self.char_at(1) == Some('/') {
                self.pos += 2;
                unterminated = false;
                break;
            }
            if is_line_break(ch) {
                self.token_flags |= TokenFlags::PRECEDING_LINE_BREAK;
            }
            self.pos += 1;
        }
        if unterminated {
            self.error(ScanError::UnterminatedComment);
        }
        self.comments.push(Comment {
            kind: CommentKind::Block,
            text: self.chars_to_string(start, self.pos),
            range: TextRange::new(start as u32, self.pos as u32),
            unterminated,
        });
    }

    /// Scan the next token and return its kind.
    pub fn scan(&mut self) -> SyntaxKind {
        self.token_flags = TokenFlags::NONE;
        self.token_text.clear();
        self.token_value.clear();
        self.token_error = None;

        // Skip trivia (whitespace, comments)
        self.skip_trivia();
        self.token_start = self.pos;

        if self.is_eof() {
            self.token = SyntaxKind::EndOfFileToken;
            return self.token;
        }

        let ch = self.text[self.pos];
        self.token = match ch {
            '(' => { self.pos += 1; SyntaxKind::OpenParenToken }
            ')' => { self.pos += 1; SyntaxKind::CloseParenToken }
            '{' => { self.pos += 1; SyntaxKind::OpenBraceToken }
            '}' => { self.pos += 1; SyntaxKind::CloseBraceToken }
            '[' => { self.pos += 1; SyntaxKind::OpenBracketToken }
            ']' => { self.pos += 1; SyntaxKind::CloseBracketToken }
            ';' => { self.pos += 1; SyntaxKind::SemicolonToken }
            ',' => { self.pos += 1; SyntaxKind::CommaToken }
            '~' => { self.pos += 1; SyntaxKind::TildeToken }
            ':' => { self.pos += 1; SyntaxKind::ColonToken }

            '.' => self.scan_dot(),
            '?' => self.scan_question(),
            '<' => self.scan_less_than(),
            '>' => self.scan_greater_than(),
            '=' => self.scan_equals(),
            '!' => self.scan_exclamation(),
            '+' => self.scan_plus(),
            '-' => self.scan_minus(),
            '*' => self.scan_asterisk(),
            '/' => self.scan_slash(),
            '%' => self.scan_percent(),
            '&' => self.scan_ampersand(),
            '|' => self.scan_bar(),
            '^' => self.scan_caret(),

            '\'' | '"' => self.scan_string_literal(ch),
            '`' => self.scan_template_literal(),

            '0'..='9' => self.scan_number(),

            '\\' if self.char_at(1) == Some('u') => self.scan_identifier(),
            _ if is_identifier_start(ch) => self.scan_identifier(),

            _ => {
                self.pos += 1;
                self.error(ScanError::InvalidCharacter);
                SyntaxKind::Unknown
            }
        };

        if !self.token.is_template() {
            self.token_text = self.chars_to_string(self.token_start, self.pos);
        }
        self.token
    }

    // ========================================================================
    // Punctuation
    // ========================================================================

    fn scan_dot(&mut self) -> SyntaxKind {
        if self.char_at(1) == Some('.') && self.char_at(2) == Some('.') {
            self.pos += 3;
            SyntaxKind::DotDotDotToken
        } else if self.char_at(1).map_or(false, is_digit) {
            self.scan_number()
        } else {
            self.pos += 1;
            SyntaxKind::DotToken
        }
    }

    fn scan_question(&mut self) -> SyntaxKind {
        if self.char_at(1) == Some('?') {
            if self.char_at(2) == Some('=') {
                self.pos += 3;
                SyntaxKind::QuestionQuestionEqualsToken
            } else {
                self.pos += 2;
                SyntaxKind::QuestionQuestionToken
            }
        } else if self.char_at(1) == Some('.') && !self.char_at(2).map_or(false, is_digit) {
            // `a?.5:b` is a conditional, not an optional chain
            self.pos += 2;
            SyntaxKind::QuestionDotToken
        } else {
            self.pos += 1;
            SyntaxKind::QuestionToken
        }
    }

    fn scan_less_than(&mut self) -> SyntaxKind {
        if self.char_at(1) == Some('<') {
            if self.char_at(2) == Some('=') {
                self.pos += 3;
                SyntaxKind::LessThanLessThanEqualsToken
            } else {
                self.pos += 2;
                SyntaxKind::LessThanLessThanToken
            }
        } else if self.char_at(1) == Some('=') {
            self.pos += 2;
            SyntaxKind::LessThanEqualsToken
        } else {
            self.pos += 1;
            SyntaxKind::LessThanToken
        }
    }

    fn scan_greater_than(&mut self) -> SyntaxKind {
        match (self.char_at(1), self.char_at(2), self.char_at(3)) {
            (Some('>'), Some('>'), Some('=')) => {
                self.pos += 4;
                SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken
            }
            (Some('>'), Some('>'), _) => {
                self.pos += 3;
                SyntaxKind::GreaterThanGreaterThanGreaterThanToken
            }
            (Some('>'), Some('='), _) => {
                self.pos += 3;
                SyntaxKind::GreaterThanGreaterThanEqualsToken
            }
            (Some('>'), _, _) => {
                self.pos += 2;
                SyntaxKind::GreaterThanGreaterThanToken
            }
            (Some('='), _, _) => {
                self.pos += 2;
                SyntaxKind::GreaterThanEqualsToken
            }
            _ => {
                self.pos += 1;
                SyntaxKind::GreaterThanToken
            }
        }
    }

    fn scan_equals(&mut self) -> SyntaxKind {
        if self.char_at(1) == Some('=') {
            if self.char_at(2) == Some('=') {
                self.pos += 3;
                SyntaxKind::EqualsEqualsEqualsToken
            } else {
                self.pos += 2;
                SyntaxKind::EqualsEqualsToken
            }
        } else if self.char_at(1) == Some('>') {
            self.pos += 2;
            SyntaxKind::EqualsGreaterThanToken
        } else {
            self.pos += 1;
            SyntaxKind::EqualsToken
        }
    }

    fn scan_exclamation(&mut self) -> SyntaxKind {
        if self.char_at(1) == Some('=') {
            if self.char_at(2) == Some('=') {
                self.pos += 3;
                SyntaxKind::ExclamationEqualsEqualsToken
            } else {
                self.pos += 2;
                SyntaxKind::ExclamationEqualsToken
            }
        } else {
            self.pos += 1;
            SyntaxKind::ExclamationToken
        }
    }

    fn scan_plus(&mut self) -> SyntaxKind {
        if self.char_at(1) == Some('+') {
            self.pos += 2;
            SyntaxKind::PlusPlusToken
        } else if self.char_at(1) == Some('=') {
            self.pos += 2;
            SyntaxKind::PlusEqualsToken
        } else {
            self.pos += 1;
            SyntaxKind::PlusToken
        }
    }

    fn scan_minus(&mut self) -> SyntaxKind {
        if self.char_at(1) == Some('-') {
            self.pos += 2;
            SyntaxKind::MinusMinusToken
        } else if self.char_at(1) == Some('=') {
            self.pos += 2;
            SyntaxKind::MinusEqualsToken
        } else {
            self.pos += 1;
            SyntaxKind::MinusToken
        }
    }

    fn scan_asterisk(&mut self) -> SyntaxKind {
        if self.char_at(1) == Some('*') {
            if self.char_at(2) == Some('=') {
                self.pos += 3;
                SyntaxKind::AsteriskAsteriskEqualsToken
            } else {
                self.pos += 2;
                SyntaxKind::AsteriskAsteriskToken
            }
        } else if self.char_at(1) == Some('=') {
            self.pos += 2;
            SyntaxKind::AsteriskEqualsToken
        } else {
            self.pos += 1;
            SyntaxKind::AsteriskToken
        }
    }

    fn scan_slash(&mut self) -> SyntaxKind {
        // Comments are handled in skip_trivia, so if we get here it's division or regex
        if self.char_at(1) == Some('=') {
            self.pos += 2;
            SyntaxKind::SlashEqualsToken
        } else {
            self.pos += 1;
            SyntaxKind::SlashToken
        }
    }

    fn scan_percent(&mut self) -> SyntaxKind {
        if self.char_at(1) == Some('=') {
            self.pos += 2;
            SyntaxKind::PercentEqualsToken
        } else {
            self.pos += 1;
            SyntaxKind::PercentToken
        }
    }

    fn scan_ampersand(&mut self) -> SyntaxKind {
        if self.char_at(1) == Some('&') {
            if self.char_at(2) == Some('=') {
                self.pos += 3;
                SyntaxKind::AmpersandAmpersandEqualsToken
            } else {
                self.pos += 2;
                SyntaxKind::AmpersandAmpersandToken
            }
        } else if self.char_at(1) == Some('=') {
            self.pos += 2;
            SyntaxKind::AmpersandEqualsToken
        } else {
            self.pos += 1;
            SyntaxKind::AmpersandToken
        }
    }

    fn scan_bar(&mut self) -> SyntaxKind {
        if self.char_at(1) == Some('|') {
            if self.char_at(2) == Some('=') {
                self.pos += 3;
                SyntaxKind::BarBarEqualsToken
            } else {
                self.pos += 2;
                SyntaxKind::BarBarToken
            }
        } else if self.char_at(1) == Some('=') {
            self.pos += 2;
            SyntaxKind::BarEqualsToken
        } else {
            self.pos += 1;
            SyntaxKind::BarToken
        }
    }

    fn scan_caret(&mut self) -> SyntaxKind {
        if self.char_at(1) == Some('=') {
            self.pos += 2;
            SyntaxKind::CaretEqualsToken
        } else {
            self.pos += 1;
            SyntaxKind::CaretToken
        }
    }

    // ========================================================================
    // Strings and templates
    // ========================================================================

    fn scan_string_literal(&mut self, quote: char) -> SyntaxKind {
        self.pos += 1; // skip opening quote
        let mut result = String::new();
        loop {
            let Some(ch) = self.current_char() else {
                self.error(ScanError::UnterminatedString);
                self.token_flags |= TokenFlags::UNTERMINATED;
                break;
            };
            if ch == quote {
                self.pos += 1;
                break;
            }
            if ch == '\\' {
                self.scan_escape_sequence(&mut result, false);
                continue;
            }
            if ch == '\n' || ch == '\r' {
                self.error(ScanError::UnterminatedString);
                self.token_flags |= TokenFlags::UNTERMINATED;
                break;
            }
            if ch == LINE_SEPARATOR || ch == PARAGRAPH_SEPARATOR {
                self.token_flags |= TokenFlags::UNESCAPED_LINE_SEPARATOR;
            }
            result.push(ch);
            self.pos += 1;
        }
        self.token_value = result;
        SyntaxKind::StringLiteral
    }

    /// Decode the escape sequence starting at the backslash under the
    /// cursor into `out`. Returns false if the escape is malformed.
    fn scan_escape_sequence(&mut self, out: &mut String, in_template: bool) -> bool {
        self.pos += 1; // skip backslash
        let Some(ch) = self.current_char() else {
            return true;
        };
        self.pos += 1;
        match ch {
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            'b' => out.push('\u{0008}'),
            'f' => out.push('\u{000C}'),
            'v' => out.push('\u{000B}'),
            '0' if !self.current_char().map_or(false, is_digit) => out.push('\0'),
            '0'..='7' => {
                if in_template {
                    self.error(ScanError::OctalEscapeInTemplate);
                    return false;
                }
                self.token_flags |= TokenFlags::OCTAL;
                // Legacy octal escapes stop at \377.
                let max_digits = if ch <= '3' { 3 } else { 2 };
                let mut value = ch as u32 - '0' as u32;
                let mut digits = 1;
                while digits < max_digits {
                    match self.current_char() {
                        Some(c) if is_octal_digit(c) => {
                            value = value * 8 + (c as u32 - '0' as u32);
                            self.pos += 1;
                            digits += 1;
                        }
                        _ => break,
                    }
                }
                out.push(char::from_u32(value).unwrap_or('\u{FFFD}'));
            }
            '8' | '9' => {
                if in_template {
                    self.error(ScanError::InvalidEscape);
                    return false;
                }
                out.push(ch);
            }
            'x' => match self.scan_exact_hex(2) {
                Some(value) => out.push(char::from_u32(value).unwrap_or('\u{FFFD}')),
                None => {
                    self.error(ScanError::HexDigitExpected);
                    return false;
                }
            },
            'u' => match self.scan_unicode_escape_body() {
                Some(c) => out.push(c),
                None => {
                    self.error(ScanError::InvalidUnicodeEscape);
                    return false;
                }
            },
            // Line continuations contribute nothing to the value.
            '\r' => {
                if self.current_char() == Some('\n') {
                    self.pos += 1;
                }
            }
            '\n' | LINE_SEPARATOR | PARAGRAPH_SEPARATOR => {}
            other => out.push(other),
        }
        true
    }

    /// Scan exactly `count` hex digits.
    fn scan_exact_hex(&mut self, count: usize) -> Option<u32> {
        let mut value = 0u32;
        for _ in 0..count {
            let digit = self.current_char().and_then(|c| c.to_digit(16))?;
            value = value * 16 + digit;
            self.pos += 1;
        }
        Some(value)
    }

    /// Scan the part of a `\u` escape after the `u`: four hex digits or a
    /// braced code point. Lone surrogates decode to U+FFFD.
    fn scan_unicode_escape_body(&mut self) -> Option<char> {
        if self.current_char() == Some('{') {
            self.pos += 1;
            self.token_flags |= TokenFlags::EXTENDED_UNICODE_ESCAPE;
            let mut value = 0u32;
            let mut digits = 0;
            while let Some(digit) = self.current_char().and_then(|c| c.to_digit(16)) {
                value = value.saturating_mul(16).saturating_add(digit);
                digits += 1;
                self.pos += 1;
            }
            if digits == 0 || value > 0x10FFFF || self.current_char() != Some('}') {
                return None;
            }
            self.pos += 1;
            return Some(char::from_u32(value).unwrap_or('\u{FFFD}'));
        }
        let value = self.scan_exact_hex(4)?;
        Some(char::from_u32(value).unwrap_or('\u{FFFD}'))
    }

    fn scan_template_literal(&mut self) -> SyntaxKind {
        self.pos += 1; // skip backtick
        self.scan_template_portion(true)
    }

    /// Scan a template middle or tail. The current token must be the `}`
    /// closing a substitution.
    pub fn rescan_template_token(&mut self) -> SyntaxKind {
        if self.token != SyntaxKind::CloseBraceToken {
            return self.token;
        }
        self.pos = self.token_start + 1;
        self.token_flags &= TokenFlags::PRECEDING_LINE_BREAK;
        self.token_value.clear();
        self.token_error = None;
        self.token = self.scan_template_portion(false);
        self.token
    }

    /// Scan template characters up to and including the next `` ` `` or `${`.
    fn scan_template_portion(&mut self, is_head: bool) -> SyntaxKind {
        let mut raw = String::new();
        let mut cooked = String::new();
        let mut valid = true;
        let kind = loop {
            let Some(ch) = self.current_char() else {
                self.token_error = Some(ScanError::UnterminatedTemplate);
                self.token_flags |= TokenFlags::UNTERMINATED;
                break if is_head {
                    SyntaxKind::NoSubstitutionTemplateLiteral
                } else {
                    SyntaxKind::TemplateTail
                };
            };
            if ch == '`' {
                self.pos += 1;
                break if is_head {
                    SyntaxKind::NoSubstitutionTemplateLiteral
                } else {
                    SyntaxKind::TemplateTail
                };
            }
            if ch == '$' && self.char_at(1) == Some('{') {
                self.pos += 2;
                break if is_head {
                    SyntaxKind::TemplateHead
                } else {
                    SyntaxKind::TemplateMiddle
                };
            }
            if ch == '\\' {
                let escape_start = self.pos;
                if !self.scan_escape_sequence(&mut cooked, true) {
                    valid = false;
                }
                push_normalized(&mut raw, &self.text[escape_start..self.pos]);
                continue;
            }
            if ch == '\r' {
                self.pos += 1;
                if self.current_char() == Some('\n') {
                    self.pos += 1;
                }
                raw.push('\n');
                cooked.push('\n');
                continue;
            }
            raw.push(ch);
            cooked.push(ch);
            self.pos += 1;
        };
        if !valid {
            self.token_flags |= TokenFlags::CONTAINS_INVALID_ESCAPE;
            cooked.clear();
        }
        self.token_text = raw;
        self.token_value = cooked;
        kind
    }

    // ========================================================================
    // Regular expressions
    // ========================================================================

    /// Rescan the current `/` or `/=` token as a regex literal.
    pub fn rescan_slash_token(&mut self) -> SyntaxKind {
        if !matches!(self.token, SyntaxKind::SlashToken | SyntaxKind::SlashEqualsToken) {
            return self.token;
        }
        self.pos = self.token_start + 1; // after the /
        let mut in_character_class = false;

        loop {
            let Some(ch) = self.current_char() else {
                self.error(ScanError::UnterminatedRegex);
                self.token_flags |= TokenFlags::UNTERMINATED;
                break;
            };
            if is_line_break(ch) {
                self.error(ScanError::UnterminatedRegex);
                self.token_flags |= TokenFlags::UNTERMINATED;
                break;
            }
            self.pos += 1;
            match ch {
                '\\' => {
                    if self.current_char().map_or(false, |c| !is_line_break(c)) {
                        self.pos += 1;
                    }
                }
                '[' => in_character_class = true,
                ']' => in_character_class = false,
                '/' if !in_character_class => {
                    // Flags
                    while self.current_char().map_or(false, is_identifier_part) {
                        self.pos += 1;
                    }
                    break;
                }
                _ => {}
            }
        }

        self.token_text = self.chars_to_string(self.token_start, self.pos);
        self.token_value.clear();
        self.token = SyntaxKind::RegularExpressionLiteral;
        self.token
    }

    // ========================================================================
    // Numbers
    // ========================================================================

    fn scan_number(&mut self) -> SyntaxKind {
        let first_char = self.text[self.pos];

        if first_char == '0' {
            match self.char_at(1) {
                Some('x') | Some('X') => {
                    return self.scan_radix_number(
                        is_hex_digit,
                        TokenFlags::HEX_SPECIFIER,
                        ScanError::HexDigitExpected,
                    )
                }
                Some('b') | Some('B') => {
                    return self.scan_radix_number(
                        is_binary_digit,
                        TokenFlags::BINARY_SPECIFIER,
                        ScanError::BinaryDigitExpected,
                    )
                }
                Some('o') | Some('O') => {
                    return self.scan_radix_number(
                        is_octal_digit,
                        TokenFlags::OCTAL_SPECIFIER,
                        ScanError::OctalDigitExpected,
                    )
                }
                Some(c) if is_digit(c) => {
                    // Legacy `017` octal, or a decimal such as `089`.
                    let start = self.pos;
                    self.scan_digits(is_digit);
                    if self.text[start..self.pos].iter().all(|&c| is_octal_digit(c)) {
                        self.token_flags |= TokenFlags::OCTAL;
                        self.check_identifier_after_number();
                        return SyntaxKind::NumericLiteral;
                    }
                    return self.scan_decimal_rest(false);
                }
                _ => {}
            }
        }

        if first_char != '.' {
            self.scan_digits(is_digit);
        }
        self.scan_decimal_rest(true)
    }

    /// Scan the fraction, exponent and bigint suffix of a decimal literal
    /// whose integer part has been consumed.
    fn scan_decimal_rest(&mut self, bigint_allowed: bool) -> SyntaxKind {
        let mut is_integer = true;
        if self.current_char() == Some('.') {
            is_integer = false;
            self.pos += 1;
            if self.current_char() == Some('_') {
                self.error(ScanError::InvalidSeparator);
            }
            self.scan_digits(is_digit);
        }

        // Exponent
        if let Some('e') | Some('E') = self.current_char() {
            is_integer = false;
            self.pos += 1;
            self.token_flags |= TokenFlags::SCIENTIFIC;
            if let Some('+') | Some('-') = self.current_char() {
                self.pos += 1;
            }
            if self.scan_digits(is_digit) == 0 {
                self.error(ScanError::DigitExpected);
            }
        }

        // BigInt suffix
        if is_integer && bigint_allowed && self.current_char() == Some('n') {
            self.pos += 1;
            self.check_identifier_after_number();
            return SyntaxKind::BigIntLiteral;
        }

        self.check_identifier_after_number();
        SyntaxKind::NumericLiteral
    }

    fn scan_radix_number(
        &mut self,
        is_valid: fn(char) -> bool,
        flag: TokenFlags,
        missing: ScanError,
    ) -> SyntaxKind {
        self.pos += 2; // skip 0x / 0b / 0o
        self.token_flags |= flag;
        if self.scan_digits(is_valid) == 0 {
            self.error(missing);
        }
        if self.current_char() == Some('n') {
            self.pos += 1;
            self.check_identifier_after_number();
            return SyntaxKind::BigIntLiteral;
        }
        self.check_identifier_after_number();
        SyntaxKind::NumericLiteral
    }

    /// Scan a run of digits with `_` separators. Returns the digit count.
    fn scan_digits(&mut self, is_valid: fn(char) -> bool) -> usize {
        let mut count = 0;
        let mut after_separator = false;
        loop {
            match self.current_char() {
                Some('_') => {
                    self.token_flags |= TokenFlags::CONTAINS_SEPARATOR;
                    if count == 0 || after_separator {
                        self.error(ScanError::InvalidSeparator);
                    }
                    after_separator = true;
                    self.pos += 1;
                }
                Some(c) if is_valid(c) => {
                    count += 1;
                    after_separator = false;
                    self.pos += 1;
                }
                _ => break,
            }
        }
        if after_separator {
            self.error(ScanError::InvalidSeparator);
        }
        count
    }

    /// `3in x` and `1abc` are errors; the identifier characters are folded
    /// into the numeric token.
    fn check_identifier_after_number(&mut self) {
        let starts_identifier = match self.current_char() {
            Some('\\') => true,
            Some(c) => is_identifier_start(c) || is_digit(c),
            None => false,
        };
        if !starts_identifier {
            return;
        }
        self.error(ScanError::IdentifierAfterNumber);
        while self
            .current_char()
            .map_or(false, |c| is_identifier_part(c) || c == '\\')
        {
            self.pos += 1;
        }
    }

    // ========================================================================
    // Identifiers
    // ========================================================================

    fn scan_identifier(&mut self) -> SyntaxKind {
        let start = self.pos;
        let mut name = String::new();
        let mut escaped = false;
        while let Some(ch) = self.current_char() {
            if ch == '\\' {
                if self.char_at(1) != Some('u') {
                    break;
                }
                self.pos += 2;
                escaped = true;
                self.token_flags |= TokenFlags::UNICODE_ESCAPE;
                match self.scan_unicode_escape_body() {
                    Some(c) if name.is_empty() && is_identifier_start(c) => name.push(c),
                    Some(c) if !name.is_empty() && is_identifier_part(c) => name.push(c),
                    _ => self.error(ScanError::InvalidUnicodeEscape),
                }
                continue;
            }
            let accepted = if self.pos == start {
                is_identifier_start(ch)
            } else {
                is_identifier_part(ch)
            };
            if !accepted {
                break;
            }
            name.push(ch);
            self.pos += 1;
        }
        let kind = if escaped {
            SyntaxKind::Identifier
        } else {
            SyntaxKind::from_keyword(&name).unwrap_or(SyntaxKind::Identifier)
        };
        self.token_value = name;
        kind
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn chars_to_string(&self, start: usize, end: usize) -> String {
        self.text[start..end].iter().collect()
    }
}

/// Append template source characters with `\r\n` and `\r` normalized to `\n`.
fn push_normalized(out: &mut String, chars: &[char]) {
    let mut iter = chars.iter().peekable();
    while let Some(&c) = iter.next() {
        if c == '\r' {
            if iter.peek() == Some(&&'\n') {
                iter.next();
            }
            out.push('\n');
        } else {
            out.push(c);
        }
    }
}

/// Check if a character can start an identifier.
pub fn is_identifier_start(ch: char) -> bool {
    ch == '$' || ch == '_' || ch.is_ascii_alphabetic() || (!ch.is_ascii() && unicode_xid::UnicodeXID::is_xid_start(ch))
}

/// Check if a character can be part of an identifier.
pub fn is_identifier_part(ch: char) -> bool {
    ch == '$'
        || ch == '_'
        || ch.is_ascii_alphanumeric()
        || ch == '\u{200C}'
        || ch == '\u{200D}'
        || (!ch.is_ascii() && unicode_xid::UnicodeXID::is_xid_continue(ch))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greater_than_family() {
        let mut scanner = Scanner::new("> >= >> >>= >>> >>>=");
        assert_eq!(scanner.scan(), SyntaxKind::GreaterThanToken);
        assert_eq!(scanner.scan(), SyntaxKind::GreaterThanEqualsToken);
        assert_eq!(scanner.scan(), SyntaxKind::GreaterThanGreaterThanToken);
        assert_eq!(scanner.scan(), SyntaxKind::GreaterThanGreaterThanEqualsToken);
        assert_eq!(scanner.scan(), SyntaxKind::GreaterThanGreaterThanGreaterThanToken);
        assert_eq!(
            scanner.scan(),
            SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken
        );
        assert_eq!(scanner.scan(), SyntaxKind::EndOfFileToken);
    }

    #[test]
    fn test_string_escapes_are_cooked() {
        let mut scanner = Scanner::new(r#"'a\nb\x41B\u{43}\101'"#);
        assert_eq!(scanner.scan(), SyntaxKind::StringLiteral);
        assert_eq!(scanner.token_value(), "a\nbABCA");
        assert!(scanner.token_flags().contains(TokenFlags::OCTAL));
        assert!(scanner.token_error().is_none());
    }

    #[test]
    fn test_bad_hex_escape() {
        let mut scanner = Scanner::new(r#""\xZZ""#);
        assert_eq!(scanner.scan(), SyntaxKind::StringLiteral);
        assert_eq!(scanner.token_error(), Some(ScanError::HexDigitExpected));
    }

    #[test]
    fn test_line_separator_in_string() {
        let mut scanner = Scanner::new("'a\u{2028}b'");
        assert_eq!(scanner.scan(), SyntaxKind::StringLiteral);
        assert!(scanner
            .token_flags()
            .contains(TokenFlags::UNESCAPED_LINE_SEPARATOR));
        assert_eq!(scanner.token_value(), "a\u{2028}b");
    }

    #[test]
    fn test_rescan_slash() {
        let mut scanner = Scanner::new("/[/]+/gi.x");
        assert_eq!(scanner.scan(), SyntaxKind::SlashToken);
        assert_eq!(scanner.rescan_slash_token(), SyntaxKind::RegularExpressionLiteral);
        assert_eq!(scanner.token_text(), "/[/]+/gi");
        assert_eq!(scanner.scan(), SyntaxKind::DotToken);
    }

    #[test]
    fn test_template_continuation() {
        let mut scanner = Scanner::new("`a${x}b${y}c`");
        assert_eq!(scanner.scan(), SyntaxKind::TemplateHead);
        assert_eq!(scanner.token_text(), "a");
        assert_eq!(scanner.scan(), SyntaxKind::Identifier);
        assert_eq!(scanner.scan(), SyntaxKind::CloseBraceToken);
        assert_eq!(scanner.rescan_template_token(), SyntaxKind::TemplateMiddle);
        assert_eq!(scanner.token_value(), "b");
        assert_eq!(scanner.scan(), SyntaxKind::Identifier);
        assert_eq!(scanner.scan(), SyntaxKind::CloseBraceToken);
        assert_eq!(scanner.rescan_template_token(), SyntaxKind::TemplateTail);
        assert_eq!(scanner.token_value(), "c");
    }

    #[test]
    fn test_template_invalid_escape_clears_cooked() {
        let mut scanner = Scanner::new(r"`\unicode`");
        assert_eq!(scanner.scan(), SyntaxKind::NoSubstitutionTemplateLiteral);
        assert!(scanner
            .token_flags()
            .contains(TokenFlags::CONTAINS_INVALID_ESCAPE));
        assert_eq!(scanner.token_text(), r"\unicode");
        assert_eq!(scanner.token_value(), "");
        assert_eq!(scanner.token_error(), Some(ScanError::InvalidUnicodeEscape));
    }

    #[test]
    fn test_numeric_separators() {
        let mut scanner = Scanner::new("1_000 1__0 0x_1");
        assert_eq!(scanner.scan(), SyntaxKind::NumericLiteral);
        assert!(scanner.token_flags().contains(TokenFlags::CONTAINS_SEPARATOR));
        assert!(scanner.token_error().is_none());
        assert_eq!(scanner.scan(), SyntaxKind::NumericLiteral);
        assert_eq!(scanner.token_error(), Some(ScanError::InvalidSeparator));
        assert_eq!(scanner.scan(), SyntaxKind::NumericLiteral);
        assert_eq!(scanner.token_error(), Some(ScanError::InvalidSeparator));
    }

    #[test]
    fn test_comments_are_recorded() {
        let mut scanner = Scanner::new("// one  \n/* two */ x");
        assert_eq!(scanner.scan(), SyntaxKind::Identifier);
        assert!(scanner.has_preceding_line_break());
        let comments = scanner.take_comments();
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].text, "// one");
        assert_eq!(comments[0].kind, CommentKind::Line);
        assert_eq!(comments[1].text, "/* two */");
        assert_eq!(comments[1].range, TextRange::new(9, 18));
    }

    #[test]
    fn test_escaped_identifier() {
        let mut scanner = Scanner::new(r"\u0061b \u{69}f");
        assert_eq!(scanner.scan(), SyntaxKind::Identifier);
        assert_eq!(scanner.token_value(), "ab");
        // An escaped keyword is never the keyword.
        assert_eq!(scanner.scan(), SyntaxKind::Identifier);
        assert_eq!(scanner.token_value(), "if");
    }
}
