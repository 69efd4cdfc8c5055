//! Buffered token stream with unbounded lookahead and cursor rewind.
//!
//! The parser never talks to the [`Scanner`] directly. It peeks any number of
//! tokens ahead, consumes them one at a time, and may save a [`Cursor`] and
//! later restore it to re-parse a span under a different grammar rule.
//! Restoring a cursor drops the lookahead buffer and re-lexes from the end of
//! the last consumed token, so line-break flags stay accurate.

use crate::scanner::Scanner;
use crate::token::{Comment, ScanError, TokenInfo};
use esparse_ast::syntax_kind::SyntaxKind;
use esparse_core::intern::StringInterner;
use esparse_core::text::LineMap;
use std::collections::VecDeque;
use tracing::trace;

/// A saved stream position: the end offset of the last consumed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cursor(u32);

impl Cursor {
    pub fn offset(self) -> u32 {
        self.0
    }
}

pub struct TokenStream {
    scanner: Scanner,
    interner: StringInterner,
    line_map: LineMap,
    lookahead: VecDeque<TokenInfo>,
    last_end: u32,
    comments: Vec<Comment>,
    /// End of the furthest comment recorded so far.
    comment_watermark: Option<u32>,
}

impl TokenStream {
    pub fn new(source_text: &str, interner: StringInterner) -> Self {
        let scanner = Scanner::new(source_text);
        let line_map = LineMap::from_chars(scanner.text());
        Self {
            scanner,
            interner,
            line_map,
            lookahead: VecDeque::new(),
            last_end: 0,
            comments: Vec::new(),
            comment_watermark: None,
        }
    }

    pub fn line_map(&self) -> &LineMap {
        &self.line_map
    }

    /// Zero-based line of a source offset.
    pub fn line_of(&self, offset: u32) -> u32 {
        self.line_map.line_of(offset)
    }

    /// Total length of the source in characters.
    pub fn source_len(&self) -> u32 {
        self.scanner.text_len() as u32
    }

    /// The token `k` positions ahead. Past the end of input this keeps
    /// returning the end-of-file token.
    pub fn peek(&mut self, k: usize) -> &TokenInfo {
        self.fill(k);
        let index = k.min(self.lookahead.len() - 1);
        &self.lookahead[index]
    }

    #[inline]
    pub fn peek_kind(&mut self, k: usize) -> SyntaxKind {
        self.peek(k).kind
    }

    /// Consume and return the next token. End of file is never consumed.
    pub fn next(&mut self) -> TokenInfo {
        self.fill(0);
        let token = match self.lookahead.front() {
            Some(front) if front.kind == SyntaxKind::EndOfFileToken => front.clone(),
            _ => self.lookahead.pop_front().unwrap_or_else(|| {
                TokenInfo::new(SyntaxKind::EndOfFileToken, self.last_end, self.last_end)
            }),
        };
        self.last_end = token.end;
        token
    }

    /// Consume the next token, re-lexed as a regular expression literal.
    pub fn next_regex(&mut self) -> TokenInfo {
        self.reset_scanner();
        self.scanner.scan();
        self.scanner.rescan_slash_token();
        let token = self.finish_token();
        self.last_end = token.end;
        token
    }

    /// Consume the `}` ending a template substitution, re-lexed as the
    /// template middle or tail that follows it.
    ///
    /// If the next token is not `}`, nothing is consumed and an empty
    /// `Unknown` token carrying the error is returned.
    pub fn next_template_continuation(&mut self) -> TokenInfo {
        self.reset_scanner();
        let kind = self.scanner.scan();
        if kind != SyntaxKind::CloseBraceToken {
            let start = self.scanner.token_start() as u32;
            self.reset_scanner();
            let mut token = TokenInfo::new(SyntaxKind::Unknown, start, start);
            token.error = Some(ScanError::UnexpectedTemplateToken { found: kind });
            return token;
        }
        self.scanner.rescan_template_token();
        let token = self.finish_token();
        self.last_end = token.end;
        token
    }

    pub fn position(&self) -> Cursor {
        Cursor(self.last_end)
    }

    /// Rewind (or advance) to a saved cursor.
    pub fn set_position(&mut self, cursor: Cursor) {
        trace!(from = self.last_end, to = cursor.0, "token stream rewind");
        self.last_end = cursor.0;
        self.reset_scanner();
    }

    /// A cursor positioned right after a node that ends at `end`.
    pub fn cursor_after(&self, end: u32) -> Cursor {
        Cursor(end)
    }

    /// Jump to the end of input; every later peek is end of file.
    pub fn skip_to_end(&mut self) {
        self.last_end = self.source_len();
        self.reset_scanner();
    }

    /// Take the comments recorded so far, in source order.
    pub fn take_comments(&mut self) -> Vec<Comment> {
        std::mem::take(&mut self.comments)
    }

    fn reset_scanner(&mut self) {
        self.lookahead.clear();
        self.scanner.set_pos(self.last_end as usize);
    }

    fn fill(&mut self, k: usize) {
        while self.lookahead.len() <= k {
            if self
                .lookahead
                .back()
                .map_or(false, |t| t.kind == SyntaxKind::EndOfFileToken)
            {
                return;
            }
            self.scanner.scan();
            let token = self.finish_token();
            self.lookahead.push_back(token);
        }
    }

    /// Build the token the scanner just produced, interning identifier text
    /// and moving newly skipped comments into the comment list.
    fn finish_token(&mut self) -> TokenInfo {
        let mut token = self.scanner.token_info();
        if token.is_identifier_or_keyword() {
            token.atom = Some(self.interner.intern(&token.value));
        }
        for comment in self.scanner.take_comments() {
            // A rewind re-lexes comments that were already recorded.
            if self
                .comment_watermark
                .map_or(true, |end| comment.range.end > end)
            {
                self.comment_watermark = Some(comment.range.end);
                self.comments.push(comment);
            }
        }
        token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(text: &str) -> TokenStream {
        TokenStream::new(text, StringInterner::new())
    }

    #[test]
    fn test_peek_past_end_is_eof() {
        let mut s = stream("a");
        assert_eq!(s.peek_kind(0), SyntaxKind::Identifier);
        assert_eq!(s.peek_kind(5), SyntaxKind::EndOfFileToken);
        s.next();
        assert_eq!(s.next().kind, SyntaxKind::EndOfFileToken);
        assert_eq!(s.next().kind, SyntaxKind::EndOfFileToken);
    }

    #[test]
    fn test_rewind_relexes() {
        let mut s = stream("a\nb c");
        let start = s.position();
        assert_eq!(s.next().value, "a");
        let b = s.next();
        assert!(b.has_preceding_line_break());
        s.set_position(start);
        assert_eq!(s.next().value, "a");
        assert!(s.peek(0).has_preceding_line_break());
        assert_eq!(s.peek(1).value, "c");
    }

    #[test]
    fn test_comments_not_duplicated_by_rewind() {
        let mut s = stream("/* a */ x // b\ny");
        let start = s.position();
        s.peek(1);
        s.set_position(start);
        s.peek(2);
        let comments = s.take_comments();
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].text, "/* a */");
        assert_eq!(comments[1].text, "// b");
    }

    #[test]
    fn test_regex_mode() {
        let mut s = stream("x = /ab+/g;");
        s.next();
        s.next();
        assert_eq!(s.peek_kind(0), SyntaxKind::SlashToken);
        let regex = s.next_regex();
        assert_eq!(regex.kind, SyntaxKind::RegularExpressionLiteral);
        assert_eq!(regex.text, "/ab+/g");
        assert_eq!(s.next().kind, SyntaxKind::SemicolonToken);
    }

    #[test]
    fn test_template_continuation_requires_close_brace() {
        let mut s = stream("`a${x;");
        assert_eq!(s.next().kind, SyntaxKind::TemplateHead);
        s.next();
        let bad = s.next_template_continuation();
        assert_eq!(bad.kind, SyntaxKind::Unknown);
        assert!(bad.error.is_some());
        assert_eq!(s.peek_kind(0), SyntaxKind::SemicolonToken);
    }

    #[test]
    fn test_identifiers_are_interned() {
        let mut s = stream("foo foo");
        let a = s.next().atom;
        let b = s.next().atom;
        assert!(a.is_some());
        assert_eq!(a, b);
    }
}
