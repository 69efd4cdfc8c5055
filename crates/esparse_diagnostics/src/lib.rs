//! esparse_diagnostics: Diagnostic messages and error reporting infrastructure.
//!
//! Every message the scanner and parser can emit is declared once in
//! [`messages`]. Diagnostics are plain values collected into a
//! [`DiagnosticCollection`]; reporting one never interrupts a parse.

use esparse_core::text::{LineMap, TextSpan};
use std::fmt;

/// Diagnostic category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCategory {
    Warning,
    Error,
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticCategory::Warning => write!(f, "warning"),
            DiagnosticCategory::Error => write!(f, "error"),
        }
    }
}

/// A diagnostic message template with a code and category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosticMessage {
    /// The diagnostic code, rendered as `ES<code>`.
    pub code: u32,
    pub category: DiagnosticCategory,
    /// The message template string. May contain `{0}`, `{1}`, etc. placeholders.
    pub message: &'static str,
}

/// A realized diagnostic with location information and resolved message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub file: Option<String>,
    pub span: Option<TextSpan>,
    pub message_text: String,
    pub code: u32,
    pub category: DiagnosticCategory,
}

impl Diagnostic {
    /// Create a new diagnostic without location info.
    pub fn new(message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            file: None,
            span: None,
            message_text: format_message(message.message, args),
            code: message.code,
            category: message.category,
        }
    }

    /// Create a new diagnostic with file and span info.
    pub fn with_location(
        file: String,
        span: TextSpan,
        message: &DiagnosticMessage,
        args: &[&str],
    ) -> Self {
        Self {
            file: Some(file),
            span: Some(span),
            message_text: format_message(message.message, args),
            code: message.code,
            category: message.category,
        }
    }

    pub fn is_error(&self) -> bool {
        self.category == DiagnosticCategory::Error
    }

    pub fn is_warning(&self) -> bool {
        self.category == DiagnosticCategory::Warning
    }

    /// Render as `file(line,col): category ESxxxx: text` with 1-based line
    /// and column numbers taken from `line_map`.
    pub fn render(&self, line_map: &LineMap) -> String {
        let mut out = String::new();
        if let Some(ref file) = self.file {
            out.push_str(file);
            if let Some(span) = self.span {
                let lc = line_map.line_and_column_of(span.start);
                out.push_str(&format!("({},{})", lc.line + 1, lc.character + 1));
            }
            out.push_str(": ");
        }
        out.push_str(&format!(
            "{} ES{}: {}",
            self.category, self.code, self.message_text
        ));
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref file) = self.file {
            write!(f, "{}", file)?;
            if let Some(span) = self.span {
                write!(f, "({})", span.start)?;
            }
            write!(f, ": ")?;
        }
        write!(f, "{} ES{}: {}", self.category, self.code, self.message_text)
    }
}

/// Format a diagnostic message template by replacing `{0}`, `{1}`, etc. with arguments.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{}}}", i), arg);
    }
    result
}

/// Diagnostics accumulated during a parse.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticCollection {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_warning()).count()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_warning())
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Whether any diagnostic's text contains `needle`.
    pub fn contains_message(&self, needle: &str) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.message_text.contains(needle))
    }

    /// Sort diagnostics by file and position.
    pub fn sort(&mut self) {
        self.diagnostics.sort_by(|a, b| {
            let file_cmp = a.file.cmp(&b.file);
            if file_cmp != std::cmp::Ordering::Equal {
                return file_cmp;
            }
            let a_pos = a.span.map(|s| s.start).unwrap_or(0);
            let b_pos = b.span.map(|s| s.start).unwrap_or(0);
            a_pos.cmp(&b_pos)
        });
    }
}

// ============================================================================
// Diagnostic Messages
// ============================================================================

pub mod messages {
    use super::*;

    macro_rules! diag {
        ($code:expr, Error, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Error, message: $msg }
        };
        ($code:expr, Warning, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Warning, message: $msg }
        };
    }

    // ========================================================================
    // Scanner errors (1000-1099)
    // ========================================================================
    pub const UNTERMINATED_STRING_LITERAL: DiagnosticMessage = diag!(1002, Error, "Unterminated string literal.");
    pub const UNTERMINATED_TEMPLATE_LITERAL: DiagnosticMessage = diag!(1003, Error, "Unterminated template literal.");
    pub const UNTERMINATED_REGULAR_EXPRESSION: DiagnosticMessage = diag!(1004, Error, "Unterminated regular expression literal.");
    pub const UNTERMINATED_COMMENT: DiagnosticMessage = diag!(1005, Error, "'*/' expected.");
    pub const INVALID_CHARACTER: DiagnosticMessage = diag!(1006, Error, "Invalid character.");
    pub const INVALID_ESCAPE_SEQUENCE: DiagnosticMessage = diag!(1007, Error, "Invalid escape sequence.");
    pub const HEXADECIMAL_DIGIT_EXPECTED: DiagnosticMessage = diag!(1008, Error, "Hexadecimal digit expected.");
    pub const BINARY_DIGIT_EXPECTED: DiagnosticMessage = diag!(1009, Error, "Binary digit expected.");
    pub const OCTAL_DIGIT_EXPECTED: DiagnosticMessage = diag!(1010, Error, "Octal digit expected.");
    pub const DIGIT_EXPECTED: DiagnosticMessage = diag!(1011, Error, "Digit expected.");
    pub const IDENTIFIER_DIRECTLY_AFTER_NUMBER: DiagnosticMessage = diag!(1012, Error, "An identifier or keyword cannot immediately follow a numeric literal.");
    pub const INVALID_NUMERIC_SEPARATOR: DiagnosticMessage = diag!(1013, Error, "Numeric separators are not allowed here.");
    pub const INVALID_UNICODE_ESCAPE: DiagnosticMessage = diag!(1014, Error, "Invalid Unicode escape sequence.");
    pub const OCTAL_ESCAPE_IN_TEMPLATE: DiagnosticMessage = diag!(1015, Error, "Octal escape sequences are not allowed in template strings.");
    pub const UNEXPECTED_TEMPLATE_LITERAL_TOKEN: DiagnosticMessage = diag!(1016, Error, "Unexpected template literal token {0}.");

    // ========================================================================
    // Parser errors (1100-1199)
    // ========================================================================
    pub const _0_EXPECTED: DiagnosticMessage = diag!(1100, Error, "'{0}' expected");
    pub const SEMI_COLON_EXPECTED: DiagnosticMessage = diag!(1101, Error, "Semi-colon expected");
    pub const PRIMARY_EXPRESSION_EXPECTED: DiagnosticMessage = diag!(1102, Error, "primary expression expected");
    pub const INVALID_ASSIGNMENT_TARGET: DiagnosticMessage = diag!(1103, Error, "invalid assignment target");
    pub const INVALID_ARROW_FUNCTION_PARAMETERS: DiagnosticMessage = diag!(1104, Error, "invalid arrow function parameters");
    pub const INVALID_PARENTHESIZED_EXPRESSION: DiagnosticMessage = diag!(1105, Error, "invalid parenthesized expression");
    pub const ARROW_UNEXPECTED: DiagnosticMessage = diag!(1106, Error, "'=>' unexpected");
    pub const NO_NEWLINE_BEFORE_ARROW: DiagnosticMessage = diag!(1107, Error, "No newline allowed before '=>'");
    pub const NO_NEWLINE_AFTER_ASYNC: DiagnosticMessage = diag!(1108, Error, "No newline allowed between `async` and arrow function parameter list");
    pub const UNARY_OPERATOR_REQUIRES_PARENTHESES_BEFORE_EXPONENT: DiagnosticMessage = diag!(1109, Error, "Unary operator '{0}' requires parentheses before '**'");
    pub const NULLISH_MIXED_WITH_LOGICAL: DiagnosticMessage = diag!(1110, Error, "Logical OR and logical AND require parentheses when used with '??'");
    pub const OPTIONAL_CHAINING_FORBIDDEN_IN_SUPER: DiagnosticMessage = diag!(1111, Error, "Optional chaining is forbidden in super?.");
    pub const OPTIONAL_CHAINING_FORBIDDEN_IN_IMPORT: DiagnosticMessage = diag!(1112, Error, "Optional chaining is forbidden in import?.");
    pub const OPTIONAL_CHAINING_FORBIDDEN_IN_NEW_TARGET: DiagnosticMessage = diag!(1113, Error, "Optional chaining is forbidden in `new?.target` contexts.");
    pub const OPTIONAL_CHAINING_FORBIDDEN_IN_CONSTRUCTION: DiagnosticMessage = diag!(1114, Error, "Optional chaining is forbidden in construction contexts.");
    pub const TEMPLATE_LITERAL_IN_OPTIONAL_CHAIN: DiagnosticMessage = diag!(1115, Error, "template literal cannot be used within optional chaining");
    pub const NOT_ALLOWED_IN_OPTIONAL_CHAIN: DiagnosticMessage = diag!(1116, Error, "syntax error: {0} not allowed in optional chain");
    pub const YIELD_STAR_REQUIRES_EXPRESSION: DiagnosticMessage = diag!(1117, Error, "yield* requires an expression");
    pub const EXPECTED_DECLARATION: DiagnosticMessage = diag!(1118, Error, "expected declaration");
    pub const CONST_MUST_HAVE_INITIALIZER: DiagnosticMessage = diag!(1119, Error, "const variables must have an initializer");
    pub const DESTRUCTURING_MUST_HAVE_INITIALIZER: DiagnosticMessage = diag!(1120, Error, "destructuring must have an initializer");
    pub const FOR_IN_MULTIPLE_DECLARATIONS: DiagnosticMessage = diag!(1121, Error, "for-in statement may not have more than one variable declaration");
    pub const FOR_OF_MULTIPLE_DECLARATIONS: DiagnosticMessage = diag!(1122, Error, "for-of statement may not have more than one variable declaration");
    pub const FOR_AWAIT_OF_MULTIPLE_DECLARATIONS: DiagnosticMessage = diag!(1123, Error, "for-await-of statement may not have more than one variable declaration");
    pub const FOR_IN_INITIALIZER: DiagnosticMessage = diag!(1124, Error, "for-in statement may not have initializer");
    pub const FOR_OF_INITIALIZER: DiagnosticMessage = diag!(1125, Error, "for-of statement may not have initializer");
    pub const FOR_AWAIT_OF_INITIALIZER: DiagnosticMessage = diag!(1126, Error, "for-await-of statement may not have initializer");
    pub const FOR_AWAIT_ONLY_OF: DiagnosticMessage = diag!(1127, Error, "for-await-of is the only allowed asynchronous iteration");
    pub const FOR_AWAIT_OUTSIDE_ASYNC: DiagnosticMessage = diag!(1128, Error, "'for-await-of' used in a non-async function context");
    pub const MULTIPLE_DEFAULT_CLAUSES: DiagnosticMessage = diag!(1129, Error, "Switch statements may have at most one default clause");
    pub const NEWLINE_AFTER_THROW: DiagnosticMessage = diag!(1130, Error, "semicolon/newline not allowed after 'throw'");
    pub const CATCH_OR_FINALLY_EXPECTED: DiagnosticMessage = diag!(1131, Error, "'catch' or 'finally' expected.");
    pub const TRAILING_COMMA_IN_PARAMETER_LIST: DiagnosticMessage = diag!(1132, Error, "Invalid trailing comma in formal parameter list");
    pub const TRAILING_COMMA_IN_ARGUMENTS: DiagnosticMessage = diag!(1133, Error, "Invalid trailing comma in arguments list");
    pub const SETTER_PARAMETER_COUNT: DiagnosticMessage = diag!(1134, Error, "Setter must have exactly 1 parameter, found {0}");
    pub const SETTER_REST_PARAMETER: DiagnosticMessage = diag!(1135, Error, "Setter must not have a rest parameter");
    pub const DEFAULT_AFTER_REST: DiagnosticMessage = diag!(1136, Error, "A default value cannot be specified after '...'");
    pub const ONLY_IDENTIFIER_OR_PATTERN: DiagnosticMessage = diag!(1137, Error, "Only an identifier or destructuring pattern is allowed here.");
    pub const CANNOT_USE_KEYWORD_HERE: DiagnosticMessage = diag!(1138, Error, "cannot use keyword '{0}' here.");
    pub const KEYWORD_IN_SHORT_OBJECT_LITERAL: DiagnosticMessage = diag!(1139, Error, "Cannot use keyword in short object literal");
    pub const TOO_DEEP_RECURSION: DiagnosticMessage = diag!(1140, Error, "Too deep recursion while parsing");

    // ========================================================================
    // Warnings (2000-2099)
    // ========================================================================
    pub const FOR_IN_SHOULD_NOT_HAVE_INITIALIZER: DiagnosticMessage = diag!(2000, Warning, "for-in statement should not have initializer");
    pub const TRAILING_COMMA_IN_OBJECT_INITIALIZER: DiagnosticMessage = diag!(2001, Warning, "Trailing comma is not legal in an ECMA-262 object initializer");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_message() {
        let result = format_message("'{0}' expected", &[")"]);
        assert_eq!(result, "')' expected");
    }

    #[test]
    fn test_format_message_repeated_placeholder() {
        let result = format_message("{0} and {0} then {1}", &["a", "b"]);
        assert_eq!(result, "a and a then b");
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::with_location(
            "input.js".to_string(),
            TextSpan::new(10, 5),
            &messages::_0_EXPECTED,
            &[";"],
        );
        assert_eq!(diag.to_string(), "input.js(10): error ES1100: ';' expected");
    }

    #[test]
    fn test_diagnostic_render_uses_line_map() {
        let map = LineMap::new("let a;\nlet b = ;\n");
        let diag = Diagnostic::with_location(
            "input.js".to_string(),
            TextSpan::new(15, 1),
            &messages::PRIMARY_EXPRESSION_EXPECTED,
            &[],
        );
        assert_eq!(
            diag.render(&map),
            "input.js(2,9): error ES1102: primary expression expected"
        );
    }

    #[test]
    fn test_collection_counts_by_category() {
        let mut collection = DiagnosticCollection::new();
        assert!(collection.is_empty());

        collection.add(Diagnostic::new(&messages::SEMI_COLON_EXPECTED, &[]));
        collection.add(Diagnostic::new(&messages::FOR_IN_SHOULD_NOT_HAVE_INITIALIZER, &[]));
        collection.add(Diagnostic::new(&messages::TRAILING_COMMA_IN_OBJECT_INITIALIZER, &[]));

        assert!(collection.has_errors());
        assert_eq!(collection.len(), 3);
        assert_eq!(collection.error_count(), 1);
        assert_eq!(collection.warning_count(), 2);
        assert!(collection.contains_message("should not have initializer"));
    }

    #[test]
    fn test_sort_by_position() {
        let mut collection = DiagnosticCollection::new();
        for start in [30, 4, 12] {
            collection.add(Diagnostic::with_location(
                "a.js".to_string(),
                TextSpan::new(start, 1),
                &messages::INVALID_CHARACTER,
                &[],
            ));
        }
        collection.sort();
        let starts: Vec<u32> = collection
            .diagnostics()
            .iter()
            .filter_map(|d| d.span.map(|s| s.start))
            .collect();
        assert_eq!(starts, vec![4, 12, 30]);
    }
}
