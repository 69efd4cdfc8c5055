//! SyntaxKind enum - all token and node kinds of the ECMAScript tree.
//!
//! Tokens come first, then reserved words, then tree node kinds. Range
//! checks below rely on this declaration order.

/// The kind of a syntax token or node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum SyntaxKind {
    // ========================================================================
    // Tokens
    // ========================================================================
    Unknown,
    EndOfFileToken,

    // Literals
    NumericLiteral,
    BigIntLiteral,
    StringLiteral,
    RegularExpressionLiteral,
    NoSubstitutionTemplateLiteral,

    // Pseudo-literals (template)
    TemplateHead,
    TemplateMiddle,
    TemplateTail,

    // Punctuation
    OpenBraceToken,
    CloseBraceToken,
    OpenParenToken,
    CloseParenToken,
    OpenBracketToken,
    CloseBracketToken,
    DotToken,
    DotDotDotToken,
    SemicolonToken,
    CommaToken,
    QuestionDotToken,
    LessThanToken,
    GreaterThanToken,
    LessThanEqualsToken,
    GreaterThanEqualsToken,
    EqualsEqualsToken,
    ExclamationEqualsToken,
    EqualsEqualsEqualsToken,
    ExclamationEqualsEqualsToken,
    EqualsGreaterThanToken,
    PlusToken,
    MinusToken,
    AsteriskToken,
    AsteriskAsteriskToken,
    SlashToken,
    PercentToken,
    PlusPlusToken,
    MinusMinusToken,
    LessThanLessThanToken,
    GreaterThanGreaterThanToken,
    GreaterThanGreaterThanGreaterThanToken,
    AmpersandToken,
    BarToken,
    CaretToken,
    ExclamationToken,
    TildeToken,
    AmpersandAmpersandToken,
    BarBarToken,
    QuestionToken,
    ColonToken,
    QuestionQuestionToken,

    // Assignments
    EqualsToken,
    PlusEqualsToken,
    MinusEqualsToken,
    AsteriskEqualsToken,
    AsteriskAsteriskEqualsToken,
    SlashEqualsToken,
    PercentEqualsToken,
    LessThanLessThanEqualsToken,
    GreaterThanGreaterThanEqualsToken,
    GreaterThanGreaterThanGreaterThanEqualsToken,
    AmpersandEqualsToken,
    BarEqualsToken,
    CaretEqualsToken,
    BarBarEqualsToken,
    AmpersandAmpersandEqualsToken,
    QuestionQuestionEqualsToken,

    // Identifiers and keywords
    Identifier,

    // Reserved words
    BreakKeyword,
    CaseKeyword,
    CatchKeyword,
    ClassKeyword,
    ConstKeyword,
    ContinueKeyword,
    DebuggerKeyword,
    DefaultKeyword,
    DeleteKeyword,
    DoKeyword,
    ElseKeyword,
    EnumKeyword,
    ExportKeyword,
    ExtendsKeyword,
    FalseKeyword,
    FinallyKeyword,
    ForKeyword,
    FunctionKeyword,
    IfKeyword,
    ImportKeyword,
    InKeyword,
    InstanceOfKeyword,
    NewKeyword,
    NullKeyword,
    ReturnKeyword,
    SuperKeyword,
    SwitchKeyword,
    ThisKeyword,
    ThrowKeyword,
    TrueKeyword,
    TryKeyword,
    TypeOfKeyword,
    VarKeyword,
    VoidKeyword,
    WhileKeyword,
    WithKeyword,

    // Strict mode reserved words
    ImplementsKeyword,
    InterfaceKeyword,
    LetKeyword,
    PackageKeyword,
    PrivateKeyword,
    ProtectedKeyword,
    PublicKeyword,
    StaticKeyword,
    YieldKeyword,

    // ========================================================================
    // Nodes
    // ========================================================================
    Program,

    // Statements
    Block,
    VariableStatement,
    VariableDeclarationList,
    VariableDeclaration,
    EmptyStatement,
    ExpressionStatement,
    IfStatement,
    DoStatement,
    WhileStatement,
    ForStatement,
    ForInStatement,
    ForOfStatement,
    ForAwaitOfStatement,
    ContinueStatement,
    BreakStatement,
    ReturnStatement,
    WithStatement,
    SwitchStatement,
    CaseClause,
    DefaultClause,
    LabeledStatement,
    ThrowStatement,
    TryStatement,
    CatchClause,
    DebuggerStatement,
    FunctionDeclaration,
    ClassDeclaration,
    MissingStatement,

    // Modules
    ImportDeclaration,
    ImportSpecifier,
    ExportDeclaration,
    ExportSpecifier,

    // Expressions
    ThisExpression,
    SuperExpression,
    NewTargetExpression,
    ImportMetaExpression,
    DynamicImportExpression,
    TemplateLiteralExpression,
    TemplateLiteralPortion,
    TemplateSubstitution,
    ArrayLiteralExpression,
    ObjectLiteralExpression,
    PropertyAssignment,
    ShorthandPropertyAssignment,
    CoverInitializedName,
    ComputedPropertyName,
    ParenthesizedExpression,
    FunctionExpression,
    ArrowFunction,
    ClassExpression,
    PropertyAccessExpression,
    ElementAccessExpression,
    CallExpression,
    NewExpression,
    ArgumentList,
    OptionalPropertyAccessExpression,
    OptionalElementAccessExpression,
    OptionalCallExpression,
    UnaryExpression,
    UpdateExpression,
    AwaitExpression,
    YieldExpression,
    BinaryExpression,
    AssignmentExpression,
    ConditionalExpression,
    CommaExpression,
    SpreadElement,
    ArrayHole,
    MissingExpression,

    // Patterns
    ArrayPattern,
    ObjectPattern,
    PatternProperty,
    DefaultValue,
    RestElement,
    FormalParameterList,

    // Class and object members
    MethodDefinition,
    GetAccessor,
    SetAccessor,
    FieldDefinition,
    StaticBlock,
}

// Marker constants for SyntaxKind ranges.
impl SyntaxKind {
    pub const FIRST_ASSIGNMENT: SyntaxKind = SyntaxKind::EqualsToken;
    pub const LAST_ASSIGNMENT: SyntaxKind = SyntaxKind::QuestionQuestionEqualsToken;
    pub const FIRST_KEYWORD: SyntaxKind = SyntaxKind::BreakKeyword;
    pub const LAST_KEYWORD: SyntaxKind = SyntaxKind::YieldKeyword;
    pub const FIRST_STRICT_KEYWORD: SyntaxKind = SyntaxKind::ImplementsKeyword;
    pub const LAST_STRICT_KEYWORD: SyntaxKind = SyntaxKind::YieldKeyword;
    pub const FIRST_PUNCTUATION: SyntaxKind = SyntaxKind::OpenBraceToken;
    pub const LAST_PUNCTUATION: SyntaxKind = SyntaxKind::QuestionQuestionEqualsToken;
    pub const LAST_TOKEN: SyntaxKind = SyntaxKind::YieldKeyword;
}

impl SyntaxKind {
    #[inline]
    fn in_range(self, first: SyntaxKind, last: SyntaxKind) -> bool {
        let v = self as u16;
        v >= first as u16 && v <= last as u16
    }

    /// Whether this kind is a reserved word, strict-mode ones included.
    #[inline]
    pub fn is_keyword(self) -> bool {
        self.in_range(Self::FIRST_KEYWORD, Self::LAST_KEYWORD)
    }

    /// Whether this kind is reserved only in strict mode code.
    #[inline]
    pub fn is_strict_keyword(self) -> bool {
        self.in_range(Self::FIRST_STRICT_KEYWORD, Self::LAST_STRICT_KEYWORD)
    }

    #[inline]
    pub fn is_punctuation(self) -> bool {
        self.in_range(Self::FIRST_PUNCTUATION, Self::LAST_PUNCTUATION)
    }

    #[inline]
    pub fn is_token(self) -> bool {
        self.in_range(SyntaxKind::Unknown, Self::LAST_TOKEN)
    }

    #[inline]
    pub fn is_template(self) -> bool {
        self.in_range(SyntaxKind::NoSubstitutionTemplateLiteral, SyntaxKind::TemplateTail)
    }

    #[inline]
    pub fn is_assignment_operator(self) -> bool {
        self.in_range(Self::FIRST_ASSIGNMENT, Self::LAST_ASSIGNMENT)
    }

    /// Whether this kind is an operator of a unary expression
    /// (`delete void typeof + - ~ !`).
    #[inline]
    pub fn is_unary_operator(self) -> bool {
        matches!(
            self,
            SyntaxKind::DeleteKeyword
                | SyntaxKind::VoidKeyword
                | SyntaxKind::TypeOfKeyword
                | SyntaxKind::PlusToken
                | SyntaxKind::MinusToken
                | SyntaxKind::TildeToken
                | SyntaxKind::ExclamationToken
        )
    }

    /// Get the keyword text for a keyword kind, or None if not a keyword.
    pub fn keyword_text(self) -> Option<&'static str> {
        match self {
            SyntaxKind::BreakKeyword => Some("break"),
            SyntaxKind::CaseKeyword => Some("case"),
            SyntaxKind::CatchKeyword => Some("catch"),
            SyntaxKind::ClassKeyword => Some("class"),
            SyntaxKind::ConstKeyword => Some("const"),
            SyntaxKind::ContinueKeyword => Some("continue"),
            SyntaxKind::DebuggerKeyword => Some("debugger"),
            SyntaxKind::DefaultKeyword => Some("default"),
            SyntaxKind::DeleteKeyword => Some("delete"),
            SyntaxKind::DoKeyword => Some("do"),
            SyntaxKind::ElseKeyword => Some("else"),
            SyntaxKind::EnumKeyword => Some("enum"),
            SyntaxKind::ExportKeyword => Some("export"),
            SyntaxKind::ExtendsKeyword => Some("extends"),
            SyntaxKind::FalseKeyword => Some("false"),
            SyntaxKind::FinallyKeyword => Some("finally"),
            SyntaxKind::ForKeyword => Some("for"),
            SyntaxKind::FunctionKeyword => Some("function"),
            SyntaxKind::IfKeyword => Some("if"),
            SyntaxKind::ImportKeyword => Some("import"),
            SyntaxKind::InKeyword => Some("in"),
            SyntaxKind::InstanceOfKeyword => Some("instanceof"),
            SyntaxKind::NewKeyword => Some("new"),
            SyntaxKind::NullKeyword => Some("null"),
            SyntaxKind::ReturnKeyword => Some("return"),
            SyntaxKind::SuperKeyword => Some("super"),
            SyntaxKind::SwitchKeyword => Some("switch"),
            SyntaxKind::ThisKeyword => Some("this"),
            SyntaxKind::ThrowKeyword => Some("throw"),
            SyntaxKind::TrueKeyword => Some("true"),
            SyntaxKind::TryKeyword => Some("try"),
            SyntaxKind::TypeOfKeyword => Some("typeof"),
            SyntaxKind::VarKeyword => Some("var"),
            SyntaxKind::VoidKeyword => Some("void"),
            SyntaxKind::WhileKeyword => Some("while"),
            SyntaxKind::WithKeyword => Some("with"),
            SyntaxKind::ImplementsKeyword => Some("implements"),
            SyntaxKind::InterfaceKeyword => Some("interface"),
            SyntaxKind::LetKeyword => Some("let"),
            SyntaxKind::PackageKeyword => Some("package"),
            SyntaxKind::PrivateKeyword => Some("private"),
            SyntaxKind::ProtectedKeyword => Some("protected"),
            SyntaxKind::PublicKeyword => Some("public"),
            SyntaxKind::StaticKeyword => Some("static"),
            SyntaxKind::YieldKeyword => Some("yield"),
            _ => None,
        }
    }

    /// Look up a keyword SyntaxKind from text.
    pub fn from_keyword(text: &str) -> Option<SyntaxKind> {
        match text {
            "break" => Some(SyntaxKind::BreakKeyword),
            "case" => Some(SyntaxKind::CaseKeyword),
            "catch" => Some(SyntaxKind::CatchKeyword),
            "class" => Some(SyntaxKind::ClassKeyword),
            "const" => Some(SyntaxKind::ConstKeyword),
            "continue" => Some(SyntaxKind::ContinueKeyword),
            "debugger" => Some(SyntaxKind::DebuggerKeyword),
            "default" => Some(SyntaxKind::DefaultKeyword),
            "delete" => Some(SyntaxKind::DeleteKeyword),
            "do" => Some(SyntaxKind::DoKeyword),
            "else" => Some(SyntaxKind::ElseKeyword),
            "enum" => Some(SyntaxKind::EnumKeyword),
            "export" => Some(SyntaxKind::ExportKeyword),
            "extends" => Some(SyntaxKind::ExtendsKeyword),
            "false" => Some(SyntaxKind::FalseKeyword),
            "finally" => Some(SyntaxKind::FinallyKeyword),
            "for" => Some(SyntaxKind::ForKeyword),
            "function" => Some(SyntaxKind::FunctionKeyword),
            "if" => Some(SyntaxKind::IfKeyword),
            "import" => Some(SyntaxKind::ImportKeyword),
            "in" => Some(SyntaxKind::InKeyword),
            "instanceof" => Some(SyntaxKind::InstanceOfKeyword),
            "new" => Some(SyntaxKind::NewKeyword),
            "null" => Some(SyntaxKind::NullKeyword),
            "return" => Some(SyntaxKind::ReturnKeyword),
            "super" => Some(SyntaxKind::SuperKeyword),
            "switch" => Some(SyntaxKind::SwitchKeyword),
            "this" => Some(SyntaxKind::ThisKeyword),
            "throw" => Some(SyntaxKind::ThrowKeyword),
            "true" => Some(SyntaxKind::TrueKeyword),
            "try" => Some(SyntaxKind::TryKeyword),
            "typeof" => Some(SyntaxKind::TypeOfKeyword),
            "var" => Some(SyntaxKind::VarKeyword),
            "void" => Some(SyntaxKind::VoidKeyword),
            "while" => Some(SyntaxKind::WhileKeyword),
            "with" => Some(SyntaxKind::WithKeyword),
            "implements" => Some(SyntaxKind::ImplementsKeyword),
            "interface" => Some(SyntaxKind::InterfaceKeyword),
            "let" => Some(SyntaxKind::LetKeyword),
            "package" => Some(SyntaxKind::PackageKeyword),
            "private" => Some(SyntaxKind::PrivateKeyword),
            "protected" => Some(SyntaxKind::ProtectedKeyword),
            "public" => Some(SyntaxKind::PublicKeyword),
            "static" => Some(SyntaxKind::StaticKeyword),
            "yield" => Some(SyntaxKind::YieldKeyword),
            _ => None,
        }
    }

    /// Get the punctuation text for a punctuation kind, or None.
    pub fn punctuation_text(self) -> Option<&'static str> {
        match self {
            SyntaxKind::OpenBraceToken => Some("{"),
            SyntaxKind::CloseBraceToken => Some("}"),
            SyntaxKind::OpenParenToken => Some("("),
            SyntaxKind::CloseParenToken => Some(")"),
            SyntaxKind::OpenBracketToken => Some("["),
            SyntaxKind::CloseBracketToken => Some("]"),
            SyntaxKind::DotToken => Some("."),
            SyntaxKind::DotDotDotToken => Some("..."),
            SyntaxKind::SemicolonToken => Some(";"),
            SyntaxKind::CommaToken => Some(","),
            SyntaxKind::QuestionDotToken => Some("?."),
            SyntaxKind::LessThanToken => Some("<"),
            SyntaxKind::GreaterThanToken => Some(">"),
            SyntaxKind::LessThanEqualsToken => Some("<="),
            SyntaxKind::GreaterThanEqualsToken => Some(">="),
            SyntaxKind::EqualsEqualsToken => Some("=="),
            SyntaxKind::ExclamationEqualsToken => Some("!="),
            SyntaxKind::EqualsEqualsEqualsToken => Some("==="),
            SyntaxKind::ExclamationEqualsEqualsToken => Some("!=="),
            SyntaxKind::EqualsGreaterThanToken => Some("=>"),
            SyntaxKind::PlusToken => Some("+"),
            SyntaxKind::MinusToken => Some("-"),
            SyntaxKind::AsteriskToken => Some("*"),
            SyntaxKind::AsteriskAsteriskToken => Some("**"),
            SyntaxKind::SlashToken => Some("/"),
            SyntaxKind::PercentToken => Some("%"),
            SyntaxKind::PlusPlusToken => Some("++"),
            SyntaxKind::MinusMinusToken => Some("--"),
            SyntaxKind::LessThanLessThanToken => Some("<<"),
            SyntaxKind::GreaterThanGreaterThanToken => Some(">>"),
            SyntaxKind::GreaterThanGreaterThanGreaterThanToken => Some(">>>"),
            SyntaxKind::AmpersandToken => Some("&"),
            SyntaxKind::BarToken => Some("|"),
            SyntaxKind::CaretToken => Some("^"),
            SyntaxKind::ExclamationToken => Some("!"),
            SyntaxKind::TildeToken => Some("~"),
            SyntaxKind::AmpersandAmpersandToken => Some("&&"),
            SyntaxKind::BarBarToken => Some("||"),
            SyntaxKind::QuestionToken => Some("?"),
            SyntaxKind::ColonToken => Some(":"),
            SyntaxKind::QuestionQuestionToken => Some("??"),
            SyntaxKind::EqualsToken => Some("="),
            SyntaxKind::PlusEqualsToken => Some("+="),
            SyntaxKind::MinusEqualsToken => Some("-="),
            SyntaxKind::AsteriskEqualsToken => Some("*="),
            SyntaxKind::AsteriskAsteriskEqualsToken => Some("**="),
            SyntaxKind::SlashEqualsToken => Some("/="),
            SyntaxKind::PercentEqualsToken => Some("%="),
            SyntaxKind::LessThanLessThanEqualsToken => Some("<<="),
            SyntaxKind::GreaterThanGreaterThanEqualsToken => Some(">>="),
            SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken => Some(">>>="),
            SyntaxKind::AmpersandEqualsToken => Some("&="),
            SyntaxKind::BarEqualsToken => Some("|="),
            SyntaxKind::CaretEqualsToken => Some("^="),
            SyntaxKind::BarBarEqualsToken => Some("||="),
            SyntaxKind::AmpersandAmpersandEqualsToken => Some("&&="),
            SyntaxKind::QuestionQuestionEqualsToken => Some("??="),
            _ => None,
        }
    }

    /// The text used for this kind in `'X' expected` messages.
    pub fn display_text(self) -> &'static str {
        if let Some(text) = self.punctuation_text().or_else(|| self.keyword_text()) {
            return text;
        }
        match self {
            SyntaxKind::Identifier => "identifier",
            SyntaxKind::StringLiteral => "string",
            SyntaxKind::NumericLiteral => "number",
            SyntaxKind::BigIntLiteral => "bigint",
            SyntaxKind::RegularExpressionLiteral => "regular expression",
            SyntaxKind::NoSubstitutionTemplateLiteral
            | SyntaxKind::TemplateHead
            | SyntaxKind::TemplateMiddle
            | SyntaxKind::TemplateTail => "template literal",
            SyntaxKind::EndOfFileToken => "end of file",
            _ => "token",
        }
    }
}

impl std::fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_round_trip() {
        for kind in [SyntaxKind::BreakKeyword, SyntaxKind::WithKeyword, SyntaxKind::YieldKeyword] {
            let text = kind.keyword_text().unwrap();
            assert_eq!(SyntaxKind::from_keyword(text), Some(kind));
        }
        assert_eq!(SyntaxKind::from_keyword("async"), None);
        assert_eq!(SyntaxKind::from_keyword("of"), None);
    }

    #[test]
    fn test_strict_keywords() {
        assert!(SyntaxKind::LetKeyword.is_strict_keyword());
        assert!(SyntaxKind::YieldKeyword.is_keyword());
        assert!(!SyntaxKind::VarKeyword.is_strict_keyword());
        assert!(!SyntaxKind::Identifier.is_keyword());
        assert!(!SyntaxKind::Program.is_token());
    }

    #[test]
    fn test_display_text() {
        assert_eq!(SyntaxKind::CloseParenToken.display_text(), ")");
        assert_eq!(SyntaxKind::WhileKeyword.display_text(), "while");
        assert_eq!(SyntaxKind::Identifier.display_text(), "identifier");
    }
}
