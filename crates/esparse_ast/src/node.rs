//! Tree node definitions.
//!
//! Nodes live in a caller-owned arena and reference their children through
//! `&'a` borrows and arena slices. Error paths produce explicit `Missing*`
//! nodes instead of leaving a child absent.

use crate::syntax_kind::SyntaxKind;
use crate::types::TokenFlags;
use esparse_core::intern::InternedString;
use esparse_core::text::TextRange;

// ============================================================================
// Core Node Wrapper
// ============================================================================

/// Common data shared by all nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeData {
    pub kind: SyntaxKind,
    pub range: TextRange,
}

impl NodeData {
    pub fn new(kind: SyntaxKind, pos: u32, end: u32) -> Self {
        Self {
            kind,
            range: TextRange::new(pos, end),
        }
    }
}

/// A list of nodes, allocated in the arena.
pub type NodeList<'a, T> = &'a [T];

/// An optional arena-allocated node.
pub type OptionalNode<'a, T> = Option<&'a T>;

// ============================================================================
// Program
// ============================================================================

#[derive(Debug, Clone)]
pub struct Program<'a> {
    pub data: NodeData,
    pub elements: NodeList<'a, Statement<'a>>,
}

// ============================================================================
// Identifier and literals
// ============================================================================

/// An identifier, or a reserved word used where an IdentifierName is allowed.
#[derive(Debug, Clone, Copy)]
pub struct Identifier<'a> {
    pub data: NodeData,
    pub text: InternedString,
    pub name: &'a str,
    /// The reserved word this identifier was spelled as, if any.
    pub keyword: Option<SyntaxKind>,
}

impl<'a> Identifier<'a> {
    pub fn is_keyword(&self) -> bool {
        self.keyword.is_some()
    }
}

/// A numeric, bigint, string, regular expression, boolean or null literal.
///
/// `data.kind` is the token kind the literal was scanned as.
#[derive(Debug, Clone, Copy)]
pub struct Literal<'a> {
    pub data: NodeData,
    /// Source text of the literal, quotes and prefixes included.
    pub raw: &'a str,
    /// Cooked value for strings, the raw text otherwise.
    pub value: &'a str,
    pub flags: TokenFlags,
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone)]
pub enum Statement<'a> {
    Block(Block<'a>),
    VariableStatement(VariableStatement<'a>),
    EmptyStatement(NodeData),
    ExpressionStatement(ExpressionStatement<'a>),
    IfStatement(IfStatement<'a>),
    DoStatement(DoStatement<'a>),
    WhileStatement(WhileStatement<'a>),
    ForStatement(ForStatement<'a>),
    ForInStatement(ForInStatement<'a>),
    ForOfStatement(ForOfStatement<'a>),
    ForAwaitOfStatement(ForOfStatement<'a>),
    ContinueStatement(JumpStatement<'a>),
    BreakStatement(JumpStatement<'a>),
    ReturnStatement(ReturnStatement<'a>),
    WithStatement(WithStatement<'a>),
    SwitchStatement(SwitchStatement<'a>),
    LabeledStatement(LabeledStatement<'a>),
    ThrowStatement(ThrowStatement<'a>),
    TryStatement(TryStatement<'a>),
    DebuggerStatement(NodeData),
    FunctionDeclaration(&'a FunctionLike<'a>),
    ClassDeclaration(&'a ClassLike<'a>),
    ImportDeclaration(ImportDeclaration<'a>),
    ExportDeclaration(ExportDeclaration<'a>),
    MissingStatement(NodeData),
}

#[derive(Debug, Clone)]
pub struct Block<'a> {
    pub data: NodeData,
    pub statements: NodeList<'a, Statement<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    Var,
    Let,
    Const,
}

impl DeclarationKind {
    pub fn from_token(kind: SyntaxKind) -> Option<Self> {
        match kind {
            SyntaxKind::VarKeyword => Some(DeclarationKind::Var),
            SyntaxKind::LetKeyword => Some(DeclarationKind::Let),
            SyntaxKind::ConstKeyword => Some(DeclarationKind::Const),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct VariableStatement<'a> {
    pub data: NodeData,
    pub declaration_list: VariableDeclarationList<'a>,
}

#[derive(Debug, Clone)]
pub struct VariableDeclarationList<'a> {
    pub data: NodeData,
    pub declaration_kind: DeclarationKind,
    pub declarations: NodeList<'a, VariableDeclaration<'a>>,
}

#[derive(Debug, Clone)]
pub struct VariableDeclaration<'a> {
    pub data: NodeData,
    /// An identifier or a destructuring pattern.
    pub target: &'a Expression<'a>,
    pub initializer: OptionalNode<'a, Expression<'a>>,
}

#[derive(Debug, Clone)]
pub struct ExpressionStatement<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug, Clone)]
pub struct IfStatement<'a> {
    pub data: NodeData,
    pub condition: &'a Expression<'a>,
    pub then_statement: &'a Statement<'a>,
    pub else_statement: OptionalNode<'a, Statement<'a>>,
}

#[derive(Debug, Clone)]
pub struct DoStatement<'a> {
    pub data: NodeData,
    pub body: &'a Statement<'a>,
    pub condition: &'a Expression<'a>,
}

#[derive(Debug, Clone)]
pub struct WhileStatement<'a> {
    pub data: NodeData,
    pub condition: &'a Expression<'a>,
    pub body: &'a Statement<'a>,
}

/// The part of a `for` head before `;`, `in` or `of`.
#[derive(Debug, Clone)]
pub enum ForInitializer<'a> {
    VariableDeclarations(VariableDeclarationList<'a>),
    Expression(&'a Expression<'a>),
}

#[derive(Debug, Clone)]
pub struct ForStatement<'a> {
    pub data: NodeData,
    pub initializer: Option<ForInitializer<'a>>,
    pub condition: OptionalNode<'a, Expression<'a>>,
    pub incrementor: OptionalNode<'a, Expression<'a>>,
    pub body: &'a Statement<'a>,
}

#[derive(Debug, Clone)]
pub struct ForInStatement<'a> {
    pub data: NodeData,
    pub initializer: ForInitializer<'a>,
    pub collection: &'a Expression<'a>,
    pub body: &'a Statement<'a>,
}

/// Shared by `for-of` and `for-await-of`; `data.kind` tells them apart.
#[derive(Debug, Clone)]
pub struct ForOfStatement<'a> {
    pub data: NodeData,
    pub initializer: ForInitializer<'a>,
    pub collection: &'a Expression<'a>,
    pub body: &'a Statement<'a>,
}

/// `break` or `continue` with an optional label.
#[derive(Debug, Clone)]
pub struct JumpStatement<'a> {
    pub data: NodeData,
    pub label: Option<Identifier<'a>>,
}

#[derive(Debug, Clone)]
pub struct ReturnStatement<'a> {
    pub data: NodeData,
    pub expression: OptionalNode<'a, Expression<'a>>,
}

#[derive(Debug, Clone)]
pub struct WithStatement<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub body: &'a Statement<'a>,
}

#[derive(Debug, Clone)]
pub struct SwitchStatement<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub clauses: NodeList<'a, CaseClause<'a>>,
}

/// A `case` clause, or the `default` clause when `expression` is `None`.
#[derive(Debug, Clone)]
pub struct CaseClause<'a> {
    pub data: NodeData,
    pub expression: OptionalNode<'a, Expression<'a>>,
    pub statements: NodeList<'a, Statement<'a>>,
}

#[derive(Debug, Clone)]
pub struct LabeledStatement<'a> {
    pub data: NodeData,
    pub label: Identifier<'a>,
    pub statement: &'a Statement<'a>,
}

#[derive(Debug, Clone)]
pub struct ThrowStatement<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug, Clone)]
pub struct TryStatement<'a> {
    pub data: NodeData,
    pub try_block: &'a Block<'a>,
    pub catch_clause: OptionalNode<'a, CatchClause<'a>>,
    pub finally_block: OptionalNode<'a, Block<'a>>,
}

#[derive(Debug, Clone)]
pub struct CatchClause<'a> {
    pub data: NodeData,
    /// `None` for `catch { ... }`.
    pub binding: OptionalNode<'a, Expression<'a>>,
    pub block: &'a Block<'a>,
}

// ============================================================================
// Modules
// ============================================================================

#[derive(Debug, Clone)]
pub struct ImportDeclaration<'a> {
    pub data: NodeData,
    pub default_binding: Option<Identifier<'a>>,
    /// `* as name`
    pub namespace_binding: Option<Identifier<'a>>,
    /// `{ a, b as c }`
    pub specifiers: Option<NodeList<'a, ImportSpecifier<'a>>>,
    pub module_specifier: Literal<'a>,
}

#[derive(Debug, Clone)]
pub struct ImportSpecifier<'a> {
    pub data: NodeData,
    pub imported_name: Identifier<'a>,
    pub local_name: Option<Identifier<'a>>,
}

#[derive(Debug, Clone)]
pub struct ExportDeclaration<'a> {
    pub data: NodeData,
    pub is_default: bool,
    pub export: Export<'a>,
}

#[derive(Debug, Clone)]
pub enum Export<'a> {
    /// `export * from "m"`
    All { module_specifier: Literal<'a> },
    /// `export { a as b } [from "m"]`
    Named {
        specifiers: NodeList<'a, ExportSpecifier<'a>>,
        module_specifier: Option<Literal<'a>>,
    },
    /// `export var ...`, `export function ...`, `export class ...`
    Declaration(&'a Statement<'a>),
    /// `export default <expression>`
    Expression(&'a Expression<'a>),
}

#[derive(Debug, Clone)]
pub struct ExportSpecifier<'a> {
    pub data: NodeData,
    pub imported_name: Identifier<'a>,
    pub exported_name: Option<Identifier<'a>>,
}

// ============================================================================
// Functions and classes
// ============================================================================

/// A function declaration, function expression or method body.
#[derive(Debug, Clone)]
pub struct FunctionLike<'a> {
    pub data: NodeData,
    pub name: Option<Identifier<'a>>,
    pub is_async: bool,
    pub is_generator: bool,
    pub parameters: &'a FormalParameterList<'a>,
    pub body: &'a Block<'a>,
}

#[derive(Debug, Clone)]
pub struct FormalParameterList<'a> {
    pub data: NodeData,
    /// Identifiers, patterns, `DefaultValue` and `Rest` nodes.
    pub parameters: NodeList<'a, Expression<'a>>,
    pub has_trailing_comma: bool,
}

#[derive(Debug, Clone)]
pub enum ArrowBody<'a> {
    Block(&'a Block<'a>),
    Expression(&'a Expression<'a>),
}

#[derive(Debug, Clone)]
pub struct ArrowFunction<'a> {
    pub data: NodeData,
    pub is_async: bool,
    pub parameters: &'a FormalParameterList<'a>,
    pub body: ArrowBody<'a>,
}

#[derive(Debug, Clone)]
pub struct ClassLike<'a> {
    pub data: NodeData,
    pub name: Option<Identifier<'a>>,
    pub superclass: OptionalNode<'a, Expression<'a>>,
    pub elements: NodeList<'a, ClassElement<'a>>,
}

#[derive(Debug, Clone)]
pub enum ClassElement<'a> {
    Method(&'a MethodDefinition<'a>),
    Field(FieldDefinition<'a>),
    StaticBlock(StaticBlock<'a>),
}

/// A property name as written in an object literal, class body or pattern.
#[derive(Debug, Clone, Copy)]
pub enum PropertyName<'a> {
    Identifier(Identifier<'a>),
    Literal(Literal<'a>),
    Computed(&'a ComputedPropertyName<'a>),
}

#[derive(Debug, Clone)]
pub struct ComputedPropertyName<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodKind {
    Method,
    Getter,
    Setter,
}

/// A method, getter or setter in a class body or object literal.
#[derive(Debug, Clone)]
pub struct MethodDefinition<'a> {
    pub data: NodeData,
    pub key: PropertyName<'a>,
    pub method_kind: MethodKind,
    pub is_static: bool,
    /// Declared in a class body rather than an object literal.
    pub is_class_member: bool,
    pub function: &'a FunctionLike<'a>,
}

#[derive(Debug, Clone)]
pub struct FieldDefinition<'a> {
    pub data: NodeData,
    pub key: PropertyName<'a>,
    pub is_static: bool,
    pub initializer: OptionalNode<'a, Expression<'a>>,
}

#[derive(Debug, Clone)]
pub struct StaticBlock<'a> {
    pub data: NodeData,
    pub block: &'a Block<'a>,
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone)]
pub enum Expression<'a> {
    Identifier(Identifier<'a>),
    Literal(Literal<'a>),
    This(NodeData),
    Super(NodeData),
    NewTarget(NodeData),
    ImportMeta(NodeData),
    DynamicImport(DynamicImport<'a>),
    Template(TemplateLiteral<'a>),
    ArrayLiteral(ArrayLiteral<'a>),
    ObjectLiteral(ObjectLiteral<'a>),
    Parenthesized(ParenthesizedExpression<'a>),
    Function(&'a FunctionLike<'a>),
    Arrow(ArrowFunction<'a>),
    Class(&'a ClassLike<'a>),
    PropertyAccess(PropertyAccess<'a>),
    ElementAccess(ElementAccess<'a>),
    Call(CallExpression<'a>),
    New(NewExpression<'a>),
    OptionalPropertyAccess(OptionalPropertyAccess<'a>),
    OptionalElementAccess(OptionalElementAccess<'a>),
    OptionalCall(OptionalCall<'a>),
    Unary(UnaryExpression<'a>),
    Update(UpdateExpression<'a>),
    Await(AwaitExpression<'a>),
    Yield(YieldExpression<'a>),
    Binary(BinaryExpression<'a>),
    Assignment(AssignmentExpression<'a>),
    Conditional(ConditionalExpression<'a>),
    Comma(CommaExpression<'a>),
    Spread(SpreadElement<'a>),
    /// An elided array element.
    Hole(NodeData),
    ArrayPattern(ArrayPattern<'a>),
    ObjectPattern(ObjectPattern<'a>),
    DefaultValue(DefaultValue<'a>),
    Rest(RestElement<'a>),
    /// `()` or `(...x)` before `=>`, kept until the arrow is completed.
    FormalParameters(&'a FormalParameterList<'a>),
    Missing(NodeData),
}

#[derive(Debug, Clone)]
pub struct DynamicImport<'a> {
    pub data: NodeData,
    pub argument: &'a Expression<'a>,
}

#[derive(Debug, Clone)]
pub struct TemplateLiteral<'a> {
    pub data: NodeData,
    pub tag: OptionalNode<'a, Expression<'a>>,
    /// Alternating portions and substitutions, starting with a portion.
    pub elements: NodeList<'a, TemplatePart<'a>>,
}

#[derive(Debug, Clone)]
pub enum TemplatePart<'a> {
    Portion(TemplatePortion<'a>),
    Substitution(&'a Expression<'a>),
}

#[derive(Debug, Clone)]
pub struct TemplatePortion<'a> {
    pub data: NodeData,
    pub raw: &'a str,
    /// `None` when the portion holds an invalid escape.
    pub cooked: Option<&'a str>,
}

#[derive(Debug, Clone)]
pub struct ArrayLiteral<'a> {
    pub data: NodeData,
    pub elements: NodeList<'a, Expression<'a>>,
    pub has_trailing_comma: bool,
}

#[derive(Debug, Clone)]
pub struct ObjectLiteral<'a> {
    pub data: NodeData,
    pub properties: NodeList<'a, PropertyDefinition<'a>>,
    pub has_trailing_comma: bool,
}

#[derive(Debug, Clone)]
pub enum PropertyDefinition<'a> {
    /// `key: value`
    Property(PropertyAssignment<'a>),
    /// `{ a }`
    Shorthand(Identifier<'a>),
    /// `{ a = 1 }`, only valid once reinterpreted as a pattern.
    CoverInitializedName(CoverInitializedName<'a>),
    Spread(SpreadElement<'a>),
    Method(&'a MethodDefinition<'a>),
}

#[derive(Debug, Clone)]
pub struct PropertyAssignment<'a> {
    pub data: NodeData,
    pub key: PropertyName<'a>,
    pub value: &'a Expression<'a>,
}

#[derive(Debug, Clone)]
pub struct CoverInitializedName<'a> {
    pub data: NodeData,
    pub name: Identifier<'a>,
    pub initializer: &'a Expression<'a>,
}

#[derive(Debug, Clone)]
pub struct ParenthesizedExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug, Clone)]
pub struct PropertyAccess<'a> {
    pub data: NodeData,
    pub object: &'a Expression<'a>,
    pub name: Identifier<'a>,
}

#[derive(Debug, Clone)]
pub struct ElementAccess<'a> {
    pub data: NodeData,
    pub object: &'a Expression<'a>,
    pub index: &'a Expression<'a>,
}

#[derive(Debug, Clone)]
pub struct ArgumentList<'a> {
    pub data: NodeData,
    pub arguments: NodeList<'a, Expression<'a>>,
    pub has_trailing_comma: bool,
}

#[derive(Debug, Clone)]
pub struct CallExpression<'a> {
    pub data: NodeData,
    pub callee: &'a Expression<'a>,
    pub arguments: &'a ArgumentList<'a>,
}

#[derive(Debug, Clone)]
pub struct NewExpression<'a> {
    pub data: NodeData,
    pub callee: &'a Expression<'a>,
    /// `None` for `new X` without parentheses.
    pub arguments: OptionalNode<'a, ArgumentList<'a>>,
}

/// `a?.b`, or `.b` continuing an optional chain.
#[derive(Debug, Clone)]
pub struct OptionalPropertyAccess<'a> {
    pub data: NodeData,
    pub object: &'a Expression<'a>,
    pub name: Identifier<'a>,
    pub is_start_of_chain: bool,
}

#[derive(Debug, Clone)]
pub struct OptionalElementAccess<'a> {
    pub data: NodeData,
    pub object: &'a Expression<'a>,
    pub index: &'a Expression<'a>,
    pub is_start_of_chain: bool,
}

#[derive(Debug, Clone)]
pub struct OptionalCall<'a> {
    pub data: NodeData,
    pub callee: &'a Expression<'a>,
    pub arguments: &'a ArgumentList<'a>,
    pub is_start_of_chain: bool,
}

#[derive(Debug, Clone)]
pub struct UnaryExpression<'a> {
    pub data: NodeData,
    pub operator: SyntaxKind,
    pub operand: &'a Expression<'a>,
}

#[derive(Debug, Clone)]
pub struct UpdateExpression<'a> {
    pub data: NodeData,
    pub operator: SyntaxKind,
    pub is_prefix: bool,
    pub operand: &'a Expression<'a>,
}

#[derive(Debug, Clone)]
pub struct AwaitExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug, Clone)]
pub struct YieldExpression<'a> {
    pub data: NodeData,
    pub argument: OptionalNode<'a, Expression<'a>>,
    /// `yield*`
    pub is_delegate: bool,
}

#[derive(Debug, Clone)]
pub struct BinaryExpression<'a> {
    pub data: NodeData,
    pub left: &'a Expression<'a>,
    pub operator: SyntaxKind,
    pub right: &'a Expression<'a>,
}

#[derive(Debug, Clone)]
pub struct AssignmentExpression<'a> {
    pub data: NodeData,
    pub target: &'a Expression<'a>,
    pub operator: SyntaxKind,
    pub value: &'a Expression<'a>,
}

#[derive(Debug, Clone)]
pub struct ConditionalExpression<'a> {
    pub data: NodeData,
    pub condition: &'a Expression<'a>,
    pub when_true: &'a Expression<'a>,
    pub when_false: &'a Expression<'a>,
}

#[derive(Debug, Clone)]
pub struct CommaExpression<'a> {
    pub data: NodeData,
    pub expressions: NodeList<'a, Expression<'a>>,
}

#[derive(Debug, Clone)]
pub struct SpreadElement<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

// ============================================================================
// Patterns
// ============================================================================

#[derive(Debug, Clone)]
pub struct ArrayPattern<'a> {
    pub data: NodeData,
    /// Targets, `Hole`, `DefaultValue` and a trailing `Rest`.
    pub elements: NodeList<'a, Expression<'a>>,
}

#[derive(Debug, Clone)]
pub struct ObjectPattern<'a> {
    pub data: NodeData,
    pub properties: NodeList<'a, PatternProperty<'a>>,
}

#[derive(Debug, Clone)]
pub enum PatternProperty<'a> {
    /// `{ a }` or `{ a = 1 }`
    Shorthand {
        data: NodeData,
        name: Identifier<'a>,
        default: OptionalNode<'a, Expression<'a>>,
    },
    /// `{ a: target }` or `{ [k]: target }`
    KeyValue {
        data: NodeData,
        key: PropertyName<'a>,
        target: &'a Expression<'a>,
    },
    /// `{ ...target }`
    Rest(RestElement<'a>),
}

/// A target with a default: `a = 1` inside a pattern or parameter list.
#[derive(Debug, Clone)]
pub struct DefaultValue<'a> {
    pub data: NodeData,
    pub target: &'a Expression<'a>,
    pub default: &'a Expression<'a>,
}

/// `...target` in a pattern or parameter list.
#[derive(Debug, Clone)]
pub struct RestElement<'a> {
    pub data: NodeData,
    pub target: &'a Expression<'a>,
}
