//! Accessors shared by every node enum: `data()`, `kind()`, `pos()`, `end()`,
//! plus the assignment-target predicates the parser relies on.

use crate::node::*;
use crate::syntax_kind::SyntaxKind;
use esparse_core::text::TextRange;

macro_rules! impl_node_accessors {
    ($ty:ident) => {
        impl<'a> $ty<'a> {
            pub fn kind(&self) -> SyntaxKind {
                self.data().kind
            }

            pub fn range(&self) -> TextRange {
                self.data().range
            }

            pub fn pos(&self) -> u32 {
                self.data().range.pos
            }

            pub fn end(&self) -> u32 {
                self.data().range.end
            }
        }
    };
}

impl<'a> Statement<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            Statement::Block(n) => &n.data,
            Statement::VariableStatement(n) => &n.data,
            Statement::EmptyStatement(d) => d,
            Statement::ExpressionStatement(n) => &n.data,
            Statement::IfStatement(n) => &n.data,
            Statement::DoStatement(n) => &n.data,
            Statement::WhileStatement(n) => &n.data,
            Statement::ForStatement(n) => &n.data,
            Statement::ForInStatement(n) => &n.data,
            Statement::ForOfStatement(n) => &n.data,
            Statement::ForAwaitOfStatement(n) => &n.data,
            Statement::ContinueStatement(n) => &n.data,
            Statement::BreakStatement(n) => &n.data,
            Statement::ReturnStatement(n) => &n.data,
            Statement::WithStatement(n) => &n.data,
            Statement::SwitchStatement(n) => &n.data,
            Statement::LabeledStatement(n) => &n.data,
            Statement::ThrowStatement(n) => &n.data,
            Statement::TryStatement(n) => &n.data,
            Statement::DebuggerStatement(d) => d,
            Statement::FunctionDeclaration(n) => &n.data,
            Statement::ClassDeclaration(n) => &n.data,
            Statement::ImportDeclaration(n) => &n.data,
            Statement::ExportDeclaration(n) => &n.data,
            Statement::MissingStatement(d) => d,
        }
    }
}

impl_node_accessors!(Statement);

impl<'a> Expression<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            Expression::Identifier(n) => &n.data,
            Expression::Literal(n) => &n.data,
            Expression::This(d) => d,
            Expression::Super(d) => d,
            Expression::NewTarget(d) => d,
            Expression::ImportMeta(d) => d,
            Expression::DynamicImport(n) => &n.data,
            Expression::Template(n) => &n.data,
            Expression::ArrayLiteral(n) => &n.data,
            Expression::ObjectLiteral(n) => &n.data,
            Expression::Parenthesized(n) => &n.data,
            Expression::Function(n) => &n.data,
            Expression::Arrow(n) => &n.data,
            Expression::Class(n) => &n.data,
            Expression::PropertyAccess(n) => &n.data,
            Expression::ElementAccess(n) => &n.data,
            Expression::Call(n) => &n.data,
            Expression::New(n) => &n.data,
            Expression::OptionalPropertyAccess(n) => &n.data,
            Expression::OptionalElementAccess(n) => &n.data,
            Expression::OptionalCall(n) => &n.data,
            Expression::Unary(n) => &n.data,
            Expression::Update(n) => &n.data,
            Expression::Await(n) => &n.data,
            Expression::Yield(n) => &n.data,
            Expression::Binary(n) => &n.data,
            Expression::Assignment(n) => &n.data,
            Expression::Conditional(n) => &n.data,
            Expression::Comma(n) => &n.data,
            Expression::Spread(n) => &n.data,
            Expression::Hole(d) => d,
            Expression::ArrayPattern(n) => &n.data,
            Expression::ObjectPattern(n) => &n.data,
            Expression::DefaultValue(n) => &n.data,
            Expression::Rest(n) => &n.data,
            Expression::FormalParameters(n) => &n.data,
            Expression::Missing(d) => d,
        }
    }

    /// Whether this expression may appear left of `=`, once array and
    /// object literals have been reinterpreted as patterns.
    pub fn is_valid_assignment_target(&self) -> bool {
        match self {
            Expression::Identifier(_)
            | Expression::PropertyAccess(_)
            | Expression::ElementAccess(_)
            | Expression::ArrayPattern(_)
            | Expression::ObjectPattern(_) => true,
            Expression::Parenthesized(n) => n.expression.is_valid_assignment_target(),
            _ => false,
        }
    }

    /// Whether this expression may appear left of a compound assignment
    /// such as `+=`.
    pub fn is_valid_non_vanilla_assignment_target(&self) -> bool {
        match self {
            Expression::Identifier(_)
            | Expression::PropertyAccess(_)
            | Expression::ElementAccess(_) => true,
            Expression::Parenthesized(n) => n.expression.is_valid_non_vanilla_assignment_target(),
            _ => false,
        }
    }

    /// Whether this is a member access, call or `new` that continues an
    /// optional chain.
    pub fn is_optional_chain(&self) -> bool {
        matches!(
            self,
            Expression::OptionalPropertyAccess(_)
                | Expression::OptionalElementAccess(_)
                | Expression::OptionalCall(_)
        )
    }

    pub fn as_identifier(&self) -> Option<&Identifier<'a>> {
        match self {
            Expression::Identifier(id) => Some(id),
            _ => None,
        }
    }
}

impl_node_accessors!(Expression);

impl<'a> PropertyDefinition<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            PropertyDefinition::Property(n) => &n.data,
            PropertyDefinition::Shorthand(n) => &n.data,
            PropertyDefinition::CoverInitializedName(n) => &n.data,
            PropertyDefinition::Spread(n) => &n.data,
            PropertyDefinition::Method(n) => &n.data,
        }
    }
}

impl_node_accessors!(PropertyDefinition);

impl<'a> PatternProperty<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            PatternProperty::Shorthand { data, .. } => data,
            PatternProperty::KeyValue { data, .. } => data,
            PatternProperty::Rest(n) => &n.data,
        }
    }
}

impl_node_accessors!(PatternProperty);

impl<'a> ClassElement<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            ClassElement::Method(n) => &n.data,
            ClassElement::Field(n) => &n.data,
            ClassElement::StaticBlock(n) => &n.data,
        }
    }
}

impl_node_accessors!(ClassElement);

impl<'a> PropertyName<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            PropertyName::Identifier(n) => &n.data,
            PropertyName::Literal(n) => &n.data,
            PropertyName::Computed(n) => &n.data,
        }
    }
}

impl_node_accessors!(PropertyName);

impl<'a> TemplatePart<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            TemplatePart::Portion(n) => &n.data,
            TemplatePart::Substitution(e) => e.data(),
        }
    }
}

impl_node_accessors!(TemplatePart);

impl<'a> ForInitializer<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            ForInitializer::VariableDeclarations(n) => &n.data,
            ForInitializer::Expression(e) => e.data(),
        }
    }
}

impl_node_accessors!(ForInitializer);
