//! Functions, classes and object literals.
//!
//! Class bodies and object literals share the member forms: methods,
//! getters, setters and async or generator methods, all keyed by a
//! [`PropertyName`].

use esparse_ast::node::*;
use esparse_ast::syntax_kind::SyntaxKind;
use esparse_ast::types::FeatureSet;
use esparse_diagnostics::messages;

use crate::parser::{FunctionFlavor, InMode, Parser, PatternKind};

/// What is known about a class member or object literal property before its
/// shape is decided.
#[derive(Debug, Clone, Copy)]
struct ElementInfo<'a> {
    start: u32,
    is_static: bool,
    is_class_member: bool,
    /// Set once the element name has been read.
    name: Option<PropertyName<'a>>,
}

impl<'a> ElementInfo<'a> {
    fn class_member(start: u32, is_static: bool) -> Self {
        Self {
            start,
            is_static,
            is_class_member: true,
            name: None,
        }
    }

    fn object_literal(start: u32) -> Self {
        Self {
            start,
            is_static: false,
            is_class_member: false,
            name: None,
        }
    }
}

impl<'a> Parser<'a> {
    // ========================================================================
    // Functions
    // ========================================================================

    pub(crate) fn peek_function(&mut self) -> bool {
        self.peek(SyntaxKind::FunctionKeyword)
    }

    /// `async function`, with no line break between the two words.
    pub(crate) fn peek_async_function_start(&mut self) -> bool {
        self.peek_predefined(0, self.names.async_)
            && !self.peek_implicit_semicolon(1)
            && self.peek_at(1, SyntaxKind::FunctionKeyword)
    }

    pub(crate) fn parse_function_declaration(&mut self) -> Statement<'a> {
        let start = self.node_start();
        self.eat(SyntaxKind::FunctionKeyword);
        let is_generator = self.eat_opt(SyntaxKind::AsteriskToken).is_some();
        let name = self.eat_id();
        let function = self.parse_function_tail(
            start,
            SyntaxKind::FunctionDeclaration,
            name,
            FunctionFlavor::new(false, is_generator),
        );
        Statement::FunctionDeclaration(function)
    }

    pub(crate) fn parse_function_expression(&mut self) -> Expression<'a> {
        let start = self.node_start();
        self.eat(SyntaxKind::FunctionKeyword);
        let is_generator = self.eat_opt(SyntaxKind::AsteriskToken).is_some();
        let name = self.eat_id_opt();
        let function = self.parse_function_tail(
            start,
            SyntaxKind::FunctionExpression,
            name,
            FunctionFlavor::new(false, is_generator),
        );
        Expression::Function(function)
    }

    pub(crate) fn parse_async_function_declaration(&mut self) -> Statement<'a> {
        let start = self.node_start();
        self.eat_async_function_start();
        let is_generator = self.eat_opt(SyntaxKind::AsteriskToken).is_some();
        let name = self.eat_id();
        let function = self.parse_function_tail(
            start,
            SyntaxKind::FunctionDeclaration,
            name,
            FunctionFlavor::new(true, is_generator),
        );
        Statement::FunctionDeclaration(function)
    }

    pub(crate) fn parse_async_function_expression(&mut self) -> Expression<'a> {
        let start = self.node_start();
        self.eat_async_function_start();
        let is_generator = self.eat_opt(SyntaxKind::AsteriskToken).is_some();
        let name = self.eat_id_opt();
        let function = self.parse_function_tail(
            start,
            SyntaxKind::FunctionExpression,
            name,
            FunctionFlavor::new(true, is_generator),
        );
        Expression::Function(function)
    }

    fn eat_async_function_start(&mut self) {
        self.eat_predefined(self.names.async_);
        self.eat(SyntaxKind::FunctionKeyword);
    }

    /// Parameters and body, parsed inside a function context of `flavor`.
    fn parse_function_tail(
        &mut self,
        start: u32,
        kind: SyntaxKind,
        name: Option<Identifier<'a>>,
        flavor: FunctionFlavor,
    ) -> &'a FunctionLike<'a> {
        self.push_function(flavor);
        let parameters = self.parse_formal_parameter_list();
        let body = self.parse_function_body();
        self.pop_function();
        self.alloc(FunctionLike {
            data: self.node_data(kind, start),
            name,
            is_async: flavor.is_async(),
            is_generator: flavor.is_generator(),
            parameters: self.alloc(parameters),
            body: self.alloc(body),
        })
    }

    pub(crate) fn parse_function_body(&mut self) -> Block<'a> {
        self.parse_block()
    }

    fn peek_parameter(&mut self) -> bool {
        self.peek_id(0)
            || matches!(
                self.peek_kind(0),
                SyntaxKind::DotDotDotToken | SyntaxKind::OpenBracketToken | SyntaxKind::OpenBraceToken
            )
    }

    pub(crate) fn parse_formal_parameter_list(&mut self) -> FormalParameterList<'a> {
        let start = self.node_start();
        let mut parameters = Vec::new();
        let mut has_trailing_comma = false;

        self.eat(SyntaxKind::OpenParenToken);
        while self.peek_parameter() {
            parameters.push(self.parse_parameter());

            if !self.peek(SyntaxKind::CloseParenToken) {
                let comma = self.eat(SyntaxKind::CommaToken);
                if self.peek(SyntaxKind::CloseParenToken) {
                    if !self.config.at_least_8 {
                        self.report_trailing_comma_error(
                            comma,
                            &messages::TRAILING_COMMA_IN_PARAMETER_LIST,
                        );
                    }
                    has_trailing_comma = true;
                }
            }
        }
        self.eat(SyntaxKind::CloseParenToken);

        FormalParameterList {
            data: self.node_data(SyntaxKind::FormalParameterList, start),
            parameters: self.alloc_slice(parameters),
            has_trailing_comma,
        }
    }

    /// An identifier or pattern with an optional default, or a rest parameter.
    pub(crate) fn parse_parameter(&mut self) -> Expression<'a> {
        if self.peek(SyntaxKind::DotDotDotToken) {
            return self.parse_iter_rest(PatternKind::Initializer);
        }
        let start = self.node_start();
        let parameter = if self.peek_pattern_start() {
            self.parse_pattern(PatternKind::Initializer)
        } else {
            self.parse_identifier_expression()
        };

        if self.eat_opt(SyntaxKind::EqualsToken).is_none() {
            return parameter;
        }
        let default = self.parse_assignment(InMode::Normal);
        Expression::DefaultValue(DefaultValue {
            data: self.node_data(SyntaxKind::DefaultValue, start),
            target: self.alloc(parameter),
            default: self.alloc(default),
        })
    }

    // ========================================================================
    // Classes
    // ========================================================================

    /// A class declaration, or a class expression whose name is optional.
    pub(crate) fn parse_class(&mut self, is_expression: bool) -> &'a ClassLike<'a> {
        let start = self.node_start();
        self.eat(SyntaxKind::ClassKeyword);
        let name = if !is_expression || self.peek_id(0) {
            self.eat_id()
        } else {
            None
        };

        let superclass = if self.eat_opt(SyntaxKind::ExtendsKeyword).is_some() {
            let superclass = self.nested(Self::parse_left_hand_side);
            Some(self.alloc(superclass))
        } else {
            None
        };

        self.eat(SyntaxKind::OpenBraceToken);
        let elements = self.parse_class_elements();
        self.eat(SyntaxKind::CloseBraceToken);

        let kind = if is_expression {
            SyntaxKind::ClassExpression
        } else {
            SyntaxKind::ClassDeclaration
        };
        self.alloc(ClassLike {
            data: self.node_data(kind, start),
            name,
            superclass,
            elements: self.alloc_slice(elements),
        })
    }

    fn parse_class_elements(&mut self) -> Vec<ClassElement<'a>> {
        let mut elements = Vec::new();
        loop {
            if self.eat_opt(SyntaxKind::SemicolonToken).is_some() {
                continue;
            }
            if !self.peek_class_element_start(0) {
                return elements;
            }
            elements.push(self.parse_class_element());
        }
    }

    fn peek_class_element_start(&mut self, k: usize) -> bool {
        let kind = self.peek_kind(k);
        kind.is_keyword()
            || matches!(
                kind,
                SyntaxKind::Identifier
                    | SyntaxKind::NumericLiteral
                    | SyntaxKind::BigIntLiteral
                    | SyntaxKind::AsteriskToken
                    | SyntaxKind::StringLiteral
                    | SyntaxKind::OpenBracketToken
            )
    }

    fn parse_class_element(&mut self) -> ClassElement<'a> {
        if self.peek(SyntaxKind::StaticKeyword) && self.peek_at(1, SyntaxKind::OpenBraceToken) {
            return self.parse_class_static_block();
        }

        let start = self.node_start();
        let is_static = self.eat_static_if_not_element_name();
        let element = ElementInfo::class_member(start, is_static);
        if self.peek_get_accessor() {
            ClassElement::Method(self.parse_get_accessor(element))
        } else if self.peek_set_accessor() {
            ClassElement::Method(self.parse_set_accessor(element))
        } else if self.peek_async_method() {
            ClassElement::Method(self.parse_async_method(element))
        } else {
            self.parse_class_member_declaration(element)
        }
    }

    /// `static` is a modifier only when another element name follows it;
    /// `static() {}` and `static = 1` name a member `static`.
    fn eat_static_if_not_element_name(&mut self) -> bool {
        if self.peek(SyntaxKind::StaticKeyword) && self.peek_class_element_start(1) {
            self.next_token();
            return true;
        }
        false
    }

    fn parse_class_static_block(&mut self) -> ClassElement<'a> {
        let start = self.node_start();
        self.eat(SyntaxKind::StaticKeyword);
        self.push_function(FunctionFlavor::Normal);
        let block = self.parse_block();
        self.pop_function();
        ClassElement::StaticBlock(StaticBlock {
            data: self.node_data(SyntaxKind::StaticBlock, start),
            block: self.alloc(block),
        })
    }

    /// A method, or a field when no `(` follows the name.
    fn parse_class_member_declaration(&mut self, mut element: ElementInfo<'a>) -> ClassElement<'a> {
        let is_generator = self.eat_opt(SyntaxKind::AsteriskToken).is_some();
        let key = self.parse_element_name(&mut element);
        if self.peek(SyntaxKind::OpenParenToken) {
            let flavor = FunctionFlavor::new(false, is_generator);
            return ClassElement::Method(self.parse_method_definition(element, flavor));
        }

        let initializer = if self.peek(SyntaxKind::EqualsToken) {
            let initializer = self.parse_initializer(InMode::Normal);
            Some(self.alloc(initializer))
        } else {
            None
        };
        self.eat_possibly_implicit_semicolon();
        ClassElement::Field(FieldDefinition {
            data: self.node_data(SyntaxKind::FieldDefinition, element.start),
            key,
            is_static: element.is_static,
            initializer,
        })
    }

    // ========================================================================
    // Methods and accessors
    // ========================================================================

    /// Read the element name into `element` and return it.
    fn parse_element_name(&mut self, element: &mut ElementInfo<'a>) -> PropertyName<'a> {
        let name = self.parse_property_name();
        element.name = Some(name);
        name
    }

    /// `*name() {}` or `name() {}`, reading the name unless the caller
    /// already did.
    fn parse_method_declaration(&mut self, mut element: ElementInfo<'a>) -> &'a MethodDefinition<'a> {
        let is_generator = self.eat_opt(SyntaxKind::AsteriskToken).is_some();
        self.parse_element_name(&mut element);
        self.parse_method_definition(element, FunctionFlavor::new(false, is_generator))
    }

    fn parse_method_definition(
        &mut self,
        mut element: ElementInfo<'a>,
        flavor: FunctionFlavor,
    ) -> &'a MethodDefinition<'a> {
        let key = match element.name {
            Some(name) => name,
            None => self.parse_element_name(&mut element),
        };
        let function_start = self.node_start();
        let function =
            self.parse_function_tail(function_start, SyntaxKind::FunctionExpression, None, flavor);
        self.alloc(MethodDefinition {
            data: self.node_data(SyntaxKind::MethodDefinition, element.start),
            key,
            method_kind: MethodKind::Method,
            is_static: element.is_static,
            is_class_member: element.is_class_member,
            function,
        })
    }

    fn peek_get_accessor(&mut self) -> bool {
        self.peek_predefined(0, self.names.get) && self.peek_property_name_or_computed(1)
    }

    fn peek_set_accessor(&mut self) -> bool {
        self.peek_predefined(0, self.names.set) && self.peek_property_name_or_computed(1)
    }

    fn peek_async_method(&mut self) -> bool {
        self.peek_predefined(0, self.names.async_)
            && !self.peek_implicit_semicolon(1)
            && (self.peek_property_name_or_computed(1)
                || (self.peek_at(1, SyntaxKind::AsteriskToken)
                    && self.peek_property_name_or_computed(2)))
    }

    fn parse_get_accessor(&mut self, mut element: ElementInfo<'a>) -> &'a MethodDefinition<'a> {
        self.eat_predefined(self.names.get);
        let key = self.parse_element_name(&mut element);

        let function_start = self.node_start();
        self.eat(SyntaxKind::OpenParenToken);
        self.eat(SyntaxKind::CloseParenToken);
        let parameters = FormalParameterList {
            data: self.node_data(SyntaxKind::FormalParameterList, function_start),
            parameters: &[],
            has_trailing_comma: false,
        };
        self.push_function(FunctionFlavor::Normal);
        let body = self.parse_function_body();
        self.pop_function();
        self.record_feature(FeatureSet::GETTER);

        let function = self.alloc(FunctionLike {
            data: self.node_data(SyntaxKind::FunctionExpression, function_start),
            name: None,
            is_async: false,
            is_generator: false,
            parameters: self.alloc(parameters),
            body: self.alloc(body),
        });
        self.alloc(MethodDefinition {
            data: self.node_data(SyntaxKind::GetAccessor, element.start),
            key,
            method_kind: MethodKind::Getter,
            is_static: element.is_static,
            is_class_member: element.is_class_member,
            function,
        })
    }

    fn parse_set_accessor(&mut self, mut element: ElementInfo<'a>) -> &'a MethodDefinition<'a> {
        self.eat_predefined(self.names.set);
        let key = self.parse_element_name(&mut element);

        let function_start = self.node_start();
        self.push_function(FunctionFlavor::Normal);
        let parameters = self.parse_setter_parameter_list();
        let body = self.parse_function_body();
        self.pop_function();
        self.record_feature(FeatureSet::SETTER);

        let function = self.alloc(FunctionLike {
            data: self.node_data(SyntaxKind::FunctionExpression, function_start),
            name: None,
            is_async: false,
            is_generator: false,
            parameters: self.alloc(parameters),
            body: self.alloc(body),
        });
        self.alloc(MethodDefinition {
            data: self.node_data(SyntaxKind::SetAccessor, element.start),
            key,
            method_kind: MethodKind::Setter,
            is_static: element.is_static,
            is_class_member: element.is_class_member,
            function,
        })
    }

    /// Exactly one parameter, which is not a rest parameter.
    fn parse_setter_parameter_list(&mut self) -> FormalParameterList<'a> {
        let list = self.parse_formal_parameter_list();
        let count = list.parameters.len();
        if count != 1 {
            let found = count.to_string();
            self.report_at(
                list.data.range.pos,
                list.data.range.end,
                &messages::SETTER_PARAMETER_COUNT,
                &[&found],
            );
        }
        if let Some(Expression::Rest(rest)) = list.parameters.first() {
            let range = rest.data.range;
            self.report_at(range.pos, range.end, &messages::SETTER_REST_PARAMETER, &[]);
        }
        list
    }

    fn parse_async_method(&mut self, element: ElementInfo<'a>) -> &'a MethodDefinition<'a> {
        self.eat_predefined(self.names.async_);
        let is_generator = self.eat_opt(SyntaxKind::AsteriskToken).is_some();
        self.parse_method_definition(element, FunctionFlavor::new(true, is_generator))
    }

    // ========================================================================
    // Property names
    // ========================================================================

    /// An identifier name, string, number or bigint.
    pub(crate) fn peek_property_name(&mut self, k: usize) -> bool {
        let kind = self.peek_kind(k);
        kind.is_keyword()
            || matches!(
                kind,
                SyntaxKind::Identifier
                    | SyntaxKind::StringLiteral
                    | SyntaxKind::NumericLiteral
                    | SyntaxKind::BigIntLiteral
            )
    }

    pub(crate) fn peek_property_name_or_computed(&mut self, k: usize) -> bool {
        self.peek_property_name(k) || self.peek_at(k, SyntaxKind::OpenBracketToken)
    }

    pub(crate) fn parse_property_name(&mut self) -> PropertyName<'a> {
        if !self.peek_property_name(0) {
            return PropertyName::Computed(self.parse_computed_property_name());
        }
        if self.peek_id_or_keyword(0) {
            PropertyName::Identifier(self.eat_property_identifier())
        } else {
            PropertyName::Literal(self.parse_literal())
        }
    }

    /// An IdentifierName used as a property key.
    pub(crate) fn eat_property_identifier(&mut self) -> Identifier<'a> {
        let name = self.eat_id_or_keyword_as_id();
        if name.is_keyword() {
            self.record_feature(FeatureSet::KEYWORDS_AS_PROPERTIES);
        }
        name
    }

    /// `[ AssignmentExpression ]`
    pub(crate) fn parse_computed_property_name(&mut self) -> &'a ComputedPropertyName<'a> {
        let start = self.node_start();
        self.eat(SyntaxKind::OpenBracketToken);
        let expression = self.parse_assignment(InMode::Normal);
        self.eat(SyntaxKind::CloseBracketToken);
        self.alloc(ComputedPropertyName {
            data: self.node_data(SyntaxKind::ComputedPropertyName, start),
            expression: self.alloc(expression),
        })
    }

    // ========================================================================
    // Object literals
    // ========================================================================

    pub(crate) fn parse_object_literal(&mut self) -> Expression<'a> {
        let start = self.node_start();
        let mut properties = Vec::new();
        let mut comma = None;

        self.eat(SyntaxKind::OpenBraceToken);
        while self.peek(SyntaxKind::DotDotDotToken)
            || self.peek(SyntaxKind::AsteriskToken)
            || self.peek_property_name_or_computed(0)
        {
            properties.push(self.parse_property_definition());
            comma = self.eat_opt(SyntaxKind::CommaToken);
            if comma.is_none() {
                break;
            }
        }
        self.eat(SyntaxKind::CloseBraceToken);

        let has_trailing_comma = comma.is_some();
        self.maybe_report_trailing_comma(comma);
        Expression::ObjectLiteral(ObjectLiteral {
            data: self.node_data(SyntaxKind::ObjectLiteralExpression, start),
            properties: self.alloc_slice(properties),
            has_trailing_comma,
        })
    }

    fn parse_property_definition(&mut self) -> PropertyDefinition<'a> {
        let start = self.node_start();
        let mut element = ElementInfo::object_literal(start);
        match self.peek_kind(0) {
            SyntaxKind::AsteriskToken => {
                PropertyDefinition::Method(self.parse_method_declaration(element))
            }
            SyntaxKind::DotDotDotToken => {
                self.record_feature(FeatureSet::OBJECT_LITERALS_WITH_SPREAD);
                self.next_token();
                let expression = self.parse_assignment(InMode::Normal);
                PropertyDefinition::Spread(SpreadElement {
                    data: self.node_data(SyntaxKind::SpreadElement, start),
                    expression: self.alloc(expression),
                })
            }
            SyntaxKind::OpenBracketToken => {
                let key = self.parse_element_name(&mut element);
                if self.eat_opt(SyntaxKind::ColonToken).is_some() {
                    let value = self.parse_assignment(InMode::Normal);
                    return PropertyDefinition::Property(PropertyAssignment {
                        data: self.node_data(SyntaxKind::PropertyAssignment, start),
                        key,
                        value: self.alloc(value),
                    });
                }
                let flavor = FunctionFlavor::Normal;
                PropertyDefinition::Method(self.parse_method_definition(element, flavor))
            }
            _ => {
                if self.peek_get_accessor() {
                    PropertyDefinition::Method(self.parse_get_accessor(element))
                } else if self.peek_set_accessor() {
                    PropertyDefinition::Method(self.parse_set_accessor(element))
                } else if self.peek_async_method() {
                    PropertyDefinition::Method(self.parse_async_method(element))
                } else if self.peek_at(1, SyntaxKind::OpenParenToken) {
                    PropertyDefinition::Method(self.parse_method_declaration(element))
                } else {
                    self.parse_property_name_assignment()
                }
            }
        }
    }

    /// `name: value`, shorthand `name`, or `name = default` (only valid
    /// once the literal is reinterpreted as a pattern).
    fn parse_property_name_assignment(&mut self) -> PropertyDefinition<'a> {
        let start = self.node_start();
        if !self.peek_id_or_keyword(0) {
            let key = PropertyName::Literal(self.parse_literal());
            let value = if self.eat_opt(SyntaxKind::ColonToken).is_some() {
                self.parse_assignment(InMode::Normal)
            } else {
                let token = self.stream.peek(0).clone();
                self.report_expected(&token, SyntaxKind::ColonToken.display_text());
                self.missing_expression()
            };
            return PropertyDefinition::Property(PropertyAssignment {
                data: self.node_data(SyntaxKind::PropertyAssignment, start),
                key,
                value: self.alloc(value),
            });
        }

        let name = self.eat_property_identifier();
        if self.eat_opt(SyntaxKind::ColonToken).is_some() {
            let value = self.parse_assignment(InMode::Normal);
            return PropertyDefinition::Property(PropertyAssignment {
                data: self.node_data(SyntaxKind::PropertyAssignment, start),
                key: PropertyName::Identifier(name),
                value: self.alloc(value),
            });
        }
        if self.is_reserved_word(&name) {
            self.report_at(
                name.data.range.pos,
                name.data.range.end,
                &messages::KEYWORD_IN_SHORT_OBJECT_LITERAL,
                &[],
            );
        } else if self.eat_opt(SyntaxKind::EqualsToken).is_some() {
            let initializer = self.parse_assignment(InMode::Normal);
            return PropertyDefinition::CoverInitializedName(CoverInitializedName {
                data: self.node_data(SyntaxKind::CoverInitializedName, start),
                name,
                initializer: self.alloc(initializer),
            });
        }
        PropertyDefinition::Shorthand(name)
    }
}
