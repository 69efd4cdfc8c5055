//! Expression grammar.
//!
//! Assignment sits on top of the conditional, nullish and binary levels,
//! which climb the table in `precedence.rs` down to exponentiation, unary,
//! update, left-hand-side and primary expressions. Arrow functions are
//! recognised at the assignment level once `=>` shows up after an operand.

use esparse_ast::node::*;
use esparse_ast::syntax_kind::SyntaxKind;
use esparse_ast::types::{FeatureSet, TokenFlags};
use esparse_diagnostics::messages;
use esparse_scanner::{Cursor, TokenInfo};

use crate::parser::{FunctionFlavor, InMode, Parser, PatternKind, MAX_RECURSION_DEPTH};
use crate::precedence::{get_binary_operator_precedence, OperatorPrecedence};

impl<'a> Parser<'a> {
    // ========================================================================
    // Comma expressions
    // ========================================================================

    pub(crate) fn parse_expression(&mut self) -> Expression<'a> {
        self.parse_comma_expression(InMode::Normal)
    }

    /// An expression in a `for` head, where `in` is not an operator.
    pub(crate) fn parse_expression_no_in(&mut self) -> Expression<'a> {
        self.parse_comma_expression(InMode::NoIn)
    }

    fn parse_comma_expression(&mut self, in_mode: InMode) -> Expression<'a> {
        let start = self.node_start();
        let first = self.parse_assignment(in_mode);
        if !self.peek_comma_continuation() {
            return first;
        }
        let mut expressions = vec![first];
        while self.peek_comma_continuation() {
            self.eat(SyntaxKind::CommaToken);
            expressions.push(self.parse_assignment(in_mode));
        }
        Expression::Comma(CommaExpression {
            data: self.node_data(SyntaxKind::CommaExpression, start),
            expressions: self.alloc_slice(expressions),
        })
    }

    /// A `,` that continues a comma expression. `, ...` and `, )` belong to
    /// an arrow parameter list instead.
    fn peek_comma_continuation(&mut self) -> bool {
        self.peek(SyntaxKind::CommaToken)
            && !matches!(
                self.peek_kind(1),
                SyntaxKind::DotDotDotToken | SyntaxKind::CloseParenToken
            )
    }

    pub(crate) fn peek_expression(&mut self) -> bool {
        match self.peek_kind(0) {
            SyntaxKind::ExclamationToken
            | SyntaxKind::ClassKeyword
            | SyntaxKind::DeleteKeyword
            | SyntaxKind::FalseKeyword
            | SyntaxKind::FunctionKeyword
            | SyntaxKind::Identifier
            | SyntaxKind::MinusToken
            | SyntaxKind::MinusMinusToken
            | SyntaxKind::NewKeyword
            | SyntaxKind::NullKeyword
            | SyntaxKind::NumericLiteral
            | SyntaxKind::BigIntLiteral
            | SyntaxKind::OpenBraceToken
            | SyntaxKind::OpenParenToken
            | SyntaxKind::OpenBracketToken
            | SyntaxKind::PlusToken
            | SyntaxKind::PlusPlusToken
            | SyntaxKind::SlashToken
            | SyntaxKind::SlashEqualsToken
            | SyntaxKind::StringLiteral
            | SyntaxKind::NoSubstitutionTemplateLiteral
            | SyntaxKind::TemplateHead
            | SyntaxKind::SuperKeyword
            | SyntaxKind::ThisKeyword
            | SyntaxKind::TildeToken
            | SyntaxKind::TrueKeyword
            | SyntaxKind::TypeOfKeyword
            | SyntaxKind::VoidKeyword
            | SyntaxKind::YieldKeyword => true,
            // `import(...)` and `import.meta`, not an import declaration.
            SyntaxKind::ImportKeyword => matches!(
                self.peek_kind(1),
                SyntaxKind::OpenParenToken | SyntaxKind::DotToken
            ),
            _ => self.peek_id(0),
        }
    }

    // ========================================================================
    // Assignment and arrow functions
    // ========================================================================

    pub(crate) fn parse_assignment(&mut self, in_mode: InMode) -> Expression<'a> {
        self.recursion_depth += 1;
        if self.recursion_depth > MAX_RECURSION_DEPTH {
            self.recursion_depth -= 1;
            self.abandon_too_deep();
            return self.missing_expression();
        }
        let expr = self.parse_assignment_worker(in_mode);
        self.recursion_depth -= 1;
        expr
    }

    fn parse_assignment_worker(&mut self, in_mode: InMode) -> Expression<'a> {
        if self.peek(SyntaxKind::YieldKeyword) && self.in_generator_context() {
            return self.parse_yield_expression(in_mode);
        }

        let cursor = self.stream.position();
        let start = self.node_start();
        let left = self.parse_conditional(in_mode);

        if self.is_start_of_async_arrow(&left) {
            self.stream.set_position(cursor);
            return self.parse_async_arrow_function(in_mode);
        }
        if self.peek(SyntaxKind::EqualsGreaterThanToken) {
            return self.complete_assignment_at_arrow(left, start, cursor, in_mode);
        }
        if self.peek_kind(0).is_assignment_operator() {
            return self.parse_assignment_rest(left, start, cursor, in_mode);
        }
        left
    }

    fn parse_assignment_rest(
        &mut self,
        left: Expression<'a>,
        start: u32,
        cursor: Cursor,
        in_mode: InMode,
    ) -> Expression<'a> {
        let operator = self.peek_kind(0);
        if operator != SyntaxKind::EqualsToken && !left.is_valid_non_vanilla_assignment_target() {
            self.error(&messages::INVALID_ASSIGNMENT_TARGET, &[]);
            return Expression::Missing(NodeData::new(
                SyntaxKind::MissingExpression,
                left.pos(),
                left.end(),
            ));
        }
        let target = self.transform_left_hand_side_expression(left, cursor);
        if !target.is_valid_assignment_target() {
            self.error(&messages::INVALID_ASSIGNMENT_TARGET, &[]);
            return Expression::Missing(NodeData::new(
                SyntaxKind::MissingExpression,
                target.pos(),
                target.end(),
            ));
        }
        self.next_token();
        let value = self.parse_assignment(in_mode);
        Expression::Assignment(AssignmentExpression {
            data: self.node_data(SyntaxKind::AssignmentExpression, start),
            target: self.alloc(target),
            operator,
            value: self.alloc(value),
        })
    }

    /// Array and object literals left of `=` (or of `in`/`of` in a `for`
    /// head) are re-parsed from `cursor` as patterns.
    pub(crate) fn transform_left_hand_side_expression(
        &mut self,
        expr: Expression<'a>,
        cursor: Cursor,
    ) -> Expression<'a> {
        match expr {
            Expression::ArrayLiteral(_) | Expression::ObjectLiteral(_) => {
                self.stream.set_position(cursor);
                self.parse_pattern(PatternKind::Any)
            }
            other => other,
        }
    }

    /// `async x => ...` or `async (...) => ...` parsed so far as an
    /// identifier or a call of `async`.
    fn is_start_of_async_arrow(&mut self, left: &Expression<'a>) -> bool {
        let async_atom = self.names.async_.atom;
        let is_async_name =
            |expr: &Expression<'a>| matches!(expr, Expression::Identifier(id) if id.text == async_atom && id.keyword.is_none());
        match left {
            Expression::Identifier(_) if is_async_name(left) => {
                !self.peek_implicit_semicolon(0)
                    && self.peek_id(0)
                    && !self.peek_implicit_semicolon(1)
                    && self.peek_at(1, SyntaxKind::EqualsGreaterThanToken)
            }
            Expression::Call(call) if is_async_name(call.callee) => {
                self.stream.line_of(call.callee.end())
                    == self.stream.line_of(call.arguments.data.range.pos)
                    && !self.peek_implicit_semicolon(0)
                    && self.peek(SyntaxKind::EqualsGreaterThanToken)
            }
            _ => false,
        }
    }

    fn complete_assignment_at_arrow(
        &mut self,
        left: Expression<'a>,
        start: u32,
        cursor: Cursor,
        in_mode: InMode,
    ) -> Expression<'a> {
        if let Expression::Call(call) = &left {
            let callee_line = self.stream.line_of(call.callee.end());
            let arguments_line = self.stream.line_of(call.arguments.data.range.pos);
            if callee_line < arguments_line {
                // `f\n(a) => b` is `f` followed by an arrow function.
                let callee = call.callee.clone();
                let after_callee = self.stream.cursor_after(callee.end());
                self.stream.set_position(after_callee);
                return callee;
            }
            self.error(&messages::ARROW_UNEXPECTED, &[]);
            return left;
        }
        let parameters = self.transform_to_arrow_parameters(left, cursor);
        self.parse_arrow_function_rest(start, false, parameters, in_mode)
    }

    fn transform_to_arrow_parameters(
        &mut self,
        expr: Expression<'a>,
        cursor: Cursor,
    ) -> &'a FormalParameterList<'a> {
        match expr {
            Expression::FormalParameters(parameters) => parameters,
            Expression::Identifier(_) => self.single_parameter_list(expr),
            Expression::Parenthesized(_) => {
                self.stream.set_position(cursor);
                let parameters = self.parse_formal_parameter_list();
                self.alloc(parameters)
            }
            other => {
                self.report_at(
                    other.pos(),
                    other.end(),
                    &messages::INVALID_ARROW_FUNCTION_PARAMETERS,
                    &[],
                );
                let end = self.last_end();
                self.alloc(FormalParameterList {
                    data: NodeData::new(SyntaxKind::FormalParameterList, end, end),
                    parameters: &[],
                    has_trailing_comma: false,
                })
            }
        }
    }

    fn single_parameter_list(&self, parameter: Expression<'a>) -> &'a FormalParameterList<'a> {
        let data = NodeData::new(SyntaxKind::FormalParameterList, parameter.pos(), parameter.end());
        self.alloc(FormalParameterList {
            data,
            parameters: self.alloc_slice(vec![parameter]),
            has_trailing_comma: false,
        })
    }

    /// `=> body` once the parameters are known.
    fn parse_arrow_function_rest(
        &mut self,
        start: u32,
        is_async: bool,
        parameters: &'a FormalParameterList<'a>,
        in_mode: InMode,
    ) -> Expression<'a> {
        if self.peek_implicit_semicolon(0) {
            self.error(&messages::NO_NEWLINE_BEFORE_ARROW, &[]);
        }
        self.eat(SyntaxKind::EqualsGreaterThanToken);

        self.push_function(FunctionFlavor::new(is_async, false));
        let body = if self.peek(SyntaxKind::OpenBraceToken) {
            let block = self.parse_function_body();
            ArrowBody::Block(self.alloc(block))
        } else {
            let expr = self.parse_assignment(in_mode);
            ArrowBody::Expression(self.alloc(expr))
        };
        self.pop_function();

        Expression::Arrow(ArrowFunction {
            data: self.node_data(SyntaxKind::ArrowFunction, start),
            is_async,
            parameters,
            body,
        })
    }

    fn parse_async_arrow_function(&mut self, in_mode: InMode) -> Expression<'a> {
        let start = self.node_start();
        self.eat_predefined(self.names.async_);
        if self.peek_implicit_semicolon(0) {
            self.error(&messages::NO_NEWLINE_AFTER_ASYNC, &[]);
        }
        let parameters = if self.peek(SyntaxKind::OpenParenToken) {
            let parameters = self.parse_formal_parameter_list();
            self.alloc(parameters)
        } else {
            let parameter = self.parse_identifier_expression();
            self.single_parameter_list(parameter)
        };
        self.parse_arrow_function_rest(start, true, parameters, in_mode)
    }

    fn parse_yield_expression(&mut self, in_mode: InMode) -> Expression<'a> {
        let start = self.node_start();
        self.eat(SyntaxKind::YieldKeyword);
        let mut is_delegate = false;
        let mut argument = None;
        if !self.peek_implicit_semicolon(0) {
            is_delegate = self.eat_opt(SyntaxKind::AsteriskToken).is_some();
            if self.peek_expression() {
                let expr = self.parse_assignment(in_mode);
                argument = Some(self.alloc(expr));
            } else if is_delegate {
                self.error(&messages::YIELD_STAR_REQUIRES_EXPRESSION, &[]);
            }
        }
        Expression::Yield(YieldExpression {
            data: self.node_data(SyntaxKind::YieldExpression, start),
            argument,
            is_delegate,
        })
    }

    // ========================================================================
    // Conditional and binary operators
    // ========================================================================

    fn parse_conditional(&mut self, in_mode: InMode) -> Expression<'a> {
        let start = self.node_start();
        let condition = self.parse_short_circuit(in_mode);
        if self.eat_opt(SyntaxKind::QuestionToken).is_none() {
            return condition;
        }
        let when_true = self.parse_assignment(InMode::Normal);
        self.eat(SyntaxKind::ColonToken);
        let when_false = self.parse_assignment(in_mode);
        Expression::Conditional(ConditionalExpression {
            data: self.node_data(SyntaxKind::ConditionalExpression, start),
            condition: self.alloc(condition),
            when_true: self.alloc(when_true),
            when_false: self.alloc(when_false),
        })
    }

    /// `||` and `&&` chains, then any `??` chain. The two kinds cannot be
    /// mixed without parentheses.
    fn parse_short_circuit(&mut self, in_mode: InMode) -> Expression<'a> {
        let start = self.node_start();
        let mut left = self.parse_binary(OperatorPrecedence::LogicalOr, in_mode);
        if !self.peek(SyntaxKind::QuestionQuestionToken) {
            return left;
        }
        if is_logical_and_or(&left) {
            self.error(&messages::NULLISH_MIXED_WITH_LOGICAL, &[]);
        }
        while self.peek(SyntaxKind::QuestionQuestionToken) {
            let operator = self.next_token().kind;
            let right = self.parse_binary(OperatorPrecedence::BitwiseOr, in_mode);
            left = Expression::Binary(BinaryExpression {
                data: self.node_data(SyntaxKind::BinaryExpression, start),
                left: self.alloc(left),
                operator,
                right: self.alloc(right),
            });
        }
        if matches!(
            self.peek_kind(0),
            SyntaxKind::AmpersandAmpersandToken | SyntaxKind::BarBarToken
        ) {
            self.error(&messages::NULLISH_MIXED_WITH_LOGICAL, &[]);
        }
        left
    }

    /// Left-associative binary operators binding at least as tightly as
    /// `min_precedence`.
    fn parse_binary(&mut self, min_precedence: OperatorPrecedence, in_mode: InMode) -> Expression<'a> {
        let start = self.node_start();
        let mut left = self.parse_exponentiation();
        loop {
            let operator = self.peek_kind(0);
            let precedence =
                match get_binary_operator_precedence(operator, in_mode == InMode::Normal) {
                    Some(precedence) if precedence >= min_precedence => precedence,
                    _ => break,
                };
            self.next_token();
            let right = match precedence.next() {
                Some(tighter) => self.parse_binary(tighter, in_mode),
                None => self.parse_exponentiation(),
            };
            left = Expression::Binary(BinaryExpression {
                data: self.node_data(SyntaxKind::BinaryExpression, start),
                left: self.alloc(left),
                operator,
                right: self.alloc(right),
            });
        }
        left
    }

    /// `**` is right-associative and rejects a bare unary left operand.
    fn parse_exponentiation(&mut self) -> Expression<'a> {
        let start = self.node_start();
        let left = self.parse_unary();
        if !self.peek(SyntaxKind::AsteriskAsteriskToken) {
            return left;
        }
        if let Expression::Unary(unary) = &left {
            let operator = unary.operator.display_text();
            self.error(
                &messages::UNARY_OPERATOR_REQUIRES_PARENTHESES_BEFORE_EXPONENT,
                &[operator],
            );
        }
        let operator = self.next_token().kind;
        let right = self.nested(Self::parse_exponentiation);
        Expression::Binary(BinaryExpression {
            data: self.node_data(SyntaxKind::BinaryExpression, start),
            left: self.alloc(left),
            operator,
            right: self.alloc(right),
        })
    }

    /// Parse one level deeper, or give up at the depth limit.
    pub(crate) fn nested(&mut self, parse: fn(&mut Self) -> Expression<'a>) -> Expression<'a> {
        self.recursion_depth += 1;
        let expr = if self.recursion_depth > MAX_RECURSION_DEPTH {
            self.abandon_too_deep();
            self.missing_expression()
        } else {
            parse(self)
        };
        self.recursion_depth -= 1;
        expr
    }

    // ========================================================================
    // Unary and update expressions
    // ========================================================================

    fn parse_unary(&mut self) -> Expression<'a> {
        let start = self.node_start();
        if self.peek_kind(0).is_unary_operator() {
            let operator = self.next_token().kind;
            let operand = self.nested(Self::parse_unary);
            return Expression::Unary(UnaryExpression {
                data: self.node_data(SyntaxKind::UnaryExpression, start),
                operator,
                operand: self.alloc(operand),
            });
        }
        if self.peek_predefined(0, self.names.await_) {
            self.eat_predefined(self.names.await_);
            let expression = self.nested(Self::parse_unary);
            return Expression::Await(AwaitExpression {
                data: self.node_data(SyntaxKind::AwaitExpression, start),
                expression: self.alloc(expression),
            });
        }
        self.parse_update()
    }

    fn parse_update(&mut self) -> Expression<'a> {
        let start = self.node_start();
        if matches!(
            self.peek_kind(0),
            SyntaxKind::PlusPlusToken | SyntaxKind::MinusMinusToken
        ) {
            let operator = self.next_token().kind;
            let operand = self.nested(Self::parse_unary);
            return Expression::Update(UpdateExpression {
                data: self.node_data(SyntaxKind::UpdateExpression, start),
                operator,
                is_prefix: true,
                operand: self.alloc(operand),
            });
        }

        let operand = self.parse_left_hand_side();
        if matches!(
            self.peek_kind(0),
            SyntaxKind::PlusPlusToken | SyntaxKind::MinusMinusToken
        ) && !self.peek_implicit_semicolon(0)
        {
            let operator = self.next_token().kind;
            return Expression::Update(UpdateExpression {
                data: self.node_data(SyntaxKind::UpdateExpression, start),
                operator,
                is_prefix: false,
                operand: self.alloc(operand),
            });
        }
        operand
    }

    // ========================================================================
    // Left-hand-side expressions
    // ========================================================================

    /// `new`, member, call and optional-chain expressions.
    pub(crate) fn parse_left_hand_side(&mut self) -> Expression<'a> {
        self.nested(Self::parse_left_hand_side_worker)
    }

    fn parse_left_hand_side_worker(&mut self) -> Expression<'a> {
        let start = self.node_start();
        let mut operand = self.parse_new_expression();

        // `new X` without arguments takes no call suffix: `new X()` would
        // have been read as the arguments of the `new`.
        if matches!(&operand, Expression::New(new) if new.arguments.is_none()) {
            return operand;
        }
        loop {
            operand = match self.peek_kind(0) {
                SyntaxKind::OpenParenToken => {
                    let arguments = self.parse_arguments();
                    Expression::Call(CallExpression {
                        data: self.node_data(SyntaxKind::CallExpression, start),
                        callee: self.alloc(operand),
                        arguments: self.alloc(arguments),
                    })
                }
                SyntaxKind::OpenBracketToken
                | SyntaxKind::DotToken
                | SyntaxKind::NoSubstitutionTemplateLiteral
                | SyntaxKind::TemplateHead => self.parse_member_suffix(operand, start),
                _ => break,
            };
        }
        self.maybe_parse_optional_chain(operand, start)
    }

    fn peek_member_suffix(&mut self) -> bool {
        matches!(
            self.peek_kind(0),
            SyntaxKind::OpenBracketToken
                | SyntaxKind::DotToken
                | SyntaxKind::NoSubstitutionTemplateLiteral
                | SyntaxKind::TemplateHead
        )
    }

    /// `[index]`, `.name` or a tagged template after `operand`.
    fn parse_member_suffix(&mut self, operand: Expression<'a>, start: u32) -> Expression<'a> {
        match self.peek_kind(0) {
            SyntaxKind::OpenBracketToken => {
                let index = self.parse_element_index();
                Expression::ElementAccess(ElementAccess {
                    data: self.node_data(SyntaxKind::ElementAccessExpression, start),
                    object: self.alloc(operand),
                    index: self.alloc(index),
                })
            }
            SyntaxKind::DotToken => {
                self.next_token();
                let name = self.eat_id_or_keyword_as_id();
                Expression::PropertyAccess(PropertyAccess {
                    data: self.node_data(SyntaxKind::PropertyAccessExpression, start),
                    object: self.alloc(operand),
                    name,
                })
            }
            _ => {
                let tag = self.alloc(operand);
                self.parse_template_literal(Some(tag), start)
            }
        }
    }

    /// `[expression]`
    fn parse_element_index(&mut self) -> Expression<'a> {
        self.eat(SyntaxKind::OpenBracketToken);
        let index = self.parse_expression();
        self.eat(SyntaxKind::CloseBracketToken);
        index
    }

    fn maybe_parse_optional_chain(&mut self, mut operand: Expression<'a>, start: u32) -> Expression<'a> {
        while self.eat_opt(SyntaxKind::QuestionDotToken).is_some() {
            operand = match self.peek_kind(0) {
                SyntaxKind::OpenParenToken => self.optional_call(operand, start, true),
                SyntaxKind::OpenBracketToken => self.optional_element_access(operand, start, true),
                SyntaxKind::NoSubstitutionTemplateLiteral | SyntaxKind::TemplateHead => {
                    self.error(&messages::TEMPLATE_LITERAL_IN_OPTIONAL_CHAIN, &[]);
                    operand
                }
                _ if self.peek_id_or_keyword(0) => {
                    let name = self.eat_id_or_keyword_as_id();
                    self.optional_property_access(operand, name, start, true)
                }
                found => {
                    self.error(&messages::NOT_ALLOWED_IN_OPTIONAL_CHAIN, &[found.display_text()]);
                    operand
                }
            };
            operand = self.parse_remaining_optional_chain(operand, start);
        }
        operand
    }

    /// Plain `.x`, `[x]` and `(...)` links that continue an optional chain.
    fn parse_remaining_optional_chain(&mut self, mut operand: Expression<'a>, start: u32) -> Expression<'a> {
        loop {
            operand = match self.peek_kind(0) {
                SyntaxKind::DotToken => {
                    self.next_token();
                    let name = self.eat_id_or_keyword_as_id();
                    self.optional_property_access(operand, name, start, false)
                }
                SyntaxKind::OpenParenToken => self.optional_call(operand, start, false),
                SyntaxKind::OpenBracketToken => self.optional_element_access(operand, start, false),
                SyntaxKind::NoSubstitutionTemplateLiteral | SyntaxKind::TemplateHead => {
                    self.error(&messages::TEMPLATE_LITERAL_IN_OPTIONAL_CHAIN, &[]);
                    break;
                }
                _ => break,
            };
        }
        operand
    }

    fn optional_call(&mut self, callee: Expression<'a>, start: u32, is_start_of_chain: bool) -> Expression<'a> {
        let arguments = self.parse_arguments();
        Expression::OptionalCall(OptionalCall {
            data: self.node_data(SyntaxKind::OptionalCallExpression, start),
            callee: self.alloc(callee),
            arguments: self.alloc(arguments),
            is_start_of_chain,
        })
    }

    fn optional_element_access(
        &mut self,
        object: Expression<'a>,
        start: u32,
        is_start_of_chain: bool,
    ) -> Expression<'a> {
        let index = self.parse_element_index();
        Expression::OptionalElementAccess(OptionalElementAccess {
            data: self.node_data(SyntaxKind::OptionalElementAccessExpression, start),
            object: self.alloc(object),
            index: self.alloc(index),
            is_start_of_chain,
        })
    }

    fn optional_property_access(
        &mut self,
        object: Expression<'a>,
        name: Identifier<'a>,
        start: u32,
        is_start_of_chain: bool,
    ) -> Expression<'a> {
        Expression::OptionalPropertyAccess(OptionalPropertyAccess {
            data: self.node_data(SyntaxKind::OptionalPropertyAccessExpression, start),
            object: self.alloc(object),
            name,
            is_start_of_chain,
        })
    }

    fn parse_new_expression(&mut self) -> Expression<'a> {
        if !self.peek(SyntaxKind::NewKeyword) {
            return self.parse_member_expression_no_new();
        }
        let start = self.node_start();
        if self.peek_at(1, SyntaxKind::DotToken) {
            self.eat(SyntaxKind::NewKeyword);
            self.eat(SyntaxKind::DotToken);
            self.eat_predefined(self.names.target);
            return Expression::NewTarget(self.node_data(SyntaxKind::NewTargetExpression, start));
        }

        self.eat(SyntaxKind::NewKeyword);
        if self.peek(SyntaxKind::QuestionDotToken) {
            self.error(&messages::OPTIONAL_CHAINING_FORBIDDEN_IN_NEW_TARGET, &[]);
        }
        let callee = self.nested(Self::parse_new_expression);
        if self.peek(SyntaxKind::QuestionDotToken) {
            self.error(&messages::OPTIONAL_CHAINING_FORBIDDEN_IN_CONSTRUCTION, &[]);
        }
        let arguments = if self.peek(SyntaxKind::OpenParenToken) {
            let arguments = self.parse_arguments();
            Some(self.alloc(arguments))
        } else {
            None
        };
        Expression::New(NewExpression {
            data: self.node_data(SyntaxKind::NewExpression, start),
            callee: self.alloc(callee),
            arguments,
        })
    }

    fn parse_member_expression_no_new(&mut self) -> Expression<'a> {
        let start = self.node_start();
        let mut operand = if self.peek(SyntaxKind::ImportKeyword) && self.peek_at(1, SyntaxKind::DotToken) {
            self.eat(SyntaxKind::ImportKeyword);
            self.eat(SyntaxKind::DotToken);
            self.eat_predefined(self.names.meta);
            Expression::ImportMeta(self.node_data(SyntaxKind::ImportMetaExpression, start))
        } else if self.peek_async_function_start() {
            self.parse_async_function_expression()
        } else if self.peek(SyntaxKind::FunctionKeyword) {
            self.parse_function_expression()
        } else {
            self.parse_primary_expression()
        };
        while self.peek_member_suffix() {
            operand = self.parse_member_suffix(operand, start);
        }
        operand
    }

    pub(crate) fn parse_arguments(&mut self) -> ArgumentList<'a> {
        let start = self.node_start();
        let mut arguments = Vec::new();
        let mut has_trailing_comma = false;
        self.eat(SyntaxKind::OpenParenToken);
        while self.peek(SyntaxKind::DotDotDotToken) || self.peek_expression() {
            let argument = if self.peek(SyntaxKind::DotDotDotToken) {
                self.parse_spread_expression()
            } else {
                self.parse_assignment(InMode::Normal)
            };
            arguments.push(argument);

            if !self.peek(SyntaxKind::CloseParenToken) {
                let comma = self.eat(SyntaxKind::CommaToken);
                if self.peek(SyntaxKind::CloseParenToken) {
                    if !self.config.at_least_8 {
                        self.report_trailing_comma_error(comma, &messages::TRAILING_COMMA_IN_ARGUMENTS);
                    }
                    has_trailing_comma = true;
                }
            }
        }
        self.eat(SyntaxKind::CloseParenToken);
        ArgumentList {
            data: self.node_data(SyntaxKind::ArgumentList, start),
            arguments: self.alloc_slice(arguments),
            has_trailing_comma,
        }
    }

    /// Report at the comma when there is one, else at the next token.
    pub(crate) fn report_trailing_comma_error(
        &mut self,
        comma: Option<TokenInfo>,
        msg: &esparse_diagnostics::DiagnosticMessage,
    ) {
        match comma {
            Some(comma) => self.report_at(comma.pos, comma.end, msg, &[]),
            None => self.error(msg, &[]),
        }
    }

    /// `...expression` in an array literal or argument list.
    pub(crate) fn parse_spread_expression(&mut self) -> Expression<'a> {
        let start = self.node_start();
        self.record_feature(FeatureSet::SPREAD_EXPRESSIONS);
        self.eat(SyntaxKind::DotDotDotToken);
        let expression = self.parse_assignment(InMode::Normal);
        Expression::Spread(SpreadElement {
            data: self.node_data(SyntaxKind::SpreadElement, start),
            expression: self.alloc(expression),
        })
    }

    // ========================================================================
    // Primary expressions
    // ========================================================================

    fn parse_primary_expression(&mut self) -> Expression<'a> {
        match self.peek_kind(0) {
            SyntaxKind::ClassKeyword => Expression::Class(self.parse_class(true)),
            SyntaxKind::SuperKeyword => {
                let token = self.next_token();
                if self.peek(SyntaxKind::QuestionDotToken) {
                    self.error(&messages::OPTIONAL_CHAINING_FORBIDDEN_IN_SUPER, &[]);
                }
                Expression::Super(NodeData::new(SyntaxKind::SuperExpression, token.pos, token.end))
            }
            SyntaxKind::ThisKeyword => {
                let token = self.next_token();
                Expression::This(NodeData::new(SyntaxKind::ThisExpression, token.pos, token.end))
            }
            SyntaxKind::ImportKeyword => self.parse_dynamic_import(),
            SyntaxKind::NumericLiteral
            | SyntaxKind::BigIntLiteral
            | SyntaxKind::StringLiteral
            | SyntaxKind::TrueKeyword
            | SyntaxKind::FalseKeyword
            | SyntaxKind::NullKeyword => Expression::Literal(self.parse_literal()),
            SyntaxKind::NoSubstitutionTemplateLiteral | SyntaxKind::TemplateHead => {
                let start = self.node_start();
                self.parse_template_literal(None, start)
            }
            SyntaxKind::OpenBracketToken => self.parse_array_literal(),
            SyntaxKind::OpenBraceToken => self.parse_object_literal(),
            SyntaxKind::OpenParenToken => self.parse_cover_parenthesized_expression(),
            SyntaxKind::SlashToken | SyntaxKind::SlashEqualsToken => self.parse_regular_expression(),
            _ if self.peek_id(0) => self.parse_identifier_expression(),
            _ => self.parse_missing_primary_expression(),
        }
    }

    /// An identifier reference, or a placeholder if the next token is not
    /// an identifier.
    pub(crate) fn parse_identifier_expression(&mut self) -> Expression<'a> {
        match self.eat_id() {
            Some(id) => Expression::Identifier(id),
            None => self.missing_expression(),
        }
    }

    /// Consume any token and report it as unexpected.
    fn parse_missing_primary_expression(&mut self) -> Expression<'a> {
        let token = self.next_token();
        self.report_at(token.pos, token.end, &messages::PRIMARY_EXPRESSION_EXPECTED, &[]);
        Expression::Missing(NodeData::new(SyntaxKind::MissingExpression, token.pos, token.end))
    }

    /// A numeric, bigint, string, boolean or null literal.
    pub(crate) fn parse_literal(&mut self) -> Literal<'a> {
        let token = self.next_token();
        match token.kind {
            SyntaxKind::StringLiteral => {
                if token.flags.contains(TokenFlags::UNESCAPED_LINE_SEPARATOR) {
                    self.record_feature(FeatureSet::UNESCAPED_UNICODE_LINE_OR_PARAGRAPH_SEP);
                }
            }
            SyntaxKind::NumericLiteral | SyntaxKind::BigIntLiteral => {
                if token.flags.contains(TokenFlags::CONTAINS_SEPARATOR) {
                    self.record_feature(FeatureSet::NUMERIC_SEPARATOR);
                }
                if token.kind == SyntaxKind::BigIntLiteral {
                    self.record_feature(FeatureSet::BIGINT);
                }
            }
            _ => {}
        }
        self.literal_from_token(&token)
    }

    fn parse_regular_expression(&mut self) -> Expression<'a> {
        let token = self.stream.next_regex();
        self.report_token_error(&token);
        self.record_feature(FeatureSet::REGEXP_SYNTAX);
        Expression::Literal(self.literal_from_token(&token))
    }

    fn parse_dynamic_import(&mut self) -> Expression<'a> {
        let start = self.node_start();
        self.eat(SyntaxKind::ImportKeyword);
        if self.peek(SyntaxKind::QuestionDotToken) {
            self.error(&messages::OPTIONAL_CHAINING_FORBIDDEN_IN_IMPORT, &[]);
        }
        self.eat(SyntaxKind::OpenParenToken);
        let argument = self.parse_assignment(InMode::Normal);
        self.eat(SyntaxKind::CloseParenToken);
        self.record_feature(FeatureSet::DYNAMIC_IMPORT);
        Expression::DynamicImport(DynamicImport {
            data: self.node_data(SyntaxKind::DynamicImportExpression, start),
            argument: self.alloc(argument),
        })
    }

    /// `( Expression )`, or the start of an arrow parameter list:
    /// `()`, `(...rest)`, `(a, )` and `(a, ...rest)`.
    fn parse_cover_parenthesized_expression(&mut self) -> Expression<'a> {
        let cursor = self.stream.position();
        let start = self.node_start();
        self.eat(SyntaxKind::OpenParenToken);

        if self.eat_opt(SyntaxKind::CloseParenToken).is_some() {
            return self.finish_cover_parameters(start, Vec::new(), false);
        }
        if self.peek(SyntaxKind::DotDotDotToken) {
            let rest = self.parse_parameter();
            self.eat(SyntaxKind::CloseParenToken);
            return self.finish_cover_parameters(start, vec![rest], false);
        }

        let mut expression = self.parse_expression();
        if self.peek(SyntaxKind::CommaToken) {
            if self.peek_at(1, SyntaxKind::CloseParenToken) {
                // `(a, )` is only valid as parameters; re-read it as such so
                // the trailing comma is recorded.
                self.stream.set_position(cursor);
                let parameters = self.parse_formal_parameter_list();
                if !self.peek(SyntaxKind::EqualsGreaterThanToken) {
                    self.report_at(
                        parameters.data.range.pos,
                        parameters.data.range.end,
                        &messages::INVALID_PARENTHESIZED_EXPRESSION,
                        &[],
                    );
                }
                return Expression::FormalParameters(self.alloc(parameters));
            }
            // `(a, ...rest)` stays a comma expression until the arrow
            // re-reads it as a parameter list.
            self.eat(SyntaxKind::CommaToken);
            let rest = self.parse_parameter();
            let expressions = self.alloc_slice(vec![expression, rest]);
            expression = Expression::Comma(CommaExpression {
                data: self.node_data(SyntaxKind::CommaExpression, start),
                expressions,
            });
            self.eat(SyntaxKind::CloseParenToken);
            if !self.peek(SyntaxKind::EqualsGreaterThanToken) {
                self.report_at(
                    start,
                    self.last_end(),
                    &messages::INVALID_PARENTHESIZED_EXPRESSION,
                    &[],
                );
            }
        } else {
            self.eat(SyntaxKind::CloseParenToken);
        }
        Expression::Parenthesized(ParenthesizedExpression {
            data: self.node_data(SyntaxKind::ParenthesizedExpression, start),
            expression: self.alloc(expression),
        })
    }

    /// `()` or `(...rest)`: a parameter list if `=>` follows, an error otherwise.
    fn finish_cover_parameters(
        &mut self,
        start: u32,
        parameters: Vec<Expression<'a>>,
        has_trailing_comma: bool,
    ) -> Expression<'a> {
        if self.peek(SyntaxKind::EqualsGreaterThanToken) {
            let list = FormalParameterList {
                data: self.node_data(SyntaxKind::FormalParameterList, start),
                parameters: self.alloc_slice(parameters),
                has_trailing_comma,
            };
            return Expression::FormalParameters(self.alloc(list));
        }
        self.error(&messages::INVALID_PARENTHESIZED_EXPRESSION, &[]);
        Expression::Missing(self.node_data(SyntaxKind::MissingExpression, start))
    }

    // ========================================================================
    // Templates and array literals
    // ========================================================================

    /// A template literal, tagged when `tag` is given. Escape errors in the
    /// segments are only reported for untagged templates.
    pub(crate) fn parse_template_literal(
        &mut self,
        tag: Option<&'a Expression<'a>>,
        start: u32,
    ) -> Expression<'a> {
        let tagged = tag.is_some();
        let mut elements = Vec::new();

        let head = self.next_token();
        self.report_template_token_error(&head, tagged);
        elements.push(TemplatePart::Portion(self.template_portion(&head)));

        if head.kind == SyntaxKind::TemplateHead {
            loop {
                let substitution = self.parse_expression();
                elements.push(TemplatePart::Substitution(self.alloc(substitution)));

                let token = self.stream.next_template_continuation();
                if token.kind == SyntaxKind::Unknown {
                    self.report_token_error(&token);
                    break;
                }
                self.report_template_token_error(&token, tagged);
                elements.push(TemplatePart::Portion(self.template_portion(&token)));
                if token.kind != SyntaxKind::TemplateMiddle {
                    break;
                }
            }
        }

        Expression::Template(TemplateLiteral {
            data: self.node_data(SyntaxKind::TemplateLiteralExpression, start),
            tag,
            elements: self.alloc_slice(elements),
        })
    }

    fn report_template_token_error(&mut self, token: &TokenInfo, tagged: bool) {
        match token.error {
            Some(error) if tagged && error.is_escape_error() => {}
            Some(_) => self.report_token_error(token),
            None => {}
        }
    }

    fn template_portion(&self, token: &TokenInfo) -> TemplatePortion<'a> {
        let cooked = if token.flags.contains(TokenFlags::CONTAINS_INVALID_ESCAPE) {
            None
        } else {
            Some(self.alloc_str(&token.value))
        };
        TemplatePortion {
            data: NodeData::new(SyntaxKind::TemplateLiteralPortion, token.pos, token.end),
            raw: self.alloc_str(&token.text),
            cooked,
        }
    }

    fn parse_array_literal(&mut self) -> Expression<'a> {
        let start = self.node_start();
        let mut elements = Vec::new();
        let mut trailing_comma = None;

        self.eat(SyntaxKind::OpenBracketToken);
        while self.peek(SyntaxKind::CommaToken)
            || self.peek(SyntaxKind::DotDotDotToken)
            || self.peek_expression()
        {
            if self.peek(SyntaxKind::CommaToken) {
                // An elided element sits right before its comma.
                let comma = self.next_token();
                elements.push(Expression::Hole(NodeData::new(
                    SyntaxKind::ArrayHole,
                    comma.pos,
                    comma.pos,
                )));
                trailing_comma = Some(comma);
                continue;
            }
            trailing_comma = None;
            let element = if self.peek(SyntaxKind::DotDotDotToken) {
                self.parse_spread_expression()
            } else {
                self.parse_assignment(InMode::Normal)
            };
            elements.push(element);
            if !self.peek(SyntaxKind::CloseBracketToken) {
                trailing_comma = self.eat(SyntaxKind::CommaToken);
            }
        }
        self.eat(SyntaxKind::CloseBracketToken);

        let has_trailing_comma = trailing_comma.is_some();
        self.maybe_report_trailing_comma(trailing_comma);
        Expression::ArrayLiteral(ArrayLiteral {
            data: self.node_data(SyntaxKind::ArrayLiteralExpression, start),
            elements: self.alloc_slice(elements),
            has_trailing_comma,
        })
    }

    /// Record a trailing comma in an array or object literal, with a
    /// warning in ES3 mode.
    pub(crate) fn maybe_report_trailing_comma(&mut self, comma: Option<TokenInfo>) {
        let Some(comma) = comma else {
            return;
        };
        self.record_feature(FeatureSet::TRAILING_COMMA);
        if self.config.warn_trailing_commas {
            self.report_at(
                comma.pos,
                comma.end,
                &messages::TRAILING_COMMA_IN_OBJECT_INITIALIZER,
                &[],
            );
        }
    }
}

fn is_logical_and_or(expr: &Expression<'_>) -> bool {
    matches!(
        expr,
        Expression::Binary(binary)
            if matches!(binary.operator, SyntaxKind::AmpersandAmpersandToken | SyntaxKind::BarBarToken)
    )
}
