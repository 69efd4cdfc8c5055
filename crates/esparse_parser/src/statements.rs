//! Statement grammar.
//!
//! There are two ways into a statement. `parse_source_element` (and its
//! alias `parse_statement`) also accepts function and class declarations
//! and `let`; `parse_statement_standard` covers the remaining forms and is
//! only reached from `parse_source_element`.

use esparse_ast::node::*;
use esparse_ast::syntax_kind::SyntaxKind;
use esparse_ast::types::FeatureSet;
use esparse_diagnostics::messages;

use crate::parser::{InMode, Parser, PatternKind, MAX_RECURSION_DEPTH};

impl<'a> Parser<'a> {
    // ========================================================================
    // Source elements
    // ========================================================================

    /// A top-level item: an import or export declaration, or a source element.
    pub(crate) fn parse_script_element(&mut self) -> Statement<'a> {
        if self.peek_import_declaration() {
            return self.parse_import_declaration();
        }
        if self.peek(SyntaxKind::ExportKeyword) {
            return self.parse_export_declaration();
        }
        self.parse_source_element()
    }

    pub(crate) fn parse_source_element(&mut self) -> Statement<'a> {
        self.recursion_depth += 1;
        if self.recursion_depth > MAX_RECURSION_DEPTH {
            self.recursion_depth -= 1;
            self.abandon_too_deep();
            return self.missing_statement();
        }
        let stmt = self.parse_source_element_worker();
        self.recursion_depth -= 1;
        stmt
    }

    fn parse_source_element_worker(&mut self) -> Statement<'a> {
        if self.peek_async_function_start() {
            return self.parse_async_function_declaration();
        }
        match self.peek_kind(0) {
            SyntaxKind::FunctionKeyword => self.parse_function_declaration(),
            SyntaxKind::ClassKeyword => Statement::ClassDeclaration(self.parse_class(false)),
            SyntaxKind::LetKeyword => self.parse_variable_statement(),
            _ => self.parse_statement_standard(),
        }
    }

    /// A statement in a single-statement position (if/else branches, loop
    /// bodies, labelled and `with` bodies). Declarations are accepted here
    /// too, like everywhere else.
    pub(crate) fn parse_statement(&mut self) -> Statement<'a> {
        self.parse_source_element()
    }

    pub(crate) fn peek_source_element(&mut self) -> bool {
        self.peek_function()
            || self.peek_statement_standard()
            || matches!(
                self.peek_kind(0),
                SyntaxKind::LetKeyword | SyntaxKind::ClassKeyword
            )
    }

    pub(crate) fn parse_source_element_list(&mut self) -> Vec<Statement<'a>> {
        let mut elements = Vec::new();
        while self.peek_source_element() {
            elements.push(self.parse_source_element());
        }
        elements
    }

    fn peek_statement_standard(&mut self) -> bool {
        match self.peek_kind(0) {
            SyntaxKind::OpenBraceToken
            | SyntaxKind::VarKeyword
            | SyntaxKind::ConstKeyword
            | SyntaxKind::SemicolonToken
            | SyntaxKind::IfKeyword
            | SyntaxKind::DoKeyword
            | SyntaxKind::WhileKeyword
            | SyntaxKind::ForKeyword
            | SyntaxKind::ContinueKeyword
            | SyntaxKind::BreakKeyword
            | SyntaxKind::ReturnKeyword
            | SyntaxKind::WithKeyword
            | SyntaxKind::SwitchKeyword
            | SyntaxKind::ThrowKeyword
            | SyntaxKind::TryKeyword
            | SyntaxKind::DebuggerKeyword
            | SyntaxKind::YieldKeyword
            | SyntaxKind::Identifier
            | SyntaxKind::ThisKeyword
            | SyntaxKind::ClassKeyword
            | SyntaxKind::SuperKeyword
            | SyntaxKind::NumericLiteral
            | SyntaxKind::BigIntLiteral
            | SyntaxKind::StringLiteral
            | SyntaxKind::NoSubstitutionTemplateLiteral
            | SyntaxKind::TemplateHead
            | SyntaxKind::NullKeyword
            | SyntaxKind::TrueKeyword
            | SyntaxKind::SlashToken
            | SyntaxKind::SlashEqualsToken
            | SyntaxKind::FalseKeyword
            | SyntaxKind::OpenBracketToken
            | SyntaxKind::OpenParenToken
            | SyntaxKind::NewKeyword
            | SyntaxKind::DeleteKeyword
            | SyntaxKind::VoidKeyword
            | SyntaxKind::TypeOfKeyword
            | SyntaxKind::PlusPlusToken
            | SyntaxKind::MinusMinusToken
            | SyntaxKind::PlusToken
            | SyntaxKind::MinusToken
            | SyntaxKind::TildeToken
            | SyntaxKind::ExclamationToken
            | SyntaxKind::ImportKeyword => true,
            _ => self.peek_id(0),
        }
    }

    fn parse_statement_standard(&mut self) -> Statement<'a> {
        match self.peek_kind(0) {
            SyntaxKind::OpenBraceToken => Statement::Block(self.parse_block()),
            SyntaxKind::ConstKeyword | SyntaxKind::VarKeyword => self.parse_variable_statement(),
            SyntaxKind::SemicolonToken => self.parse_empty_statement(),
            SyntaxKind::IfKeyword => self.parse_if_statement(),
            SyntaxKind::DoKeyword => self.parse_do_while_statement(),
            SyntaxKind::WhileKeyword => self.parse_while_statement(),
            SyntaxKind::ForKeyword => self.parse_for_statement(),
            SyntaxKind::ContinueKeyword => self.parse_jump_statement(SyntaxKind::ContinueStatement),
            SyntaxKind::BreakKeyword => self.parse_jump_statement(SyntaxKind::BreakStatement),
            SyntaxKind::ReturnKeyword => self.parse_return_statement(),
            SyntaxKind::WithKeyword => self.parse_with_statement(),
            SyntaxKind::SwitchKeyword => self.parse_switch_statement(),
            SyntaxKind::ThrowKeyword => self.parse_throw_statement(),
            SyntaxKind::TryKeyword => self.parse_try_statement(),
            SyntaxKind::DebuggerKeyword => self.parse_debugger_statement(),
            _ => {
                if self.peek_labelled_statement() {
                    self.parse_labelled_statement()
                } else {
                    self.parse_expression_statement()
                }
            }
        }
    }

    pub(crate) fn missing_statement(&self) -> Statement<'a> {
        let end = self.last_end();
        Statement::MissingStatement(NodeData::new(SyntaxKind::MissingStatement, end, end))
    }

    // ========================================================================
    // Blocks and declarations
    // ========================================================================

    pub(crate) fn parse_block(&mut self) -> Block<'a> {
        let start = self.node_start();
        self.eat(SyntaxKind::OpenBraceToken);
        let statements = self.parse_source_element_list();
        self.eat(SyntaxKind::CloseBraceToken);
        Block {
            data: self.node_data(SyntaxKind::Block, start),
            statements: self.alloc_slice(statements),
        }
    }

    pub(crate) fn parse_variable_statement(&mut self) -> Statement<'a> {
        let start = self.node_start();
        match self.parse_variable_declaration_list(InMode::Normal) {
            Some(declaration_list) => {
                self.eat_possibly_implicit_semicolon();
                Statement::VariableStatement(VariableStatement {
                    data: self.node_data(SyntaxKind::VariableStatement, start),
                    declaration_list,
                })
            }
            None => {
                self.next_token();
                self.missing_statement()
            }
        }
    }

    /// `var`/`let`/`const` and one or more declarations. Reports and returns
    /// `None` without consuming anything when no declaration keyword follows.
    pub(crate) fn parse_variable_declaration_list(
        &mut self,
        in_mode: InMode,
    ) -> Option<VariableDeclarationList<'a>> {
        let start = self.node_start();
        let Some(declaration_kind) = DeclarationKind::from_token(self.peek_kind(0)) else {
            self.error(&messages::EXPECTED_DECLARATION, &[]);
            return None;
        };
        self.next_token();

        let mut declarations = vec![self.parse_variable_declaration(declaration_kind, in_mode)];
        while self.eat_opt(SyntaxKind::CommaToken).is_some() {
            declarations.push(self.parse_variable_declaration(declaration_kind, in_mode));
        }
        Some(VariableDeclarationList {
            data: self.node_data(SyntaxKind::VariableDeclarationList, start),
            declaration_kind,
            declarations: self.alloc_slice(declarations),
        })
    }

    fn parse_variable_declaration(
        &mut self,
        declaration_kind: DeclarationKind,
        in_mode: InMode,
    ) -> VariableDeclaration<'a> {
        let start = self.node_start();
        let target = if self.peek_pattern_start() {
            self.parse_pattern(PatternKind::Initializer)
        } else {
            self.parse_identifier_expression()
        };

        let initializer = if self.peek(SyntaxKind::EqualsToken) {
            let init = self.parse_initializer(in_mode);
            Some(self.alloc(init))
        } else {
            if in_mode != InMode::NoIn {
                self.report_missing_initializer(declaration_kind, &target);
            }
            None
        };

        VariableDeclaration {
            data: self.node_data(SyntaxKind::VariableDeclaration, start),
            target: self.alloc(target),
            initializer,
        }
    }

    /// `= <assignment expression>`
    pub(crate) fn parse_initializer(&mut self, in_mode: InMode) -> Expression<'a> {
        self.eat(SyntaxKind::EqualsToken);
        self.parse_assignment(in_mode)
    }

    fn report_missing_initializer(&mut self, declaration_kind: DeclarationKind, target: &Expression<'a>) {
        if declaration_kind == DeclarationKind::Const {
            self.report_at(target.pos(), target.end(), &messages::CONST_MUST_HAVE_INITIALIZER, &[]);
        } else if matches!(target, Expression::ArrayPattern(_) | Expression::ObjectPattern(_)) {
            self.report_at(
                target.pos(),
                target.end(),
                &messages::DESTRUCTURING_MUST_HAVE_INITIALIZER,
                &[],
            );
        }
    }

    // ========================================================================
    // Simple statements
    // ========================================================================

    fn parse_empty_statement(&mut self) -> Statement<'a> {
        let start = self.node_start();
        self.eat(SyntaxKind::SemicolonToken);
        Statement::EmptyStatement(self.node_data(SyntaxKind::EmptyStatement, start))
    }

    fn parse_expression_statement(&mut self) -> Statement<'a> {
        let start = self.node_start();
        let expression = self.parse_expression();
        self.eat_possibly_implicit_semicolon();
        Statement::ExpressionStatement(ExpressionStatement {
            data: self.node_data(SyntaxKind::ExpressionStatement, start),
            expression: self.alloc(expression),
        })
    }

    fn parse_if_statement(&mut self) -> Statement<'a> {
        let start = self.node_start();
        self.eat(SyntaxKind::IfKeyword);
        self.eat(SyntaxKind::OpenParenToken);
        let condition = self.parse_expression();
        self.eat(SyntaxKind::CloseParenToken);
        let then_statement = self.parse_statement();
        let else_statement = if self.eat_opt(SyntaxKind::ElseKeyword).is_some() {
            let stmt = self.parse_statement();
            Some(self.alloc(stmt))
        } else {
            None
        };
        Statement::IfStatement(IfStatement {
            data: self.node_data(SyntaxKind::IfStatement, start),
            condition: self.alloc(condition),
            then_statement: self.alloc(then_statement),
            else_statement,
        })
    }

    fn parse_do_while_statement(&mut self) -> Statement<'a> {
        let start = self.node_start();
        self.eat(SyntaxKind::DoKeyword);
        let body = self.parse_statement();
        self.eat(SyntaxKind::WhileKeyword);
        self.eat(SyntaxKind::OpenParenToken);
        let condition = self.parse_expression();
        self.eat(SyntaxKind::CloseParenToken);
        // The semicolon after a do-while is optional.
        self.eat_opt(SyntaxKind::SemicolonToken);
        Statement::DoStatement(DoStatement {
            data: self.node_data(SyntaxKind::DoStatement, start),
            body: self.alloc(body),
            condition: self.alloc(condition),
        })
    }

    fn parse_while_statement(&mut self) -> Statement<'a> {
        let start = self.node_start();
        self.eat(SyntaxKind::WhileKeyword);
        self.eat(SyntaxKind::OpenParenToken);
        let condition = self.parse_expression();
        self.eat(SyntaxKind::CloseParenToken);
        let body = self.parse_statement();
        Statement::WhileStatement(WhileStatement {
            data: self.node_data(SyntaxKind::WhileStatement, start),
            condition: self.alloc(condition),
            body: self.alloc(body),
        })
    }

    /// `continue` or `break`, with an optional label on the same line.
    fn parse_jump_statement(&mut self, kind: SyntaxKind) -> Statement<'a> {
        let start = self.node_start();
        self.next_token();
        let label = if self.peek_implicit_semicolon(0) {
            None
        } else {
            self.eat_id_opt()
        };
        self.eat_possibly_implicit_semicolon();
        let jump = JumpStatement {
            data: self.node_data(kind, start),
            label,
        };
        if kind == SyntaxKind::ContinueStatement {
            Statement::ContinueStatement(jump)
        } else {
            Statement::BreakStatement(jump)
        }
    }

    fn parse_return_statement(&mut self) -> Statement<'a> {
        let start = self.node_start();
        self.eat(SyntaxKind::ReturnKeyword);
        let expression = if self.peek_implicit_semicolon(0) {
            None
        } else {
            let expr = self.parse_expression();
            Some(self.alloc(expr))
        };
        self.eat_possibly_implicit_semicolon();
        Statement::ReturnStatement(ReturnStatement {
            data: self.node_data(SyntaxKind::ReturnStatement, start),
            expression,
        })
    }

    fn parse_with_statement(&mut self) -> Statement<'a> {
        let start = self.node_start();
        self.eat(SyntaxKind::WithKeyword);
        self.eat(SyntaxKind::OpenParenToken);
        let expression = self.parse_expression();
        self.eat(SyntaxKind::CloseParenToken);
        let body = self.parse_statement();
        Statement::WithStatement(WithStatement {
            data: self.node_data(SyntaxKind::WithStatement, start),
            expression: self.alloc(expression),
            body: self.alloc(body),
        })
    }

    fn peek_labelled_statement(&mut self) -> bool {
        self.peek_id(0) && self.peek_at(1, SyntaxKind::ColonToken)
    }

    fn parse_labelled_statement(&mut self) -> Statement<'a> {
        let start = self.node_start();
        let label = self.eat_id_or_keyword_as_id();
        self.eat(SyntaxKind::ColonToken);
        let statement = self.parse_statement();
        Statement::LabeledStatement(LabeledStatement {
            data: self.node_data(SyntaxKind::LabeledStatement, start),
            label,
            statement: self.alloc(statement),
        })
    }

    fn parse_throw_statement(&mut self) -> Statement<'a> {
        let start = self.node_start();
        self.eat(SyntaxKind::ThrowKeyword);
        let expression = if self.peek_implicit_semicolon(0) {
            self.error(&messages::NEWLINE_AFTER_THROW, &[]);
            self.missing_expression()
        } else {
            self.parse_expression()
        };
        self.eat_possibly_implicit_semicolon();
        Statement::ThrowStatement(ThrowStatement {
            data: self.node_data(SyntaxKind::ThrowStatement, start),
            expression: self.alloc(expression),
        })
    }

    fn parse_debugger_statement(&mut self) -> Statement<'a> {
        let start = self.node_start();
        self.eat(SyntaxKind::DebuggerKeyword);
        self.eat_possibly_implicit_semicolon();
        Statement::DebuggerStatement(self.node_data(SyntaxKind::DebuggerStatement, start))
    }

    // ========================================================================
    // for statements
    // ========================================================================

    fn parse_for_statement(&mut self) -> Statement<'a> {
        let start = self.node_start();
        self.eat(SyntaxKind::ForKeyword);
        let awaited = self.peek_predefined(0, self.names.await_);
        if awaited {
            self.next_token();
        }
        self.eat(SyntaxKind::OpenParenToken);

        if matches!(
            self.peek_kind(0),
            SyntaxKind::VarKeyword | SyntaxKind::LetKeyword | SyntaxKind::ConstKeyword
        ) {
            if let Some(list) = self.parse_variable_declaration_list(InMode::NoIn) {
                return self.parse_for_with_declarations(start, awaited, list);
            }
        }

        if self.peek(SyntaxKind::SemicolonToken) {
            return self.parse_for_rest(start, awaited, None);
        }

        let initializer_cursor = self.stream.position();
        let mut initializer = self.parse_expression_no_in();
        if self.peek(SyntaxKind::InKeyword)
            || self.peek(SyntaxKind::EqualsToken)
            || self.peek_predefined(0, self.names.of)
        {
            initializer = self.transform_left_hand_side_expression(initializer, initializer_cursor);
            if !initializer.is_valid_assignment_target() {
                self.error(&messages::INVALID_ASSIGNMENT_TARGET, &[]);
            }
        }

        if !matches!(
            initializer,
            Expression::Binary(_) | Expression::Assignment(_) | Expression::Comma(_)
        ) {
            if self.peek(SyntaxKind::InKeyword) {
                if awaited {
                    self.error(&messages::FOR_AWAIT_ONLY_OF, &[]);
                }
                let init = ForInitializer::Expression(self.alloc(initializer));
                return self.parse_for_in_rest(start, init);
            }
            if self.peek_predefined(0, self.names.of) {
                let init = ForInitializer::Expression(self.alloc(initializer));
                return self.parse_for_of_rest(start, awaited, init);
            }
        }

        let init = ForInitializer::Expression(self.alloc(initializer));
        self.parse_for_rest(start, awaited, Some(init))
    }

    fn parse_for_with_declarations(
        &mut self,
        start: u32,
        awaited: bool,
        list: VariableDeclarationList<'a>,
    ) -> Statement<'a> {
        let count = list.declarations.len();
        let first_initializer = list
            .declarations
            .first()
            .filter(|decl| decl.initializer.is_some())
            .map(|decl| decl.data.range);

        if self.peek(SyntaxKind::InKeyword) {
            if awaited {
                self.error(&messages::FOR_AWAIT_ONLY_OF, &[]);
            }
            if count > 1 {
                self.error(&messages::FOR_IN_MULTIPLE_DECLARATIONS, &[]);
            }
            if let Some(range) = first_initializer {
                if self.config.at_least_6 {
                    self.report_at(range.pos, range.end, &messages::FOR_IN_INITIALIZER, &[]);
                } else {
                    self.report_at(
                        range.pos,
                        range.end,
                        &messages::FOR_IN_SHOULD_NOT_HAVE_INITIALIZER,
                        &[],
                    );
                }
            }
            return self.parse_for_in_rest(start, ForInitializer::VariableDeclarations(list));
        }

        if self.peek_predefined(0, self.names.of) {
            let (multiple, initialized) = if awaited {
                (
                    &messages::FOR_AWAIT_OF_MULTIPLE_DECLARATIONS,
                    &messages::FOR_AWAIT_OF_INITIALIZER,
                )
            } else {
                (&messages::FOR_OF_MULTIPLE_DECLARATIONS, &messages::FOR_OF_INITIALIZER)
            };
            if count > 1 {
                self.error(multiple, &[]);
            }
            if let Some(range) = first_initializer {
                self.report_at(range.pos, range.end, initialized, &[]);
            }
            return self.parse_for_of_rest(start, awaited, ForInitializer::VariableDeclarations(list));
        }

        self.check_classic_for_initializers(&list);
        self.parse_for_rest(start, awaited, Some(ForInitializer::VariableDeclarations(list)))
    }

    /// Declarations of a classic `for (;;)` head were parsed without the
    /// initializer checks, since `in`/`of` could still have followed.
    fn check_classic_for_initializers(&mut self, list: &VariableDeclarationList<'a>) {
        for decl in list.declarations.iter() {
            if decl.initializer.is_none() {
                self.report_missing_initializer(list.declaration_kind, decl.target);
            }
        }
    }

    fn parse_for_in_rest(&mut self, start: u32, initializer: ForInitializer<'a>) -> Statement<'a> {
        self.eat(SyntaxKind::InKeyword);
        let collection = self.parse_expression();
        self.eat(SyntaxKind::CloseParenToken);
        let body = self.parse_statement();
        Statement::ForInStatement(ForInStatement {
            data: self.node_data(SyntaxKind::ForInStatement, start),
            initializer,
            collection: self.alloc(collection),
            body: self.alloc(body),
        })
    }

    fn parse_for_of_rest(
        &mut self,
        start: u32,
        awaited: bool,
        initializer: ForInitializer<'a>,
    ) -> Statement<'a> {
        if awaited && !self.in_async_context() {
            self.report_at(start, self.last_end(), &messages::FOR_AWAIT_OUTSIDE_ASYNC, &[]);
        }
        self.eat_predefined(self.names.of);
        let collection = self.parse_expression();
        self.eat(SyntaxKind::CloseParenToken);
        let body = self.parse_statement();

        let kind = if awaited {
            SyntaxKind::ForAwaitOfStatement
        } else {
            SyntaxKind::ForOfStatement
        };
        let stmt = ForOfStatement {
            data: self.node_data(kind, start),
            initializer,
            collection: self.alloc(collection),
            body: self.alloc(body),
        };
        if awaited {
            Statement::ForAwaitOfStatement(stmt)
        } else {
            Statement::ForOfStatement(stmt)
        }
    }

    /// The classic `for (init; condition; incrementor)` after its initializer.
    fn parse_for_rest(
        &mut self,
        start: u32,
        awaited: bool,
        initializer: Option<ForInitializer<'a>>,
    ) -> Statement<'a> {
        if awaited {
            self.error(&messages::FOR_AWAIT_ONLY_OF, &[]);
        }
        self.eat(SyntaxKind::SemicolonToken);
        let condition = if self.peek(SyntaxKind::SemicolonToken) {
            None
        } else {
            let expr = self.parse_expression();
            Some(self.alloc(expr))
        };
        self.eat(SyntaxKind::SemicolonToken);
        let incrementor = if self.peek(SyntaxKind::CloseParenToken) {
            None
        } else {
            let expr = self.parse_expression();
            Some(self.alloc(expr))
        };
        self.eat(SyntaxKind::CloseParenToken);
        let body = self.parse_statement();
        Statement::ForStatement(ForStatement {
            data: self.node_data(SyntaxKind::ForStatement, start),
            initializer,
            condition,
            incrementor,
            body: self.alloc(body),
        })
    }

    // ========================================================================
    // switch and try
    // ========================================================================

    fn parse_switch_statement(&mut self) -> Statement<'a> {
        let start = self.node_start();
        self.eat(SyntaxKind::SwitchKeyword);
        self.eat(SyntaxKind::OpenParenToken);
        let expression = self.parse_expression();
        self.eat(SyntaxKind::CloseParenToken);
        self.eat(SyntaxKind::OpenBraceToken);

        let mut clauses = Vec::new();
        let mut found_default = false;
        loop {
            match self.peek_kind(0) {
                SyntaxKind::CaseKeyword => {
                    let clause_start = self.node_start();
                    self.next_token();
                    let test = self.parse_expression();
                    self.eat(SyntaxKind::ColonToken);
                    let statements = self.parse_source_element_list();
                    clauses.push(CaseClause {
                        data: self.node_data(SyntaxKind::CaseClause, clause_start),
                        expression: Some(self.alloc(test)),
                        statements: self.alloc_slice(statements),
                    });
                }
                SyntaxKind::DefaultKeyword => {
                    if found_default {
                        self.error(&messages::MULTIPLE_DEFAULT_CLAUSES, &[]);
                    }
                    found_default = true;
                    let clause_start = self.node_start();
                    self.next_token();
                    self.eat(SyntaxKind::ColonToken);
                    let statements = self.parse_source_element_list();
                    clauses.push(CaseClause {
                        data: self.node_data(SyntaxKind::DefaultClause, clause_start),
                        expression: None,
                        statements: self.alloc_slice(statements),
                    });
                }
                _ => break,
            }
        }
        self.eat(SyntaxKind::CloseBraceToken);

        Statement::SwitchStatement(SwitchStatement {
            data: self.node_data(SyntaxKind::SwitchStatement, start),
            expression: self.alloc(expression),
            clauses: self.alloc_slice(clauses),
        })
    }

    fn parse_try_statement(&mut self) -> Statement<'a> {
        let start = self.node_start();
        self.eat(SyntaxKind::TryKeyword);
        let try_block = self.parse_block();

        let catch_clause = if self.peek(SyntaxKind::CatchKeyword) {
            let clause = self.parse_catch_clause();
            Some(self.alloc(clause))
        } else {
            None
        };
        let finally_block = if self.eat_opt(SyntaxKind::FinallyKeyword).is_some() {
            let block = self.parse_block();
            Some(self.alloc(block))
        } else {
            None
        };
        if catch_clause.is_none() && finally_block.is_none() {
            self.error(&messages::CATCH_OR_FINALLY_EXPECTED, &[]);
        }

        Statement::TryStatement(TryStatement {
            data: self.node_data(SyntaxKind::TryStatement, start),
            try_block: self.alloc(try_block),
            catch_clause,
            finally_block,
        })
    }

    fn parse_catch_clause(&mut self) -> CatchClause<'a> {
        let start = self.node_start();
        self.eat(SyntaxKind::CatchKeyword);
        let binding = if self.eat_opt(SyntaxKind::OpenParenToken).is_some() {
            let binding = if self.peek_pattern_start() {
                self.parse_pattern(PatternKind::Initializer)
            } else {
                self.parse_identifier_expression()
            };
            self.eat(SyntaxKind::CloseParenToken);
            Some(self.alloc(binding))
        } else {
            self.record_feature(FeatureSet::OPTIONAL_CATCH_BINDING);
            None
        };
        let block = self.parse_block();
        CatchClause {
            data: self.node_data(SyntaxKind::CatchClause, start),
            binding,
            block: self.alloc(block),
        }
    }
}
