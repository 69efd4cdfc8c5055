//! Import and export declarations.

use esparse_ast::node::*;
use esparse_ast::syntax_kind::SyntaxKind;
use esparse_diagnostics::messages;

use crate::parser::{InMode, Parser};

impl<'a> Parser<'a> {
    // ========================================================================
    // Imports
    // ========================================================================

    /// `import` followed by something other than `(` or `.`, which would
    /// start a dynamic import or `import.meta`.
    pub(crate) fn peek_import_declaration(&mut self) -> bool {
        self.peek(SyntaxKind::ImportKeyword)
            && (self.peek_id_or_keyword(1)
                || matches!(
                    self.peek_kind(1),
                    SyntaxKind::StringLiteral | SyntaxKind::OpenBraceToken | SyntaxKind::AsteriskToken
                ))
    }

    pub(crate) fn parse_import_declaration(&mut self) -> Statement<'a> {
        let start = self.node_start();
        self.eat(SyntaxKind::ImportKeyword);

        // import "module";
        if self.peek(SyntaxKind::StringLiteral) {
            let module_specifier = self.parse_module_specifier();
            self.eat_possibly_implicit_semicolon();
            return Statement::ImportDeclaration(ImportDeclaration {
                data: self.node_data(SyntaxKind::ImportDeclaration, start),
                default_binding: None,
                namespace_binding: None,
                specifiers: None,
                module_specifier,
            });
        }

        let mut default_binding = None;
        let mut namespace_binding = None;
        let mut specifiers = None;

        let mut parse_explicit_names = true;
        if self.peek_id_or_keyword(0) {
            let name = self.eat_id_or_keyword_as_id();
            self.report_reserved_binding(&name);
            default_binding = Some(name);
            if self.eat_opt(SyntaxKind::CommaToken).is_none() {
                parse_explicit_names = false;
            }
        }
        if parse_explicit_names {
            if self.eat_opt(SyntaxKind::AsteriskToken).is_some() {
                self.eat_predefined(self.names.as_);
                namespace_binding = self.eat_id();
            } else {
                let set = self.parse_import_specifier_set();
                specifiers = Some(self.alloc_slice(set));
            }
        }

        self.eat_predefined(self.names.from);
        let module_specifier = self.parse_module_specifier();
        self.eat_possibly_implicit_semicolon();

        Statement::ImportDeclaration(ImportDeclaration {
            data: self.node_data(SyntaxKind::ImportDeclaration, start),
            default_binding,
            namespace_binding,
            specifiers,
            module_specifier,
        })
    }

    /// `{ a, b as c, default as d }`
    fn parse_import_specifier_set(&mut self) -> Vec<ImportSpecifier<'a>> {
        let mut specifiers = Vec::new();
        self.eat(SyntaxKind::OpenBraceToken);
        while self.peek_id_or_keyword(0) {
            specifiers.push(self.parse_import_specifier());
            if !self.peek(SyntaxKind::CloseBraceToken) {
                self.eat(SyntaxKind::CommaToken);
            }
        }
        self.eat(SyntaxKind::CloseBraceToken);
        specifiers
    }

    fn parse_import_specifier(&mut self) -> ImportSpecifier<'a> {
        let start = self.node_start();
        let imported_name = self.eat_id_or_keyword_as_id();
        let local_name = if self.peek_predefined(0, self.names.as_) {
            self.next_token();
            self.eat_id()
        } else {
            // `{ a }` binds `a` itself.
            self.report_reserved_binding(&imported_name);
            None
        };
        ImportSpecifier {
            data: self.node_data(SyntaxKind::ImportSpecifier, start),
            imported_name,
            local_name,
        }
    }

    /// The string after `from`. A placeholder literal stands in when it is
    /// missing.
    fn parse_module_specifier(&mut self) -> Literal<'a> {
        match self.eat(SyntaxKind::StringLiteral) {
            Some(token) => self.literal_from_token(&token),
            None => {
                let end = self.last_end();
                Literal {
                    data: NodeData::new(SyntaxKind::StringLiteral, end, end),
                    raw: "",
                    value: "",
                    flags: Default::default(),
                }
            }
        }
    }

    fn report_reserved_binding(&mut self, name: &Identifier<'a>) {
        if self.is_reserved_word(name) {
            self.report_at(
                name.data.range.pos,
                name.data.range.end,
                &messages::CANNOT_USE_KEYWORD_HERE,
                &[name.name],
            );
        }
    }

    // ========================================================================
    // Exports
    // ========================================================================

    pub(crate) fn parse_export_declaration(&mut self) -> Statement<'a> {
        let start = self.node_start();
        self.eat(SyntaxKind::ExportKeyword);

        let mut is_default = false;
        let mut needs_semicolon = true;
        let export = match self.peek_kind(0) {
            SyntaxKind::AsteriskToken => {
                self.next_token();
                self.eat_predefined(self.names.from);
                Export::All {
                    module_specifier: self.parse_module_specifier(),
                }
            }
            SyntaxKind::FunctionKeyword => {
                needs_semicolon = false;
                let declaration = self.parse_function_declaration();
                Export::Declaration(self.alloc(declaration))
            }
            SyntaxKind::ClassKeyword => {
                needs_semicolon = false;
                let declaration = Statement::ClassDeclaration(self.parse_class(false));
                Export::Declaration(self.alloc(declaration))
            }
            SyntaxKind::Identifier => {
                needs_semicolon = false;
                let declaration = self.parse_async_function_declaration();
                Export::Declaration(self.alloc(declaration))
            }
            SyntaxKind::DefaultKeyword => {
                is_default = true;
                needs_semicolon = false;
                self.next_token();
                let expression = self.parse_expression();
                Export::Expression(self.alloc(expression))
            }
            SyntaxKind::OpenBraceToken => self.parse_named_exports(),
            _ => {
                let declaration_start = self.node_start();
                let declaration = match self.parse_variable_declaration_list(InMode::Normal) {
                    Some(declaration_list) => Statement::VariableStatement(VariableStatement {
                        data: self.node_data(SyntaxKind::VariableStatement, declaration_start),
                        declaration_list,
                    }),
                    None => {
                        needs_semicolon = false;
                        self.missing_statement()
                    }
                };
                Export::Declaration(self.alloc(declaration))
            }
        };

        if needs_semicolon || self.peek_implicit_semicolon(0) {
            self.eat_possibly_implicit_semicolon();
        }

        Statement::ExportDeclaration(ExportDeclaration {
            data: self.node_data(SyntaxKind::ExportDeclaration, start),
            is_default,
            export,
        })
    }

    /// `{ a as b } [from "m"]`. Without a `from` clause the names refer to
    /// local bindings, so reserved words are reported.
    fn parse_named_exports(&mut self) -> Export<'a> {
        let specifiers = self.parse_export_specifier_set();
        let module_specifier = if self.peek_predefined(0, self.names.from) {
            self.next_token();
            Some(self.parse_module_specifier())
        } else {
            for specifier in &specifiers {
                self.report_reserved_binding(&specifier.imported_name);
            }
            None
        };
        Export::Named {
            specifiers: self.alloc_slice(specifiers),
            module_specifier,
        }
    }

    fn parse_export_specifier_set(&mut self) -> Vec<ExportSpecifier<'a>> {
        let mut specifiers = Vec::new();
        self.eat(SyntaxKind::OpenBraceToken);
        while self.peek_id_or_keyword(0) {
            let start = self.node_start();
            let imported_name = self.eat_id_or_keyword_as_id();
            let exported_name = if self.peek_predefined(0, self.names.as_) {
                self.next_token();
                Some(self.eat_id_or_keyword_as_id())
            } else {
                None
            };
            specifiers.push(ExportSpecifier {
                data: self.node_data(SyntaxKind::ExportSpecifier, start),
                imported_name,
                exported_name,
            });
            if !self.peek(SyntaxKind::CloseBraceToken) {
                self.eat(SyntaxKind::CommaToken);
            }
        }
        self.eat(SyntaxKind::CloseBraceToken);
        specifiers
    }
}
