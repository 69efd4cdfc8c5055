//! Tree visitor.
//!
//! `AstVisitor` walks the whole tree by default; override a `visit_*` method
//! to intercept one node kind and call the matching `walk_*` function to
//! continue into its children.

use crate::node::*;

pub trait AstVisitor<'a> {
    fn visit_program(&mut self, node: &Program<'a>) {
        walk_program(self, node);
    }

    fn visit_statement(&mut self, stmt: &Statement<'a>) {
        walk_statement(self, stmt);
    }

    fn visit_expression(&mut self, expr: &Expression<'a>) {
        walk_expression(self, expr);
    }

    fn visit_block(&mut self, block: &Block<'a>) {
        for stmt in block.statements.iter() {
            self.visit_statement(stmt);
        }
    }

    fn visit_variable_declaration_list(&mut self, list: &VariableDeclarationList<'a>) {
        for decl in list.declarations.iter() {
            self.visit_expression(decl.target);
            if let Some(init) = decl.initializer {
                self.visit_expression(init);
            }
        }
    }

    fn visit_function(&mut self, function: &FunctionLike<'a>) {
        self.visit_formal_parameters(function.parameters);
        self.visit_block(function.body);
    }

    fn visit_formal_parameters(&mut self, params: &FormalParameterList<'a>) {
        for param in params.parameters.iter() {
            self.visit_expression(param);
        }
    }

    fn visit_class(&mut self, class: &ClassLike<'a>) {
        if let Some(superclass) = class.superclass {
            self.visit_expression(superclass);
        }
        for element in class.elements.iter() {
            self.visit_class_element(element);
        }
    }

    fn visit_class_element(&mut self, element: &ClassElement<'a>) {
        match element {
            ClassElement::Method(method) => self.visit_method(method),
            ClassElement::Field(field) => {
                self.visit_property_name(&field.key);
                if let Some(init) = field.initializer {
                    self.visit_expression(init);
                }
            }
            ClassElement::StaticBlock(block) => self.visit_block(block.block),
        }
    }

    fn visit_method(&mut self, method: &MethodDefinition<'a>) {
        self.visit_property_name(&method.key);
        self.visit_function(method.function);
    }

    fn visit_property_name(&mut self, name: &PropertyName<'a>) {
        if let PropertyName::Computed(computed) = name {
            self.visit_expression(computed.expression);
        }
    }

    fn visit_property_definition(&mut self, property: &PropertyDefinition<'a>) {
        match property {
            PropertyDefinition::Property(n) => {
                self.visit_property_name(&n.key);
                self.visit_expression(n.value);
            }
            PropertyDefinition::Shorthand(_) => {}
            PropertyDefinition::CoverInitializedName(n) => self.visit_expression(n.initializer),
            PropertyDefinition::Spread(n) => self.visit_expression(n.expression),
            PropertyDefinition::Method(n) => self.visit_method(n),
        }
    }

    fn visit_pattern_property(&mut self, property: &PatternProperty<'a>) {
        match property {
            PatternProperty::Shorthand { default, .. } => {
                if let Some(default) = default {
                    self.visit_expression(default);
                }
            }
            PatternProperty::KeyValue { key, target, .. } => {
                self.visit_property_name(key);
                self.visit_expression(target);
            }
            PatternProperty::Rest(rest) => self.visit_expression(rest.target),
        }
    }

    fn visit_arguments(&mut self, args: &ArgumentList<'a>) {
        for arg in args.arguments.iter() {
            self.visit_expression(arg);
        }
    }
}

pub fn walk_program<'a, V: AstVisitor<'a> + ?Sized>(visitor: &mut V, node: &Program<'a>) {
    for stmt in node.elements.iter() {
        visitor.visit_statement(stmt);
    }
}

fn walk_for_initializer<'a, V: AstVisitor<'a> + ?Sized>(
    visitor: &mut V,
    init: &ForInitializer<'a>,
) {
    match init {
        ForInitializer::VariableDeclarations(list) => visitor.visit_variable_declaration_list(list),
        ForInitializer::Expression(expr) => visitor.visit_expression(expr),
    }
}

pub fn walk_statement<'a, V: AstVisitor<'a> + ?Sized>(visitor: &mut V, stmt: &Statement<'a>) {
    match stmt {
        Statement::Block(n) => visitor.visit_block(n),
        Statement::VariableStatement(n) => {
            visitor.visit_variable_declaration_list(&n.declaration_list)
        }
        Statement::EmptyStatement(_)
        | Statement::DebuggerStatement(_)
        | Statement::MissingStatement(_)
        | Statement::ContinueStatement(_)
        | Statement::BreakStatement(_) => {}
        Statement::ExpressionStatement(n) => visitor.visit_expression(n.expression),
        Statement::IfStatement(n) => {
            visitor.visit_expression(n.condition);
            visitor.visit_statement(n.then_statement);
            if let Some(else_stmt) = n.else_statement {
                visitor.visit_statement(else_stmt);
            }
        }
        Statement::DoStatement(n) => {
            visitor.visit_statement(n.body);
            visitor.visit_expression(n.condition);
        }
        Statement::WhileStatement(n) => {
            visitor.visit_expression(n.condition);
            visitor.visit_statement(n.body);
        }
        Statement::ForStatement(n) => {
            if let Some(ref init) = n.initializer {
                walk_for_initializer(visitor, init);
            }
            if let Some(cond) = n.condition {
                visitor.visit_expression(cond);
            }
            if let Some(inc) = n.incrementor {
                visitor.visit_expression(inc);
            }
            visitor.visit_statement(n.body);
        }
        Statement::ForInStatement(n) => {
            walk_for_initializer(visitor, &n.initializer);
            visitor.visit_expression(n.collection);
            visitor.visit_statement(n.body);
        }
        Statement::ForOfStatement(n) | Statement::ForAwaitOfStatement(n) => {
            walk_for_initializer(visitor, &n.initializer);
            visitor.visit_expression(n.collection);
            visitor.visit_statement(n.body);
        }
        Statement::ReturnStatement(n) => {
            if let Some(expr) = n.expression {
                visitor.visit_expression(expr);
            }
        }
        Statement::WithStatement(n) => {
            visitor.visit_expression(n.expression);
            visitor.visit_statement(n.body);
        }
        Statement::SwitchStatement(n) => {
            visitor.visit_expression(n.expression);
            for clause in n.clauses.iter() {
                if let Some(expr) = clause.expression {
                    visitor.visit_expression(expr);
                }
                for stmt in clause.statements.iter() {
                    visitor.visit_statement(stmt);
                }
            }
        }
        Statement::LabeledStatement(n) => visitor.visit_statement(n.statement),
        Statement::ThrowStatement(n) => visitor.visit_expression(n.expression),
        Statement::TryStatement(n) => {
            visitor.visit_block(n.try_block);
            if let Some(catch) = n.catch_clause {
                if let Some(binding) = catch.binding {
                    visitor.visit_expression(binding);
                }
                visitor.visit_block(catch.block);
            }
            if let Some(finally) = n.finally_block {
                visitor.visit_block(finally);
            }
        }
        Statement::FunctionDeclaration(n) => visitor.visit_function(n),
        Statement::ClassDeclaration(n) => visitor.visit_class(n),
        Statement::ImportDeclaration(_) => {}
        Statement::ExportDeclaration(n) => match n.export {
            Export::Declaration(stmt) => visitor.visit_statement(stmt),
            Export::Expression(expr) => visitor.visit_expression(expr),
            Export::All { .. } | Export::Named { .. } => {}
        },
    }
}

pub fn walk_expression<'a, V: AstVisitor<'a> + ?Sized>(visitor: &mut V, expr: &Expression<'a>) {
    match expr {
        Expression::Identifier(_)
        | Expression::Literal(_)
        | Expression::This(_)
        | Expression::Super(_)
        | Expression::NewTarget(_)
        | Expression::ImportMeta(_)
        | Expression::Hole(_)
        | Expression::Missing(_) => {}
        Expression::DynamicImport(n) => visitor.visit_expression(n.argument),
        Expression::Template(n) => {
            if let Some(tag) = n.tag {
                visitor.visit_expression(tag);
            }
            for part in n.elements.iter() {
                if let TemplatePart::Substitution(sub) = part {
                    visitor.visit_expression(sub);
                }
            }
        }
        Expression::ArrayLiteral(n) => {
            for element in n.elements.iter() {
                visitor.visit_expression(element);
            }
        }
        Expression::ObjectLiteral(n) => {
            for property in n.properties.iter() {
                visitor.visit_property_definition(property);
            }
        }
        Expression::Parenthesized(n) => visitor.visit_expression(n.expression),
        Expression::Function(n) => visitor.visit_function(n),
        Expression::Arrow(n) => {
            visitor.visit_formal_parameters(n.parameters);
            match n.body {
                ArrowBody::Block(block) => visitor.visit_block(block),
                ArrowBody::Expression(body) => visitor.visit_expression(body),
            }
        }
        Expression::Class(n) => visitor.visit_class(n),
        Expression::PropertyAccess(n) => visitor.visit_expression(n.object),
        Expression::OptionalPropertyAccess(n) => visitor.visit_expression(n.object),
        Expression::ElementAccess(n) => {
            visitor.visit_expression(n.object);
            visitor.visit_expression(n.index);
        }
        Expression::OptionalElementAccess(n) => {
            visitor.visit_expression(n.object);
            visitor.visit_expression(n.index);
        }
        Expression::Call(n) => {
            visitor.visit_expression(n.callee);
            visitor.visit_arguments(n.arguments);
        }
        Expression::OptionalCall(n) => {
            visitor.visit_expression(n.callee);
            visitor.visit_arguments(n.arguments);
        }
        Expression::New(n) => {
            visitor.visit_expression(n.callee);
            if let Some(args) = n.arguments {
                visitor.visit_arguments(args);
            }
        }
        Expression::Unary(n) => visitor.visit_expression(n.operand),
        Expression::Update(n) => visitor.visit_expression(n.operand),
        Expression::Await(n) => visitor.visit_expression(n.expression),
        Expression::Yield(n) => {
            if let Some(arg) = n.argument {
                visitor.visit_expression(arg);
            }
        }
        Expression::Binary(n) => {
            visitor.visit_expression(n.left);
            visitor.visit_expression(n.right);
        }
        Expression::Assignment(n) => {
            visitor.visit_expression(n.target);
            visitor.visit_expression(n.value);
        }
        Expression::Conditional(n) => {
            visitor.visit_expression(n.condition);
            visitor.visit_expression(n.when_true);
            visitor.visit_expression(n.when_false);
        }
        Expression::Comma(n) => {
            for e in n.expressions.iter() {
                visitor.visit_expression(e);
            }
        }
        Expression::Spread(n) => visitor.visit_expression(n.expression),
        Expression::ArrayPattern(n) => {
            for element in n.elements.iter() {
                visitor.visit_expression(element);
            }
        }
        Expression::ObjectPattern(n) => {
            for property in n.properties.iter() {
                visitor.visit_pattern_property(property);
            }
        }
        Expression::DefaultValue(n) => {
            visitor.visit_expression(n.target);
            visitor.visit_expression(n.default);
        }
        Expression::Rest(n) => visitor.visit_expression(n.target),
        Expression::FormalParameters(n) => visitor.visit_formal_parameters(n),
    }
}
