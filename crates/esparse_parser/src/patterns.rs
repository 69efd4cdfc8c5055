//! Destructuring patterns.
//!
//! Patterns are parsed directly in binding positions (declarations,
//! parameters, catch bindings) and by re-parsing an array or object
//! literal once it turns out to be an assignment target.

use esparse_ast::node::*;
use esparse_ast::syntax_kind::SyntaxKind;
use esparse_ast::types::FeatureSet;
use esparse_diagnostics::messages;

use crate::parser::{InMode, Parser, PatternKind, MAX_RECURSION_DEPTH};

impl<'a> Parser<'a> {
    pub(crate) fn peek_pattern_start(&mut self) -> bool {
        matches!(
            self.peek_kind(0),
            SyntaxKind::OpenBracketToken | SyntaxKind::OpenBraceToken
        )
    }

    /// An array pattern at `[`, otherwise an object pattern.
    pub(crate) fn parse_pattern(&mut self, kind: PatternKind) -> Expression<'a> {
        self.recursion_depth += 1;
        if self.recursion_depth > MAX_RECURSION_DEPTH {
            self.recursion_depth -= 1;
            self.abandon_too_deep();
            return self.missing_expression();
        }
        let pattern = if self.peek(SyntaxKind::OpenBracketToken) {
            self.parse_array_pattern(kind)
        } else {
            self.parse_object_pattern(kind)
        };
        self.recursion_depth -= 1;
        pattern
    }

    // ========================================================================
    // Array patterns
    // ========================================================================

    fn parse_array_pattern(&mut self, kind: PatternKind) -> Expression<'a> {
        let start = self.node_start();
        let mut elements = Vec::new();

        self.eat(SyntaxKind::OpenBracketToken);
        while self.peek(SyntaxKind::CommaToken) || self.peek_expression() {
            if self.peek(SyntaxKind::CommaToken) {
                let comma = self.next_token();
                elements.push(Expression::Hole(NodeData::new(
                    SyntaxKind::ArrayHole,
                    comma.pos,
                    comma.pos,
                )));
                continue;
            }
            elements.push(self.parse_pattern_assignment_target(kind));
            if self.eat_opt(SyntaxKind::CommaToken).is_none() {
                break;
            }
        }
        if self.peek(SyntaxKind::DotDotDotToken) {
            self.record_feature(FeatureSet::ARRAY_PATTERN_REST);
            elements.push(self.parse_iter_rest(kind));
        }
        if self.eat(SyntaxKind::CloseBracketToken).is_none() {
            return Expression::Missing(self.node_data(SyntaxKind::MissingExpression, start));
        }

        Expression::ArrayPattern(ArrayPattern {
            data: self.node_data(SyntaxKind::ArrayPattern, start),
            elements: self.alloc_slice(elements),
        })
    }

    /// `...target` in an array pattern or parameter list.
    pub(crate) fn parse_iter_rest(&mut self, kind: PatternKind) -> Expression<'a> {
        let start = self.node_start();
        self.eat(SyntaxKind::DotDotDotToken);
        let target = self.parse_rest_assignment_target(kind);
        Expression::Rest(RestElement {
            data: self.node_data(SyntaxKind::RestElement, start),
            target: self.alloc(target),
        })
    }

    fn parse_rest_assignment_target(&mut self, kind: PatternKind) -> Expression<'a> {
        let target = self.parse_pattern_assignment_target_no_default(kind);
        if self.peek(SyntaxKind::EqualsToken) {
            self.error(&messages::DEFAULT_AFTER_REST, &[]);
        }
        target
    }

    // ========================================================================
    // Object patterns
    // ========================================================================

    fn parse_object_pattern(&mut self, kind: PatternKind) -> Expression<'a> {
        let start = self.node_start();
        let mut properties = Vec::new();

        self.eat(SyntaxKind::OpenBraceToken);
        while self.peek_property_name_or_computed(0) {
            properties.push(self.parse_object_pattern_field(kind));
            if self.eat_opt(SyntaxKind::CommaToken).is_none() {
                break;
            }
        }
        if self.peek(SyntaxKind::DotDotDotToken) {
            self.record_feature(FeatureSet::OBJECT_PATTERN_REST);
            let rest_start = self.node_start();
            self.next_token();
            let target = self.parse_rest_assignment_target(kind);
            properties.push(PatternProperty::Rest(RestElement {
                data: self.node_data(SyntaxKind::RestElement, rest_start),
                target: self.alloc(target),
            }));
        }
        self.eat(SyntaxKind::CloseBraceToken);

        Expression::ObjectPattern(ObjectPattern {
            data: self.node_data(SyntaxKind::ObjectPattern, start),
            properties: self.alloc_slice(properties),
        })
    }

    fn parse_object_pattern_field(&mut self, kind: PatternKind) -> PatternProperty<'a> {
        let start = self.node_start();
        let key = if self.peek(SyntaxKind::OpenBracketToken) {
            PropertyName::Computed(self.parse_computed_property_name())
        } else if self.peek_id_or_keyword(0) {
            let name = self.eat_id_or_keyword_as_id();
            if !self.peek(SyntaxKind::ColonToken) {
                return self.parse_shorthand_pattern_field(start, name);
            }
            if name.is_keyword() {
                self.record_feature(FeatureSet::KEYWORDS_AS_PROPERTIES);
            }
            PropertyName::Identifier(name)
        } else {
            PropertyName::Literal(self.parse_literal())
        };

        self.eat(SyntaxKind::ColonToken);
        let target = self.parse_pattern_assignment_target(kind);
        PatternProperty::KeyValue {
            data: self.node_data(SyntaxKind::PatternProperty, start),
            key,
            target: self.alloc(target),
        }
    }

    /// `{ a }` or `{ a = default }`
    fn parse_shorthand_pattern_field(&mut self, start: u32, name: Identifier<'a>) -> PatternProperty<'a> {
        if self.is_reserved_word(&name) {
            self.report_at(
                name.data.range.pos,
                name.data.range.end,
                &messages::CANNOT_USE_KEYWORD_HERE,
                &[name.name],
            );
        }
        let default = if self.eat_opt(SyntaxKind::EqualsToken).is_some() {
            let default = self.parse_assignment(InMode::Normal);
            Some(self.alloc(default))
        } else {
            None
        };
        PatternProperty::Shorthand {
            data: self.node_data(SyntaxKind::PatternProperty, start),
            name,
            default,
        }
    }

    // ========================================================================
    // Assignment targets
    // ========================================================================

    /// A target with an optional `= default`.
    fn parse_pattern_assignment_target(&mut self, kind: PatternKind) -> Expression<'a> {
        let start = self.node_start();
        let target = self.parse_pattern_assignment_target_no_default(kind);
        if self.eat_opt(SyntaxKind::EqualsToken).is_none() {
            return target;
        }
        let default = self.parse_assignment(InMode::Normal);
        Expression::DefaultValue(DefaultValue {
            data: self.node_data(SyntaxKind::DefaultValue, start),
            target: self.alloc(target),
            default: self.alloc(default),
        })
    }

    /// A nested pattern, or a left-hand-side expression. Binding patterns
    /// only accept identifiers at the leaves.
    fn parse_pattern_assignment_target_no_default(&mut self, kind: PatternKind) -> Expression<'a> {
        if self.peek_pattern_start() {
            return self.parse_pattern(kind);
        }
        let target = self.parse_left_hand_side();
        if !target.is_valid_assignment_target() {
            self.report_at(target.pos(), target.end(), &messages::INVALID_ASSIGNMENT_TARGET, &[]);
        }
        if kind == PatternKind::Initializer && !matches!(target, Expression::Identifier(_)) {
            self.report_at(target.pos(), target.end(), &messages::ONLY_IDENTIFIER_OR_PATTERN, &[]);
        }
        target
    }
}
