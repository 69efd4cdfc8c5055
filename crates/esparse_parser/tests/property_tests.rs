//! Whole-parse properties: termination on arbitrary input, well-nested node
//! ranges, monotone feature sets and stable re-parsing after a rewind.

use bumpalo::Bump;
use esparse_ast::node::*;
use esparse_ast::visitor::{walk_expression, walk_statement, AstVisitor};
use esparse_ast::syntax_kind::SyntaxKind;
use esparse_core::{StringInterner, TextRange};
use esparse_options::ParserOptions;
use esparse_parser::{parse, MAX_RECURSION_DEPTH};
use esparse_scanner::TokenStream;

const VALID_PROGRAMS: &[&str] = &[
    "var a = 1, b = [a, , 3], c = {a, b: 2, [a]: 3, m() { return this; }};",
    "function f(x, y = 2, ...rest) { if (x) { return y; } else return rest; }",
    "const {p, q: [r, ...s] = []} = obj; let t = p ?? q;",
    "class A extends B { static n = 1; get v() { return 1; } *g() { yield* h(); } }",
    "for (let i = 0; i < 10; i++) { for (const k in o) continue; for (x of y) break; }",
    "a?.b[c]?.(d).e; new F(1)(2); tag`x${y}z`;",
    "switch (v) { case 1: f(); break; default: g(); }",
    "try { risky(); } catch ({message}) { log(message); } finally { done(); }",
    "const add = (a, b) => a + b; const inc = async x => await x + 1;",
    "[a, {b}] = [c, d]; ({e, f: g = 1} = h);",
    "label: do { x = x ? y : z, w; } while (x-- > 0)",
    "import a, {b as c} from 'm'; export default function () {} export {c};",
];

// ============================================================================
// Termination
// ============================================================================

const FRAGMENTS: &[&str] = &[
    "a", "1", "(", ")", "[", "]", "{", "}", ",", ";", "=", "=>", "+", "?.", "...", "function",
    "class", "async", "await", "yield", "for", "of", "in", "`x${", "}`", "/", "\n", "'s'",
    "import", "export", "new", "?", ":", "let", "const", "*", "**", "-", "get", "static",
];

/// A small linear congruential generator, so failures reproduce.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> usize {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (self.0 >> 33) as usize
    }
}

#[test]
fn test_arbitrary_token_soup_terminates() {
    let mut rng = Lcg(0x5eed);
    for _ in 0..300 {
        let len = rng.next() % 40;
        let source: Vec<&str> = (0..len).map(|_| FRAGMENTS[rng.next() % FRAGMENTS.len()]).collect();
        let source = source.join(" ");
        let arena = Bump::new();
        let result = parse(&arena, &source, ParserOptions::default());
        // Every diagnostic points inside the source.
        for diagnostic in result.diagnostics.diagnostics() {
            if let Some(span) = diagnostic.span {
                assert!(
                    span.start as usize <= source.len(),
                    "source: {:?}\ndiagnostic: {:?}",
                    source,
                    diagnostic
                );
            }
        }
    }
}

#[test]
fn test_truncated_programs_terminate() {
    for source in VALID_PROGRAMS {
        for cut in 0..source.len() {
            if !source.is_char_boundary(cut) {
                continue;
            }
            let arena = Bump::new();
            let _ = parse(&arena, &source[..cut], ParserOptions::default());
        }
    }
}

// ============================================================================
// Recursion limit
// ============================================================================

/// Parse `source` on the calling thread and expect a single depth error.
fn assert_too_deep(source: &str) {
    let arena = Bump::new();
    let result = parse(&arena, source, ParserOptions::default());
    assert!(result.program.is_none());
    assert_eq!(result.diagnostics.error_count(), 1, "{:?}", result.diagnostics);
    assert!(result
        .diagnostics
        .contains_message("Too deep recursion while parsing"));
}

// All of these run on the default test thread stack.

#[test]
fn test_deep_nesting_reports_once() {
    assert_too_deep(&"(".repeat(1000));
}

#[test]
fn test_deep_array_patterns_report_once() {
    assert_too_deep(&format!("var {} = x;", "[".repeat(MAX_RECURSION_DEPTH as usize * 2)));
}

#[test]
fn test_deep_class_heritage_reports_once() {
    assert_too_deep(&"class A extends (".repeat(195));
}

#[test]
fn test_deep_mixed_literals_report_once() {
    assert_too_deep(&format!("x = {};", "({a: [".repeat(300)));
}

#[test]
fn test_moderate_nesting_is_accepted() {
    let source = format!("x = {}a{};", "(".repeat(50), ")".repeat(50));
    let arena = Bump::new();
    let result = parse(&arena, &source, ParserOptions::default());
    assert!(!result.has_errors());
    assert!(result.program.is_some());
}

// ============================================================================
// Node ranges
// ============================================================================

/// Checks that every statement and expression lies inside its parent and
/// after its previous sibling.
struct RangeChecker {
    /// Enclosing range and the end of the last child seen inside it.
    stack: Vec<(TextRange, u32)>,
    violations: Vec<String>,
}

impl RangeChecker {
    fn new(root: TextRange) -> Self {
        Self {
            stack: vec![(root, root.pos)],
            violations: Vec::new(),
        }
    }

    fn enter(&mut self, what: &str, range: TextRange) {
        if let Some((parent, last_end)) = self.stack.last_mut() {
            if range.pos < parent.pos || range.end > parent.end {
                self.violations
                    .push(format!("{} {:?} escapes its parent {:?}", what, range, parent));
            }
            if range.pos < *last_end {
                self.violations
                    .push(format!("{} {:?} starts before its previous sibling ends at {}", what, range, last_end));
            }
            *last_end = range.end;
        }
        self.stack.push((range, range.pos));
    }

    fn leave(&mut self) {
        self.stack.pop();
    }
}

impl<'a> AstVisitor<'a> for RangeChecker {
    fn visit_statement(&mut self, stmt: &Statement<'a>) {
        self.enter(&format!("{:?}", stmt.kind()), stmt.range());
        walk_statement(self, stmt);
        self.leave();
    }

    fn visit_expression(&mut self, expr: &Expression<'a>) {
        self.enter(&format!("{:?}", expr.kind()), expr.range());
        walk_expression(self, expr);
        self.leave();
    }
}

#[test]
fn test_child_ranges_nest_in_source_order() {
    for source in VALID_PROGRAMS {
        let arena = Bump::new();
        let result = parse(&arena, source, ParserOptions::default());
        assert!(!result.has_errors(), "source: {}\n{:?}", source, result.diagnostics);
        let program = result.program.as_ref().expect("program");
        assert_eq!(program.data.range.pos, 0);
        assert_eq!(program.data.range.end as usize, source.len());

        let mut checker = RangeChecker::new(program.data.range);
        checker.visit_program(program);
        assert!(
            checker.violations.is_empty(),
            "source: {}\n{}",
            source,
            checker.violations.join("\n")
        );
    }
}

// ============================================================================
// Features
// ============================================================================

#[test]
fn test_features_grow_with_the_program() {
    let whole_source = VALID_PROGRAMS.join("\n");
    let arena = Bump::new();
    let whole = parse(&arena, &whole_source, ParserOptions::default()).features;
    assert!(!whole.is_empty());

    for count in 1..VALID_PROGRAMS.len() {
        let prefix_source = VALID_PROGRAMS[..count].join("\n");
        let arena = Bump::new();
        let prefix = parse(&arena, &prefix_source, ParserOptions::default());
        assert!(!prefix.has_errors());
        assert!(
            whole.contains(prefix.features),
            "prefix of {} statements records {:?}, whole program {:?}",
            count,
            prefix.features,
            whole
        );
    }
}

// ============================================================================
// Rewind stability
// ============================================================================

/// Flattens a subtree to kinds, ranges and identifier names.
#[derive(Default)]
struct Shape(Vec<String>);

impl<'a> AstVisitor<'a> for Shape {
    fn visit_expression(&mut self, expr: &Expression<'a>) {
        let name = match expr {
            Expression::Identifier(id) => id.name,
            _ => "",
        };
        self.0.push(format!("{:?}@{:?}{}", expr.kind(), expr.range(), name));
        walk_expression(self, expr);
    }

    fn visit_pattern_property(&mut self, property: &PatternProperty<'a>) {
        match property {
            PatternProperty::Shorthand { data, name, default } => {
                self.0.push(format!("{:?}@{:?}{}", data.kind, data.range, name.name));
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
}

fn shape_of(expr: &Expression<'_>) -> Vec<String> {
    let mut shape = Shape::default();
    shape.visit_expression(expr);
    shape.0
}

#[test]
fn test_reparsed_literal_matches_direct_pattern() {
    // Both sources put the pattern at offsets 4..12.
    let arena = Bump::new();
    let assigned = parse(&arena, "    [a, {b}] = c;", ParserOptions::default());
    let declared = parse(&arena, "var [a, {b}] = c;", ParserOptions::default());
    assert!(!assigned.has_errors() && !declared.has_errors());

    let assigned_program = assigned.program.as_ref().expect("program");
    let Statement::ExpressionStatement(stmt) = &assigned_program.elements[0] else {
        panic!("expected an expression statement");
    };
    let Expression::Assignment(assignment) = stmt.expression else {
        panic!("expected an assignment");
    };

    let declared_program = declared.program.as_ref().expect("program");
    let Statement::VariableStatement(var) = &declared_program.elements[0] else {
        panic!("expected a variable statement");
    };

    assert_eq!(
        shape_of(assignment.target),
        shape_of(var.declaration_list.declarations[0].target)
    );
}

#[test]
fn test_parsing_twice_gives_same_tree() {
    for source in VALID_PROGRAMS {
        let first_arena = Bump::new();
        let second_arena = Bump::new();
        let first = parse(&first_arena, source, ParserOptions::default());
        let second = parse(&second_arena, source, ParserOptions::default());

        let mut first_shape = Shape::default();
        first_shape.visit_program(first.program.as_ref().expect("program"));
        let mut second_shape = Shape::default();
        second_shape.visit_program(second.program.as_ref().expect("program"));
        assert_eq!(first_shape.0, second_shape.0, "source: {}", source);
        assert_eq!(first.features, second.features);
        assert_eq!(first.comments.len(), second.comments.len());
    }
}

#[test]
fn test_token_stream_relexes_after_rewind() {
    let source = "x = a ? b.c(1, 'two') : [3, 4];";
    let mut stream = TokenStream::new(source, StringInterner::new());
    let start = stream.position();
    let mut first = Vec::new();
    while stream.peek_kind(0) != SyntaxKind::EndOfFileToken {
        let token = stream.next();
        first.push((token.kind, token.pos, token.end));
        if first.len() > 64 {
            break;
        }
    }

    stream.set_position(start);
    for (kind, pos, end) in &first {
        let token = stream.next();
        assert_eq!((token.kind, token.pos, token.end), (*kind, *pos, *end));
    }
}
