//! ECMAScript conformance cases.
//!
//! Each category collects snippets that must parse cleanly and snippets that
//! must be rejected with a particular error.

use esparse_options::{LanguageMode, ParserOptions};
use esparse_tests::{ConformanceSuite, Expectation};

fn assert_all_pass(suite: &ConformanceSuite) {
    println!("\n{}", suite.summary());
    let failures: Vec<_> = suite.failures().map(|f| f.name.as_str()).collect();
    assert!(failures.is_empty(), "failing cases: {:?}", failures);
}

// ============================================================================
// Statements
// ============================================================================

#[test]
fn test_statement_conformance() {
    let mut suite = ConformanceSuite::new();

    suite.accept("var_declaration", "declarations", "var x = 42;");
    suite.accept("let_declaration", "declarations", "let y = 'hello';");
    suite.accept("const_declaration", "declarations", "const z = true;");
    suite.accept("multiple_declarators", "declarations", "var a = 1, b, c = a;");
    suite.accept("let_as_var_name", "declarations", "var let = 1;");
    suite.reject("const_without_value", "declarations", "const k;", "const variables must have an initializer");
    suite.reject("pattern_without_value", "declarations", "let [a];", "destructuring must have an initializer");

    suite.accept("if_else", "control", "if (a) b(); else { c(); }");
    suite.accept("while_loop", "control", "while (i--) sum += i;");
    suite.accept("do_while_asi", "control", "do x++; while (x < 5) y()");
    suite.accept("labelled_break", "control", "outer: for (;;) { for (;;) break outer; }");
    suite.accept("switch_fallthrough", "control", "switch (a) { case 1: case 2: f(); break; default: }");
    suite.accept("with_statement", "control", "with (obj) { prop = 1; }");
    suite.accept("debugger", "control", "debugger;");
    suite.reject("two_defaults", "control", "switch (a) { default: break; default: }", "at most one default clause");

    suite.accept("for_classic", "for", "for (var i = 0, n = a.length; i < n; ++i) {}");
    suite.accept("for_empty_head", "for", "for (;;) break;");
    suite.accept("for_in_var", "for", "for (var key in object) {}");
    suite.accept("for_in_expression", "for", "for (a.b in object) {}");
    suite.accept("for_of_const", "for", "for (const item of list) {}");
    suite.accept("for_of_pattern", "for", "for (const [k, v] of map) {}");
    suite.accept("for_of_assignment_pattern", "for", "for ({a, b} of list) {}");
    suite.accept("for_in_operator_in_body", "for", "for (var i = 0; i < 1; i++) x = 'a' in o;");
    suite.accept("for_parenthesized_in", "for", "for (var i = ('a' in o); i;) {}");
    suite.reject("for_in_two_vars", "for", "for (var a, b in o) {}", "for-in statement may not have more than one");
    suite.reject("for_of_two_vars", "for", "for (let a, b of o) {}", "for-of statement may not have more than one");
    suite.reject("for_of_initializer", "for", "for (var a = 1 of o) {}", "for-of statement may not have initializer");
    suite.reject("for_await_outside_async", "for", "for await (x of y) {}", "non-async function context");
    suite.accept("for_await_in_async", "for", "async function f() { for await (const x of y) {} }");

    suite.accept("try_catch", "exceptions", "try { f(); } catch (e) { g(e); }");
    suite.accept("try_finally", "exceptions", "try { f(); } finally { g(); }");
    suite.accept("optional_catch_binding", "exceptions", "try { f(); } catch { g(); }");
    suite.accept("catch_pattern", "exceptions", "try {} catch ({code, message}) {}");
    suite.accept("throw_expression", "exceptions", "throw new TypeError('bad');");
    suite.reject("bare_try", "exceptions", "try { f(); }", "'catch' or 'finally' expected.");
    suite.reject("throw_newline", "exceptions", "throw\nerror;", "semicolon/newline not allowed after 'throw'");

    suite.accept("asi_lines", "asi", "a = 1\nb = 2\nc()");
    suite.accept("asi_before_brace", "asi", "function f() { return 1 }");
    suite.accept("asi_postfix_restriction", "asi", "a\n++b");
    suite.reject("missing_semicolon", "asi", "a = 1 b = 2", "Semi-colon expected");

    assert_all_pass(&suite);
}

// ============================================================================
// Expressions
// ============================================================================

#[test]
fn test_expression_conformance() {
    let mut suite = ConformanceSuite::new();

    suite.accept("arithmetic", "operators", "x = a + b * c - d / e % f;");
    suite.accept("exponent", "operators", "x = 2 ** 3 ** 2;");
    suite.accept("parenthesized_unary_exponent", "operators", "x = (-2) ** 2;");
    suite.accept("relational", "operators", "x = a < b && c >= d || e instanceof F || 'k' in o;");
    suite.accept("bitwise", "operators", "x = a & b | c ^ d << 1 >> 2 >>> 3;");
    suite.accept("nullish_chain", "operators", "x = a ?? b ?? c;");
    suite.accept("nullish_parenthesized", "operators", "x = (a && b) ?? c;");
    suite.accept("compound_assignment", "operators", "a += 1; b **= 2; c ??= d; e ||= f; g &&= h;");
    suite.accept("conditional", "operators", "x = a ? b : c ? d : e;");
    suite.accept("comma", "operators", "x = (a, b, c);");
    suite.accept("unary", "operators", "typeof a; void 0; delete o.p; !a; ~b; -c; +d;");
    suite.reject("unary_exponent", "operators", "x = -a ** 2;", "requires parentheses before '**'");
    suite.reject("nullish_with_or", "operators", "x = a || b ?? c;", "require parentheses when used with '??'");
    suite.reject("assign_to_literal", "operators", "1 = a;", "invalid assignment target");
    suite.reject("assign_to_call", "operators", "f() = 1;", "invalid assignment target");

    suite.accept("member_chain", "members", "a.b.c[d](e).f;");
    suite.accept("keyword_members", "members", "a.default; a.if.class;");
    suite.accept("new_with_member", "members", "new a.b.C(1).d;");
    suite.accept("new_without_args", "members", "new Date;");
    suite.accept("new_target", "members", "function F() { if (!new.target) throw 1; }");
    suite.accept("import_meta", "members", "console.log(import.meta.url);");
    suite.accept("dynamic_import", "members", "import('./lazy.js').then(m => m.run());");
    suite.accept("optional_chain", "members", "a?.b?.[c]?.(d);");
    suite.accept("optional_chain_continues", "members", "a?.b.c.d();");
    suite.reject("new_optional", "members", "new a?.b();", "construction contexts");
    suite.reject("optional_template", "members", "a?.b`t`;", "template literal cannot be used");
    suite.reject("optional_assignment", "members", "a?.b = 1;", "invalid assignment target");

    suite.accept("arrow_single", "functions", "f = x => x;");
    suite.accept("arrow_params", "functions", "f = (a, b = 1, ...c) => a;");
    suite.accept("arrow_body", "functions", "f = () => { return 1; };");
    suite.accept("arrow_object_body", "functions", "f = () => ({a: 1});");
    suite.accept("arrow_patterns", "functions", "f = ({a}, [b]) => a + b;");
    suite.accept("async_arrow", "functions", "f = async (x) => await x;");
    suite.accept("async_arrow_single", "functions", "f = async x => x;");
    suite.accept("async_call", "functions", "async(1, 2);");
    suite.accept("function_expression", "functions", "f = function named(a) { return a; };");
    suite.accept("generator_expression", "functions", "f = function* () { yield 1; yield* g(); };");
    suite.accept("await_in_async", "functions", "async function f() { return await g(); }");
    suite.accept("yield_identifier", "functions", "function f() { var yield = 1; }");
    suite.reject("yield_star_empty", "functions", "function* g() { yield* ; }", "yield* requires an expression");
    suite.reject("empty_parens", "functions", "x = ();", "invalid parenthesized expression");
    suite.reject("trailing_comma_parens", "functions", "x = (a,);", "invalid parenthesized expression");

    suite.accept("array_literal", "literals", "x = [1, , 3, ...rest];");
    suite.accept("object_literal", "literals", "x = {a, b: 1, [c]: 2, 'd': 3, 4: 5, ...e};");
    suite.accept("object_methods", "literals", "x = {m() {}, get g() { return 1; }, set s(v) {}, async a() {}, *gen() {}};");
    suite.accept("contextual_keys", "literals", "x = {get: 1, set: 2, async: 3, of: 4};");
    suite.accept("numbers", "literals", "x = [0, 1.5, .5, 1e10, 0x1F, 0o17, 0b11, 1_000, 10n];");
    suite.accept("strings", "literals", "x = ['single', \"double\", 'esc\\'aped'];");
    suite.accept("regex", "literals", "x = /[a-z]+\\/\\d/giu;");
    suite.accept("regex_after_paren", "literals", "if (x) /re/.test(s);");
    suite.accept("template", "literals", "x = `a ${b + `c ${d}`} e`;");
    suite.accept("tagged_template", "literals", "x = html`<p>${text}</p>`;");
    suite.accept("tagged_invalid_escape", "literals", "x = raw`\\unicode`;");
    suite.reject("invalid_escape", "literals", "x = `\\unicode`;", "Invalid Unicode escape sequence.");
    suite.reject("keyword_shorthand", "literals", "x = {if};", "Cannot use keyword in short object literal");

    suite.accept("array_destructuring", "destructuring", "[a, b] = [b, a];");
    suite.accept("nested_destructuring", "destructuring", "({a: {b: [c = 1]}} = obj);");
    suite.accept("rest_destructuring", "destructuring", "[a, ...b] = c; ({d, ...e} = f);");
    suite.accept("member_targets", "destructuring", "[a.b, c[0]] = d;");
    suite.reject("rest_default", "destructuring", "var [...a = 1] = b;", "A default value cannot be specified after '...'");
    suite.reject("binding_member", "destructuring", "var [a.b] = c;", "Only an identifier or destructuring pattern");

    assert_all_pass(&suite);
}

// ============================================================================
// Classes and modules
// ============================================================================

#[test]
fn test_class_and_module_conformance() {
    let mut suite = ConformanceSuite::new();

    suite.accept("empty_class", "classes", "class A {}");
    suite.accept("class_extends_call", "classes", "class A extends mixin(B, C) {}");
    suite.accept("class_fields", "classes", "class A { a = 1; static b; 'c' = 2; [d] = 3; }");
    suite.accept("class_static_block", "classes", "class A { static { A.ready = true; } }");
    suite.accept("class_accessors", "classes", "class A { get x() { return 1; } set x(v) {} static get y() {} }");
    suite.accept("class_generators", "classes", "class A { *g() {} async *h() {} static async i() {} }");
    suite.accept("class_contextual_names", "classes", "class A { get() {} set() {} static() {} async() {} }");
    suite.accept("class_expression", "classes", "x = class Named extends Base { constructor() { super(); } };");
    suite.accept("super_property", "classes", "class A extends B { m() { return super.m(); } }");
    suite.reject("setter_without_param", "classes", "class A { set x() {} }", "Setter must have exactly 1 parameter, found 0");
    suite.reject("setter_rest", "classes", "class A { set x(...v) {} }", "Setter must not have a rest parameter");
    suite.reject("super_optional", "classes", "class A extends B { m() { super?.m(); } }", "forbidden in super?.");

    suite.accept("import_side_effect", "modules", "import 'polyfill';");
    suite.accept("import_default", "modules", "import React from 'react';");
    suite.accept("import_named", "modules", "import {a, b as c, default as d} from 'm';");
    suite.accept("import_namespace", "modules", "import def, * as ns from 'm';");
    suite.accept("export_named", "modules", "export {a, b as c};");
    suite.accept("export_from", "modules", "export {default, if} from 'm';");
    suite.accept("export_all", "modules", "export * from 'm';");
    suite.accept("export_declarations", "modules", "export var a = 1; export let b; export function f() {} export class C {}");
    suite.accept("export_async_function", "modules", "export async function f() {}");
    suite.accept("export_default_expression", "modules", "export default a + b;");
    suite.accept("export_default_function", "modules", "export default function () {}");
    suite.reject("import_keyword_binding", "modules", "import {class} from 'm';", "cannot use keyword 'class' here.");
    suite.reject("export_keyword_local", "modules", "export {while};", "cannot use keyword 'while' here.");

    assert_all_pass(&suite);
}

// ============================================================================
// Language modes
// ============================================================================

#[test]
fn test_language_mode_conformance() {
    let mut suite = ConformanceSuite::new();
    let es5 = ParserOptions::new(LanguageMode::Es5, false);
    let es6 = ParserOptions::new(LanguageMode::Es6OrEs7, false);
    let es8 = ParserOptions::new(LanguageMode::Es8OrGreater, false);
    let strict = ParserOptions::new(LanguageMode::Es8OrGreater, true);

    suite.add("es5_for_in_initializer", "modes", "for (var i = 0 in o);", es5, Expectation::Accept);
    suite.add(
        "es6_for_in_initializer",
        "modes",
        "for (var i = 0 in o);",
        es6,
        Expectation::Reject("for-in statement may not have initializer"),
    );
    suite.add(
        "es5_argument_trailing_comma",
        "modes",
        "f(a,);",
        es5,
        Expectation::Reject("Invalid trailing comma in arguments list"),
    );
    suite.add(
        "es6_parameter_trailing_comma",
        "modes",
        "function f(a,) {}",
        es6,
        Expectation::Reject("Invalid trailing comma in formal parameter list"),
    );
    suite.add("es8_trailing_commas", "modes", "function f(a,) {} f(a,);", es8, Expectation::Accept);
    suite.add("sloppy_future_reserved", "modes", "var implements = 1;", es8, Expectation::Accept);
    suite.add(
        "strict_future_reserved",
        "modes",
        "var implements = 1;",
        strict,
        Expectation::Reject("'identifier' expected"),
    );

    assert_all_pass(&suite);
}
