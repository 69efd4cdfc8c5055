//! Conformance test framework for esparse.
//!
//! Runs tables of JavaScript snippets through the parser and compares the
//! outcome with what each snippet expects: a clean parse, or an error whose
//! text contains a given fragment. Results are grouped by category so a
//! summary shows where the parser falls short.

use bumpalo::Bump;
use esparse_options::ParserOptions;
use esparse_parser::Parser;
use std::collections::BTreeMap;

/// What a conformance case expects from the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expectation {
    /// The snippet parses without errors.
    Accept,
    /// Some error message contains the fragment.
    Reject(&'static str),
}

/// Result for a single conformance case.
#[derive(Debug, Clone)]
pub struct CaseResult {
    pub name: String,
    pub category: String,
    pub source: String,
    pub passed: bool,
    /// Why the case failed: a panic message, or the errors that did not match.
    pub failure: Option<String>,
}

/// Run a single conformance case.
pub fn run_case(
    name: &str,
    category: &str,
    source: &str,
    options: ParserOptions,
    expectation: Expectation,
) -> CaseResult {
    let outcome = std::panic::catch_unwind(|| {
        let arena = Bump::new();
        let parser = Parser::new(&arena, "conformance.js", source, options);
        let result = parser.parse_program();
        let errors: Vec<String> = result
            .diagnostics
            .errors()
            .map(|d| d.message_text.clone())
            .collect();
        errors
    });

    let failure = match outcome {
        Ok(errors) => match expectation {
            Expectation::Accept if errors.is_empty() => None,
            Expectation::Accept => Some(format!("unexpected errors: {}", errors.join("; "))),
            Expectation::Reject(fragment) if errors.iter().any(|e| e.contains(fragment)) => None,
            Expectation::Reject(fragment) if errors.is_empty() => {
                Some(format!("expected an error containing {:?}, parsed cleanly", fragment))
            }
            Expectation::Reject(fragment) => Some(format!(
                "expected an error containing {:?}, got: {}",
                fragment,
                errors.join("; ")
            )),
        },
        Err(e) => {
            let msg = if let Some(s) = e.downcast_ref::<String>() {
                s.clone()
            } else if let Some(s) = e.downcast_ref::<&str>() {
                s.to_string()
            } else {
                "Unknown panic".to_string()
            };
            Some(format!("panic: {}", msg))
        }
    };

    CaseResult {
        name: name.to_string(),
        category: category.to_string(),
        source: source.to_string(),
        passed: failure.is_none(),
        failure,
    }
}

/// Conformance suite runner.
#[derive(Debug, Default)]
pub struct ConformanceSuite {
    pub results: Vec<CaseResult>,
}

impl ConformanceSuite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accept(&mut self, name: &str, category: &str, source: &str) {
        self.add(name, category, source, ParserOptions::default(), Expectation::Accept);
    }

    pub fn reject(&mut self, name: &str, category: &str, source: &str, fragment: &'static str) {
        self.add(
            name,
            category,
            source,
            ParserOptions::default(),
            Expectation::Reject(fragment),
        );
    }

    pub fn add(
        &mut self,
        name: &str,
        category: &str,
        source: &str,
        options: ParserOptions,
        expectation: Expectation,
    ) {
        self.results
            .push(run_case(name, category, source, options, expectation));
    }

    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.passed).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &CaseResult> {
        self.results.iter().filter(|r| !r.passed)
    }

    /// Passed and total counts per category, sorted by category name.
    pub fn by_category(&self) -> BTreeMap<&str, (usize, usize)> {
        let mut categories: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
        for result in &self.results {
            let entry = categories.entry(result.category.as_str()).or_insert((0, 0));
            if result.passed {
                entry.0 += 1;
            }
            entry.1 += 1;
        }
        categories
    }

    pub fn summary(&self) -> String {
        let total = self.results.len();
        let passed = self.passed();
        let pass_rate = if total > 0 {
            (passed as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        let mut out = String::new();
        out.push_str("=== ECMAScript Conformance Summary ===\n");
        out.push_str(&format!("Total cases: {}\n", total));
        out.push_str(&format!("Passed: {}\n", passed));
        out.push_str(&format!("Failed: {}\n", total - passed));
        out.push_str(&format!("Pass rate: {:.2}%\n", pass_rate));

        out.push_str("\n--- Results by Category ---\n");
        for (category, (passed_count, total_count)) in self.by_category() {
            out.push_str(&format!("  {}: {}/{}\n", category, passed_count, total_count));
        }

        let failures: Vec<_> = self.failures().collect();
        if !failures.is_empty() {
            out.push_str("\n--- Failed Cases ---\n");
            for failure in failures.iter().take(10) {
                out.push_str(&format!(
                    "  [{}] {}: {}\n      {}\n",
                    failure.category,
                    failure.name,
                    failure.failure.as_deref().unwrap_or("Unknown error"),
                    failure.source
                ));
            }
            if failures.len() > 10 {
                out.push_str(&format!("  ... and {} more failures\n", failures.len() - 10));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_case_accept() {
        let result = run_case("ok", "basic", "var a = 1;", ParserOptions::default(), Expectation::Accept);
        assert!(result.passed);
        assert!(result.failure.is_none());
    }

    #[test]
    fn test_run_case_reject_mismatch() {
        let result = run_case(
            "wrong",
            "basic",
            "var a = 1;",
            ParserOptions::default(),
            Expectation::Reject("Semi-colon expected"),
        );
        assert!(!result.passed);
        assert!(result.failure.unwrap().contains("parsed cleanly"));
    }

    #[test]
    fn test_summary_groups_categories() {
        let mut suite = ConformanceSuite::new();
        suite.accept("a", "statements", "if (a) b;");
        suite.reject("b", "statements", "a b", "Semi-colon expected");
        suite.accept("c", "expressions", "a +;");
        let categories = suite.by_category();
        assert_eq!(categories["statements"], (2, 2));
        assert_eq!(categories["expressions"], (0, 1));
        assert!(suite.summary().contains("Pass rate: 66.67%"));
    }
}
