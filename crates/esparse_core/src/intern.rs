//! String interning for identifier and keyword text.
//!
//! The token stream interns every identifier it produces so that the parser
//! can compare contextual words such as `get`, `of` or `async` as integers.

use lasso::{Spur, ThreadedRodeo};
use std::fmt;
use std::sync::Arc;

/// An interned string identifier. This is a lightweight handle (u32)
/// that can be used to look up the actual string content.
///
/// Comparing two `InternedString` values is an O(1) integer comparison.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct InternedString(Spur);

impl fmt::Debug for InternedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InternedString({:?})", self.0)
    }
}

/// Thread-safe string interner.
///
/// Cloning shares the underlying table, so a parse result can hand its
/// interner to callers that need to resolve identifier handles later.
#[derive(Clone)]
pub struct StringInterner {
    rodeo: Arc<ThreadedRodeo>,
}

impl StringInterner {
    pub fn new() -> Self {
        Self {
            rodeo: Arc::new(ThreadedRodeo::new()),
        }
    }

    /// Intern a string, returning a handle to the interned value.
    /// If the string was already interned, returns the existing handle.
    #[inline]
    pub fn intern(&self, s: &str) -> InternedString {
        InternedString(self.rodeo.get_or_intern(s))
    }

    /// Intern a static string. More efficient than `intern` for string literals.
    #[inline]
    pub fn intern_static(&self, s: &'static str) -> InternedString {
        InternedString(self.rodeo.get_or_intern_static(s))
    }

    /// Look up an already-interned string without interning it if absent.
    #[inline]
    pub fn get(&self, s: &str) -> Option<InternedString> {
        self.rodeo.get(s).map(InternedString)
    }

    #[inline]
    pub fn resolve(&self, key: InternedString) -> &str {
        self.rodeo.resolve(&key.0)
    }

    pub fn len(&self) -> usize {
        self.rodeo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rodeo.is_empty()
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StringInterner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringInterner")
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_and_resolve() {
        let interner = StringInterner::new();
        let a = interner.intern("async");
        let b = interner.intern("async");
        let c = interner.intern("await");

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(interner.resolve(a), "async");
        assert_eq!(interner.resolve(c), "await");
    }

    #[test]
    fn test_get() {
        let interner = StringInterner::new();
        assert!(interner.get("from").is_none());
        let a = interner.intern("from");
        assert_eq!(interner.get("from"), Some(a));
    }

    #[test]
    fn test_intern_static_matches_dynamic() {
        let interner = StringInterner::new();
        let a = interner.intern_static("of");
        let b = interner.intern(&String::from("of"));
        assert_eq!(a, b);
    }

    #[test]
    fn test_clone_shares_table() {
        let interner = StringInterner::new();
        let shared = interner.clone();
        let key = interner.intern("target");
        assert_eq!(shared.resolve(key), "target");
    }
}
