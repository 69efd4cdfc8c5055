//! Flag types shared by the scanner, the tree and the parser.

use std::fmt;

bitflags::bitflags! {
    /// Flags for scanned tokens.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TokenFlags: u16 {
        const NONE                              = 0;
        const PRECEDING_LINE_BREAK              = 1 << 0;
        const UNTERMINATED                      = 1 << 1;
        const EXTENDED_UNICODE_ESCAPE           = 1 << 2;
        const SCIENTIFIC                        = 1 << 3;
        const OCTAL                             = 1 << 4;
        const HEX_SPECIFIER                     = 1 << 5;
        const BINARY_SPECIFIER                  = 1 << 6;
        const OCTAL_SPECIFIER                   = 1 << 7;
        const CONTAINS_SEPARATOR                = 1 << 8;
        const UNICODE_ESCAPE                    = 1 << 9;
        const CONTAINS_INVALID_ESCAPE           = 1 << 10;
        /// A string literal holding a raw U+2028 or U+2029.
        const UNESCAPED_LINE_SEPARATOR          = 1 << 11;

        const NUMERIC_LITERAL_FLAGS = Self::SCIENTIFIC.bits()
            | Self::OCTAL.bits()
            | Self::HEX_SPECIFIER.bits()
            | Self::BINARY_SPECIFIER.bits()
            | Self::OCTAL_SPECIFIER.bits()
            | Self::CONTAINS_SEPARATOR.bits();
    }
}

bitflags::bitflags! {
    /// Language features seen during a parse.
    ///
    /// The parser only ever adds to this set.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FeatureSet: u32 {
        const ARRAY_PATTERN_REST                    = 1 << 0;
        const BIGINT                                = 1 << 1;
        const DYNAMIC_IMPORT                        = 1 << 2;
        const GETTER                                = 1 << 3;
        const KEYWORDS_AS_PROPERTIES                = 1 << 4;
        const NUMERIC_SEPARATOR                     = 1 << 5;
        const OBJECT_LITERALS_WITH_SPREAD           = 1 << 6;
        const OBJECT_PATTERN_REST                   = 1 << 7;
        const OPTIONAL_CATCH_BINDING                = 1 << 8;
        const REGEXP_SYNTAX                         = 1 << 9;
        const SETTER                                = 1 << 10;
        const SPREAD_EXPRESSIONS                    = 1 << 11;
        const TRAILING_COMMA                        = 1 << 12;
        const UNESCAPED_UNICODE_LINE_OR_PARAGRAPH_SEP = 1 << 13;
    }
}

impl FeatureSet {
    /// Human-readable names of every feature in the set, in declaration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.iter_names()
            .map(|(name, _)| feature_display_name(name))
            .collect()
    }

    /// Whether every feature of `self` is also in `other`.
    pub fn is_subset_of(&self, other: FeatureSet) -> bool {
        other.contains(*self)
    }
}

fn feature_display_name(flag_name: &'static str) -> &'static str {
    match flag_name {
        "ARRAY_PATTERN_REST" => "array pattern rest",
        "BIGINT" => "bigint",
        "DYNAMIC_IMPORT" => "Dynamic import",
        "GETTER" => "getters",
        "KEYWORDS_AS_PROPERTIES" => "keywords as properties",
        "NUMERIC_SEPARATOR" => "numeric separator",
        "OBJECT_LITERALS_WITH_SPREAD" => "object literals with spread",
        "OBJECT_PATTERN_REST" => "object pattern rest",
        "OPTIONAL_CATCH_BINDING" => "optional catch binding",
        "REGEXP_SYNTAX" => "RegExp syntax",
        "SETTER" => "setters",
        "SPREAD_EXPRESSIONS" => "spread expression",
        "TRAILING_COMMA" => "trailing comma",
        "UNESCAPED_UNICODE_LINE_OR_PARAGRAPH_SEP" => "Unescaped unicode line or paragraph separator",
        other => other,
    }
}

impl fmt::Display for FeatureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.names().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_set_union_only_grows() {
        let mut features = FeatureSet::empty();
        features |= FeatureSet::GETTER;
        let before = features;
        features |= FeatureSet::BIGINT;
        assert!(before.is_subset_of(features));
        assert!(!features.is_subset_of(before));
    }

    #[test]
    fn test_feature_names() {
        let features = FeatureSet::SETTER | FeatureSet::ARRAY_PATTERN_REST;
        assert_eq!(features.names(), vec!["array pattern rest", "setters"]);
        assert_eq!(features.to_string(), "[array pattern rest, setters]");
    }

    #[test]
    fn test_numeric_literal_flags() {
        let flags = TokenFlags::HEX_SPECIFIER | TokenFlags::PRECEDING_LINE_BREAK;
        assert!(flags.intersects(TokenFlags::NUMERIC_LITERAL_FLAGS));
        assert!(!TokenFlags::PRECEDING_LINE_BREAK.intersects(TokenFlags::NUMERIC_LITERAL_FLAGS));
    }
}
