//! Operator precedence for the left-associative binary operators.
//!
//! `**`, `??`, the conditional and assignment operators have dedicated
//! parse functions and are not climbed through this table.

use esparse_ast::syntax_kind::SyntaxKind;

/// Binary operator precedence levels, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum OperatorPrecedence {
    LogicalOr = 6,
    LogicalAnd = 7,
    BitwiseOr = 8,
    BitwiseXor = 9,
    BitwiseAnd = 10,
    Equality = 11,
    Relational = 12,
    Shift = 13,
    Additive = 14,
    Multiplicative = 15,
}

impl OperatorPrecedence {
    /// The next tighter level, used for the right operand of a
    /// left-associative operator.
    pub fn next(self) -> Option<OperatorPrecedence> {
        use OperatorPrecedence::*;
        match self {
            LogicalOr => Some(LogicalAnd),
            LogicalAnd => Some(BitwiseOr),
            BitwiseOr => Some(BitwiseXor),
            BitwiseXor => Some(BitwiseAnd),
            BitwiseAnd => Some(Equality),
            Equality => Some(Relational),
            Relational => Some(Shift),
            Shift => Some(Additive),
            Additive => Some(Multiplicative),
            Multiplicative => None,
        }
    }
}

/// Get the binary operator precedence for a given token kind. `in` is not
/// an operator while `allow_in` is false.
pub fn get_binary_operator_precedence(kind: SyntaxKind, allow_in: bool) -> Option<OperatorPrecedence> {
    let precedence = match kind {
        SyntaxKind::BarBarToken => OperatorPrecedence::LogicalOr,
        SyntaxKind::AmpersandAmpersandToken => OperatorPrecedence::LogicalAnd,
        SyntaxKind::BarToken => OperatorPrecedence::BitwiseOr,
        SyntaxKind::CaretToken => OperatorPrecedence::BitwiseXor,
        SyntaxKind::AmpersandToken => OperatorPrecedence::BitwiseAnd,
        SyntaxKind::EqualsEqualsToken
        | SyntaxKind::ExclamationEqualsToken
        | SyntaxKind::EqualsEqualsEqualsToken
        | SyntaxKind::ExclamationEqualsEqualsToken => OperatorPrecedence::Equality,
        SyntaxKind::LessThanToken
        | SyntaxKind::GreaterThanToken
        | SyntaxKind::LessThanEqualsToken
        | SyntaxKind::GreaterThanEqualsToken
        | SyntaxKind::InstanceOfKeyword => OperatorPrecedence::Relational,
        SyntaxKind::InKeyword if allow_in => OperatorPrecedence::Relational,
        SyntaxKind::LessThanLessThanToken
        | SyntaxKind::GreaterThanGreaterThanToken
        | SyntaxKind::GreaterThanGreaterThanGreaterThanToken => OperatorPrecedence::Shift,
        SyntaxKind::PlusToken | SyntaxKind::MinusToken => OperatorPrecedence::Additive,
        SyntaxKind::AsteriskToken | SyntaxKind::SlashToken | SyntaxKind::PercentToken => {
            OperatorPrecedence::Multiplicative
        }
        _ => return None,
    };
    Some(precedence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_depends_on_context() {
        assert_eq!(
            get_binary_operator_precedence(SyntaxKind::InKeyword, true),
            Some(OperatorPrecedence::Relational)
        );
        assert_eq!(get_binary_operator_precedence(SyntaxKind::InKeyword, false), None);
    }

    #[test]
    fn test_levels_are_ordered() {
        assert!(OperatorPrecedence::LogicalOr < OperatorPrecedence::LogicalAnd);
        assert!(OperatorPrecedence::Additive < OperatorPrecedence::Multiplicative);
        assert_eq!(OperatorPrecedence::Multiplicative.next(), None);
        assert_eq!(
            get_binary_operator_precedence(SyntaxKind::QuestionQuestionToken, true),
            None
        );
        assert_eq!(
            get_binary_operator_precedence(SyntaxKind::AsteriskAsteriskToken, true),
            None
        );
    }
}
