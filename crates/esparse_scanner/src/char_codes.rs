//! Character classes used by the scanner.

pub const LINE_SEPARATOR: char = '\u{2028}';
pub const PARAGRAPH_SEPARATOR: char = '\u{2029}';

/// Check if a character is a line terminator.
#[inline]
pub fn is_line_break(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | LINE_SEPARATOR | PARAGRAPH_SEPARATOR)
}

/// Check if a character is whitespace (not line break).
#[inline]
pub fn is_white_space_single_line(ch: char) -> bool {
    matches!(
        ch,
        ' ' | '\t'
            | '\u{000B}' // vertical tab
            | '\u{000C}' // form feed
            | '\u{00A0}' // no-break space
            | '\u{1680}' // ogham space mark
            | '\u{2000}'..='\u{200A}' // various spaces
            | '\u{202F}' // narrow no-break space
            | '\u{205F}' // medium mathematical space
            | '\u{3000}' // ideographic space
            | '\u{FEFF}' // BOM / zero-width no-break space
    )
}

#[inline]
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

#[inline]
pub fn is_octal_digit(ch: char) -> bool {
    matches!(ch, '0'..='7')
}

#[inline]
pub fn is_binary_digit(ch: char) -> bool {
    matches!(ch, '0' | '1')
}

#[inline]
pub fn is_hex_digit(ch: char) -> bool {
    ch.is_ascii_hexdigit()
}
