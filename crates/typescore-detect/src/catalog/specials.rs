//! Punctuation allowed inside alphanumeric tokens.

/// Script-specific periods, parentheses, question and exclamation marks that
/// may follow the letter (or digit-letter) anchor of an alphanumeric token.
pub const ALLOWED_SPECIALS: &[char] = &[
    // Periods
    '\u{002E}', '\u{06D4}', '\u{3002}', '\u{FE52}', '\u{FF0E}', '\u{FF61}',
    // Parentheses
    '\u{0028}', '\u{0029}', '\u{27EE}', '\u{27EF}', '\u{FF08}', '\u{FF09}',
    // Question marks
    '\u{003F}', '\u{00BF}', '\u{037E}', '\u{055E}', '\u{061F}', '\u{1367}', '\u{1945}',
    '\u{2047}', '\u{2048}', '\u{2049}', '\u{2CFA}', '\u{2CFB}', '\u{2E2E}', '\u{A60F}',
    '\u{A6F7}', '\u{FE16}', '\u{FE56}', '\u{FF1F}',
    '\u{11143}', // chakma question mark
    '\u{1E95F}', // adlam initial question mark
    // Exclamation marks (U+2048 and U+2049 are listed above)
    '\u{0021}', '\u{00A1}', '\u{01C3}', '\u{055C}', '\u{07F9}', '\u{109F}', '\u{1944}',
    '\u{203C}', '\u{AA77}', '\u{FE15}', '\u{FE57}', '\u{FF01}',
    '\u{1E95E}', // adlam initial exclamation mark
];

/// Render the allowed specials as the body of a regex character class.
pub(crate) fn class_body() -> String {
    ALLOWED_SPECIALS
        .iter()
        .map(|c| regex::escape(c.encode_utf8(&mut [0u8; 4])))
        .collect()
}
