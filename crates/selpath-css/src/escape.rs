//! Identifier serialization for selector fragments.
//!
//! [CSSOM § 2.1 Common Serializing Idioms](https://drafts.csswg.org/cssom/#common-serializing-idioms)
//!
//! Every id, class token and attribute value placed into a generated selector
//! goes through [`serialize_identifier`], so the emitted fragment tokenizes
//! back to the original text under
//! [CSS Syntax § 4.3.7 Consume an escaped code point](https://www.w3.org/TR/css-syntax-3/#consume-escaped-code-point).

/// [CSSOM § 2.1 serialize an identifier](https://drafts.csswg.org/cssom/#serialize-an-identifier)
///
/// "To serialize an identifier means to create a string represented by the
/// concatenation of, for each character of the identifier:"
///
/// - "If the character is NULL (U+0000), then the REPLACEMENT CHARACTER (U+FFFD)."
/// - "If the character is in the range [\1-\1f] (U+0001 to U+001F) or is U+007F,
///   then the character escaped as code point."
/// - "If the character is the first character and is in the range [0-9]
///   (U+0030 to U+0039), then the character escaped as code point."
/// - "If the character is the second character and is in the range [0-9]
///   (U+0030 to U+0039) and the first character is a "-" (U+002D), then the
///   character escaped as code point."
/// - "If the character is the first character and is a "-" (U+002D), and there
///   is no second character, then the escaped character."
/// - "If the character is not handled by one of the above rules and is greater
///   than or equal to U+0080, is "-" (U+002D) or "_" (U+005F), or is in one of
///   the ranges [0-9] (U+0030 to U+0039), [A-Z] (U+0041 to U+005A), or \[a-z]
///   (U+0061 to U+007A), then the character itself."
/// - "Otherwise, the escaped character."
#[must_use]
pub fn serialize_identifier(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len());
    let starts_with_hyphen = ident.starts_with('-');
    let is_lone_hyphen = ident == "-";

    for (index, c) in ident.chars().enumerate() {
        match c {
            '\0' => out.push('\u{FFFD}'),
            '\u{1}'..='\u{1F}' | '\u{7F}' => push_code_point_escape(&mut out, c),
            '0'..='9' if index == 0 || (index == 1 && starts_with_hyphen) => {
                push_code_point_escape(&mut out, c);
            }
            '-' if is_lone_hyphen => out.push_str("\\-"),
            c if !c.is_ascii() || c == '-' || c == '_' || c.is_ascii_alphanumeric() => {
                out.push(c);
            }
            c => {
                out.push('\\');
                out.push(c);
            }
        }
    }
    out
}

/// "To escape a character as code point means to create a string of "\"
/// (U+005C), followed by the Unicode code point as the smallest possible
/// number of hexadecimal digits in the range 0-9 a-f (U+0030 to U+0039 and
/// U+0061 to U+0066) to represent the code point in base 16, followed by a
/// single SPACE (U+0020)."
fn push_code_point_escape(out: &mut String, c: char) {
    out.push('\\');
    out.push_str(&format!("{:x}", u32::from(c)));
    out.push(' ');
}
