const ALLOWED_PUNCTUATION: &[char] = &['.', ',', '!', '?', '-', '_', '/'];

/// ASCII whitespace including vertical tab. Unicode spaces such as NBSP are not kept.
fn is_plain_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r')
}

fn is_hangul_syllable(c: char) -> bool {
    ('\u{AC00}'..='\u{D7A3}').contains(&c)
}

/// Sanitizes user text before it is stored.
///
/// Keeps ASCII letters and digits, ASCII whitespace, Hangul syllables and `. , ! ? - _ /`;
/// everything else is dropped. The result is trimmed.
pub fn clean(s: &str) -> String {
    s.chars()
        .filter(|&c| {
            c.is_ascii_alphanumeric()
                || is_plain_whitespace(c)
                || is_hangul_syllable(c)
                || ALLOWED_PUNCTUATION.contains(&c)
        })
        .collect::<String>()
        .trim()
        .to_string()
}

/// `None`, empty and whitespace-only all count as "no value given".
pub fn provided(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Escapes quote and backslash for embedding in a JSON string literal.
/// Newlines are left as they are.
pub fn escape_json(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
