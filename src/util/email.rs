//! Email format validation matching the browser's `type="email"` rule.
//!
//! Follows the WHATWG "valid email address" grammar: one or more atom
//! characters, a single `@`, then dot-separated DNS-style labels (letters,
//! digits, and hyphens, at most 63 characters, no leading or trailing
//! hyphen). Deliberately looser than RFC 5322, just like the browser
//! check it mirrors.

#[cfg(test)]
#[path = "email_test.rs"]
mod email_test;

/// `true` when `value` would pass a browser's built-in email validity
/// check for an `<input type="email">`.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || !local.chars().all(is_atext) {
        return false;
    }
    !domain.is_empty() && domain.split('.').all(is_valid_label)
}

/// Characters permitted in the local part.
fn is_atext(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '.' | '!'
                | '#'
                | '$'
                | '%'
                | '&'
                | '\''
                | '*'
                | '+'
                | '/'
                | '='
                | '?'
                | '^'
                | '_'
                | '`'
                | '{'
                | '|'
                | '}'
                | '~'
                | '-'
        )
}

/// One DNS-style domain label.
fn is_valid_label(label: &str) -> bool {
    let bytes = label.as_bytes();
    if bytes.is_empty() || bytes.len() > 63 {
        return false;
    }
    if bytes[0] == b'-' || bytes[bytes.len() - 1] == b'-' {
        return false;
    }
    bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'-')
}
