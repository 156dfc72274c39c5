/// Returns true when `token` is exactly ten ASCII digits, optionally preceded
/// by `1` or `+1`. Surrounding whitespace and punctuation are not tolerated.
pub fn is_valid_phone_number(token: &str) -> bool {
    let body = match token.as_bytes() {
        [b'+', b'1', rest @ ..] => rest,
        [b'1', rest @ ..] if rest.len() == 10 => rest,
        all => all,
    };
    body.len() == 10 && body.iter().all(u8::is_ascii_digit)
}

/// Strips every non-digit character. A leading country code `1` is kept, so
/// `5551234567` and `15551234567` stay distinct numbers.
pub fn canonicalize(token: &str) -> String {
    token.chars().filter(char::is_ascii_digit).collect()
}

pub fn canonical_match_key(token: &str) -> Option<String> {
    if !is_valid_phone_number(token) {
        return None;
    }
    Some(canonicalize(token))
}
