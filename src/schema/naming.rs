//! Identifier case conversion.

/// Convert a CamelCase identifier to snake_case.
///
/// A run of uppercase letters is one acronym token (`HTTPServer` → `http_server`,
/// `UserID` → `user_id`); a separator is inserted where a lowercase letter or
/// digit is followed by an uppercase one. Already snake_case input is returned
/// unchanged.
pub fn snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                let prev = chars[i - 1];
                let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
                if prev.is_lowercase()
                    || prev.is_ascii_digit()
                    || (prev.is_uppercase() && next_is_lower)
                {
                    result.push('_');
                }
            }
            result.extend(c.to_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}
