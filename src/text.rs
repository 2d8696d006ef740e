//! String helpers, as free functions plus a [`StringExt`] extension trait.

/// True when the string reads the same forwards and backwards, ignoring
/// non-alphanumeric characters and case.
pub fn is_palindrome(s: &str) -> bool {
    let normalized: Vec<char> = s
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    normalized.iter().eq(normalized.iter().rev())
}

/// Insert a space before each uppercase character, trimming the result.
///
/// `"helloWorldAgain"` becomes `"hello World Again"`.
pub fn add_spaces_to_camel_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for c in s.chars() {
        if c.is_uppercase() {
            out.push(' ');
        }
        out.push(c);
    }
    out.trim().to_string()
}

/// First letter of each separator-delimited word, uppercased and
/// concatenated. Empty words contribute nothing.
pub fn initials(s: &str, separator: &str) -> String {
    s.split(separator)
        .filter_map(|word| word.chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect()
}

/// Collapse an absent-or-empty string to `None`.
pub fn none_if_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

/// `Some` for a non-empty string, `None` otherwise.
pub fn some_if_not_empty(s: &str) -> Option<&str> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

/// Zero-pad a day or month number to two digits.
pub fn lead_zero(value: u32) -> String {
    format!("{value:02}")
}

/// The helpers above as methods on string slices.
pub trait StringExt {
    fn is_palindrome(&self) -> bool;
    fn add_spaces_to_camel_case(&self) -> String;
    fn initials(&self, separator: &str) -> String;
    fn some_if_not_empty(&self) -> Option<&str>;
}

impl StringExt for str {
    fn is_palindrome(&self) -> bool {
        is_palindrome(self)
    }

    fn add_spaces_to_camel_case(&self) -> String {
        add_spaces_to_camel_case(self)
    }

    fn initials(&self, separator: &str) -> String {
        initials(self, separator)
    }

    fn some_if_not_empty(&self) -> Option<&str> {
        some_if_not_empty(self)
    }
}
