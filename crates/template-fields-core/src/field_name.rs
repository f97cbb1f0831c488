use regex::Regex;

/// Derives a camelCase field identifier from a human-readable template title.
///
/// Everything that is not an ASCII letter, digit, or whitespace is stripped;
/// the remaining words are TitleCased, joined, and the leading character is
/// lowercased. A title with nothing left after stripping yields an empty
/// identifier. No uniqueness check happens here.
pub fn derive_field_name(title: &str) -> String {
    let strip = Regex::new(r"[^A-Za-z0-9\s]").expect("valid regex");
    let stripped = strip.replace_all(title, "");

    let mut joined = String::with_capacity(stripped.len());
    for word in stripped.split_whitespace() {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            joined.push(first.to_ascii_uppercase());
            joined.push_str(&chars.as_str().to_ascii_lowercase());
        }
    }

    let mut chars = joined.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(joined.len());
            out.push(first.to_ascii_lowercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "field_name_test.rs"]
mod tests;
