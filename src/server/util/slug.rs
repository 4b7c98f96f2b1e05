use chrono::Utc;
use deunicode::deunicode;

/// Transliterates `input` to ASCII, lowercases it and keeps only letters and
/// digits, joining words with single dashes. Whitespace, `-` and `_` separate
/// words; every other character is dropped.
pub fn slugify(input: &str) -> String {
    let ascii = deunicode(input);
    let mut slug = String::with_capacity(ascii.len());
    let mut pending_dash = false;

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else if c.is_whitespace() || c == '-' || c == '_' {
            pending_dash = true;
        }
    }

    slug
}

/// Builds a listing slug from its title with a millisecond timestamp suffix.
pub fn listing_slug(title: &str) -> String {
    let millis = Utc::now().timestamp_millis();
    let base = slugify(title);

    if base.is_empty() {
        millis.to_string()
    } else {
        format!("{}-{}", base, millis)
    }
}
