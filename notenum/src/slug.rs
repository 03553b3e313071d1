/// Turn a free-text topic title into a lower-case, hyphen-delimited slug.
///
/// The title is trimmed and lower-cased, then every run of characters outside
/// `[a-z0-9]` collapses into a single `-`. Hyphens are never left at either
/// end. A title with no ASCII letters or digits yields an empty slug.
pub fn slugify(title: &str) -> String {
    let mut slug = String::new();
    let mut pending_dash = false;
    for ch in title.trim().to_lowercase().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(ch);
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }
    slug
}
