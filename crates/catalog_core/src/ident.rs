//! Identifier and URL normalization.

use std::fmt;

use url::Url;

/// Final non-empty `/` segment of a URL-like string.
///
/// Already-normalized identifiers come back unchanged.
pub fn last_path_segment(url: &str) -> String {
    url.split('/')
        .filter(|segment| !segment.is_empty())
        .last()
        .unwrap_or_default()
        .to_string()
}

/// Part after the last `.` of a composite identifier such as `one-piece.dkw`.
///
/// Only request paths use this; callers always see the full identifier.
pub fn composite_suffix(id: &str) -> &str {
    id.rsplit('.').next().unwrap_or(id)
}

/// Part of `href` after the last occurrence of `base`, or all of `href` when
/// `base` does not occur.
pub fn relative_to<'a>(href: &'a str, base: &str) -> &'a str {
    if base.is_empty() {
        return href;
    }
    match href.rfind(base) {
        Some(pos) => &href[pos + base.len()..],
        None => href,
    }
}

/// Resolves an image path against `origin`. Paths that already carry a
/// scheme are returned as given; protocol-relative and dotted paths follow
/// URL resolution rules.
pub fn absolute_url(path: &str, origin: &str) -> String {
    if Url::parse(path).is_ok() {
        return path.to_string();
    }
    match Url::parse(origin).and_then(|base| base.join(path)) {
        Ok(resolved) => resolved.into(),
        Err(_) => format!(
            "{}/{}",
            origin.trim_end_matches('/'),
            path.trim_start_matches('/')
        ),
    }
}

/// A content language code.
///
/// Stored as given; case is only normalized at the two boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language(String);

impl Language {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Upper-case form used in returned records.
    pub fn for_output(&self) -> String {
        self.0.to_uppercase()
    }

    /// Lower-case form used when building request paths.
    pub fn for_path(&self) -> String {
        self.0.to_lowercase()
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::new("en")
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_segment_ignores_trailing_slash() {
        assert_eq!(last_path_segment("/manga/one-piece.dkw"), "one-piece.dkw");
        assert_eq!(last_path_segment("https://x.to/manga/abc/"), "abc");
        assert_eq!(last_path_segment("plain"), "plain");
        assert_eq!(last_path_segment("///"), "");
    }

    #[test]
    fn composite_suffix_takes_last_dot_segment() {
        assert_eq!(composite_suffix("123.some-title"), "some-title");
        assert_eq!(composite_suffix("a.b.c"), "c");
        assert_eq!(composite_suffix("no-dot"), "no-dot");
    }

    #[test]
    fn relative_to_uses_last_occurrence() {
        assert_eq!(relative_to("/read/dkw/en/dkw-1", "dkw"), "-1");
        assert_eq!(relative_to("/read/other", "dkw"), "/read/other");
        assert_eq!(relative_to("/read/x", ""), "/read/x");
    }

    #[test]
    fn relative_images_become_absolute() {
        assert_eq!(
            absolute_url("assets/v1.jpg", "https://mangafire.to"),
            "https://mangafire.to/assets/v1.jpg"
        );
        assert_eq!(
            absolute_url("/assets/v1.jpg", "https://mangafire.to/"),
            "https://mangafire.to/assets/v1.jpg"
        );
        assert_eq!(
            absolute_url("https://cdn.example/v1.jpg", "https://mangafire.to"),
            "https://cdn.example/v1.jpg"
        );
    }

    #[test]
    fn protocol_relative_and_dotted_paths_resolve() {
        assert_eq!(
            absolute_url("//static.mfcdn.nl/v1.jpg", "https://mangafire.to"),
            "https://static.mfcdn.nl/v1.jpg"
        );
        assert_eq!(
            absolute_url("../covers/v1.jpg", "https://mangafire.to/"),
            "https://mangafire.to/covers/v1.jpg"
        );
    }

    #[test]
    fn language_case_only_changes_at_boundaries() {
        let lang = Language::new("En");
        assert_eq!(lang.to_string(), "En");
        assert_eq!(lang.for_output(), "EN");
        assert_eq!(lang.for_path(), "en");
    }
}
