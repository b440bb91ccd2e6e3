//! Text manipulation utilities.

/// Capitalizes the first character of a string and lowercases the rest.
///
/// # Examples
///
/// ```
/// # use core_rtx::text_utils::capitalize_string;
/// assert_eq!(capitalize_string("wordpress"), "Wordpress");
/// assert_eq!(capitalize_string("WORLD"), "World");
/// assert_eq!(capitalize_string(""), "");
/// ```
pub fn capitalize_string(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
    }
}

/// Rule line framing robots.txt section banners.
pub const BANNER_RULE: &str = "# ======================";

/// The three comment lines that open a named robots.txt section.
///
/// ```
/// # use core_rtx::text_utils::banner;
/// assert_eq!(banner("SITEMAP")[1], "# SITEMAP");
/// ```
pub fn banner(title: &str) -> [String; 3] {
    [BANNER_RULE.to_string(), format!("# {title}"), BANNER_RULE.to_string()]
}
