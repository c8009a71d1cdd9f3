//! Configuration utility functions.

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Check whether a string is a css color value.
///
/// Accepts hex colors (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`), color
/// functions (`rgb(...)`, `hsl(...)`, `oklch(...)`, `var(...)`, ...) and
/// bare named colors (`rebeccapurple`).
///
/// # Examples
/// ```ignore
/// is_css_color("#3b82f6")          -> true
/// is_css_color("rgb(59 130 246)")  -> true
/// is_css_color("tomato")           -> true
/// is_css_color("#3b82f")           -> false
/// is_css_color("blue-ish")         -> false
/// ```
pub fn is_css_color(value: &str) -> bool {
    static RE_HEX: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^#(?:[0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap()
    });
    static RE_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^(?:rgba?|hsla?|hwb|lab|lch|oklab|oklch|color|var)\([^()]*(?:\([^()]*\)[^()]*)*\)$")
            .unwrap()
    });
    static RE_NAMED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z]+$").unwrap());

    let value = value.trim();
    RE_HEX.is_match(value) || RE_FUNCTION.is_match(value) || RE_NAMED.is_match(value)
}

/// Check whether a string can be used as a form endpoint.
///
/// Either an absolute path on the current site or a full http(s) url.
pub fn is_endpoint(value: &str) -> bool {
    if value.starts_with('/') && !value.starts_with("//") {
        return true;
    }
    url::Url::parse(value).is_ok_and(|url| matches!(url.scheme(), "http" | "https"))
}

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/site/pages/product/  ← cwd
/// /home/user/site/lander.toml     ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, config_name)
}

/// Same as [`find_config_file`], starting from `start` instead of cwd.
pub fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    // First check if config_name is an absolute path
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    // Walk up from start looking for config file
    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        // Move to parent directory
        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_is_css_color() {
        assert!(is_css_color("#3b82f6"));
        assert!(is_css_color("#fff"));
        assert!(is_css_color("#ffff"));
        assert!(is_css_color("#3b82f6cc"));
        assert!(is_css_color("rgb(59 130 246)"));
        assert!(is_css_color("rgba(59, 130, 246, 0.5)"));
        assert!(is_css_color("var(--brand, #000)"));
        assert!(is_css_color("color(display-p3 1 0 0)"));
        assert!(is_css_color("tomato"));

        assert!(!is_css_color("#3b82f"));
        assert!(!is_css_color("#ggg"));
        assert!(!is_css_color("blue-ish"));
        assert!(!is_css_color("rgb(1, 2, 3"));
        assert!(!is_css_color(""));
    }

    #[test]
    fn test_is_endpoint() {
        assert!(is_endpoint("/api/early-access"));
        assert!(is_endpoint("https://example.com/signup"));
        assert!(is_endpoint("http://localhost:8080/signup"));

        assert!(!is_endpoint("api/early-access"));
        assert!(!is_endpoint("//cdn.example.com/x"));
        assert!(!is_endpoint("mailto:team@example.com"));
        assert!(!is_endpoint(""));
    }

    #[test]
    fn test_find_config_file_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("pages/product");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("lander.toml"), "").unwrap();

        let found = find_config_file_from(&nested, Path::new("lander.toml")).unwrap();
        assert_eq!(found, dir.path().join("lander.toml"));
    }

    #[test]
    fn test_find_config_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_config_file_from(dir.path(), Path::new("no-such-lander.toml")).is_none());
    }
}
