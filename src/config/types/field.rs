//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// A type-safe wrapper for config field paths.
///
/// Sections declare their known keys with [`config_fields!`], which
/// generates a `FIELDS` constant holding one `FieldPath` per key.
///
/// # Example
///
/// ```ignore
/// config_fields!(ThemeConfig => ThemeConfigFields, "theme" {
///     primary_color => "primaryColor",
/// });
///
/// // Usage:
/// diag.error(ThemeConfig::FIELDS.primary_color, "not a css color");
/// landing.get_field(ThemeConfig::FIELDS.primary_color);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}

/// Generate a `FIELDS` constant with the dotted path of every known key.
macro_rules! config_fields {
    ($ty:ident => $fields:ident, $section:literal { $($name:ident => $key:literal),* $(,)? }) => {
        /// Generated field path accessors.
        #[allow(non_camel_case_types)]
        pub struct $fields {
            $(pub $name: $crate::config::FieldPath,)*
        }

        impl $ty {
            /// Field paths for diagnostics and path access.
            pub const FIELDS: $fields = $fields {
                $($name: $crate::config::FieldPath::new(concat!($section, ".", $key)),)*
            };
        }
    };
}

pub(crate) use config_fields;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_path_as_str() {
        const PATH: FieldPath = FieldPath::new("theme.primaryColor");
        assert_eq!(PATH.as_str(), "theme.primaryColor");
        assert_eq!(PATH.as_ref(), "theme.primaryColor");
        assert!(format!("{PATH}").contains("`theme.primaryColor`"));
    }
}
