//! Configuration error types.

use super::FieldPath;
use crate::merge::PathError;
use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Config serialization error")]
    TomlSer(#[from] toml::ser::Error),

    /// The merged tree no longer fits the typed configuration.
    #[error("override does not fit the page configuration: {0}")]
    Override(#[source] serde_json::Error),

    #[error("invalid value for `{path}`: {source}")]
    InvalidValue {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Path(#[from] PathError),

    #[error("Config validation error: {0}")]
    Validation(String),

    // NOTE: No #[from] here - we don't want source() which causes duplicate output
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

// ============================================================================
// ConfigDiagnostic
// ============================================================================

/// A single configuration diagnostic
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    /// Config field path (e.g., "theme.primaryColor")
    pub field: String,
    /// Error description
    pub message: String,
    /// Fix hint (optional)
    pub hint: Option<String>,
}

impl ConfigDiagnostic {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Field path in cyan brackets
        writeln!(f, "{}{}{}", "[".dimmed(), self.field.cyan(), "]".dimmed())?;
        // Error message with red bullet
        write!(f, "{} {}", "→".red(), self.message)?;
        // Hint in yellow
        if let Some(hint) = &self.hint {
            write!(f, "\n  {} {}", "hint:".yellow(), hint)?;
        }
        Ok(())
    }
}

// ============================================================================
// ConfigDiagnostics
// ============================================================================

#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
    /// Collected warnings (suspicious but usable values, unknown keys).
    warnings: Vec<ConfigDiagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) {
        self.errors.push(ConfigDiagnostic::new(field.as_str(), message));
    }

    /// Add an error with a hint.
    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.errors
            .push(ConfigDiagnostic::new(field.as_str(), message).with_hint(hint));
    }

    /// Add a warning (collected for batch display).
    pub fn warn(&mut self, field: FieldPath, message: impl Into<String>) {
        self.warnings
            .push(ConfigDiagnostic::new(field.as_str(), message));
    }

    /// Add a warning for a key that has no `FieldPath` (unknown keys).
    pub fn warn_at(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigDiagnostic::new(field, message));
    }

    /// Print collected warnings in a grouped format.
    ///
    /// Call this after validation to display all warnings at once.
    pub fn print_warnings(&self) {
        if self.warnings.is_empty() {
            return;
        }

        crate::log!("warning"; "{} suspicious config values:", self.warnings.len());
        for warning in &self.warnings {
            eprintln!("- {}: {}", warning.field, warning.message);
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    pub fn warnings(&self) -> &[ConfigDiagnostic] {
        &self.warnings
    }

    /// Convert to Result (returns Err if there are errors).
    pub fn into_result(self) -> Result<(), Self> {
        if !self.has_errors() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\n", "config validation failed:".red().bold())?;
        for (i, err) in self.errors.iter().enumerate() {
            write!(f, "{err}")?;
            if i + 1 < self.errors.len() {
                writeln!(f, "\n")?;
            }
        }
        if self.errors.len() > 1 {
            write!(
                f,
                "\n\n{} {} {}",
                "found".dimmed(),
                self.errors.len().to_string().red().bold(),
                "errors".dimmed()
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("lander.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("lander.toml"));

        let validation_err = ConfigError::Validation("Test validation error".to_string());
        let display = format!("{validation_err}");
        assert!(display.contains("Test validation error"));
    }

    #[test]
    fn test_diagnostics_into_result() {
        let mut diag = ConfigDiagnostics::new();
        diag.warn(FieldPath::new("meta.description"), "too long");
        assert!(diag.is_empty());
        assert_eq!(diag.warnings().len(), 1);

        diag.error_with_hint(
            FieldPath::new("theme.primaryColor"),
            "not a css color",
            "use a hex value like #3b82f6",
        );
        let err = diag.into_result().unwrap_err();
        assert_eq!(err.len(), 1);
        assert_eq!(err.errors()[0].field, "theme.primaryColor");
        assert!(err.errors()[0].hint.is_some());

        let display = format!("{err}");
        assert!(display.contains("not a css color"));
    }
}
