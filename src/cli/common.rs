//! Common utilities shared across CLI commands.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use super::args::PageArgs;
use crate::config::{self, PageConfig};
use crate::debug;
use crate::landing::LandingPage;

/// Build the page configuration a command works on.
///
/// Preset, then the override file (unless `--no-config`), then `--set`
/// assignments in order.
pub fn load_landing(config_name: &Path, args: &PageArgs) -> Result<LandingPage> {
    let base = args.page.config()?;
    let overrides = if args.no_config {
        Value::Object(Default::default())
    } else {
        config::discover_override(config_name)?
    };

    let mut landing = LandingPage::from_base(&base, overrides)
        .with_context(|| format!("failed to merge {}", config_name.display()))?;
    landing.set_all(args.set.iter().map(String::as_str))?;

    debug!("config"; "preset {:?}, {} assignment(s)", args.page, args.set.len());
    Ok(landing)
}

/// Render a config value for the terminal: strings bare, the rest as JSON.
pub fn render_value(value: &Value) -> Result<String> {
    Ok(match value {
        Value::String(s) => s.clone(),
        Value::Object(_) | Value::Array(_) => serde_json::to_string_pretty(value)?,
        other => other.to_string(),
    })
}

/// Write to `path`, or to stdout when there is none.
pub fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => fs::write(path, content)
            .with_context(|| format!("failed to write {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            if !content.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
            Ok(())
        }
    }
}

/// Merged configuration as pretty JSON.
pub fn config_json(config: &PageConfig) -> Result<String> {
    Ok(serde_json::to_string_pretty(config)?)
}
