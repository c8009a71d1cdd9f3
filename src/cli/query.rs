//! `lander get` and `lander show`.

use std::path::Path;

use anyhow::{Result, bail};

use super::args::{Format, PageArgs};
use super::common::{config_json, load_landing, render_value, write_output};

/// Print the value at `path`. A missing path is an error.
pub fn get_value(config_name: &Path, path: &str, args: &PageArgs) -> Result<()> {
    let landing = load_landing(config_name, args)?;
    let Some(value) = landing.get(path) else {
        bail!("no value at `{path}`");
    };
    write_output(None, &render_value(&value)?)
}

/// Print the whole merged configuration.
pub fn show_config(config_name: &Path, format: Format, args: &PageArgs) -> Result<()> {
    let landing = load_landing(config_name, args)?;
    let rendered = match format {
        Format::Json => config_json(landing.config())?,
        Format::Toml => landing.config().to_toml()?,
    };
    write_output(None, &rendered)
}
