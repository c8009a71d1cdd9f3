//! `lander validate`: check the merged configuration.

use std::path::Path;

use anyhow::Result;

use super::args::PageArgs;
use super::common::load_landing;
use crate::log;

/// Validate the configuration the other commands would use.
///
/// Warnings are printed; errors fail the command.
pub fn validate_config(config_name: &Path, args: &PageArgs) -> Result<()> {
    let landing = load_landing(config_name, args)?;
    landing.config().validate()?;
    log!("validate"; "configuration ok");
    Ok(())
}
