//! `lander apply`: bind the configuration to an HTML file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::args::PageArgs;
use super::common::{load_landing, write_output};
use crate::dom::Page;
use crate::interact::{FORM_FLAG, MENU_FLAG, TOGGLE_FLAG};
use crate::{debug, log};

/// Read `input`, apply theme and meta tags, write the page back out.
pub fn apply_page(
    config_name: &Path,
    input: &Path,
    output: Option<&Path>,
    args: &PageArgs,
) -> Result<()> {
    let landing = load_landing(config_name, args)?;
    let html = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let mut page = Page::parse(&html)?;

    landing.bind(&mut page);
    report_markup(&page);

    write_output(output, &page.to_html())?;
    if let Some(output) = output {
        log!("apply"; "{} -> {}", input.display(), output.display());
    }
    Ok(())
}

/// Note which interaction hooks the markup offers.
fn report_markup(page: &Page) {
    for flag in [FORM_FLAG, TOGGLE_FLAG, MENU_FLAG] {
        let count = page
            .query_selector_all(&format!("[{flag}]"))
            .map_or(0, |found| found.len());
        debug!("apply"; "{count} element(s) with `{flag}`");
    }
}
