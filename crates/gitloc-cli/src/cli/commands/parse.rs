//! `gitloc parse <locator>` – print the grammar-level components.

use anyhow::Result;
use gitloc_core::{parse_locator, ParsedComponents};

pub fn run_parse(locator: &str, scheme: &str) -> Result<()> {
    let components = parse_locator(locator, scheme)?;
    print!("{}", format_components(&components));
    Ok(())
}

pub(crate) fn format_components(c: &ParsedComponents) -> String {
    let field = |v: &Option<String>| v.as_deref().unwrap_or("-").to_string();
    format!(
        "{:<10} {}\n{:<10} {}\n{:<10} {}\n{:<10} {}\n{:<10} {}\n",
        "SCHEME",
        c.scheme,
        "HOST",
        field(&c.host),
        "PATH",
        field(&c.path),
        "QUERY",
        field(&c.query),
        "FRAGMENT",
        field(&c.fragment),
    )
}
