// crates/phonebook-cli/src/commands/search.rs - Contact Search Command
//
// Criteria are `field=value` terms combined with AND. Field names are the
// fixed contact columns (фамилия, имя, отчество, организация, рабочий,
// личный, or their English aliases).

use anyhow::{Context as AnyhowContext, Result};
use console::style;
use phonebook_core::SearchCriteria;

use crate::context::Context;

/// Search contacts by field values
///
/// Malformed terms and unknown fields are rejected before the file is read.
pub fn handle(ctx: &Context, terms: &[String], json: bool) -> Result<()> {
    let criteria = SearchCriteria::from_terms(terms).context("Invalid search criteria")?;
    let found = ctx.store.search(&criteria)?;

    if json {
        return super::print_json(&found);
    }

    println!("{}", style("🔍 Found contacts:").bold());
    for contact in found {
        println!("{}", contact);
    }

    Ok(())
}
