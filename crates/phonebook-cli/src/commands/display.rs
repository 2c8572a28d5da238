use anyhow::Result;

use crate::context::Context;

/// Print one page of contacts
///
/// The page size comes from `--page-size` when given, otherwise from the
/// configuration. Pages past the end print nothing.
pub fn handle(ctx: &Context, page: usize, page_size: Option<usize>, json: bool) -> Result<()> {
    let page_size = page_size.unwrap_or(ctx.config().display.page_size);
    let contacts = ctx.store.list_page(page, page_size)?;

    if json {
        return super::print_json(&contacts);
    }

    for contact in contacts {
        println!("{}", contact);
    }

    Ok(())
}
