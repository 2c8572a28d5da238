use anyhow::Result;

use crate::context::Context;

/// Replace every stored line equal to `old` with `new`
///
/// No match is not an error: the file is left as it was. Status lines go
/// to stderr so stdout stays free for contact output.
pub fn handle(ctx: &Context, old: &str, new: &str) -> Result<()> {
    let replaced = ctx.store.edit(old, new)?;

    if replaced == 0 {
        eprintln!("⚠️  No contact matched: {}", old);
    } else {
        eprintln!("✅ Updated {} contact(s)", replaced);
    }

    Ok(())
}
