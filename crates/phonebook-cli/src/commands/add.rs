use anyhow::Result;

use crate::context::Context;

/// Append contacts to the phone book
///
/// With an argument, that single line is added. Without one, every line
/// piped on stdin is added in order.
pub fn handle(ctx: &Context, contact: Option<String>) -> Result<()> {
    let contacts = match contact {
        Some(line) => vec![line],
        None => crate::stdin::read_lines_from_stdin()?,
    };

    for line in &contacts {
        ctx.store.add(line)?;
    }

    // Status goes to stderr; stdout only ever carries contacts
    eprintln!(
        "✅ Added {} contact(s) to {}",
        contacts.len(),
        ctx.store.path().display()
    );
    Ok(())
}
