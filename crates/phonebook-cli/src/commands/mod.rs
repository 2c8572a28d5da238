// crates/phonebook-cli/src/commands/mod.rs - Command Handler Modules
//
// One module per subcommand. Handlers receive the Context and the parsed
// arguments, call into the store, and own all printing.

pub mod add;
pub mod config;
pub mod display;
pub mod edit;
pub mod search;

use anyhow::Result;
use phonebook_core::Contact;

/// Print contact lines as a JSON array for scripting
///
/// Each entry carries the stored line and, when the line has exactly six
/// fields, its structured form (`null` otherwise).
pub(crate) fn print_json(lines: &[String]) -> Result<()> {
    let json_contacts: Vec<_> = lines
        .iter()
        .map(|line| {
            serde_json::json!({
                "line": line,
                "contact": Contact::parse_line(line).ok(),
            })
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&json_contacts)?);
    Ok(())
}
