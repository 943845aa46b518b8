//! Welcome banner display for chat sessions.

use console::style;

use chalo_types::config::AssistantConfig;
use chalo_types::knowledge::SiteDetails;

/// Print the welcome banner at the start of a chat session.
///
/// Shows the assistant's name, the site tagline, and a short session id,
/// with a hint about slash commands.
pub fn print_welcome_banner(site: &SiteDetails, assistant: &AssistantConfig, session_id: &str) {
    println!();
    println!("  {} {}", style("✈").bold(), style(&assistant.name).cyan().bold());
    println!("  {}", style(&site.tagline).dim());
    println!();
    println!("  {}  {}", style("Site:").bold(), style(&site.name).dim());
    println!(
        "  {}  {}",
        style("Session:").bold(),
        style(&session_id[..8.min(session_id.len())]).dim()
    );
    println!();
    println!(
        "  {}",
        style("Type /help for commands, Ctrl+D to exit").dim()
    );
    println!("  {}", style("---").dim());
}
