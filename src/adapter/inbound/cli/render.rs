//! `tradecast render`: print a rendered event without delivering it.

use crate::application::render::render;
use crate::error::Result;
use crate::infrastructure::config::Config;

use super::command::EventArgs;
use super::output;

/// Render the event and print the subject, a blank line and the body.
///
/// Verbose bodies already open with the subject and are printed as-is.
///
/// With `--json` the full message (subject, body, raw, html) is printed as
/// a single `message` line instead.
pub fn execute(config: &Config, args: &EventArgs) -> Result<()> {
    let event = args.load_event()?;
    let message = render(&event, &args.render_options(config));

    let text = if message.body.starts_with(&message.subject) {
        message.body.clone()
    } else {
        format!("{}\n\n{}", message.subject, message.body)
    };
    output::block("message", &message, &text)?;
    Ok(())
}
