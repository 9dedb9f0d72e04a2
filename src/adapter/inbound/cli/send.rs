//! `tradecast send`: render an event and deliver it to every channel.

use tracing::info;

use crate::application::render::render;
use crate::error::Result;
use crate::infrastructure::config::Config;
use crate::infrastructure::factory::build_channel_registry;

use super::command::EventArgs;
use super::output;

/// Render the event and broadcast it through the configured channels.
///
/// # Errors
///
/// Returns the configuration error if a channel cannot be built, or the
/// first delivery failure reported by the registry.
pub async fn execute(config: &Config, args: &EventArgs) -> Result<()> {
    let registry = build_channel_registry(config)?;
    let event = args.load_event()?;
    let message = render(&event, &args.render_options(config));

    if !registry.threshold().admits(message.severity) {
        output::warning(&format!(
            "{} is below min_level {}, nothing sent",
            message.severity,
            registry.threshold().get()
        ));
        return Ok(());
    }

    registry.notify_all(&message).await?;

    info!(subject = %message.subject, channels = registry.len(), "Notification sent");
    output::success(&format!("Sent: {}", message.subject));
    output::field("Channels", registry.channel_names().join(", "));
    Ok(())
}
