//! `tradecast check config`: validate configuration and channel wiring.

use std::path::Path;

use crate::error::Result;
use crate::infrastructure::config::Config;
use crate::infrastructure::factory::build_channel_registry;

use super::output;

/// Build every enabled channel and print a summary.
///
/// Loading already rejected invalid values; building the registry also
/// checks that enabled channels have their credentials.
pub fn execute_config(config: &Config, path: Option<&Path>) -> Result<()> {
    let registry = build_channel_registry(config)?;
    let notifications = &config.notifications;

    output::section("Configuration Check");
    match path {
        Some(path) => output::field("Config", path.display()),
        None => output::field("Config", "defaults"),
    }
    output::success("Configuration is valid");

    output::section("Summary");
    output::field("Min level", config.min_level());
    output::field(
        "Format",
        if notifications.short_format {
            "short"
        } else {
            "verbose"
        },
    );
    output::field("Precision", notifications.precision);

    if registry.is_empty() {
        output::warning("No channels enabled, notifications will be dropped");
    } else {
        output::field("Channels", registry.channel_names().join(", "));
    }

    output::success("Configuration check complete");
    Ok(())
}
