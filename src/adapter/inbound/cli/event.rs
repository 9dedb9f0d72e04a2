//! Turns [`EventArgs`] into a notification event and render options.

use std::io::Read;
use std::path::Path;

use crate::application::render::RenderOptions;
use crate::domain::{NotificationEvent, Severity};
use crate::error::Result;
use crate::infrastructure::config::Config;

use super::command::EventArgs;

impl EventArgs {
    /// Build the event described by the arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if the event file cannot be read or is not a valid
    /// event.
    pub fn load_event(&self) -> Result<NotificationEvent> {
        let mut event = match &self.event {
            Some(path) => read_event(path)?,
            None => NotificationEvent::new(Severity::default()),
        };

        if let Some(severity) = self.severity {
            event.severity = severity;
        }
        if let Some(reason) = &self.reason {
            event.reason = Some(reason.clone());
        }
        if let Some(source) = self.source {
            event.source = Some(source.into());
        }

        Ok(event)
    }

    /// Configured render options with `--short` / `--verbose` applied.
    #[must_use]
    pub fn render_options(&self, config: &Config) -> RenderOptions {
        let mut options = config.render_options();
        if self.short {
            options.short_format = true;
        } else if self.verbose {
            options.short_format = false;
        }
        options
    }
}

fn read_event(path: &Path) -> Result<NotificationEvent> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };
    Ok(serde_json::from_str(&content)?)
}
