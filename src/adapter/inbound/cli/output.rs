//! CLI output formatting.
//!
//! Human-readable lines by default; with `--json` every call emits one JSON
//! object per line (`{"type": ..., "payload": ...}`) for scripting.

use std::fmt::Display;
use std::sync::OnceLock;

use parking_lot::RwLock;
use serde::Serialize;
use serde_json::json;

/// Runtime output configuration shared by CLI handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Emit machine-readable JSON output instead of human-readable text.
    pub json: bool,
}

static OUTPUT_CONFIG: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn config_cell() -> &'static RwLock<OutputConfig> {
    OUTPUT_CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()))
}

fn emit_json_line(kind: &str, payload: serde_json::Value) {
    println!(
        "{}",
        json!({
            "type": kind,
            "payload": payload,
        })
    );
}

/// Apply output settings from global CLI flags.
pub fn configure(config: OutputConfig) {
    *config_cell().write() = config;
}

#[must_use]
pub fn is_json() -> bool {
    config_cell().read().json
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    let value = value.to_string();
    if is_json() {
        emit_json_line("field", json!({ "label": label, "value": value }));
        return;
    }
    println!("  {label:<12} {value}");
}

/// Print a success line.
pub fn success(message: &str) {
    if is_json() {
        emit_json_line("success", json!({ "message": message }));
        return;
    }
    println!("  ok {message}");
}

/// Print a warning line.
pub fn warning(message: &str) {
    if is_json() {
        emit_json_line("warning", json!({ "message": message }));
        return;
    }
    println!("  warn {message}");
}

/// Print an error line to stderr.
pub fn error(message: &str) {
    if is_json() {
        eprintln!(
            "{}",
            json!({
                "type": "error",
                "payload": { "message": message },
            })
        );
        return;
    }
    eprintln!("  error {message}");
}

/// Print a section header.
pub fn section(title: &str) {
    if is_json() {
        emit_json_line("section", json!({ "title": title }));
        return;
    }
    println!();
    println!("{title}");
}

/// Print a block of text verbatim, or as a JSON payload of `kind`.
pub fn block(kind: &str, value: &impl Serialize, text: &str) -> serde_json::Result<()> {
    if is_json() {
        emit_json_line(kind, serde_json::to_value(value)?);
        return Ok(());
    }
    println!("{text}");
    Ok(())
}
