//! Message formatting for Telegram notifications.

use crate::application::render::escape_html;
use crate::domain::RenderedMessage;

/// Telegram rejects messages longer than this many characters.
pub const MAX_MESSAGE_CHARS: usize = 4096;

/// Bold subject followed by the compact body, escaped for `ParseMode::Html`.
///
/// The raw body is truncated so the escaped message fits Telegram's limit.
pub fn format_message(message: &RenderedMessage) -> String {
    let subject = escape_html(&message.subject);
    // <b></b> plus the newline
    let overhead = subject.chars().count() + 8;
    let budget = MAX_MESSAGE_CHARS.saturating_sub(overhead);
    let raw = truncate(&escape_html(&message.raw), budget);
    format!("<b>{subject}</b>\n{raw}")
}

/// Truncate a string with ellipsis (Unicode-safe).
///
/// The result never exceeds `max_chars` characters, ellipsis included, and
/// never ends inside an HTML entity.
pub fn truncate(s: &str, max_chars: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_chars {
        return s.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let mut truncated: String = s.chars().take(keep).collect();
    if let Some(amp) = truncated.rfind('&') {
        if !truncated[amp..].contains(';') {
            truncated.truncate(amp);
        }
    }
    format!("{truncated}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Severity;

    fn message(raw: &str) -> RenderedMessage {
        RenderedMessage {
            severity: Severity::Info,
            subject: "INFO Open X LONG trade.".to_string(),
            body: String::new(),
            raw: raw.to_string(),
            html: String::new(),
        }
    }

    #[test]
    fn test_format_message_escapes() {
        let text = format_message(&message("a < b. Open X LONG trade. s."));
        assert_eq!(
            text,
            "<b>INFO Open X LONG trade.</b>\na &lt; b. Open X LONG trade. s."
        );
    }

    #[test]
    fn test_format_message_respects_limit() {
        let text = format_message(&message(&"x".repeat(10_000)));
        assert!(text.chars().count() <= MAX_MESSAGE_CHARS);
        assert!(text.ends_with("..."));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
        assert_eq!(truncate("ab", 2), "ab");
    }

    #[test]
    fn test_truncate_unicode() {
        assert_eq!(truncate("日本語テスト", 5), "日本...");
        assert_eq!(truncate("café", 4), "café");
    }

    #[test]
    fn test_truncate_drops_partial_entity() {
        assert_eq!(truncate("ab &amp; cd", 8), "ab ...");
    }
}
