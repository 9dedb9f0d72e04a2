//! HTML heading and line joining.

use super::format::escape_html;
use crate::domain::Severity;

const SUCCESS_COLOR: &str = "#2e7d32";
const ALERT_COLOR: &str = "#c62828";

/// Separator between HTML body lines.
pub(super) const LINE_BREAK: &str = "<br>\n";

/// First line of every HTML body.
///
/// Informational severities only bold the action; everything else gets a
/// coloured severity badge.
pub(super) fn heading(severity: Severity, action: &str) -> String {
    let action = escape_html(action);
    if severity.is_informational() {
        return format!("{severity} <b>{action}.</b>");
    }
    let color = if severity == Severity::Success {
        SUCCESS_COLOR
    } else {
        ALERT_COLOR
    };
    format!("<b style=\"color:{color}\">{severity}</b> {action}.")
}

/// Heading followed by the escaped lines.
pub(super) fn join_lines<'a>(heading: &str, lines: impl IntoIterator<Item = &'a str>) -> String {
    let mut html = heading.to_string();
    for line in lines {
        html.push_str(LINE_BREAK);
        html.push_str(&escape_html(line));
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn informational_heading_bolds_action() {
        assert_eq!(
            heading(Severity::Info, "Notification"),
            "INFO <b>Notification.</b>"
        );
    }

    #[test]
    fn success_and_alert_badges_differ() {
        let success = heading(Severity::Success, "Close X LONG trade");
        let warn = heading(Severity::Warn, "Close X LONG trade");
        let error = heading(Severity::Error, "Close X LONG trade");

        assert!(success.contains(SUCCESS_COLOR));
        assert!(warn.contains(ALERT_COLOR));
        assert!(error.contains(ALERT_COLOR));
        assert_eq!(
            error,
            "<b style=\"color:#c62828\">ERROR</b> Close X LONG trade."
        );
    }

    #[test]
    fn join_lines_escapes_each_line() {
        let html = join_lines("H", ["a<b", "", "c"]);
        assert_eq!(html, "H<br>\na&lt;b<br>\n<br>\nc");
    }
}
