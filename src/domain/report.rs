use serde_json::Value;

use crate::extract;

/// Fallback chain for the human-readable issue text.
const ISSUE_PATHS: &[&str] = &["issue", "message", "args.issue"];

/// One issue/bug report, normalized from a loosely-typed JSON payload.
#[derive(Debug, Clone)]
pub struct ReportEntry {
    pub timestamp: String,
    /// Caller-supplied entry kind (`bug`, `query`, `observation`, ...).
    /// Free-form, not a closed enum.
    pub kind: Option<String>,
    pub message: String,
    pub severity: Option<String>,
    pub call_id: Option<String>,
    pub metadata: Option<Value>,
}

impl ReportEntry {
    /// Normalize a report payload.
    ///
    /// The issue text is the first hit of `issue` > `message` > `args.issue`;
    /// when no path hits, the stringified whole payload is logged instead.
    pub fn from_payload(payload: &Value, timestamp: String) -> Self {
        let message = extract::first_text(payload, ISSUE_PATHS)
            .unwrap_or_else(|| payload.to_string());

        Self {
            timestamp,
            kind: extract::text_field(payload, "type"),
            message,
            severity: extract::text_field(payload, "severity"),
            call_id: extract::text_field(payload, "call_id"),
            metadata: payload
                .get("metadata")
                .filter(|m| !m.is_null())
                .cloned(),
        }
    }

    /// Render the text block appended to the call log.
    pub fn render(&self) -> String {
        let mut block = format!("\n[{}] ISSUE: {}\n", self.timestamp, self.message);
        if let Some(kind) = &self.kind {
            block.push_str(&format!("Type: {kind}\n"));
        }
        if let Some(severity) = &self.severity {
            block.push_str(&format!("Severity: {severity}\n"));
        }
        if let Some(call_id) = &self.call_id {
            block.push_str(&format!("Call ID: {call_id}\n"));
        }
        if let Some(metadata) = &self.metadata {
            block.push_str(&format!("Metadata: {metadata}\n"));
        }
        block
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(payload: Value) -> ReportEntry {
        ReportEntry::from_payload(&payload, "2026-08-06T12:00:00+00:00".to_string())
    }

    #[test]
    fn test_explicit_issue_field_wins() {
        let e = entry(json!({"issue": "agent hung up early", "message": "ignored"}));
        assert_eq!(e.message, "agent hung up early");
    }

    #[test]
    fn test_message_field_is_second() {
        let e = entry(json!({"message": "m"}));
        assert_eq!(e.message, "m");
    }

    #[test]
    fn test_nested_args_issue_is_third() {
        let e = entry(json!({"args": {"issue": "a"}}));
        assert_eq!(e.message, "a");
    }

    #[test]
    fn test_empty_object_logs_stringified_payload() {
        let e = entry(json!({}));
        assert_eq!(e.message, "{}");
    }

    #[test]
    fn test_unrecognized_payload_logs_stringified_payload() {
        let e = entry(json!({"foo": 1}));
        assert_eq!(e.message, r#"{"foo":1}"#);
    }

    #[test]
    fn test_render_minimal_block() {
        let e = entry(json!({"issue": "static on the line"}));
        assert_eq!(
            e.render(),
            "\n[2026-08-06T12:00:00+00:00] ISSUE: static on the line\n"
        );
    }

    #[test]
    fn test_render_structured_block() {
        let e = entry(json!({
            "issue": "caller dropped",
            "type": "bug",
            "severity": "high",
            "call_id": "call_123",
            "metadata": {"attempt": 2}
        }));
        let block = e.render();
        assert!(block.contains("ISSUE: caller dropped"));
        assert!(block.contains("Type: bug\n"));
        assert!(block.contains("Severity: high\n"));
        assert!(block.contains("Call ID: call_123\n"));
        assert!(block.contains(r#"Metadata: {"attempt":2}"#));
    }

    #[test]
    fn test_render_omits_absent_fields() {
        let e = entry(json!({"issue": "x"}));
        let block = e.render();
        assert!(!block.contains("Type:"));
        assert!(!block.contains("Severity:"));
        assert!(!block.contains("Metadata:"));
    }
}
