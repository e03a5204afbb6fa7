use serde_json::Value;

use crate::extract;

/// One utterance in a conversation, tagged with a speaker role.
#[derive(Debug, Clone, Default)]
pub struct TranscriptTurn {
    pub role: Option<String>,
    pub content: Option<String>,
}

/// Call metadata as delivered by the platform.
///
/// Every field is optional: the platform's payload has drifted across
/// revisions and field access must stay null-safe.
#[derive(Debug, Clone, Default)]
pub struct CallRecord {
    pub call_id: Option<String>,
    /// Epoch milliseconds.
    pub start_timestamp: Option<i64>,
    /// Epoch milliseconds.
    pub end_timestamp: Option<i64>,
    /// Legacy flat shape carries the duration precomputed, in seconds.
    pub call_duration: Option<i64>,
    pub recording_url: Option<String>,
    pub transcript: Option<String>,
    pub transcript_object: Option<Vec<TranscriptTurn>>,
    pub disconnection_reason: Option<String>,
}

impl CallRecord {
    /// Read call fields out of a JSON object, field by field, so one
    /// malformed field never poisons the rest of the record.
    pub fn from_value(value: &Value) -> Self {
        let transcript_object = value
            .get("transcript_object")
            .and_then(Value::as_array)
            .map(|turns| {
                turns
                    .iter()
                    .map(|turn| TranscriptTurn {
                        role: extract::text_field(turn, "role"),
                        content: extract::text_field(turn, "content"),
                    })
                    .collect()
            });

        Self {
            call_id: extract::text_field(value, "call_id"),
            start_timestamp: extract::int_field(value, "start_timestamp"),
            end_timestamp: extract::int_field(value, "end_timestamp"),
            call_duration: extract::int_field(value, "call_duration"),
            recording_url: extract::text_field(value, "recording_url"),
            transcript: extract::text_field(value, "transcript"),
            transcript_object,
            disconnection_reason: extract::text_field(value, "disconnection_reason"),
        }
    }
}

/// A call-platform webhook event, normalized from either observed shape.
#[derive(Debug, Clone)]
pub struct CallWebhook {
    pub timestamp: String,
    pub event: String,
    pub call: CallRecord,
}

impl CallWebhook {
    /// Normalize a webhook payload.
    ///
    /// The two observed shapes form a tagged union: the presence of a `call`
    /// key selects the event-call-nested shape, anything else is read as the
    /// legacy flat shape where the call fields sit at the top level.
    pub fn from_payload(payload: &Value, timestamp: String) -> Self {
        let event =
            extract::text_field(payload, "event").unwrap_or_else(|| "unknown".to_string());
        let call = match payload.get("call") {
            Some(call) => CallRecord::from_value(call),
            None => CallRecord::from_value(payload),
        };
        Self {
            timestamp,
            event,
            call,
        }
    }

    /// Duration in whole seconds, when the payload carries enough to know it.
    pub fn duration_secs(&self) -> Option<i64> {
        if let Some(secs) = self.call.call_duration {
            return Some(secs);
        }
        match (self.call.start_timestamp, self.call.end_timestamp) {
            (Some(start), Some(end)) => Some((end - start) / 1000),
            _ => None,
        }
    }

    /// Render the text block appended to the call log.
    ///
    /// `call_analyzed` gets the transcript body, `call_ended` the
    /// disconnection reason; every other event writes the header only so an
    /// unrecognized event never fails the handler.
    pub fn render(&self) -> String {
        let call_id = self.call.call_id.as_deref().unwrap_or_default();
        let mut block = format!("\n{}\n", "=".repeat(60));

        match self.event.as_str() {
            "call_analyzed" => {
                block.push_str(&format!("[{}] TRANSCRIPT\n", self.timestamp));
                block.push_str(&format!("Call ID: {call_id}\n"));
                if let Some(secs) = self.duration_secs() {
                    block.push_str(&format!("Duration: {secs}s\n"));
                }
                if let Some(url) = &self.call.recording_url {
                    block.push_str(&format!("Recording: {url}\n"));
                }
                block.push_str("\n--- CONVERSATION ---\n");
                if let Some(transcript) = &self.call.transcript {
                    block.push_str(transcript);
                } else {
                    for turn in self.call.transcript_object.as_deref().unwrap_or_default() {
                        block.push_str(&format!(
                            "{}: {}\n",
                            turn.role.as_deref().unwrap_or("unknown"),
                            turn.content.as_deref().unwrap_or_default(),
                        ));
                    }
                }
                block.push_str("\n--- END ---\n");
            }
            "call_ended" => {
                block.push_str(&format!("[{}] CALL ENDED\n", self.timestamp));
                block.push_str(&format!("Call ID: {call_id}\n"));
                block.push_str(&format!(
                    "Disconnection: {}\n",
                    self.call.disconnection_reason.as_deref().unwrap_or_default()
                ));
            }
            other => {
                block.push_str(&format!("[{}] WEBHOOK: {other}\n", self.timestamp));
                block.push_str(&format!("Call ID: {call_id}\n"));
            }
        }

        block
    }
}
