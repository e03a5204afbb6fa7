pub mod call_event;
pub mod report;

pub use call_event::{CallRecord, CallWebhook, TranscriptTurn};
pub use report::ReportEntry;
