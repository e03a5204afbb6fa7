use crate::error::ServiceError;
use std::future::Future;
use std::pin::Pin;

/// Append-only sink for rendered log blocks.
///
/// This trait is dyn-compatible by using boxed futures instead of
/// `impl Future`; handlers hold it as `Arc<dyn LogSink>` so the test suite
/// can substitute an in-memory double for the shared file.
pub trait LogSink: Send + Sync {
    fn append(
        &self,
        block: String,
    ) -> Pin<Box<dyn Future<Output = Result<(), ServiceError>> + Send + '_>>;
}
