use callsink::app;
use callsink::error::ServiceError;

#[tokio::main]
async fn main() -> Result<(), ServiceError> {
    app::run().await
}
