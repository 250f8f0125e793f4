//! Lambda entry point
//!
//! The scheduled event carries nothing the relay needs; every invocation just
//! runs one step of the cycle. Errors fail the invocation.

use crate::managers::relay::BackupRelay;
use chrono::Utc;
use lambda_runtime::{service_fn, LambdaEvent};
use serde_json::Value;
use tracing::{debug, info};

/// Handle one scheduled invocation
pub async fn handle_event(relay: &BackupRelay, event: LambdaEvent<Value>) -> Result<(), lambda_runtime::Error> {
    let (payload, context) = event.into_parts();
    info!(request_id = %context.request_id, "Relay invocation started");
    debug!("Event: {}", payload);

    let outcome = relay.invoke(Utc::now()).await?;

    info!(request_id = %context.request_id, ?outcome, "Relay invocation finished");
    Ok(())
}

/// Serve the Lambda runtime loop until the process is stopped
pub async fn serve(relay: BackupRelay) -> Result<(), lambda_runtime::Error> {
    let relay = &relay;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        handle_event(relay, event).await
    }))
    .await
}
