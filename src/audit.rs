use serde_json::Value;
use uuid::Uuid;

/// Records a state change as a structured event on the `audit` target.
pub fn log_audit(session_id: Option<Uuid>, action: &str, resource: Option<&str>, metadata: Option<Value>) {
    let metadata = metadata.unwrap_or(Value::Null);
    tracing::info!(
        target: "audit",
        session_id = ?session_id,
        action,
        resource = resource.unwrap_or("-"),
        %metadata,
        "audit"
    );
}
