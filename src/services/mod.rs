pub mod farmer_service;
pub mod order_service;
pub mod product_service;
pub mod report_service;
pub mod session_service;
pub mod settings_service;
pub mod user_service;

use crate::{
    audit::log_audit,
    dto::DeleteResult,
    error::{AppError, AppResult},
    response::{ApiResponse, Meta},
    session::ActiveSession,
    store::{Record, RemoveOutcome},
};

/// Maps a delete outcome onto the response shared by every record type.
fn delete_response<T: Record>(
    outcome: RemoveOutcome<T>,
    id: &str,
    session: &ActiveSession,
    resource: &str,
) -> AppResult<ApiResponse<DeleteResult>> {
    match outcome {
        RemoveOutcome::Removed(record) => {
            log_audit(
                Some(session.session_id),
                "record_delete",
                Some(resource),
                Some(serde_json::json!({ "id": record.id() })),
            );
            Ok(ApiResponse::success(
                "Deleted",
                DeleteResult {
                    id: id.to_string(),
                    deleted: true,
                },
                Some(Meta::empty()),
            ))
        }
        RemoveOutcome::Declined => {
            tracing::debug!(resource, id, "delete not confirmed");
            Ok(ApiResponse::success(
                "Deletion not confirmed",
                DeleteResult {
                    id: id.to_string(),
                    deleted: false,
                },
                Some(Meta::empty()),
            ))
        }
        RemoveOutcome::NotFound => Err(AppError::NotFound),
    }
}
