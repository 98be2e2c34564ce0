use axum::extract::{Query, State};

use crate::error::{handle_storage_error, ApiError};
use crate::methods::entities::WriteParams;
use crate::methods::routes::WRITE_PATH;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = WRITE_PATH,
    tag = "storage",
    params(WriteParams),
    responses(
        (status = 200, description = "Message written, echoed back", body = String, content_type = "text/plain"),
        (status = 400, description = "Missing or empty msg parameter", body = String, content_type = "text/plain"),
        (status = 500, description = "Storage write failed", body = String, content_type = "text/plain"),
    )
)]
pub async fn write_message(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<String, ApiError> {
    let Some(msg) = WriteParams::from_pairs(pairs).message() else {
        tracing::debug!("write rejected: missing msg parameter");
        return Err(ApiError::missing_msg());
    };

    state
        .writer
        .write(&msg)
        .await
        .map_err(|e| handle_storage_error(e, &state.env))?;

    tracing::info!(
        env = %state.env,
        path = %state.writer.target(),
        message = %msg,
        "successfully wrote message"
    );

    Ok(format!("Written: {msg}\n"))
}
