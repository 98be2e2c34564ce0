use crate::methods::routes::SERVICE_HEALTH_PATH;

#[utoipa::path(
    get,
    path = SERVICE_HEALTH_PATH,
    tag = "service",
    responses(
        (status = 200, description = "Service is up", body = String, content_type = "text/plain"),
    )
)]
pub async fn health_check() -> &'static str {
    "OK\n"
}
