use utoipa::OpenApi;

use crate::methods::health_check::__path_health_check;
use crate::methods::write_message::__path_write_message;

#[derive(OpenApi)]
#[openapi(
    paths(health_check, write_message),
    tags(
        (name = "storage", description = "Write to the fixed storage target"),
        (name = "service", description = "Liveness endpoints")
    )
)]
pub struct ApiDoc;
