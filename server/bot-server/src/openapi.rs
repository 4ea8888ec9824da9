use utoipa::OpenApi;

/// Main OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::message::handle_message,
    ),
    components(
        schemas(
            crate::handlers::health::HealthResponse,
            crate::handlers::message::MessageRequest,
            crate::handlers::message::RejectionResponse,
            crate::error::ApiErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Liveness"),
        (name = "message", description = "Natural-language configuration updates")
    ),
    info(
        title = "confbot",
        description = "Turns operator instructions into schema-validated configuration updates"
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_endpoints() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/health"));
        assert!(doc.paths.paths.contains_key("/message"));
    }
}
