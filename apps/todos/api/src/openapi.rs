use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa::{Modify, OpenApi};

/// Pulls the todo paths in as-is; they already carry their `/todos` prefix.
struct TodoPaths;

impl Modify for TodoPaths {
    fn modify(&self, openapi: &mut OpenApiSpec) {
        openapi.merge(domain_todos::TodoApiDoc::openapi());
    }
}

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Todos API",
        version = "0.1.0",
        description = "Create, list, update and delete todo items"
    ),
    modifiers(&TodoPaths)
)]
pub struct ApiDoc;
