//! OpenAPI document and the interactive documentation UIs.
//!
//! Paths follow the usual layout for this service family: the raw document
//! under `/schema/openapi.json`, one page per renderer under `/schema/*`,
//! and `/schema` itself pointing at Scalar.

use axum::response::Redirect;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};
use utoipa_swagger_ui::SwaggerUi;

use crate::dto::{ErrorBody, TodoItemBody};
use crate::handlers;

pub const SCHEMA_PATH: &str = "/schema";
pub const OPENAPI_PATH: &str = "/schema/openapi.json";
pub const SWAGGER_PATH: &str = "/schema/swagger";
pub const SCALAR_PATH: &str = "/schema/scalar";

#[derive(OpenApi)]
#[openapi(
    info(title = "Example", description = "Example OpenAPI", version = "0.1.0"),
    paths(handlers::get_list, handlers::add_item, handlers::update_item),
    components(schemas(TodoItemBody, ErrorBody)),
    tags((name = "todo", description = "In-memory todo list"))
)]
pub struct ApiDoc;

pub fn router() -> Router {
    let openapi = ApiDoc::openapi();
    Router::new()
        .route(SCHEMA_PATH, get(|| async { Redirect::temporary(SCALAR_PATH) }))
        .merge(SwaggerUi::new(SWAGGER_PATH).url(OPENAPI_PATH, openapi.clone()))
        .merge(Scalar::with_url(SCALAR_PATH, openapi))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_carries_service_metadata() {
        let doc = ApiDoc::openapi();
        assert_eq!(doc.info.title, "Example");
        assert_eq!(doc.info.description.as_deref(), Some("Example OpenAPI"));
        assert_eq!(doc.info.version, "0.1.0");
    }

    #[test]
    fn every_route_is_documented() {
        let doc = ApiDoc::openapi();
        let root = doc.paths.paths.get("/").expect("root path documented");
        assert!(root.get.is_some());
        assert!(root.post.is_some());
        let by_title = doc
            .paths
            .paths
            .get("/{todo_title}")
            .expect("update path documented");
        assert!(by_title.put.is_some());
    }

    #[test]
    fn item_schema_is_registered() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.expect("components").schemas;
        assert!(schemas.contains_key("TodoItem"));
        assert!(schemas.contains_key("ErrorBody"));
    }
}
