//! Small widget API the server documents out of the box.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use docket_core::{ApiInfo, Docket, DocketPlugin, Ordered, Tag};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Widget {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceStatus {
    pub status: String,
    pub version: String,
}

fn sample_widgets() -> Vec<Widget> {
    vec![
        Widget {
            id: 1,
            name: "sprocket".to_string(),
        },
        Widget {
            id: 2,
            name: "gear".to_string(),
        },
    ]
}

#[utoipa::path(
    get,
    path = "/api/v1/widgets",
    responses(
        (status = 200, description = "All widgets", body = Vec<Widget>),
    ),
    tag = "widgets"
)]
pub async fn list_widgets() -> HttpResponse {
    HttpResponse::Ok().json(sample_widgets())
}

#[utoipa::path(
    get,
    path = "/api/v2/widgets/{id}",
    params(
        ("id" = u64, Path, description = "Widget identifier"),
    ),
    responses(
        (status = 200, description = "The widget", body = Widget),
        (status = 404, description = "No such widget"),
    ),
    tag = "widgets"
)]
pub async fn get_widget(id: web::Path<u64>) -> HttpResponse {
    let id = id.into_inner();
    match sample_widgets().into_iter().find(|w| w.id == id) {
        Some(widget) => HttpResponse::Ok().json(widget),
        None => HttpResponse::NotFound().json(serde_json::json!({
            "error": "not_found",
            "error_description": format!("widget {} does not exist", id)
        })),
    }
}

#[utoipa::path(
    get,
    path = "/internal/status",
    responses(
        (status = 200, description = "Service status", body = ServiceStatus),
    ),
    tag = "internal"
)]
pub async fn status() -> HttpResponse {
    HttpResponse::Ok().json(ServiceStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Source document for the demo routes. Only `/api/**` ends up published.
#[derive(OpenApi)]
#[openapi(
    paths(list_widgets, get_widget, status),
    components(schemas(Widget, ServiceStatus)),
    tags(
        (name = "widgets", description = "Widget catalogue"),
        (name = "internal", description = "Operational endpoints"),
    )
)]
pub struct DemoApiDoc;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/v1/widgets", web::get().to(list_widgets))
        .route("/api/v2/widgets/{id}", web::get().to(get_widget))
        .route("/internal/status", web::get().to(status));
}

/// Describes the demo API.
pub struct DemoPlugin;

impl Ordered for DemoPlugin {}

impl DocketPlugin for DemoPlugin {
    fn configure_api_info(&self, api_info: ApiInfo) -> ApiInfo {
        api_info
            .title("Widget Service API")
            .description("Sample API documented by api-docket")
            .version(env!("CARGO_PKG_VERSION"))
    }

    fn configure(&self, docket: Docket) -> Docket {
        docket.add_tags(vec![Tag::new("widgets", "Widget catalogue")])
    }
}
