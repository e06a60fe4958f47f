use axum::{
    routing::{get, post},
    Json, Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::{debug, error, info, trace, warn, Level};

use common::types::Health;

use crate::state::AppState;

pub mod items;
pub mod members;
pub mod request_param;
pub mod response_body;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Emits one event per level; what shows up depends on `RUST_LOG`.
pub async fn log_test() -> &'static str {
    let name = "item-service";

    trace!(%name, "trace log");
    debug!(%name, "debug log");
    info!(%name, "info log");
    warn!(%name, "warn log");
    error!(%name, "error log");

    "ok"
}

/// Build the full application router: item and member CRUD plus the
/// request/response binding handlers.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let basic_items = Router::new()
        .route("/basic/items", get(items::list_items))
        .route("/basic/items/add", post(items::add_item))
        .route("/basic/items/:item_id", get(items::get_item))
        .route("/basic/items/:item_id/edit", post(items::edit_item));

    let member_routes = Router::new()
        .route("/members", get(members::list_members))
        .route("/members/save", post(members::save_member))
        .route("/members/:member_id", get(members::get_member));

    // 参数绑定示例：只记录日志并返回 ok
    let binding = Router::new()
        .route("/request-param-v1", get(request_param::request_param_v1))
        .route("/request-param-v2", get(request_param::request_param_v2))
        .route("/request-param-v3", get(request_param::request_param_v3))
        .route("/request-param-v4", get(request_param::request_param_v4))
        .route("/request-param-required", get(request_param::request_param_required))
        .route("/request-param-default", get(request_param::request_param_default))
        .route("/request-param-map", get(request_param::request_param_map))
        .route("/request-param-multi-map", get(request_param::request_param_multi_map))
        .route("/model-attribute-v1", get(request_param::model_attribute_v1))
        .route("/model-attribute-v2", get(request_param::model_attribute_v2))
        .route("/response-body-string-v1", get(response_body::response_body_v1))
        .route("/response-body-string-v2", get(response_body::response_body_v2))
        .route("/response-body-string-v3", get(response_body::response_body_v3))
        .route("/response-body-json-v1", get(response_body::response_body_json_v1))
        .route("/response-body-json-v2", get(response_body::response_body_json_v2));

    Router::new()
        .route("/health", get(health))
        .route("/log-test", get(log_test))
        .merge(basic_items)
        .merge(member_routes)
        .merge(binding)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        // 每次请求创建 span，包含方法和路径
                        .make_span_with(
                            DefaultMakeSpan::new()
                                .level(Level::INFO)
                                .include_headers(false),
                        )
                        .on_request(DefaultOnRequest::new().level(Level::INFO))
                        // 响应返回时打点，包含状态码与耗时
                        .on_response(
                            DefaultOnResponse::new()
                                .level(Level::INFO)
                                .include_headers(false),
                        )
                        .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
                )
                .layer(cors),
        )
}
