//! HTTP route handlers.
//!
//! Every query endpoint is infallible: a lookup miss renders a placeholder
//! fragment (HTML) or a `null`/empty body (JSON), never an error status.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::services::ServeDir;

use crate::directions::{annotate, classify};
use crate::domain::Category;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/origins", get(origins))
        .route("/api/destinations", get(destinations))
        .route("/api/route", get(route_lookup))
        .route("/api/search", get(search))
        .route("/api/stats", get(stats))
        .route("/api/directions/classify", get(classify_instruction))
        .route("/api/directions/annotate", get(annotate_instruction))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Index page: stats header plus the route selector.
async fn index_page(State(state): State<AppState>) -> impl IntoResponse {
    let catalog = state.index.catalog();
    let template = IndexTemplate {
        origins: state.index.origins().to_vec(),
        stats: StatsView::from_stats(catalog.stats()),
        version: catalog.version().unwrap_or_default().to_string(),
    };

    Html(
        template
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// All distinct origins, in catalog order.
async fn origins(State(state): State<AppState>) -> Json<OriginsResponse> {
    Json(OriginsResponse {
        origins: state.index.origins().to_vec(),
    })
}

/// Destinations reachable from an origin.
///
/// An unknown origin yields an empty list, not an error.
async fn destinations(
    State(state): State<AppState>,
    Query(req): Query<DestinationsRequest>,
) -> Json<DestinationsResponse> {
    Json(DestinationsResponse {
        destinations: state.index.destinations_from(&req.from).to_vec(),
    })
}

/// Exact route lookup.
async fn route_lookup(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<RouteRequest>,
) -> Response {
    let route = state.index.find_exact_route(&req.from, &req.to);

    if accepts_html(&headers) {
        let html = match route {
            Some(route) => RouteDetailTemplate {
                route: RouteView::from_route(route),
            }
            .render(),
            None => RouteMissTemplate.render(),
        };

        Html(html.unwrap_or_else(|e| format!("Template error: {}", e))).into_response()
    } else {
        Json(RouteResponse {
            route: route.map(RouteResult::from_route),
        })
        .into_response()
    }
}

/// Free-text search with an optional category filter.
async fn search(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<SearchRequest>,
) -> Response {
    let category = req.category.as_deref().map(Category::parse);
    let routes: Vec<_> = state
        .index
        .search(&req.q)
        .into_iter()
        .filter(|route| category.as_ref().is_none_or(|c| &route.category == c))
        .collect();

    if accepts_html(&headers) {
        let template = RouteListTemplate {
            routes: routes.iter().map(|r| RouteSummaryView::from_route(r)).collect(),
            query: req.q.clone(),
        };

        Html(
            template
                .render()
                .unwrap_or_else(|e| format!("Template error: {}", e)),
        )
        .into_response()
    } else {
        Json(SearchResponse {
            routes: routes.iter().map(|r| RouteSummary::from_route(r)).collect(),
        })
        .into_response()
    }
}

/// Per-category route counts.
async fn stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let catalog = state.index.catalog();
    Json(StatsResponse::from_stats(
        catalog.stats(),
        catalog.version(),
    ))
}

/// Classify one instruction.
async fn classify_instruction(Query(req): Query<InstructionRequest>) -> Json<ClassifyResponse> {
    Json(ClassifyResponse {
        direction: classify(&req.text),
    })
}

/// Annotate one instruction.
async fn annotate_instruction(Query(req): Query<InstructionRequest>) -> Json<AnnotateResponse> {
    Json(AnnotateResponse::from_instruction(annotate(&req.text)))
}
