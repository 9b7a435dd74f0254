//! Router assembly and shared state.

use std::sync::Arc;

use axum::Router;
use axum::handler::Handler;
use axum::middleware::from_fn_with_state;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use roster_db::service::RosterService;
use roster_schema::SchemaRegistry;
use roster_schema::documents::{
    CREATE_USER, GET_USER_BY_ID_PARAMS, PAGINATION_QUERY, UPDATE_USER,
};

use crate::handlers::{self, health, users};
use crate::health::HealthService;
use crate::middleware::{ValidationStep, validate_request};

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<RosterService>,
    pub registry: Arc<SchemaRegistry>,
    pub health: Arc<HealthService>,
}

impl AppState {
    pub fn new(service: RosterService, registry: SchemaRegistry) -> Self {
        Self {
            service: Arc::new(service),
            registry: Arc::new(registry),
            health: Arc::new(HealthService::new()),
        }
    }
}

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    let registry = &state.registry;
    let id_params = from_fn_with_state(
        ValidationStep::params(Arc::clone(registry), GET_USER_BY_ID_PARAMS),
        validate_request,
    );
    let list_query = from_fn_with_state(
        ValidationStep::query(Arc::clone(registry), PAGINATION_QUERY),
        validate_request,
    );
    let create_body = from_fn_with_state(
        ValidationStep::body(Arc::clone(registry), CREATE_USER),
        validate_request,
    );
    let update_body = from_fn_with_state(
        ValidationStep::body(Arc::clone(registry), UPDATE_USER),
        validate_request,
    );

    let api = Router::new()
        .route("/health", get(health::health))
        .route(
            "/users",
            get(users::list_users.layer(list_query)).post(users::create_user.layer(create_body)),
        )
        .route(
            "/users/{id}",
            get(users::get_user.layer(id_params.clone()))
                .patch(users::update_user.layer(update_body).layer(id_params.clone()))
                .delete(users::delete_user.layer(id_params)),
        );

    Router::new()
        .nest("/api", api)
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
