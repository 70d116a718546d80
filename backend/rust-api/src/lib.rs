use axum::{
    extract::Request,
    http::{header, HeaderValue},
    middleware::{self, Next},
    response::Response,
    routing::{delete, get, patch, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod metrics;
pub mod middlewares;
pub mod models;
pub mod services;

pub use config::Config;
pub use services::AppState;

/// CSP middleware adds Content-Security-Policy header to all responses
async fn csp_middleware(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    response.headers_mut().insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(
            "default-src 'self'; \
             script-src 'self' 'unsafe-inline'; \
             style-src 'self' 'unsafe-inline'; \
             img-src 'self' data: https:; \
             connect-src 'self'",
        ),
    );
    response
}

pub fn create_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Metrics endpoint with Basic Auth protection
        .route(
            "/metrics",
            get(handlers::metrics_handler).layer(middleware::from_fn_with_state(
                app_state.clone(),
                handlers::metrics_auth_middleware,
            )),
        )
        // Views
        .route("/", get(handlers::pages::dashboard))
        .route("/problems", get(handlers::pages::problem_editor))
        .route("/login", get(handlers::pages::login_page))
        // API
        .nest("/api/auth", auth_routes())
        .route("/api/problems", get(handlers::problems::list_problems))
        .merge(editor_routes())
        .merge(file_routes())
        .merge(testing_routes())
        .with_state(app_state.clone())
        // The guard wraps every route, including unknown ones
        .layer(middleware::from_fn_with_state(
            app_state,
            middlewares::auth::session_guard_middleware,
        ))
        .layer(middleware::from_fn(csp_middleware))
        .layer(middleware::from_fn(
            middlewares::metrics::metrics_middleware,
        ))
        .layer(middleware::from_fn(
            middlewares::trace::trace_context_middleware,
        ))
        .layer(TraceLayer::new_for_http())
}

fn auth_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/login", post(handlers::auth::login))
        .route("/logout", post(handlers::auth::logout))
        .route("/session", get(handlers::auth::get_session))
}

fn editor_routes() -> Router<Arc<AppState>> {
    use handlers::editor;

    Router::new()
        .route("/api/editor", get(editor::get_editor))
        .route("/api/editor/problem", patch(editor::update_problem))
        .route("/api/editor/problem/tags", post(editor::add_tag))
        .route("/api/editor/problem/tags/{tag}", delete(editor::remove_tag))
        .route("/api/editor/export", get(editor::export_problem))
        .route("/api/editor/import", post(editor::import_problem))
        .route("/api/editor/reset", post(editor::reset_workspace))
        // Wizard
        .route("/api/editor/step", put(editor::jump_to_step))
        .route("/api/editor/step/next", post(editor::next_step))
        .route("/api/editor/step/previous", post(editor::previous_step))
        .route(
            "/api/editor/settings",
            get(editor::get_settings).put(editor::update_settings),
        )
        // Markdown surface
        .route(
            "/api/editor/description/view",
            put(editor::set_description_view),
        )
        .route(
            "/api/editor/description/insert",
            post(editor::insert_markdown),
        )
}

fn file_routes() -> Router<Arc<AppState>> {
    use handlers::files;

    Router::new()
        .route(
            "/api/editor/files",
            get(files::list_files).post(files::create_file),
        )
        .route("/api/editor/files/save-all", post(files::save_all_files))
        .route(
            "/api/editor/files/{id}",
            get(files::get_file)
                .delete(files::delete_file)
                .patch(files::rename_file),
        )
        .route("/api/editor/files/{id}/content", put(files::update_content))
        .route("/api/editor/files/{id}/save", post(files::save_file))
        .route("/api/editor/files/{id}/select", post(files::select_file))
}

fn testing_routes() -> Router<Arc<AppState>> {
    use handlers::testing;

    Router::new()
        .route(
            "/api/editor/tests",
            get(testing::get_results).delete(testing::reset_results),
        )
        .route("/api/editor/tests/run", post(testing::run_tests))
        .route("/api/editor/tests/custom", post(testing::run_custom))
}
