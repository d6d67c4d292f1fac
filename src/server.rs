use std::collections::HashMap;
use std::net::SocketAddr;

use axum::extract::{DefaultBodyLimit, FromRef, Path, Query, State};
use axum::http::{header, HeaderMap};
use axum::response::{Html, IntoResponse, Redirect};
use axum::routing::get;
use axum::{middleware, Json, Router};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::normalize_path::NormalizePathLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::auth;
use crate::config::Config;
use crate::db::Database;
use crate::error::ApiError;
use crate::id;
use crate::markdown::{self, Rendered};
use crate::models::{Paste, PasteSummary};
use crate::types::api::{Ack, CreatePaste, PasteCreated, UpdatePaste};

/// The admin dashboard and its assets, served from the binary.
const ADMIN_PAGE: &str = include_str!("../assets/admin.html");
const ADMIN_CSS: &str = include_str!("../assets/admin.css");
const ADMIN_JS: &str = include_str!("../assets/admin.js");

/// Largest accepted request body.
const MAX_CONTENT_LENGTH: usize = 1024 * 1024;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub config: Config,
    pub database: Database,
}

/// Run the HTTP server until interrupted, then close the store.
pub async fn run(state: AppState) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], state.config.port));
    let base_url = state.config.base_url();
    let database = state.database.clone();

    let app = router(state);

    info!("listening on {addr}");
    info!("admin panel: {base_url}/admin");

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    database.close().await;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install ctrl-c handler");
}

/// Build the full application router.
///
/// The admin API and dashboard sit behind the basic-auth middleware; the
/// paste read paths and the root redirect are open.
pub fn router(state: AppState) -> Router {
    let admin = Router::new()
        .route("/admin", get(admin_page))
        .route("/admin/static/:file", get(admin_asset))
        .route("/api/pastes", get(list_pastes).post(create_paste))
        .route(
            "/api/pastes/:id",
            get(get_paste).put(update_paste).delete(delete_paste),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_auth,
        ));

    Router::new()
        .route("/", get(index))
        .route("/:id", get(get_public_paste))
        .route("/:id/raw", get(get_raw_paste))
        .merge(admin)
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(MAX_CONTENT_LENGTH))
        .layer(TraceLayer::new_for_http())
        .route_layer(NormalizePathLayer::trim_trailing_slash())
        .with_state(state)
}

async fn index() -> Redirect {
    Redirect::to("/admin")
}

async fn admin_page() -> Html<&'static str> {
    Html(ADMIN_PAGE)
}

async fn admin_asset(Path(file): Path<String>) -> Result<impl IntoResponse, ApiError> {
    let (content_type, body) = match file.as_str() {
        "admin.css" => ("text/css; charset=utf-8", ADMIN_CSS),
        "admin.js" => ("application/javascript; charset=utf-8", ADMIN_JS),
        _ => return Err(ApiError::NotFound),
    };
    Ok(([(header::CONTENT_TYPE, content_type)], body))
}

async fn list_pastes(State(db): State<Database>) -> crate::ApiResult<Json<Vec<PasteSummary>>> {
    Ok(Json(db.list_summaries().await?))
}

async fn get_paste(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> crate::ApiResult<Json<Paste>> {
    Ok(Json(db.get_full(&id).await?))
}

async fn create_paste(
    State(config): State<Config>,
    State(db): State<Database>,
    Json(body): Json<CreatePaste>,
) -> crate::ApiResult<Json<PasteCreated>> {
    let content = body
        .content
        .filter(|content| !content.is_empty())
        .ok_or(ApiError::MissingContent)?;
    let format = body.format.unwrap_or_else(|| "text".to_owned());

    let id = id::generate();

    info!(
        "new paste: id='{id}', format='{format}', size={size}",
        size = content.len()
    );

    db.insert(&id, &content, &format).await?;

    let url = format!("{base_url}/{id}", base_url = config.base_url());

    Ok(Json(PasteCreated { id, url }))
}

async fn update_paste(
    State(db): State<Database>,
    Path(id): Path<String>,
    Json(body): Json<UpdatePaste>,
) -> crate::ApiResult<Json<Ack>> {
    let content = body
        .content
        .filter(|content| !content.is_empty())
        .ok_or(ApiError::MissingContent)?;
    let format = body.format.unwrap_or_else(|| "text".to_owned());

    if db.update(&id, &content, &format).await? == 0 {
        return Err(ApiError::NotFound);
    }

    Ok(Json(Ack { success: true }))
}

async fn delete_paste(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> crate::ApiResult<Json<Ack>> {
    if db.delete(&id).await? == 0 {
        return Err(ApiError::NotFound);
    }

    Ok(Json(Ack { success: true }))
}

async fn get_public_paste(
    State(db): State<Database>,
    Path(id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> crate::PublicResult<Rendered> {
    let paste = db.get_public(&id).await?;

    let accepts_html = headers
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok())
        .map_or(false, |accept| accept.contains("text/html"));
    // any ?format=... suppresses HTML rendering, whatever its value
    let format_override = params.contains_key("format");

    Ok(markdown::render(
        &id,
        &paste.content,
        &paste.format,
        accepts_html,
        format_override,
    ))
}

async fn get_raw_paste(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> crate::PublicResult<Rendered> {
    let paste = db.get_public(&id).await?;
    Ok(Rendered::Plain(paste.content))
}
