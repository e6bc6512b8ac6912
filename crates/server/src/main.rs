use std::{net::SocketAddr, path::Path, sync::Arc};

use anyhow::Context;
use axum::{
    extract::State,
    handler::Handler,
    http::{header, Method, StatusCode},
    response::{Html, IntoResponse},
    routing::{get, MethodRouter},
    Router,
};
use server_api::{ScheduleBuilder, SystemClock};
use shared::view::ScheduleViewModel;
use storage::EpisodeStore;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{error, info};

mod app_state;
mod config;
mod error;
mod pages;

use app_state::AppState;
use config::load_settings;
use error::PageError;
use pages::{Page, TemplateRenderer};

/// Asset directories served verbatim from the document root.
const STATIC_DIRS: [&str; 4] = ["css", "fonts", "images", "js"];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let settings = load_settings()?;
    let store = EpisodeStore::open(&settings.data_path).map_err(|error| {
        error!(
            path = %settings.data_path.display(),
            %error,
            "failed to load episode data; refusing to start"
        );
        error
    })?;
    let builder = ScheduleBuilder::new(settings.watch_links.clone())
        .with_max_upcoming(settings.max_upcoming);
    info!(
        watch_links = builder.watch_links.len(),
        max_upcoming = ?builder.max_upcoming,
        "schedule builder configured"
    );

    let state = AppState {
        store,
        builder,
        clock: Arc::new(SystemClock),
        renderer: Arc::new(TemplateRenderer),
    };
    let app = build_router(Arc::new(state), &settings.doc_root);

    let addr: SocketAddr = settings
        .bind_addr
        .parse()
        .with_context(|| format!("invalid bind address '{}'", settings.bind_addr))?;
    info!(%addr, doc_root = %settings.doc_root.display(), "server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>, doc_root: &Path) -> Router {
    let mut router = Router::new()
        .route("/healthz", get(healthz))
        .route("/", page_route(schedule_page))
        .route(
            "/schedule",
            get(schedule_redirect).fallback(method_not_allowed),
        )
        .route("/schedule/", page_route(schedule_page))
        .route("/schedule/*rest", page_route(schedule_page))
        .route("/upcoming", page_route(upcoming_page))
        .fallback(unrouted_page);

    for dir in STATIC_DIRS {
        router = router.nest_service(&format!("/{dir}"), ServeDir::new(doc_root.join(dir)));
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

/// GET only. An explicit HEAD handler stops axum from answering HEAD with
/// the GET handler.
fn page_route<H, T>(handler: H) -> MethodRouter<Arc<AppState>>
where
    H: Handler<T, Arc<AppState>>,
    T: 'static,
{
    get(handler)
        .head(method_not_allowed)
        .fallback(method_not_allowed)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn schedule_page(State(state): State<Arc<AppState>>) -> Result<Html<String>, PageError> {
    let view = state
        .builder
        .build_all_episodes_view(state.store.snapshot(), state.clock.today());
    render(&state, Page::Schedule, &view)
}

async fn schedule_redirect() -> impl IntoResponse {
    (
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, "/schedule/")],
    )
}

/// Any other path shows the schedule, like `/`.
async fn unrouted_page(
    method: Method,
    state: State<Arc<AppState>>,
) -> Result<Html<String>, PageError> {
    if method != Method::GET {
        return Err(PageError::MethodNotAllowed);
    }
    schedule_page(state).await
}

async fn upcoming_page(State(state): State<Arc<AppState>>) -> Result<Html<String>, PageError> {
    let view = state
        .builder
        .build_upcoming_view(state.store.snapshot(), state.clock.today());
    render(&state, Page::Upcoming, &view)
}

async fn method_not_allowed() -> PageError {
    PageError::MethodNotAllowed
}

fn render(
    state: &AppState,
    page: Page,
    view: &ScheduleViewModel,
) -> Result<Html<String>, PageError> {
    let body = state.renderer.render(page, view)?;
    Ok(Html(body))
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
