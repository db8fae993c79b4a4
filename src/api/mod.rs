mod handlers;
mod validation;
pub mod middleware;

use std::sync::{Arc, Mutex};

use axum::{
    http::HeaderValue,
    routing::{get, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::Config;
use crate::db::SharedStorage;
use crate::guard::LOGIN_PATH;
use crate::store::{ContentStore, IdGenerator, SessionStore, StoreError};

/// Shared handles to both stores.
///
/// Each store sits behind its own mutex. Handlers take the lock for one
/// operation and release it before any await.
///
/// # One session per server
/// There is a single [`SessionStore`], not one per client. After anyone signs
/// in (over HTTP or with `folio login` on the same storage file) every client
/// passes the admin gate until someone signs out. Run the server for a single
/// operator on a trusted host; this is not access control.
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<Mutex<ContentStore>>,
    pub session: Arc<Mutex<SessionStore>>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(content: ContentStore, session: SessionStore, config: Config) -> Self {
        Self {
            content: Arc::new(Mutex::new(content)),
            session: Arc::new(Mutex::new(session)),
            config: Arc::new(config),
        }
    }

    /// Load both stores from one storage.
    pub fn load(
        storage: SharedStorage,
        ids: Box<dyn IdGenerator>,
        config: Config,
    ) -> Result<Self, StoreError> {
        let content = ContentStore::load(storage.clone(), ids)?;
        let session = SessionStore::load(storage, config.credentials.clone())?;
        Ok(Self::new(content, session, config))
    }
}

pub fn create_router(state: AppState) -> Router {
    let admin = Router::new()
        .route("/admin", get(handlers::admin_dashboard))
        .route("/admin/personal-info", put(handlers::update_personal_info))
        .route(
            "/admin/resume",
            put(handlers::set_resume).delete(handlers::remove_resume),
        )
        .route("/admin/resume/upload", post(handlers::upload_resume))
        // Projects
        .route("/admin/projects", post(handlers::add_project))
        .route(
            "/admin/projects/{id}",
            put(handlers::update_project).delete(handlers::delete_project),
        )
        // Experience
        .route("/admin/experience", post(handlers::add_experience))
        .route(
            "/admin/experience/{id}",
            put(handlers::update_experience).delete(handlers::delete_experience),
        )
        // Skills
        .route("/admin/skills", post(handlers::add_skill))
        .route(
            "/admin/skills/{id}",
            put(handlers::update_skill).delete(handlers::delete_skill),
        )
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::require_admin,
        ));

    let api = Router::new()
        // Portfolio
        .route("/portfolio", get(handlers::get_portfolio))
        .route("/portfolio/personal-info", get(handlers::get_personal_info))
        .route("/portfolio/projects", get(handlers::list_projects))
        .route("/portfolio/experience", get(handlers::list_experience))
        .route("/portfolio/skills", get(handlers::list_skills))
        .route("/portfolio/skills/categories", get(handlers::list_skill_groups))
        // Session
        .route("/session", get(handlers::session_status))
        .route("/session/login", post(handlers::login))
        .route("/session/logout", post(handlers::logout))
        // Health
        .route("/health", get(handlers::health))
        .merge(admin);

    let cors = cors_layer(state.config.cors_origins.as_deref());

    Router::new()
        .nest("/api/v1", api)
        .route(LOGIN_PATH, get(handlers::login_hint))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

fn cors_layer(origins: Option<&[String]>) -> CorsLayer {
    // No configured origins: same-origin only
    let Some(origins) = origins else {
        return CorsLayer::new();
    };

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}
