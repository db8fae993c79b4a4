//! Admin gate middleware.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use super::AppState;
use crate::guard::{self, Access, LOGIN_PATH};

/// Run the route guard against the current session.
///
/// Refused requests get a `303 See Other` to the login path.
pub async fn require_admin(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let access = {
        let session = state.session.lock().expect("session lock poisoned");
        guard::check(&session)
    };

    match access {
        Access::Granted => next.run(request).await,
        Access::RedirectToLogin => {
            tracing::warn!(
                "Redirecting unauthenticated request for {} to login",
                request.uri().path()
            );
            Redirect::to(LOGIN_PATH).into_response()
        }
    }
}
