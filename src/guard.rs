//! Admin route guard.

use crate::store::SessionStore;

/// Where the login view lives; refused requests are sent here.
pub const LOGIN_PATH: &str = "/login";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    RedirectToLogin,
}

/// Allow the admin views only to a signed-in admin.
pub fn check(session: &SessionStore) -> Access {
    if session.is_authenticated() && session.is_admin() {
        Access::Granted
    } else {
        Access::RedirectToLogin
    }
}
