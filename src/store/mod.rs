//! Stateful stores over local storage.
//!
//! [`ContentStore`] owns the portfolio document, [`SessionStore`] owns the
//! signed-in identity. Both load once at construction and write through to
//! [`Storage`](crate::db::Storage) on every mutation. Neither knows about the
//! other.

mod content;
mod ids;
mod session;

pub use content::*;
pub use ids::*;
pub use session::*;

use thiserror::Error;

/// Failures surfaced by the stores.
///
/// Missing ids are not errors: updates and deletes of an unknown id are
/// silent no-ops.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Storage(#[from] anyhow::Error),

    #[error("stored value under `{key}` is not valid: {error}")]
    Corrupt {
        key: &'static str,
        #[source]
        error: serde_json::Error,
    },

    #[error("failed to serialize value for `{key}`: {error}")]
    Serialize {
        key: &'static str,
        #[source]
        error: serde_json::Error,
    },
}
