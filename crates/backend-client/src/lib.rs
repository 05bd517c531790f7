//! Backend Client
//!
//! Typed access to the hosted backend behind the dashboard:
//! - tables: PostgREST-style row listing, counting and inserts
//! - auth: password sign-in, sign-up, refresh and sign-out
//! - repository: the list/insert seam the pages are written against
//!
//! Every request carries the project's anon key. Table requests made with
//! a signed-in session additionally carry the user's access token so that
//! row-level policies on the backend apply.

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod repository;
pub mod table;

pub use auth::{AuthClient, Session, SignUp, User};
pub use config::{BackendConfig, ConfigError};
pub use error::{BackendError, BackendResult};
pub use query::{Counted, Order, Select};
pub use repository::Repository;
pub use table::TableClient;

/// Build the shared HTTP client.
///
/// Timeouts are only configurable on native targets; in the browser the
/// fetch API owns request lifetimes.
pub(crate) fn http_client(config: &BackendConfig) -> BackendResult<reqwest::Client> {
    let builder = reqwest::Client::builder();
    #[cfg(not(target_arch = "wasm32"))]
    let builder = builder.timeout(std::time::Duration::from_secs(config.timeout_secs));
    #[cfg(target_arch = "wasm32")]
    let _ = config;
    builder.build().map_err(|e| BackendError::Http {
        endpoint: "client_init".into(),
        source: e,
    })
}
