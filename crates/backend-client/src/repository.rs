//! Repository Layer - Core Traits
//!
//! The seam pages are written against: list a table newest-first, insert
//! one draft. [`TableClient`] implements it over HTTP; tests use in-memory
//! fakes.

use async_trait::async_trait;

use crate::error::BackendResult;
use crate::models::Table;
use crate::query::Select;
use crate::table::TableClient;

/// List/insert access to one table.
///
/// Browser futures are not `Send`, so the wasm build drops that bound.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait Repository<T: Table> {
    /// All rows, most recently created first.
    async fn list_recent(&self) -> BackendResult<Vec<T>>;

    /// Insert one row built from `draft`.
    async fn insert(&self, draft: &T::Draft) -> BackendResult<()>;
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl<T: Table> Repository<T> for TableClient {
    async fn list_recent(&self) -> BackendResult<Vec<T>> {
        self.select(T::NAME, &Select::all().recent_first()).await
    }

    async fn insert(&self, draft: &T::Draft) -> BackendResult<()> {
        TableClient::insert(self, T::NAME, draft).await
    }
}
