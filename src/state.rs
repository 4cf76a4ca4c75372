//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! only thing handlers share is the pre-rendered document, held as `Bytes`
//! so each response is a reference-count bump rather than a copy.

use axum::body::Bytes;

use crate::page::{self, PageOptions};

/// Clone is required by Axum; `Bytes` clones are cheap.
#[derive(Clone)]
pub struct AppState {
    pub page: Bytes,
    pub dev: bool,
}

impl AppState {
    #[must_use]
    pub fn new(options: PageOptions) -> Self {
        Self { page: Bytes::from(page::render(options)), dev: options.dev }
    }
}
