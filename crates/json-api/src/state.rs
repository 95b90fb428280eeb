//! State

use std::sync::Arc;

use bodegas_app::context::AppContext;

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,

    /// Absolute base for `Location` headers, without a trailing slash.
    pub(crate) base_url: String,

    /// Supervisor shown on the floor plan.
    pub(crate) supervisor: String,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, base_url: &str, supervisor: &str) -> Self {
        Self {
            app,
            base_url: base_url.trim_end_matches('/').to_string(),
            supervisor: supervisor.to_string(),
        }
    }

    #[must_use]
    pub(crate) fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Absolute URL of a bodega resource.
    pub(crate) fn bodega_url(&self, id: &str) -> String {
        format!("{}/bodegas/{id}", self.base_url)
    }
}
