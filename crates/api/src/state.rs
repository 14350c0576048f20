use std::sync::Arc;

use mix_masters_core::content::ContentStore;
use mix_masters_core::email::Mailer;
use mix_masters_core::registration::RegistrationStore;

use crate::config::AppConfig;

/// Shared application state, passed to all handlers via Axum's `State`
/// extractor. Wrapped in `Arc` so cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    config: AppConfig,
    content: ContentStore,
    registrations: RegistrationStore,
    mailer: Mailer,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        content: ContentStore,
        registrations: RegistrationStore,
        mailer: Mailer,
    ) -> Self {
        Self {
            inner: Arc::new(InnerState {
                config,
                content,
                registrations,
                mailer,
            }),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    pub fn content(&self) -> &ContentStore {
        &self.inner.content
    }

    pub fn registrations(&self) -> &RegistrationStore {
        &self.inner.registrations
    }

    pub fn mailer(&self) -> &Mailer {
        &self.inner.mailer
    }
}
