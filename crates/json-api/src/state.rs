//! State

use std::sync::Arc;

use panggilin_app::{context::AppContext, messages::{ErrorMessages, SuccessMessages}};

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext) -> Self {
        Self { app }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext) -> Arc<Self> {
        Arc::new(Self::new(app))
    }

    pub(crate) fn errors(&self) -> &ErrorMessages {
        &self.app.messages.errors
    }

    pub(crate) fn success(&self) -> &SuccessMessages {
        &self.app.messages.success
    }
}
