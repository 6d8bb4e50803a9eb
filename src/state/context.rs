//! Application-wide context
//!
//! One object carrying settings, gateways, the session holder and the toast
//! queue. Built once at startup and handed to every page.

use std::sync::Arc;

use crate::Settings;
use crate::ServiceFactory;
use crate::utils::errors::Result;
use crate::widgets::toast::ToastQueue;
use super::router::RouteGuard;
use super::session::{AuthState, SessionHolder};

#[derive(Debug, Clone)]
pub struct AppContext {
    pub settings: Settings,
    pub services: Arc<ServiceFactory>,
    pub session: SessionHolder,
    pub toasts: ToastQueue,
    pub guard: RouteGuard,
}

impl AppContext {
    /// Create a new AppContext from settings; the session starts as `Loading`
    pub fn new(settings: Settings) -> Result<Self> {
        let services = Arc::new(ServiceFactory::new(&settings)?);
        Ok(Self::from_factory(services, settings))
    }

    /// Create from an existing ServiceFactory
    pub fn from_factory(services: Arc<ServiceFactory>, settings: Settings) -> Self {
        let session = SessionHolder::new(services.auth_service.clone());
        let toasts = ToastQueue::new(settings.toast_timeout());
        let guard = RouteGuard::new(settings.ui.login_path.clone());

        Self {
            settings,
            services,
            session,
            toasts,
            guard,
        }
    }

    /// Create the context and run the initial session check
    pub async fn bootstrap(settings: Settings) -> Result<(Self, AuthState)> {
        let ctx = Self::new(settings)?;
        let state = ctx.session.initialize().await;
        Ok((ctx, state))
    }
}
