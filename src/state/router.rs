//! Route table and access gate
//!
//! Maps paths to pages and decides, given the session state, whether a page
//! renders, shows a placeholder, redirects to login, or is denied.

use crate::models::Role;
use super::session::AuthState;

/// Every page the client knows about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Login,
    Signup,
    Events,
    EventDetails(String),
    Dashboard,
    Admin,
    NotFound(String),
}

impl Route {
    /// Resolve a path; any query string is ignored
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["about"] => Route::About,
            ["login"] => Route::Login,
            ["signup"] => Route::Signup,
            ["events"] => Route::Events,
            ["events", id] => Route::EventDetails((*id).to_string()),
            ["dashboard"] => Route::Dashboard,
            ["admin"] => Route::Admin,
            _ => Route::NotFound(path.to_string()),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::About => "/about".to_string(),
            Route::Login => "/login".to_string(),
            Route::Signup => "/signup".to_string(),
            Route::Events => "/events".to_string(),
            Route::EventDetails(id) => format!("/events/{}", id),
            Route::Dashboard => "/dashboard".to_string(),
            Route::Admin => "/admin".to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }

    /// Requires a logged-in user
    pub fn is_protected(&self) -> bool {
        matches!(self, Route::Dashboard | Route::Admin)
    }

    /// Additionally requires the admin role
    pub fn is_admin_only(&self) -> bool {
        matches!(self, Route::Admin)
    }
}

/// What the gate decided for a route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    /// Session check still running
    Placeholder,
    Render(Route),
    Redirect(String),
    AccessDenied { role: Role },
}

/// Gate applied to every navigation
#[derive(Debug, Clone)]
pub struct RouteGuard {
    login_path: String,
}

impl RouteGuard {
    pub fn new(login_path: impl Into<String>) -> Self {
        Self { login_path: login_path.into() }
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    pub fn resolve(&self, route: Route, state: &AuthState) -> RouteOutcome {
        if !route.is_protected() {
            return RouteOutcome::Render(route);
        }

        match state {
            AuthState::Loading => RouteOutcome::Placeholder,
            AuthState::Unauthenticated => RouteOutcome::Redirect(self.login_path.clone()),
            AuthState::Authenticated(user) if route.is_admin_only() && !user.is_admin() => {
                RouteOutcome::AccessDenied { role: user.role.clone() }
            }
            AuthState::Authenticated(_) => RouteOutcome::Render(route),
        }
    }
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self::new("/login")
    }
}
