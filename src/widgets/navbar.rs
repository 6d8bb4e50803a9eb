//! Navigation bar entries

use crate::state::AuthState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub link: &'static str,
}

/// Entries visible for the current session
pub fn nav_items(state: &AuthState) -> Vec<NavItem> {
    let mut items = vec![
        NavItem { name: "Home", link: "/" },
        NavItem { name: "Events", link: "/events" },
        NavItem { name: "About", link: "/about" },
    ];

    if let Some(user) = state.user() {
        items.push(NavItem { name: "Dashboard", link: "/dashboard" });
        if user.is_admin() {
            items.push(NavItem { name: "Admin Panel", link: "/admin" });
        }
    }

    items
}

/// One-line navbar with the session owner on the right
pub fn render_navbar(state: &AuthState) -> String {
    let links: Vec<&str> = nav_items(state).iter().map(|item| item.name).collect();
    let who = match state {
        AuthState::Authenticated(user) => format!("Logged in as: {}", user.username),
        AuthState::Loading => "...".to_string(),
        AuthState::Unauthenticated => "Login | Sign Up".to_string(),
    };
    format!("{}   {}", links.join(" | "), who)
}
