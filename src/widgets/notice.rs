//! Static pages: about and not found

/// Feature blurbs shown on the about page
pub const FEATURES: [(&str, &str); 4] = [
    ("Easy Discovery", "Find events with powerful filtering options"),
    ("Quick Registration", "Seamless event registration process"),
    ("Personal Dashboard", "Track your registered events"),
    ("Admin Panel", "Robust event management tools"),
];

pub fn render_about() -> String {
    let mut out = String::from("About CampusEvents\n\nWhat We Offer\n");
    for (title, blurb) in FEATURES {
        out.push_str(&format!("  {:<20}{}\n", title, blurb));
    }
    out.push_str("\nReady to Get Started?\n");
    out.push_str("  campus-events events      browse everything on campus\n");
    out.push_str("  campus-events signup ...  create an account\n");
    out
}

pub fn render_not_found(path: &str) -> String {
    format!(
        "404\nPage Not Found\nOops! The page you are looking for does not exist: {}\nGo home: campus-events home\n",
        path
    )
}
