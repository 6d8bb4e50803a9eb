//! Presentational widgets
//!
//! Text renderings of the client's UI pieces. Widgets hold at most their own
//! selection state and never talk to the backend.

pub mod calendar;
pub mod card;
pub mod loader;
pub mod navbar;
pub mod notice;
pub mod time_picker;
pub mod toast;

pub use calendar::Calendar;
pub use loader::{render_loader, LoaderSize};
pub use navbar::{nav_items, render_navbar, NavItem};
pub use notice::{render_about, render_not_found};
pub use time_picker::TimePicker;
pub use toast::{Toast, ToastKind, ToastQueue};
