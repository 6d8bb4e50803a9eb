//! Client state module
//!
//! Session tracking, route gating and the application context.

pub mod context;
pub mod router;
pub mod session;

pub use context::AppContext;
pub use router::{Route, RouteGuard, RouteOutcome};
pub use session::{AuthState, SessionHolder};
