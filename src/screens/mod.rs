//! Full-screen views, one per route.
//!
//! - **Dashboard** ([`dashboard`]): header, map, speedometer and stats with
//!   staggered entrance animations
//! - **Login** ([`login`]): auth group placeholder with a sign-in button
//! - **Logs** ([`logs`]): on-screen log viewer, pushed on top of the dashboard
//!
//! Screens draw onto a display that the caller has already cleared to the
//! theme background.

pub mod dashboard;
pub mod login;
pub mod logs;

pub use dashboard::{DashboardView, draw_dashboard};
pub use login::draw_login;
pub use logs::draw_logs_page;
