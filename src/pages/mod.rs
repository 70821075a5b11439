//! Pages
//!
//! Top-level page components for each route.

pub mod analytics;
pub mod dashboard;
pub mod join;
pub mod login;
pub mod manage;
pub mod status;

pub use analytics::Analytics;
pub use dashboard::Dashboard;
pub use join::Join;
pub use login::Login;
pub use manage::Manage;
pub use status::Status;
