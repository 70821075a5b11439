//! UI Components
//!
//! Reusable Leptos components shared across pages.

pub mod chart;
pub mod countdown_ring;
pub mod heatmap;
pub mod nav;
pub mod status_pill;
pub mod toast;

pub use chart::{BarChart, ChartData, LineChart, Series};
pub use countdown_ring::CountdownRing;
pub use heatmap::Heatmap;
pub use nav::Nav;
pub use status_pill::{OpenPill, StatusPill};
pub use toast::Toast;
