//! State Management
//!
//! Global reactive state and the ticket status polling controller.

pub mod global;
pub mod poller;

pub use global::{provide_global_state, GlobalState};
pub use poller::{Countdown, StatusPoller};
