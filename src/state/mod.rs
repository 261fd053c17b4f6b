//! State Management
//!
//! Reactive global state, session persistence, and the pure view-state
//! machines behind the calendar and the emotion drill-down.

pub mod calendar;
pub mod drilldown;
pub mod global;
pub mod session;

pub use calendar::MonthView;
pub use global::{provide_global_state, AppView, Entry, GlobalState};
pub use session::Session;
