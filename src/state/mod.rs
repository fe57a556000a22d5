//! State Management
//!
//! Global dashboard state and the fetch controller.

pub mod global;

pub use global::{
    provide_global_state, DailyMetric, DashboardPayload, GlobalState, StatusCount, TopProduct,
};
