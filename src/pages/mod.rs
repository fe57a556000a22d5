//! Pages
//!
//! Top-level page components for each route.

pub mod appointment_form;
pub mod calendar;
pub mod dashboard;
pub mod sale_form;

pub use appointment_form::AppointmentForm;
pub use calendar::Calendar;
pub use dashboard::Dashboard;
pub use sale_form::SaleForm;
