//! PetCare Admin Dashboard
//!
//! Business analytics dashboard and admin tooling for a pet-care service,
//! built with Leptos (WASM).
//!
//! # Features
//!
//! - Revenue, appointment and customer metrics over a selectable window
//! - Appointment calendar for the staff
//! - Admin form helpers: available-slot lookup, price autofill, sale totals
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All data comes from the PetCare REST API; the app holds no
//! state of its own beyond the last payload it fetched.

use leptos::*;

mod api;
mod app;
mod components;
mod format;
mod log;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
