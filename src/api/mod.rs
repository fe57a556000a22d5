//! HTTP API
//!
//! Client functions and error types for the PetCare REST API.

pub mod client;
pub mod error;

pub use client::*;
pub use error::ApiError;
