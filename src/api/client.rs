//! HTTP API Client
//!
//! Functions for communicating with the PetCare REST API. Every request is
//! credentialed, bounded by a 10 second timeout, and decoded as JSON. Errors
//! are never retried here; callers decide what a failure means.

use chrono::NaiveDate;
use futures_util::future::{select, Either};
use futures_util::pin_mut;
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::future::TimeoutFuture;
use serde::Deserialize;
use web_sys::RequestCredentials;

use crate::api::error::{ApiError, ErrorBody};
use crate::state::global::DashboardPayload;

/// Default API base URL, same-origin (the dev server proxies /api)
pub const DEFAULT_API_BASE: &str = "/api/v1";

/// Client-side request timeout in milliseconds
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("petcare_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    normalize_base(&url)
}

/// Normalize a configured base URL: no trailing slash.
fn normalize_base(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

// ============ Response Types ============

/// One appointment as served by the schedule API (admin calendar)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Appointment {
    pub id: u32,
    pub pet_name: String,
    pub service_name: String,
    /// Appointment start, ISO datetime
    pub schedule_time: chrono::DateTime<chrono::Utc>,
    /// Duration in minutes; the serializer may omit it
    #[serde(default = "default_service_duration")]
    pub service_duration: u32,
    pub status: AppointmentStatus,
}

fn default_service_duration() -> u32 {
    30
}

/// Appointment lifecycle states, owned entirely by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Completed,
    Canceled,
}

impl AppointmentStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "confirmed" => Some(Self::Confirmed),
            "completed" => Some(Self::Completed),
            "canceled" => Some(Self::Canceled),
            _ => None,
        }
    }

    /// Background color used for calendar entries and status chips
    pub fn css_color(&self) -> &'static str {
        match self {
            Self::Confirmed => "#10b981",
            Self::Pending => "#f59e0b",
            Self::Canceled => "#ef4444",
            Self::Completed => "#6b7280",
        }
    }

    pub fn label_pt(&self) -> &'static str {
        match self {
            Self::Pending => "Pendente",
            Self::Confirmed => "Confirmado",
            Self::Completed => "Concluído",
            Self::Canceled => "Cancelado",
        }
    }
}

/// A bookable service (appointment form selector)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Service {
    pub id: u32,
    pub name: String,
}

/// A sellable product with its stock lots (sale form selectors)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub lots: Vec<ProductLot>,
}

/// One stock lot of a product
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductLot {
    pub id: u32,
    #[serde(default)]
    pub lot_number: Option<String>,
}

impl ProductLot {
    /// Label shown in the lot selector
    pub fn display_label(&self) -> String {
        match &self.lot_number {
            Some(number) if !number.is_empty() => number.clone(),
            _ => format!("Lote {}", self.id),
        }
    }
}

/// Price lookup body: `{ "price": "12.34" }`
#[derive(Debug, Deserialize)]
struct PriceResponse {
    price: String,
}

// ============ Request plumbing ============

/// Send a credentialed request, racing it against the client timeout.
async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
    let request = builder
        .credentials(RequestCredentials::Include)
        .build()
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let request_future = request.send();
    pin_mut!(request_future);

    let timeout = TimeoutFuture::new(REQUEST_TIMEOUT_MS);

    match select(request_future, timeout).await {
        Either::Left((result, _)) => result.map_err(|e| ApiError::Network(e.to_string())),
        Either::Right(((), _)) => Err(ApiError::Timeout),
    }
}

/// Turn a non-2xx response into an `ApiError::Http`, salvaging the backend's
/// error body when it decodes.
async fn http_error(response: Response) -> ApiError {
    let status = response.status();
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.message().unwrap_or_default(),
        Err(_) => String::new(),
    };
    ApiError::Http { status, message }
}

/// GET a URL and decode the JSON body.
async fn get_json<T: for<'de> Deserialize<'de>>(url: &str) -> Result<T, ApiError> {
    let response = send(Request::get(url)).await?;

    if !response.ok() {
        return Err(http_error(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

// ============ API Functions ============

/// Fetch the aggregated dashboard payload for a trailing window of `days`.
pub async fn fetch_dashboard(days: u32) -> Result<DashboardPayload, ApiError> {
    let url = format!("{}/analytics/dashboard/?days={}", get_api_base(), days);
    get_json(&url).await
}

/// Fetch all appointments for the admin calendar.
pub async fn fetch_appointments() -> Result<Vec<Appointment>, ApiError> {
    let url = format!("{}/schedule/appointments/", get_api_base());
    get_json(&url).await
}

/// Fetch the open time slots for a service on a date.
///
/// Slots come back as "HH:MM" strings, already filtered against the working
/// schedule and existing bookings by the backend.
pub async fn fetch_available_slots(
    date: NaiveDate,
    service_id: u32,
) -> Result<Vec<String>, ApiError> {
    let url = format!(
        "{}/schedule/available-slots/?date={}&service_id={}",
        get_api_base(),
        date.format("%Y-%m-%d"),
        service_id,
    );
    get_json(&url).await
}

/// Fetch the services offered, for the appointment form selector.
pub async fn fetch_services() -> Result<Vec<Service>, ApiError> {
    let url = format!("{}/schedule/services/", get_api_base());
    get_json(&url).await
}

/// Fetch the product list (with lots), for the sale form selectors.
pub async fn fetch_products() -> Result<Vec<Product>, ApiError> {
    let url = format!("{}/store/products/", get_api_base());
    get_json(&url).await
}

/// Fetch the current unit price of a product.
pub async fn fetch_product_price(product_id: u32) -> Result<f64, ApiError> {
    let url = format!("{}/store/products/{}/price/", get_api_base(), product_id);
    fetch_price(&url).await
}

/// Fetch the final price of a specific product lot (promotions applied).
pub async fn fetch_lot_price(lot_id: u32) -> Result<f64, ApiError> {
    let url = format!("{}/store/lots/{}/price/", get_api_base(), lot_id);
    fetch_price(&url).await
}

async fn fetch_price(url: &str) -> Result<f64, ApiError> {
    let body: PriceResponse = get_json(url).await?;
    body.price
        .parse::<f64>()
        .map_err(|e| ApiError::Decode(format!("price '{}': {}", body.price, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_base_strips_trailing_slash() {
        assert_eq!(normalize_base("/api/v1/"), "/api/v1");
        assert_eq!(normalize_base("/api/v1"), "/api/v1");
        assert_eq!(normalize_base("http://localhost:8000/api/v1///"), "http://localhost:8000/api/v1");
    }

    #[test]
    fn appointment_decodes_with_and_without_duration() {
        let json = r#"{
            "id": 12,
            "pet": 3,
            "pet_name": "Thor",
            "service": 1,
            "service_name": "Banho e Tosa",
            "schedule_time": "2024-05-02T13:30:00Z",
            "status": "confirmed",
            "notes": ""
        }"#;
        let appointment: Appointment = serde_json::from_str(json).unwrap();
        assert_eq!(appointment.pet_name, "Thor");
        assert_eq!(appointment.service_duration, 30);
        assert_eq!(appointment.status, AppointmentStatus::Confirmed);

        let json = r#"{
            "id": 13,
            "pet_name": "Mel",
            "service_name": "Consulta",
            "schedule_time": "2024-05-02T15:00:00Z",
            "service_duration": 45,
            "status": "pending"
        }"#;
        let appointment: Appointment = serde_json::from_str(json).unwrap();
        assert_eq!(appointment.service_duration, 45);
        assert_eq!(appointment.status, AppointmentStatus::Pending);
    }

    #[test]
    fn status_parse_matches_wire_values() {
        assert_eq!(
            AppointmentStatus::parse("confirmed"),
            Some(AppointmentStatus::Confirmed)
        );
        assert_eq!(
            AppointmentStatus::parse("canceled"),
            Some(AppointmentStatus::Canceled)
        );
        assert_eq!(AppointmentStatus::parse("no-show"), None);
    }

    #[test]
    fn lot_label_falls_back_to_id() {
        let lot = ProductLot {
            id: 7,
            lot_number: Some("L-2024-01".into()),
        };
        assert_eq!(lot.display_label(), "L-2024-01");

        let lot = ProductLot {
            id: 7,
            lot_number: None,
        };
        assert_eq!(lot.display_label(), "Lote 7");
    }

    #[test]
    fn price_body_parses_decimal_string() {
        let body: PriceResponse = serde_json::from_str(r#"{"price": "49.90"}"#).unwrap();
        assert_eq!(body.price.parse::<f64>().unwrap(), 49.90);
    }
}
